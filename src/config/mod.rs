mod loader;
mod schema;

pub use loader::{get_config_path, load_config, save_config};
pub use schema::Config;

#[cfg(test)]
mod tests;
