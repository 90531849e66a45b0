pub mod events;
pub mod queue;

pub use events::{Command, RenderEvent};
pub use queue::CommandBus;
