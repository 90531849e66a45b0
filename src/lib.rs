#![warn(clippy::pedantic)]
// Noisy doc/signature lints — would require annotating most pub functions
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
// Style preference — keeping format!("{}", x) over format!("{x}") for readability with complex exprs
#![allow(clippy::uninlined_format_args)]
// Module structure — our modules use the tabs::Tab pattern by design
#![allow(clippy::module_name_repetitions)]

pub mod booking;
pub mod bus;
pub mod cli;
pub mod config;
pub mod errors;
pub mod responder;
pub mod surface;
pub mod tabs;
pub mod timeline;
pub(crate) mod utils;
pub mod widget;

pub use errors::FrontdeskError;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const LOGO: &str = "🛎️";
