pub mod commands;
pub mod controller;
pub mod render;
pub mod session;
pub mod state;

pub use commands::Command;
pub use controller::CatalogController;
pub use session::run_session;
pub use state::{CatalogState, FetchStatus};
