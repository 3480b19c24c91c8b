pub mod controller;
mod pace;
pub mod page;
pub mod state;
mod viewer;

pub use controller::Controller;
pub use pace::Pacer;
pub use state::{CommonStateEx, StateBuilder};
pub use viewer::{Config, Viewer};
