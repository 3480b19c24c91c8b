pub mod app;
pub mod debug;
pub mod sim;
pub mod ui;
