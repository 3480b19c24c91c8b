mod key_event_ex;
pub mod pager;
pub mod state_machine;
pub mod status_bar;
mod text_input;
pub mod view_port;

pub use key_event_ex::KeyEventEx;
pub use pager::{Page, PageState, Pager};
pub use state_machine::{State, StateMachine};
pub use status_bar::StatusBar;
pub use text_input::{Edit, TextInput};
pub use view_port::ViewPort;
