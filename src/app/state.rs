use crate::{
  app::page::DEBUG_PAGE,
  sim::{Screen, ViewName},
  ui::{KeyEventEx, State},
};
use crossterm::event::{KeyCode, KeyEvent};

mod blank_state;
mod dash_state;
mod landing_state;
mod login_state;
mod quit_state;
mod register_state;
mod role_state;

pub use blank_state::BlankState;
pub use dash_state::{OfficerDashState, TouristDashState};
pub use landing_state::LandingState;
pub use login_state::LoginState;
pub use quit_state::QuitState;
pub use register_state::RegisterState;
pub use role_state::RoleState;

/// 退出确认状态的索引，与视图状态的索引错开
pub const QUIT_STATE: usize = 100;

/// 没有任何视图可见时的状态
pub const BLANK_STATE: usize = 101;

pub trait StateBuilder {
  /// 构建 sm 的一个状态
  fn build(self) -> State;
}

/// 视图对应的状态索引
pub fn state_of(view: ViewName) -> usize {
  view as usize
}

/// 画面对应的状态索引
pub fn state_for(screen: Screen) -> usize {
  screen.view().map(state_of).unwrap_or(BLANK_STATE)
}

/// 用于扩展 State 以支持各个视图共有的按键
pub trait CommonStateEx {
  /// 'ctrl d' 开关调试页面，'alt d' 全屏开关调试页面
  fn debuggable(self) -> Self;

  /// 'q' 询问是否退出
  fn quittable(self) -> Self;
}

impl CommonStateEx for State {
  fn debuggable(self) -> Self {
    self
      .action(KeyEvent::ctrl('d'), |pager| pager.toggle_right(DEBUG_PAGE))
      .action(KeyEvent::alt('d'), |pager| pager.toggle_full(DEBUG_PAGE))
  }

  fn quittable(self) -> Self {
    self.goto(KeyEvent::plain('q'), QUIT_STATE)
  }
}

/// 'esc' 的按键事件
pub(crate) fn esc() -> KeyEvent {
  KeyEvent::simple(KeyCode::Esc)
}
