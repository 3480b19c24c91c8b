use crate::{
  app::{CommonStateEx, StateBuilder, controller::AppController, state::esc},
  sim::ViewName,
  ui::{KeyEventEx, State},
};
use crossterm::event::KeyEvent;
use std::{cell::RefCell, rc::Rc};

/// 选择身份的状态
pub struct RoleState {
  app_controller: Rc<RefCell<AppController>>,
  state: State,
}

impl RoleState {
  pub fn new(app_controller: Rc<RefCell<AppController>>) -> Self {
    Self {
      app_controller,
      state: State::new("role select"),
    }
  }

  /// 添加一个跳转到指定视图的按键
  fn jump(mut self, event: KeyEvent, view: ViewName) -> Self {
    let ctrl = self.app_controller.clone();
    self.state = self.state.action(event, move |_| ctrl.borrow_mut().want_view(view));
    self
  }
}

impl StateBuilder for RoleState {
  fn build(self) -> State {
    self
      .jump(KeyEvent::plain('t'), ViewName::LoginTourist)
      .jump(KeyEvent::plain('o'), ViewName::LoginOfficer)
      .jump(KeyEvent::plain('r'), ViewName::RegisterTourist)
      .jump(esc(), ViewName::Landing)
      .state
      .enter_action(|pager| {
        pager
          .status()
          .set_tips("press 't' tourist login, 'r' register, 'o' officer login, 'esc' back")
      })
      .quittable()
      .debuggable()
  }
}
