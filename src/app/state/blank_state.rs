use crate::{
  app::{CommonStateEx, StateBuilder, controller::AppController, state::esc},
  sim::ViewName,
  ui::State,
};
use std::{cell::RefCell, rc::Rc};

/// 切换到无法识别的视图后，所有视图都被隐藏时的状态
pub struct BlankState {
  app_controller: Rc<RefCell<AppController>>,
  state: State,
}

impl BlankState {
  pub fn new(app_controller: Rc<RefCell<AppController>>) -> Self {
    Self {
      app_controller,
      state: State::new("blank"),
    }
  }
}

impl StateBuilder for BlankState {
  fn build(self) -> State {
    let ctrl = self.app_controller;
    self
      .state
      .enter_action(|pager| pager.status().set_tips("press 'esc' to go back home, 'q' to quit"))
      .action(esc(), move |_| ctrl.borrow_mut().want_view(ViewName::Landing))
      .quittable()
      .debuggable()
  }
}
