use crate::{
  app::{CommonStateEx, StateBuilder, controller::AppController},
  sim::ViewName,
  ui::{KeyEventEx, State},
};
use crossterm::event::{KeyCode, KeyEvent};
use std::{cell::RefCell, rc::Rc};

pub struct LandingState {
  app_controller: Rc<RefCell<AppController>>,
  state: State,
}

impl LandingState {
  pub fn new(app_controller: Rc<RefCell<AppController>>) -> Self {
    Self {
      app_controller,
      state: State::new("landing"),
    }
  }
}

impl StateBuilder for LandingState {
  fn build(self) -> State {
    let ctrl = self.app_controller;
    self
      .state
      .enter_action(|pager| pager.status().set_tips("press 'enter' to begin, 'q' to quit"))
      .action(KeyEvent::simple(KeyCode::Enter), move |_| {
        ctrl.borrow_mut().want_view(ViewName::RoleSelect)
      })
      .quittable()
      .debuggable()
  }
}
