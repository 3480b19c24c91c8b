use crate::{
  app::{
    CommonStateEx, StateBuilder,
    controller::{AppController, ServiceController},
    state::esc,
  },
  sim::ViewName,
  ui::{KeyEventEx, State},
};
use crossterm::event::KeyEvent;
use std::{cell::RefCell, rc::Rc};

pub struct RegisterState {
  app_controller: Rc<RefCell<AppController>>,
  service_controller: Rc<RefCell<ServiceController>>,
  state: State,
}

impl RegisterState {
  pub fn new(
    app_controller: Rc<RefCell<AppController>>,
    service_controller: Rc<RefCell<ServiceController>>,
  ) -> Self {
    Self {
      app_controller,
      service_controller,
      state: State::new("register"),
    }
  }
}

impl StateBuilder for RegisterState {
  fn build(self) -> State {
    let service = self.service_controller;
    let (to_login, to_role) = (self.app_controller.clone(), self.app_controller);
    self
      .state
      .enter_action(|pager| {
        pager
          .status()
          .set_tips("press 'v' verify with DigiLocker, 'l' go to login, 'esc' back")
      })
      .action(KeyEvent::plain('v'), move |_| service.borrow_mut().want_verify())
      .action(KeyEvent::plain('l'), move |_| {
        to_login.borrow_mut().want_view(ViewName::LoginTourist)
      })
      .action(esc(), move |_| to_role.borrow_mut().want_view(ViewName::RoleSelect))
      .quittable()
      .debuggable()
  }
}
