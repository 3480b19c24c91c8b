use crate::{
  app::{
    CommonStateEx, StateBuilder,
    controller::{AppController, FormController},
    state::esc,
  },
  sim::{Actor, ViewName},
  ui::{KeyEventEx, State},
};
use crossterm::event::{KeyCode, KeyEvent};
use std::{cell::RefCell, rc::Rc};

/// 在登录表单中输入并提交的状态。字符按键都被当作输入内容，因此不响应 'q'
pub struct LoginState {
  actor: Actor,
  app_controller: Rc<RefCell<AppController>>,
  form_controller: Rc<RefCell<FormController>>,
  state: State,
}

impl LoginState {
  pub fn new(
    actor: Actor,
    app_controller: Rc<RefCell<AppController>>,
    form_controller: Rc<RefCell<FormController>>,
  ) -> Self {
    Self {
      actor,
      app_controller,
      form_controller,
      state: State::new(format!("{actor} login")),
    }
  }
}

impl StateBuilder for LoginState {
  fn build(self) -> State {
    let actor = self.actor;
    let (form, app) = (self.form_controller, self.app_controller);

    let (on_enter, on_input, on_tab, on_submit) = (form.clone(), form.clone(), form.clone(), form);
    self
      .state
      .enter_action(move |pager| {
        on_enter.borrow_mut().reset(actor);
        pager
          .status()
          .set_tips("type to fill in, 'tab' next field, 'enter' login, 'esc' back");
      })
      .input(move |_, edit| on_input.borrow_mut().edit(actor, edit))
      .action(KeyEvent::simple(KeyCode::Tab), move |_| {
        on_tab.borrow_mut().next_field(actor)
      })
      .action(KeyEvent::simple(KeyCode::Enter), move |_| {
        on_submit.borrow_mut().want_submit(actor)
      })
      .action(esc(), move |_| app.borrow_mut().want_view(ViewName::RoleSelect))
      .debuggable()
  }
}
