use crate::{
  app::{
    CommonStateEx, StateBuilder,
    controller::{AppController, LogController, ServiceController},
    state::esc,
  },
  sim::ViewName,
  ui::{KeyEventEx, State},
};
use crossterm::event::{KeyCode, KeyEvent};
use std::{cell::RefCell, rc::Rc};

/// 游客看板的状态
pub struct TouristDashState {
  app_controller: Rc<RefCell<AppController>>,
  service_controller: Rc<RefCell<ServiceController>>,
  state: State,
}

impl TouristDashState {
  pub fn new(
    app_controller: Rc<RefCell<AppController>>,
    service_controller: Rc<RefCell<ServiceController>>,
  ) -> Self {
    Self {
      app_controller,
      service_controller,
      state: State::new("tourist dashboard"),
    }
  }
}

impl StateBuilder for TouristDashState {
  fn build(self) -> State {
    let (service, app) = (self.service_controller, self.app_controller);
    self
      .state
      .enter_action(|pager| pager.status().set_tips("press 's' send SOS, 'esc' logout, 'q' quit"))
      .action(KeyEvent::plain('s'), move |pager| {
        service.borrow_mut().want_sos();
        pager.status().set_error("SOS SIGNAL TRANSMITTED");
      })
      .action(esc(), move |_| app.borrow_mut().want_view(ViewName::Landing))
      .quittable()
      .debuggable()
  }
}

/// 警员看板的状态，负责日志终端的浏览导航
pub struct OfficerDashState {
  app_controller: Rc<RefCell<AppController>>,
  log_controller: Rc<RefCell<LogController>>,
  state: State,
}

impl OfficerDashState {
  pub fn new(
    app_controller: Rc<RefCell<AppController>>,
    log_controller: Rc<RefCell<LogController>>,
  ) -> Self {
    Self {
      app_controller,
      log_controller,
      state: State::new("officer dashboard"),
    }
  }

  /// 添加一个按键动作，控制日志的展示
  fn action(mut self, event: KeyEvent, mut act: impl FnMut(&mut LogController) + 'static) -> Self {
    let ctrl = self.log_controller.clone();
    self.state = self.state.action(event, move |_| {
      act(&mut ctrl.borrow_mut());
    });
    self
  }
}

impl StateBuilder for OfficerDashState {
  fn build(self) -> State {
    let app = self.app_controller.clone();
    self
      .action(KeyEvent::simple(KeyCode::Up), |ctrl| ctrl.move_by_steps(-1))
      .action(KeyEvent::simple(KeyCode::Down), |ctrl| ctrl.move_by_steps(1))
      .action(KeyEvent::simple(KeyCode::PageUp), |ctrl| ctrl.page_up())
      .action(KeyEvent::simple(KeyCode::PageDown), |ctrl| ctrl.page_down())
      .action(KeyEvent::plain('f'), |ctrl| ctrl.follow())
      .state
      .enter_action(|pager| {
        pager
          .status()
          .set_tips("use '▲' '▼' 'pgup' 'pgdn' to scroll, 'f' follow, 'esc' logout")
      })
      .action(esc(), move |_| app.borrow_mut().want_view(ViewName::Landing))
      .quittable()
      .debuggable()
  }
}
