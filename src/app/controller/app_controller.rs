use crate::{
  app::Controller,
  sim::{Backend, ViewName},
};

/// 程序级别的控制：视图跳转与退出
#[derive(Default)]
pub struct AppController {
  quit: bool,

  /// 本帧请求跳转的视图
  target: Option<ViewName>,
}

impl AppController {
  pub fn quit(&mut self) {
    self.quit = true;
  }

  /// 请求跳转到指定视图，同一帧内多次请求时以最后一次为准
  pub fn want_view(&mut self, view: ViewName) {
    self.target = Some(view);
  }
}

impl Controller for AppController {
  fn run_once(&mut self, backend: &mut Backend) {
    if let Some(view) = self.target.take() {
      log::debug!("switch view to '{view}'");
      backend.switch_view(view);
    }
  }

  fn should_quit(&self) -> bool {
    self.quit
  }
}
