use crate::sim::{Backend, FeedEvent};

mod app_controller;
mod debug_controller;
mod form_controller;
mod log_controller;
mod notice_controller;
mod service_controller;

pub use app_controller::AppController;
pub use debug_controller::DebugController;
pub use form_controller::{Field, FormController, LoginForm};
pub use log_controller::LogController;
pub use notice_controller::NoticeController;
pub use service_controller::ServiceController;

/// 维护一个页面所需的操作接口、数据接口的逻辑控制器，实现 App 功能。
///
/// 状态只记录用户的操作意图，控制器在主循环中把意图交给后台执行，
/// 再消费后台发出的事件，整理出渲染所需的数据。
pub trait Controller {
  /// 在 App 主处理循环中，把本帧积累的操作意图交给后台
  fn run_once(&mut self, backend: &mut Backend);

  /// 响应后台发出的一个事件
  fn on_event(&mut self, _event: &FeedEvent) {}

  /// 返回是否应该结束程序
  fn should_quit(&self) -> bool {
    false
  }
}
