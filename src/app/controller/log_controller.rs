use crate::{
  app::Controller,
  sim::{Backend, FeedEvent, LogLine, LogTag},
  ui::ViewPort,
};

/// 警员看板上的系统日志终端
pub struct LogController {
  /// 收到的所有日志行，只增不减
  lines: Vec<LogLine>,

  /// 事件流是否在运行
  live: bool,

  /// 收到的告警数量
  alerts: usize,

  view_port: ViewPort,
}

impl Default for LogController {
  fn default() -> Self {
    let mut res = Self {
      lines: Vec::new(),
      live: false,
      alerts: 0,
      view_port: ViewPort::default(),
    };

    res.view_port.want_follow();
    res
  }
}

impl LogController {
  pub fn lines(&self) -> &[LogLine] {
    &self.lines
  }

  pub fn is_live(&self) -> bool {
    self.live
  }

  pub fn alerts(&self) -> usize {
    self.alerts
  }

  pub fn view_mut(&mut self) -> &mut ViewPort {
    &mut self.view_port
  }

  pub fn move_by_steps(&mut self, steps: isize) {
    self.view_port.want_move(steps);
  }

  pub fn page_up(&mut self) {
    self.view_port.want_page_up();
  }

  pub fn page_down(&mut self) {
    self.view_port.want_page_down();
  }

  pub fn follow(&mut self) {
    self.view_port.want_follow();
  }

  /// 按照展示区高度，取出本帧可见的日志行
  pub fn visible(&mut self, height: usize) -> &[LogLine] {
    self.view_port.set_height(height);
    let range = self.view_port.apply(self.lines.len());
    &self.lines[range]
  }
}

impl Controller for LogController {
  fn run_once(&mut self, _: &mut Backend) {}

  fn on_event(&mut self, event: &FeedEvent) {
    match event {
      FeedEvent::Logged(line) => {
        if matches!(line.tag, LogTag::Alert(_)) {
          self.alerts += 1;
        }
        self.lines.push(line.clone());
      }
      FeedEvent::FeedStarted => self.live = true,
      FeedEvent::FeedStopped => self.live = false,
      _ => {}
    }
  }
}
