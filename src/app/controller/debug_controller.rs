use crate::{
  app::Controller,
  debug::{self, Item},
  sim::Backend,
  ui::ViewPort,
};

/// 调试缓冲区里最多拷贝出来的条目数量
const SNAPSHOT_LIMIT: usize = 512;

/// 调试打印展示区的控制器
pub struct DebugController {
  items: Vec<Item>,

  /// 上次拷贝时缓冲区的累计写入数量
  written: usize,

  view_port: ViewPort,
}

impl Default for DebugController {
  fn default() -> Self {
    let mut res = Self {
      items: Vec::new(),
      written: 0,
      view_port: ViewPort::default(),
    };

    res.view_port.want_follow();
    res
  }
}

impl DebugController {
  /// 按照展示区高度，取出本帧可见的调试日志
  pub fn visible(&mut self, height: usize) -> &[Item] {
    self.view_port.set_height(height);
    let range = self.view_port.apply(self.items.len());
    &self.items[range]
  }
}

impl Controller for DebugController {
  fn run_once(&mut self, _: &mut Backend) {
    // 只有缓冲区有新日志时才重新拷贝
    let (items, written) = debug::snapshot(SNAPSHOT_LIMIT);
    if written != self.written {
      self.items = items;
      self.written = written;
    }
  }
}
