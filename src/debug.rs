//! 程序自身的调试日志。终端被 TUI 占用时，日志写入环形缓冲区，由调试页面展示；
//! 未启用缓冲区时（例如测试中），直接写到标准错误。

use chrono::{DateTime, Local};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::{collections::VecDeque, sync::Mutex};

/// 展示区里维护的数据条目
#[derive(Clone)]
pub struct Item {
  pub date: DateTime<Local>,
  pub level: Level,
  pub content: String,
}

impl Item {
  pub fn is_error(&self) -> bool {
    self.level <= Level::Warn
  }
}

pub struct Buffer {
  data: VecDeque<Item>,
  limit: usize,

  /// 累计写入的条目数量，用于判断是否有新日志
  written: usize,
}

impl Buffer {
  fn new(limit: usize) -> Self {
    Self {
      data: VecDeque::new(),
      limit: limit.max(1),
      written: 0,
    }
  }

  fn push(&mut self, item: Item) {
    if self.data.len() == self.limit {
      self.data.pop_front();
    }
    self.data.push_back(item);
    self.written += 1;
  }

  pub fn data(&self) -> &VecDeque<Item> {
    &self.data
  }

  pub fn written(&self) -> usize {
    self.written
  }
}

pub static BUFFER: Mutex<Option<Buffer>> = Mutex::new(None);

struct DebugLogger;

static LOGGER: DebugLogger = DebugLogger;

impl Log for DebugLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= log::max_level()
  }

  fn log(&self, record: &Record) {
    if !self.enabled(record.metadata()) {
      return;
    }

    let content = format!("{}: {}", record.target(), record.args());
    let Ok(mut buffer) = BUFFER.lock() else {
      return;
    };

    match buffer.as_mut() {
      None => eprintln!("[{}] {}", record.level(), content),
      Some(buffer) => buffer.push(Item {
        date: Local::now(),
        level: record.level(),
        content,
      }),
    }
  }

  fn flush(&self) {}
}

/// 启用调试缓冲区，并将其注册为 `log` 的输出。重复注册时只替换缓冲区
pub fn enable_debug(buffer_size: usize, level: LevelFilter) {
  if let Ok(mut buffer) = BUFFER.lock() {
    buffer.replace(Buffer::new(buffer_size));
  }

  if log::set_logger(&LOGGER).is_ok() {
    log::set_max_level(level);
  }
}

/// 关闭调试缓冲区，之后的日志写到标准错误
pub fn disable_debug() {
  if let Ok(mut buffer) = BUFFER.lock() {
    buffer.take();
  }
}

/// 拷贝缓冲区里的最新 `count` 条日志，并返回累计写入数量
pub fn snapshot(count: usize) -> (Vec<Item>, usize) {
  match BUFFER.lock() {
    Ok(buffer) => match buffer.as_ref() {
      Some(buffer) => {
        let skip = buffer.data().len().saturating_sub(count);
        (
          buffer.data().iter().skip(skip).cloned().collect(),
          buffer.written(),
        )
      }
      None => (vec![], 0),
    },
    Err(_) => (vec![], 0),
  }
}
