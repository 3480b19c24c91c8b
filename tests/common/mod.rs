#![allow(dead_code)]

use chrono::{DateTime, Local, TimeZone};
use rs_safe_tour::sim::{Backend, FeedEvent, RandomSource, Timing};
use std::{collections::VecDeque, time::Duration};

/// 按顺序回放预设选择的随机源，用完后总是选 0
pub struct Scripted(VecDeque<usize>);

impl RandomSource for Scripted {
  fn pick(&mut self, len: usize) -> usize {
    self.0.pop_front().unwrap_or(0) % len.max(1)
  }
}

/// 虚拟时间零点对应的墙上时间
pub fn origin() -> DateTime<Local> {
  Local
    .with_ymd_and_hms(2025, 1, 26, 9, 0, 0)
    .single()
    .expect("unambiguous local time")
}

pub fn backend(picks: &[usize]) -> Backend {
  Backend::new(
    Timing::default(),
    origin(),
    Scripted(picks.iter().copied().collect()),
  )
}

pub fn ms(millis: u64) -> Duration {
  Duration::from_millis(millis)
}

pub fn secs(secs: u64) -> Duration {
  Duration::from_secs(secs)
}

/// 日志行里以 "[ALERT]" 开头的数量
pub fn alert_lines(backend: &Backend) -> usize {
  backend
    .log_lines()
    .iter()
    .filter(|line| line.message.starts_with("[ALERT]"))
    .count()
}

pub fn count_events(events: &[FeedEvent], pred: impl Fn(&FeedEvent) -> bool) -> usize {
  events.iter().filter(|e| pred(e)).count()
}
