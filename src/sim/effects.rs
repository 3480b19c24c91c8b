//! 后台各部件共用的副作用接口：定时、记录日志与通知、随机选择。
//!
//! 各部件只依赖这些能力而不直接持有后台，后台在每次调用时把自己的字段
//! 临时组合成 [Effects] 交给它们使用。

use crate::sim::{
  Actor, FeedEvent, Journal, LogLine, LogTag, NoticeId, RandomSource, Scheduler, Severity,
  TimerHandle, Timeline,
};
use chrono::{DateTime, Local, TimeDelta};
use std::time::Duration;

/// 时间轴上登记的任务种类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
  /// 事件流的一个周期
  FeedTick,

  /// 通知展示结束，开始离场
  HideNotice(NoticeId),

  /// 通知离场结束，移除
  DropNotice(NoticeId),

  /// 清除输入框的错误标记
  ClearMarks(Actor),

  /// 模拟的鉴权请求返回
  FinishLogin(Actor),

  /// 模拟的身份核验返回
  FinishVerify,
}

/// 各种模拟延迟与周期
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
  /// 事件流的周期
  pub tick_period: Duration,

  /// 通知的展示时长
  pub notice_visible: Duration,

  /// 通知的离场动画时长
  pub notice_exit: Duration,

  /// 鉴权请求的延迟
  pub login_delay: Duration,

  /// 身份核验的延迟
  pub verify_delay: Duration,

  /// 输入框错误标记的保留时长
  pub field_error: Duration,
}

impl Default for Timing {
  fn default() -> Self {
    Self {
      tick_period: Duration::from_secs(6),
      notice_visible: Duration::from_secs(4),
      notice_exit: Duration::from_millis(300),
      login_delay: Duration::from_secs(1),
      verify_delay: Duration::from_millis(1500),
      field_error: Duration::from_millis(500),
    }
  }
}

impl Timing {
  /// 一条通知从出现到被移除的总时长
  pub fn notice_lifetime(&self) -> Duration {
    self.notice_visible + self.notice_exit
  }
}

/// 记录日志与通知的能力
pub trait FeedSink {
  /// 追加一行日志
  fn log(&mut self, message: String, tag: LogTag);

  /// 弹出一条通知，到期后自动离场并移除
  fn notify(&mut self, message: String, severity: Severity);

  /// 立即清空所有通知
  fn clear_notices(&mut self);

  /// 发出其他事件
  fn emit(&mut self, event: FeedEvent);
}

/// 事件流所需的全部能力
pub trait FeedEffects: Scheduler<Timer> + FeedSink + RandomSource {}

impl<T> FeedEffects for T where T: Scheduler<Timer> + FeedSink + RandomSource {}

/// 虚拟时刻对应的墙上时间
pub fn wall_clock(origin: DateTime<Local>, now: Duration) -> DateTime<Local> {
  origin + TimeDelta::from_std(now).unwrap_or(TimeDelta::zero())
}

/// 由后台的字段临时组合出的副作用实现
pub struct Effects<'a> {
  pub timeline: &'a mut Timeline<Timer>,
  pub journal: &'a mut Journal,
  pub random: &'a mut dyn RandomSource,
  pub timing: &'a Timing,

  /// 虚拟时间零点对应的墙上时间
  pub origin: DateTime<Local>,
}

impl Scheduler<Timer> for Effects<'_> {
  fn now(&self) -> Duration {
    self.timeline.now()
  }

  fn schedule_once(&mut self, delay: Duration, key: Timer) -> TimerHandle {
    self.timeline.schedule_once(delay, key)
  }

  fn schedule_every(&mut self, period: Duration, key: Timer) -> TimerHandle {
    self.timeline.schedule_every(period, key)
  }

  fn cancel(&mut self, handle: TimerHandle) -> bool {
    self.timeline.cancel(handle)
  }
}

impl FeedSink for Effects<'_> {
  fn log(&mut self, message: String, tag: LogTag) {
    let at = wall_clock(self.origin, self.timeline.now());
    self.journal.append(LogLine { at, message, tag });
  }

  fn notify(&mut self, message: String, severity: Severity) {
    let now = self.timeline.now();
    let notice = self.journal.notices_mut().push(message, severity, now).clone();
    self
      .timeline
      .schedule_once(self.timing.notice_visible, Timer::HideNotice(notice.id));
    self.journal.emit(FeedEvent::Notified(notice));
  }

  fn clear_notices(&mut self) {
    self.journal.clear_notices();
  }

  fn emit(&mut self, event: FeedEvent) {
    self.journal.emit(event);
  }
}

impl RandomSource for Effects<'_> {
  fn pick(&mut self, len: usize) -> usize {
    self.random.pick(len)
  }
}
