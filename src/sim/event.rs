//! 后台对外发出的数据：日志行、通知，以及可订阅的事件流

use crate::sim::{Actor, FieldMarks, Screen, SosSignal};
use chrono::{DateTime, Local};
use std::{fmt, time::Duration};

/// 事件的严重程度，仅用于展示风格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
  Info,
  Warning,
  Critical,
  Nominal,
}

impl Severity {
  pub fn label(self) -> &'static str {
    match self {
      Severity::Info => "info",
      Severity::Warning => "warn",
      Severity::Critical => "crit",
      Severity::Nominal => "ok",
    }
  }
}

impl fmt::Display for Severity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

/// 日志行的展示标签
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTag {
  /// 后台服务自身的日志（启动、鉴权）
  System,

  /// 事件流产生的告警
  Alert(Severity),
}

/// 终端里的一行日志
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
  /// 产生时的墙上时间
  pub at: DateTime<Local>,

  pub message: String,

  pub tag: LogTag,
}

impl LogLine {
  /// 日志前缀里展示的时刻
  pub fn clock(&self) -> String {
    self.at.format("%H:%M:%S").to_string()
  }
}

impl fmt::Display for LogLine {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[{}] {}", self.clock(), self.message)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoticeId(pub(crate) u64);

/// 通知的展示阶段，离场阶段结束后通知被移除
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
  Shown,
  Leaving,
}

/// 短暂浮现、自动消失的通知
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
  pub id: NoticeId,
  pub message: String,
  pub severity: Severity,

  /// 创建时的虚拟时刻
  pub created: Duration,

  pub phase: Phase,
}

/// 后台发出的事件，按发生的先后排列，由前端消费并渲染
#[derive(Debug, Clone, PartialEq)]
pub enum FeedEvent {
  ViewSwitched(Screen),
  FeedStarted,
  FeedStopped,
  Logged(LogLine),
  Notified(Notification),
  NoticeLeaving(NoticeId),
  NoticeDropped(NoticeId),

  /// 所有通知被一次性清空
  NoticesCleared,

  FieldsMarked(Actor, FieldMarks),
  FieldsCleared(Actor),
  LoginPending(Actor),
  VerifyPending,
  IdentityVerified,
  SosTransmitted(SosSignal),
}
