//! 模拟的外部服务：身份核验与 SOS 求救信号

use crate::sim::{FeedEvent, FeedSink, Scheduler, Severity, Timer, Timing};
use std::fmt;

/// 身份核验的进度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verification {
  #[default]
  Unverified,
  Connecting,
  Verified,
}

pub const IDENTITY_CONFIRMED: &str = "DigiLocker API: Identity Confirmed";

/// 模拟的身份核验，请求发出后延迟一段时间返回成功
#[derive(Default)]
pub struct IdentityCheck {
  state: Verification,
}

impl IdentityCheck {
  pub fn state(&self) -> Verification {
    self.state
  }

  /// 发起核验，返回是否真的发起了。核验中或已通过时忽略
  pub fn begin<F>(&mut self, timing: &Timing, fx: &mut F) -> bool
  where
    F: Scheduler<Timer> + FeedSink,
  {
    if self.state != Verification::Unverified {
      return false;
    }

    self.state = Verification::Connecting;
    fx.schedule_once(timing.verify_delay, Timer::FinishVerify);
    fx.emit(FeedEvent::VerifyPending);
    log::info!("connecting to identity service");
    true
  }

  /// 核验返回，返回是否真的完成了一次核验
  pub fn finish(&mut self, fx: &mut impl FeedSink) -> bool {
    if self.state != Verification::Connecting {
      return false;
    }

    self.state = Verification::Verified;
    fx.emit(FeedEvent::IdentityVerified);
    fx.notify(IDENTITY_CONFIRMED.to_string(), Severity::Nominal);
    true
  }
}

/// 发出的求救信号
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SosSignal {
  pub latitude: f64,
  pub longitude: f64,
  pub place: &'static str,
}

/// 固定的求救坐标
pub const SOS_SIGNAL: SosSignal = SosSignal {
  latitude: 13.0827,
  longitude: 80.2707,
  place: "Chennai",
};

pub const SOS_UPLINK: &str = "SOS Uplink Established (High Priority)";

impl fmt::Display for SosSignal {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "SOS SIGNAL TRANSMITTED, GPS: {}° N, {}° E, Location: {}",
      self.latitude, self.longitude, self.place
    )
  }
}

/// 立即发出求救信号，并弹出高优先级通知
pub fn transmit_sos(fx: &mut impl FeedSink) -> SosSignal {
  log::warn!("{SOS_SIGNAL}");
  fx.emit(FeedEvent::SosTransmitted(SOS_SIGNAL));
  fx.notify(SOS_UPLINK.to_string(), Severity::Critical);
  SOS_SIGNAL
}
