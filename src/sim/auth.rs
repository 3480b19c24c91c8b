//! 模拟的登录流程：只检查输入是否为空，延迟一段时间后视为鉴权成功

use crate::sim::{FeedEvent, FeedSink, Scheduler, Timer, Timing, ViewName};
use std::fmt;

/// 登录的身份
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Actor {
  Tourist,
  Officer,
}

impl Actor {
  /// 登录成功后进入的看板
  pub fn dashboard(self) -> ViewName {
    match self {
      Actor::Tourist => ViewName::DashTourist,
      Actor::Officer => ViewName::DashOfficer,
    }
  }

  pub fn login_view(self) -> ViewName {
    match self {
      Actor::Tourist => ViewName::LoginTourist,
      Actor::Officer => ViewName::LoginOfficer,
    }
  }
}

impl fmt::Display for Actor {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Actor::Tourist => f.write_str("tourist"),
      Actor::Officer => f.write_str("officer"),
    }
  }
}

/// 输入框的错误标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldMarks {
  pub identifier: bool,
  pub secret: bool,
}

impl FieldMarks {
  pub fn any(&self) -> bool {
    self.identifier || self.secret
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
  /// 有空白输入，被拒绝
  Rejected(FieldMarks),

  /// 鉴权请求已发出，等待返回
  Pending,
}

/// 警员登录成功后追加的鉴权日志
pub const OFFICER_GRANTED_LOG: &str = "[AUTH] SecurityContext: User 'TN-COP-007' granted ROLE_ADMIN";

#[derive(Default)]
struct ActorState {
  marks: FieldMarks,
  pending: bool,
}

/// 两种身份的登录状态
#[derive(Default)]
pub struct AuthFlow {
  tourist: ActorState,
  officer: ActorState,
}

impl AuthFlow {
  fn state(&self, actor: Actor) -> &ActorState {
    match actor {
      Actor::Tourist => &self.tourist,
      Actor::Officer => &self.officer,
    }
  }

  fn state_mut(&mut self, actor: Actor) -> &mut ActorState {
    match actor {
      Actor::Tourist => &mut self.tourist,
      Actor::Officer => &mut self.officer,
    }
  }

  pub fn marks(&self, actor: Actor) -> FieldMarks {
    self.state(actor).marks
  }

  pub fn is_pending(&self, actor: Actor) -> bool {
    self.state(actor).pending
  }

  /// 校验输入并发起登录。空白输入会被标记，标记在一段时间后清除；
  /// 输入齐全时发起模拟的鉴权请求，请求进行中时重复提交会被忽略。
  pub fn validate_and_login<F>(
    &mut self,
    actor: Actor,
    identifier: &str,
    secret: &str,
    timing: &Timing,
    fx: &mut F,
  ) -> LoginOutcome
  where
    F: Scheduler<Timer> + FeedSink,
  {
    let marks = FieldMarks {
      identifier: identifier.trim().is_empty(),
      secret: secret.trim().is_empty(),
    };

    let state = self.state_mut(actor);
    state.marks.identifier |= marks.identifier;
    state.marks.secret |= marks.secret;
    let current = state.marks;

    // 不论是否通过，都会在稍后清除错误标记
    fx.schedule_once(timing.field_error, Timer::ClearMarks(actor));

    if marks.any() {
      log::debug!("{actor} login rejected: {marks:?}");
      fx.emit(FeedEvent::FieldsMarked(actor, current));
      return LoginOutcome::Rejected(marks);
    }

    if !state.pending {
      state.pending = true;
      fx.schedule_once(timing.login_delay, Timer::FinishLogin(actor));
      fx.emit(FeedEvent::LoginPending(actor));
      log::info!("{actor} authenticating as '{}'", identifier.trim());
    }
    LoginOutcome::Pending
  }

  /// 清除错误标记，返回之前是否有标记
  pub fn clear_marks(&mut self, actor: Actor) -> bool {
    let state = self.state_mut(actor);
    let had = state.marks.any();
    state.marks = FieldMarks::default();
    had
  }

  /// 鉴权请求返回，返回是否真的有请求在等待
  pub fn finish_login(&mut self, actor: Actor) -> bool {
    std::mem::take(&mut self.state_mut(actor).pending)
  }
}
