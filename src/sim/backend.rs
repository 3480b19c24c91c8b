use crate::sim::{
  Actor, AuthFlow, Effects, EventFeed, FeedCommand, FeedEvent, FeedSink, FeedState, FieldMarks,
  IdentityCheck, Journal, LogLine, LogTag, LoginOutcome, Notices, OFFICER_GRANTED_LOG,
  RandomSource, Scheduler, Screen, SosSignal, ThreadRandom, Timer, TimerHandle, Timeline, Timing,
  Verification, ViewName, ViewRouter, transmit_sos, wall_clock,
};
use chrono::{DateTime, Local};
use std::time::Duration;

/// 用后台的各个字段临时组合出副作用实现，避免整体借用
macro_rules! effects {
  ($self:ident) => {
    Effects {
      timeline: &mut $self.timeline,
      journal: &mut $self.journal,
      random: &mut *$self.random,
      timing: &$self.timing,
      origin: $self.origin,
    }
  };
}

/// 模拟的后台，也是视图路由与事件流的唯一持有者。
///
/// 所有操作都在单一控制线程上执行；时间只在 [Backend::advance_to] 中流逝，
/// 到期的任务严格按时间先后依次处理。
pub struct Backend {
  timing: Timing,

  /// 虚拟时间零点对应的墙上时间
  origin: DateTime<Local>,

  timeline: Timeline<Timer>,
  router: ViewRouter,
  feed: EventFeed,
  auth: AuthFlow,
  identity: IdentityCheck,
  journal: Journal,
  random: Box<dyn RandomSource>,
}

impl Default for Backend {
  fn default() -> Self {
    Self::new(Timing::default(), Local::now(), ThreadRandom)
  }
}

impl Backend {
  pub fn new(timing: Timing, origin: DateTime<Local>, random: impl RandomSource + 'static) -> Self {
    Self {
      timing,
      origin,
      timeline: Timeline::default(),
      router: ViewRouter::default(),
      feed: EventFeed::new(timing.tick_period),
      auth: AuthFlow::default(),
      identity: IdentityCheck::default(),
      journal: Journal::default(),
      random: Box::new(random),
    }
  }

  // ------------------------------------------
  // 视图路由

  /// 切换到指定视图。进入警员看板时启动事件流，其余情况停止事件流并清空通知
  pub fn switch_view(&mut self, target: ViewName) {
    self.apply_switch(Some(target));
  }

  /// 按名称切换视图，无法识别的名称会使所有视图隐藏
  pub fn switch_to(&mut self, name: &str) {
    let command = self.router.switch_to(name);
    self.after_switch(command);
  }

  fn apply_switch(&mut self, target: Option<ViewName>) {
    let command = self.router.switch_view(target);
    self.after_switch(command);
  }

  fn after_switch(&mut self, command: FeedCommand) {
    let screen = self.router.screen();
    self.journal.emit(FeedEvent::ViewSwitched(screen));

    match command {
      FeedCommand::Start => {
        self.start_feed();
      }
      FeedCommand::Stop => {
        self.stop_feed();
        self.journal.clear_notices();
      }
    }
  }

  // ------------------------------------------
  // 事件流

  /// 启动事件流，返回是否真的启动了
  pub fn start_feed(&mut self) -> bool {
    self.feed.start(&mut effects!(self))
  }

  /// 停止事件流，返回是否真的停止了
  pub fn stop_feed(&mut self) -> bool {
    self.feed.stop(&mut effects!(self))
  }

  // ------------------------------------------
  // 模拟服务

  /// 校验输入并发起登录
  pub fn validate_and_login(&mut self, actor: Actor, identifier: &str, secret: &str) -> LoginOutcome {
    let timing = self.timing;
    self
      .auth
      .validate_and_login(actor, identifier, secret, &timing, &mut effects!(self))
  }

  /// 发起身份核验
  pub fn verify_identity(&mut self) -> bool {
    let timing = self.timing;
    self.identity.begin(&timing, &mut effects!(self))
  }

  /// 发出求救信号
  pub fn trigger_sos(&mut self) -> SosSignal {
    transmit_sos(&mut effects!(self))
  }

  // ------------------------------------------
  // 时间推进

  /// 将时间推进 `dt`
  pub fn advance(&mut self, dt: Duration) {
    self.advance_to(self.timeline.now() + dt);
  }

  /// 将时间推进到 `until`，途中到期的任务按先后依次处理
  pub fn advance_to(&mut self, until: Duration) {
    while let Some((handle, timer)) = self.timeline.pop_due(until) {
      self.dispatch(handle, timer);
    }
    self.timeline.settle(until);
  }

  fn dispatch(&mut self, handle: TimerHandle, timer: Timer) {
    match timer {
      Timer::FeedTick => {
        if let Some(alert) = self.feed.tick(handle, &mut effects!(self)) {
          log::debug!("feed alert at {}: {}", alert.location, alert.message);
        }
      }
      Timer::HideNotice(id) => {
        if self.journal.notices_mut().begin_leave(id) {
          let exit = self.timing.notice_exit;
          self.timeline.schedule_once(exit, Timer::DropNotice(id));
          self.journal.emit(FeedEvent::NoticeLeaving(id));
        }
      }
      Timer::DropNotice(id) => {
        if self.journal.notices_mut().remove(id) {
          self.journal.emit(FeedEvent::NoticeDropped(id));
        }
      }
      Timer::ClearMarks(actor) => {
        if self.auth.clear_marks(actor) {
          self.journal.emit(FeedEvent::FieldsCleared(actor));
        }
      }
      Timer::FinishLogin(actor) => {
        if self.auth.finish_login(actor) {
          log::info!("{actor} authenticated");
          self.switch_view(actor.dashboard());
          if actor == Actor::Officer {
            effects!(self).log(OFFICER_GRANTED_LOG.to_string(), LogTag::System);
          }
        }
      }
      Timer::FinishVerify => {
        self.identity.finish(&mut effects!(self));
      }
    }
  }

  /// 最早到期任务的虚拟时刻，前端据此决定何时醒来
  pub fn next_due(&self) -> Option<Duration> {
    self.timeline.next_due()
  }

  // ------------------------------------------
  // 状态查询

  pub fn now(&self) -> Duration {
    self.timeline.now()
  }

  /// 当前虚拟时刻对应的墙上时间
  pub fn wall_now(&self) -> DateTime<Local> {
    wall_clock(self.origin, self.now())
  }

  pub fn screen(&self) -> Screen {
    self.router.screen()
  }

  pub fn current_view(&self) -> Option<ViewName> {
    self.router.current()
  }

  pub fn feed_state(&self) -> FeedState {
    self.feed.state()
  }

  /// 当前等待中的定时任务数量
  pub fn pending_timers(&self) -> usize {
    self.timeline.pending()
  }

  pub fn log_lines(&self) -> &[LogLine] {
    self.journal.lines()
  }

  pub fn notices(&self) -> &Notices {
    self.journal.notices()
  }

  pub fn field_marks(&self, actor: Actor) -> FieldMarks {
    self.auth.marks(actor)
  }

  pub fn is_login_pending(&self, actor: Actor) -> bool {
    self.auth.is_pending(actor)
  }

  pub fn verification(&self) -> Verification {
    self.identity.state()
  }

  /// 取出所有尚未消费的事件
  pub fn drain_events(&mut self) -> Vec<FeedEvent> {
    self.journal.drain_events()
  }
}
