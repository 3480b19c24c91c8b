//! 警员看板背后的模拟事件流：启动时输出固定的服务日志，随后按固定周期
//! 随机生成一条告警，同时记录日志并弹出通知。

use crate::sim::{FeedEffects, FeedEvent, LogTag, Severity, Timer, TimerHandle};
use std::time::Duration;

/// 启动时依次输出的服务日志
pub const STARTUP_LOGS: [&str; 3] = [
  "[INFO] SpringBootApp: Started in 1.45s",
  "[INFO] KafkaConsumer: Listening to topic 'sos-alerts'",
  "[INFO] GeoFencingService: 4 Active Zones loaded",
];

/// 告警里可能出现的地点
pub const LOCATIONS: [&str; 7] = [
  "Madurai",
  "Coimbatore",
  "Salem",
  "Kanyakumari",
  "Trichy",
  "Vellore",
  "Tirunelveli",
];

/// 模板里地点的占位符
const LOCATION_PLACEHOLDER: &str = "{loc}";

/// 告警模板
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventTemplate {
  pattern: &'static str,
  pub severity: Severity,
}

impl EventTemplate {
  const fn new(pattern: &'static str, severity: Severity) -> Self {
    Self { pattern, severity }
  }

  /// 将地点代入模板，得到告警内容
  pub fn render(&self, location: &str) -> String {
    self.pattern.replace(LOCATION_PLACEHOLDER, location)
  }
}

pub const TEMPLATES: [EventTemplate; 5] = [
  EventTemplate::new("Zone Violation: {loc} Forest", Severity::Critical),
  EventTemplate::new("SOS Alert: ID-882 ({loc})", Severity::Critical),
  EventTemplate::new("Density Warning: {loc} Temple", Severity::Warning),
  EventTemplate::new("Drone Link Active: {loc}", Severity::Nominal),
  EventTemplate::new("Weather Alert: {loc}", Severity::Warning),
];

/// 告警日志的前缀
const ALERT_PREFIX: &str = "[ALERT] ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedState {
  Idle,
  Running,
}

/// 一个周期里生成的告警
#[derive(Debug, Clone, PartialEq)]
pub struct FeedAlert {
  pub location: &'static str,
  pub template: EventTemplate,
  pub message: String,
}

/// 模拟事件流，独占自己的周期任务句柄，同一时刻最多只有一个
pub struct EventFeed {
  /// 周期任务句柄，存在即代表正在运行
  timer: Option<TimerHandle>,

  /// 生成告警的周期
  period: Duration,

  /// 累计生成的告警数量
  ticks: u64,
}

impl EventFeed {
  pub fn new(period: Duration) -> Self {
    Self {
      timer: None,
      period,
      ticks: 0,
    }
  }

  pub fn state(&self) -> FeedState {
    match self.timer {
      Some(_) => FeedState::Running,
      None => FeedState::Idle,
    }
  }

  pub fn is_running(&self) -> bool {
    self.timer.is_some()
  }

  pub fn ticks(&self) -> u64 {
    self.ticks
  }

  /// 启动事件流，返回是否真的启动了。已经在运行时什么也不做
  pub fn start(&mut self, fx: &mut impl FeedEffects) -> bool {
    if self.timer.is_some() {
      return false;
    }

    for line in STARTUP_LOGS {
      fx.log(line.to_string(), LogTag::System);
    }

    self.timer = Some(fx.schedule_every(self.period, Timer::FeedTick));
    fx.emit(FeedEvent::FeedStarted);
    log::info!("event feed started, period {:?}", self.period);
    true
  }

  /// 停止事件流并清空通知，日志历史保留。返回是否真的停止了
  pub fn stop(&mut self, fx: &mut impl FeedEffects) -> bool {
    let Some(timer) = self.timer.take() else {
      return false;
    };

    fx.cancel(timer);
    fx.clear_notices();
    fx.emit(FeedEvent::FeedStopped);
    log::info!("event feed stopped after {} ticks", self.ticks);
    true
  }

  /// 处理一个周期。句柄与当前持有的不一致时（已被取消的任务）什么也不做
  pub fn tick(&mut self, handle: TimerHandle, fx: &mut impl FeedEffects) -> Option<FeedAlert> {
    if self.timer != Some(handle) {
      log::debug!("stale feed tick {handle:?} ignored");
      return None;
    }

    // 随机源越界时取模，保证索引合法
    let location = LOCATIONS[fx.pick(LOCATIONS.len()) % LOCATIONS.len()];
    let template = TEMPLATES[fx.pick(TEMPLATES.len()) % TEMPLATES.len()];
    let message = template.render(location);

    fx.log(
      format!("{ALERT_PREFIX}{message}"),
      LogTag::Alert(template.severity),
    );
    fx.notify(message.clone(), template.severity);
    self.ticks += 1;

    Some(FeedAlert {
      location,
      template,
      message,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::sim::{FeedSink, RandomSource, Scheduler, Timeline};
  use std::collections::VecDeque;

  /// 记录所有副作用的测试替身
  #[derive(Default)]
  struct Recorder {
    timeline: Timeline<Timer>,
    lines: Vec<(String, LogTag)>,
    notices: Vec<(String, Severity)>,
    events: Vec<FeedEvent>,
    picks: VecDeque<usize>,

    /// 为真时原样返回预设选择，不按长度取模
    raw: bool,
  }

  impl Scheduler<Timer> for Recorder {
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

  impl FeedSink for Recorder {
    fn log(&mut self, message: String, tag: LogTag) {
      self.lines.push((message, tag));
    }

    fn notify(&mut self, message: String, severity: Severity) {
      self.notices.push((message, severity));
    }

    fn clear_notices(&mut self) {
      self.notices.clear();
    }

    fn emit(&mut self, event: FeedEvent) {
      self.events.push(event);
    }
  }

  impl RandomSource for Recorder {
    fn pick(&mut self, len: usize) -> usize {
      let pick = self.picks.pop_front().unwrap_or(0);
      if self.raw { pick } else { pick % len }
    }
  }

  /// 推进虚拟时间，将到期的周期交给事件流处理
  fn advance(feed: &mut EventFeed, rec: &mut Recorder, until: Duration) {
    while let Some((handle, _)) = rec.timeline.pop_due(until) {
      feed.tick(handle, rec);
    }
    rec.timeline.settle(until);
  }

  #[test]
  fn test_start_is_idempotent() {
    let mut feed = EventFeed::new(Duration::from_secs(6));
    let mut rec = Recorder::default();

    assert!(feed.start(&mut rec));
    assert!(!feed.start(&mut rec));
    assert_eq!(feed.state(), FeedState::Running);
    assert_eq!(rec.timeline.pending(), 1);

    let lines: Vec<&str> = rec.lines.iter().map(|(m, _)| m.as_str()).collect();
    assert_eq!(lines, STARTUP_LOGS);
    assert!(rec.lines.iter().all(|(_, tag)| *tag == LogTag::System));
    assert_eq!(rec.events, vec![FeedEvent::FeedStarted]);
  }

  #[test]
  fn test_tick_content() {
    let mut feed = EventFeed::new(Duration::from_secs(6));
    let mut rec = Recorder {
      picks: VecDeque::from([3, 1, 6, 3]),
      ..Default::default()
    };

    feed.start(&mut rec);
    advance(&mut feed, &mut rec, Duration::from_secs(12));

    assert_eq!(feed.ticks(), 2);
    assert_eq!(
      rec.lines[3],
      (
        "[ALERT] SOS Alert: ID-882 (Kanyakumari)".to_string(),
        LogTag::Alert(Severity::Critical)
      )
    );
    assert_eq!(
      rec.lines[4],
      (
        "[ALERT] Drone Link Active: Tirunelveli".to_string(),
        LogTag::Alert(Severity::Nominal)
      )
    );
    assert_eq!(
      rec.notices,
      vec![
        (
          "SOS Alert: ID-882 (Kanyakumari)".to_string(),
          Severity::Critical
        ),
        (
          "Drone Link Active: Tirunelveli".to_string(),
          Severity::Nominal
        ),
      ]
    );
  }

  #[test]
  fn test_tick_wraps_out_of_range_picks() {
    let mut feed = EventFeed::new(Duration::from_secs(6));
    let mut rec = Recorder {
      picks: VecDeque::from([9, 12]),
      raw: true,
      ..Default::default()
    };

    feed.start(&mut rec);
    let (handle, _) = rec.timeline.pop_due(Duration::from_secs(6)).unwrap();
    let alert = feed.tick(handle, &mut rec).unwrap();

    assert_eq!(alert.location, "Salem");
    assert_eq!(alert.template.severity, Severity::Warning);
    assert_eq!(alert.message, "Density Warning: Salem Temple");
    assert_eq!(
      rec.lines.last(),
      Some(&(
        "[ALERT] Density Warning: Salem Temple".to_string(),
        LogTag::Alert(Severity::Warning)
      ))
    );
  }

  #[test]
  fn test_stop() {
    let mut feed = EventFeed::new(Duration::from_secs(6));
    let mut rec = Recorder::default();
    assert!(!feed.stop(&mut rec));
    assert!(rec.events.is_empty());

    feed.start(&mut rec);
    advance(&mut feed, &mut rec, Duration::from_secs(7));
    assert_eq!(rec.notices.len(), 1);

    // 周期任务已经被取出、但还没交给事件流处理时停止
    let (stale, _) = rec.timeline.pop_due(Duration::from_secs(12)).unwrap();
    assert!(feed.stop(&mut rec));
    assert_eq!(feed.tick(stale, &mut rec), None);

    assert_eq!(feed.state(), FeedState::Idle);
    assert!(rec.notices.is_empty());
    assert_eq!(rec.lines.len(), 4);
    assert_eq!(rec.timeline.pending(), 0);
    assert_eq!(rec.events.last(), Some(&FeedEvent::FeedStopped));
  }

  #[test]
  fn test_render_template() {
    for template in TEMPLATES {
      let message = template.render("Salem");
      assert!(message.contains("Salem"));
      assert!(!message.contains(LOCATION_PLACEHOLDER));
    }
  }
}
