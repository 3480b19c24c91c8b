use log::LevelFilter;
use rs_safe_tour::{
  debug,
  sim::{
    FeedEvent, FeedState, LOCATIONS, LogTag, Phase, STARTUP_LOGS, Screen, Severity, TEMPLATES,
    ViewName,
  },
};

mod common;

#[test]
fn test_officer_dashboard_scenario() {
  let mut backend = common::backend(&[]);
  backend.switch_view(ViewName::DashOfficer);

  assert_eq!(backend.feed_state(), FeedState::Running);
  let startup: Vec<&str> = backend.log_lines().iter().map(|l| l.message.as_str()).collect();
  assert_eq!(startup, STARTUP_LOGS.to_vec());
  assert!(backend.log_lines().iter().all(|l| l.tag == LogTag::System));

  let events = backend.drain_events();
  assert_eq!(
    events.first(),
    Some(&FeedEvent::ViewSwitched(Screen::App(ViewName::DashOfficer)))
  );
  assert_eq!(events.last(), Some(&FeedEvent::FeedStarted));
  assert_eq!(
    common::count_events(&events, |e| matches!(e, FeedEvent::Logged(_))),
    3
  );

  backend.advance(common::secs(6));
  assert_eq!(backend.log_lines().len(), 4);
  assert_eq!(backend.notices().len(), 1);

  // 离开看板：事件流停止，通知清空，日志保留
  backend.switch_view(ViewName::DashTourist);
  assert_eq!(backend.feed_state(), FeedState::Idle);
  assert!(backend.notices().is_empty());
  assert_eq!(backend.log_lines().len(), 4);
  assert!(backend.drain_events().contains(&FeedEvent::NoticesCleared));

  backend.advance(common::secs(60));
  assert_eq!(backend.log_lines().len(), 4);
}

#[test]
fn test_ticks_follow_period() {
  let mut backend = common::backend(&[]);
  assert!(backend.start_feed());

  backend.advance(common::ms(5999));
  assert_eq!(common::alert_lines(&backend), 0);

  backend.advance(common::ms(1));
  assert_eq!(common::alert_lines(&backend), 1);
  assert_eq!(backend.notices().len(), 1);

  backend.advance_to(common::secs(12));
  assert_eq!(common::alert_lines(&backend), 2);
}

#[test]
fn test_tick_content() {
  // 先选地点，再选模板
  let mut backend = common::backend(&[2, 0, 6, 3]);
  backend.start_feed();
  backend.advance_to(common::secs(12));

  let alerts: Vec<_> = backend.log_lines().iter().skip(STARTUP_LOGS.len()).collect();
  assert_eq!(alerts.len(), 2);

  assert_eq!(alerts[0].message, "[ALERT] Zone Violation: Salem Forest");
  assert_eq!(alerts[0].tag, LogTag::Alert(Severity::Critical));
  assert_eq!(alerts[0].to_string(), "[09:00:06] [ALERT] Zone Violation: Salem Forest");

  assert_eq!(alerts[1].message, "[ALERT] Drone Link Active: Tirunelveli");
  assert_eq!(alerts[1].tag, LogTag::Alert(Severity::Nominal));

  // 第一条通知在 10.3 秒时已经移除
  let notices: Vec<_> = backend.notices().iter().collect();
  assert_eq!(notices.len(), 1);
  assert_eq!(notices[0].message, "Drone Link Active: Tirunelveli");
  assert_eq!(notices[0].severity, Severity::Nominal);
}

#[test]
fn test_tick_picks_from_static_sets() {
  let mut backend = rs_safe_tour::sim::Backend::default();
  backend.start_feed();
  backend.advance_to(common::secs(60));

  let events = backend.drain_events();
  let notified: Vec<_> = events
    .iter()
    .filter_map(|e| match e {
      FeedEvent::Notified(n) => Some(n),
      _ => None,
    })
    .collect();
  assert_eq!(notified.len(), 10);

  for notice in notified {
    assert!(LOCATIONS.iter().any(|loc| notice.message.contains(loc)));
    assert!(TEMPLATES.iter().any(|t| t.severity == notice.severity));
  }
}

#[test]
fn test_notice_lifecycle() {
  let mut backend = common::backend(&[]);
  backend.start_feed();
  backend.advance_to(common::secs(6));
  let id = backend.notices().iter().next().map(|n| n.id).expect("one notice");

  backend.advance_to(common::ms(9999));
  assert_eq!(backend.notices().get(id).map(|n| n.phase), Some(Phase::Shown));

  backend.advance_to(common::secs(10));
  assert_eq!(backend.notices().get(id).map(|n| n.phase), Some(Phase::Leaving));

  backend.advance_to(common::ms(10_300));
  assert!(backend.notices().get(id).is_none());
  assert!(backend.notices().is_empty());

  let events = backend.drain_events();
  assert!(events.contains(&FeedEvent::NoticeLeaving(id)));
  assert!(events.contains(&FeedEvent::NoticeDropped(id)));
}

#[test]
fn test_stop_clears_notices_at_once() {
  let mut backend = common::backend(&[]);
  backend.start_feed();
  backend.advance_to(common::secs(6));
  backend.advance_to(common::ms(9000));
  assert_eq!(backend.notices().len(), 1);

  assert!(backend.stop_feed());
  assert!(backend.notices().is_empty());

  // 之后过期任务触发也不会出错
  backend.advance_to(common::secs(30));
  assert!(backend.notices().is_empty());
  assert_eq!(common::alert_lines(&backend), 1);
}

#[test]
fn test_start_and_stop_are_idempotent() {
  let mut backend = common::backend(&[]);
  assert!(!backend.stop_feed());
  assert_eq!(backend.feed_state(), FeedState::Idle);

  assert!(backend.start_feed());
  assert!(!backend.start_feed());
  assert_eq!(backend.pending_timers(), 1);
  assert_eq!(backend.log_lines().len(), STARTUP_LOGS.len());

  // 重复进入看板也不会启动第二个周期任务
  backend.switch_view(ViewName::DashOfficer);
  assert_eq!(backend.pending_timers(), 1);

  backend.advance_to(common::secs(6));
  assert_eq!(common::alert_lines(&backend), 1);

  assert!(backend.stop_feed());
  assert!(!backend.stop_feed());
  backend.advance_to(common::secs(60));
  assert_eq!(common::alert_lines(&backend), 1);
}

#[test]
fn test_alert_reaches_debug_log() {
  // 同一进程里的其它测试也会写日志，缓冲区留足余量
  debug::enable_debug(10_000, LevelFilter::Debug);

  let mut backend = common::backend(&[4, 4]);
  assert!(backend.start_feed());
  backend.advance_to(common::secs(6));

  let (items, _) = debug::snapshot(10_000);
  assert!(
    items
      .iter()
      .any(|item| item.content.contains("feed alert at Trichy: Weather Alert: Trichy"))
  );
}
