use rs_safe_tour::sim::{
  Actor, FeedEvent, FeedState, FieldMarks, LogTag, LoginOutcome, OFFICER_GRANTED_LOG, Screen,
  ViewName,
};

mod common;

#[test]
fn test_empty_fields_are_marked_then_cleared() {
  let mut backend = common::backend(&[]);
  backend.switch_view(ViewName::LoginTourist);
  backend.drain_events();

  let both = FieldMarks {
    identifier: true,
    secret: true,
  };
  let outcome = backend.validate_and_login(Actor::Tourist, "", "   ");
  assert_eq!(outcome, LoginOutcome::Rejected(both));
  assert_eq!(backend.field_marks(Actor::Tourist), both);
  assert!(!backend.is_login_pending(Actor::Tourist));

  backend.advance(common::ms(499));
  assert_eq!(backend.field_marks(Actor::Tourist), both);

  backend.advance(common::ms(1));
  assert_eq!(backend.field_marks(Actor::Tourist), FieldMarks::default());

  // 没有发生跳转
  backend.advance(common::secs(5));
  assert_eq!(backend.screen(), Screen::App(ViewName::LoginTourist));

  let events = backend.drain_events();
  assert_eq!(
    events,
    vec![
      FeedEvent::FieldsMarked(Actor::Tourist, both),
      FeedEvent::FieldsCleared(Actor::Tourist),
    ]
  );
}

#[test]
fn test_one_empty_field() {
  let mut backend = common::backend(&[]);
  let outcome = backend.validate_and_login(Actor::Officer, "TN-COP-007", "");
  assert_eq!(
    outcome,
    LoginOutcome::Rejected(FieldMarks {
      identifier: false,
      secret: true,
    })
  );
  assert!(!backend.is_login_pending(Actor::Officer));
  assert!(backend.field_marks(Actor::Tourist) == FieldMarks::default());
}

#[test]
fn test_tourist_login() {
  let mut backend = common::backend(&[]);
  backend.switch_view(ViewName::LoginTourist);

  let outcome = backend.validate_and_login(Actor::Tourist, "+91 98400 12345", "secret");
  assert_eq!(outcome, LoginOutcome::Pending);
  assert!(backend.is_login_pending(Actor::Tourist));

  backend.advance(common::ms(999));
  assert_eq!(backend.screen(), Screen::App(ViewName::LoginTourist));

  backend.advance(common::ms(1));
  assert_eq!(backend.screen(), Screen::App(ViewName::DashTourist));
  assert!(!backend.is_login_pending(Actor::Tourist));
  assert_eq!(backend.feed_state(), FeedState::Idle);
  assert!(backend.log_lines().is_empty());
}

#[test]
fn test_officer_login() {
  let mut backend = common::backend(&[]);
  backend.switch_view(ViewName::LoginOfficer);
  backend.validate_and_login(Actor::Officer, "TN-COP-007", "1234");
  backend.advance(common::secs(1));

  assert_eq!(backend.screen(), Screen::App(ViewName::DashOfficer));
  assert_eq!(backend.feed_state(), FeedState::Running);

  // 鉴权日志排在启动日志之后
  let lines = backend.log_lines();
  assert_eq!(lines.len(), 4);
  let last = lines.last().expect("auth line");
  assert_eq!(last.message, OFFICER_GRANTED_LOG);
  assert_eq!(last.tag, LogTag::System);
}

#[test]
fn test_duplicate_submit_is_ignored() {
  let mut backend = common::backend(&[]);
  backend.switch_view(ViewName::LoginOfficer);
  backend.drain_events();

  backend.validate_and_login(Actor::Officer, "TN-COP-007", "1234");
  backend.advance(common::ms(400));
  assert_eq!(
    backend.validate_and_login(Actor::Officer, "TN-COP-007", "1234"),
    LoginOutcome::Pending
  );
  backend.advance(common::secs(3));

  let events = backend.drain_events();
  assert_eq!(
    common::count_events(&events, |e| matches!(e, FeedEvent::LoginPending(_))),
    1
  );
  assert_eq!(
    common::count_events(&events, |e| matches!(e, FeedEvent::ViewSwitched(_))),
    1
  );
  assert_eq!(
    backend
      .log_lines()
      .iter()
      .filter(|l| l.message == OFFICER_GRANTED_LOG)
      .count(),
    1
  );
}
