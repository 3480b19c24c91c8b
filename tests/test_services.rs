use rs_safe_tour::sim::{
  FeedEvent, IDENTITY_CONFIRMED, SOS_SIGNAL, SOS_UPLINK, Severity, Verification,
};

mod common;

#[test]
fn test_identity_verification() {
  let mut backend = common::backend(&[]);
  assert_eq!(backend.verification(), Verification::Unverified);

  assert!(backend.verify_identity());
  assert_eq!(backend.verification(), Verification::Connecting);
  assert!(!backend.verify_identity());

  backend.advance(common::ms(1499));
  assert_eq!(backend.verification(), Verification::Connecting);
  assert!(backend.notices().is_empty());

  backend.advance(common::ms(1));
  assert_eq!(backend.verification(), Verification::Verified);
  let notice = backend.notices().iter().next().expect("confirmation");
  assert_eq!(notice.message, IDENTITY_CONFIRMED);
  assert_eq!(notice.severity, Severity::Nominal);

  assert!(!backend.verify_identity());
  let events = backend.drain_events();
  assert_eq!(events.first(), Some(&FeedEvent::VerifyPending));
  assert!(events.contains(&FeedEvent::IdentityVerified));
}

#[test]
fn test_sos() {
  let mut backend = common::backend(&[]);
  let signal = backend.trigger_sos();
  assert_eq!(signal, SOS_SIGNAL);
  assert_eq!(signal.place, "Chennai");

  let notice = backend.notices().iter().next().expect("uplink notice");
  assert_eq!(notice.message, SOS_UPLINK);
  assert_eq!(notice.severity, Severity::Critical);
  assert!(backend.drain_events().contains(&FeedEvent::SosTransmitted(SOS_SIGNAL)));

  backend.advance(common::ms(4300));
  assert!(backend.notices().is_empty());
}
