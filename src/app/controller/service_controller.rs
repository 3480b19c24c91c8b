use crate::{
  app::Controller,
  sim::{Backend, FeedEvent, SosSignal, Verification},
};

/// 游客侧的模拟服务：身份核验与求救
#[derive(Default)]
pub struct ServiceController {
  want_verify: bool,
  want_sos: bool,

  verification: Verification,

  /// 最近一次发出的求救信号
  last_sos: Option<SosSignal>,
}

impl ServiceController {
  pub fn want_verify(&mut self) {
    self.want_verify = true;
  }

  pub fn want_sos(&mut self) {
    self.want_sos = true;
  }

  pub fn verification(&self) -> Verification {
    self.verification
  }

  pub fn last_sos(&self) -> Option<&SosSignal> {
    self.last_sos.as_ref()
  }
}

impl Controller for ServiceController {
  fn run_once(&mut self, backend: &mut Backend) {
    if std::mem::take(&mut self.want_verify) && !backend.verify_identity() {
      log::debug!("identity verification already {:?}", backend.verification());
    }

    if std::mem::take(&mut self.want_sos) {
      backend.trigger_sos();
    }
  }

  fn on_event(&mut self, event: &FeedEvent) {
    match event {
      FeedEvent::VerifyPending => self.verification = Verification::Connecting,
      FeedEvent::IdentityVerified => self.verification = Verification::Verified,
      FeedEvent::SosTransmitted(signal) => self.last_sos = Some(*signal),
      _ => {}
    }
  }
}
