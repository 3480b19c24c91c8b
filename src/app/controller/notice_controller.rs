use crate::{
  app::Controller,
  sim::{Backend, FeedEvent, Notification, Phase},
};

/// 右上角浮现的通知，按出现的先后排列
#[derive(Default)]
pub struct NoticeController {
  notices: Vec<Notification>,
}

impl NoticeController {
  pub fn notices(&self) -> &[Notification] {
    &self.notices
  }
}

impl Controller for NoticeController {
  fn run_once(&mut self, _: &mut Backend) {}

  fn on_event(&mut self, event: &FeedEvent) {
    match event {
      FeedEvent::Notified(notice) => self.notices.push(notice.clone()),
      FeedEvent::NoticeLeaving(id) => {
        if let Some(notice) = self.notices.iter_mut().find(|n| n.id == *id) {
          notice.phase = Phase::Leaving;
        }
      }
      FeedEvent::NoticeDropped(id) => self.notices.retain(|n| n.id != *id),
      FeedEvent::NoticesCleared => self.notices.clear(),
      _ => {}
    }
  }
}
