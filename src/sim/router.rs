use crate::sim::{Screen, ViewName};

/// 切换视图后，事件流应执行的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedCommand {
  Start,
  Stop,
}

/// 维护当前可见的画面，只能通过 `switch_view` 修改
#[derive(Debug, Default)]
pub struct ViewRouter {
  screen: Screen,
}

impl ViewRouter {
  pub fn new(screen: Screen) -> Self {
    Self { screen }
  }

  pub fn screen(&self) -> Screen {
    self.screen
  }

  pub fn current(&self) -> Option<ViewName> {
    self.screen.view()
  }

  /// 切换到目标视图，`None` 代表无法识别的目标，此时没有任何视图可见。
  /// 返回事件流需要执行的动作：只有进入警员看板时启动，其余情况一律停止。
  pub fn switch_view(&mut self, target: Option<ViewName>) -> FeedCommand {
    let next = self.screen.next(target);
    log::debug!("switch view: {:?} -> {:?}", self.screen, next);
    self.screen = next;

    match target {
      Some(view) if view.is_officer_dashboard() => FeedCommand::Start,
      _ => FeedCommand::Stop,
    }
  }

  /// 按名称切换视图，无法识别的名称只会记录警告，不会报错
  pub fn switch_to(&mut self, name: &str) -> FeedCommand {
    let target = match name.parse::<ViewName>() {
      Ok(view) => Some(view),
      Err(e) => {
        log::warn!("{e}");
        None
      }
    };
    self.switch_view(target)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_feed_command() {
    let mut router = ViewRouter::default();
    assert_eq!(router.current(), Some(ViewName::Landing));

    assert_eq!(router.switch_to("dash-officer"), FeedCommand::Start);
    assert_eq!(router.screen(), Screen::App(ViewName::DashOfficer));

    assert_eq!(router.switch_to("dash-officer"), FeedCommand::Start);
    assert_eq!(router.switch_view(Some(ViewName::Landing)), FeedCommand::Stop);
    assert_eq!(router.screen(), Screen::Landing);
  }

  #[test]
  fn test_unknown_target() {
    let mut router = ViewRouter::default();
    router.switch_to("login-tourist");

    assert_eq!(router.switch_to("nowhere"), FeedCommand::Stop);
    assert_eq!(router.screen(), Screen::Blank);
    assert_eq!(router.current(), None);
  }
}
