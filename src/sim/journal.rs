use crate::sim::{FeedEvent, LogLine, NoticeId, Notification, Phase, Severity};
use std::collections::VecDeque;
use std::time::Duration;

/// 正在展示的通知集合，按创建先后排列
#[derive(Default)]
pub struct Notices {
  next_id: u64,
  items: Vec<Notification>,
}

impl Notices {
  pub fn push(&mut self, message: String, severity: Severity, created: Duration) -> &Notification {
    let id = NoticeId(self.next_id);
    self.next_id += 1;

    self.items.push(Notification {
      id,
      message,
      severity,
      created,
      phase: Phase::Shown,
    });
    &self.items[self.items.len() - 1]
  }

  /// 通知开始离场，返回它是否还在
  pub fn begin_leave(&mut self, id: NoticeId) -> bool {
    match self.items.iter_mut().find(|n| n.id == id) {
      Some(notice) => {
        notice.phase = Phase::Leaving;
        true
      }
      None => false,
    }
  }

  /// 移除通知，返回是否真的有通知被移除
  pub fn remove(&mut self, id: NoticeId) -> bool {
    let len = self.items.len();
    self.items.retain(|n| n.id != id);
    len != self.items.len()
  }

  /// 清空所有通知，返回被清掉的数量
  pub fn clear(&mut self) -> usize {
    let len = self.items.len();
    self.items.clear();
    len
  }

  pub fn get(&self, id: NoticeId) -> Option<&Notification> {
    self.items.iter().find(|n| n.id == id)
  }

  pub fn iter(&self) -> impl Iterator<Item = &Notification> {
    self.items.iter()
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }
}

/// 后台的记录本：只增不减的日志历史、短暂的通知，以及待前端消费的事件
#[derive(Default)]
pub struct Journal {
  lines: Vec<LogLine>,
  notices: Notices,
  events: VecDeque<FeedEvent>,
}

impl Journal {
  pub fn append(&mut self, line: LogLine) {
    self.lines.push(line.clone());
    self.emit(FeedEvent::Logged(line));
  }

  pub fn emit(&mut self, event: FeedEvent) {
    self.events.push_back(event);
  }

  pub fn lines(&self) -> &[LogLine] {
    &self.lines
  }

  pub fn notices(&self) -> &Notices {
    &self.notices
  }

  pub fn notices_mut(&mut self) -> &mut Notices {
    &mut self.notices
  }

  /// 清空通知，只有真的清掉了东西时才发出事件
  pub fn clear_notices(&mut self) {
    if self.notices.clear() > 0 {
      self.emit(FeedEvent::NoticesCleared);
    }
  }

  /// 取出所有尚未被消费的事件
  pub fn drain_events(&mut self) -> Vec<FeedEvent> {
    self.events.drain(..).collect()
  }
}
