//! 单线程的虚拟时间轴，提供定时任务的登记与取消能力。
//!
//! 时间轴本身不会自己流逝，由驱动者调用 [Timeline::pop_due] 逐一取出到期任务，
//! 再调用 [Timeline::settle] 把时钟推到目标时刻。真实运行时由前端按流逝的墙上时间推进，
//! 测试中则直接推进虚拟时间。

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// 定时任务的句柄，按创建先后递增
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// 定时任务的登记与取消能力
pub trait Scheduler<K> {
  /// 当前的虚拟时刻
  fn now(&self) -> Duration;

  /// 在 `delay` 之后触发一次
  fn schedule_once(&mut self, delay: Duration, key: K) -> TimerHandle;

  /// 每隔 `period` 触发一次，首次触发在一个周期之后
  fn schedule_every(&mut self, period: Duration, key: K) -> TimerHandle;

  /// 取消任务，返回任务是否仍在等待。取消之后，该任务不会再被取出
  fn cancel(&mut self, handle: TimerHandle) -> bool;
}

struct Entry<K> {
  key: K,
  period: Option<Duration>,
}

/// 周期任务的最短周期，避免零周期导致同一时刻无限触发
const MIN_PERIOD: Duration = Duration::from_millis(1);

pub struct Timeline<K> {
  /// 当前时刻
  now: Duration,

  /// 下一个句柄的编号
  next_id: u64,

  /// 以（到期时刻，句柄）排序的任务队列，同时到期的按创建先后排列
  queue: BTreeMap<(Duration, TimerHandle), Entry<K>>,

  /// 句柄到其到期时刻的索引
  due: HashMap<TimerHandle, Duration>,
}

impl<K> Default for Timeline<K> {
  fn default() -> Self {
    Self {
      now: Duration::ZERO,
      next_id: 0,
      queue: BTreeMap::new(),
      due: HashMap::new(),
    }
  }
}

impl<K: Clone> Timeline<K> {
  /// 最早到期的任务时刻
  pub fn next_due(&self) -> Option<Duration> {
    self.queue.keys().next().map(|(due, _)| *due)
  }

  /// 等待中的任务数量
  pub fn pending(&self) -> usize {
    self.queue.len()
  }

  pub fn is_scheduled(&self, handle: TimerHandle) -> bool {
    self.due.contains_key(&handle)
  }

  /// 取出一个不晚于 `until` 到期的任务，并把时钟推到它的到期时刻。
  /// 周期任务在取出的同时登记下一次触发。
  pub fn pop_due(&mut self, until: Duration) -> Option<(TimerHandle, K)> {
    let (&(due, handle), _) = self.queue.iter().next()?;
    if due > until {
      return None;
    }

    let entry = self.queue.remove(&(due, handle))?;
    self.now = self.now.max(due);

    match entry.period {
      Some(period) => {
        let key = entry.key.clone();
        let next = due + period;
        self.queue.insert((next, handle), entry);
        self.due.insert(handle, next);
        Some((handle, key))
      }
      None => {
        self.due.remove(&handle);
        Some((handle, entry.key))
      }
    }
  }

  /// 所有到期任务处理完毕后，把时钟推到 `until`，时钟不会倒退
  pub fn settle(&mut self, until: Duration) {
    self.now = self.now.max(until);
  }

  fn insert(&mut self, delay: Duration, key: K, period: Option<Duration>) -> TimerHandle {
    let handle = TimerHandle(self.next_id);
    self.next_id += 1;

    let due = self.now + delay;
    self.queue.insert((due, handle), Entry { key, period });
    self.due.insert(handle, due);
    handle
  }
}

impl<K: Clone> Scheduler<K> for Timeline<K> {
  fn now(&self) -> Duration {
    self.now
  }

  fn schedule_once(&mut self, delay: Duration, key: K) -> TimerHandle {
    self.insert(delay, key, None)
  }

  fn schedule_every(&mut self, period: Duration, key: K) -> TimerHandle {
    let period = period.max(MIN_PERIOD);
    self.insert(period, key, Some(period))
  }

  fn cancel(&mut self, handle: TimerHandle) -> bool {
    match self.due.remove(&handle) {
      Some(due) => self.queue.remove(&(due, handle)).is_some(),
      None => false,
    }
  }
}
