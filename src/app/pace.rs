use std::time::Duration;
use tokio::time::Instant;

/// 把后台的虚拟时间对齐到真实时间：虚拟零点即 [Pacer::start] 的时刻
pub struct Pacer {
  origin: Instant,
}

impl Pacer {
  pub fn start() -> Self {
    Self {
      origin: Instant::now(),
    }
  }

  /// 从零点至今流逝的真实时间，也就是后台应当推进到的虚拟时刻
  pub fn elapsed(&self) -> Duration {
    self.origin.elapsed()
  }

  /// 下一次醒来的时刻：最早的定时任务到期，或者到了刷新界面的时候
  pub fn wake_at(&self, next_due: Option<Duration>, refresh: Duration) -> Instant {
    let refresh_at = Instant::now() + refresh;
    match next_due {
      Some(due) => refresh_at.min(self.origin + due),
      None => refresh_at,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test(start_paused = true)]
  async fn test_wake_at() {
    let pacer = Pacer::start();
    let refresh = Duration::from_secs(1);

    tokio::time::advance(Duration::from_millis(2500)).await;
    assert_eq!(pacer.elapsed(), Duration::from_millis(2500));

    // 定时任务先于刷新到期
    let wake = pacer.wake_at(Some(Duration::from_secs(3)), refresh);
    assert_eq!(wake - Instant::now(), Duration::from_millis(500));

    let wake = pacer.wake_at(Some(Duration::from_secs(6)), refresh);
    assert_eq!(wake - Instant::now(), refresh);

    let wake = pacer.wake_at(None, refresh);
    assert_eq!(wake - Instant::now(), refresh);
  }
}
