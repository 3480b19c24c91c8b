/// 随机选择能力，由事件流在每个周期里选取地点与事件模板
pub trait RandomSource {
  /// 在 `0..len` 中均匀地选出一个索引，`len` 为零时返回 0
  fn pick(&mut self, len: usize) -> usize;
}

/// 使用线程随机数发生器的随机源
#[derive(Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
  fn pick(&mut self, len: usize) -> usize {
    if len == 0 {
      0
    } else {
      rand::random_range(0..len)
    }
  }
}

/// 闭包也可以作为随机源，方便在测试里回放固定的选择
impl<F> RandomSource for F
where
  F: FnMut(usize) -> usize,
{
  fn pick(&mut self, len: usize) -> usize {
    if len == 0 { 0 } else { self(len) % len }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_pick_in_range() {
    let mut random = ThreadRandom;
    for len in 1..20 {
      assert!(random.pick(len) < len);
    }
    assert_eq!(random.pick(0), 0);

    let mut fixed = |_: usize| 9usize;
    assert_eq!(fixed.pick(7), 2);
    assert_eq!(fixed.pick(0), 0);
  }
}
