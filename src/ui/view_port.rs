//! 只读列表的展示区：维护视野在数据中的位置，支持跟随最新数据

/// 描述本帧内的控制
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Control {
  /// 没有动作，视野停在上一帧的位置
  #[default]
  Idle,

  /// 跟随最新数据，视野底部总是最后一条
  Follow,

  /// 逐行移动视野，负数向上
  MoveBySteps(isize),

  PageUp,
  PageDown,
}

/// 展示区的视野。视野用最底部一行在数据中的位置描述，数据增长时只要不跟随，
/// 视野就停在原地。
#[derive(Default, Debug)]
pub struct ViewPort {
  /// 展示区的高度，也即能够展示的行数，在渲染时更新
  height: usize,

  /// 视野底部之后的数据索引（开区间），仅在不跟随时有效
  bottom: usize,

  /// 持续生效的跟随状态
  follow: bool,

  /// 本帧的控制
  control: Control,
}

impl ViewPort {
  pub fn want_follow(&mut self) {
    self.control = Control::Follow;
  }

  pub fn want_move(&mut self, steps: isize) {
    self.control = Control::MoveBySteps(steps);
  }

  pub fn want_page_up(&mut self) {
    self.control = Control::PageUp;
  }

  pub fn want_page_down(&mut self) {
    self.control = Control::PageDown;
  }

  pub fn is_following(&self) -> bool {
    self.follow
  }

  pub fn set_height(&mut self, height: usize) {
    self.height = height;
  }

  /// 根据数据总量应用本帧的控制，返回视野覆盖的数据范围
  pub fn apply(&mut self, len: usize) -> std::ops::Range<usize> {
    let control = std::mem::take(&mut self.control);
    let page = self.height.max(1) as isize;

    match control {
      Control::Idle => {}
      Control::Follow => self.follow = true,
      Control::MoveBySteps(n) => self.scroll(n, len),
      Control::PageUp => self.scroll(-page, len),
      Control::PageDown => self.scroll(page, len),
    }

    if self.follow {
      self.bottom = len;
    }

    // 视野至少装满一屏，除非数据本身不够
    let bottom = self.bottom.clamp(self.height.min(len), len);
    self.bottom = bottom;
    bottom.saturating_sub(self.height)..bottom
  }

  fn scroll(&mut self, steps: isize, len: usize) {
    let bottom = if self.follow { len } else { self.bottom };
    let bottom = (bottom as isize + steps).clamp(0, len as isize) as usize;

    // 滚到底部时重新开始跟随
    self.follow = bottom >= len;
    self.bottom = bottom;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_follow_and_scroll() {
    let mut vp = ViewPort::default();
    vp.set_height(3);
    vp.want_follow();
    assert_eq!(vp.apply(2), 0..2);
    assert_eq!(vp.apply(10), 7..10);

    vp.want_move(-2);
    assert_eq!(vp.apply(10), 5..8);
    assert!(!vp.is_following());

    // 不跟随时，新数据不会推动视野
    assert_eq!(vp.apply(20), 5..8);

    vp.want_page_up();
    assert_eq!(vp.apply(20), 2..5);
    vp.want_page_up();
    assert_eq!(vp.apply(20), 0..3);

    let ranges: Vec<_> = (0..6)
      .map(|_| {
        vp.want_page_down();
        vp.apply(20)
      })
      .collect();
    assert_eq!(ranges.first(), Some(&(3..6)));
    assert_eq!(ranges.last(), Some(&(17..20)));
    assert!(vp.is_following());
  }
}
