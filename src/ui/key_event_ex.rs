use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// 按键事件的构造与比较工具
pub trait KeyEventEx {
  /// 无修饰的按键
  fn simple(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
  }

  /// 无修饰的字符键
  fn plain(c: char) -> KeyEvent {
    Self::platform_consistent(KeyEvent::new(KeyCode::Char(c), KeyModifiers::empty()))
  }

  /// ctrl + <char>，只响应按下，不会被连续触发
  fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new_with_kind(KeyCode::Char(c), KeyModifiers::CONTROL, KeyEventKind::Press)
  }

  /// alt + <char>，只响应按下，不会被连续触发
  fn alt(c: char) -> KeyEvent {
    KeyEvent::new_with_kind(KeyCode::Char(c), KeyModifiers::ALT, KeyEventKind::Press)
  }

  /// 各平台对 shift 的处理不一致：非字母的符号键，有的平台带 shift，有的不带。
  /// 这里统一为：只有大写字母才带 shift。
  fn platform_consistent(mut key: KeyEvent) -> KeyEvent {
    let shift = match key.code {
      KeyCode::Char(c) => c.is_ascii_uppercase(),
      _ => key.modifiers.contains(KeyModifiers::SHIFT),
    };

    key.modifiers.set(KeyModifiers::SHIFT, shift);
    key
  }

  /// 判断两个按键是否相同。字母键忽略大小写及 shift
  fn same_as(&self, other: &KeyEvent) -> bool;
}

impl KeyEventEx for KeyEvent {
  fn same_as(&self, other: &KeyEvent) -> bool {
    if self.kind != other.kind {
      return false;
    }

    match (self.code, other.code) {
      (KeyCode::Char(c1), KeyCode::Char(c2))
        if c1.is_ascii_alphabetic() && c2.is_ascii_alphabetic() =>
      {
        let mut m1 = self.modifiers;
        m1.remove(KeyModifiers::SHIFT);

        let mut m2 = other.modifiers;
        m2.remove(KeyModifiers::SHIFT);

        c1.eq_ignore_ascii_case(&c2) && m1 == m2
      }
      (x1, x2) => x1 == x2 && self.modifiers == other.modifiers,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_same_as() {
    let upper_q = KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT);
    assert!(KeyEvent::plain('q').same_as(&upper_q));
    assert!(!KeyEvent::ctrl('q').same_as(&upper_q));
    assert!(KeyEvent::ctrl('d').same_as(&KeyEvent::new(
      KeyCode::Char('d'),
      KeyModifiers::CONTROL
    )));
    assert!(KeyEvent::simple(KeyCode::Esc).same_as(&KeyEvent::simple(KeyCode::Esc)));
    assert!(!KeyEvent::simple(KeyCode::Esc).same_as(&KeyEvent::simple(KeyCode::Enter)));
  }

  #[test]
  fn test_platform_consistent() {
    let gt = KeyEvent::new(KeyCode::Char('>'), KeyModifiers::SHIFT);
    assert_eq!(
      KeyEvent::platform_consistent(gt).modifiers,
      KeyModifiers::empty()
    );

    let upper = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::empty());
    assert_eq!(
      KeyEvent::platform_consistent(upper).modifiers,
      KeyModifiers::SHIFT
    );
  }
}
