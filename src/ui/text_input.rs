use ratatui::{
  style::{Style, Stylize},
  text::{Line, Span},
};

/// 输入框接收的编辑动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
  Insert(char),
  Delete,
  Left,
  Right,
}

/// 单行输入框，光标以字符而非字节计数
#[derive(Debug, Default, Clone)]
pub struct TextInput {
  /// 输入的内容
  value: String,

  /// 下一个要插入的字符的位置
  index: usize,

  /// 是否以掩码展示（密码）
  masked: bool,
}

impl TextInput {
  pub fn masked() -> Self {
    Self {
      masked: true,
      ..Self::default()
    }
  }

  pub fn value(&self) -> &str {
    &self.value
  }

  pub fn cursor(&self) -> usize {
    self.index
  }

  pub fn set_value<T>(&mut self, value: T)
  where
    T: Into<String>,
  {
    self.value = value.into();
    self.index = self.value.chars().count();
  }

  pub fn clear(&mut self) {
    self.set_value(String::new());
  }

  pub fn apply(&mut self, edit: Edit) {
    match edit {
      Edit::Insert(c) => self.enter_char(c),
      Edit::Delete => {
        self.delete_char();
      }
      Edit::Left => self.move_cursor_left(),
      Edit::Right => self.move_cursor_right(),
    }
  }

  pub fn enter_char(&mut self, new_char: char) {
    let index = self.byte_index();
    self.value.insert(index, new_char);
    self.move_cursor_right();
  }

  /// 删除光标前的一个字符，返回是否有字符被删除
  pub fn delete_char(&mut self) -> bool {
    if self.index == 0 {
      return false;
    }

    // String::remove 按字节操作，这里按字符重新拼接，避免落在多字节字符中间
    let before = self.value.chars().take(self.index - 1);
    let after = self.value.chars().skip(self.index);
    self.value = before.chain(after).collect();
    self.move_cursor_left();
    true
  }

  pub fn move_cursor_left(&mut self) {
    self.index = self.clamp_cursor(self.index.saturating_sub(1));
  }

  pub fn move_cursor_right(&mut self) {
    self.index = self.clamp_cursor(self.index.saturating_add(1));
  }

  /// 光标所在字符的字节位置
  fn byte_index(&self) -> usize {
    self
      .value
      .char_indices()
      .map(|(i, _)| i)
      .nth(self.index)
      .unwrap_or(self.value.len())
  }

  fn clamp_cursor(&self, new_index: usize) -> usize {
    new_index.clamp(0, self.value.chars().count())
  }

  /// 渲染为一行，聚焦时在光标处展示反色块
  pub fn render_line<'a>(&self, label: &'a str, style: Style, focus: bool) -> Line<'a> {
    let shown: Vec<char> = match self.masked {
      true => self.value.chars().map(|_| '•').collect(),
      false => self.value.chars().collect(),
    };

    let mut line = Line::default();
    line.push_span(Span::styled(label, style.bold()));
    line.push_span(Span::raw(" "));

    if !focus {
      line.push_span(Span::styled(String::from_iter(&shown), style));
      return line;
    }

    let (head, tail) = shown.split_at(self.index.min(shown.len()));
    line.push_span(Span::styled(String::from_iter(head), style));
    match tail.split_first() {
      Some((c, rest)) => {
        line.push_span(Span::styled(c.to_string(), style.reversed()));
        line.push_span(Span::styled(String::from_iter(rest), style));
      }
      None => line.push_span(Span::styled(" ", style.reversed())),
    }
    line
  }
}
