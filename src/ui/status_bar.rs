use chrono::{DateTime, Local};
use ratatui::{
  buffer::Buffer,
  layout::{Constraint, Layout, Rect},
  style::{Color, Style, Stylize},
  text::{Line, Span},
  widgets::Widget,
};

#[derive(Copy, Clone)]
pub struct Theme {
  pub bg: Color,
  pub prefix: Style,
  pub info: Style,
  pub error: Style,
  pub clock: Style,
}

impl Default for Theme {
  fn default() -> Self {
    Self {
      bg: Color::Black,
      prefix: Style::new().cyan().bold(),
      info: Style::new().gray(),
      error: Style::new().red().bold(),
      clock: Style::new().cyan().bold(),
    }
  }
}

const INFO_PREFIX: &str = " # ";
const ERROR_PREFIX: &str = " ! ";

/// 时钟的展示宽度，"HH:MM:SS " 加左右留白
const CLOCK_WIDTH: u16 = 10;

/// 渲染界面最底部的状态栏，左边展示按键提示或错误消息，右边展示系统时钟
pub struct StatusBar {
  /// 按键提示
  tips: String,

  /// 错误信息，存在时优先展示，设置新的提示时被清除
  critical: String,

  theme: Theme,
}

impl StatusBar {
  pub fn new(theme: Theme) -> Self {
    Self {
      tips: String::new(),
      critical: String::new(),
      theme,
    }
  }

  pub fn set_tips<T>(&mut self, message: T)
  where
    T: Into<String>,
  {
    self.tips = message.into();
    self.reset_error();
  }

  pub fn set_error<T>(&mut self, message: T)
  where
    T: Into<String>,
  {
    self.critical = message.into();
  }

  /// 清空错误，返回是否真的有错误被清空
  pub fn reset_error(&mut self) -> bool {
    if self.critical.is_empty() {
      false
    } else {
      self.critical.clear();
      true
    }
  }

  pub fn tips(&self) -> &str {
    &self.tips
  }

  pub fn error(&self) -> Option<&str> {
    (!self.critical.is_empty()).then_some(self.critical.as_str())
  }

  pub fn render(&self, area: Rect, buf: &mut Buffer, now: DateTime<Local>) {
    let horizontal = Layout::horizontal([Constraint::Fill(1), Constraint::Length(CLOCK_WIDTH)]);
    let [left, right] = area.layout(&horizontal);

    let mut line = Line::default().bg(self.theme.bg);
    match self.error() {
      Some(error) => {
        line.push_span(Span::styled(ERROR_PREFIX, self.theme.prefix));
        line.push_span(Span::styled(error, self.theme.error));
      }
      None => {
        line.push_span(Span::styled(INFO_PREFIX, self.theme.prefix));
        line.push_span(Span::styled(self.tips.as_str(), self.theme.info));
      }
    }
    line.render(left, buf);

    Line::from(Span::styled(
      now.format(" %H:%M:%S ").to_string(),
      self.theme.clock,
    ))
    .bg(self.theme.bg)
    .right_aligned()
    .render(right, buf);
  }
}
