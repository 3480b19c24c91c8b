use crate::{
  app::page::hint,
  ui::{Page, PageState},
};
use ratatui::{
  buffer::Buffer,
  layout::{Constraint, Flex, Layout, Rect},
  style::{Style, Stylize},
  text::{Line, Text},
  widgets::{Block, BorderType, Paragraph, Widget},
};
use std::borrow::Cow;

/// 选择身份的页面，左右两张卡片
pub struct RolePage;

impl RolePage {
  fn card(area: Rect, buf: &mut Buffer, title: &str, lines: [&str; 2], keys: &'static str) {
    let block = Block::bordered()
      .border_type(BorderType::Rounded)
      .cyan()
      .title(Line::raw(format!(" {title} ")).white().bold());
    let inner = block.inner(area);
    block.render(area, buf);

    let mut text = Text::default();
    for line in lines {
      text.push_line(Line::raw(line).gray());
    }
    text.push_line(Line::default());
    text.push_line(hint(keys, Style::new().white()));
    Paragraph::new(text).render(inner, buf);
  }
}

impl Page for RolePage {
  fn render(&self, area: Rect, buf: &mut Buffer, _: &PageState) {
    let vertical = Layout::vertical([Constraint::Length(7)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Max(40), Constraint::Max(40)])
      .flex(Flex::Center)
      .spacing(2);
    let [row] = area.layout(&vertical);
    let [left, right] = row.layout(&horizontal);

    Self::card(
      left,
      buf,
      "Tourist",
      ["Digital ID, safety score", "and emergency SOS."],
      "'t' login · 'r' register",
    );
    Self::card(
      right,
      buf,
      "Police / Admin",
      ["Command center with live", "incident monitoring."],
      "'o' officer login",
    );
  }

  fn title(&'_ self) -> Cow<'_, str> {
    "Who are you ?".into()
  }
}
