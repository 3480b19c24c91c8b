use crate::{
  app::page::hint,
  ui::{Page, PageState},
};
use ratatui::{
  buffer::Buffer,
  layout::{Alignment, Constraint, Flex, Layout, Rect},
  style::{Style, Stylize},
  text::{Line, Text},
  widgets::{Paragraph, Widget},
};
use std::borrow::Cow;

const BANNER: [&str; 5] = [
  r" ____         __        _____                 ",
  r"/ ___|  __ _ / _| ___  |_   _|__  _   _ _ __  ",
  r"\___ \ / _` | |_ / _ \   | |/ _ \| | | | '__| ",
  r" ___) | (_| |  _|  __/   | | (_) | |_| | |    ",
  r"|____/ \__,_|_|  \___|   |_|\___/ \__,_|_|    ",
];

/// 落地页，独立于应用外壳
pub struct LandingPage;

impl Page for LandingPage {
  fn render(&self, area: Rect, buf: &mut Buffer, _: &PageState) {
    let height = BANNER.len() as u16 + 5;
    let vertical = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
    let [center] = area.layout(&vertical);

    let mut text = Text::default();
    for row in BANNER {
      text.push_line(Line::raw(row).cyan().bold());
    }
    text.push_line(Line::default());
    text.push_line(Line::raw("TAMIL NADU SMART TOURIST SAFETY GRID").magenta().bold());
    text.push_line(Line::raw("geo-fencing · live incident feed · one-tap SOS").gray());
    text.push_line(Line::default());
    text.push_line(hint("press 'enter' to initialize the system", Style::new().white()));

    Paragraph::new(text)
      .alignment(Alignment::Center)
      .render(center, buf);
  }

  fn title(&'_ self) -> Cow<'_, str> {
    "".into()
  }
}
