use crate::{
  app::controller::DebugController,
  debug::Item,
  ui::{Page, PageState},
};
use ratatui::{
  buffer::Buffer,
  layout::Rect,
  style::{Color, Stylize},
  text::{Line, Span},
  widgets::{Paragraph, Widget},
};
use std::{borrow::Cow, cell::RefCell, rc::Rc};

pub struct DebugPage {
  pub debug_controller: Rc<RefCell<DebugController>>,
}

impl Page for DebugPage {
  fn render(&self, area: Rect, buf: &mut Buffer, _: &PageState) {
    let mut ctrl = self.debug_controller.borrow_mut();
    let lines: Vec<Line> = ctrl
      .visible(area.height as usize)
      .iter()
      .map(render_item)
      .collect();
    Paragraph::new(lines).render(area, buf);
  }

  fn title(&'_ self) -> Cow<'_, str> {
    "Debug Logs".into()
  }
}

fn render_item(item: &Item) -> Line<'static> {
  let color = if item.is_error() {
    Color::Red
  } else {
    Color::White
  };

  Line::from(vec![
    Span::raw(item.date.format("%H:%M:%S").to_string()).cyan(),
    Span::raw(" "),
    Span::raw(item.content.clone()).fg(color),
  ])
}
