use crate::{
  app::{controller::ServiceController, page::hint},
  sim::Verification,
  ui::{Page, PageState},
};
use ratatui::{
  buffer::Buffer,
  layout::{Constraint, Flex, Layout, Rect},
  style::{Style, Stylize},
  text::{Line, Span, Text},
  widgets::{Paragraph, Widget},
};
use std::{borrow::Cow, cell::RefCell, rc::Rc};

/// 游客注册页面，通过 DigiLocker 核验身份
pub struct RegisterPage {
  pub service_controller: Rc<RefCell<ServiceController>>,
}

impl Page for RegisterPage {
  fn render(&self, area: Rect, buf: &mut Buffer, _: &PageState) {
    let verification = self.service_controller.borrow().verification();
    let status = match verification {
      Verification::Unverified => Line::from(vec![
        Span::raw("🪪 ").white(),
        Span::raw("Verify with DigiLocker").white().bold(),
      ]),
      Verification::Connecting => Line::from(vec![
        Span::raw("⏳ ").yellow(),
        Span::raw("Connecting to UIDAI...").yellow(),
      ]),
      Verification::Verified => Line::from(vec![
        Span::raw("✅ ").green(),
        Span::raw("Aadhaar Verified").green().bold(),
      ]),
    };

    let mut text = Text::default();
    text.push_line(Line::raw("Create your digital tourist ID").gray());
    text.push_line(Line::default());
    text.push_line(status);
    text.push_line(Line::default());
    text.push_line(hint("'v' verify identity · 'l' go to login", Style::new().gray()));

    let vertical = Layout::vertical([Constraint::Length(text.height() as u16)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Max(50)]).flex(Flex::Center);
    let [row] = area.layout(&vertical);
    let [center] = row.layout(&horizontal);
    Paragraph::new(text).render(center, buf);
  }

  fn title(&'_ self) -> Cow<'_, str> {
    "Tourist Registration".into()
  }
}
