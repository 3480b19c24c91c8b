use crate::{
  app::{controller::ServiceController, page::hint},
  sim::Verification,
  ui::{Page, PageState},
};
use ratatui::{
  buffer::Buffer,
  layout::{Constraint, Layout, Rect},
  style::{Style, Stylize},
  text::{Line, Text},
  widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};
use std::{borrow::Cow, cell::RefCell, rc::Rc};

/// 游客看板：数字身份卡片与 SOS 按钮
pub struct TouristPage {
  pub service_controller: Rc<RefCell<ServiceController>>,
}

impl Page for TouristPage {
  fn render(&self, area: Rect, buf: &mut Buffer, _: &PageState) {
    let ctrl = self.service_controller.borrow();
    let horizontal = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).spacing(1);
    let [left, right] = area.layout(&horizontal);

    // 身份卡片
    let verified = match ctrl.verification() {
      Verification::Verified => Line::raw("ID status: verified").green(),
      _ => Line::raw("ID status: pending verification").yellow(),
    };
    let card = Text::from(vec![
      Line::raw("Safety score: 92 / 100").white().bold(),
      verified,
      Line::raw("Zone: Chennai Central (safe)").gray(),
    ]);
    Paragraph::new(card)
      .block(Block::bordered().border_type(BorderType::Rounded).cyan().title(" Digital ID "))
      .render(left, buf);

    // SOS 区域
    let mut sos = Text::default();
    match ctrl.last_sos() {
      Some(signal) => {
        sos.push_line(Line::raw("SOS SIGNAL TRANSMITTED").red().bold());
        sos.push_line(Line::raw(format!("GPS: {}° N, {}° E", signal.latitude, signal.longitude)).white());
        sos.push_line(Line::raw(format!("Location: {}", signal.place)).white());
      }
      None => sos.push_line(hint("press 's' to send an SOS alert", Style::new().gray())),
    }
    Paragraph::new(sos)
      .wrap(Wrap { trim: true })
      .block(Block::bordered().border_type(BorderType::Double).red().title(" Emergency "))
      .render(right, buf);
  }

  fn title(&'_ self) -> Cow<'_, str> {
    "Tourist Dashboard".into()
  }
}
