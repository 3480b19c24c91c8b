use crate::{
  app::{
    controller::{Field, FormController},
    page::hint,
  },
  sim::Actor,
  ui::{Page, PageState},
};
use ratatui::{
  buffer::Buffer,
  layout::{Constraint, Flex, Layout, Rect},
  style::{Style, Stylize},
  text::{Line, Text},
  widgets::{Paragraph, Widget},
};
use std::{borrow::Cow, cell::RefCell, rc::Rc};

/// 登录页面，游客与警员共用，按身份区分表单
pub struct LoginPage {
  pub actor: Actor,
  pub form_controller: Rc<RefCell<FormController>>,
}

impl LoginPage {
  fn labels(&self) -> (&'static str, &'static str) {
    match self.actor {
      Actor::Tourist => ("Mobile / Passport No.", "Password"),
      Actor::Officer => ("Officer ID", "Secure PIN"),
    }
  }
}

impl Page for LoginPage {
  fn render(&self, area: Rect, buf: &mut Buffer, state: &PageState) {
    let ctrl = self.form_controller.borrow();
    let form = ctrl.form(self.actor);
    let (id_label, secret_label) = self.labels();

    let style_of = |marked: bool| match marked {
      true => Style::new().red(),
      false => Style::new().white(),
    };

    let mut text = Text::default();
    text.push_line(form.identifier.render_line(
      id_label,
      style_of(form.marks.identifier),
      state.focus && form.focus == Field::Identifier,
    ));
    text.push_line(Line::default());
    text.push_line(form.secret.render_line(
      secret_label,
      style_of(form.marks.secret),
      state.focus && form.focus == Field::Secret,
    ));
    text.push_line(Line::default());

    if form.pending {
      text.push_line(Line::raw("Authenticating...").yellow().italic());
    } else if form.marks.any() {
      text.push_line(Line::raw("please fill in the highlighted fields").red());
    } else {
      text.push_line(hint("'tab' switch field · 'enter' login", Style::new().gray()));
    }

    let vertical = Layout::vertical([Constraint::Length(text.height() as u16)]).flex(Flex::Center);
    let horizontal = Layout::horizontal([Constraint::Max(60)]).flex(Flex::Center);
    let [row] = area.layout(&vertical);
    let [center] = row.layout(&horizontal);
    Paragraph::new(text).render(center, buf);
  }

  fn title(&'_ self) -> Cow<'_, str> {
    self.actor.login_view().title().into()
  }
}
