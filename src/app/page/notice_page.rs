use crate::{
  app::controller::NoticeController,
  sim::{Phase, Severity},
  ui::{Page, PageState},
};
use ratatui::{
  buffer::Buffer,
  layout::{Constraint, Layout, Rect},
  style::{Color, Modifier, Style, Stylize},
  text::{Line, Span},
  widgets::{Block, BorderType, Paragraph, Widget},
};
use std::{borrow::Cow, cell::RefCell, rc::Rc};

/// 每条通知占据的行数
const NOTICE_HEIGHT: u16 = 3;

/// 浮在右上角的通知栈
pub struct NoticePage {
  pub notice_controller: Rc<RefCell<NoticeController>>,
}

impl Page for NoticePage {
  fn render(&self, area: Rect, buf: &mut Buffer, _: &PageState) {
    let ctrl = self.notice_controller.borrow();
    let rows = Layout::vertical(ctrl.notices().iter().map(|_| Constraint::Length(NOTICE_HEIGHT)));

    for (notice, rect) in ctrl.notices().iter().zip(rows.split(area).iter()) {
      let color = match notice.severity {
        Severity::Critical => Color::Red,
        Severity::Warning => Color::Yellow,
        Severity::Nominal => Color::Green,
        Severity::Info => Color::Cyan,
      };

      // 离场中的通知淡出展示
      let style = match notice.phase {
        Phase::Shown => Style::new().fg(color),
        Phase::Leaving => Style::new().fg(color).add_modifier(Modifier::DIM),
      };

      Paragraph::new(Line::from(vec![
        Span::raw(notice.message.as_str()).white(),
        Span::raw("  Now").dark_gray(),
      ]))
      .block(
        Block::bordered()
          .border_type(BorderType::Rounded)
          .border_style(style)
          .title(Span::styled(format!(" {} ", notice.severity), style)),
      )
      .render(*rect, buf);
    }
  }

  fn title(&'_ self) -> Cow<'_, str> {
    "Notifications".into()
  }

  fn height_hint(&self) -> u16 {
    self.notice_controller.borrow().notices().len() as u16 * NOTICE_HEIGHT
  }
}
