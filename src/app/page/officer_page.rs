use crate::{
  app::controller::LogController,
  sim::{LogLine, LogTag, Severity},
  ui::{Page, PageState},
};
use ratatui::{
  buffer::Buffer,
  layout::{Constraint, Layout, Rect},
  style::{Color, Stylize},
  text::{Line, Span},
  widgets::{Paragraph, Widget},
};
use std::{borrow::Cow, cell::RefCell, rc::Rc};

/// 警员看板：顶部统计，下方是实时滚动的系统日志终端
pub struct OfficerPage {
  pub log_controller: Rc<RefCell<LogController>>,
}

impl Page for OfficerPage {
  fn render(&self, area: Rect, buf: &mut Buffer, _: &PageState) {
    let mut ctrl = self.log_controller.borrow_mut();
    let vertical = Layout::vertical([Constraint::Length(1), Constraint::Length(1), Constraint::Fill(1)]);
    let [stats, _, terminal] = area.layout(&vertical);

    // 先应用本帧的滚动控制
    let lines: Vec<Line> = ctrl
      .visible(terminal.height as usize)
      .iter()
      .map(render_line)
      .collect();

    let live = match ctrl.is_live() {
      true => Span::raw("● LIVE").green().bold(),
      false => Span::raw("○ OFFLINE").dark_gray(),
    };
    let follow = match ctrl.view_mut().is_following() {
      true => Span::raw("  tail").cyan(),
      false => Span::raw("  paused").yellow(),
    };
    Line::from(vec![
      live,
      Span::raw(format!("   alerts: {}", ctrl.alerts())).white(),
      Span::raw(format!("   lines: {}", ctrl.lines().len())).gray(),
      follow,
    ])
    .render(stats, buf);

    Paragraph::new(lines).render(terminal, buf);
  }

  fn title(&'_ self) -> Cow<'_, str> {
    "System Logs".into()
  }
}

fn render_line(line: &LogLine) -> Line<'static> {
  let color = match line.tag {
    LogTag::System => Color::Rgb(0xf8, 0x98, 0x20),
    LogTag::Alert(Severity::Critical) => Color::Red,
    LogTag::Alert(Severity::Warning) => Color::Yellow,
    LogTag::Alert(Severity::Nominal) => Color::Green,
    LogTag::Alert(Severity::Info) => Color::White,
  };

  Line::from(vec![
    Span::raw(format!("[{}] ", line.clock())).dark_gray(),
    Span::raw(line.message.clone()).fg(color),
  ])
}
