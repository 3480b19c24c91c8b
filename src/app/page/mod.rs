use crate::sim::ViewName;
use ratatui::{
  style::{Style, Stylize},
  text::{Line, Span},
};

mod debug_page;
mod landing_page;
mod login_page;
mod notice_page;
mod officer_page;
mod register_page;
mod role_page;
mod tourist_page;

pub use debug_page::DebugPage;
pub use landing_page::LandingPage;
pub use login_page::LoginPage;
pub use notice_page::NoticePage;
pub use officer_page::OfficerPage;
pub use register_page::RegisterPage;
pub use role_page::RolePage;
pub use tourist_page::TouristPage;

/// 调试页面的索引，与视图页面的索引错开
pub const DEBUG_PAGE: usize = 100;

/// 视图对应的页面索引
pub fn page_of(view: ViewName) -> usize {
  view as usize
}

/// 把一句提示渲染为一行，其中用单引号括起来的按键高亮展示
pub fn hint<'a>(text: &'a str, style: Style) -> Line<'a> {
  let spans = text.split('\'').enumerate().filter(|(_, s)| !s.is_empty()).map(|(i, s)| {
    // 奇数段落在引号之内
    if i % 2 == 1 {
      Span::styled(s, style.cyan().bold())
    } else {
      Span::styled(s, style)
    }
  });
  Line::from_iter(spans)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_hint() {
    let line = hint("press 's' to send, 'esc' to leave", Style::new());
    let contents: Vec<&str> = line.spans.iter().map(|s| s.content.as_ref()).collect();
    assert_eq!(contents, vec!["press ", "s", " to send, ", "esc", " to leave"]);
  }
}
