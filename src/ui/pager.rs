use crate::ui::{StatusBar, status_bar};
use chrono::{DateTime, Local};
use ratatui::{
  Frame,
  buffer::Buffer,
  layout::{Alignment, Constraint, Layout, Rect},
  style::{Color, Style, Stylize},
  text::{Line, Span},
  widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};
use std::{borrow::Cow, collections::HashMap};

/// 页面渲染时的状态
#[derive(Default, Clone, Copy)]
pub struct PageState {
  /// 页面是否持有焦点
  pub focus: bool,
}

/// 适用于本页面管理器的渲染接口
pub trait Page {
  fn render(&self, area: Rect, buf: &mut Buffer, state: &PageState);

  /// 本页面的标题名称
  fn title(&'_ self) -> Cow<'_, str>;

  /// 作为浮层渲染时需要的高度，为零时不渲染
  fn height_hint(&self) -> u16 {
    0
  }
}

/// 没有任何可见页面时展示
struct BlankPage;

impl Page for BlankPage {
  fn render(&self, area: Rect, buf: &mut Buffer, _: &PageState) {
    Paragraph::new("nothing to show, press 'esc' to go back home")
      .alignment(Alignment::Center)
      .dark_gray()
      .render(area, buf);
  }

  fn title(&'_ self) -> Cow<'_, str> {
    "...".into()
  }
}

#[derive(Copy, Clone)]
pub struct PageTheme {
  borders: Borders,
  border_type: BorderType,
  border_style: Style,
  title_style: Style,
}

impl PageTheme {
  pub fn full() -> Self {
    Self {
      borders: Borders::TOP | Borders::BOTTOM,
      border_type: BorderType::Plain,
      border_style: Style::new().cyan(),
      title_style: Style::new().white().bold(),
    }
  }

  pub fn half() -> Self {
    Self {
      borders: Borders::ALL,
      border_type: BorderType::Rounded,
      border_style: Style::new().magenta(),
      title_style: Style::new().white().bold(),
    }
  }
}

#[derive(Copy, Clone)]
pub struct Theme {
  /// 应用外壳标题栏的风格
  shell: Style,

  /// 全屏页面的风格
  full_page: PageTheme,

  /// 半屏页面的风格
  half_page: PageTheme,

  /// 状态栏的风格
  status_bar: status_bar::Theme,

  /// 半屏页面实际占据的比例
  half_page_constraint: Constraint,

  /// 浮层的宽度
  overlay_width: u16,
}

impl Default for Theme {
  fn default() -> Self {
    Self {
      shell: Style::new().bg(Color::Rgb(0x0b, 0x10, 0x2a)).cyan().bold(),
      full_page: PageTheme::full(),
      half_page: PageTheme::half(),
      status_bar: status_bar::Theme::default(),
      half_page_constraint: Constraint::Percentage(35),
      overlay_width: 46,
    }
  }
}

/// 子页面的打开方式
#[derive(Copy, Clone, PartialEq, Eq)]
enum PageMode {
  /// 右半边渲染
  Right(usize),

  /// 全屏渲染
  Full(usize),
}

impl PageMode {
  fn get_index(&self) -> usize {
    match self {
      PageMode::Right(i) | PageMode::Full(i) => *i,
    }
  }
}

/// 页面管理器：根页面由当前视图决定，另有可开关的子页面、右上角的浮层，
/// 以及底部的状态栏。
pub struct Pager {
  /// 各个注册的页面，使用自定义值索引
  pages: HashMap<usize, Box<dyn Page>>,

  /// 当前作为根页面展示的页面，不存在时展示空白页
  root: Option<usize>,

  /// 应用外壳的标题，存在时在顶部渲染标题栏
  shell: Option<String>,

  /// 打开的子页面，至多一个
  side: Option<PageMode>,

  /// 浮在右上角的页面
  overlay: Option<Box<dyn Page>>,

  blank: BlankPage,
  status_bar: StatusBar,
  theme: Theme,
}

impl Default for Pager {
  fn default() -> Self {
    Self::new(Theme::default())
  }
}

impl Pager {
  pub fn new(theme: Theme) -> Self {
    Self {
      pages: HashMap::new(),
      root: None,
      shell: None,
      side: None,
      overlay: None,
      blank: BlankPage,
      status_bar: StatusBar::new(theme.status_bar),
      theme,
    }
  }

  pub fn add_page(mut self, index: usize, page: impl Page + 'static) -> Self {
    self.pages.insert(index, Box::new(page));
    self
  }

  pub fn with_overlay(mut self, page: impl Page + 'static) -> Self {
    self.overlay = Some(Box::new(page));
    self
  }
}

impl Pager {
  pub fn status(&mut self) -> &mut StatusBar {
    &mut self.status_bar
  }

  /// 指定根页面，`None` 代表没有任何页面可见
  pub fn show(&mut self, index: Option<usize>) {
    self.root = index.filter(|i| self.should_have_page(*i));
  }

  pub fn root(&self) -> Option<usize> {
    self.root
  }

  pub fn set_shell(&mut self, title: Option<String>) {
    self.shell = title;
  }

  /// 在右半边打开指定子页面。如果子页面已经处于打开状态，则关掉它
  pub fn toggle_right(&mut self, index: usize) {
    self.toggle_page(PageMode::Right(index));
  }

  /// 全屏打开指定子页面。如果子页面已经处于打开状态，则关掉它
  pub fn toggle_full(&mut self, index: usize) {
    self.toggle_page(PageMode::Full(index));
  }

  /// 关闭子页面，返回是否有页面被关闭
  pub fn close_side(&mut self) -> bool {
    self.side.take().is_some()
  }

  pub fn is_side_open(&self, index: usize) -> bool {
    self.side.is_some_and(|mode| mode.get_index() == index)
  }

  fn toggle_page(&mut self, mode: PageMode) {
    if !self.should_have_page(mode.get_index()) {
      return;
    }

    self.side = match self.side {
      Some(curr) if curr == mode => None,
      _ => Some(mode),
    };
  }

  fn should_have_page(&self, index: usize) -> bool {
    if self.pages.contains_key(&index) {
      true
    } else {
      log::warn!("failed to open the unexisted page ! ({index})");
      false
    }
  }
}

impl Pager {
  /// 渲染整个界面，状态栏的时钟展示 `now`
  pub fn render(&self, frame: &mut Frame, now: DateTime<Local>) {
    // 核心展示部分，以及底部的状态栏
    let vertical = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]);
    let [main, bottom] = frame.area().layout(&vertical);

    self.render_main(main, frame.buffer_mut());
    self.status_bar.render(bottom, frame.buffer_mut(), now);
  }

  fn render_main(&self, area: Rect, buf: &mut Buffer) {
    // 全屏子页面占据全部空间
    if let Some(PageMode::Full(index)) = self.side {
      self.render_page(area, buf, &*self.pages[&index], self.theme.full_page, true);
      return;
    }

    let main = match self.side {
      Some(PageMode::Right(index)) => {
        let horizontal = Layout::horizontal([Constraint::Fill(1), self.theme.half_page_constraint]);
        let [main, right] = area.layout(&horizontal);
        self.render_page(right, buf, &*self.pages[&index], self.theme.half_page, false);
        main
      }
      _ => area,
    };

    // 应用外壳的标题栏
    let main = match &self.shell {
      Some(title) => {
        let vertical = Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]);
        let [header, rest] = main.layout(&vertical);
        Line::from(vec![
          Span::raw(" ◆ TN SAFE-TOUR "),
          Span::raw("│ ").dark_gray(),
          Span::raw(title.as_str()).white(),
        ])
        .style(self.theme.shell)
        .render(header, buf);
        rest
      }
      None => main,
    };

    let root: &dyn Page = match self.root.and_then(|i| self.pages.get(&i)) {
      Some(page) => &**page,
      None => &self.blank,
    };
    self.render_page(main, buf, root, self.theme.full_page, self.side.is_none());

    if let Some(overlay) = &self.overlay {
      self.render_overlay(main, buf, &**overlay);
    }
  }

  /// 在指定区域的右上角渲染浮层
  fn render_overlay(&self, area: Rect, buf: &mut Buffer, page: &dyn Page) {
    let height = page.height_hint().min(area.height);
    if height == 0 {
      return;
    }

    let width = self.theme.overlay_width.min(area.width);
    let rect = Rect::new(area.right() - width, area.y, width, height);
    Clear.render(rect, buf);
    page.render(rect, buf, &PageState::default());
  }

  fn render_page(&self, area: Rect, buf: &mut Buffer, page: &dyn Page, theme: PageTheme, focus: bool) {
    let block = Block::new()
      .borders(theme.borders)
      .border_type(theme.border_type)
      .border_style(theme.border_style)
      .title_style(theme.title_style)
      .title(page.title());
    let inner_area = block.inner(area);
    block.render(area, buf);
    page.render(inner_area, buf, &PageState { focus });
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  struct Named(&'static str);

  impl Page for Named {
    fn render(&self, area: Rect, buf: &mut Buffer, _: &PageState) {
      Paragraph::new(self.0).render(area, buf);
    }

    fn title(&'_ self) -> Cow<'_, str> {
      self.0.into()
    }
  }

  #[test]
  fn test_pages() {
    let mut pager = Pager::default()
      .add_page(1, Named("one"))
      .add_page(2, Named("debug"));

    pager.show(Some(1));
    assert_eq!(pager.root(), Some(1));
    pager.show(Some(9));
    assert_eq!(pager.root(), None);

    pager.toggle_right(2);
    assert!(pager.is_side_open(2));
    pager.toggle_full(2);
    assert!(pager.is_side_open(2));
    pager.toggle_full(2);
    assert!(!pager.is_side_open(2));

    pager.toggle_right(7);
    assert!(!pager.close_side());
  }
}
