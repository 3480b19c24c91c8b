//! 应用里互斥展示的各个视图，以及视图切换时的纯函数式画面转移

use anyhow::{Result, anyhow};
use itertools::Itertools;
use std::{fmt, str::FromStr};

/// 应用中的视图，同一时刻最多只有一个可见
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ViewName {
  /// 落地页，位于应用外壳之外
  Landing,

  /// 选择身份（游客或警员）
  RoleSelect,

  LoginTourist,
  RegisterTourist,
  DashTourist,
  LoginOfficer,

  /// 警员看板，进入时启动事件流，离开时停止
  DashOfficer,
}

impl ViewName {
  pub const ALL: [ViewName; 7] = [
    ViewName::Landing,
    ViewName::RoleSelect,
    ViewName::LoginTourist,
    ViewName::RegisterTourist,
    ViewName::DashTourist,
    ViewName::LoginOfficer,
    ViewName::DashOfficer,
  ];

  /// 规范名称，与 `switch_to` 接受的字符串一致
  pub fn name(self) -> &'static str {
    match self {
      ViewName::Landing => "landing",
      ViewName::RoleSelect => "role",
      ViewName::LoginTourist => "login-tourist",
      ViewName::RegisterTourist => "register-tourist",
      ViewName::DashTourist => "dash-tourist",
      ViewName::LoginOfficer => "login-officer",
      ViewName::DashOfficer => "dash-officer",
    }
  }

  /// 页面标题
  pub fn title(self) -> &'static str {
    match self {
      ViewName::Landing => "Welcome",
      ViewName::RoleSelect => "Select Role",
      ViewName::LoginTourist => "Tourist Login",
      ViewName::RegisterTourist => "Tourist Registration",
      ViewName::DashTourist => "Tourist Dashboard",
      ViewName::LoginOfficer => "Officer Login",
      ViewName::DashOfficer => "Command Center",
    }
  }

  pub fn is_officer_dashboard(self) -> bool {
    self == ViewName::DashOfficer
  }
}

impl fmt::Display for ViewName {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for ViewName {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> Result<Self> {
    let lowered = s.trim().to_ascii_lowercase();
    let name = lowered.strip_prefix("view-").unwrap_or(&lowered);

    match name {
      "landing" => Ok(ViewName::Landing),
      "role" | "role-select" => Ok(ViewName::RoleSelect),
      "login-tourist" => Ok(ViewName::LoginTourist),
      "register-tourist" => Ok(ViewName::RegisterTourist),
      "dash-tourist" | "dashboard-tourist" => Ok(ViewName::DashTourist),
      "login-officer" => Ok(ViewName::LoginOfficer),
      "dash-officer" | "dashboard-officer" => Ok(ViewName::DashOfficer),
      _ => Err(anyhow!(
        "unknown view '{}', expected one of: {}",
        s.trim(),
        ViewName::ALL.iter().map(|v| v.name()).join(", ")
      )),
    }
  }
}

/// 展示用的容器。落地页独立存在，其余视图都嵌套在应用外壳里
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
  Landing,
  Shell,
  View(ViewName),
}

/// 一次视图切换之后的可见画面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
  /// 所有容器都被隐藏，切换到未知视图时得到
  Blank,

  #[default]
  Landing,

  /// 应用外壳，以及其中的某个视图（不会是 Landing）
  App(ViewName),
}

impl Screen {
  /// 根据切换目标得到画面，`None` 代表目标无法识别
  pub fn resolve(target: Option<ViewName>) -> Screen {
    match target {
      None => Screen::Blank,
      Some(ViewName::Landing) => Screen::Landing,
      Some(view) => Screen::App(view),
    }
  }

  /// 画面转移。先隐藏所有容器，再只展示目标，因此结果与当前画面无关
  pub fn next(self, target: Option<ViewName>) -> Screen {
    Screen::resolve(target)
  }

  /// 当前可见的视图
  pub fn view(self) -> Option<ViewName> {
    match self {
      Screen::Blank => None,
      Screen::Landing => Some(ViewName::Landing),
      Screen::App(view) => Some(view),
    }
  }

  /// 当前可见的所有容器
  pub fn containers(self) -> Vec<Container> {
    match self {
      Screen::Blank => vec![],
      Screen::Landing => vec![Container::Landing],
      Screen::App(view) => vec![Container::Shell, Container::View(view)],
    }
  }

  pub fn is_visible(self, container: Container) -> bool {
    self.containers().contains(&container)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_parse_names() {
    for view in ViewName::ALL {
      assert_eq!(view.name().parse::<ViewName>().unwrap(), view);
    }

    assert_eq!(
      "dashboard-officer".parse::<ViewName>().unwrap(),
      ViewName::DashOfficer
    );
    assert_eq!(
      " View-Dash-Tourist ".parse::<ViewName>().unwrap(),
      ViewName::DashTourist
    );
    assert_eq!(
      "role-select".parse::<ViewName>().unwrap(),
      ViewName::RoleSelect
    );

    let err = "dash-admin".parse::<ViewName>().unwrap_err();
    assert!(err.to_string().contains("dash-admin"));
    assert!(err.to_string().contains("login-officer"));
  }

  #[test]
  fn test_screen_containers() {
    assert!(Screen::resolve(None).containers().is_empty());
    assert_eq!(
      Screen::resolve(Some(ViewName::Landing)).containers(),
      vec![Container::Landing]
    );

    let screen = Screen::Landing.next(Some(ViewName::LoginOfficer));
    assert_eq!(screen, Screen::App(ViewName::LoginOfficer));
    assert!(screen.is_visible(Container::Shell));
    assert!(screen.is_visible(Container::View(ViewName::LoginOfficer)));
    assert!(!screen.is_visible(Container::Landing));
    assert_eq!(screen.view(), Some(ViewName::LoginOfficer));
  }
}
