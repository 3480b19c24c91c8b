use crate::{
  app::{
    Controller, Pacer, StateBuilder,
    controller::{
      AppController, DebugController, FormController, LogController, NoticeController,
      ServiceController,
    },
    page::{
      DEBUG_PAGE, DebugPage, LandingPage, LoginPage, NoticePage, OfficerPage, RegisterPage,
      RolePage, TouristPage, page_of,
    },
    state::{
      BLANK_STATE, BlankState, LandingState, LoginState, OfficerDashState, QUIT_STATE, QuitState,
      RegisterState, RoleState, TouristDashState, state_for, state_of,
    },
  },
  debug,
  sim::{Actor, Backend, Screen, ThreadRandom, Timing, ViewName},
  ui::{Pager, StateMachine, pager::Theme as PagerTheme},
};
use chrono::Local;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEvent};
use futures::StreamExt;
use log::LevelFilter;
use ratatui::{DefaultTerminal, Frame};
use std::{cell::RefCell, rc::Rc, time::Duration};

/// 程序配置
pub struct Config {
  /// 启动后展示的视图
  pub start_view: ViewName,

  /// 模拟后台的各种延迟与周期
  pub timing: Timing,

  /// 没有定时任务到期时，界面的刷新间隔（系统时钟按秒走）
  pub refresh: Duration,

  /// 调试日志缓冲区的容量
  pub debug_lines: usize,

  /// 页面整体的风格
  pub pager_theme: PagerTheme,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      start_view: ViewName::Landing,
      timing: Timing::default(),
      refresh: Duration::from_secs(1),
      debug_lines: 1000,
      pager_theme: PagerTheme::default(),
    }
  }
}

/// 终端界面的主体，也是该应用进程的启动入口
pub struct Viewer {
  /// 模拟的后台
  backend: Backend,

  /// 页面管理器
  pager: Pager,

  /// 状态管理器
  sm: StateMachine,

  /// 所有的控制器
  controllers: Vec<Rc<RefCell<dyn Controller>>>,

  /// 页面与状态上一次同步到的画面
  shown: Option<Screen>,
}

impl Viewer {
  /// 启动 UI 渲染流程，包装核心循环，并做好资源回收
  pub fn run(config: Config) -> Result<()> {
    color_eyre::install()?;
    debug::enable_debug(config.debug_lines, LevelFilter::Debug);

    let backend = Backend::new(config.timing, Local::now(), ThreadRandom);
    let mut viewer = Viewer::new(&config, backend);

    let res = ratatui::run(|terminal| {
      // 单线程即可，所有逻辑都在同一个控制线程上执行
      let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

      rt.block_on(viewer.main_loop(terminal, config.refresh))
    });

    // 终端交还之后，日志改为写到标准错误
    debug::disable_debug();
    res
  }

  /// 构造界面，绑定控制器、页面与状态
  pub fn new(config: &Config, mut backend: Backend) -> Self {
    // ------------------------------------------
    // 创造各个控制器
    let app_controller = Rc::new(RefCell::new(AppController::default()));
    let form_controller = Rc::new(RefCell::new(FormController::default()));
    let service_controller = Rc::new(RefCell::new(ServiceController::default()));
    let log_controller = Rc::new(RefCell::new(LogController::default()));
    let notice_controller = Rc::new(RefCell::new(NoticeController::default()));
    let debug_controller = Rc::new(RefCell::new(DebugController::default()));

    // ------------------------------------------
    // 记录所有控制器，视图跳转的控制器最先执行
    let controllers: Vec<Rc<RefCell<dyn Controller>>> = vec![
      app_controller.clone(),
      form_controller.clone(),
      service_controller.clone(),
      log_controller.clone(),
      notice_controller.clone(),
      debug_controller.clone(),
    ];

    // ------------------------------------------
    // 构建状态
    let login_state = |actor| LoginState::new(actor, app_controller.clone(), form_controller.clone());
    let sm = StateMachine::default()
      .root_state(
        state_of(ViewName::Landing),
        LandingState::new(app_controller.clone()).build(),
      )
      .state(
        state_of(ViewName::RoleSelect),
        RoleState::new(app_controller.clone()).build(),
      )
      .state(
        state_of(ViewName::LoginTourist),
        login_state(Actor::Tourist).build(),
      )
      .state(
        state_of(ViewName::LoginOfficer),
        login_state(Actor::Officer).build(),
      )
      .state(
        state_of(ViewName::RegisterTourist),
        RegisterState::new(app_controller.clone(), service_controller.clone()).build(),
      )
      .state(
        state_of(ViewName::DashTourist),
        TouristDashState::new(app_controller.clone(), service_controller.clone()).build(),
      )
      .state(
        state_of(ViewName::DashOfficer),
        OfficerDashState::new(app_controller.clone(), log_controller.clone()).build(),
      )
      .state(BLANK_STATE, BlankState::new(app_controller.clone()).build())
      .state(QUIT_STATE, QuitState::new(app_controller).build());

    // ------------------------------------------
    // 构建页面
    let pager = Pager::new(config.pager_theme)
      .add_page(page_of(ViewName::Landing), LandingPage)
      .add_page(page_of(ViewName::RoleSelect), RolePage)
      .add_page(
        page_of(ViewName::LoginTourist),
        LoginPage {
          actor: Actor::Tourist,
          form_controller: form_controller.clone(),
        },
      )
      .add_page(
        page_of(ViewName::LoginOfficer),
        LoginPage {
          actor: Actor::Officer,
          form_controller,
        },
      )
      .add_page(
        page_of(ViewName::RegisterTourist),
        RegisterPage {
          service_controller: service_controller.clone(),
        },
      )
      .add_page(
        page_of(ViewName::DashTourist),
        TouristPage { service_controller },
      )
      .add_page(page_of(ViewName::DashOfficer), OfficerPage { log_controller })
      .add_page(DEBUG_PAGE, DebugPage { debug_controller })
      .with_overlay(NoticePage { notice_controller });

    // ------------------------------------------
    // 直接打开指定的视图，产生的事件留到第一次处理时消费
    if config.start_view != ViewName::Landing {
      backend.switch_view(config.start_view);
    }

    Viewer {
      backend,
      pager,
      sm,
      controllers,
      shown: None,
    }
  }

  /// 执行初始状态的进入流程，并同步一次画面
  pub fn start(&mut self) {
    self.sm.first_run(&mut self.pager);
    let now = self.backend.now();
    self.step(now);
  }

  /// 响应一个按键事件，返回是否结束程序
  pub fn handle_key(&mut self, event: KeyEvent) -> bool {
    self.sm.handle(&mut self.pager, event)
  }

  /// 把后台推进到虚拟时刻 `now`，并完成一轮数据处理，返回是否结束程序
  pub fn step(&mut self, now: Duration) -> bool {
    let now = now.max(self.backend.now());
    self.backend.advance_to(now);

    // 把各个控制器积累的操作意图交给后台
    for controller in self.controllers.iter() {
      controller.borrow_mut().run_once(&mut self.backend);
    }

    // 消费后台发出的事件
    let events = self.backend.drain_events();
    for controller in self.controllers.iter() {
      let mut ctrl = controller.borrow_mut();
      for event in events.iter() {
        ctrl.on_event(event);
      }
    }

    self.sync_screen();
    self.controllers.iter().any(|c| c.borrow().should_quit())
  }

  /// 渲染界面，时钟与日志时间戳同样取自后台的虚拟时间
  pub fn render(&self, frame: &mut Frame) {
    self.pager.render(frame, self.backend.wall_now());
  }

  pub fn backend(&self) -> &Backend {
    &self.backend
  }

  pub fn pager(&mut self) -> &mut Pager {
    &mut self.pager
  }

  pub fn state_name(&self) -> Option<&str> {
    self.sm.current_name()
  }

  /// 画面变化后，页面与状态跟随后台切换
  fn sync_screen(&mut self) {
    let screen = self.backend.screen();
    if self.shown == Some(screen) {
      return;
    }

    log::debug!("screen changed to {screen:?}");
    self.shown = Some(screen);
    self.pager.show(screen.view().map(page_of));
    self.pager.set_shell(match screen {
      Screen::App(view) => Some(view.title().to_string()),
      _ => None,
    });
    self.sm.follow(&mut self.pager, state_for(screen));
  }

  /// 核心处理与渲染循环
  async fn main_loop(&mut self, terminal: &mut DefaultTerminal, refresh: Duration) -> Result<()> {
    let pacer = Pacer::start();
    let mut events = EventStream::new();
    self.start();

    loop {
      terminal.draw(|frame| self.render(frame))?;

      // 等待键盘事件，或者等到下一个定时任务到期
      let wake = pacer.wake_at(self.backend.next_due(), refresh);
      tokio::select! {
        event = events.next() => match event {
          Some(Ok(Event::Key(key))) => {
            if self.handle_key(key) {
              return Ok(());
            }
          }
          Some(Ok(_)) => {}
          Some(Err(e)) => log::error!("failed to read terminal event: {e}"),
          None => return Ok(()),
        },
        _ = tokio::time::sleep_until(wake) => {}
      }

      if self.step(pacer.elapsed()) {
        return Ok(());
      }
    }
  }
}
