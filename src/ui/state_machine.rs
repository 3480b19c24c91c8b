use crate::ui::{Edit, KeyEventEx, Pager};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// 在某个状态下，识别到指定按键事件后，执行的动作。不会引起状态切换
type Action = Box<dyn FnMut(&mut Pager)>;

/// 在某个状态下，识别到指定按键事件后，执行的操作，
/// 返回值决定了是否要跳转到下一个状态
type GotoAction = Box<dyn FnMut(&mut Pager) -> bool>;

/// 输入状态下，对编辑动作的处理
type InputAction = Box<dyn FnMut(&mut Pager, Edit)>;

/// 转移的目标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
  /// 不跳转
  Stay,

  /// 跳转到指定索引的状态
  State(usize),

  /// 回到进入本状态之前的状态
  Back,
}

/// 定义状态响应某个键盘事件后，发生的动作、或下一个转移的目标状态
struct Transition {
  event: KeyEvent,
  act: GotoAction,
  target: Target,
}

/// 状态机中的一个状态
pub struct State {
  /// 状态的名称，仅用于调试
  name: String,

  /// 存在时，本状态优先把字符、退格、左右方向键作为编辑动作处理
  input: Option<InputAction>,

  /// 有序的转移条件及其动作定义
  transitions: Vec<Transition>,

  enter_action: Action,
  leave_action: Action,
}

impl State {
  pub fn new<T>(name: T) -> Self
  where
    T: Into<String>,
  {
    Self {
      name: name.into(),
      input: None,
      transitions: Vec::new(),
      enter_action: Box::new(|_| {}),
      leave_action: Box::new(|_| {}),
    }
  }

  /// 将本状态配置为一个内容输入状态
  pub fn input<F>(mut self, act: F) -> Self
  where
    F: FnMut(&mut Pager, Edit) + 'static,
  {
    self.input = Some(Box::new(act));
    self
  }

  /// 设置一个简单的事件响应动作
  pub fn action<F>(self, event: KeyEvent, mut act: F) -> Self
  where
    F: FnMut(&mut Pager) + 'static,
  {
    self.push(event, Target::Stay, move |pager| {
      act(pager);
      false
    })
  }

  /// 设置一个状态跳转动作
  pub fn goto(self, event: KeyEvent, next_state: usize) -> Self {
    self.push(event, Target::State(next_state), |_| true)
  }

  /// 设置一个状态跳转动作，但跳转前先执行一个处理流程，返回 true 时进行跳转
  pub fn goto_action<F>(self, event: KeyEvent, next_state: usize, act: F) -> Self
  where
    F: FnMut(&mut Pager) -> bool + 'static,
  {
    self.push(event, Target::State(next_state), act)
  }

  /// 设置回到上一个状态的动作，跳转前先执行一个处理流程
  pub fn back_action<F>(self, event: KeyEvent, mut act: F) -> Self
  where
    F: FnMut(&mut Pager) + 'static,
  {
    self.push(event, Target::Back, move |pager| {
      act(pager);
      true
    })
  }

  pub fn enter_action<F>(mut self, act: F) -> Self
  where
    F: FnMut(&mut Pager) + 'static,
  {
    self.enter_action = Box::new(act);
    self
  }

  pub fn leave_action<F>(mut self, act: F) -> Self
  where
    F: FnMut(&mut Pager) + 'static,
  {
    self.leave_action = Box::new(act);
    self
  }

  fn push<F>(mut self, event: KeyEvent, target: Target, act: F) -> Self
  where
    F: FnMut(&mut Pager) -> bool + 'static,
  {
    self.transitions.push(Transition {
      event,
      act: Box::new(act),
      target,
    });
    self
  }
}

impl State {
  pub fn name(&self) -> &str {
    &self.name
  }

  fn enter(&mut self, pager: &mut Pager) {
    (self.enter_action)(pager);
  }

  fn leave(&mut self, pager: &mut Pager) {
    (self.leave_action)(pager);
  }

  /// 响应处理键入的事件，返回转移的目标
  fn react(&mut self, pager: &mut Pager, event: KeyEvent) -> Target {
    if !event.is_press() {
      return Target::Stay;
    }

    // 优先处理输入相关的事件
    if let Some(input) = self.input.as_mut()
      && let Some(edit) = Self::as_edit(&event)
    {
      input(pager, edit);
      return Target::Stay;
    }

    // 从前往后逐一对比事件响应条件，命中第一个时进行处理
    for t in self.transitions.iter_mut() {
      if t.event.same_as(&event) {
        return if (t.act)(pager) {
          t.target
        } else {
          Target::Stay
        };
      }
    }

    Target::Stay
  }

  /// 把按键事件翻译为编辑动作，带 ctrl、alt 的按键不算
  fn as_edit(event: &KeyEvent) -> Option<Edit> {
    if event
      .modifiers
      .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
      return None;
    }

    match event.code {
      KeyCode::Char(c) => Some(Edit::Insert(c)),
      KeyCode::Backspace => Some(Edit::Delete),
      KeyCode::Left => Some(Edit::Left),
      KeyCode::Right => Some(Edit::Right),
      _ => None,
    }
  }
}

/// 处理 UI 的键盘事件，管理多个状态，并执行它们的转移与响应
#[derive(Default)]
pub struct StateMachine {
  /// 使用整数索引的所有状态量
  states: HashMap<usize, State>,

  /// 当前正在活跃的状态
  curr_state_index: usize,

  /// 进入当前状态之前的状态
  prev_state_index: usize,
}

impl StateMachine {
  /// 添加一个状态
  pub fn state(mut self, index: usize, state: State) -> Self {
    self.states.insert(index, state);
    self
  }

  /// 添加一个状态，并将其设置为初始状态
  pub fn root_state(mut self, index: usize, state: State) -> Self {
    self.curr_state_index = index;
    self.prev_state_index = index;
    self.state(index, state)
  }

  pub fn current(&self) -> usize {
    self.curr_state_index
  }

  pub fn current_name(&self) -> Option<&str> {
    self.states.get(&self.curr_state_index).map(State::name)
  }

  /// 状态机的第一次运行，执行初始状态的进入流程
  pub fn first_run(&mut self, pager: &mut Pager) {
    self.enter(pager, self.curr_state_index);
  }

  /// 处理一个按键事件，返回是否结束程序
  pub fn handle(&mut self, pager: &mut Pager, event: KeyEvent) -> bool {
    let event = KeyEvent::platform_consistent(event);

    // ctrl+c 在任何状态下都直接退出
    if event.same_as(&KeyEvent::ctrl('c')) {
      return true;
    }

    let target = match self.states.get_mut(&self.curr_state_index) {
      Some(state) => state.react(pager, event),
      None => Target::Stay,
    };

    match target {
      Target::Stay => {}
      Target::State(index) => self.switch(pager, index),
      Target::Back => self.switch(pager, self.prev_state_index),
    }
    false
  }

  /// 由外部驱动切换到指定状态。已经处于该状态时什么也不做
  pub fn follow(&mut self, pager: &mut Pager, index: usize) {
    if index != self.curr_state_index {
      self.switch(pager, index);
    }
  }

  fn switch(&mut self, pager: &mut Pager, index: usize) {
    if !self.states.contains_key(&index) {
      log::error!("cannot enter state {index}");
      return;
    }

    if let Some(state) = self.states.get_mut(&self.curr_state_index) {
      state.leave(pager);
    }
    self.prev_state_index = self.curr_state_index;
    self.enter(pager, index);
  }

  fn enter(&mut self, pager: &mut Pager, index: usize) {
    self.curr_state_index = index;
    if let Some(state) = self.states.get_mut(&index) {
      log::debug!("enter state '{}'", state.name());
      state.enter(pager);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::{cell::RefCell, rc::Rc};

  const IDLE: usize = 1;
  const EDIT: usize = 2;
  const QUIT: usize = 3;

  #[test]
  fn test_transitions() {
    let typed = Rc::new(RefCell::new(String::new()));
    let typed2 = typed.clone();

    let mut sm = StateMachine::default()
      .root_state(
        IDLE,
        State::new("idle")
          .goto(KeyEvent::plain('e'), EDIT)
          .goto(KeyEvent::plain('q'), QUIT),
      )
      .state(
        EDIT,
        State::new("edit")
          .input(move |_, edit| {
            if let Edit::Insert(c) = edit {
              typed2.borrow_mut().push(c);
            }
          })
          .goto(KeyEvent::simple(KeyCode::Esc), IDLE),
      )
      .state(
        QUIT,
        State::new("quit")
          .enter_action(|pager| pager.status().set_error("Quit or not ? y/n"))
          .back_action(KeyEvent::plain('n'), |pager| {
            pager.status().reset_error();
          }),
      );

    let mut pager = Pager::default();
    sm.first_run(&mut pager);

    sm.handle(&mut pager, KeyEvent::plain('e'));
    assert_eq!(sm.current(), EDIT);

    // 输入状态下，'q' 是输入内容而不是退出
    for c in "quit".chars() {
      sm.handle(&mut pager, KeyEvent::plain(c));
    }
    assert_eq!(typed.borrow().as_str(), "quit");

    sm.handle(&mut pager, KeyEvent::simple(KeyCode::Esc));
    sm.handle(&mut pager, KeyEvent::plain('q'));
    assert_eq!(sm.current_name(), Some("quit"));
    assert!(pager.status().error().is_some());

    sm.handle(&mut pager, KeyEvent::plain('n'));
    assert_eq!(sm.current(), IDLE);
    assert!(pager.status().error().is_none());

    assert!(sm.handle(&mut pager, KeyEvent::ctrl('c')));
  }

  #[test]
  fn test_follow() {
    let entered = Rc::new(RefCell::new(0));
    let entered2 = entered.clone();

    let mut sm = StateMachine::default()
      .root_state(IDLE, State::new("idle"))
      .state(
        EDIT,
        State::new("edit").enter_action(move |_| *entered2.borrow_mut() += 1),
      );
    let mut pager = Pager::default();

    sm.follow(&mut pager, EDIT);
    sm.follow(&mut pager, EDIT);
    assert_eq!(*entered.borrow(), 1);

    // 不存在的状态不会被进入
    sm.follow(&mut pager, 42);
    assert_eq!(sm.current(), EDIT);
  }
}
