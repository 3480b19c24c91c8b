use crate::{
  app::Controller,
  sim::{Actor, Backend, FeedEvent, FieldMarks, LoginOutcome},
  ui::{Edit, TextInput},
};

/// 登录表单中获得焦点的输入框
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Field {
  #[default]
  Identifier,
  Secret,
}

/// 一个身份的登录表单
#[derive(Clone)]
pub struct LoginForm {
  pub identifier: TextInput,
  pub secret: TextInput,
  pub focus: Field,

  /// 被标记为错误的输入框
  pub marks: FieldMarks,

  /// 已提交，正在等待鉴权
  pub pending: bool,
}

impl Default for LoginForm {
  fn default() -> Self {
    Self {
      identifier: TextInput::default(),
      secret: TextInput::masked(),
      focus: Field::default(),
      marks: FieldMarks::default(),
      pending: false,
    }
  }
}

impl LoginForm {
  fn focused(&mut self) -> &mut TextInput {
    match self.focus {
      Field::Identifier => &mut self.identifier,
      Field::Secret => &mut self.secret,
    }
  }
}

/// 游客与警员两个登录表单的控制器
#[derive(Default)]
pub struct FormController {
  tourist: LoginForm,
  officer: LoginForm,

  /// 本帧请求提交的表单
  submit: Option<Actor>,
}

impl FormController {
  pub fn form(&self, actor: Actor) -> &LoginForm {
    match actor {
      Actor::Tourist => &self.tourist,
      Actor::Officer => &self.officer,
    }
  }

  fn form_mut(&mut self, actor: Actor) -> &mut LoginForm {
    match actor {
      Actor::Tourist => &mut self.tourist,
      Actor::Officer => &mut self.officer,
    }
  }

  /// 编辑获得焦点的输入框，等待鉴权时忽略
  pub fn edit(&mut self, actor: Actor, edit: Edit) {
    let form = self.form_mut(actor);
    if !form.pending {
      form.focused().apply(edit);
    }
  }

  pub fn next_field(&mut self, actor: Actor) {
    let form = self.form_mut(actor);
    form.focus = match form.focus {
      Field::Identifier => Field::Secret,
      Field::Secret => Field::Identifier,
    };
  }

  pub fn want_submit(&mut self, actor: Actor) {
    self.submit = Some(actor);
  }

  /// 清空表单，重新进入登录页面时使用
  pub fn reset(&mut self, actor: Actor) {
    *self.form_mut(actor) = LoginForm::default();
  }
}

impl Controller for FormController {
  fn run_once(&mut self, backend: &mut Backend) {
    let Some(actor) = self.submit.take() else {
      return;
    };

    let form = self.form(actor);
    let (identifier, secret) = (form.identifier.value().to_owned(), form.secret.value().to_owned());
    if let LoginOutcome::Rejected(marks) = backend.validate_and_login(actor, &identifier, &secret) {
      log::debug!("{actor} login rejected: {marks:?}");
    }
  }

  fn on_event(&mut self, event: &FeedEvent) {
    match event {
      FeedEvent::FieldsMarked(actor, marks) => self.form_mut(*actor).marks = *marks,
      FeedEvent::FieldsCleared(actor) => self.form_mut(*actor).marks = FieldMarks::default(),
      FeedEvent::LoginPending(actor) => self.form_mut(*actor).pending = true,
      FeedEvent::ViewSwitched(_) => {
        self.tourist.pending = false;
        self.officer.pending = false;
      }
      _ => {}
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_editing_follows_focus() {
    let mut ctrl = FormController::default();
    ctrl.edit(Actor::Officer, Edit::Insert('a'));
    ctrl.next_field(Actor::Officer);
    ctrl.edit(Actor::Officer, Edit::Insert('b'));

    let form = ctrl.form(Actor::Officer);
    assert_eq!(form.identifier.value(), "a");
    assert_eq!(form.secret.value(), "b");
    assert_eq!(ctrl.form(Actor::Tourist).identifier.value(), "");

    ctrl.on_event(&FeedEvent::LoginPending(Actor::Officer));
    ctrl.edit(Actor::Officer, Edit::Insert('c'));
    assert_eq!(ctrl.form(Actor::Officer).secret.value(), "b");

    ctrl.reset(Actor::Officer);
    assert_eq!(ctrl.form(Actor::Officer).focus, Field::Identifier);
    assert!(!ctrl.form(Actor::Officer).pending);
  }
}
