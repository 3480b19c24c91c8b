//! 不依赖终端的核心逻辑：视图路由、模拟事件流、虚拟时间轴与模拟服务

mod auth;
mod backend;
mod effects;
mod event;
mod feed;
mod journal;
mod random;
mod router;
mod services;
mod timeline;
mod view;

pub use auth::{Actor, AuthFlow, FieldMarks, LoginOutcome, OFFICER_GRANTED_LOG};
pub use backend::Backend;
pub use effects::{Effects, FeedEffects, FeedSink, Timer, Timing, wall_clock};
pub use event::{FeedEvent, LogLine, LogTag, NoticeId, Notification, Phase, Severity};
pub use feed::{EventFeed, EventTemplate, FeedAlert, FeedState, LOCATIONS, STARTUP_LOGS, TEMPLATES};
pub use journal::{Journal, Notices};
pub use random::{RandomSource, ThreadRandom};
pub use router::{FeedCommand, ViewRouter};
pub use services::{
  IDENTITY_CONFIRMED, IdentityCheck, SOS_SIGNAL, SOS_UPLINK, SosSignal, Verification, transmit_sos,
};
pub use timeline::{Scheduler, TimerHandle, Timeline};
pub use view::{Container, Screen, ViewName};
