use clap::Parser;
use color_eyre::Result;
use rs_safe_tour::{
  app::{Config, Viewer},
  sim::{Timing, ViewName},
};
use std::time::Duration;

/// 调试日志缓冲区容量的上限
const MAX_DEBUG_LINES: u64 = 100_000;

/// tourist safety console, simulated in the terminal
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
  /// view to open at startup (landing, role, login-tourist, register-tourist,
  /// dash-tourist, login-officer, dash-officer)
  #[clap(long, default_value = "landing")]
  view: ViewName,

  /// period of the officer dashboard's incident feed, in milliseconds
  #[clap(long, default_value_t = 6000, value_parser = clap::value_parser!(u64).range(1..))]
  tick_ms: u64,

  /// capacity of the in-app debug log buffer
  #[clap(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..=MAX_DEBUG_LINES))]
  debug_lines: u64,
}

fn main() -> Result<()> {
  let args = Args::parse();

  Viewer::run(Config {
    start_view: args.view,
    timing: Timing {
      tick_period: Duration::from_millis(args.tick_ms),
      ..Default::default()
    },
    debug_lines: args.debug_lines as usize,
    ..Default::default()
  })
}
