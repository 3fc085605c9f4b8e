use crate::applet::Applet;
use anyhow::Error as Anyhow;
use clap::Parser;
use std::{cmp::min, io::stderr};
use tracing::{instrument, Level};
use tracing_subscriber::fmt::{format::FmtSpan, layer};
use tracing_subscriber::{filter::Targets, prelude::*, registry, util::SubscriberInitExt};

/// Replays chess moves from the command line.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Cli {
    /// Verbosity level of the diagnostics written to stderr.
    #[clap(short, long)]
    #[cfg_attr(not(debug_assertions), clap(default_value_t = Level::INFO))]
    #[cfg_attr(debug_assertions, clap(default_value_t = Level::DEBUG))]
    verbosity: Level,

    #[clap(subcommand)]
    applet: Option<Applet>,
}

impl Cli {
    /// Installs the diagnostics subscriber and runs the requested [`Applet`].
    pub fn execute(self) -> Result<(), Anyhow> {
        diagnostics(self.verbosity);
        self.run()
    }

    #[instrument(level = "trace", skip(self), err)]
    fn run(self) -> Result<(), Anyhow> {
        self.applet.unwrap_or_default().execute()
    }
}

/// Logs this crate's events at `level` and everything else at most at [`Level::WARN`].
fn diagnostics(level: Level) {
    let filter = Targets::new()
        .with_target("cli", level)
        .with_target("lib", level)
        .with_default(min(Level::WARN, level));

    let writer = layer()
        .pretty()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(stderr);

    registry().with(filter).with(writer).init();
}
