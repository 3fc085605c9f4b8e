use anyhow::Error as Anyhow;
use clap::{Args, Subcommand};
use derive_more::From;
use lib::chess::{Board, Setup, Step};
use tracing::{instrument, warn};

mod moves;
mod play;

#[derive(From, Subcommand)]
pub enum Applet {
    Play(play::Play),
    Moves(moves::Moves),
}

impl Default for Applet {
    fn default() -> Self {
        play::Play::default().into()
    }
}

impl Applet {
    pub fn execute(self) -> Result<(), Anyhow> {
        match self {
            Applet::Play(a) => a.execute(),
            Applet::Moves(a) => a.execute(),
        }
    }
}

/// A sequence of moves played from a starting arrangement.
#[derive(Debug, Default, Args)]
pub struct Replay {
    /// The starting arrangement in RON, e.g. `(pieces: {"e1": "wK", "e8": "bK"}, turn: white)`.
    #[clap(short, long)]
    setup: Option<Setup>,

    /// The moves to play in order, e.g. `e2e4 e7e5`.
    steps: Vec<Step>,
}

impl Replay {
    /// Plays every step on a fresh board, skipping those that are rejected.
    #[instrument(level = "debug", skip(self))]
    pub fn board(&self) -> Board {
        let mut board = Board::from(self.setup.clone().unwrap_or_default());

        for &step in &self.steps {
            if let Err(e) = board.play(step) {
                warn!(%step, "{}", e);
            }
        }

        board
    }
}
