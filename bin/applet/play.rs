use super::Replay;
use anyhow::Error as Anyhow;
use clap::Parser;
use tracing::{info, instrument};

/// Plays a sequence of moves and prints the resulting board.
#[derive(Debug, Default, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// How many of the latest moves to take back.
    #[clap(short, long, default_value_t)]
    undo: usize,

    #[clap(flatten)]
    replay: Replay,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut board = self.replay.board();

        for _ in 0..self.undo {
            match board.undo() {
                Some(m) => info!(%m, san = %m.san(), "took back"),
                None => break,
            }
        }

        for (i, m) in board.history().iter().enumerate() {
            println!("{:>3}. {} {}", i / 2 + 1, m.piece().color(), m.san());
        }

        println!("{}", board);
        println!("{} to move", board.turn());

        Ok(())
    }
}
