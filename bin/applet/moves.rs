use super::Replay;
use anyhow::{anyhow, Error as Anyhow};
use clap::Parser;
use lib::chess::{Context, Square};
use tracing::{debug, instrument};

/// Lists where the piece on a square may move after a sequence of moves.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Moves {
    /// The square of the piece to move.
    #[clap(long)]
    square: Square,

    #[clap(flatten)]
    replay: Replay,
}

impl Moves {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let board = self.replay.board();

        let figure = board
            .figure_on(self.square)
            .ok_or_else(|| anyhow!("there is no piece on square `{}`", self.square))?;

        let context = board.context(self.square);
        let destinations = board.destinations(self.square);

        debug!(?context);
        println!("{} on {}", figure.piece(), self.square);

        for line in notes(&context) {
            println!("{}", line);
        }

        for whither in destinations {
            println!("{}{}", self.square, whither);
        }

        Ok(())
    }
}

/// Describes the special moves a [`Context`] allows.
fn notes(context: &Context) -> Vec<String> {
    let captures = context.captures.flanks();
    let captures = captures.map(|f| format!("captures on the {} flank", f));
    let en_passant = context.en_passant.into_iter();
    let en_passant = en_passant.map(|f| format!("captures en passant on the {} flank", f));
    let castles = context.castles.sides().map(|s| format!("may castle {}", s));

    captures.chain(en_passant).chain(castles).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib::chess::{Castles, Flank, Flanks};

    #[test]
    fn plain_context_has_nothing_to_say() {
        assert!(notes(&Context::default()).is_empty());
    }

    #[test]
    fn notes_spell_out_flanks_and_castling_sides() {
        let context = Context {
            captures: Flanks::RIGHT,
            en_passant: Some(Flank::Left),
            castles: Castles::all(),
        };

        assert_eq!(
            notes(&context),
            [
                "captures on the right flank",
                "captures en passant on the left flank",
                "may castle O-O",
                "may castle O-O-O",
            ]
        );
    }
}
