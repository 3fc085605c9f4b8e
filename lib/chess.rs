mod board;
mod castles;
mod color;
mod figure;
mod file;
mod flank;
mod r#move;
mod piece;
mod rank;
mod role;
mod san;
mod setup;
mod square;

pub use board::*;
pub use castles::*;
pub use color::*;
pub use figure::*;
pub use file::*;
pub use flank::*;
pub use piece::*;
pub use r#move::*;
pub use rank::*;
pub use role::*;
pub use san::*;
pub use setup::*;
pub use square::*;
