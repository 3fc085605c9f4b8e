use crate::chess::{Castling, Role, Square};
use derive_more::Display;
use std::fmt;

/// Whether a move puts the opposing king in check.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Check {
    #[display(fmt = "+")]
    Check,
    #[display(fmt = "++")]
    Checkmate,
}

/// A move in short algebraic notation.
///
/// Moves are never disambiguated by their origin.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct San {
    pub role: Role,
    pub whither: Square,
    pub capture: bool,
    pub en_passant: bool,
    pub castling: Option<Castling>,
    pub promotion: Option<Role>,
    pub check: Option<Check>,
}

impl San {
    /// A quiet move of a piece of a given [`Role`].
    pub fn new(role: Role, whither: Square) -> Self {
        San {
            role,
            whither,
            capture: false,
            en_passant: false,
            castling: None,
            promotion: None,
            check: None,
        }
    }

    /// Marks this move as a capture.
    pub fn capture(self) -> Self {
        San {
            capture: true,
            ..self
        }
    }

    /// Marks this move as a capture en passant.
    pub fn en_passant(self) -> Self {
        San {
            capture: true,
            en_passant: true,
            ..self
        }
    }

    /// Marks this move as castling towards a side.
    pub fn castling(self, side: Castling) -> Self {
        San {
            castling: Some(side),
            ..self
        }
    }

    /// Marks this move as a promotion to a [`Role`].
    pub fn promotion(self, role: Role) -> Self {
        San {
            promotion: Some(role),
            ..self
        }
    }

    /// Marks this move as giving check.
    pub fn check(self, check: Check) -> Self {
        San {
            check: Some(check),
            ..self
        }
    }
}

impl fmt::Display for San {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(side) = self.castling {
            return fmt::Display::fmt(&side, f);
        }

        if let Some(role) = self.promotion {
            return write!(f, "{}={}", self.whither, role);
        }

        f.write_str(self.role.letter())?;

        if self.en_passant {
            f.write_str("e")?;
        }

        if self.capture {
            f.write_str("x")?;
        }

        fmt::Display::fmt(&self.whither, f)?;

        if let Some(check) = self.check {
            fmt::Display::fmt(&check, f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[test]
    fn pawn_moves_are_not_prefixed() {
        assert_eq!(San::new(Role::Pawn, Square::E4).to_string(), "e4");
        assert_eq!(San::new(Role::Knight, Square::F3).to_string(), "Nf3");
    }

    #[test]
    fn captures_are_marked_with_x() {
        assert_eq!(
            San::new(Role::Bishop, Square::B5).capture().to_string(),
            "Bxb5"
        );

        assert_eq!(
            San::new(Role::Pawn, Square::D5).capture().to_string(),
            "xd5"
        );
    }

    #[test]
    fn captures_en_passant_are_marked_with_e() {
        assert_eq!(
            San::new(Role::Pawn, Square::B6).en_passant().to_string(),
            "exb6"
        );
    }

    #[test]
    fn check_is_appended() {
        let san = San::new(Role::Queen, Square::H7).capture();
        assert_eq!(san.check(Check::Check).to_string(), "Qxh7+");
        assert_eq!(san.check(Check::Checkmate).to_string(), "Qxh7++");
    }

    #[test]
    fn promotion_names_the_square_and_the_new_role() {
        let san = San::new(Role::Pawn, Square::A8).promotion(Role::Queen);
        assert_eq!(san.to_string(), "a8=Q");
    }

    #[proptest]
    fn castling_is_printed_regardless_of_other_flags(
        san: San,
        side: Castling,
    ) {
        assert_eq!(san.castling(side).to_string(), side.to_string());
    }

    #[proptest]
    fn promotion_is_printed_regardless_of_capture_and_check(
        #[filter(#san.castling.is_none())] san: San,
        r: Role,
    ) {
        assert_eq!(
            san.promotion(r).to_string(),
            format!("{}={}", san.whither, r)
        );
    }
}
