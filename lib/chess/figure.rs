use crate::chess::{Castles, Color, Flank, Flanks, Piece, Role, Square};
use arrayvec::ArrayVec;
use derive_more::Display;

/// A sequence of destination [`Square`]s.
pub type Destinations = ArrayVec<Square, 32>;

/// The index of a [`Figure`] in a [`Board`][`crate::chess::Board`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[display(fmt = "#{}", _0)]
pub struct FigureId(pub(crate) usize);

/// The special moves available to a [`Figure`] given the state of the board around it.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Context {
    /// The flanks on which a pawn may capture diagonally.
    pub captures: Flanks,
    /// The flank on which a pawn may capture en passant.
    pub en_passant: Option<Flank>,
    /// The sides towards which a king or rook may castle.
    pub castles: Castles,
}

/// A [`Piece`] standing on the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Figure {
    piece: Piece,
    square: Square,
    moves: u32,
}

impl Figure {
    /// Constructs an unmoved [`Figure`].
    #[inline(always)]
    pub fn new(piece: Piece, square: Square) -> Self {
        Figure {
            piece,
            square,
            moves: 0,
        }
    }

    /// This figure's [`Piece`].
    #[inline(always)]
    pub fn piece(&self) -> Piece {
        self.piece
    }

    /// This figure's [`Role`].
    #[inline(always)]
    pub fn role(&self) -> Role {
        self.piece.role()
    }

    /// This figure's [`Color`].
    #[inline(always)]
    pub fn color(&self) -> Color {
        self.piece.color()
    }

    /// The [`Square`] this figure stands on, or last stood on if it was captured.
    #[inline(always)]
    pub fn square(&self) -> Square {
        self.square
    }

    /// How many times this figure has moved.
    #[inline(always)]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Whether this figure has moved at least once.
    #[inline(always)]
    pub fn has_moved(&self) -> bool {
        self.moves > 0
    }

    pub(crate) fn relocate(&mut self, whither: Square) {
        self.square = whither;
        self.moves += 1;
    }

    pub(crate) fn retreat(&mut self, whence: Square) {
        self.square = whence;
        self.moves = self.moves.saturating_sub(1);
    }

    pub(crate) fn displace(&mut self, whither: Square) {
        self.square = whither;
    }

    /// The movement offsets of this figure as `(file, rank)` deltas, in declared order.
    ///
    /// White steps `(-df, dr)` and Black steps `(df, -dr)` for each declared `(df, dr)`.
    fn offsets(&self) -> impl Iterator<Item = (i8, i8)> {
        let sign = self.color().forward();
        let offsets = self.role().offsets().iter();
        offsets.map(move |&(df, dr)| (-df * sign, dr * sign))
    }

    /// The squares this figure reaches by geometry alone.
    ///
    /// Other figures on the board are ignored; sliders enumerate each direction by increasing
    /// distance.
    pub fn all_possible_moves(&self) -> Destinations {
        let reach = if self.role().is_slider() { 7 } else { 1 };
        let sq = self.square;

        self.offsets()
            .flat_map(|(df, dr)| (1..=reach).map(move |d| (df * d, dr * d)))
            .filter_map(|(df, dr)| sq.shift(df, dr))
            .collect()
    }

    /// The squares this figure may move to given its [`Context`].
    ///
    /// Rooks and kings list their castling squares after their regular moves, even if a
    /// castling square is also reachable by geometry.
    pub fn legal_moves(&self, ctx: &Context) -> Destinations {
        let mut moves = self.all_possible_moves();

        match self.role() {
            Role::Pawn => {
                moves.truncate(if self.has_moved() { 1 } else { 2 });
                let forward = self.color().forward();
                let flanks = ctx.captures | Flanks::from(ctx.en_passant);
                for flank in flanks.flanks() {
                    moves.extend(self.square.shift(flank.offset(), forward));
                }
            }

            Role::King => {
                for side in ctx.castles.sides() {
                    moves.extend(self.square.shift(side.king_offset(), 0));
                }
            }

            Role::Rook => {
                for side in ctx.castles.sides() {
                    moves.extend(self.square.shift(side.rook_offset(), 0));
                }
            }

            Role::Knight | Role::Bishop | Role::Queen => {}
        }

        moves
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::Perspective;
    use test_strategy::proptest;

    #[test]
    fn unmoved_pawn_advances_one_or_two_squares() {
        let pawn = Figure::new(Piece::WhitePawn, Square::A2);
        assert_eq!(&pawn.all_possible_moves()[..], [Square::A3, Square::A4]);
        assert_eq!(
            &pawn.legal_moves(&Context::default())[..],
            [Square::A3, Square::A4]
        );
    }

    #[test]
    fn black_pawn_advances_towards_the_first_rank() {
        let pawn = Figure::new(Piece::BlackPawn, Square::E7);
        assert_eq!(&pawn.all_possible_moves()[..], [Square::E6, Square::E5]);
    }

    #[test]
    fn moved_pawn_advances_a_single_square() {
        let mut pawn = Figure::new(Piece::WhitePawn, Square::A2);
        pawn.relocate(Square::A3);
        assert!(pawn.has_moved());
        assert_eq!(&pawn.legal_moves(&Context::default())[..], [Square::A4]);
    }

    #[test]
    fn pawn_captures_diagonally_on_flanks() {
        let pawn = Figure::new(Piece::WhitePawn, Square::B2);
        let ctx = Context {
            captures: Flanks::BOTH,
            ..Context::default()
        };

        assert_eq!(
            &pawn.legal_moves(&ctx)[..],
            [Square::B3, Square::B4, Square::A3, Square::C3]
        );
    }

    #[test]
    fn pawn_captures_en_passant_towards_flank() {
        let mut pawn = Figure::new(Piece::WhitePawn, Square::A4);
        pawn.relocate(Square::A5);

        let ctx = Context {
            en_passant: Some(Flank::Right),
            ..Context::default()
        };

        assert_eq!(&pawn.legal_moves(&ctx)[..], [Square::A6, Square::B6]);
    }

    #[test]
    fn pawn_on_the_edge_captures_towards_the_board_only() {
        let pawn = Figure::new(Piece::BlackPawn, Square::H7);
        let ctx = Context {
            captures: Flanks::BOTH,
            ..Context::default()
        };

        assert_eq!(
            &pawn.legal_moves(&ctx)[..],
            [Square::H6, Square::H5, Square::G6]
        );
    }

    #[test]
    fn knight_jumps_clockwise() {
        let knight = Figure::new(Piece::WhiteKnight, Square::B1);
        assert_eq!(
            &knight.all_possible_moves()[..],
            [Square::A3, Square::C3, Square::D2]
        );

        let knight = Figure::new(Piece::BlackKnight, Square::G8);
        assert_eq!(
            &knight.all_possible_moves()[..],
            [Square::H6, Square::F6, Square::E7]
        );
    }

    #[test]
    fn rook_on_corner_reaches_its_file_and_rank() {
        let rook = Figure::new(Piece::WhiteRook, Square::A1);
        assert_eq!(rook.all_possible_moves().len(), 14);
        assert_eq!(rook.all_possible_moves()[0], Square::B1);
        assert_eq!(rook.all_possible_moves()[7], Square::A2);
    }

    #[test]
    fn rook_scans_left_then_right_then_forward_then_backward() {
        use Square::*;

        let rook = Figure::new(Piece::WhiteRook, D4);
        assert_eq!(
            &rook.all_possible_moves()[..],
            [C4, B4, A4, E4, F4, G4, H4, D5, D6, D7, D8, D3, D2, D1]
        );

        let rook = Figure::new(Piece::BlackRook, D4);
        assert_eq!(
            &rook.all_possible_moves()[..],
            [E4, F4, G4, H4, C4, B4, A4, D3, D2, D1, D5, D6, D7, D8]
        );
    }

    #[test]
    fn bishop_scans_diagonals_in_declared_order() {
        use Square::*;

        let bishop = Figure::new(Piece::WhiteBishop, C1);
        assert_eq!(
            &bishop.all_possible_moves()[..],
            [B2, A3, D2, E3, F4, G5, H6]
        );
    }

    #[test]
    fn queen_in_the_center_reaches_27_squares() {
        let queen = Figure::new(Piece::BlackQueen, Square::D4);
        assert_eq!(queen.all_possible_moves().len(), 27);
    }

    #[test]
    fn king_and_rook_gain_a_single_castling_square() {
        let king = Figure::new(Piece::WhiteKing, Square::E1);
        let rook = Figure::new(Piece::WhiteRook, Square::A1);
        let ctx = Context {
            castles: Castles::QUEENSIDE,
            ..Context::default()
        };

        let moves = king.legal_moves(&ctx);
        assert_eq!(moves.len(), king.all_possible_moves().len() + 1);
        assert_eq!(moves.last(), Some(&Square::C1));

        let moves = rook.legal_moves(&ctx);
        assert_eq!(moves.len(), rook.all_possible_moves().len() + 1);
        assert_eq!(moves.last(), Some(&Square::D1));
    }

    #[proptest]
    fn context_is_irrelevant_to_knights_bishops_and_queens(
        #[filter(matches!(#r, Role::Knight | Role::Bishop | Role::Queen))] r: Role,
        c: Color,
        sq: Square,
    ) {
        let figure = Figure::new(Piece::new(r, c), sq);
        let ctx = Context {
            captures: Flanks::BOTH,
            en_passant: Some(Flank::Left),
            castles: Castles::all(),
        };

        assert_eq!(figure.legal_moves(&ctx), figure.all_possible_moves());
    }

    #[proptest]
    fn possible_moves_mirror_between_colors(r: Role, sq: Square) {
        let white = Figure::new(Piece::new(r, Color::White), sq);
        let black = Figure::new(Piece::new(r, Color::Black), sq.flip());

        let mut mirrored = Vec::from_iter(white.all_possible_moves().iter().map(|s| s.flip()));
        let mut moves = Vec::from_iter(black.all_possible_moves());
        mirrored.sort();
        moves.sort();

        assert_eq!(moves, mirrored);
    }

    #[proptest]
    fn possible_moves_never_include_the_current_square(r: Role, c: Color, sq: Square) {
        let figure = Figure::new(Piece::new(r, c), sq);
        assert!(!figure.all_possible_moves().contains(&sq));
    }

    #[proptest]
    fn retreating_undoes_relocating(r: Role, c: Color, a: Square, b: Square) {
        let mut figure = Figure::new(Piece::new(r, c), a);
        figure.relocate(b);
        assert_eq!(figure.moves(), 1);
        figure.retreat(a);
        assert_eq!(figure, Figure::new(Piece::new(r, c), a));
    }
}
