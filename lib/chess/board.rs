use crate::chess::{Capture, Castles, Castling, Color, Context, Destinations, Figure, FigureId};
use crate::chess::{File, Flank, Flanks, IllegalMove, Move, Perspective, Piece, Rank, Role};
use crate::chess::{Setup, Square, Step};
use crate::util::Integer;
use std::{fmt, ops::Index};
use tracing::{debug, instrument};

/// The state of a game of chess.
///
/// The grid holds indices into the table of [`Figure`]s, which is never shrunk, so that a
/// captured figure may be restored by [`Board::undo`].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    grid: [Option<FigureId>; 64],
    figures: Vec<Figure>,
    turn: Color,
    history: Vec<Move>,
}

#[cfg(test)]
impl proptest::arbitrary::Arbitrary for Board {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Board>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::{prelude::*, sample::Selector};

        (0..64usize, any::<Selector>())
            .prop_map(|(n, selector)| {
                let mut board = Board::default();

                for _ in 0..n {
                    let steps = Vec::from_iter(board.steps());
                    match selector.try_select(steps).map(|s| board.play(s)) {
                        Some(Ok(_)) => continue,
                        _ => break,
                    }
                }

                board
            })
            .no_shrink()
            .boxed()
    }
}

impl Default for Board {
    fn default() -> Self {
        Setup::default().into()
    }
}

impl From<Setup> for Board {
    fn from(setup: Setup) -> Self {
        let mut board = Board::empty();

        for (sq, p) in setup.pieces {
            board.place(p, sq);
        }

        board.turn = setup.turn;
        board
    }
}

impl Board {
    /// A board with no pieces and white to move.
    pub fn empty() -> Self {
        Board {
            grid: [None; 64],
            figures: Vec::new(),
            turn: Color::White,
            history: Vec::new(),
        }
    }

    /// Resets this board to the standard starting position.
    pub fn setup(&mut self) {
        *self = Board::default();
    }

    /// The side to move.
    #[inline(always)]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The moves played so far, oldest first.
    #[inline(always)]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The [`FigureId`] of the figure on a [`Square`], if any.
    #[inline(always)]
    pub fn id_on(&self, sq: Square) -> Option<FigureId> {
        self.grid[sq.get() as usize]
    }

    /// The [`Figure`] on a [`Square`], if any.
    #[inline(always)]
    pub fn figure_on(&self, sq: Square) -> Option<&Figure> {
        self.id_on(sq).map(|id| &self[id])
    }

    /// The [`Piece`] on a [`Square`], if any.
    #[inline(always)]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.figure_on(sq).map(Figure::piece)
    }

    /// Whether a [`Square`] is vacant.
    #[inline(always)]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.id_on(sq).is_none()
    }

    /// The figures on the board, ordered by [`Square`].
    pub fn figures(&self) -> impl Iterator<Item = &Figure> {
        Square::iter().filter_map(move |sq| self.figure_on(sq))
    }

    /// The figures that have been taken off the board.
    pub fn captured(&self) -> impl Iterator<Item = &Figure> {
        self.figures
            .iter()
            .enumerate()
            .filter(move |&(i, f)| self.id_on(f.square()) != Some(FigureId(i)))
            .map(|(_, f)| f)
    }

    /// The pieces on the board as rows of squares.
    ///
    /// The first row is the eighth rank and the first column is the `a` file, so that
    /// `rows()[y][x]` is the piece on `Square::try_from((x, y))`.
    pub fn rows(&self) -> [[Option<Piece>; 8]; 8] {
        let mut rows = [[None; 8]; 8];

        for sq in Square::iter() {
            let (x, y) = sq.coordinates();
            rows[y as usize][x as usize] = self.piece_on(sq);
        }

        rows
    }

    /// Places a [`Piece`] on a [`Square`], taking any occupant off the board.
    pub fn place(&mut self, piece: Piece, sq: Square) -> FigureId {
        let id = FigureId(self.figures.len());
        self.figures.push(Figure::new(piece, sq));
        self.grid[sq.get() as usize] = Some(id);
        id
    }

    /// Takes the figure on a [`Square`] off the board, if any.
    pub fn remove(&mut self, sq: Square) -> Option<Figure> {
        let id = self.grid[sq.get() as usize].take()?;
        Some(self[id])
    }

    /// Whether a [`Piece`] may land on a [`Square`] given its occupant.
    ///
    /// Only allied occupants obstruct a move.
    pub fn is_valid_move(&self, piece: Piece, whither: Square) -> bool {
        match self.piece_on(whither) {
            Some(p) => p.color() != piece.color(),
            None => true,
        }
    }

    /// The flanks on which the pawn on a [`Square`] faces an opposing pawn diagonally.
    ///
    /// The diagonals are taken towards the opponent of the side to move.
    pub fn check_diagonals(&self, sq: Square) -> Flanks {
        match self.figure_on(sq) {
            Some(f) if f.role() == Role::Pawn => {
                let enemy = Piece::new(Role::Pawn, !f.color());
                self.diagonals(sq, self.turn, |p| p == enemy)
            }

            _ => Flanks::empty(),
        }
    }

    /// The flanks on which the pawn on a [`Square`] may capture any opposing figure.
    fn capture_flanks(&self, sq: Square) -> Flanks {
        match self.figure_on(sq) {
            Some(f) if f.role() == Role::Pawn => {
                let color = f.color();
                self.diagonals(sq, color, |p| p.color() != color)
            }

            _ => Flanks::empty(),
        }
    }

    /// The flanks whose diagonal square forward of `side` holds a matching piece.
    fn diagonals(&self, sq: Square, side: Color, matches: impl Fn(Piece) -> bool) -> Flanks {
        let mut flanks = Flanks::empty();

        for flank in Flank::iter() {
            let target = sq.shift(flank.offset(), side.forward());
            if target.and_then(|t| self.piece_on(t)).map_or(false, &matches) {
                flanks |= flank.into();
            }
        }

        flanks
    }

    /// The flank on which the pawn on a [`Square`] may capture en passant, if any.
    ///
    /// The opposing pawn must have moved exactly once and, unless the board has no history,
    /// must have made the latest move. The left flank is preferred.
    pub fn check_en_passant(&self, sq: Square) -> Option<Flank> {
        Flank::iter().find(|&flank| self.is_en_passant(sq, flank))
    }

    /// The sides towards which the king or rook on a [`Square`] may castle.
    pub fn check_castling(&self, sq: Square) -> Castles {
        let mut castles = Castles::empty();

        let figure = match self.figure_on(sq) {
            Some(f) if !f.has_moved() => f,
            _ => return castles,
        };

        let color = figure.color();
        let king = Castling::king_home(color);

        let sides = match figure.role() {
            Role::King if sq == king => Castles::all(),
            Role::Rook => match Castling::from_rook_file(sq.file()) {
                Some(side) if side.rook_home(color) == sq => side.into(),
                _ => Castles::empty(),
            },
            _ => Castles::empty(),
        };

        for side in sides.sides() {
            let rook = side.rook_home(color);
            let (partner, role) = match figure.role() {
                Role::King => (rook, Role::Rook),
                _ => (king, Role::King),
            };

            let is_unmoved = match self.figure_on(partner) {
                Some(f) => f.piece() == Piece::new(role, color) && !f.has_moved(),
                None => false,
            };

            if is_unmoved && self.is_clear(king, rook) {
                castles |= side.into();
            }
        }

        castles
    }

    /// The special moves available to the figure on a [`Square`].
    pub fn context(&self, sq: Square) -> Context {
        match self.figure_on(sq).map(Figure::role) {
            Some(Role::Pawn) => Context {
                captures: self.capture_flanks(sq),
                en_passant: self.check_en_passant(sq),
                ..Context::default()
            },

            Some(Role::King | Role::Rook) => Context {
                castles: self.check_castling(sq),
                ..Context::default()
            },

            _ => Context::default(),
        }
    }

    /// The squares the figure on a [`Square`] may move to.
    ///
    /// These are the figure's [legal moves][`Figure::legal_moves`] in its [`Context`], except
    /// those blocked by other figures.
    pub fn destinations(&self, sq: Square) -> Destinations {
        let mut destinations = Destinations::new();

        if let Some(figure) = self.figure_on(sq) {
            for whither in figure.legal_moves(&self.context(sq)) {
                if !destinations.contains(&whither) && self.is_reachable(figure, whither) {
                    destinations.push(whither);
                }
            }
        }

        destinations
    }

    /// Every [`Step`] available to the side to move.
    pub fn steps(&self) -> impl Iterator<Item = Step> + '_ {
        Square::iter()
            .filter(move |&sq| self.piece_on(sq).map(|p| p.color()) == Some(self.turn))
            .flat_map(move |sq| {
                let destinations = self.destinations(sq);
                destinations.into_iter().map(move |w| Step::new(sq, w))
            })
    }

    /// Plays a [`Step`] by the side to move, if it is one of its [destinations][`Board::destinations`].
    #[instrument(level = "debug", skip(self), ret, err)]
    pub fn play(&mut self, step: Step) -> Result<Move, IllegalMove> {
        let Step { whence, whither } = step;
        let piece = self.piece_on(whence).ok_or(IllegalMove::Vacant(whence))?;

        if piece.color() != self.turn {
            return Err(IllegalMove::OutOfTurn(piece.color()));
        } else if !self.is_valid_move(piece, whither) {
            return Err(IllegalMove::Obstructed(whither));
        } else if !self.destinations(whence).contains(&whither) {
            return Err(IllegalMove::Unreachable(whence, whither));
        }

        self.r#move(whence, whither)
    }

    /// Moves the figure on `whence` to `whither`, capturing any opposing occupant.
    ///
    /// Only the occupants of both squares are checked, but a king moving to its castling
    /// square also moves the rook and a pawn capturing en passant removes the passed pawn.
    #[instrument(level = "trace", name = "move", skip(self), err)]
    pub fn r#move(&mut self, whence: Square, whither: Square) -> Result<Move, IllegalMove> {
        let id = self.id_on(whence).ok_or(IllegalMove::Vacant(whence))?;
        let figure = self[id];

        if !self.is_valid_move(figure.piece(), whither) {
            return Err(IllegalMove::Obstructed(whither));
        }

        let castling = self.castling_by(&figure, whither);
        let capture = match self.id_on(whither) {
            Some(c) => Some(Capture {
                figure: c,
                piece: self[c].piece(),
                square: whither,
            }),

            None => self.en_passant_by(&figure, whither),
        };

        if let Some(c) = capture {
            self.grid[c.square.get() as usize] = None;
        }

        self.grid[whence.get() as usize] = None;
        self.grid[whither.get() as usize] = Some(id);
        self.figures[id.0].relocate(whither);

        if let Some(side) = castling {
            let color = figure.color();
            self.shuffle(side.rook_home(color), side.rook_whither(color), Figure::relocate);
        }

        let m = Move {
            figure: id,
            piece: figure.piece(),
            whence,
            whither,
            capture,
            castling,
        };

        self.history.push(m);
        self.turn = !self.turn;

        Ok(m)
    }

    /// Reverts the latest [`Move`], if any.
    pub fn undo(&mut self) -> Option<Move> {
        let m = self.history.pop()?;

        if let Some(side) = m.castling() {
            let color = m.piece().color();
            self.shuffle(side.rook_whither(color), side.rook_home(color), Figure::retreat);
        }

        self.grid[m.whither().get() as usize] = None;
        self.grid[m.whence().get() as usize] = Some(m.figure());
        self.figures[m.figure().0].retreat(m.whence());

        if let Some(c) = m.capture() {
            self.grid[c.square.get() as usize] = Some(c.figure);
            self.figures[c.figure.0].displace(c.square);
        }

        self.turn = !self.turn;
        debug!(%m, "undo");

        Some(m)
    }

    /// Whether every square strictly between two squares on a line is vacant.
    fn is_clear(&self, a: Square, b: Square) -> bool {
        let df = (b.file() - a.file()).signum();
        let dr = (b.rank() - a.rank()).signum();

        let mut sq = a.shift(df, dr);
        while let Some(s) = sq.filter(|&s| s != b) {
            if !self.is_empty(s) {
                return false;
            }

            sq = s.shift(df, dr);
        }

        true
    }

    /// Whether the pawn on a [`Square`] may capture en passant towards a [`Flank`].
    fn is_en_passant(&self, sq: Square, flank: Flank) -> bool {
        let color = match self.figure_on(sq) {
            Some(f) if f.role() == Role::Pawn => f.color(),
            _ => return false,
        };

        let passed = match sq.shift(flank.offset(), 0).and_then(|s| self.id_on(s)) {
            Some(id) => id,
            None => return false,
        };

        let victim = &self[passed];
        let is_latest = self.history.last().map_or(true, |m| m.figure() == passed);
        let behind = sq.shift(flank.offset(), color.forward());

        sq.rank() == Rank::Fifth.relative_to(color)
            && victim.piece() == Piece::new(Role::Pawn, !color)
            && victim.moves() == 1
            && is_latest
            && behind.map_or(false, |s| self.is_empty(s))
    }

    /// Whether a figure's path to a square is unobstructed.
    fn is_reachable(&self, figure: &Figure, whither: Square) -> bool {
        let whence = figure.square();

        if !self.is_valid_move(figure.piece(), whither) {
            return false;
        }

        match figure.role() {
            Role::Pawn if whence.file() == whither.file() => {
                self.is_empty(whither) && self.is_clear(whence, whither)
            }

            Role::Bishop | Role::Rook | Role::Queen => self.is_clear(whence, whither),
            Role::Pawn | Role::Knight | Role::King => true,
        }
    }

    /// The castling side, if a figure moving to a square castles.
    fn castling_by(&self, figure: &Figure, whither: Square) -> Option<Castling> {
        let whence = figure.square();

        if figure.role() != Role::King {
            return None;
        }

        let mut sides = self.check_castling(whence).sides();
        sides.find(|side| side.king_whither(figure.color()) == whither)
    }

    /// The pawn passed by a figure moving to a square, if it captures en passant.
    fn en_passant_by(&self, figure: &Figure, whither: Square) -> Option<Capture> {
        let whence = figure.square();

        if figure.role() != Role::Pawn {
            return None;
        }

        let forward = figure.color().forward();
        let mut flanks = Flank::iter();
        let flank = flanks.find(|f| whence.shift(f.offset(), forward) == Some(whither))?;

        if !self.is_en_passant(whence, flank) {
            return None;
        }

        let passed = whence.shift(flank.offset(), 0)?;
        let id = self.id_on(passed)?;
        Some(Capture {
            figure: id,
            piece: self[id].piece(),
            square: passed,
        })
    }

    /// Moves the figure on one square to another, updating its move counter.
    fn shuffle(&mut self, from: Square, to: Square, update: fn(&mut Figure, Square)) {
        if let Some(id) = self.grid[from.get() as usize].take() {
            self.grid[to.get() as usize] = Some(id);
            update(&mut self.figures[id.0], to);
        }
    }
}

/// Retrieves a [`Figure`] by its [`FigureId`].
impl Index<FigureId> for Board {
    type Output = Figure;

    #[inline(always)]
    fn index(&self, id: FigureId) -> &Self::Output {
        &self.figures[id.0]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "   ")?;

        for file in File::iter() {
            write!(f, "  {}  ", file)?;
        }

        writeln!(f)?;
        writeln!(f, "   +----+----+----+----+----+----+----+----+")?;

        for rank in Rank::iter().rev() {
            write!(f, " {} |", rank)?;

            for file in File::iter() {
                match self.piece_on(Square::new(file, rank)) {
                    Some(p) => write!(f, " {} |", p)?,
                    None => write!(f, "    |")?,
                }
            }

            writeln!(f, " {}", rank)?;
            writeln!(f, "   +----+----+----+----+----+----+----+----+")?;
        }

        write!(f, "   ")?;
        for file in File::iter() {
            write!(f, "  {}  ", file)?;
        }

        Ok(())
    }
}
