use crate::util::Integer;
use derive_more::{Display, Error};
use std::{fmt, ops::Sub, str::FromStr};

/// A column on the chess board, from `a` on White's left to `h` on White's right.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[repr(i8)]
pub enum File {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl File {
    /// The grid column this file occupies, counting from `a`.
    #[inline(always)]
    pub fn column(&self) -> u8 {
        self.get() as u8
    }

    /// The file that occupies a grid column, if any.
    #[inline(always)]
    pub fn from_column(x: u8) -> Option<Self> {
        x.convert()
    }

    /// The lower case letter that names this file.
    #[inline(always)]
    pub fn letter(&self) -> char {
        char::from(b'a' + self.column())
    }
}

unsafe impl Integer for File {
    type Repr = i8;
    const MIN: Self::Repr = File::A as _;
    const MAX: Self::Repr = File::H as _;
}

impl Sub for File {
    type Output = i8;

    /// The signed number of files between two files.
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        self.get() - rhs.get()
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Write::write_char(f, self.letter())
    }
}

/// The reason why parsing [`File`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
#[display(fmt = "expected a single letter between `a` and `h`")]
pub struct ParseFileError;

impl FromStr for File {
    type Err = ParseFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c @ 'a'..='h'), None) => File::from_column(c as u8 - b'a').ok_or(ParseFileError),
            _ => Err(ParseFileError),
        }
    }
}
