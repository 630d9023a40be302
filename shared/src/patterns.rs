//! Well-known seed shapes. Offsets are `(x, y)` = `(col, row)` relative to the
//! anchor, which is the top-left corner of the shape's bounding box.

use crate::grid::CellState::Alive;
use crate::grid::{Grid, GridError};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    StillLife,
    Oscillator,
    Spaceship,
    Methuselah,
    Infinite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pattern {
    Block,
    Beehive,
    Loaf,
    Boat,
    Blinker,
    Toad,
    Beacon,
    Pulsar,
    Pentadecathlon,
    Glider,
    LightweightSpaceship,
    RPentomino,
    Diehard,
    Acorn,
    GosperGliderGun,
    Infinite1,
    Infinite2,
    Infinite3,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown pattern `{0}`")]
pub struct UnknownPattern(pub String);

const BLOCK: &[(isize, isize)] = &[(0, 0), (0, 1), (1, 0), (1, 1)];
const BEEHIVE: &[(isize, isize)] = &[(0, 1), (1, 0), (1, 2), (2, 0), (2, 2), (3, 1)];
const LOAF: &[(isize, isize)] = &[(0, 1), (1, 0), (1, 2), (2, 0), (2, 3), (3, 1), (3, 2)];
const BOAT: &[(isize, isize)] = &[(0, 0), (0, 1), (1, 0), (1, 2), (2, 1)];
const BLINKER: &[(isize, isize)] = &[(0, 0), (1, 0), (2, 0)];
const TOAD: &[(isize, isize)] = &[(0, 1), (1, 0), (1, 1), (2, 0), (2, 1), (3, 0)];
const BEACON: &[(isize, isize)] = &[(0, 0), (1, 0), (0, 1), (3, 2), (2, 3), (3, 3)];
#[rustfmt::skip]
const PULSAR: &[(isize, isize)] = &[
    (4, 0), (4, 1), (4, 2), (5, 2),
    (9, 2), (10, 0), (10, 1), (10, 2),
    (5, 4), (6, 4), (4, 5), (6, 5), (4, 6), (5, 6),
    (8, 4), (9, 4), (8, 5), (10, 5), (9, 6), (10, 6),
    (0, 4), (1, 4), (2, 4), (2, 5),
    (12, 4), (13, 4), (14, 4), (12, 5),
    (9, 8), (10, 8), (8, 9), (10, 9), (8, 10), (9, 10),
    (4, 8), (5, 8), (4, 9), (6, 9), (5, 10), (6, 10),
    (2, 9), (0, 10), (1, 10), (2, 10),
    (12, 9), (12, 10), (13, 10), (14, 10),
    (4, 12), (5, 12), (4, 13), (4, 14),
    (9, 12), (10, 12), (10, 13), (10, 14),
];
#[rustfmt::skip]
const PENTADECATHLON: &[(isize, isize)] = &[
    (0, 0), (1, 0), (2, 0), (1, 1), (1, 2), (0, 3), (1, 3), (2, 3),
    (0, 5), (1, 5), (2, 5), (0, 6), (1, 6), (2, 6),
    (0, 8), (1, 8), (2, 8), (1, 9), (1, 10), (0, 11), (1, 11), (2, 11),
];
const GLIDER: &[(isize, isize)] = &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
#[rustfmt::skip]
const LWSS: &[(isize, isize)] = &[
    (0, 0), (3, 0), (4, 1), (0, 2), (4, 2),
    (1, 3), (2, 3), (3, 3), (4, 3),
];
const R_PENTOMINO: &[(isize, isize)] = &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)];
const DIEHARD: &[(isize, isize)] = &[(6, 0), (0, 1), (1, 1), (1, 2), (5, 2), (6, 2), (7, 2)];
const ACORN: &[(isize, isize)] = &[(1, 0), (3, 1), (0, 2), (1, 2), (4, 2), (5, 2), (6, 2)];
#[rustfmt::skip]
const GOSPER_GLIDER_GUN: &[(isize, isize)] = &[
    (0, 4), (1, 4), (0, 5), (1, 5),
    (12, 2), (13, 2), (11, 3), (15, 3), (10, 4), (16, 4),
    (10, 5), (14, 5), (16, 5), (17, 5), (10, 6), (16, 6),
    (11, 7), (15, 7), (12, 8), (13, 8),
    (24, 0), (22, 1), (24, 1), (20, 2), (21, 2), (20, 3),
    (21, 3), (20, 4), (21, 4), (22, 5), (24, 5), (24, 6),
    (34, 2), (35, 2), (34, 3), (35, 3),
];
#[rustfmt::skip]
const INFINITE_1: &[(isize, isize)] = &[
    (6, 0), (4, 1), (6, 1), (7, 1), (4, 2),
    (6, 2), (4, 3), (2, 4), (0, 5), (2, 5),
];
#[rustfmt::skip]
const INFINITE_2: &[(isize, isize)] = &[
    (0, 0), (1, 0), (2, 0), (4, 0), (0, 1), (3, 2), (4, 2),
    (1, 3), (2, 3), (4, 3), (0, 4), (2, 4), (4, 4),
];
#[rustfmt::skip]
const INFINITE_3: &[(isize, isize)] = &[
    (0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0), (6, 0), (7, 0),
    (9, 0), (10, 0), (11, 0), (12, 0), (13, 0),
    (17, 0), (18, 0), (19, 0),
    (26, 0), (27, 0), (28, 0), (29, 0), (30, 0), (31, 0), (32, 0),
    (34, 0), (35, 0), (36, 0), (37, 0), (38, 0),
];

impl Pattern {
    pub const ALL: [Pattern; 18] = [
        Pattern::Block,
        Pattern::Beehive,
        Pattern::Loaf,
        Pattern::Boat,
        Pattern::Blinker,
        Pattern::Toad,
        Pattern::Beacon,
        Pattern::Pulsar,
        Pattern::Pentadecathlon,
        Pattern::Glider,
        Pattern::LightweightSpaceship,
        Pattern::RPentomino,
        Pattern::Diehard,
        Pattern::Acorn,
        Pattern::GosperGliderGun,
        Pattern::Infinite1,
        Pattern::Infinite2,
        Pattern::Infinite3,
    ];

    /// Name accepted by [`Pattern::from_str`].
    pub fn name(self) -> &'static str {
        match self {
            Pattern::Block => "block",
            Pattern::Beehive => "beehive",
            Pattern::Loaf => "loaf",
            Pattern::Boat => "boat",
            Pattern::Blinker => "blinker",
            Pattern::Toad => "toad",
            Pattern::Beacon => "beacon",
            Pattern::Pulsar => "pulsar",
            Pattern::Pentadecathlon => "pentadecathlon",
            Pattern::Glider => "glider",
            Pattern::LightweightSpaceship => "lwss",
            Pattern::RPentomino => "r-pentomino",
            Pattern::Diehard => "diehard",
            Pattern::Acorn => "acorn",
            Pattern::GosperGliderGun => "gosper-glider-gun",
            Pattern::Infinite1 => "infinite-1",
            Pattern::Infinite2 => "infinite-2",
            Pattern::Infinite3 => "infinite-3",
        }
    }

    pub fn kind(self) -> PatternKind {
        match self {
            Pattern::Block | Pattern::Beehive | Pattern::Loaf | Pattern::Boat => {
                PatternKind::StillLife
            }
            Pattern::Blinker
            | Pattern::Toad
            | Pattern::Beacon
            | Pattern::Pulsar
            | Pattern::Pentadecathlon => PatternKind::Oscillator,
            Pattern::Glider | Pattern::LightweightSpaceship => PatternKind::Spaceship,
            Pattern::RPentomino | Pattern::Diehard | Pattern::Acorn => PatternKind::Methuselah,
            Pattern::GosperGliderGun
            | Pattern::Infinite1
            | Pattern::Infinite2
            | Pattern::Infinite3 => PatternKind::Infinite,
        }
    }

    pub fn cells(self) -> &'static [(isize, isize)] {
        match self {
            Pattern::Block => BLOCK,
            Pattern::Beehive => BEEHIVE,
            Pattern::Loaf => LOAF,
            Pattern::Boat => BOAT,
            Pattern::Blinker => BLINKER,
            Pattern::Toad => TOAD,
            Pattern::Beacon => BEACON,
            Pattern::Pulsar => PULSAR,
            Pattern::Pentadecathlon => PENTADECATHLON,
            Pattern::Glider => GLIDER,
            Pattern::LightweightSpaceship => LWSS,
            Pattern::RPentomino => R_PENTOMINO,
            Pattern::Diehard => DIEHARD,
            Pattern::Acorn => ACORN,
            Pattern::GosperGliderGun => GOSPER_GLIDER_GUN,
            Pattern::Infinite1 => INFINITE_1,
            Pattern::Infinite2 => INFINITE_2,
            Pattern::Infinite3 => INFINITE_3,
        }
    }

    /// Width and height of the shape's bounding box.
    pub fn extent(self) -> (usize, usize) {
        self.cells().iter().fold((0, 0), |(w, h), &(x, y)| {
            (w.max(x as usize + 1), h.max(y as usize + 1))
        })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = UnknownPattern;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Pattern::ALL
            .into_iter()
            .find(|pattern| pattern.name() == wanted)
            .ok_or_else(|| UnknownPattern(s.to_string()))
    }
}

impl Grid {
    /// Brings the cells of `pattern` to life with its top-left corner at
    /// `(c, r)`. Cells that fall off an edge wrap around.
    pub fn put_pattern(&mut self, pattern: Pattern, c: isize, r: isize) -> Result<(), GridError> {
        for &(dx, dy) in pattern.cells() {
            self.set_cell_state(c + dx, r + dy, Alive)?;
        }
        log::debug!("placed {pattern} at ({c}, {r})");
        Ok(())
    }
}
