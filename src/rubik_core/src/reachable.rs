use std::{fmt, ops::Deref};

use bitflags::bitflags;
use bnum::types::U512;
use itertools::Itertools;
use thiserror::Error;

use crate::{
    classes::{Corner, Edge},
    cube::PRubik,
    group::Group,
    invariant::{Invariant, Sign, Twist},
    math::schreier_sims::StabilizerChain,
    orientation::Orientation,
    piece::{CORNER_PIECE_COUNT, EDGE_PIECE_COUNT},
};

bitflags! {
    /// The components of the invariant that keep a configuration out of reach
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Mismatch: u8 {
        const PARITY = 1;
        const EDGE_FLIP = 1 << 1;
        const CORNER_ROTATION = 1 << 2;
    }
}

impl Mismatch {
    #[must_use]
    pub fn of(invariant: Invariant) -> Mismatch {
        let mut mismatch = Mismatch::empty();
        mismatch.set(Mismatch::PARITY, invariant.parity != Sign::Positive);
        mismatch.set(Mismatch::EDGE_FLIP, invariant.edge_flip != Sign::Positive);
        mismatch.set(
            Mismatch::CORNER_ROTATION,
            invariant.corner_rotation != Twist::ZERO,
        );
        mismatch
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const REASONS: [(Mismatch, &str); 3] = [
            (Mismatch::PARITY, "an odd permutation of pieces"),
            (Mismatch::EDGE_FLIP, "an odd number of flipped edges"),
            (Mismatch::CORNER_ROTATION, "corners twisted by a nonzero total"),
        ];

        let reasons = REASONS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, reason)| reason)
            .join(" and ");

        f.write_str(&reasons)
    }
}

/// Returned when a configuration that cannot be reached is treated as a `Rubik`
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Configuration cannot be reached by turning faces: it has {mismatch} (invariant {invariant})")]
pub struct InvalidCube {
    pub invariant: Invariant,
    pub mismatch: Mismatch,
}

/// A configuration that a real cube can reach from solved by turning faces.
///
/// These form a subgroup of `PRubik`: the kernel of `PRubik::invariant`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rubik(PRubik);

impl Rubik {
    #[must_use]
    pub fn turn(face: Orientation) -> Rubik {
        Rubik(PRubik::turn(face))
    }

    /// Turn the faces in `moves` one after another, starting from `self`
    #[must_use]
    pub fn apply_moves(&self, moves: impl IntoIterator<Item = Orientation>) -> Rubik {
        Rubik(self.0.apply_moves(moves))
    }

    #[must_use]
    pub fn into_inner(self) -> PRubik {
        self.0
    }
}

impl Deref for Rubik {
    type Target = PRubik;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<PRubik> for Rubik {
    type Error = InvalidCube;

    fn try_from(cube: PRubik) -> Result<Self, Self::Error> {
        let invariant = cube.invariant();
        let mismatch = Mismatch::of(invariant);

        if mismatch.is_empty() {
            Ok(Rubik(cube))
        } else {
            Err(InvalidCube {
                invariant,
                mismatch,
            })
        }
    }
}

impl From<Rubik> for PRubik {
    fn from(cube: Rubik) -> Self {
        cube.0
    }
}

impl Group for Rubik {
    fn identity() -> Self {
        Rubik(PRubik::identity())
    }

    fn compose(&self, other: &Self) -> Self {
        Rubik(self.0.compose(&other.0))
    }

    fn inverse(&self) -> Self {
        Rubik(self.0.inverse())
    }
}

/// The group generated by the six quarter turns, computed directly from the turns rather than
/// through the invariant.
pub struct TurnGroup {
    chain: StabilizerChain,
}

impl TurnGroup {
    #[must_use]
    pub fn new() -> TurnGroup {
        // A configuration is determined by where it sends one reading of each physical piece
        let base = Edge::all()
            .map(|edge| edge.representative().index())
            .chain(Corner::all().map(|corner| EDGE_PIECE_COUNT + corner.representative().index()))
            .collect_vec();

        let chain = StabilizerChain::new(
            EDGE_PIECE_COUNT + CORNER_PIECE_COUNT,
            &base,
            Orientation::ALL.map(|face| PRubik::turn(face).piece_permutation()),
        );

        TurnGroup { chain }
    }

    /// Whether some sequence of quarter turns produces `cube`
    #[must_use]
    pub fn contains(&self, cube: &PRubik) -> bool {
        self.chain.is_member(cube.piece_permutation())
    }

    /// The number of reachable configurations
    #[must_use]
    pub fn order(&self) -> U512 {
        self.chain.cardinality()
    }
}

impl Default for TurnGroup {
    fn default() -> Self {
        TurnGroup::new()
    }
}
