//! Physical pieces: the equivalence classes of sticker orderings.
//!
//! Two orderings belong to the same physical piece when they list the same set of stickers. The
//! classes are computed once, and every later lookup is an array access.

use std::{fmt, sync::LazyLock};

use log::debug;

use crate::{
    math::union_find::UnionFind,
    orientation::Axis,
    piece::{CORNER_PIECE_COUNT, CornerPiece, EDGE_PIECE_COUNT, EdgePiece},
};

/// The number of physical edges
pub const EDGE_COUNT: usize = 12;
/// The number of physical corners
pub const CORNER_COUNT: usize = 8;

struct ClassTable<const PIECES: usize, const CLASSES: usize> {
    /// The lowest-indexed piece of each class
    representatives: [usize; CLASSES],
    class_of: [u8; PIECES],
}

impl<const PIECES: usize, const CLASSES: usize> ClassTable<PIECES, CLASSES> {
    /// Group the pieces `0..PIECES` into the orbits of `step`
    #[allow(clippy::cast_possible_truncation)]
    fn new(name: &str, step: impl Fn(usize) -> usize) -> Self {
        let mut union_find = UnionFind::new(PIECES);

        for piece in 0..PIECES {
            union_find.union(piece, step(piece));
        }

        let sets = union_find.sets();
        assert_eq!(sets.len(), CLASSES, "wrong number of physical {name}s");

        let mut representatives = [0; CLASSES];
        let mut class_of = [0; PIECES];

        for (class, set) in sets.iter().enumerate() {
            representatives[class] = set[0];
            for &piece in set {
                class_of[piece] = class as u8;
            }
        }

        debug!(
            "Grouped {PIECES} {name} pieces into {} physical {name}s",
            sets.len()
        );

        ClassTable {
            representatives,
            class_of,
        }
    }
}

static EDGES: LazyLock<ClassTable<EDGE_PIECE_COUNT, EDGE_COUNT>> = LazyLock::new(|| {
    ClassTable::new("edge", |i| EdgePiece::from_index(i).flip().index())
});

static CORNERS: LazyLock<ClassTable<CORNER_PIECE_COUNT, CORNER_COUNT>> = LazyLock::new(|| {
    ClassTable::new("corner", |i| CornerPiece::from_index(i).cyclic().index())
});

/// A physical edge: the class `{e, e.flip()}` of edge pieces
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge(u8);

impl Edge {
    pub fn all() -> impl Iterator<Item = Edge> + Clone {
        (0..EDGE_COUNT).map(Edge::from_index)
    }

    /// The edge a piece belongs to
    #[must_use]
    pub fn of(piece: EdgePiece) -> Edge {
        Edge(EDGES.class_of[piece.index()])
    }

    /// The canonical reading of this edge
    #[must_use]
    pub fn representative(self) -> EdgePiece {
        EdgePiece::from_index(EDGES.representatives[self.index()])
    }

    /// Both readings of this edge, starting with the representative
    #[must_use]
    pub fn pieces(self) -> [EdgePiece; 2] {
        let representative = self.representative();
        [representative, representative.flip()]
    }

    pub(crate) fn index(self) -> usize {
        usize::from(self.0)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_index(index: usize) -> Edge {
        Edge(index as u8)
    }
}

impl From<EdgePiece> for Edge {
    fn from(piece: EdgePiece) -> Self {
        Edge::of(piece)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b] = self.representative().stickers_sorted();
        write!(f, "{{{a} {b}}}")
    }
}

/// A physical corner: the class `{c, c.cyclic(), c.cyclic().cyclic()}` of corner pieces
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Corner(u8);

impl Corner {
    pub fn all() -> impl Iterator<Item = Corner> + Clone {
        (0..CORNER_COUNT).map(Corner::from_index)
    }

    /// The corner a piece belongs to
    #[must_use]
    pub fn of(piece: CornerPiece) -> Corner {
        Corner(CORNERS.class_of[piece.index()])
    }

    /// The canonical reading of this corner
    #[must_use]
    pub fn representative(self) -> CornerPiece {
        CornerPiece::from_index(CORNERS.representatives[self.index()])
    }

    /// All three readings of this corner, starting with the representative
    #[must_use]
    pub fn pieces(self) -> [CornerPiece; 3] {
        let representative = self.representative();
        [
            representative,
            representative.cyclic(),
            representative.cyclic().cyclic(),
        ]
    }

    /// The reading of this corner whose first sticker lies on `axis`
    #[must_use]
    pub fn with_axis(self, axis: Axis) -> CornerPiece {
        self.representative().with_axis(axis)
    }

    pub(crate) fn index(self) -> usize {
        usize::from(self.0)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn from_index(index: usize) -> Corner {
        Corner(index as u8)
    }
}

impl From<CornerPiece> for Corner {
    fn from(piece: CornerPiece) -> Self {
        Corner::of(piece)
    }
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.representative().stickers_sorted();
        write!(f, "{{{a} {b} {c}}}")
    }
}
