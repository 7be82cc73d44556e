use std::fmt;

use thiserror::Error;

use crate::orientation::{Axis, Orientation};

/// The number of orderings of edge stickers; each of the 12 edges has two.
pub const EDGE_PIECE_COUNT: usize = 24;
/// The number of orderings of corner stickers; each of the 8 corners has three.
pub const CORNER_PIECE_COUNT: usize = 24;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceError {
    #[error("Orientations {0} and {1} lie on the same axis and cannot share a piece")]
    NotAdjacent(Orientation, Orientation),
    #[error("Orientations {0}, {1}, {2} do not form a right-handed basis")]
    NotRightHanded(Orientation, Orientation, Orientation),
}

/// An edge with its two stickers listed in a particular order.
///
/// Every value satisfies `fst.is_adjacent(snd)`; the only way to get one is through a constructor
/// that checks this.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgePiece {
    fst: Orientation,
    snd: Orientation,
}

/// Position of `snd` among the four orientations adjacent to `fst`
fn adjacent_position(fst: Orientation, snd: Orientation) -> usize {
    let base = fst.axis().index() * 2;
    let i = snd.index();
    if i < base { i } else { i - 2 }
}

fn from_adjacent_position(fst: Orientation, position: usize) -> Orientation {
    let base = fst.axis().index() * 2;
    let i = if position < base { position } else { position + 2 };
    Orientation::ALL[i]
}

impl EdgePiece {
    /// Returns `None` unless the two orientations are adjacent
    #[must_use]
    pub fn new(fst: Orientation, snd: Orientation) -> Option<EdgePiece> {
        fst.is_adjacent(snd).then_some(EdgePiece { fst, snd })
    }

    /// Every edge piece, ordered by index
    pub fn all() -> impl Iterator<Item = EdgePiece> + Clone {
        (0..EDGE_PIECE_COUNT).map(EdgePiece::from_index)
    }

    #[must_use]
    pub fn fst(self) -> Orientation {
        self.fst
    }

    #[must_use]
    pub fn snd(self) -> Orientation {
        self.snd
    }

    /// The same physical edge read in the other order
    #[must_use]
    pub fn flip(self) -> EdgePiece {
        EdgePiece {
            fst: self.snd,
            snd: self.fst,
        }
    }

    /// The stickers of the edge in a canonical order, independent of how the piece is read
    #[must_use]
    pub fn stickers_sorted(self) -> [Orientation; 2] {
        let mut stickers = [self.fst, self.snd];
        stickers.sort();
        stickers
    }

    /// Whether both pieces are readings of the same physical edge
    #[must_use]
    pub fn same_edge(self, other: EdgePiece) -> bool {
        self.stickers_sorted() == other.stickers_sorted()
    }

    /// Whether one of the stickers lies on `face`
    #[must_use]
    pub fn touches(self, face: Orientation) -> bool {
        self.fst == face || self.snd == face
    }

    /// Turn both stickers a quarter counterclockwise about `face`
    pub(crate) fn rotate_about(self, face: Orientation) -> EdgePiece {
        let rotated = EdgePiece {
            fst: self.fst.rotate_about(face),
            snd: self.snd.rotate_about(face),
        };
        debug_assert!(rotated.fst.is_adjacent(rotated.snd));
        rotated
    }

    pub(crate) fn index(self) -> usize {
        self.fst.index() * 4 + adjacent_position(self.fst, self.snd)
    }

    pub(crate) fn from_index(index: usize) -> EdgePiece {
        let fst = Orientation::ALL[index / 4];
        EdgePiece {
            fst,
            snd: from_adjacent_position(fst, index % 4),
        }
    }
}

impl TryFrom<(Orientation, Orientation)> for EdgePiece {
    type Error = PieceError;

    fn try_from((fst, snd): (Orientation, Orientation)) -> Result<Self, Self::Error> {
        EdgePiece::new(fst, snd).ok_or(PieceError::NotAdjacent(fst, snd))
    }
}

impl fmt::Display for EdgePiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {})", self.fst, self.snd)
    }
}

/// A corner with its three stickers listed in a particular order.
///
/// The stickers always form a right-handed basis: `thd == fst.cross(snd)`. Reading the stickers
/// counterclockwise around the corner from outside the cube gives this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CornerPiece {
    fst: Orientation,
    snd: Orientation,
    thd: Orientation,
}

impl CornerPiece {
    /// The axis corner twist is measured against
    pub const REFERENCE_AXIS: Axis = Axis::X;

    /// Build the corner whose first two stickers are `fst` and `snd`; the third is determined by
    /// them. Returns `None` unless the two are adjacent.
    #[must_use]
    pub fn new(fst: Orientation, snd: Orientation) -> Option<CornerPiece> {
        fst.is_adjacent(snd).then(|| CornerPiece {
            fst,
            snd,
            thd: fst.cross(snd),
        })
    }

    /// Build a corner from all three stickers, checking that they form a right-handed basis
    pub fn from_stickers(
        fst: Orientation,
        snd: Orientation,
        thd: Orientation,
    ) -> Result<CornerPiece, PieceError> {
        let corner = CornerPiece::new(fst, snd).ok_or(PieceError::NotAdjacent(fst, snd))?;

        if corner.thd != thd {
            return Err(PieceError::NotRightHanded(fst, snd, thd));
        }

        Ok(corner)
    }

    /// Every corner piece, ordered by index
    pub fn all() -> impl Iterator<Item = CornerPiece> + Clone {
        (0..CORNER_PIECE_COUNT).map(CornerPiece::from_index)
    }

    #[must_use]
    pub fn fst(self) -> Orientation {
        self.fst
    }

    #[must_use]
    pub fn snd(self) -> Orientation {
        self.snd
    }

    #[must_use]
    pub fn thd(self) -> Orientation {
        self.thd
    }

    /// The same physical corner read starting from the next sticker
    #[must_use]
    pub fn cyclic(self) -> CornerPiece {
        CornerPiece {
            fst: self.snd,
            snd: self.thd,
            thd: self.fst,
        }
    }

    /// The reading of this corner whose first sticker lies on `axis`
    #[must_use]
    pub fn with_axis(self, axis: Axis) -> CornerPiece {
        if self.fst.axis() == axis {
            self
        } else if self.snd.axis() == axis {
            self.cyclic()
        } else {
            self.cyclic().cyclic()
        }
    }

    /// How many applications of `cyclic` bring the first sticker onto `axis`
    #[must_use]
    pub fn twist_to(self, axis: Axis) -> u8 {
        if self.fst.axis() == axis {
            0
        } else if self.snd.axis() == axis {
            1
        } else {
            2
        }
    }

    /// The stickers of the corner in a canonical order, independent of how the piece is read
    #[must_use]
    pub fn stickers_sorted(self) -> [Orientation; 3] {
        let mut stickers = [self.fst, self.snd, self.thd];
        stickers.sort();
        stickers
    }

    /// Whether both pieces are readings of the same physical corner
    #[must_use]
    pub fn same_corner(self, other: CornerPiece) -> bool {
        self.stickers_sorted() == other.stickers_sorted()
    }

    /// Whether one of the stickers lies on `face`
    #[must_use]
    pub fn touches(self, face: Orientation) -> bool {
        self.fst == face || self.snd == face || self.thd == face
    }

    /// Turn all three stickers a quarter counterclockwise about `face`
    pub(crate) fn rotate_about(self, face: Orientation) -> CornerPiece {
        let rotated = CornerPiece {
            fst: self.fst.rotate_about(face),
            snd: self.snd.rotate_about(face),
            thd: self.thd.rotate_about(face),
        };
        debug_assert_eq!(rotated.fst.cross(rotated.snd), rotated.thd);
        rotated
    }

    pub(crate) fn index(self) -> usize {
        self.fst.index() * 4 + adjacent_position(self.fst, self.snd)
    }

    pub(crate) fn from_index(index: usize) -> CornerPiece {
        let fst = Orientation::ALL[index / 4];
        let snd = from_adjacent_position(fst, index % 4);
        CornerPiece {
            fst,
            snd,
            thd: fst.cross(snd),
        }
    }
}

impl TryFrom<(Orientation, Orientation, Orientation)> for CornerPiece {
    type Error = PieceError;

    fn try_from(
        (fst, snd, thd): (Orientation, Orientation, Orientation),
    ) -> Result<Self, Self::Error> {
        CornerPiece::from_stickers(fst, snd, thd)
    }
}

impl fmt::Display for CornerPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.fst, self.snd, self.thd)
    }
}

#[cfg(test)]
mod tests {
    use itertools::{Itertools, iproduct};

    use super::{CornerPiece, EdgePiece, PieceError};
    use crate::orientation::{Axis, Orientation};

    const X: Orientation = Orientation::new(true, Axis::X);
    const Y: Orientation = Orientation::new(true, Axis::Y);
    const Z: Orientation = Orientation::new(true, Axis::Z);

    #[test]
    fn constructors_reject_bad_stickers() {
        assert!(EdgePiece::new(X, -X).is_none());
        assert!(EdgePiece::new(X, X).is_none());
        assert!(EdgePiece::new(X, Y).is_some());
        assert_eq!(
            EdgePiece::try_from((Z, -Z)),
            Err(PieceError::NotAdjacent(Z, -Z))
        );

        assert!(CornerPiece::new(Y, -Y).is_none());
        assert_eq!(CornerPiece::new(X, Y).map(CornerPiece::thd), Some(Z));
        assert!(CornerPiece::from_stickers(X, Y, Z).is_ok());
        assert_eq!(
            CornerPiece::from_stickers(X, Y, -Z),
            Err(PieceError::NotRightHanded(X, Y, -Z))
        );
        assert_eq!(
            CornerPiece::try_from((Y, X, Z)),
            Err(PieceError::NotRightHanded(Y, X, Z))
        );
        assert_eq!(
            CornerPiece::from_stickers(X, -X, Z),
            Err(PieceError::NotAdjacent(X, -X))
        );
    }

    #[test]
    fn enumeration() {
        let edges = EdgePiece::all().collect_vec();
        assert_eq!(edges.len(), 24);
        assert_eq!(edges.iter().unique().count(), 24);
        for (i, edge) in edges.iter().enumerate() {
            assert_eq!(edge.index(), i);
            assert!(edge.fst().is_adjacent(edge.snd()));
        }

        let corners = CornerPiece::all().collect_vec();
        assert_eq!(corners.len(), 24);
        assert_eq!(corners.iter().unique().count(), 24);
        for (i, corner) in corners.iter().enumerate() {
            assert_eq!(corner.index(), i);
            assert_eq!(corner.fst().cross(corner.snd()), corner.thd());
        }

        // Every adjacent pair names exactly one piece of each kind
        let pairs = iproduct!(Orientation::ALL, Orientation::ALL)
            .filter(|(a, b)| a.is_adjacent(*b))
            .count();
        assert_eq!(pairs, 24);
    }

    #[test]
    fn flip_is_an_involution() {
        for edge in EdgePiece::all() {
            assert_ne!(edge.flip(), edge);
            assert_eq!(edge.flip().flip(), edge);
            assert_eq!(edge.flip().stickers_sorted(), edge.stickers_sorted());
            assert!(edge.same_edge(edge.flip()));
        }
    }

    #[test]
    fn cyclic_has_order_three() {
        for corner in CornerPiece::all() {
            let once = corner.cyclic();
            let twice = once.cyclic();

            assert_ne!(once, corner);
            assert_ne!(twice, corner);
            assert_eq!(twice.cyclic(), corner);
            assert_eq!(once.stickers_sorted(), corner.stickers_sorted());
            assert_eq!(twice.stickers_sorted(), corner.stickers_sorted());
            assert_eq!(once.fst().cross(once.snd()), once.thd());
        }
    }

    #[test]
    fn equivalence_class_sizes() {
        for edge in EdgePiece::all() {
            assert_eq!(EdgePiece::all().filter(|e| e.same_edge(edge)).count(), 2);
        }

        for corner in CornerPiece::all() {
            let class = CornerPiece::all()
                .filter(|c| c.same_corner(corner))
                .collect_vec();
            assert_eq!(class.len(), 3);
            assert!(class.contains(&corner.cyclic()));
            assert!(class.contains(&corner.cyclic().cyclic()));
        }
    }

    #[test]
    fn with_axis_picks_the_reading() {
        for (corner, axis) in iproduct!(CornerPiece::all(), Axis::ALL) {
            let canonical = corner.with_axis(axis);
            assert_eq!(canonical.fst().axis(), axis);
            assert!(canonical.same_corner(corner));
            assert_eq!(canonical.with_axis(axis), canonical);

            let mut twisted = corner;
            for _ in 0..corner.twist_to(axis) {
                twisted = twisted.cyclic();
            }
            assert_eq!(twisted, canonical);
        }
    }
}
