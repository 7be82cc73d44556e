use bnum::cast::As;
use thiserror::Error;

use crate::{
    classes::{Corner, Edge},
    group::Group,
    math::permutation::Permutation,
    piece::{CORNER_PIECE_COUNT, CornerPiece, EDGE_PIECE_COUNT, EdgePiece},
};

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeError {
    #[error("The edge table sends two pieces to {0}")]
    EdgesNotBijective(EdgePiece),
    #[error("The corner table sends two pieces to {0}")]
    CornersNotBijective(CornerPiece),
    #[error("The edge table does not commute with flipping at {0}")]
    FlipIncompatible(EdgePiece),
    #[error("The corner table does not commute with cycling at {0}")]
    CyclicIncompatible(CornerPiece),
}

/// A configuration of the cube, reachable or not.
///
/// Each table sends a piece to where it has been carried: the sticker that starts on `e.fst()`
/// ends up on `edges[e].fst()`. The tables commute with `flip` and `cyclic`, so the stickers of a
/// physical piece always stay together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PRubik {
    edges: [EdgePiece; EDGE_PIECE_COUNT],
    corners: [CornerPiece; CORNER_PIECE_COUNT],
}

impl PRubik {
    /// Build a configuration from the image of every piece, checking the compatibility laws
    pub fn from_tables(
        edges: [EdgePiece; EDGE_PIECE_COUNT],
        corners: [CornerPiece; CORNER_PIECE_COUNT],
    ) -> Result<PRubik, CubeError> {
        let mut edge_hit = [false; EDGE_PIECE_COUNT];
        for image in edges {
            if std::mem::replace(&mut edge_hit[image.index()], true) {
                return Err(CubeError::EdgesNotBijective(image));
            }
        }

        let mut corner_hit = [false; CORNER_PIECE_COUNT];
        for image in corners {
            if std::mem::replace(&mut corner_hit[image.index()], true) {
                return Err(CubeError::CornersNotBijective(image));
            }
        }

        let cube = PRubik { edges, corners };

        if let Some(piece) =
            EdgePiece::all().find(|&e| cube.edge_image(e.flip()) != cube.edge_image(e).flip())
        {
            return Err(CubeError::FlipIncompatible(piece));
        }

        if let Some(piece) = CornerPiece::all()
            .find(|&c| cube.corner_image(c.cyclic()) != cube.corner_image(c).cyclic())
        {
            return Err(CubeError::CyclicIncompatible(piece));
        }

        Ok(cube)
    }

    /// Build a configuration from functions the caller knows to be compatible bijections
    pub(crate) fn from_fns(
        edge: impl Fn(EdgePiece) -> EdgePiece,
        corner: impl Fn(CornerPiece) -> CornerPiece,
    ) -> PRubik {
        let cube = PRubik {
            edges: std::array::from_fn(|i| edge(EdgePiece::from_index(i))),
            corners: std::array::from_fn(|i| corner(CornerPiece::from_index(i))),
        };
        debug_assert_eq!(PRubik::from_tables(cube.edges, cube.corners), Ok(cube));
        cube
    }

    /// Where the edge piece starting at `piece` has been carried
    #[must_use]
    pub fn edge_image(&self, piece: EdgePiece) -> EdgePiece {
        self.edges[piece.index()]
    }

    /// Where the corner piece starting at `piece` has been carried
    #[must_use]
    pub fn corner_image(&self, piece: CornerPiece) -> CornerPiece {
        self.corners[piece.index()]
    }

    /// The piece currently sitting at `location`: its stickers, read in the order of `location`,
    /// are the colors showing there.
    #[must_use]
    pub fn edge_at(&self, location: EdgePiece) -> EdgePiece {
        EdgePiece::all()
            .find(|&piece| self.edge_image(piece) == location)
            .unwrap_or_else(|| unreachable!("the edge table is a bijection"))
    }

    /// The piece currently sitting at `location`: its stickers, read in the order of `location`,
    /// are the colors showing there.
    #[must_use]
    pub fn corner_at(&self, location: CornerPiece) -> CornerPiece {
        CornerPiece::all()
            .find(|&piece| self.corner_image(piece) == location)
            .unwrap_or_else(|| unreachable!("the corner table is a bijection"))
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == PRubik::identity()
    }

    /// The action on the 24 edge pieces
    #[must_use]
    pub fn edge_permutation(&self) -> Permutation {
        permutation_of(self.edges.iter().map(|piece| piece.index()))
    }

    /// The action on the 24 corner pieces
    #[must_use]
    pub fn corner_permutation(&self) -> Permutation {
        permutation_of(self.corners.iter().map(|piece| piece.index()))
    }

    /// The action on the 12 physical edges
    #[must_use]
    pub fn edge_class_permutation(&self) -> Permutation {
        permutation_of(
            Edge::all().map(|edge| Edge::of(self.edge_image(edge.representative())).index()),
        )
    }

    /// The action on the 8 physical corners
    #[must_use]
    pub fn corner_class_permutation(&self) -> Permutation {
        permutation_of(
            Corner::all()
                .map(|corner| Corner::of(self.corner_image(corner.representative())).index()),
        )
    }

    /// The action on all 48 pieces, edges first and then corners
    #[must_use]
    pub fn piece_permutation(&self) -> Permutation {
        permutation_of(
            self.edges.iter().map(|piece| piece.index()).chain(
                self.corners
                    .iter()
                    .map(|piece| EDGE_PIECE_COUNT + piece.index()),
            ),
        )
    }

    /// The smallest positive number of repetitions of this configuration that solves the cube
    #[must_use]
    pub fn order(&self) -> u64 {
        // At most 1260 for any configuration
        self.piece_permutation().order().as_()
    }
}

fn permutation_of(mapping: impl Iterator<Item = usize>) -> Permutation {
    Permutation::from_mapping(mapping.collect())
        .unwrap_or_else(|| unreachable!("cube tables are bijections"))
}

impl Group for PRubik {
    fn identity() -> Self {
        PRubik {
            edges: std::array::from_fn(EdgePiece::from_index),
            corners: std::array::from_fn(CornerPiece::from_index),
        }
    }

    fn compose(&self, other: &Self) -> Self {
        PRubik {
            edges: other.edges.map(|piece| self.edge_image(piece)),
            corners: other.corners.map(|piece| self.corner_image(piece)),
        }
    }

    fn inverse(&self) -> Self {
        let mut inverse = PRubik::identity();

        for piece in EdgePiece::all() {
            inverse.edges[self.edge_image(piece).index()] = piece;
        }

        for piece in CornerPiece::all() {
            inverse.corners[self.corner_image(piece).index()] = piece;
        }

        inverse
    }
}
