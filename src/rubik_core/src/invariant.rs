//! The invariant separating reachable configurations from the rest.
//!
//! Every configuration maps to a triple (permutation parity, edge flip parity, corner twist) in a
//! group of order 12. The map is a homomorphism, every triple is hit, and the configurations a
//! real cube can reach are exactly the ones sent to the identity.

use std::{
    fmt,
    ops::{Add, Mul, Neg},
};

use itertools::iproduct;

use crate::{
    classes::{Corner, Edge},
    cube::PRubik,
    group::Group,
    orientation::{Axis, Orientation},
    piece::{CornerPiece, EdgePiece},
};

/// An element of ℤ/2 written multiplicatively, as the sign of a permutation.
///
/// `Positive` is +1, the identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub const ALL: [Sign; 2] = [Sign::Positive, Sign::Negative];

    #[must_use]
    pub fn from_even(even: bool) -> Sign {
        if even { Sign::Positive } else { Sign::Negative }
    }

    #[must_use]
    pub fn value(self) -> i8 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Sign {
        Sign::from_even(self == rhs)
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.value())
    }
}

/// Total corner twist, an element of ℤ/3
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Twist(u8);

impl Twist {
    pub const ZERO: Twist = Twist(0);
    pub const ALL: [Twist; 3] = [Twist(0), Twist(1), Twist(2)];

    #[must_use]
    pub fn new(amount: u8) -> Twist {
        Twist(amount % 3)
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Add for Twist {
    type Output = Twist;

    fn add(self, rhs: Twist) -> Twist {
        Twist((self.0 + rhs.0) % 3)
    }
}

impl Neg for Twist {
    type Output = Twist;

    fn neg(self) -> Twist {
        Twist((3 - self.0) % 3)
    }
}

impl fmt::Display for Twist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The image of a configuration in `ℤ/2 × ℤ/2 × ℤ/3`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Invariant {
    pub parity: Sign,
    pub edge_flip: Sign,
    pub corner_rotation: Twist,
}

impl Invariant {
    /// All twelve elements of the target group
    pub fn all() -> impl Iterator<Item = Invariant> + Clone {
        iproduct!(Sign::ALL, Sign::ALL, Twist::ALL).map(|(parity, edge_flip, corner_rotation)| {
            Invariant {
                parity,
                edge_flip,
                corner_rotation,
            }
        })
    }

    /// A configuration with this invariant, built from the three witnesses. This is a right
    /// inverse of `PRubik::invariant`, so the invariant is onto.
    #[must_use]
    pub fn preimage(&self) -> PRubik {
        let mut cube = PRubik::identity();

        if self.parity == Sign::Negative {
            cube = swap_witness().compose(&cube);
        }

        if self.edge_flip == Sign::Negative {
            cube = flip_witness().compose(&cube);
        }

        rotate_witness()
            .pow(i64::from(self.corner_rotation.value()))
            .compose(&cube)
    }
}

impl Group for Invariant {
    fn identity() -> Self {
        Invariant {
            parity: Sign::Positive,
            edge_flip: Sign::Positive,
            corner_rotation: Twist::ZERO,
        }
    }

    fn compose(&self, other: &Self) -> Self {
        Invariant {
            parity: self.parity * other.parity,
            edge_flip: self.edge_flip * other.edge_flip,
            corner_rotation: self.corner_rotation + other.corner_rotation,
        }
    }

    fn inverse(&self) -> Self {
        Invariant {
            parity: self.parity,
            edge_flip: self.edge_flip,
            corner_rotation: -self.corner_rotation,
        }
    }
}

impl fmt::Display for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.parity, self.edge_flip, self.corner_rotation
        )
    }
}

impl PRubik {
    /// The sign of the permutation of the 12 physical edges times the sign of the permutation of
    /// the 8 physical corners
    #[must_use]
    pub fn parity(&self) -> Sign {
        Sign::from_even(self.edge_class_permutation().is_even())
            * Sign::from_even(self.corner_class_permutation().is_even())
    }

    /// The sign of the permutation of the 24 edge pieces. Odd exactly when an odd number of edges
    /// are flipped.
    #[must_use]
    pub fn edge_flip(&self) -> Sign {
        Sign::from_even(self.edge_permutation().is_even())
    }

    /// The total twist of the corners, measured by how far each corner's reference sticker has
    /// been turned away from the reference axis
    #[must_use]
    pub fn corner_rotation(&self) -> Twist {
        Corner::all()
            .map(|corner| {
                let image = self.corner_image(corner.with_axis(CornerPiece::REFERENCE_AXIS));
                Twist::new(image.twist_to(CornerPiece::REFERENCE_AXIS))
            })
            .fold(Twist::ZERO, Add::add)
    }

    #[must_use]
    pub fn invariant(&self) -> Invariant {
        Invariant {
            parity: self.parity(),
            edge_flip: self.edge_flip(),
            corner_rotation: self.corner_rotation(),
        }
    }

    /// Whether a real cube can reach this configuration by turning faces
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.invariant() == Invariant::identity()
    }

    /// Exchange two physical edges without flipping them or touching anything else. Returns
    /// `None` if `a` and `b` are the same edge.
    #[must_use]
    pub fn swap_edges(a: Edge, b: Edge) -> Option<PRubik> {
        if a == b {
            return None;
        }

        let [a0, a1] = a.pieces();
        let [b0, b1] = b.pieces();

        Some(PRubik::from_fns(
            |piece| {
                if piece == a0 {
                    b0
                } else if piece == a1 {
                    b1
                } else if piece == b0 {
                    a0
                } else if piece == b1 {
                    a1
                } else {
                    piece
                }
            },
            |corner| corner,
        ))
    }

    /// Flip a single physical edge in place
    #[must_use]
    pub fn flip_edge(edge: Edge) -> PRubik {
        PRubik::from_fns(
            |piece| {
                if Edge::of(piece) == edge {
                    piece.flip()
                } else {
                    piece
                }
            },
            |corner| corner,
        )
    }

    /// Twist a single physical corner in place by one step, adding one to the corner rotation
    #[must_use]
    pub fn rotate_corner(corner: Corner) -> PRubik {
        PRubik::from_fns(
            |piece| piece,
            |piece| {
                if Corner::of(piece) == corner {
                    piece.cyclic().cyclic()
                } else {
                    piece
                }
            },
        )
    }
}

const UP: Orientation = Orientation::new(true, Axis::Y);
const RIGHT: Orientation = Orientation::new(true, Axis::X);
const FRONT: Orientation = Orientation::new(true, Axis::Z);

fn up_edge(side: Orientation) -> Edge {
    EdgePiece::new(UP, side)
        .map(Edge::of)
        .unwrap_or_else(|| unreachable!("side stickers of the up face are adjacent to it"))
}

/// Swaps the up-right and up-front edges
fn swap_witness() -> PRubik {
    PRubik::swap_edges(up_edge(RIGHT), up_edge(FRONT))
        .unwrap_or_else(|| unreachable!("the edges are distinct"))
}

fn flip_witness() -> PRubik {
    PRubik::flip_edge(up_edge(FRONT))
}

fn rotate_witness() -> PRubik {
    let corner = CornerPiece::new(UP, RIGHT)
        .map(Corner::of)
        .unwrap_or_else(|| unreachable!("up and right are adjacent"));
    PRubik::rotate_corner(corner)
}
