use std::{fmt, ops::Neg};

/// One of the three coordinate axes of the cube
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// The cyclic successor of the axis: X → Y → Z → X
    #[must_use]
    pub const fn rotate(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::Z,
            Axis::Z => Axis::X,
        }
    }

    /// The axis that is neither `self` nor `other`.
    ///
    /// If both axes are equal, that axis is returned. Nothing in this crate relies on that case.
    #[must_use]
    pub const fn other(self, other: Axis) -> Axis {
        match (self, other) {
            (Axis::X, Axis::Y) | (Axis::Y, Axis::X) => Axis::Z,
            (Axis::Y, Axis::Z) | (Axis::Z, Axis::Y) => Axis::X,
            (Axis::Z, Axis::X) | (Axis::X, Axis::Z) => Axis::Y,
            (Axis::X, Axis::X) => Axis::X,
            (Axis::Y, Axis::Y) => Axis::Y,
            (Axis::Z, Axis::Z) => Axis::Z,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        };
        f.write_str(name)
    }
}

/// A signed axis. This names one of the six faces of the cube, and equally the color of the
/// stickers that belong on that face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Orientation {
    axis: Axis,
    positive: bool,
}

impl Orientation {
    /// Every orientation, ordered by `Orientation::index`
    pub const ALL: [Orientation; 6] = [
        Orientation::new(true, Axis::X),
        Orientation::new(false, Axis::X),
        Orientation::new(true, Axis::Y),
        Orientation::new(false, Axis::Y),
        Orientation::new(true, Axis::Z),
        Orientation::new(false, Axis::Z),
    ];

    #[must_use]
    pub const fn new(positive: bool, axis: Axis) -> Orientation {
        Orientation { axis, positive }
    }

    #[must_use]
    pub const fn axis(self) -> Axis {
        self.axis
    }

    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.positive
    }

    /// Two orientations are adjacent when they lie on different axes, i.e. when the faces they
    /// name share an edge of the cube.
    #[must_use]
    pub fn is_adjacent(self, other: Orientation) -> bool {
        self.axis != other.axis
    }

    /// The orientation completing `self` and `other` to a right-handed basis.
    ///
    /// Only meaningful when the two are adjacent. Then `cross(a, b) = -cross(b, a)`, and for any
    /// `a` and `b`, `cross(cross(a, b), a) = b` and `cross(b, cross(a, b)) = a`.
    #[must_use]
    pub fn cross(self, other: Orientation) -> Orientation {
        let successor = other.axis == self.axis.rotate();
        let same_sign = self.positive == other.positive;

        Orientation {
            axis: self.axis.other(other.axis),
            positive: successor == same_sign,
        }
    }

    /// Where a sticker facing `self` ends up after a counterclockwise quarter turn of the face
    /// `face`. Stickers on the axis of `face` are left alone.
    #[must_use]
    pub fn rotate_about(self, face: Orientation) -> Orientation {
        if self.axis == face.axis {
            self
        } else {
            face.cross(self)
        }
    }

    /// Position in `Orientation::ALL`
    pub(crate) const fn index(self) -> usize {
        self.axis.index() * 2 + if self.positive { 0 } else { 1 }
    }
}

impl Neg for Orientation {
    type Output = Orientation;

    fn neg(self) -> Self::Output {
        Orientation {
            axis: self.axis,
            positive: !self.positive,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.positive { '+' } else { '-' };
        write!(f, "{sign}{}", self.axis)
    }
}
