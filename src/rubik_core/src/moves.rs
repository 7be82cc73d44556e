use std::sync::LazyLock;

use crate::{cube::PRubik, group::Group, orientation::Orientation};

static QUARTER_TURNS: LazyLock<[PRubik; 6]> = LazyLock::new(|| {
    Orientation::ALL.map(|face| {
        PRubik::from_fns(
            |edge| {
                if edge.touches(face) {
                    edge.rotate_about(face)
                } else {
                    edge
                }
            },
            |corner| {
                if corner.touches(face) {
                    corner.rotate_about(face)
                } else {
                    corner
                }
            },
        )
    })
});

impl PRubik {
    /// A counterclockwise quarter turn of `face`, as seen looking at that face.
    ///
    /// Clockwise turns are three of these, half turns are two.
    #[must_use]
    pub fn turn(face: Orientation) -> PRubik {
        QUARTER_TURNS[face.index()]
    }

    /// Turn the faces in `moves` one after another, starting from `self`
    #[must_use]
    pub fn apply_moves(&self, moves: impl IntoIterator<Item = Orientation>) -> PRubik {
        moves
            .into_iter()
            .fold(*self, |cube, face| PRubik::turn(face).compose(&cube))
    }

    /// Apply `count` uniformly random quarter turns to `self`
    #[must_use]
    pub fn scramble(&self, rng: &mut fastrand::Rng, count: usize) -> PRubik {
        self.apply_moves(std::iter::repeat_with(|| Orientation::ALL[rng.usize(..6)]).take(count))
    }
}
