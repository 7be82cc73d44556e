use itertools::Itertools;
use log::info;
use rubik_core::{
    Axis, Corner, CornerPiece, Edge, EdgePiece, Group, Invariant, Orientation, PRubik, Rubik,
};

fn random_edge(rng: &mut fastrand::Rng) -> Edge {
    Edge::all().nth(rng.usize(..12)).unwrap()
}

fn random_corner(rng: &mut fastrand::Rng) -> Corner {
    Corner::all().nth(rng.usize(..8)).unwrap()
}

/// A product of random witnesses and quarter turns, usually unreachable
fn random_precube(rng: &mut fastrand::Rng) -> PRubik {
    let mut cube = PRubik::identity();

    for _ in 0..rng.usize(1..16) {
        let step = match rng.u8(0..4) {
            0 => {
                let (a, b) = (random_edge(rng), random_edge(rng));
                PRubik::swap_edges(a, b).unwrap_or_else(PRubik::identity)
            }
            1 => PRubik::flip_edge(random_edge(rng)),
            2 => PRubik::rotate_corner(random_corner(rng)),
            _ => PRubik::turn(Orientation::ALL[rng.usize(..6)]),
        };
        cube = step.compose(&cube);
    }

    cube
}

#[test_log::test]
fn enumeration_counts() {
    assert_eq!(Axis::ALL.len(), 3);
    assert_eq!(Orientation::ALL.len(), 6);
    assert_eq!(EdgePiece::all().count(), 24);
    assert_eq!(CornerPiece::all().count(), 24);
    assert_eq!(Edge::all().count(), 12);
    assert_eq!(Corner::all().count(), 8);
}

#[test_log::test]
fn invariant_is_a_homomorphism() {
    let mut rng = fastrand::Rng::with_seed(0xC0BE);
    let mut invalid = 0;

    for _ in 0..150 {
        let x = random_precube(&mut rng);
        let y = random_precube(&mut rng);
        let xy = x.compose(&y);

        assert_eq!(xy.parity(), x.parity() * y.parity());
        assert_eq!(xy.edge_flip(), x.edge_flip() * y.edge_flip());
        assert_eq!(
            xy.corner_rotation(),
            x.corner_rotation() + y.corner_rotation()
        );
        assert_eq!(xy.invariant(), x.invariant().compose(&y.invariant()));
        assert_eq!(x.inverse().invariant(), x.invariant().inverse());

        if !x.is_valid() {
            invalid += 1;
        }
    }

    info!("{invalid} of 150 random configurations were unreachable");
    assert!(invalid > 0);
}

#[test_log::test]
fn group_laws() {
    let mut rng = fastrand::Rng::with_seed(11);

    for _ in 0..50 {
        let (a, b, c) = (
            random_precube(&mut rng),
            random_precube(&mut rng),
            random_precube(&mut rng),
        );

        assert_eq!(a.compose(&b).compose(&c), a.compose(&b.compose(&c)));
        assert_eq!(a.compose(&PRubik::identity()), a);
        assert_eq!(PRubik::identity().compose(&a), a);
        assert!(a.compose(&a.inverse()).is_solved());
        assert!(a.inverse().compose(&a).is_solved());
        assert!(a.pow(i64::try_from(a.order()).unwrap()).is_solved());
    }
}

#[test_log::test]
fn valid_configurations_are_closed() {
    let mut rng = fastrand::Rng::with_seed(5);

    for _ in 0..50 {
        let x = PRubik::identity().scramble(&mut rng, 20);
        let y = PRubik::identity().scramble(&mut rng, 20);

        assert!(x.is_valid());
        assert!(x.compose(&y).is_valid());
        assert!(x.inverse().is_valid());
        assert!(Rubik::try_from(x.compose(&y.inverse())).is_ok());
    }
}

#[test_log::test]
fn correcting_the_invariant_gives_a_valid_cube() {
    let mut rng = fastrand::Rng::with_seed(99);

    for _ in 0..100 {
        let cube = random_precube(&mut rng);
        let correction = cube.invariant().inverse().preimage();
        let corrected = correction.compose(&cube);

        assert!(corrected.is_valid());
        assert_eq!(correction.invariant().compose(&cube.invariant()), Invariant::identity());
    }
}

#[test_log::test]
fn lookup_after_a_scramble() {
    let mut rng = fastrand::Rng::with_seed(1234);
    let cube = PRubik::identity().scramble(&mut rng, 50);

    let edges = EdgePiece::all().map(|location| cube.edge_at(location)).collect_vec();
    assert_eq!(edges.iter().unique().count(), 24);

    // The stickers at every edge location come from the same physical edge
    for location in EdgePiece::all() {
        let piece = cube.edge_at(location);
        assert_eq!(cube.edge_image(piece), location);
        assert!(piece.same_edge(cube.edge_at(location.flip()).flip()));
    }

    for location in CornerPiece::all() {
        let piece = cube.corner_at(location);
        assert_eq!(cube.corner_image(piece), location);
        assert_eq!(Corner::of(piece), Corner::of(cube.corner_at(location.cyclic())));
    }
}
