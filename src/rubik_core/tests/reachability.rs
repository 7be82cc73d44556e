use bnum::types::U512;
use log::info;
use rubik_core::{Corner, Edge, Group, Orientation, PRubik, Sign, TurnGroup};

#[test_log::test]
fn turns_generate_exactly_the_kernel() {
    let turn_group = TurnGroup::new();
    assert_eq!(
        turn_group.order(),
        U512::from(43_252_003_274_489_856_000_u128)
    );

    // The invariant has 12 values, so the kernel has index 12 in the group of all assemblies
    let edges = (1..=12_u128).product::<u128>() * 2_u128.pow(12);
    let corners = (1..=8_u128).product::<u128>() * 3_u128.pow(8);
    assert_eq!(
        turn_group.order() * U512::from(12_u8),
        U512::from(edges) * U512::from(corners)
    );

    let mut rng = fastrand::Rng::with_seed(2024);

    for _ in 0..20 {
        let cube = PRubik::identity().scramble(&mut rng, 30);
        assert!(turn_group.contains(&cube));
    }

    let edge = Edge::all().next().unwrap();
    let other_edge = Edge::all().nth(5).unwrap();
    let corner = Corner::all().next().unwrap();
    let other_corner = Corner::all().nth(3).unwrap();

    let witnesses = [
        PRubik::swap_edges(edge, other_edge).unwrap(),
        PRubik::flip_edge(edge),
        PRubik::rotate_corner(corner),
    ];
    for witness in witnesses {
        assert!(!turn_group.contains(&witness));
        assert!(!witness.is_valid());
    }

    // Pairs of witnesses cancel in the invariant and can be reached
    let two_flips = PRubik::flip_edge(edge).compose(&PRubik::flip_edge(other_edge));
    let two_twists =
        PRubik::rotate_corner(corner).compose(&PRubik::rotate_corner(other_corner).pow(2));
    for cube in [two_flips, two_twists] {
        assert!(cube.is_valid());
        assert!(turn_group.contains(&cube));
    }
}

#[test_log::test]
fn membership_agrees_with_the_invariant() {
    let turn_group = TurnGroup::new();
    let mut rng = fastrand::Rng::with_seed(77);
    let mut reachable = 0;
    let mut odd_parity = 0;

    for _ in 0..60 {
        let mut cube = PRubik::identity().scramble(&mut rng, 15);

        if rng.bool() {
            let a = Edge::all().nth(rng.usize(..12)).unwrap();
            let b = Edge::all().nth(rng.usize(..12)).unwrap();
            if let Some(swap) = PRubik::swap_edges(a, b) {
                cube = swap.compose(&cube);
            }
        }
        if rng.bool() {
            cube = PRubik::flip_edge(Edge::all().nth(rng.usize(..12)).unwrap()).compose(&cube);
        }
        if rng.bool() {
            cube = PRubik::rotate_corner(Corner::all().nth(rng.usize(..8)).unwrap()).compose(&cube);
        }
        if rng.bool() {
            cube = PRubik::turn(Orientation::ALL[rng.usize(..6)]).compose(&cube);
        }

        assert_eq!(turn_group.contains(&cube), cube.is_valid());
        if cube.is_valid() {
            reachable += 1;
        }
        if cube.parity() == Sign::Negative {
            odd_parity += 1;
        }
    }

    info!("{reachable} of 60 configurations were reachable, {odd_parity} had odd parity");
    assert!(odd_parity > 0);
}
