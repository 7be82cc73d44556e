use std::collections::VecDeque;

use bnum::types::U512;
use log::{debug, trace};

use super::permutation::Permutation;

/// A permutation group given by generators, stored so that membership and the order of the group
/// can be computed.
///
/// The base does not have to contain every point. It must be a base for every permutation the
/// chain is asked about: any such permutation fixing every base point is the identity.
#[derive(Debug)]
pub struct StabilizerChain {
    stabilizers: Stabilizer,
}

impl StabilizerChain {
    /// Create a new stabilizer chain from generators using the Schreier-Sims algorithm.
    ///
    /// # Panics
    ///
    /// Panics if `base` is empty or a generator does not act on `point_count` points.
    #[must_use]
    pub fn new(
        point_count: usize,
        base: &[usize],
        generators: impl IntoIterator<Item = Permutation>,
    ) -> StabilizerChain {
        let mut stabilizers = Stabilizer::new(point_count, base);

        for generator in generators {
            assert_eq!(generator.len(), point_count);
            stabilizers.extend(generator);
        }

        let chain = StabilizerChain { stabilizers };
        debug!(
            "Built a stabilizer chain of depth {} for a group of order {}",
            base.len(),
            chain.cardinality()
        );
        chain
    }

    /// Determine if a permutation is a member of the group
    ///
    /// # Panics
    ///
    /// Panics if `permutation` does not act on the same points as the generators.
    #[must_use]
    pub fn is_member(&self, permutation: Permutation) -> bool {
        assert_eq!(permutation.len(), self.stabilizers.coset_reps.len());
        self.stabilizers.is_member(permutation)
    }

    /// Calculate the cardinality of the group
    #[must_use]
    pub fn cardinality(&self) -> U512 {
        self.stabilizers.cardinality()
    }
}

#[derive(Debug)]
struct Stabilizer {
    next: Option<Box<Stabilizer>>,
    stabilizes: usize,
    generating_set: Vec<Permutation>,
    /// For each point of the orbit, a permutation moving it one step closer to `stabilizes`
    coset_reps: Box<[Option<Permutation>]>,
}

impl Stabilizer {
    fn new(point_count: usize, chain: &[usize]) -> Stabilizer {
        let (head, tail) = chain
            .split_first()
            .expect("a stabilizer chain needs at least one base point");

        let mut coset_reps = vec![None; point_count].into_boxed_slice();
        coset_reps[*head] = Some(Permutation::identity(point_count));

        Stabilizer {
            stabilizes: *head,
            next: (!tail.is_empty()).then(|| Box::new(Stabilizer::new(point_count, tail))),
            coset_reps,
            generating_set: Vec::new(),
        }
    }

    fn cardinality(&self) -> U512 {
        let mut cardinality = U512::from(self.coset_reps.iter().filter(|v| v.is_some()).count());
        if let Some(next) = &self.next {
            cardinality *= next.cardinality();
        }
        cardinality
    }

    fn is_member(&self, mut permutation: Permutation) -> bool {
        loop {
            let rep = permutation.mapping()[self.stabilizes];

            if rep == self.stabilizes {
                break;
            }

            let Some(other_perm) = &self.coset_reps[rep] else {
                return false;
            };

            permutation.compose_into(other_perm);
        }

        match &self.next {
            Some(next) => next.is_member(permutation),
            None => permutation.is_identity(),
        }
    }

    /// Compose onto `alg` the path of coset representatives taking `rep` to the base point.
    /// Returns `false` if `rep` is outside of the orbit.
    fn inverse_rep_to(&self, mut rep: usize, alg: &mut Permutation) -> bool {
        while rep != self.stabilizes {
            let Some(other_alg) = &self.coset_reps[rep] else {
                return false;
            };

            alg.compose_into(other_alg);
            rep = other_alg.mapping()[rep];
        }

        true
    }

    fn extend(&mut self, generator: Permutation) {
        if self.is_member(generator.clone()) {
            return;
        }

        trace!(
            "New strong generator fixing the base up to point {}",
            self.stabilizes
        );

        let mapping = generator.mapping().to_owned();
        let inv = generator.inverse();
        self.generating_set.push(generator);

        let mut newly_in_orbit = VecDeque::new();

        for i in 0..self.coset_reps.len() {
            if self.coset_reps[i].is_some() && self.coset_reps[mapping[i]].is_none() {
                self.coset_reps[mapping[i]] = Some(inv.clone());
                newly_in_orbit.push_back(mapping[i]);
            }
        }

        while let Some(spot) = newly_in_orbit.pop_front() {
            for perm in &self.generating_set {
                let goes_to = perm.mapping()[spot];
                if self.coset_reps[goes_to].is_none() {
                    self.coset_reps[goes_to] = Some(perm.inverse());
                    newly_in_orbit.push_back(goes_to);
                }
            }
        }

        if self.next.is_none() {
            return;
        }

        let point_count = self.coset_reps.len();
        let mut schreier_generators = vec![];

        for i in 0..point_count {
            let mut rep = Permutation::identity(point_count);
            if !self.inverse_rep_to(i, &mut rep) {
                continue;
            }

            // Now maps the base point to `i`
            let rep = rep.inverse();

            for generator in &self.generating_set {
                let mut new_generator = rep.clone();
                new_generator.compose_into(generator);
                let in_orbit =
                    self.inverse_rep_to(new_generator.mapping()[self.stabilizes], &mut new_generator);
                debug_assert!(in_orbit);
                schreier_generators.push(new_generator);
            }
        }

        if let Some(next) = &mut self.next {
            for new_generator in schreier_generators {
                next.extend(new_generator);
            }
        }
    }
}
