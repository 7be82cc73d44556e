use std::sync::OnceLock;

use bnum::types::U512;
use itertools::Itertools;

use super::discrete_math::lcm_iter;

/// A permutation of `0..len`, stored as the image of each point.
///
/// The cycle decomposition is computed on demand and cached.
#[derive(Clone, Debug)]
pub struct Permutation {
    mapping: Box<[usize]>,
    cycles: OnceLock<Vec<Vec<usize>>>,
}

impl Permutation {
    #[must_use]
    pub fn identity(len: usize) -> Permutation {
        Permutation {
            // Map every value to itself
            mapping: (0..len).collect(),
            cycles: OnceLock::new(),
        }
    }

    /// Returns `None` if the mapping is not a bijection of `0..mapping.len()`
    #[must_use]
    pub fn from_mapping(mapping: Vec<usize>) -> Option<Permutation> {
        let mut seen = vec![false; mapping.len()];

        for &value in &mapping {
            if std::mem::replace(seen.get_mut(value)?, true) {
                return None;
            }
        }

        Some(Permutation {
            mapping: mapping.into_boxed_slice(),
            cycles: OnceLock::new(),
        })
    }

    /// Build a permutation of `0..len` from disjoint cycles.
    ///
    /// # Panics
    ///
    /// Panics if a cycle mentions a point outside of `0..len`.
    #[must_use]
    pub fn from_cycles(len: usize, cycles: &[Vec<usize>]) -> Permutation {
        // Start with the identity permutation
        let mut mapping = (0..len).collect::<Vec<_>>();

        for cycle in cycles {
            for (start, end) in cycle.iter().circular_tuple_windows() {
                mapping[*start] = *end;
            }
        }

        Permutation {
            mapping: mapping.into_boxed_slice(),
            cycles: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    #[must_use]
    pub fn mapping(&self) -> &[usize] {
        &self.mapping
    }

    /// The nontrivial cycles of the permutation, each starting at its smallest point
    #[must_use]
    pub fn cycles(&self) -> &[Vec<usize>] {
        self.cycles.get_or_init(|| {
            let mut covered = vec![false; self.mapping.len()];
            let mut cycles = vec![];

            for i in 0..self.mapping.len() {
                if covered[i] {
                    continue;
                }

                covered[i] = true;
                let mut cycle = vec![i];
                let mut next = self.mapping[i];

                while next != i {
                    covered[next] = true;
                    cycle.push(next);
                    next = self.mapping[next];
                }

                if cycle.len() > 1 {
                    cycles.push(cycle);
                }
            }

            cycles
        })
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.mapping.iter().enumerate().all(|(i, &v)| i == v)
    }

    /// Apply `self` and then `other`
    ///
    /// # Panics
    ///
    /// Panics if the permutations act on different numbers of points.
    pub fn compose_into(&mut self, other: &Permutation) {
        assert_eq!(self.len(), other.len());

        for value in &mut self.mapping {
            *value = other.mapping[*value];
        }

        // Invalidate `cycles`
        self.cycles = OnceLock::new();
    }

    #[must_use]
    pub fn inverse(&self) -> Permutation {
        let mut mapping = vec![0; self.mapping.len()];

        for (from, &to) in self.mapping.iter().enumerate() {
            mapping[to] = from;
        }

        Permutation {
            mapping: mapping.into_boxed_slice(),
            cycles: OnceLock::new(),
        }
    }

    /// `true` for even permutations, `false` for odd ones
    #[must_use]
    pub fn is_even(&self) -> bool {
        // A cycle of length n is a product of n - 1 transpositions
        self.cycles()
            .iter()
            .map(|cycle| cycle.len() - 1)
            .sum::<usize>()
            % 2
            == 0
    }

    /// The smallest positive power of the permutation that is the identity
    #[must_use]
    pub fn order(&self) -> U512 {
        lcm_iter(self.cycles().iter().map(|cycle| U512::from(cycle.len())))
    }
}

impl PartialEq for Permutation {
    fn eq(&self, other: &Self) -> bool {
        self.mapping == other.mapping
    }
}

impl Eq for Permutation {}
