pub mod discrete_math;
pub mod permutation;
pub mod schreier_sims;
pub mod union_find;
