//! Sliding-tile puzzle boards and a greedy best-first solver.

pub mod puzzle;
pub mod search;
