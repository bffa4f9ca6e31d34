//! Command implementations

pub mod build;
pub mod ladder;
pub mod neighbors;

pub use build::{BuildConfig, BuildResult, build_graph, run_build};
pub use ladder::{LadderResult, solve_ladder};
pub use neighbors::{NeighborsResult, find_neighbors};
