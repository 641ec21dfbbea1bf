//! Pure computation engines for deterministic standings logic.

pub mod aggregator;
pub mod clinch;
pub mod simulation;

pub use aggregator::season_tables;
pub use clinch::clinched_teams;
pub use simulation::{project, SimulatedFixture, SimulatedFixtureSet};
