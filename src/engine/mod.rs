mod grid;
mod scheduler;

pub use grid::{Cell, GridError, GridState, Transition};
pub use scheduler::{EvolutionScheduler, DEFAULT_SPEED, MAX_SPEED};
