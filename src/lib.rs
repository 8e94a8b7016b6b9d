mod engine;
mod gui;

pub use engine::{Cell, EvolutionScheduler, GridError, GridState, Transition, DEFAULT_SPEED, MAX_SPEED};
pub use gui::{App, Config};
