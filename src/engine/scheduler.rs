use super::GridState;
use std::time::Duration;

pub const DEFAULT_SPEED: u32 = 20;
pub const MAX_SPEED: u32 = 100;

const MIN_DELAY_MS: u64 = 10;

/// Drives time-stepped evolution at a speed-controlled cadence.
///
/// The scheduler never sleeps: [`resume`](Self::resume) and
/// [`tick`](Self::tick) report how long the driver should wait before the
/// next tick, which keeps the host event loop free between steps and lets
/// tests fire ticks by hand.
pub struct EvolutionScheduler {
    grid: GridState,
    speed: u32,
    running: bool,
    generation: u64,
}

impl EvolutionScheduler {
    /// Starts stopped, at the default speed.
    pub fn new(grid: GridState) -> Self {
        Self::with_speed(grid, DEFAULT_SPEED)
    }

    pub fn with_speed(grid: GridState, speed: u32) -> Self {
        Self {
            grid,
            speed: speed.min(MAX_SPEED),
            running: false,
            generation: 0,
        }
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    /// Manual edits stay allowed at any time, running or stopped; whatever
    /// they change is visible to the next tick.
    pub fn grid_mut(&mut self) -> &mut GridState {
        &mut self.grid
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Clamps to `[0, 100]`. Takes effect on the next delay computation; an
    /// already-pending wait is not revised.
    pub fn set_speed(&mut self, speed: u32) {
        self.speed = speed.min(MAX_SPEED);
    }

    /// Wait between ticks: 1000 ms at speed 0 down to 100 ms at speed 100,
    /// with a hard 10 ms floor against runaway rescheduling.
    pub fn delay(&self) -> Duration {
        Duration::from_millis((1000 - self.speed as u64 * 9).max(MIN_DELAY_MS))
    }

    /// Starts the simulation: performs one step immediately and returns the
    /// wait until the next [`tick`](Self::tick).
    pub fn resume(&mut self) -> Duration {
        self.running = true;
        log::info!("resumed at generation {}", self.generation);
        self.step();
        self.delay()
    }

    /// Pauses the simulation. A tick that was already scheduled becomes a
    /// no-op when it fires.
    pub fn stop(&mut self) {
        self.running = false;
        log::info!("stopped at generation {}", self.generation);
    }

    /// Stops and returns the board to an empty generation-zero state.
    pub fn reset(&mut self) {
        self.stop();
        self.grid.clear();
        self.generation = 0;
    }

    /// One scheduled invocation of the evolution step.
    ///
    /// Returns the wait until the next tick, or `None` when stopped: a timer
    /// that fires after [`stop`](Self::stop) does nothing and nothing is
    /// rescheduled until the next [`resume`](Self::resume).
    pub fn tick(&mut self) -> Option<Duration> {
        if !self.running {
            return None;
        }
        self.step();
        Some(self.delay())
    }

    fn step(&mut self) {
        let transition = self.grid.next_generation();
        self.grid.apply(&transition);
        self.generation += 1;
        log::debug!(
            "generation {}: {} births, {} deaths, population {}",
            self.generation,
            transition.births.len(),
            transition.deaths.len(),
            self.grid.population()
        );
    }
}
