use ahash::AHashSet;
use thiserror::Error;

/// Board coordinate as `(row, col)`.
///
/// Signed so that out-of-range requests from the UI layer are representable
/// and can be rejected instead of wrapping.
pub type Cell = (i64, i64);

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("cell {cell:?} is outside the {rows}x{cols} grid")]
    OutOfBounds { cell: Cell, rows: usize, cols: usize },
}

/// Pending outcome of one evolution step.
///
/// Produced by [`GridState::next_generation`] and committed with
/// [`GridState::apply`]. A cell never appears in both lists.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transition {
    pub births: Vec<Cell>,
    pub deaths: Vec<Cell>,
}

impl Transition {
    pub fn is_empty(&self) -> bool {
        self.births.is_empty() && self.deaths.is_empty()
    }
}

/// Fixed-size Game of Life board with hard edges.
///
/// Membership in the alive set is the sole source of truth for liveness;
/// only in-bounds cells can ever be members.
pub struct GridState {
    rows: usize,
    cols: usize,
    alive: AHashSet<Cell>,
}

impl GridState {
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows >= 1 && cols >= 1);
        Self {
            rows,
            cols,
            alive: AHashSet::new(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)` of the board
    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn check(&self, cell: Cell) -> Result<(), GridError> {
        let (row, col) = cell;
        if row < 0 || col < 0 || row >= self.rows as i64 || col >= self.cols as i64 {
            return Err(GridError::OutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    pub fn is_alive(&self, cell: Cell) -> Result<bool, GridError> {
        self.check(cell)?;
        Ok(self.alive.contains(&cell))
    }

    /// Births `cell`; idempotent on an already-living cell.
    pub fn activate(&mut self, cell: Cell) -> Result<(), GridError> {
        self.check(cell)?;
        self.alive.insert(cell);
        Ok(())
    }

    /// Kills `cell`; no-op on an already-dead cell.
    pub fn deactivate(&mut self, cell: Cell) -> Result<(), GridError> {
        self.check(cell)?;
        self.alive.remove(&cell);
        Ok(())
    }

    /// Manual-activation semantics: a click on a dead cell births it, a click
    /// on a living cell leaves it alive. Death is reachable only through the
    /// rule or [`deactivate`](Self::deactivate).
    pub fn toggle(&mut self, cell: Cell) -> Result<(), GridError> {
        self.activate(cell)
    }

    /// Number of living cells among the up-to-8 in-bounds neighbors: 3
    /// candidates for a corner cell, 5 for an edge cell, 8 interior.
    pub fn neighbor_count(&self, cell: Cell) -> Result<u8, GridError> {
        self.check(cell)?;
        Ok(self.count_neighbors(cell))
    }

    // Out-of-bounds cells can never be members of the alive set, so the
    // membership test alone keeps the count within the hard edges.
    fn count_neighbors(&self, (row, col): Cell) -> u8 {
        let mut count = 0;
        for r in row - 1..=row + 1 {
            for c in col - 1..=col + 1 {
                if (r, c) != (row, col) && self.alive.contains(&(r, c)) {
                    count += 1;
                }
            }
        }
        count
    }

    pub fn population(&self) -> usize {
        self.alive.len()
    }

    /// Iterates over the living cells in no particular order.
    pub fn alive_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.alive.iter().copied()
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.alive.clear();
    }

    /// Refills the board with random cells.
    ///
    /// `fill_rate` - probability of a cell being alive
    /// `seed` - random seed (if `None`, then a random seed is generated)
    pub fn randomize(&mut self, seed: Option<u64>, fill_rate: f64) {
        use rand::{Rng, SeedableRng};

        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        self.alive.clear();
        for row in 0..self.rows as i64 {
            for col in 0..self.cols as i64 {
                if rng.gen_bool(fill_rate) {
                    self.alive.insert((row, col));
                }
            }
        }
    }

    /// Evaluates one generation of B3/S23 against the current state.
    ///
    /// Pure: every neighbor count is taken from the current generation before
    /// anything is committed, so a cell's fate never depends on another
    /// cell's fate within the same step.
    pub fn next_generation(&self) -> Transition {
        let mut transition = Transition::default();
        for row in 0..self.rows as i64 {
            for col in 0..self.cols as i64 {
                let cell = (row, col);
                let neighbors = self.count_neighbors(cell);
                if self.alive.contains(&cell) {
                    if !(neighbors == 2 || neighbors == 3) {
                        transition.deaths.push(cell);
                    }
                } else if neighbors == 3 {
                    transition.births.push(cell);
                }
            }
        }
        transition
    }

    /// Commits a transition produced by [`next_generation`](Self::next_generation).
    ///
    /// Deaths are removed before births are inserted; the rule cannot emit
    /// both for one cell, but the fixed order keeps `apply` deterministic
    /// should it ever be fed an inconsistent transition.
    pub fn apply(&mut self, transition: &Transition) {
        for cell in &transition.deaths {
            self.alive.remove(cell);
        }
        for cell in &transition.births {
            self.alive.insert(*cell);
        }
    }

    /// One full evolution step.
    pub fn step(&mut self) {
        let transition = self.next_generation();
        self.apply(&transition);
    }
}
