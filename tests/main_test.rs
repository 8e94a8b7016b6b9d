use lifeboard::{Cell, EvolutionScheduler, GridError, GridState};
use std::time::Duration;

const ROWS: usize = 5;
const COLS: usize = 5;

fn from_cells(rows: usize, cols: usize, cells: &[Cell]) -> GridState {
    let mut grid = GridState::new(rows, cols);
    for &cell in cells {
        grid.activate(cell).unwrap();
    }
    grid
}

fn alive_sorted(grid: &GridState) -> Vec<Cell> {
    let mut cells = grid.alive_cells().collect::<Vec<_>>();
    cells.sort_unstable();
    cells
}

#[test]
fn test_neighbor_count_bounds() {
    let mut grid = GridState::new(ROWS, COLS);
    grid.randomize(Some(42), 0.5);

    for row in 0..ROWS as i64 {
        for col in 0..COLS as i64 {
            let count = grid.neighbor_count((row, col)).unwrap();
            let on_row_edge = row == 0 || row == ROWS as i64 - 1;
            let on_col_edge = col == 0 || col == COLS as i64 - 1;
            let limit = match (on_row_edge, on_col_edge) {
                (true, true) => 3,
                (true, false) | (false, true) => 5,
                (false, false) => 8,
            };
            assert!(count <= limit, "({}, {}): {} > {}", row, col, count, limit);
        }
    }
}

#[test]
fn test_blinker_oscillates() {
    let horizontal = vec![(1, 1), (1, 2), (1, 3)];
    let vertical = vec![(0, 2), (1, 2), (2, 2)];
    let mut grid = from_cells(ROWS, COLS, &horizontal);

    for step in 0..4 {
        grid.step();
        let expected = if step % 2 == 0 { &vertical } else { &horizontal };
        assert_eq!(alive_sorted(&grid), *expected, "step {}", step + 1);
    }
}

#[test]
fn test_block_is_still_life() {
    let block = vec![(1, 1), (1, 2), (2, 1), (2, 2)];
    let mut grid = from_cells(ROWS, COLS, &block);

    for _ in 0..16 {
        grid.step();
        assert_eq!(alive_sorted(&grid), block);
    }
}

#[test]
fn test_underpopulation_kills_lone_cell() {
    let mut grid = from_cells(ROWS, COLS, &[(2, 2)]);
    grid.step();
    assert_eq!(grid.population(), 0);
}

#[test]
fn test_overpopulation_kills_crowded_cell() {
    // center of a plus has 4 neighbors
    let mut grid = from_cells(ROWS, COLS, &[(2, 2), (1, 2), (3, 2), (2, 1), (2, 3)]);
    grid.step();
    assert!(!grid.is_alive((2, 2)).unwrap());
}

#[test]
fn test_activation_is_idempotent() {
    let mut once = GridState::new(ROWS, COLS);
    once.activate((3, 3)).unwrap();
    let mut twice = GridState::new(ROWS, COLS);
    twice.activate((3, 3)).unwrap();
    twice.activate((3, 3)).unwrap();

    assert_eq!(alive_sorted(&once), alive_sorted(&twice));
    assert_eq!(twice.population(), 1);
}

#[test]
fn test_out_of_bounds_rejected() {
    let mut grid = from_cells(ROWS, COLS, &[(1, 1)]);
    let before = alive_sorted(&grid);

    for cell in [(-1, 0), (ROWS as i64, 0), (0, -1), (0, COLS as i64)] {
        let err = grid.activate(cell).unwrap_err();
        assert!(matches!(err, GridError::OutOfBounds { .. }), "{:?}", cell);
        assert!(grid.deactivate(cell).is_err());
        assert!(grid.is_alive(cell).is_err());
        assert!(grid.neighbor_count(cell).is_err());
    }
    assert_eq!(alive_sorted(&grid), before);
}

#[test]
fn test_pause_freezes_evolution() {
    let mut grid = GridState::new(16, 16);
    grid.randomize(Some(42), 0.4);
    let mut scheduler = EvolutionScheduler::new(grid);

    scheduler.resume();
    scheduler.tick();
    scheduler.stop();
    let frozen = alive_sorted(scheduler.grid());
    let generation = scheduler.generation();

    // fired timers after stop() are no-ops, however many arrive
    for _ in 0..100 {
        assert_eq!(scheduler.tick(), None);
    }
    assert_eq!(alive_sorted(scheduler.grid()), frozen);
    assert_eq!(scheduler.generation(), generation);

    // resume evolves from the state as it stood at stop() time
    let mut expected = from_cells(16, 16, &frozen);
    expected.step();
    scheduler.resume();
    assert_eq!(alive_sorted(scheduler.grid()), alive_sorted(&expected));
}

#[test]
fn test_manual_edits_between_ticks() {
    let mut scheduler = EvolutionScheduler::new(GridState::new(ROWS, COLS));
    scheduler.resume();

    // build a blinker by hand while running; the next tick must see it
    for cell in [(1, 1), (1, 2), (1, 3)] {
        scheduler.grid_mut().activate(cell).unwrap();
    }
    scheduler.tick();
    assert_eq!(
        alive_sorted(scheduler.grid()),
        vec![(0, 2), (1, 2), (2, 2)]
    );

    // manual edits keep working while stopped
    scheduler.stop();
    scheduler.grid_mut().deactivate((1, 2)).unwrap();
    assert!(!scheduler.grid().is_alive((1, 2)).unwrap());
}

#[test]
fn test_speed_changes_next_delay_only() {
    let mut scheduler = EvolutionScheduler::new(GridState::new(ROWS, COLS));
    let slow = scheduler.resume();
    assert_eq!(slow, Duration::from_millis(1000 - 20 * 9));

    scheduler.set_speed(100);
    let fast = scheduler.tick().unwrap();
    assert_eq!(fast, Duration::from_millis(100));
    assert!(fast < slow);
}
