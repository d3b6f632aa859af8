//! The simulation state machine.
//!
//! [`SimulationEngine`] is the primary user-facing API. All mutating
//! methods take `&mut self` and run to completion before returning, and
//! [`state()`](SimulationEngine::state) returns a view that borrows from
//! the engine, so a caller cannot tick while holding one; the borrow
//! checker serializes access.

use std::time::Instant;

use golem_core::{CellReader, Coord, CycleCount, EngineError};
use golem_grid::Grid;

use crate::config::{ConfigError, EngineConfig};
use crate::history::CycleDetector;
use crate::metrics::StepMetrics;
use crate::pattern::Pattern;

// Compile-time assertion: SimulationEngine is Send so a Runner can move it
// onto its own thread.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<SimulationEngine>();
    }
};

// ── TickReport ──────────────────────────────────────────────────

/// Result of a successful [`SimulationEngine::tick()`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickReport {
    /// Cycle counter after this tick.
    pub cycle: CycleCount,
    /// Live cells after this tick.
    pub alive: usize,
    /// `Some(p)` if the new generation repeats the one `p` ticks earlier.
    pub period: Option<u64>,
    /// Timing and population change for this tick.
    pub metrics: StepMetrics,
}

// ── EngineState / Observation ───────────────────────────────────

/// Read-only view of the engine, borrowed from it.
#[derive(Clone, Copy, Debug)]
pub struct EngineState<'e> {
    /// The current grid, or `None` before initialization.
    pub grid: Option<&'e Grid>,
    /// Whether `initialize` has succeeded since construction or reset.
    pub is_initialized: bool,
    /// Whether an external auto-tick loop has declared itself active.
    pub is_running: bool,
    /// Display name of the seeding pattern, empty when uninitialized.
    pub pattern: &'e str,
    /// Live cells in the current grid.
    pub total_alive_cells: usize,
    /// Ticks since initialization.
    pub total_cycles: CycleCount,
}

impl EngineState<'_> {
    /// Copy the view into an owned [`Observation`].
    pub fn to_observation(&self) -> Observation {
        Observation {
            grid: self.grid.cloned(),
            is_initialized: self.is_initialized,
            is_running: self.is_running,
            pattern: self.pattern.to_string(),
            total_alive_cells: self.total_alive_cells,
            total_cycles: self.total_cycles,
        }
    }
}

/// Owned copy of an [`EngineState`], safe to send across threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Observation {
    /// Copy of the grid, or `None` before initialization.
    pub grid: Option<Grid>,
    /// Whether the engine was initialized.
    pub is_initialized: bool,
    /// Whether the auto-tick loop was active.
    pub is_running: bool,
    /// Display name of the seeding pattern, empty when uninitialized.
    pub pattern: String,
    /// Live cells in the grid.
    pub total_alive_cells: usize,
    /// Ticks since initialization.
    pub total_cycles: CycleCount,
}

// ── Board ───────────────────────────────────────────────────────

/// Everything that exists only between `initialize` and `reset`.
#[derive(Clone, Debug)]
struct Board {
    grid: Grid,
    pattern: String,
    running: bool,
    alive: usize,
    cycles: CycleCount,
    history: CycleDetector,
}

// ── SimulationEngine ────────────────────────────────────────────

/// Game of Life engine owning one grid and its counters.
///
/// Created uninitialized; [`initialize()`](Self::initialize) builds and
/// seeds a grid, [`tick()`](Self::tick) advances it, and
/// [`reset()`](Self::reset) discards it. Independent engines share no state.
///
/// # Example
///
/// ```
/// use golem_engine::SimulationEngine;
///
/// let mut engine = SimulationEngine::new();
/// engine.initialize(10, "Beacon").unwrap();
/// assert_eq!(engine.total_alive_cells(), 8);
/// let report = engine.tick().unwrap();
/// assert_eq!(report.alive, 6);
/// engine.reset();
/// assert!(!engine.is_initialized());
/// ```
#[derive(Clone, Debug)]
pub struct SimulationEngine {
    config: EngineConfig,
    board: Option<Board>,
    last_metrics: StepMetrics,
}

impl SimulationEngine {
    /// Create an uninitialized engine with the default configuration.
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            board: None,
            last_metrics: StepMetrics::default(),
        }
    }

    /// Create an uninitialized engine after validating `config`.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            board: None,
            last_metrics: StepMetrics::default(),
        })
    }

    /// Build a `size × size` grid seeded from the pattern named `pattern`.
    ///
    /// Names resolve through the configured
    /// [`PatternCatalog`](crate::PatternCatalog). Replaces any existing
    /// grid. On error nothing changes.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidSize`] if `size < 1` or too large,
    /// [`EngineError::UnknownPattern`] if the catalog has no such name.
    pub fn initialize(&mut self, size: i64, pattern: &str) -> Result<(), EngineError> {
        let grid = Self::build_grid(size)?;
        let board = self.prepare(grid, pattern)?;
        self.install(board);
        Ok(())
    }

    /// Typed form of [`initialize()`](Self::initialize).
    pub fn initialize_with(&mut self, size: i64, pattern: Pattern) -> Result<(), EngineError> {
        self.initialize(size, pattern.name())
    }

    fn build_grid(size: i64) -> Result<Grid, EngineError> {
        let side = usize::try_from(size).map_err(|_| EngineError::InvalidSize { size })?;
        Grid::new(side).map_err(|_| EngineError::InvalidSize { size })
    }

    fn prepare(&self, mut grid: Grid, pattern: &str) -> Result<Board, EngineError> {
        let seeding = self.config.catalog.get(pattern)?;
        seeding.seed(&mut grid, &self.config);
        let alive = grid.count_alive();
        let mut history = CycleDetector::new(self.config.history_depth);
        history.restart(&grid);
        Ok(Board {
            grid,
            pattern: pattern.to_string(),
            running: false,
            alive,
            cycles: CycleCount(0),
            history,
        })
    }

    fn install(&mut self, board: Board) {
        log::debug!(
            "initialized {0}x{0} grid with pattern '{1}' ({2} alive)",
            board.grid.size(),
            board.pattern,
            board.alive
        );
        self.board = Some(board);
        self.last_metrics = StepMetrics::default();
    }

    fn board_mut(&mut self) -> Result<&mut Board, EngineError> {
        self.board.as_mut().ok_or(EngineError::NotInitialized)
    }

    /// Flip the cell at `(row, col)` and return its new state.
    ///
    /// Allowed in any seeding mode. Restarts period detection, since the
    /// board no longer follows from its history.
    ///
    /// # Errors
    ///
    /// [`EngineError::NotInitialized`] before `initialize`,
    /// [`EngineError::OutOfBounds`] for a coordinate outside the grid.
    pub fn toggle_cell(&mut self, row: i32, col: i32) -> Result<bool, EngineError> {
        let board = self.board_mut()?;
        let alive = board.grid.toggle(Coord::new(row, col))?;
        board.alive = board.grid.count_alive();
        board.history.restart(&board.grid);
        Ok(alive)
    }

    /// Advance one generation.
    ///
    /// Every cell's next state is computed from the current generation
    /// alone and written into a new grid, which then replaces the current
    /// one. Neighbours outside the grid are not counted.
    ///
    /// # Errors
    ///
    /// [`EngineError::NotInitialized`] before `initialize`.
    pub fn tick(&mut self) -> Result<TickReport, EngineError> {
        let rule = self.config.rule;
        let board = self.board.as_mut().ok_or(EngineError::NotInitialized)?;
        let start = Instant::now();

        let mut births = 0;
        let mut deaths = 0;
        let next = board.grid.step_with(|alive, live_neighbours| {
            let next = rule.next_state(alive, live_neighbours);
            match (alive, next) {
                (false, true) => births += 1,
                (true, false) => deaths += 1,
                _ => {}
            }
            next
        });

        board.grid = next;
        board.cycles = board.cycles.next();
        board.alive = board.grid.count_alive();
        let period = board.history.observe(&board.grid);

        let metrics = StepMetrics {
            total_us: start.elapsed().as_micros() as u64,
            births,
            deaths,
        };
        log::trace!(
            "cycle {} alive {} (+{} -{})",
            board.cycles,
            board.alive,
            births,
            deaths
        );
        let report = TickReport {
            cycle: board.cycles,
            alive: board.alive,
            period,
            metrics: metrics.clone(),
        };
        self.last_metrics = metrics;
        Ok(report)
    }

    /// Tick `n` times, returning the report of the last tick (`None` if
    /// `n == 0`).
    pub fn run_for(&mut self, n: u64) -> Result<Option<TickReport>, EngineError> {
        if self.board.is_none() {
            return Err(EngineError::NotInitialized);
        }
        let mut last = None;
        for _ in 0..n {
            last = Some(self.tick()?);
        }
        Ok(last)
    }

    /// Discard the grid and return to the uninitialized defaults.
    ///
    /// Always succeeds, including on an engine that was never initialized.
    pub fn reset(&mut self) {
        if self.board.take().is_some() {
            log::debug!("simulation reset");
        }
        self.last_metrics = StepMetrics::default();
    }

    /// Record whether an external auto-tick loop is active.
    ///
    /// The engine does not gate [`tick()`](Self::tick) on this flag.
    pub fn set_running(&mut self, running: bool) -> Result<(), EngineError> {
        let board = self.board_mut()?;
        if board.running != running {
            log::debug!("running = {running}");
        }
        board.running = running;
        Ok(())
    }

    /// Read-only view of the whole state.
    pub fn state(&self) -> EngineState<'_> {
        EngineState {
            grid: self.grid(),
            is_initialized: self.is_initialized(),
            is_running: self.is_running(),
            pattern: self.pattern(),
            total_alive_cells: self.total_alive_cells(),
            total_cycles: self.total_cycles(),
        }
    }

    /// The current grid, or `None` before initialization.
    pub fn grid(&self) -> Option<&Grid> {
        self.board.as_ref().map(|b| &b.grid)
    }

    /// Whether `initialize` has succeeded since construction or reset.
    pub fn is_initialized(&self) -> bool {
        self.board.is_some()
    }

    /// Whether the running flag is set.
    pub fn is_running(&self) -> bool {
        self.board.as_ref().is_some_and(|b| b.running)
    }

    /// Display name of the seeding pattern, or `""` when uninitialized.
    pub fn pattern(&self) -> &str {
        self.board.as_ref().map_or("", |b| b.pattern.as_str())
    }

    /// Live cells in the current grid (0 when uninitialized).
    pub fn total_alive_cells(&self) -> usize {
        self.board.as_ref().map_or(0, |b| b.alive)
    }

    /// Ticks since initialization (0 when uninitialized).
    pub fn total_cycles(&self) -> CycleCount {
        self.board.as_ref().map_or(CycleCount(0), |b| b.cycles)
    }

    /// Metrics from the most recent tick.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CellReader for SimulationEngine {
    fn side(&self) -> usize {
        self.grid().map_or(0, Grid::size)
    }

    fn is_alive(&self, coord: Coord) -> Option<bool> {
        self.grid()?.get(coord).ok()
    }

    fn alive_count(&self) -> usize {
        self.total_alive_cells()
    }
}
