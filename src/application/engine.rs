use crate::domain::{AgeGrid, Cell, EngineError, Grid, Pattern, Rule, Statistics, default_rule};
use rand::Rng;
use rayon::prelude::*;

/// Per-row output of one generation step, reduced in row order after the
/// parallel map so totals never depend on worker scheduling.
struct RowStep {
    cells: Vec<Cell>,
    ages: Vec<u32>,
    births: u32,
    deaths: u32,
    max_age: u32,
    population: usize,
}

/// GenerationEngine owns the whole simulation state: the cell grid, the
/// parallel age grid, and the per-run statistics. It is a plain synchronous
/// data object with two kinds of mutation - single-cell edits between ticks
/// and the whole-grid `advance` transition. Rendering and animation loops are
/// external collaborators that read the snapshots it exposes.
pub struct GenerationEngine {
    grid: Grid,
    ages: AgeGrid,
    stats: Statistics,
    rule: Box<dyn Rule>,
}

impl GenerationEngine {
    /// Create an engine with an all-dead grid under Conway's rule
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimension { width, height });
        }
        Ok(Self {
            grid: Grid::new(width, height),
            ages: AgeGrid::new(width, height),
            stats: Statistics::new(),
            rule: default_rule(),
        })
    }

    /// Grid width in cells
    pub fn width(&self) -> usize {
        self.grid.dimensions().0
    }

    /// Grid height in cells
    pub fn height(&self) -> usize {
        self.grid.dimensions().1
    }

    /// Read-only view of the current cell states
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Read-only view of the current cell ages
    pub fn ages(&self) -> &AgeGrid {
        &self.ages
    }

    /// Read-only view of the run statistics
    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// Generations elapsed since construction or the last reset
    pub fn generation(&self) -> u64 {
        self.stats.generation()
    }

    /// Cells born in the most recent `advance`
    pub fn births(&self) -> u32 {
        self.stats.births()
    }

    /// Cells that died in the most recent `advance`
    pub fn deaths(&self) -> u32 {
        self.stats.deaths()
    }

    /// Highest age any cell has reached in the current run
    pub fn max_age(&self) -> u32 {
        self.stats.max_age()
    }

    /// Population per generation since the last reset
    pub fn population_history(&self) -> &[usize] {
        self.stats.population_history()
    }

    /// Live cells in the grid right now, including edits made since the
    /// last `advance`
    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Swap in a different ruleset for subsequent `advance` calls
    pub fn set_rule(&mut self, rule: Box<dyn Rule>) {
        self.rule = rule;
    }

    /// Name of the active ruleset
    pub fn rule_name(&self) -> &'static str {
        self.rule.name()
    }

    /// Set one cell. Out of bounds is a no-op so callers may paint near the
    /// edges freely. A freshly set live cell starts at age 1 regardless of
    /// any age it held before; a cleared cell drops to age 0.
    pub fn set_cell(&mut self, x: usize, y: usize, alive: bool) {
        self.grid.set(x, y, Cell::from_alive(alive));
        self.ages.set(x, y, if alive { 1 } else { 0 });
    }

    /// Flip one cell, the interactive-edit primitive. Out of bounds is a no-op.
    pub fn toggle_cell(&mut self, x: usize, y: usize) {
        if let Some(cell) = self.grid.get(x, y) {
            self.set_cell(x, y, cell.toggled().is_alive());
        }
    }

    /// Stamp a pattern with its anchor at `(x, y)`, silently skipping any
    /// offsets that land outside the grid
    pub fn place_pattern(&mut self, pattern: &Pattern, x: usize, y: usize) {
        for &(dx, dy) in pattern.offsets() {
            let (Some(cx), Some(cy)) = (x.checked_add(dx), y.checked_add(dy)) else {
                continue;
            };
            self.set_cell(cx, cy, true);
        }
    }

    /// Advance the simulation by one generation.
    ///
    /// Every next-state decision reads only the prior generation: rows are
    /// computed in parallel into fresh buffers (no worker ever observes a
    /// cell written this step), then grid and ages are swapped in together
    /// and the statistics updated, so callers always see a complete
    /// generation.
    pub fn advance(&mut self) {
        let (width, height) = self.grid.dimensions();
        let rows: Vec<RowStep> = (0..height)
            .into_par_iter()
            .map(|y| self.step_row(y, width))
            .collect();

        let mut cells = Vec::with_capacity(width * height);
        let mut ages = Vec::with_capacity(width * height);
        let mut births = 0;
        let mut deaths = 0;
        let mut max_age = 0;
        let mut population = 0;
        for row in rows {
            cells.extend(row.cells);
            ages.extend(row.ages);
            births += row.births;
            deaths += row.deaths;
            max_age = row.max_age.max(max_age);
            population += row.population;
        }

        self.grid = Grid::from_cells(width, height, cells);
        self.ages = AgeGrid::from_ages(width, height, ages);
        self.stats.record_step(births, deaths, max_age, population);
    }

    /// Compute one output row from the prior-generation snapshot
    fn step_row(&self, y: usize, width: usize) -> RowStep {
        let mut row = RowStep {
            cells: Vec::with_capacity(width),
            ages: Vec::with_capacity(width),
            births: 0,
            deaths: 0,
            max_age: 0,
            population: 0,
        };
        for x in 0..width {
            let current = self.grid.get(x, y).unwrap();
            let neighbors = self.grid.count_live_neighbors(x, y);
            let next = self.rule.next_state(current, neighbors);
            let age = match (current, next) {
                // Survivor: one generation older
                (Cell::Alive, Cell::Alive) => self.ages.get(x, y) + 1,
                // Birth: aging starts at 1
                (Cell::Dead, Cell::Alive) => {
                    row.births += 1;
                    1
                }
                (Cell::Alive, Cell::Dead) => {
                    row.deaths += 1;
                    0
                }
                (Cell::Dead, Cell::Dead) => 0,
            };
            if next.is_alive() {
                row.population += 1;
                row.max_age = row.max_age.max(age);
            }
            row.cells.push(next);
            row.ages.push(age);
        }
        row
    }

    /// Kill every cell and reset all statistics. Dimensions are unchanged.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.ages.clear();
        self.stats.reset(0);
    }

    /// Reseed the grid, each cell independently alive with probability
    /// `density`, using the thread RNG. Starts a fresh run: generation 0 and
    /// a one-entry population history.
    pub fn seed_random(&mut self, density: f64) -> Result<(), EngineError> {
        self.seed_random_with(&mut rand::rng(), density)
    }

    /// `seed_random` driven by a caller-supplied RNG, for reproducible runs
    pub fn seed_random_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        density: f64,
    ) -> Result<(), EngineError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(EngineError::InvalidParameter {
                name: "density",
                value: density,
                min: 0.0,
                max: 1.0,
            });
        }
        let (width, height) = self.grid.dimensions();
        let mut population = 0;
        for y in 0..height {
            for x in 0..width {
                let alive = rng.random_bool(density);
                if alive {
                    population += 1;
                }
                self.grid.set(x, y, Cell::from_alive(alive));
                self.ages.set(x, y, if alive { 1 } else { 0 });
            }
        }
        self.stats.reset(population);
        Ok(())
    }
}
