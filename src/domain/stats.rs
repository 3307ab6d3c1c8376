/// Statistics tracks the bookkeeping that rides along with every generation
/// step: a monotonic generation counter, birth/death counts for the most
/// recent step only (not cumulative), the highest cell age ever observed, and
/// an append-only population history with one entry per generation, starting
/// with generation 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Statistics {
    generation: u64,
    births: u32,
    deaths: u32,
    max_age: u32,
    population_history: Vec<usize>,
}

impl Statistics {
    /// Fresh statistics for an empty grid: generation 0, history `[0]`
    pub fn new() -> Self {
        Self {
            generation: 0,
            births: 0,
            deaths: 0,
            max_age: 0,
            population_history: vec![0],
        }
    }

    /// Steps elapsed since construction or the last reset
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Cells born in the most recent step
    pub const fn births(&self) -> u32 {
        self.births
    }

    /// Cells that died in the most recent step
    pub const fn deaths(&self) -> u32 {
        self.deaths
    }

    /// Highest age any cell has reached in the current run
    pub const fn max_age(&self) -> u32 {
        self.max_age
    }

    /// Population counts per generation, oldest first.
    /// Always holds exactly `generation + 1` entries.
    pub fn population_history(&self) -> &[usize] {
        &self.population_history
    }

    /// Fold one completed generation step into the record.
    /// `max_age` only ever ratchets upward.
    pub(crate) fn record_step(&mut self, births: u32, deaths: u32, max_age: u32, population: usize) {
        self.generation += 1;
        self.births = births;
        self.deaths = deaths;
        self.max_age = self.max_age.max(max_age);
        self.population_history.push(population);
    }

    /// Start a fresh run whose initial grid holds `population` live cells
    pub(crate) fn reset(&mut self, population: usize) {
        self.generation = 0;
        self.births = 0;
        self.deaths = 0;
        self.max_age = 0;
        self.population_history.clear();
        self.population_history.push(population);
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}
