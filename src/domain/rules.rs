use super::Cell;

/// Trait for life-like cellular automaton rules.
/// A rule is a pure function from (current state, live neighbor count) to the
/// next state; the engine derives births, deaths, and ages by comparing the
/// two states, so any rule gets correct bookkeeping for free.
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Compute the next cell state from the prior-generation snapshot
    fn next_state(&self, current: Cell, neighbors: u8) -> Cell;
}

/// Conway's Game of Life (B3/S23), the default rule
#[derive(Clone, Copy)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn name(&self) -> &'static str {
        "Conway"
    }

    fn next_state(&self, current: Cell, neighbors: u8) -> Cell {
        match (current, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// HighLife (B36/S23): Conway plus birth on 6 neighbors, which produces
/// self-copying replicators
#[derive(Clone, Copy)]
pub struct HighLifeRule;

impl Rule for HighLifeRule {
    fn name(&self) -> &'static str {
        "HighLife"
    }

    fn next_state(&self, current: Cell, neighbors: u8) -> Cell {
        match (current, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3 | 6) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// Seeds (B2/S): no cell survives, births on exactly 2 neighbors
#[derive(Clone, Copy)]
pub struct SeedsRule;

impl Rule for SeedsRule {
    fn name(&self) -> &'static str {
        "Seeds"
    }

    fn next_state(&self, current: Cell, neighbors: u8) -> Cell {
        match (current, neighbors) {
            (Cell::Dead, 2) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// Day & Night (B3678/S34678): symmetric under inverting the whole grid
#[derive(Clone, Copy)]
pub struct DayAndNightRule;

impl Rule for DayAndNightRule {
    fn name(&self) -> &'static str {
        "Day&Night"
    }

    fn next_state(&self, current: Cell, neighbors: u8) -> Cell {
        match (current, neighbors) {
            (Cell::Alive, 3 | 4 | 6 | 7 | 8) => Cell::Alive,
            (Cell::Dead, 3 | 6 | 7 | 8) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// All available rules
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ConwayRule),
        Box::new(HighLifeRule),
        Box::new(SeedsRule),
        Box::new(DayAndNightRule),
    ]
}

/// The default rule (Conway's Life)
pub fn default_rule() -> Box<dyn Rule> {
    Box::new(ConwayRule)
}
