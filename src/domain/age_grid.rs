/// AgeGrid tracks, per cell, the number of consecutive generations the cell
/// has been alive, counting the current one. Dead cells have age 0, so the
/// grid and age grid stay in lockstep: age > 0 iff the cell is alive.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct AgeGrid {
    width: usize,
    height: usize,
    ages: Vec<u32>,
}

impl AgeGrid {
    /// Create a new age grid with every cell at age zero
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ages: vec![0; width * height],
        }
    }

    /// Build an age grid from a pre-computed row-major buffer
    /// (used when swapping in the next generation)
    pub fn from_ages(width: usize, height: usize, ages: Vec<u32>) -> Self {
        debug_assert_eq!(ages.len(), width * height);
        Self {
            width,
            height,
            ages,
        }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Age at position; out-of-bounds reads as 0, matching the dead boundary
    pub fn get(&self, x: usize, y: usize) -> u32 {
        if x < self.width && y < self.height {
            self.ages[y * self.width + x]
        } else {
            0
        }
    }

    /// Set age at position. Out-of-bounds coordinates are silently ignored.
    pub fn set(&mut self, x: usize, y: usize, age: u32) {
        if x < self.width && y < self.height {
            self.ages[y * self.width + x] = age;
        }
    }

    /// Reset every cell to age zero
    pub fn clear(&mut self) {
        self.ages.fill(0);
    }

    /// Iterate over all cells with their positions
    pub fn iter_ages(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.get(x, y)))
    }
}
