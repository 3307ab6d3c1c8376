use super::Cell;

/// Grid manages the 2D cell lattice, stored row-major in a flat vec.
/// The boundary is clamped rather than toroidal: coordinates outside the
/// rectangle are permanently dead, so edge cells see fewer live neighbors.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Build a grid from a pre-computed row-major cell buffer
    /// (used when swapping in the next generation)
    pub fn from_cells(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height).then(|| self.cells[self.get_index(x, y)])
    }

    /// Set cell at position. Out-of-bounds coordinates are silently ignored
    /// so pattern placement may hang off the edges without failing.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Count live Moore neighbors. Neighbors beyond the boundary count as dead.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        (-1isize..=1)
            .flat_map(|dy| (-1isize..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(|(dx, dy)| {
                let nx = x.checked_add_signed(dx)?;
                let ny = y.checked_add_signed(dy)?;
                self.get(nx, ny)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Count of live cells in the whole grid
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Reset every cell to dead without changing dimensions
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .map(|(x, y)| (x, y, self.get(x, y).unwrap()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_out_of_bounds_is_none() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert_eq!(grid.get(3, 2), Some(Cell::Dead));
    }

    #[test]
    fn test_set_out_of_bounds_is_noop() {
        let mut grid = Grid::new(4, 3);
        grid.set(100, 100, Cell::Alive);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_corner_neighbors_are_clamped() {
        let mut grid = Grid::new(3, 3);
        // Ring around (0,0): only three of the eight offsets are in bounds.
        grid.set(1, 0, Cell::Alive);
        grid.set(0, 1, Cell::Alive);
        grid.set(1, 1, Cell::Alive);
        assert_eq!(grid.count_live_neighbors(0, 0), 3);
        // No wraparound: the far corner sees nothing.
        assert_eq!(grid.count_live_neighbors(2, 2), 1);
    }

    #[test]
    fn test_center_cell_sees_all_eight() {
        let mut grid = Grid::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                grid.set(x, y, Cell::Alive);
            }
        }
        assert_eq!(grid.count_live_neighbors(1, 1), 8);
    }

    #[test]
    fn test_population_counts_alive_only() {
        let mut grid = Grid::new(5, 5);
        grid.set(0, 0, Cell::Alive);
        grid.set(4, 4, Cell::Alive);
        assert_eq!(grid.population(), 2);
        grid.clear();
        assert_eq!(grid.population(), 0);
    }
}
