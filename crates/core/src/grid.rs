//! Occupancy grid - the world the rays travel through
//!
//! The renderer only needs one question answered: is cell `(x, y)` a wall?
//! [`OccupancyGrid`] is that seam. [`Grid`] is a flat row-major store that
//! implements it, used by the demo binary, benches and tests.
//! Coordinates: `x` grows to the right (columns), `y` grows downward (rows).

/// Read-only wall lookup used by the ray caster.
pub trait OccupancyGrid {
    /// Whether the cell at `(x, y)` is a wall.
    ///
    /// Must return `false` for any out-of-bounds coordinate and never panic;
    /// the ray caster relies on this at the map edges.
    fn is_occupied(&self, x: i32, y: i32) -> bool;
}

impl<T: OccupancyGrid + ?Sized> OccupancyGrid for &T {
    fn is_occupied(&self, x: i32, y: i32) -> bool {
        (**self).is_occupied(x, y)
    }
}

/// Byte used for an empty cell.
pub const EMPTY: u8 = 0;
/// Byte used for a wall cell.
pub const WALL: u8 = 1;

/// Rectangular occupancy grid backed by a flat array (y * width + x).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    cells: Vec<u8>,
}

impl Grid {
    /// Create an empty grid.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width as usize * height as usize],
        }
    }

    /// Create a grid whose outer ring is walls and interior is empty.
    pub fn bordered(width: u16, height: u16) -> Self {
        let mut grid = Self::new(width, height);
        for x in 0..width as i32 {
            grid.set(x, 0, WALL);
            grid.set(x, height as i32 - 1, WALL);
        }
        for y in 0..height as i32 {
            grid.set(0, y, WALL);
            grid.set(width as i32 - 1, y, WALL);
        }
        grid
    }

    /// Build a grid from ASCII art. `#` is a wall, anything else is empty.
    ///
    /// Short rows are padded with empty cells up to the longest row.
    ///
    /// ```
    /// use rayterm_core::{Grid, OccupancyGrid};
    ///
    /// let grid = Grid::parse("###\n# #\n###");
    /// assert_eq!((grid.width(), grid.height()), (3, 3));
    /// assert!(grid.is_occupied(0, 0));
    /// assert!(!grid.is_occupied(1, 1));
    /// ```
    pub fn parse(map: &str) -> Self {
        let rows: Vec<&str> = map.lines().collect();
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);
        let mut grid = Self::new(width as u16, rows.len() as u16);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == '#' {
                    grid.set(x as i32, y as i32, WALL);
                }
            }
        }
        grid
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Raw cell value, `None` if out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<u8> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Set a cell. Returns false if out of bounds.
    pub fn set(&mut self, x: i32, y: i32, value: u8) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}

impl OccupancyGrid for Grid {
    fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(v) if v != EMPTY)
    }
}
