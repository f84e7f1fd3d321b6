//! Unbounded sparse grid that remembers the bounding box of written cells.
use std::collections::HashMap;

/// Inclusive bounding box of every cell ever written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i64,
    pub min_y: i64,
    pub max_x: i64,
    pub max_y: i64,
}

impl Bounds {
    fn point(x: i64, y: i64) -> Self {
        Bounds {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }

    fn include(&mut self, x: i64, y: i64) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        (self.min_x..=self.max_x).contains(&x) && (self.min_y..=self.max_y).contains(&y)
    }
}

#[derive(Debug, Clone)]
pub struct InfiniteGrid<T> {
    cells: HashMap<(i64, i64), T>,
    default: T,
    bounds: Option<Bounds>,
}

impl<T> InfiniteGrid<T> {
    /// An empty grid where every unwritten cell reads as `default`.
    pub fn new(default: T) -> Self {
        InfiniteGrid {
            cells: HashMap::new(),
            default,
            bounds: None,
        }
    }

    pub fn get(&self, x: i64, y: i64) -> &T {
        self.cells.get(&(x, y)).unwrap_or(&self.default)
    }

    /// Writes a cell and widens the bounding box to include it.
    pub fn set(&mut self, x: i64, y: i64, value: T) -> &mut Self {
        match &mut self.bounds {
            Some(bounds) => bounds.include(x, y),
            None => self.bounds = Some(Bounds::point(x, y)),
        }
        self.cells.insert((x, y), value);
        self
    }

    /// Whether (`x`, `y`) lies inside the bounding box of written cells.
    pub fn on_grid(&self, x: i64, y: i64) -> bool {
        self.bounds.is_some_and(|bounds| bounds.contains(x, y))
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    /// Number of written cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Renders the bounding box widened by `border` on every side, one line
    /// per row, each row terminated by a newline.
    pub fn render<F>(&self, border: i64, mut cell: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        let Some(bounds) = self.bounds else {
            return String::new();
        };
        let mut out = String::new();
        for y in bounds.min_y - border..=bounds.max_y + border {
            for x in bounds.min_x - border..=bounds.max_x + border {
                out.push_str(&cell(self.get(x, y)));
            }
            out.push('\n');
        }
        out
    }
}
