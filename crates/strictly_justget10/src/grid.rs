//! Square grid of tile tiers.

use super::coord::Coord;
use super::error::EngineError;
use super::types::{EMPTY, Tier};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// NxN matrix of tile tiers.
///
/// Cells hold `0` (empty) or a tier in `1..=max_tier`. The dimension is
/// fixed at construction; a new game builds a new grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    size: usize,
    max_tier: Tier,
    /// Cells in row-major order.
    cells: Vec<Tier>,
}

/// Unchecked wire form of a [`Grid`].
#[derive(Deserialize)]
struct RawGrid {
    size: usize,
    max_tier: Tier,
    cells: Vec<Tier>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = EngineError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        let mut grid = Grid::new(raw.size, raw.max_tier)?;
        if raw.cells.len() != grid.cells.len() {
            return Err(EngineError::InvalidConfiguration(format!(
                "{} cells for a {}x{} grid",
                raw.cells.len(),
                raw.size,
                raw.size
            )));
        }
        let coords: Vec<Coord> = grid.coords().collect();
        for (at, tier) in coords.into_iter().zip(raw.cells) {
            grid.put(at, tier)?;
        }
        Ok(grid)
    }
}

impl Grid {
    /// Creates an empty grid.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] if `size` is zero or
    /// `max_tier` is zero.
    #[instrument]
    pub fn new(size: usize, max_tier: Tier) -> Result<Self, EngineError> {
        if size == 0 {
            return Err(EngineError::InvalidConfiguration(
                "grid size must be positive".to_string(),
            ));
        }
        if max_tier == EMPTY {
            return Err(EngineError::InvalidConfiguration(
                "winning tier must be positive".to_string(),
            ));
        }
        Ok(Self {
            size,
            max_tier,
            cells: vec![EMPTY; size * size],
        })
    }

    /// Builds a grid from explicit rows (top row first).
    ///
    /// # Errors
    ///
    /// Fails with [`EngineError::InvalidConfiguration`] if the rows are not
    /// square and with [`EngineError::InvalidTier`] if any value exceeds `max_tier`.
    #[instrument(skip(rows))]
    pub fn from_rows<R: AsRef<[Tier]>>(rows: &[R], max_tier: Tier) -> Result<Self, EngineError> {
        let mut grid = Self::new(rows.len(), max_tier)?;
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != grid.size {
                return Err(EngineError::InvalidConfiguration(format!(
                    "row {} has {} cells, expected {}",
                    row,
                    values.len(),
                    grid.size
                )));
            }
            for (col, &tier) in values.iter().enumerate() {
                grid.set(row, col, tier)?;
            }
        }
        Ok(grid)
    }

    /// Grid dimension N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Highest tier a cell may hold (the winning tier).
    pub fn max_tier(&self) -> Tier {
        self.max_tier
    }

    /// Checks that a coordinate lies inside the grid.
    pub fn check(&self, at: Coord) -> Result<(), EngineError> {
        if at.row < self.size && at.col < self.size {
            Ok(())
        } else {
            Err(EngineError::OutOfBounds {
                coord: at,
                size: self.size,
            })
        }
    }

    /// Reads the tier at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<Tier, EngineError> {
        self.at(Coord::new(row, col))
    }

    /// Writes a tier at `(row, col)`.
    ///
    /// # Errors
    ///
    /// [`EngineError::OutOfBounds`] for bad coordinates,
    /// [`EngineError::InvalidTier`] for tiers above the winning tier.
    pub fn set(&mut self, row: usize, col: usize, tier: Tier) -> Result<(), EngineError> {
        self.put(Coord::new(row, col), tier)
    }

    /// Reads the tier at a coordinate.
    pub fn at(&self, at: Coord) -> Result<Tier, EngineError> {
        self.check(at)?;
        Ok(self.cells[self.index(at)])
    }

    /// Writes the tier at a coordinate.
    pub fn put(&mut self, at: Coord, tier: Tier) -> Result<(), EngineError> {
        self.check(at)?;
        if tier > self.max_tier {
            return Err(EngineError::InvalidTier {
                tier,
                max: self.max_tier,
            });
        }
        let idx = self.index(at);
        self.cells[idx] = tier;
        Ok(())
    }

    /// All empty coordinates in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.coords()
            .filter(|&c| self.cells[self.index(c)] == EMPTY)
            .collect()
    }

    /// Checks whether no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&t| t != EMPTY)
    }

    /// Checks whether any cell holds `tier`.
    pub fn contains(&self, tier: Tier) -> bool {
        self.cells.contains(&tier)
    }

    /// Iterates every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Coord::new(row, col)))
    }

    /// Cells in row-major order.
    pub fn cells(&self) -> &[Tier] {
        &self.cells
    }

    /// Copies the grid out as rows, top row first.
    pub fn rows(&self) -> Vec<Vec<Tier>> {
        self.cells.chunks(self.size).map(<[Tier]>::to_vec).collect()
    }

    /// Copies one column out, top to bottom.
    pub fn column(&self, col: usize) -> Result<Vec<Tier>, EngineError> {
        self.check(Coord::new(0, col))?;
        Ok((0..self.size)
            .map(|row| self.cells[row * self.size + col])
            .collect())
    }

    fn index(&self, at: Coord) -> usize {
        at.row * self.size + at.col
    }

    /// Unchecked access for the rule modules, which iterate valid coordinates only.
    pub(crate) fn tier(&self, at: Coord) -> Tier {
        self.cells[self.index(at)]
    }

    /// Unchecked write for the rule modules, which only move or clear existing tiers.
    pub(crate) fn write(&mut self, at: Coord, tier: Tier) {
        debug_assert!(tier <= self.max_tier);
        let idx = self.index(at);
        self.cells[idx] = tier;
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.max_tier.to_string().len();
        for (row, values) in self.cells.chunks(self.size).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            let line = values
                .iter()
                .map(|&t| match t {
                    EMPTY => format!("{:>width$}", "."),
                    t => format!("{:>width$}", t),
                })
                .collect::<Vec<_>>()
                .join(" ");
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(3, 5).unwrap();
        assert_eq!(grid.empty_cells().len(), 9);
        assert!(!grid.is_full());
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            Grid::new(0, 10),
            Err(EngineError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::new(3, 5).unwrap();
        assert!(matches!(grid.get(3, 0), Err(EngineError::OutOfBounds { .. })));
        assert!(matches!(grid.get(0, 3), Err(EngineError::OutOfBounds { .. })));
        assert!(matches!(grid.get(usize::MAX, 1), Err(EngineError::OutOfBounds { .. })));
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut grid = Grid::new(2, 5).unwrap();
        assert_eq!(
            grid.set(2, 2, 1),
            Err(EngineError::OutOfBounds {
                coord: Coord::new(2, 2),
                size: 2
            })
        );
    }

    #[test]
    fn test_set_invalid_tier() {
        let mut grid = Grid::new(2, 5).unwrap();
        assert_eq!(
            grid.set(0, 0, 6),
            Err(EngineError::InvalidTier { tier: 6, max: 5 })
        );
        assert!(grid.set(0, 0, 5).is_ok());
        assert!(grid.set(0, 0, 0).is_ok());
    }

    #[test]
    fn test_empty_cells_row_major() {
        let grid = Grid::from_rows(&[[1, 0], [0, 0]], 5).unwrap();
        assert_eq!(
            grid.empty_cells(),
            vec![Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 1)]
        );
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows: Vec<Vec<Tier>> = vec![vec![1, 2], vec![3]];
        assert!(matches!(
            Grid::from_rows(&rows, 5),
            Err(EngineError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_rows_and_column() {
        let grid = Grid::from_rows(&[[1, 2], [3, 4]], 5).unwrap();
        assert_eq!(grid.rows(), vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(grid.column(1).unwrap(), vec![2, 4]);
    }

    #[test]
    fn test_deserialize_valid_grid() {
        let grid = Grid::from_rows(&[[1, 0], [5, 3]], 5).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn test_deserialize_rejects_short_cells() {
        let result = serde_json::from_str::<Grid>(r#"{"size":3,"max_tier":5,"cells":[1]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_zero_size() {
        let result = serde_json::from_str::<Grid>(r#"{"size":0,"max_tier":5,"cells":[]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_tier_above_max() {
        let result = serde_json::from_str::<Grid>(r#"{"size":1,"max_tier":5,"cells":[9]}"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Tier 9 is outside 0..=5"), "{}", err);
    }

    #[test]
    fn test_display() {
        let grid = Grid::from_rows(&[[1, 0], [10, 3]], 10).unwrap();
        assert_eq!(grid.to_string(), " 1  .\n10  3");
    }
}
