use std::fmt;

use serde::Serialize;

use crate::constants::TOGGLE_OFFSETS;
use crate::dependency::RandomSource;
use crate::types::{Coord, LightsOutError, LightsOutResult};

/// The board: `nrows` rows of `ncols` cells, `true` meaning lit.
///
/// Serializes as an array of rows so the presentation layer can map it
/// straight onto a table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Grid {
    rows: Vec<Vec<bool>>,
}

impl Grid {
    pub fn unlit(nrows: usize, ncols: usize) -> Self {
        Self {
            rows: vec![vec![false; ncols]; nrows],
        }
    }

    /// Builds a grid from explicit rows. Rejects an empty board or rows of
    /// differing length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> LightsOutResult<Self> {
        let ncols = rows.first().map_or(0, Vec::len);
        if ncols == 0 || rows.iter().any(|row| row.len() != ncols) {
            return Err(LightsOutError::RaggedGrid);
        }
        Ok(Self { rows })
    }

    /// One draw per cell, row-major; a cell starts lit when its draw exceeds
    /// `chance_light_starts_on`.
    pub fn random<R>(nrows: usize, ncols: usize, chance_light_starts_on: f64, source: &mut R) -> Self
    where
        R: RandomSource + ?Sized,
    {
        let mut rows = Vec::with_capacity(nrows);
        for _ in 0..nrows {
            let mut row = Vec::with_capacity(ncols);
            for _ in 0..ncols {
                row.push(source.next_unit() > chance_light_starts_on);
            }
            rows.push(row);
        }
        Self { rows }
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// Off-board coordinates read as unlit
    pub fn is_lit(&self, coord: Coord) -> bool {
        coord
            .on_board(self.nrows(), self.ncols())
            .map_or(false, |(row, col)| self.rows[row][col])
    }

    pub fn lit_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell).count())
            .sum()
    }

    pub fn is_solved(&self) -> bool {
        self.rows.iter().all(|row| row.iter().all(|&cell| !cell))
    }

    /// New grid with the cell at `center` and its orthogonal neighbours
    /// flipped. Neighbours off the board are skipped; `self` is untouched.
    pub fn toggled_around(&self, center: Coord) -> Grid {
        let mut next = self.clone();
        next.toggle_around(center);
        next
    }

    /// Row-major 0/1 bytes, one per cell
    pub fn to_flat(&self) -> Vec<u8> {
        self.rows
            .iter()
            .flat_map(|row| row.iter().map(|&cell| u8::from(cell)))
            .collect()
    }

    fn toggle_around(&mut self, center: Coord) -> usize {
        let mut flipped = 0;
        for (d_row, d_col) in TOGGLE_OFFSETS {
            if self.flip(center.offset(d_row, d_col)) {
                flipped += 1;
            }
        }
        flipped
    }

    fn flip(&mut self, coord: Coord) -> bool {
        match coord.on_board(self.nrows(), self.ncols()) {
            Some((row, col)) => {
                self.rows[row][col] = !self.rows[row][col];
                true
            }
            None => false,
        }
    }
}

/// `O` for lit, `.` for unlit, one row per line
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<&str> = row.iter().map(|&cell| if cell { "O" } else { "." }).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency::SequenceSource;
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use rstest::rstest;

    fn lit_cells(grid: &Grid) -> Vec<(usize, usize)> {
        let mut lit = Vec::new();
        for (r, row) in grid.rows().iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                if cell {
                    lit.push((r, c));
                }
            }
        }
        lit
    }

    #[test]
    fn corner_activation_flips_three_cells() {
        let grid = Grid::unlit(3, 3).toggled_around(Coord::new(0, 0));
        assert_eq!(lit_cells(&grid), vec![(0, 0), (0, 1), (1, 0)]);
    }

    #[test]
    fn center_activation_flips_plus_shape() {
        let grid = Grid::unlit(3, 3).toggled_around(Coord::new(1, 1));
        assert_eq!(lit_cells(&grid), vec![(0, 1), (1, 0), (1, 1), (1, 2), (2, 1)]);
    }

    #[rstest]
    #[case::corner(Coord::new(2, 2), 3)]
    #[case::edge(Coord::new(0, 1), 4)]
    #[case::center(Coord::new(1, 1), 5)]
    #[case::just_off_top(Coord::new(-1, 1), 1)]
    #[case::diagonal_off(Coord::new(-1, -1), 0)]
    #[case::far_away(Coord::new(100, -40), 0)]
    fn flip_count_depends_on_position(#[case] center: Coord, #[case] expected: usize) {
        let mut grid = Grid::unlit(3, 3);
        assert_eq!(grid.toggle_around(center), expected);
        assert_eq!(grid.lit_count(), expected);
    }

    #[test]
    fn toggled_around_leaves_source_untouched() {
        let original = Grid::unlit(3, 3);
        let next = original.toggled_around(Coord::new(1, 1));
        assert!(original.is_solved());
        assert_ne!(original, next);
    }

    #[test]
    fn single_row_board_has_no_vertical_neighbours() {
        let grid = Grid::unlit(1, 4).toggled_around(Coord::new(0, 1));
        assert_eq!(grid.to_flat(), vec![1, 1, 1, 0]);
    }

    #[test]
    fn solved_only_when_everything_is_off() {
        assert!(Grid::unlit(3, 3).is_solved());
        assert!(Grid::unlit(1, 1).is_solved());

        let one_lit = Grid::from_rows(vec![
            vec![false, false, false],
            vec![false, false, true],
            vec![false, false, false],
        ])
        .unwrap();
        assert!(!one_lit.is_solved());
        assert_eq!(one_lit.lit_count(), 1);
    }

    #[rstest]
    #[case::empty(vec![])]
    #[case::empty_row(vec![vec![]])]
    #[case::ragged(vec![vec![true, false], vec![true]])]
    fn from_rows_rejects_bad_shapes(#[case] rows: Vec<Vec<bool>>) {
        assert_eq!(Grid::from_rows(rows), Err(LightsOutError::RaggedGrid));
    }

    #[test]
    fn random_compares_strictly_against_chance() {
        // 0.5 equals the threshold, so only the draws above it light up
        let mut source = SequenceSource::new(vec![0.9, 0.5, 0.1, 0.75, 0.0, 0.51]);
        let grid = Grid::random(2, 3, 0.5, &mut source);
        assert_eq!(
            grid.rows(),
            &[vec![true, false, false], vec![true, false, true]]
        );
        assert_eq!(source.draws(), 6);
    }

    #[test]
    fn certain_off_chance_yields_solved_board() {
        let mut rng = SmallRng::seed_from_u64(3);
        let grid = Grid::random(5, 7, 1.0, &mut rng);
        assert!(grid.is_solved());
    }

    #[test]
    fn negative_chance_lights_everything() {
        let mut rng = SmallRng::seed_from_u64(3);
        let grid = Grid::random(4, 4, -0.1, &mut rng);
        assert_eq!(grid.lit_count(), 16);
    }

    #[test]
    fn display_draws_lit_cells() {
        let grid = Grid::unlit(2, 3).toggled_around(Coord::new(0, 0));
        assert_eq!(grid.to_string(), "O O .\nO . .");
    }

    #[test]
    fn serializes_as_nested_rows() {
        let grid = Grid::unlit(2, 2).toggled_around(Coord::new(0, 0));
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, "[[true,true],[true,false]]");
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (1usize..7, 1usize..7).prop_flat_map(|(nrows, ncols)| {
            prop::collection::vec(prop::collection::vec(any::<bool>(), ncols), nrows)
                .prop_map(|rows| Grid::from_rows(rows).unwrap())
        })
    }

    proptest! {
        #[test]
        fn prop_random_has_requested_shape(
            nrows in 1usize..12,
            ncols in 1usize..12,
            chance in 0.0f64..=1.0,
            seed in any::<u64>()
        ) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let grid = Grid::random(nrows, ncols, chance, &mut rng);
            prop_assert_eq!(grid.nrows(), nrows);
            prop_assert_eq!(grid.ncols(), ncols);
            prop_assert!(grid.rows().iter().all(|row| row.len() == ncols));
        }

        #[test]
        fn prop_toggle_is_involutory(grid in arb_grid(), row in -2i64..9, col in -2i64..9) {
            let center = Coord::new(row, col);
            prop_assert_eq!(grid.toggled_around(center).toggled_around(center), grid);
        }

        #[test]
        fn prop_toggle_stays_in_neighbourhood(grid in arb_grid(), row in -2i64..9, col in -2i64..9) {
            let center = Coord::new(row, col);
            let next = grid.toggled_around(center);
            for r in 0..grid.nrows() {
                for c in 0..grid.ncols() {
                    let coord = Coord::new(r as i64, c as i64);
                    let distance = (coord.row - row).abs() + (coord.col - col).abs();
                    let changed = grid.is_lit(coord) != next.is_lit(coord);
                    prop_assert_eq!(changed, distance <= 1);
                }
            }
        }

        #[test]
        fn prop_solved_iff_no_lit_cells(grid in arb_grid()) {
            prop_assert_eq!(grid.is_solved(), grid.lit_count() == 0);
        }
    }
}
