//! Sparse Game of Life engine.
//!
//! Only live cells are stored. A second map keeps the live-neighbor count of
//! every coordinate that has at least one live neighbor, updated incrementally
//! on each add/remove. A generation therefore only visits live cells and their
//! neighborhoods, regardless of how far apart they are on the plane.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use serde::Deserialize;

use super::{Cell, Coord, Region, Rule, default_rule};

/// Cells that changed during one generation: `true` = born, `false` = died.
/// Coordinates not present did not change.
pub type Delta = HashMap<Coord, bool>;

/// Which neighbors receive a count when a cell is added or removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accounting {
    /// Every Moore neighbor is credited: true infinite-plane semantics
    #[default]
    FullPlane,
    /// Only neighbors with x >= 0 and y >= 0 are credited, so nothing is
    /// ever born outside the non-negative quadrant and cells left there
    /// see zero neighbors
    NonNegativeQuadrant,
}

impl Accounting {
    #[inline]
    pub const fn tracks(self, coord: Coord) -> bool {
        match self {
            Accounting::FullPlane => true,
            Accounting::NonNegativeQuadrant => coord.is_non_negative(),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Accounting::FullPlane => "Full plane",
            Accounting::NonNegativeQuadrant => "Quadrant",
        }
    }
}

/// Live cells plus the neighbor-count index derived from them.
pub struct LifeEngine {
    live: HashSet<Coord>,
    /// Never holds a zero: entries are dropped as soon as they reach it
    neighbor_counts: HashMap<Coord, u8>,
    accounting: Accounting,
    rule: Box<dyn Rule>,
}

impl LifeEngine {
    /// Empty board, full-plane accounting, Conway's rule
    pub fn new() -> Self {
        Self::with_accounting(Accounting::default())
    }

    pub fn with_accounting(accounting: Accounting) -> Self {
        Self {
            live: HashSet::new(),
            neighbor_counts: HashMap::new(),
            accounting,
            rule: default_rule(),
        }
    }

    pub fn accounting(&self) -> Accounting {
        self.accounting
    }

    pub fn rule(&self) -> &dyn Rule {
        self.rule.as_ref()
    }

    /// Replace the birth/survival rule. Board state is untouched.
    pub fn set_rule(&mut self, rule: Box<dyn Rule>) {
        self.rule = rule;
    }

    /// Bring a cell to life. Already-live cells are left as they are.
    pub fn add_cell(&mut self, coord: Coord) {
        if !self.live.insert(coord) {
            return;
        }
        let accounting = self.accounting;
        for neighbor in coord.neighbors().filter(|&n| accounting.tracks(n)) {
            *self.neighbor_counts.entry(neighbor).or_insert(0) += 1;
        }
    }

    /// Kill a cell. Dead cells are left as they are.
    pub fn remove_cell(&mut self, coord: Coord) {
        if !self.live.remove(&coord) {
            return;
        }
        let accounting = self.accounting;
        for neighbor in coord.neighbors().filter(|&n| accounting.tracks(n)) {
            if let Entry::Occupied(mut entry) = self.neighbor_counts.entry(neighbor) {
                *entry.get_mut() -= 1;
                if *entry.get() == 0 {
                    entry.remove();
                }
            }
        }
    }

    /// Flip a cell and return its new state
    pub fn toggle_cell(&mut self, coord: Coord) -> bool {
        if self.is_alive(coord) {
            self.remove_cell(coord);
            false
        } else {
            self.add_cell(coord);
            true
        }
    }

    pub fn clear(&mut self) {
        self.live.clear();
        self.neighbor_counts.clear();
    }

    /// Advance one generation in place and return what changed.
    ///
    /// All decisions are made against the pre-tick board before any cell is
    /// touched, then applied through `remove_cell`/`add_cell`. An empty delta
    /// means the board is stable (or empty) and will stay that way.
    pub fn calculate_next_tick(&mut self) -> Delta {
        let rule = self.rule.as_ref();

        let deaths: Vec<Coord> = self
            .live
            .iter()
            .copied()
            .filter(|&coord| !rule.evolve(Cell::Alive, self.neighbor_count(coord)).is_alive())
            .collect();

        let births: Vec<Coord> = self
            .neighbor_counts
            .iter()
            .filter(|(coord, _)| !self.live.contains(*coord))
            .filter(|&(_, &count)| rule.evolve(Cell::Dead, count).is_alive())
            .map(|(&coord, _)| coord)
            .collect();

        let mut delta = Delta::with_capacity(deaths.len() + births.len());
        for coord in deaths {
            self.remove_cell(coord);
            delta.insert(coord, false);
        }
        for coord in births {
            self.add_cell(coord);
            delta.insert(coord, true);
        }
        delta
    }

    pub fn is_alive(&self, coord: Coord) -> bool {
        self.live.contains(&coord)
    }

    /// Live neighbors of a coordinate under the current accounting mode
    pub fn neighbor_count(&self, coord: Coord) -> u8 {
        self.neighbor_counts.get(&coord).copied().unwrap_or(0)
    }

    pub fn live_cells(&self) -> &HashSet<Coord> {
        &self.live
    }

    /// Every coordinate with a non-zero live-neighbor count
    pub fn neighbor_counts(&self) -> &HashMap<Coord, u8> {
        &self.neighbor_counts
    }

    pub fn population(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Smallest rectangle containing every live cell
    pub fn bounding_box(&self) -> Option<Region> {
        let mut cells = self.live.iter().copied();
        let first = cells.next()?;
        let mut region = Region::spanning(first, first);
        cells.for_each(|coord| region.include(coord));
        Some(region)
    }
}

impl Default for LifeEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SeedsRule, presets};
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn coords(cells: &[(i32, i32)]) -> HashSet<Coord> {
        cells.iter().map(|&c| Coord::from(c)).collect()
    }

    fn engine_with(accounting: Accounting, cells: &[(i32, i32)]) -> LifeEngine {
        let mut engine = LifeEngine::with_accounting(accounting);
        cells.iter().for_each(|&c| engine.add_cell(c.into()));
        engine
    }

    /// Neighbor counts rebuilt from scratch
    fn recount(engine: &LifeEngine) -> HashMap<Coord, u8> {
        let accounting = engine.accounting();
        let mut counts = HashMap::new();
        for &cell in engine.live_cells() {
            for neighbor in cell.neighbors().filter(|&n| accounting.tracks(n)) {
                *counts.entry(neighbor).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Straightforward B3/S23 step over a plain set
    fn reference_step(live: &HashSet<Coord>) -> HashSet<Coord> {
        let candidates: HashSet<Coord> = live
            .iter()
            .flat_map(|c| c.neighbors().chain(std::iter::once(*c)))
            .collect();
        candidates
            .into_iter()
            .filter(|c| {
                let n = c.neighbors().filter(|n| live.contains(n)).count();
                matches!((live.contains(c), n), (true, 2 | 3) | (false, 3))
            })
            .collect()
    }

    fn split(delta: &Delta) -> (HashSet<Coord>, HashSet<Coord>) {
        let born = delta.iter().filter(|(_, alive)| **alive).map(|(c, _)| *c).collect();
        let died = delta.iter().filter(|(_, alive)| !**alive).map(|(c, _)| *c).collect();
        (born, died)
    }

    #[test]
    fn test_add_cell_counts_neighbors() {
        let engine = engine_with(Accounting::FullPlane, &[(5, 5)]);

        assert!(engine.is_alive(Coord::new(5, 5)));
        assert_eq!(engine.neighbor_counts().len(), 8);
        assert_eq!(engine.neighbor_count(Coord::new(4, 4)), 1);
        assert_eq!(engine.neighbor_count(Coord::new(5, 5)), 0);
    }

    #[test]
    fn test_quadrant_accounting_skips_negative_neighbors() {
        let engine = engine_with(Accounting::NonNegativeQuadrant, &[(0, 0)]);

        // Only (1,0), (0,1), (1,1) are in the quadrant
        assert_eq!(engine.neighbor_counts().len(), 3);
        assert_eq!(engine.neighbor_count(Coord::new(-1, 0)), 0);
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut engine = engine_with(Accounting::FullPlane, &[(2, 2)]);
        engine.add_cell(Coord::new(2, 2));

        assert_eq!(engine.population(), 1);
        assert_eq!(engine.neighbor_count(Coord::new(3, 3)), 1);
    }

    #[test]
    fn test_remove_dead_cell_is_noop() {
        let mut engine = engine_with(Accounting::FullPlane, &[(2, 2)]);
        let before = engine.neighbor_counts().clone();
        engine.remove_cell(Coord::new(3, 3));

        assert_eq!(engine.population(), 1);
        assert_eq!(engine.neighbor_counts(), &before);
    }

    #[test]
    fn test_add_remove_round_trip() {
        for accounting in [Accounting::FullPlane, Accounting::NonNegativeQuadrant] {
            let mut engine = engine_with(accounting, &[(1, 1), (2, 1), (4, 4)]);
            let live_before = engine.live_cells().clone();
            let counts_before = engine.neighbor_counts().clone();

            engine.add_cell(Coord::new(3, 2));
            engine.remove_cell(Coord::new(3, 2));

            assert_eq!(engine.live_cells(), &live_before);
            assert_eq!(engine.neighbor_counts(), &counts_before);
        }
    }

    #[test]
    fn test_counts_stay_exact_under_random_edits() {
        let mut rng = StdRng::seed_from_u64(0x5EED);

        for accounting in [Accounting::FullPlane, Accounting::NonNegativeQuadrant] {
            let mut engine = LifeEngine::with_accounting(accounting);
            for _ in 0..2_000 {
                let coord = Coord::new(rng.random_range(-6..6), rng.random_range(-6..6));
                if rng.random_bool(0.6) {
                    engine.add_cell(coord);
                } else {
                    engine.remove_cell(coord);
                }
                assert!(engine.neighbor_counts().values().all(|&n| n != 0));
            }
            assert_eq!(engine.neighbor_counts(), &recount(&engine));

            for _ in 0..10 {
                engine.calculate_next_tick();
                assert_eq!(engine.neighbor_counts(), &recount(&engine));
            }
        }
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut engine = engine_with(Accounting::FullPlane, &[(0, 0), (1, 0), (7, -3)]);

        engine.clear();
        assert!(engine.is_empty());
        assert!(engine.neighbor_counts().is_empty());

        engine.clear();
        assert!(engine.is_empty());
        assert!(engine.neighbor_counts().is_empty());
    }

    #[test]
    fn test_toggle_cell() {
        let mut engine = LifeEngine::new();

        assert!(engine.toggle_cell(Coord::new(-4, 9)));
        assert!(engine.is_alive(Coord::new(-4, 9)));
        assert!(!engine.toggle_cell(Coord::new(-4, 9)));
        assert!(engine.is_empty());
        assert!(engine.neighbor_counts().is_empty());
    }

    #[test]
    fn test_empty_engine_yields_empty_delta() {
        let mut engine = LifeEngine::new();
        assert!(engine.calculate_next_tick().is_empty());
    }

    #[test]
    fn test_lonely_cell_dies() {
        let mut engine = engine_with(Accounting::FullPlane, &[(3, 3)]);
        let delta = engine.calculate_next_tick();

        assert_eq!(delta, HashMap::from([(Coord::new(3, 3), false)]));
        assert!(engine.is_empty());
        assert!(engine.neighbor_counts().is_empty());
    }

    #[test]
    fn test_block_still_life() {
        for accounting in [Accounting::FullPlane, Accounting::NonNegativeQuadrant] {
            let mut engine = engine_with(accounting, &[(0, 0), (1, 0), (0, 1), (1, 1)]);

            assert!(engine.calculate_next_tick().is_empty());
            assert_eq!(engine.live_cells(), &coords(&[(0, 0), (1, 0), (0, 1), (1, 1)]));
        }
    }

    #[test]
    fn test_blinker_oscillates() {
        let horizontal = [(1, 1), (2, 1), (3, 1)];
        let vertical = [(2, 0), (2, 1), (2, 2)];

        for accounting in [Accounting::FullPlane, Accounting::NonNegativeQuadrant] {
            let mut engine = engine_with(accounting, &horizontal);

            let (born, died) = split(&engine.calculate_next_tick());
            assert_eq!(born, coords(&[(2, 0), (2, 2)]));
            assert_eq!(died, coords(&[(1, 1), (3, 1)]));
            assert_eq!(engine.live_cells(), &coords(&vertical));

            let (born, died) = split(&engine.calculate_next_tick());
            assert_eq!(born, coords(&[(1, 1), (3, 1)]));
            assert_eq!(died, coords(&[(2, 0), (2, 2)]));
            assert_eq!(engine.live_cells(), &coords(&horizontal));
        }
    }

    #[test]
    fn test_glider_translates_diagonally() {
        let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

        for accounting in [Accounting::FullPlane, Accounting::NonNegativeQuadrant] {
            let mut engine = engine_with(accounting, &glider);

            let (born, died) = split(&engine.calculate_next_tick());
            assert_eq!(born, coords(&[(0, 1), (1, 3)]));
            assert_eq!(died, coords(&[(1, 0), (0, 2)]));

            for _ in 0..3 {
                let before = engine.live_cells().clone();
                let expected = reference_step(&before);
                let (born, died) = split(&engine.calculate_next_tick());

                assert_eq!(born, expected.difference(&before).copied().collect());
                assert_eq!(died, before.difference(&expected).copied().collect());
                assert_eq!(engine.live_cells(), &expected);
            }

            let shifted: HashSet<Coord> = glider.iter().map(|&(x, y)| Coord::new(x + 1, y + 1)).collect();
            assert_eq!(engine.live_cells(), &shifted);
        }
    }

    #[test]
    fn test_full_plane_glider_crosses_origin() {
        let mut engine = LifeEngine::new();
        presets::glider().place_on(&mut engine, Coord::new(-10, -10));

        for _ in 0..40 {
            engine.calculate_next_tick();
        }

        assert_eq!(engine.population(), 5);
        let bounds = engine.bounding_box().unwrap();
        assert_eq!(bounds.min, Coord::new(0, 0));
        assert_eq!((bounds.width(), bounds.height()), (3, 3));
    }

    #[test]
    fn test_quadrant_starves_negative_cells() {
        let mut engine = engine_with(Accounting::NonNegativeQuadrant, &[(-5, -5), (-4, -5), (-5, -4), (-4, -4)]);

        // A block in the negative quadrant has no tracked neighbors, so it dies
        let delta = engine.calculate_next_tick();
        assert_eq!(delta.len(), 4);
        assert!(delta.values().all(|alive| !alive));
        assert!(engine.is_empty());
    }

    #[test]
    fn test_matches_reference_on_r_pentomino() {
        let mut engine = LifeEngine::new();
        presets::r_pentomino().place_on(&mut engine, Coord::new(-1, -1));

        let mut expected = engine.live_cells().clone();
        for _ in 0..60 {
            expected = reference_step(&expected);
            engine.calculate_next_tick();
            assert_eq!(engine.live_cells(), &expected);
        }
    }

    #[test]
    fn test_custom_rule() {
        let mut engine = engine_with(Accounting::FullPlane, &[(0, 0), (1, 0)]);
        engine.set_rule(Box::new(SeedsRule));
        assert_eq!(engine.rule().name(), "Seeds");

        // Under B2/S both parents die and the four cells touching both are born
        let (born, died) = split(&engine.calculate_next_tick());
        assert_eq!(died, coords(&[(0, 0), (1, 0)]));
        assert_eq!(born, coords(&[(0, -1), (1, -1), (0, 1), (1, 1)]));
    }

    #[test]
    fn test_bounding_box() {
        assert!(LifeEngine::new().bounding_box().is_none());

        let engine = engine_with(Accounting::FullPlane, &[(3, -2), (-1, 4), (0, 0)]);
        assert_eq!(engine.bounding_box(), Some(Region::spanning(Coord::new(-1, -2), Coord::new(3, 4))));
    }
}
