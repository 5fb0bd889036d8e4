use super::Cell;

/// Birth/survival rule for an outer-totalistic automaton on the Moore neighborhood.
///
/// The sparse engine only visits live cells and cells with at least one live
/// neighbor, so a rule must never birth a cell with zero neighbors (no B0).
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &'static str;

    /// Short description, usually the B/S notation
    fn description(&self) -> &'static str;

    /// Next state of a cell given its current state and live-neighbor count
    fn evolve(&self, current: Cell, neighbors: u8) -> Cell;
}

/// Conway's Game of Life (B3/S23)
#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn name(&self) -> &'static str {
        "Conway"
    }

    fn description(&self) -> &'static str {
        "B3/S23 - Classic"
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        match (current, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// HighLife (B36/S23), known for its replicator
#[derive(Clone, Copy, Debug, Default)]
pub struct HighLifeRule;

impl Rule for HighLifeRule {
    fn name(&self) -> &'static str {
        "HighLife"
    }

    fn description(&self) -> &'static str {
        "B36/S23 - Replicators"
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        match (current, neighbors) {
            (Cell::Alive, 2 | 3) => Cell::Alive,
            (Cell::Dead, 3 | 6) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// Seeds (B2/S): nothing survives, so every pattern keeps moving or dies
#[derive(Clone, Copy, Debug, Default)]
pub struct SeedsRule;

impl Rule for SeedsRule {
    fn name(&self) -> &'static str {
        "Seeds"
    }

    fn description(&self) -> &'static str {
        "B2/S - Exploding"
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        match (current, neighbors) {
            (Cell::Dead, 2) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// Day & Night (B3678/S34678), symmetric under inversion
#[derive(Clone, Copy, Debug, Default)]
pub struct DayAndNightRule;

impl Rule for DayAndNightRule {
    fn name(&self) -> &'static str {
        "Day&Night"
    }

    fn description(&self) -> &'static str {
        "B3678/S34678"
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        match (current, neighbors) {
            (Cell::Alive, 3 | 4 | 6 | 7 | 8) => Cell::Alive,
            (Cell::Dead, 3 | 6 | 7 | 8) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// Every selectable rule, Conway first
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ConwayRule),
        Box::new(HighLifeRule),
        Box::new(SeedsRule),
        Box::new(DayAndNightRule),
    ]
}

pub fn default_rule() -> Box<dyn Rule> {
    Box::new(ConwayRule)
}
