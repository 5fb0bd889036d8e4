//! Random fills ("soups") for seeding the board.

use rand::Rng;

use super::{LifeEngine, Region};

/// Bring each cell of `region` to life with probability `density`.
/// Returns how many cells were added. `density` is clamped to [0, 1].
pub fn scatter<R: Rng>(engine: &mut LifeEngine, region: Region, density: f64, rng: &mut R) -> usize {
    let density = density.clamp(0.0, 1.0);
    let mut added = 0;
    for coord in region.cells() {
        if rng.random_bool(density) && !engine.is_alive(coord) {
            engine.add_cell(coord);
            added += 1;
        }
    }
    added
}
