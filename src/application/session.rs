use std::time::Instant;

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use super::{Camera, Scheduler};
use crate::config::LifeConfig;
use crate::domain::{Delta, LifeEngine, Pattern, all_rules, presets, soup};

/// User-level actions, produced by keys and buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleRunning,
    /// Clear the board and stop ticking
    Clear,
    /// Advance exactly one generation, even while paused
    Step,
    SpeedUp,
    SlowDown,
    ResetSpeed,
    /// Clear, then fill the visible region at the configured density
    Randomize,
    ResetCamera,
    NextRule,
    /// Arm a preset for placement on the next click
    SelectPattern(usize),
    CancelPlacement,
}

/// Session owns everything one window needs: the board, its pacing and the view.
pub struct Session {
    pub engine: LifeEngine,
    pub scheduler: Scheduler,
    pub camera: Camera,
    pub patterns: Vec<Pattern>,
    /// Index into `patterns` armed for the next click
    pub pending_pattern: Option<usize>,
    pub last_step_time_ms: f32,
    config: LifeConfig,
    rule_index: usize,
    generation: u64,
    rng: StdRng,
}

impl Session {
    pub fn new(config: LifeConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            engine: LifeEngine::with_accounting(config.accounting),
            scheduler: Scheduler::new(config.default_gps, config.min_gps, config.max_gps),
            camera: Camera::new(config.square_size, config.min_square_size, config.max_square_size),
            patterns: presets::all_patterns(),
            pending_pattern: None,
            last_step_time_ms: 0.0,
            config,
            rule_index: 0,
            generation: 0,
            rng,
        }
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    /// Generations that changed the board since the last clear
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pending(&self) -> Option<&Pattern> {
        self.pending_pattern.and_then(|idx| self.patterns.get(idx))
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::ToggleRunning => self.scheduler.toggle(),
            Command::Clear => {
                self.clear();
                self.scheduler.stop();
            }
            Command::Step => {
                self.step();
            }
            Command::SpeedUp => self.scheduler.speed_up(),
            Command::SlowDown => self.scheduler.slow_down(),
            Command::ResetSpeed => self.scheduler.reset_speed(),
            Command::Randomize => self.randomize(),
            Command::ResetCamera => self.camera.reset(),
            Command::NextRule => self.next_rule(),
            Command::SelectPattern(idx) if idx < self.patterns.len() => {
                self.pending_pattern = Some(idx);
                self.scheduler.stop();
            }
            Command::SelectPattern(_) => {}
            Command::CancelPlacement => self.pending_pattern = None,
        }
    }

    /// Pointer click at a screen position: place the armed pattern there,
    /// otherwise flip the cell under the pointer
    pub fn click(&mut self, screen_x: f32, screen_y: f32) {
        let coord = self.camera.screen_to_grid(screen_x, screen_y);
        match self.pending_pattern.take().and_then(|idx| self.patterns.get(idx)) {
            Some(pattern) => {
                pattern.place_centered(&mut self.engine, coord);
                debug!(pattern = pattern.name, x = coord.x, y = coord.y, "pattern placed");
            }
            None => {
                self.engine.toggle_cell(coord);
            }
        }
    }

    /// Frame hook: runs a generation when the scheduler says one is due
    pub fn update(&mut self, delta_time: f32) -> Option<Delta> {
        self.scheduler.advance(delta_time).then(|| self.step())
    }

    /// One generation. A generation with no changes stops the scheduler.
    pub fn step(&mut self) -> Delta {
        let start = Instant::now();
        let delta = self.engine.calculate_next_tick();
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;

        if delta.is_empty() {
            self.scheduler.stop();
        } else {
            self.generation += 1;
        }
        debug!(
            generation = self.generation,
            changed = delta.len(),
            population = self.engine.population(),
            "step"
        );
        delta
    }

    pub fn clear(&mut self) {
        self.engine.clear();
        self.generation = 0;
        info!("board cleared");
    }

    pub fn randomize(&mut self) {
        self.clear();
        let region = self.camera.visible_region();
        let added = soup::scatter(&mut self.engine, region, self.config.randomize_density, &mut self.rng);
        info!(added, area = region.area(), "randomized visible region");
    }

    fn next_rule(&mut self) {
        let mut rules = all_rules();
        self.rule_index = (self.rule_index + 1) % rules.len();
        let rule = rules.swap_remove(self.rule_index);
        info!(rule = rule.name(), "rule changed");
        self.engine.set_rule(rule);
    }
}
