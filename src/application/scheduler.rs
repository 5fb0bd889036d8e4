use tracing::info;

/// Paces generations against frame time.
/// Running/paused lives here; the engine has no notion of it.
#[derive(Clone, Debug, PartialEq)]
pub struct Scheduler {
    running: bool,
    generations_per_second: u32,
    default_gps: u32,
    min_gps: u32,
    max_gps: u32,
    timer: f32,
}

impl Scheduler {
    pub fn new(default_gps: u32, min_gps: u32, max_gps: u32) -> Self {
        Self {
            running: false,
            generations_per_second: default_gps.clamp(min_gps, max_gps),
            default_gps,
            min_gps,
            max_gps,
            timer: 0.0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn generations_per_second(&self) -> u32 {
        self.generations_per_second
    }

    pub fn start(&mut self) {
        if !self.running {
            info!(gps = self.generations_per_second, "simulation started");
        }
        self.running = true;
        self.timer = 0.0;
    }

    pub fn stop(&mut self) {
        if self.running {
            info!("simulation stopped");
        }
        self.running = false;
        self.timer = 0.0;
    }

    pub fn toggle(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
    }

    /// One more generation per second. Restarts ticking at the new pace.
    pub fn speed_up(&mut self) {
        self.set_speed(self.generations_per_second.saturating_add(1));
    }

    /// One fewer generation per second, never below the minimum
    pub fn slow_down(&mut self) {
        if self.generations_per_second > self.min_gps {
            self.set_speed(self.generations_per_second - 1);
        }
    }

    pub fn reset_speed(&mut self) {
        self.set_speed(self.default_gps);
    }

    fn set_speed(&mut self, gps: u32) {
        self.generations_per_second = gps.clamp(self.min_gps, self.max_gps);
        self.start();
    }

    /// Feed elapsed frame time; true when a generation is due.
    /// At most one generation per frame.
    pub fn advance(&mut self, delta_time: f32) -> bool {
        if !self.running {
            return false;
        }

        self.timer += delta_time;
        let interval = 1.0 / self.generations_per_second as f32;
        if self.timer >= interval {
            self.timer = 0.0;
            true
        } else {
            false
        }
    }
}
