//! Vehicle state and render-dirty tracking

/// Highest speed the panel shows
pub const MAX_SPEED: f32 = 999.0;

/// Highest collectible count (one lamp per bit)
pub const MAX_COLLECTIBLES: u8 = u8::MAX;

/// Speed change that counts as visible on the panel
pub const SPEED_EPSILON: f32 = 0.05;

/// Values shown by the last completed render
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderMark {
    /// Nothing drawn since power-on
    NeverRendered,
    /// Snapshot taken right after a successful render
    Rendered { speed: f32, count: u8 },
}

/// Current vehicle values
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VehicleState {
    speed: f32,
    collectible_count: u8,
    mark: RenderMark,
}

impl Default for VehicleState {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleState {
    /// Zero speed, nothing collected, never rendered
    pub const fn new() -> Self {
        Self {
            speed: 0.0,
            collectible_count: 0,
            mark: RenderMark::NeverRendered,
        }
    }

    /// Current speed
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Current collectible count
    pub fn collectible_count(&self) -> u8 {
        self.collectible_count
    }

    /// Last render snapshot
    pub fn render_mark(&self) -> RenderMark {
        self.mark
    }

    /// Store `speed` clamped to 0..=999
    ///
    /// NaN leaves the stored speed unchanged.
    pub fn set_speed(&mut self, speed: f32) {
        if speed.is_nan() {
            return;
        }
        self.speed = speed.clamp(0.0, MAX_SPEED);
    }

    /// Store `count` clamped to 0..=255
    pub fn set_collectible_count(&mut self, count: i64) {
        self.collectible_count = count.clamp(0, MAX_COLLECTIBLES as i64) as u8;
    }

    /// Count one more collectible, saturating at 255
    pub fn add_collectible(&mut self) {
        self.collectible_count = self.collectible_count.saturating_add(1);
    }

    /// Check whether the panel shows stale values
    pub fn is_dirty(&self) -> bool {
        match self.mark {
            RenderMark::NeverRendered => true,
            RenderMark::Rendered { speed, count } => {
                let delta = self.speed - speed;
                delta > SPEED_EPSILON || delta < -SPEED_EPSILON || self.collectible_count != count
            }
        }
    }

    /// Record the current values as drawn
    ///
    /// Call only after the frame reached the display.
    pub fn commit_rendered(&mut self) {
        self.mark = RenderMark::Rendered {
            speed: self.speed,
            count: self.collectible_count,
        };
    }
}
