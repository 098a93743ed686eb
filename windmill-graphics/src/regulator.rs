use crate::config::{REGULATOR_MAX_ANGLE, REGULATOR_TORQUE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Position of the regulator dial and the power derived from it.
#[derive(Debug, Clone, PartialEq)]
pub struct RegulatorState {
    angle: f64,
    power: u32,
    changed: bool,
}

impl RegulatorState {
    pub fn new() -> Self {
        Self {
            angle: 0.0,
            power: 0,
            changed: false,
        }
    }

    /// A dial at rest at `angle` (clamped), power already derived.
    pub fn with_angle(angle: f64) -> Self {
        let angle = angle.clamp(0.0, REGULATOR_MAX_ANGLE);
        Self {
            angle,
            power: power_at(angle),
            changed: false,
        }
    }

    /// Turns the dial one step. Hitting either end stop clears `changed`,
    /// even if an earlier step in the same tick had set it.
    pub fn apply_increment(&mut self, direction: Direction) {
        match direction {
            Direction::Up => {
                self.angle += REGULATOR_TORQUE;
                self.changed = true;
                if self.angle > REGULATOR_MAX_ANGLE {
                    self.angle = REGULATOR_MAX_ANGLE;
                    self.changed = false;
                }
            }
            Direction::Down => {
                self.angle -= REGULATOR_TORQUE;
                self.changed = true;
                if self.angle < 0.0 {
                    self.angle = 0.0;
                    self.changed = false;
                }
            }
        }
    }

    /// Recomputes power from the angle and clears `changed`.
    pub fn derive_power(&mut self) -> u32 {
        self.power = power_at(self.angle);
        self.changed = false;
        self.power
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// The power as of the last [`derive_power`](Self::derive_power).
    pub fn power(&self) -> u32 {
        self.power
    }

    pub fn changed(&self) -> bool {
        self.changed
    }
}

impl Default for RegulatorState {
    fn default() -> Self {
        Self::new()
    }
}

/// Power in percent for a dial angle, truncated.
pub fn power_at(angle: f64) -> u32 {
    (angle * 100.0 / REGULATOR_MAX_ANGLE) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_up_from_rest() {
        let mut regulator = RegulatorState::new();
        regulator.apply_increment(Direction::Up);
        assert_eq!(regulator.angle(), 10.0);
        assert!(regulator.changed());
        assert_eq!(regulator.derive_power(), 3);
        assert!(!regulator.changed());
    }

    #[test]
    fn clamps_at_maximum() {
        let mut regulator = RegulatorState::with_angle(260.0);
        assert_eq!(regulator.power(), 96);

        // Two presses on consecutive ticks; the readout is derived in between.
        regulator.apply_increment(Direction::Up);
        assert!(regulator.changed());
        regulator.derive_power();
        regulator.apply_increment(Direction::Up);
        assert_eq!(regulator.angle(), 270.0);
        assert!(!regulator.changed());
        assert_eq!(regulator.power(), 100);
    }

    #[test]
    fn with_angle_starts_with_matching_power() {
        for angle in [0.0, 10.0, 135.0, 260.0, 270.0, 400.0] {
            let regulator = RegulatorState::with_angle(angle);
            assert_eq!(regulator.power(), power_at(regulator.angle()));
            assert!(!regulator.changed());
        }
    }

    #[test]
    fn end_stop_press_keeps_power_of_a_fresh_dial() {
        let mut regulator = RegulatorState::with_angle(270.0);
        regulator.apply_increment(Direction::Up);
        regulator.apply_increment(Direction::Up);
        assert_eq!(regulator.angle(), 270.0);
        assert!(!regulator.changed());
        assert_eq!(regulator.power(), 100);
    }

    #[test]
    fn clamps_at_zero() {
        let mut regulator = RegulatorState::with_angle(5.0);
        regulator.apply_increment(Direction::Down);
        assert_eq!(regulator.angle(), 0.0);
        assert!(!regulator.changed());
        assert_eq!(regulator.power(), 0);
    }

    #[test]
    fn clamp_overrides_earlier_change_in_the_same_tick() {
        let mut regulator = RegulatorState::with_angle(260.0);
        regulator.apply_increment(Direction::Up);
        regulator.apply_increment(Direction::Up);
        assert_eq!(regulator.angle(), 270.0);
        assert!(!regulator.changed());
        assert_eq!(regulator.power(), 96);
    }

    #[test]
    fn with_angle_clamps() {
        assert_eq!(RegulatorState::with_angle(-20.0).angle(), 0.0);
        assert_eq!(RegulatorState::with_angle(400.0).angle(), 270.0);
    }

    #[test]
    fn angle_stays_in_range() {
        let mut regulator = RegulatorState::new();
        // Deterministic pseudo-random walk with long runs into both end stops.
        let mut seed = 0x2545_f491_u32;
        for _ in 0..5_000 {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let direction = if seed % 3 == 0 {
                Direction::Down
            } else {
                Direction::Up
            };
            for _ in 0..(seed % 40) {
                regulator.apply_increment(direction);
                assert!((0.0..=REGULATOR_MAX_ANGLE).contains(&regulator.angle()));
            }
        }
    }

    #[test]
    fn power_is_monotonic() {
        assert_eq!(power_at(0.0), 0);
        assert_eq!(power_at(REGULATOR_MAX_ANGLE), 100);
        let mut last = 0;
        for tenth in 0..=2700 {
            let power = power_at(tenth as f64 / 10.0);
            assert!(power >= last);
            assert!(power <= 100);
            last = power;
        }
    }

    #[test]
    fn power_truncates() {
        // 10 * 100 / 270 = 3.7
        assert_eq!(power_at(10.0), 3);
        // 260 * 100 / 270 = 96.3
        assert_eq!(power_at(260.0), 96);
    }
}
