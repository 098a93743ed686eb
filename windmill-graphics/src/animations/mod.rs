use crate::config::FAN_DEGREES_PER_POWER;

/// Spin of the wind fan. Speed follows the regulator power; there is no
/// inertia, the fan turns a fixed amount per tick for a given power.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FanState {
    angle: f64,
}

impl FanState {
    pub fn new() -> Self {
        Self { angle: 0.0 }
    }

    #[cfg(test)]
    pub(crate) fn with_angle(angle: f64) -> Self {
        Self { angle }
    }

    /// Turns the fan by `power / 8` degrees and wraps once past a full turn.
    ///
    /// The wrap is a single subtraction, which is enough for any step up to
    /// 360 degrees; power tops out at 100, a 12.5 degree step.
    pub fn advance(&mut self, power: u32) -> f64 {
        self.angle += power as f64 * FAN_DEGREES_PER_POWER;
        if self.angle >= 360.0 {
            self.angle -= 360.0;
        }
        self.angle
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn wraps_past_full_turn() {
        let mut fan = FanState::with_angle(358.0);
        assert_relative_eq!(fan.advance(100), 10.5);
    }

    #[test]
    fn idle_fan_stands_still() {
        let mut fan = FanState::with_angle(42.0);
        for _ in 0..10 {
            fan.advance(0);
        }
        assert_eq!(fan.angle(), 42.0);
    }

    #[test]
    fn exact_full_turn_wraps_to_zero() {
        // 45 / 8 = 5.625 divides 360 exactly, so the sum lands on 360.
        let mut fan = FanState::new();
        for _ in 0..64 {
            fan.advance(45);
        }
        assert_eq!(fan.angle(), 0.0);
    }

    #[test]
    fn angle_stays_in_range_for_every_power() {
        for power in 0..=100 {
            let mut fan = FanState::new();
            for _ in 0..1_000 {
                let angle = fan.advance(power);
                assert!((0.0..360.0).contains(&angle), "power {power}: {angle}");
            }
        }
    }

    #[test]
    fn speed_is_proportional_to_power() {
        let mut slow = FanState::new();
        let mut fast = FanState::new();
        slow.advance(8);
        fast.advance(80);
        assert_relative_eq!(slow.angle(), 1.0);
        assert_relative_eq!(fast.angle(), 10.0);
    }
}
