use std::ops::Mul;

quantity!(WattHours, "Wh");

impl WattHours {
    /// Whole watt-hours, negative values saturate at zero.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn truncate(self) -> u64 {
        self.0 as u64
    }
}

impl Mul<f64> for WattHours {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}
