quantity!(Volts, "V");

impl Volts {
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn truncate(self) -> u32 {
        self.0 as u32
    }
}
