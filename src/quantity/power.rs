quantity!(Watts, "W");

impl Watts {
    /// Whole watts towards zero, the meter may report slightly negative power at night.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn truncate(self) -> i64 {
        self.0 as i64
    }
}
