/// Filter configuration threaded through every parse and render call.
///
/// Each toggle suppresses one family of heuristically-detected noise. All
/// toggles default to off, which reproduces the input faithfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    /// Drop date-shaped string values and entries under timestamp-named keys.
    pub skip_dates: bool,
    /// Drop window/view geometry, toolbar layouts, and cache entries.
    pub skip_ui_state: bool,
    /// Drop UUID- and hashed-ID-shaped values and UUID-bearing keys.
    pub skip_identifiers: bool,
}

impl ConvertOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skip_dates(mut self, skip_dates: bool) -> Self {
        self.skip_dates = skip_dates;
        self
    }

    pub fn with_skip_ui_state(mut self, skip_ui_state: bool) -> Self {
        self.skip_ui_state = skip_ui_state;
        self
    }

    pub fn with_skip_identifiers(mut self, skip_identifiers: bool) -> Self {
        self.skip_identifiers = skip_identifiers;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::ConvertOptions;

    #[rstest::rstest]
    fn test_defaults_are_off() {
        let options = ConvertOptions::new();
        assert!(!options.skip_dates);
        assert!(!options.skip_ui_state);
        assert!(!options.skip_identifiers);
    }

    #[rstest::rstest]
    fn test_builder_toggles_are_independent() {
        let options = ConvertOptions::new()
            .with_skip_dates(true)
            .with_skip_identifiers(true);
        assert!(options.skip_dates);
        assert!(!options.skip_ui_state);
        assert!(options.skip_identifiers);

        let options = options.with_skip_dates(false).with_skip_ui_state(true);
        assert!(!options.skip_dates);
        assert!(options.skip_ui_state);
        assert!(options.skip_identifiers);
    }
}
