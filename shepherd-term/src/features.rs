//! Terminal feature capability flags.

/// Which terminal features the current run may use.
///
/// Resolved once at startup from the `--no-ansi` flag and the `NO_COLOR`
/// environment variable, then passed to every component that draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermFeatures {
    pub color: bool,
    pub links: bool,
}

impl TermFeatures {
    pub fn new(color: bool, links: bool) -> Self {
        Self { color, links }
    }

    /// All features off; the spinner and color paths become no-ops.
    pub fn disabled() -> Self {
        Self {
            color: false,
            links: false,
        }
    }

    pub fn any_enabled(&self) -> bool {
        self.color || self.links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_enabled_reflects_flags() {
        assert!(TermFeatures::new(true, false).any_enabled());
        assert!(TermFeatures::new(false, true).any_enabled());
        assert!(!TermFeatures::disabled().any_enabled());
    }
}
