/// The default maximal number of arguments.
pub const DEFAULT_MAX_ARGUMENTS: usize = 1 << 20;

/// The default maximal argument depth.
pub const DEFAULT_MAX_DEPTH: usize = 1 << 10;

/// The settings of a [`Reasoner`](crate::reasoner::Reasoner).
///
/// # Example
///
/// ```
/// # use scarab::reasoner::ReasonerConfig;
/// let config = ReasonerConfig::default()
///     .with_max_arguments(1000)
///     .with_strict_consistency_check(true);
/// assert_eq!(1000, config.max_arguments());
/// assert!(config.check_strict_consistency());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReasonerConfig {
    max_arguments: usize,
    max_depth: usize,
    check_strict_consistency: bool,
}

impl Default for ReasonerConfig {
    fn default() -> Self {
        ReasonerConfig {
            max_arguments: DEFAULT_MAX_ARGUMENTS,
            max_depth: DEFAULT_MAX_DEPTH,
            check_strict_consistency: false,
        }
    }
}

impl ReasonerConfig {
    /// Sets the maximal number of arguments that may be built.
    pub fn with_max_arguments(mut self, max_arguments: usize) -> Self {
        self.max_arguments = max_arguments;
        self
    }

    /// Sets the maximal depth of the arguments that may be built.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets whether conflicting strict arguments must be reported as an error (instead of a warning).
    pub fn with_strict_consistency_check(mut self, check: bool) -> Self {
        self.check_strict_consistency = check;
        self
    }

    /// Returns the maximal number of arguments that may be built.
    pub fn max_arguments(&self) -> usize {
        self.max_arguments
    }

    /// Returns the maximal depth of the arguments that may be built.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns `true` iff conflicting strict arguments must be reported as an error.
    pub fn check_strict_consistency(&self) -> bool {
        self.check_strict_consistency
    }
}
