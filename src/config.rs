/// Default maximum number of clauses a single AND expansion may produce.
pub const DEFAULT_LIMIT: usize = 100;

/// Configuration options for the DNF pipeline.
///
/// Use `DnfConfig::default()` for standard settings.
///
/// # Examples
///
/// ```
/// use ccs_dnf::config::DnfConfig;
///
/// let config = DnfConfig::default().with_limit(1000).with_flatten(false);
/// assert_eq!(config.limit, 1000);
/// assert!(!config.flatten);
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct DnfConfig {
    /// Maximum clause count of any single AND expansion (default: 100).
    ///
    /// This is not a bound on the whole tree.
    pub limit: usize,
    /// Whether to flatten the expression before conversion (default: true).
    pub flatten: bool,
}

impl Default for DnfConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            flatten: true,
        }
    }
}

impl DnfConfig {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_flatten(mut self, flatten: bool) -> Self {
        self.flatten = flatten;
        self
    }
}
