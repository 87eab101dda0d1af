/// Configuration for [`crate::ScrollEventNormalizer`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizerOptions {
    /// Number of indicator items (usually the pager's page count).
    pub total_count: usize,
    /// When set, enter/leave notifications are dispatched for every index, not only for the
    /// current page and its neighbors.
    pub skim_over: bool,
}

impl NormalizerOptions {
    pub fn new(total_count: usize) -> Self {
        Self {
            total_count,
            skim_over: false,
        }
    }

    pub fn with_total_count(mut self, total_count: usize) -> Self {
        self.total_count = total_count;
        self
    }

    pub fn with_skim_over(mut self, skim_over: bool) -> Self {
        self.skim_over = skim_over;
        self
    }
}
