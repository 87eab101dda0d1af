#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::IndexState;

/// Per-index tracking, created lazily. Missing entries read as `IndexState::default()`.
#[cfg(feature = "std")]
pub(crate) type IndexStateMap = HashMap<usize, IndexState>;
#[cfg(not(feature = "std"))]
pub(crate) type IndexStateMap = BTreeMap<usize, IndexState>;
