use crate::ScrollPhase;

/// A lightweight, serializable snapshot of the normalizer's scalar state.
///
/// Per-index tracking is not part of the snapshot: restoring a snapshot starts every index fresh,
/// the same way [`crate::ScrollEventNormalizer::configure`] does. The next settle sample (a scroll
/// sample delivered while idle) re-establishes the terminal states.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalizerState {
    pub total_count: usize,
    pub current_index: usize,
    pub previous_index: usize,
    /// `position + offset` of the last accepted scroll sample.
    pub last_position_sum: f32,
    pub scroll_phase: ScrollPhase,
    pub skim_over: bool,
}
