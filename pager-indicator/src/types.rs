/// The scroll phase reported by the host pager.
///
/// Raw codes follow the common paging-view convention: `0` idle, `1` dragging, `2` settling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollPhase {
    #[default]
    Idle,
    /// The user is actively dragging the pager.
    Dragging,
    /// The pager is animating towards its final page after a release or a programmatic scroll.
    Settling,
}

impl ScrollPhase {
    pub const IDLE: i32 = 0;
    pub const DRAGGING: i32 = 1;
    pub const SETTLING: i32 = 2;

    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            Self::IDLE => Some(Self::Idle),
            Self::DRAGGING => Some(Self::Dragging),
            Self::SETTLING => Some(Self::Settling),
            _ => None,
        }
    }

    pub fn as_raw(self) -> i32 {
        match self {
            Self::Idle => Self::IDLE,
            Self::Dragging => Self::DRAGGING,
            Self::Settling => Self::SETTLING,
        }
    }

    pub fn is_idle(self) -> bool {
        self == Self::Idle
    }
}

/// Per-index tracking kept by the normalizer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexState {
    /// Whether `on_deselected` was the last selection notification for this index.
    pub deselected: bool,
    /// Fraction of the leave transition already reported (`0.0` = fully entered, `1.0` = fully
    /// left).
    pub leave_fraction: f32,
}

/// A value form of the [`crate::NavigatorListener`] callbacks.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndicatorEvent {
    Selected {
        index: usize,
        total_count: usize,
    },
    Deselected {
        index: usize,
        total_count: usize,
    },
    Enter {
        index: usize,
        total_count: usize,
        fraction: f32,
        left_to_right: bool,
    },
    Leave {
        index: usize,
        total_count: usize,
        fraction: f32,
        left_to_right: bool,
    },
}

impl IndicatorEvent {
    pub fn index(&self) -> usize {
        match *self {
            Self::Selected { index, .. }
            | Self::Deselected { index, .. }
            | Self::Enter { index, .. }
            | Self::Leave { index, .. } => index,
        }
    }

    pub fn total_count(&self) -> usize {
        match *self {
            Self::Selected { total_count, .. }
            | Self::Deselected { total_count, .. }
            | Self::Enter { total_count, .. }
            | Self::Leave { total_count, .. } => total_count,
        }
    }

    /// The transition fraction for enter/leave events, `None` for selection events.
    pub fn fraction(&self) -> Option<f32> {
        match *self {
            Self::Enter { fraction, .. } | Self::Leave { fraction, .. } => Some(fraction),
            Self::Selected { .. } | Self::Deselected { .. } => None,
        }
    }
}
