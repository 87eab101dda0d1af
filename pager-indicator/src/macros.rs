#[cfg(feature = "tracing")]
macro_rules! ntrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "pager_indicator", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ntrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! ndebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "pager_indicator", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ndebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! nwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "pager_indicator", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! nwarn {
    ($($tt:tt)*) => {};
}
