#[cfg(feature = "tracing")]
macro_rules! ntrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "listnav", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ntrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! ndebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "listnav", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! ndebug {
    ($($tt:tt)*) => {};
}
