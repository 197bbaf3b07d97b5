//! Debug diagnostics sink

/// Receiver for debug diagnostics, only fed when [`crate::Options::debug`] is set
pub trait DebugSink {
    /// Record one diagnostic line
    fn debug(&self, message: &str);
}

/// Forwards diagnostics to the `log` facade under the `hilite` target
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DebugSink for LogSink {
    fn debug(&self, message: &str) {
        log::debug!(target: "hilite", "{message}");
    }
}

/// Discards diagnostics
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl DebugSink for NoopSink {
    fn debug(&self, _message: &str) {}
}

impl<F: Fn(&str)> DebugSink for F {
    fn debug(&self, message: &str) {
        self(message)
    }
}
