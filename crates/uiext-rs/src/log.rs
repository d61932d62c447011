// crates/uiext-rs/src/log.rs

use std::fmt::Display;

/// Trait for values that provide a context prefix for log lines
pub trait LogMetadata {
    fn meta(&self) -> String;
}

/// Context of a single element being built or written.
pub struct LogContext<'a> {
    pub stage: &'static str,
    pub kind: &'a str,
}

impl LogMetadata for LogContext<'_> {
    fn meta(&self) -> String {
        format!("{} kind={}", self.stage, self.kind)
    }
}

impl<T: Display> LogMetadata for (&'static str, T) {
    fn meta(&self) -> String {
        format!("{}={}", self.0, self.1)
    }
}

// =============================================
// Logging Macros (namespaced under crate::log)
// =============================================

// ===== my_debug! =====
macro_rules! my_debug {
    ($ctx:expr, $fmt:literal $(, $($arg:tt)+)?) => {{
        let meta = $crate::log::LogMetadata::meta(&$ctx);
        ::log::debug!(concat!("[{}] ", $fmt), meta $(, $($arg)+)?);
    }};
    ($fmt:literal $(, $($arg:tt)+)?) => {{
        ::log::debug!($fmt $(, $($arg)+)?);
    }};
}

// ===== my_trace! =====
macro_rules! my_trace {
    ($ctx:expr, $fmt:literal $(, $($arg:tt)+)?) => {{
        let meta = $crate::log::LogMetadata::meta(&$ctx);
        ::log::trace!(concat!("[{}] ", $fmt), meta $(, $($arg)+)?);
    }};
    ($fmt:literal $(, $($arg:tt)+)?) => {{
        ::log::trace!($fmt $(, $($arg)+)?);
    }};
}

pub(crate) use my_debug;
pub(crate) use my_trace;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_context_meta() {
        let ctx = LogContext {
            stage: "build",
            kind: "Button",
        };
        assert_eq!(ctx.meta(), "build kind=Button");
    }

    #[test]
    fn test_pair_meta() {
        assert_eq!(("depth", 3).meta(), "depth=3");
    }
}
