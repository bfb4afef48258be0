//! Severity-classified transient notifications.
//!
//! # Responsibility
//! - Render user-facing action feedback on the terminal.
//! - Map severity to process exit status for scripting.
//!
//! # Invariants
//! - Success/info lines go to stdout; warning/error lines go to stderr
//!   so piped list output stays clean.

/// Notification severity, mirroring the store's outcome classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
    Info,
}

impl Severity {
    /// Stable label prefixed to every notification line.
    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    /// Exit status for the process once the notification is shown.
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Success | Self::Info => 0,
            Self::Warning => 1,
            Self::Error => 2,
        }
    }
}

/// Prints one transient notification line and hands the severity back
/// for exit-status mapping.
pub fn notify(severity: Severity, message: &str) -> Severity {
    match severity {
        Severity::Success | Severity::Info => println!("{}: {message}", severity.label()),
        Severity::Warning | Severity::Error => eprintln!("{}: {message}", severity.label()),
    }
    severity
}
