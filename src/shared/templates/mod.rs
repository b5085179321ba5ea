//! Text templates for outgoing messages.
//!
//! Templates live in `templates/` at the crate root and are embedded at
//! compile time, so rendering does not depend on the working directory.

pub mod engine;

pub use engine::{render_template, TemplateError};

/// Plain-text body of the administrator notification for a new report
pub const REPORT_NOTIFICATION: &str = "mail/report_notification.txt";
