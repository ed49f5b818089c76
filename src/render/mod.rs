//! Output rendering (text report, JSON)

pub mod json;
pub mod report;

pub use json::render_json;
pub use report::format_report;
