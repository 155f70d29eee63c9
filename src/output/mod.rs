pub mod formatter;

pub use formatter::{format_delta, format_report, format_score, meter_bar, should_use_colors};
