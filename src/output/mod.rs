pub mod formatter;

pub use formatter::{
    format_deadline_line, format_percent, format_standings, format_tip_breakdown, should_use_colors,
};
