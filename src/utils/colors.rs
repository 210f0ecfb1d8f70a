/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Approval status coloring for the `approval --status` view.
pub fn color_for_status(db_str: &str) -> &'static str {
    match db_str {
        "pending" => YELLOW,
        "approved" => GREEN,
        "rejected" => RED,
        _ => GREY,
    }
}
