//! Brand palette and category accent colors.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Brand colors shared with the stylesheet.
pub struct Palette;

impl Palette {
    pub const PRIMARY: &'static str = "#6366f1";
    pub const SECONDARY: &'static str = "#0ea5e9";
    pub const SUCCESS: &'static str = "#10b981";
    pub const ERROR: &'static str = "#ef4444";
    pub const WARNING: &'static str = "#f59e0b";
    pub const INFO: &'static str = "#3b82f6";
}

/// Accent for categories without an assigned color.
pub const FALLBACK_CATEGORY_COLOR: &str = "#6b7280";

/// Accent color for a feed category name (case-insensitive).
pub fn color_for_category(name: &str) -> &'static str {
    match name.trim().to_lowercase().as_str() {
        "technology" => "#6366f1",
        "business" => "#0ea5e9",
        "finance" => "#10b981",
        "industry news" => "#f59e0b",
        "startups" => "#8b5cf6",
        _ => FALLBACK_CATEGORY_COLOR,
    }
}
