use super::*;

#[test]
fn known_categories_map_to_accents() {
    assert_eq!(color_for_category("technology"), "#6366f1");
    assert_eq!(color_for_category("business"), "#0ea5e9");
    assert_eq!(color_for_category("finance"), "#10b981");
    assert_eq!(color_for_category("industry news"), "#f59e0b");
    assert_eq!(color_for_category("startups"), "#8b5cf6");
}

#[test]
fn category_lookup_ignores_case() {
    assert_eq!(color_for_category("Technology"), "#6366f1");
    assert_eq!(color_for_category("INDUSTRY NEWS"), "#f59e0b");
}

#[test]
fn unknown_categories_fall_back_to_gray() {
    assert_eq!(color_for_category("sports"), FALLBACK_CATEGORY_COLOR);
    assert_eq!(color_for_category(""), FALLBACK_CATEGORY_COLOR);
}

#[test]
fn palette_matches_stylesheet() {
    assert_eq!(Palette::PRIMARY, "#6366f1");
    assert_eq!(Palette::ERROR, "#ef4444");
    assert_eq!(Palette::INFO, "#3b82f6");
}
