//! Keyboard mapping for carousel navigation.

/// Arrow keys step the carousel: left is previous, right is next.
#[inline]
pub fn nav_delta_for_key(key: &str) -> Option<i64> {
    match key {
        "ArrowLeft" => Some(-1),
        "ArrowRight" => Some(1),
        _ => None,
    }
}

/// Keys that activate a focused chip like a click.
#[inline]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Global shortcuts stay out of the way while the user is typing.
#[inline]
pub fn is_text_entry_tag(tag_name: &str) -> bool {
    tag_name.eq_ignore_ascii_case("input") || tag_name.eq_ignore_ascii_case("textarea")
}
