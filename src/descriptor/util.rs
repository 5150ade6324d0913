/// Treat whitespace-only values the same as empty ones.
pub(super) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
