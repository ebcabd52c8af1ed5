/// Checks if a preference key matches a given pattern
///
/// # Arguments
/// * `key` - The actual preference key
/// * `pattern` - The pattern to match against (supports "*" as wildcard)
///
/// # Examples
/// * `"show_seconds"` matches `"show_seconds"`
/// * `"show_seconds"` matches `"show_*"`
/// * `"show_seconds"` matches `"*"`
pub(super) fn key_matches(key: &str, pattern: &str) -> bool {
    const WILDCARD: char = '*';

    if pattern == "*" {
        return true;
    }

    match pattern.split_once(WILDCARD) {
        None => key == pattern,
        Some((prefix, suffix)) => {
            key.len() >= prefix.len() + suffix.len()
                && key.starts_with(prefix)
                && key_matches_suffix(&key[prefix.len()..], suffix)
        }
    }
}

fn key_matches_suffix(rest: &str, suffix_pattern: &str) -> bool {
    if suffix_pattern.contains('*') {
        (0..=rest.len())
            .filter(|i| rest.is_char_boundary(*i))
            .any(|i| key_matches(&rest[i..], suffix_pattern))
    } else {
        rest.ends_with(suffix_pattern)
    }
}
