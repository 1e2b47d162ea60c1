//! Filename seed sanitization for proxied downloads.

/// Replaces every character outside `[A-Za-z0-9._-]` with `_`.
///
/// Each offending character becomes exactly one underscore; runs are not
/// collapsed, so the output has as many characters as the input.
pub fn sanitize_filename_seed(seed: &str) -> String {
    seed.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
