//! File name sanitizing

/// Characters that are not allowed in a path segment on common filesystems.
pub const FORBIDDEN_CHARS: [char; 9] = [':', '/', '\\', '?', '*', '<', '>', '|', '"'];

/// Sanitize a display name for use as a file or directory name.
///
/// Each forbidden character becomes `_`. Everything else, including
/// spaces, dots and non-ASCII text, is kept as is. There is no length limit
/// and no collision handling: two names that differ only in forbidden
/// characters map to the same segment.
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    name.replace(FORBIDDEN_CHARS, "_")
}
