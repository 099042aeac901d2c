/// Validates a caller-supplied file name for writing inside the working directory.
///
/// Checks:
/// - Non-empty
/// - No path separators (/, \)
/// - Not "." or ".."
/// - Does not start with '.' (hidden files, `.git`)
/// - No null bytes
pub fn validate_file_name(name: &str) -> bool {
    if name.is_empty() || name.starts_with('.') {
        return false;
    }
    if name.contains('/') || name.contains('\\') || name.contains('\0') {
        return false;
    }
    name != "." && name != ".."
}
