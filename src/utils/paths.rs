//! Slash-normalised path helpers
//!
//! All package-relative paths are handled as strings with `/` separators, so
//! results are identical on every platform and can be used directly as map
//! keys and output values.

/// Join path segments with `/` without normalising them
pub fn join_paths(base: &str, rest: &str) -> String {
    if base.is_empty() {
        return rest.to_string();
    }
    if base.ends_with('/') {
        format!("{}{}", base, rest)
    } else {
        format!("{}/{}", base, rest)
    }
}

/// Collapse `.` and `name/..` segments.
///
/// Leading `..` segments are kept, a trailing slash is kept, and an empty
/// result renders as `.`.
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let absolute = path.starts_with('/');
    let trailing_slash = path.ends_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if absolute => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let mut normalized = segments.join("/");
    if absolute {
        normalized.insert(0, '/');
    }
    if normalized.is_empty() {
        normalized.push('.');
    }
    if trailing_slash && !normalized.ends_with('/') {
        normalized.push('/');
    }
    normalized
}

/// Directory part of a path; `.` for a bare file name
pub fn dirname(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) => "/",
        Some(index) => &trimmed[..index],
        None => ".",
    }
}

/// Final segment of a path
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(index) => &trimmed[index + 1..],
        None => trimmed,
    }
}

/// Replace platform separators with `/`
pub fn normalize_slashes(path: &str) -> String {
    path.replace('\\', "/")
}

pub fn has_windows_slashes(path: &str) -> bool {
    path.contains('\\')
}

/// Whether a normalised path points outside the directory it is relative to
pub fn escapes_root(normalized: &str) -> bool {
    normalized == ".." || normalized.starts_with("../") || normalized.starts_with('/')
}
