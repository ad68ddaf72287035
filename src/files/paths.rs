//! Label derivation for slash-separated remote paths.
//!
//! Paths here belong to the managed server, not the local machine, so they
//! are handled as plain `/`-separated strings instead of `std::path::Path`.

/// Last path segment, or the whole path when the last segment is empty.
///
/// Used as the display name of an editor tab.
pub fn file_name(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => path,
    }
}

/// Display label for a browsing directory: its last segment, or `/` for root.
pub fn dir_label(path: &str) -> String {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .last()
        .map(str::to_string)
        .unwrap_or_else(|| "/".to_string())
}

/// Join a directory and an entry name with exactly one separator.
pub fn join_path(dir: &str, name: &str) -> String {
    let dir = dir.trim_end_matches('/');
    let name = name.trim_start_matches('/');
    format!("{}/{}", dir, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("/etc/hosts"), "hosts");
        assert_eq!(file_name("hosts"), "hosts");
        assert_eq!(file_name("/etc/"), "/etc/");
        assert_eq!(file_name("/"), "/");
    }

    #[test]
    fn test_dir_label() {
        assert_eq!(dir_label("/"), "/");
        assert_eq!(dir_label(""), "/");
        assert_eq!(dir_label("/opt"), "opt");
        assert_eq!(dir_label("/www/wwwroot/"), "wwwroot");
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("/opt", "a.txt"), "/opt/a.txt");
        assert_eq!(join_path("/opt/", "a.txt"), "/opt/a.txt");
        assert_eq!(join_path("/", "etc"), "/etc");
    }
}
