//! Turning standard-input lines into root paths.

use std::path::{Component, Path, PathBuf};

/// Converts one raw input line into a path, trimming trailing whitespace
/// and the line terminator. Returns `None` for blank lines.
pub fn parse_line(raw: &[u8]) -> Option<PathBuf> {
    let end = raw
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(0, |i| i + 1);
    let trimmed = &raw[..end];
    if trimmed.is_empty() {
        return None;
    }
    Some(bytes_to_path(trimmed))
}

#[cfg(unix)]
fn bytes_to_path(bytes: &[u8]) -> PathBuf {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
fn bytes_to_path(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}

/// Makes `path` absolute against `cwd` and removes `.` and `..` components
/// lexically, without touching the filesystem (symlinks are not resolved).
pub fn resolve_root(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_trims_newline_and_trailing_spaces() {
        assert_eq!(parse_line(b"/data/in \t\r\n"), Some(PathBuf::from("/data/in")));
    }

    #[test]
    fn parse_line_keeps_leading_spaces() {
        assert_eq!(parse_line(b"  dossier\n"), Some(PathBuf::from("  dossier")));
    }

    #[test]
    fn parse_line_blank_is_none() {
        assert_eq!(parse_line(b"\n"), None);
        assert_eq!(parse_line(b"   \r\n"), None);
        assert_eq!(parse_line(b""), None);
    }

    #[test]
    fn parse_line_keeps_inner_spaces_and_unicode() {
        assert_eq!(
            parse_line("Mes Photos/Été 2014\n".as_bytes()),
            Some(PathBuf::from("Mes Photos/Été 2014"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn resolve_root_relative_joins_cwd() {
        assert_eq!(
            resolve_root(Path::new("a/b"), Path::new("/home/user")),
            PathBuf::from("/home/user/a/b")
        );
    }

    #[cfg(unix)]
    #[test]
    fn resolve_root_absolute_ignores_cwd() {
        assert_eq!(
            resolve_root(Path::new("/srv/data"), Path::new("/home/user")),
            PathBuf::from("/srv/data")
        );
    }

    #[cfg(unix)]
    #[test]
    fn resolve_root_removes_dot_components() {
        assert_eq!(
            resolve_root(Path::new("./a/../b/./c"), Path::new("/home/user")),
            PathBuf::from("/home/user/b/c")
        );
        assert_eq!(
            resolve_root(Path::new(".."), Path::new("/home/user")),
            PathBuf::from("/home")
        );
    }

    #[cfg(unix)]
    #[test]
    fn resolve_root_does_not_climb_above_root() {
        assert_eq!(
            resolve_root(Path::new("/../.."), Path::new("/x")),
            PathBuf::from("/")
        );
    }
}
