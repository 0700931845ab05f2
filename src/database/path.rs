//! Logical catalog paths: absolute, `/`-separated, no trailing slash.
//! These never touch the real filesystem.

/// Normalizes a raw path: ensures a leading `/`, collapses repeated
/// separators, strips any trailing `/`. The root stays `/`.
pub fn normalize(p: &str) -> String {
    let trimmed = p.trim_end_matches('/');

    let mut out = String::with_capacity(trimmed.len() + 1);
    if !trimmed.starts_with('/') {
        out.push('/');
    }

    let mut prev_slash = false;
    for c in trimmed.chars() {
        if c == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        out.push(c);
    }

    if out.is_empty() {
        out.push('/');
    }
    out
}

/// The directory containing `path`, or `None` for the root (and for the
/// empty string).
pub fn parent_dir(path: &str) -> Option<&str> {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.rfind('/') {
        Some(0) => Some("/"),
        Some(i) => Some(&trimmed[..i]),
        None => None,
    }
}

/// The last component of `path`. Empty for directories written with a
/// trailing slash and for the root.
pub fn filename(path: &str) -> &str {
    if path.ends_with('/') {
        return "";
    }

    match path.rfind('/') {
        Some(i) => &path[i + 1..],
        None => path,
    }
}

pub fn join(dir: &str, name: &str) -> String {
    if dir.ends_with('/') {
        format!("{}{}", dir, name)
    } else {
        format!("{}/{}", dir, name)
    }
}

#[test]
fn test_normalize() {
    assert_eq!(normalize("/foo/bar"), "/foo/bar");
    assert_eq!(normalize("/foo/bar/"), "/foo/bar");
    assert_eq!(normalize("foo/bar"), "/foo/bar");
    assert_eq!(normalize("//foo//bar"), "/foo/bar");
    assert_eq!(normalize("/foo//"), "/foo");
    assert_eq!(normalize("/"), "/");
    assert_eq!(normalize("//"), "/");
    assert_eq!(normalize(""), "/");
}

#[test]
fn test_parent_dir() {
    assert_eq!(parent_dir("/foo/bar"), Some("/foo"));
    assert_eq!(parent_dir("/foo/bar/"), Some("/foo"));
    assert_eq!(parent_dir("/f/b"), Some("/f"));
    assert_eq!(parent_dir("/foo/"), Some("/"));
    assert_eq!(parent_dir("/foo"), Some("/"));
    assert_eq!(parent_dir("/"), None);
    assert_eq!(parent_dir(""), None);
}

#[test]
fn test_filename() {
    assert_eq!(filename("/foo/bar"), "bar");
    assert_eq!(filename("/foo/bar/"), "");
    assert_eq!(filename("/foo"), "foo");
    assert_eq!(filename("/"), "");
    assert_eq!(filename(""), "");
}

#[test]
fn test_join() {
    assert_eq!(join("/", "foo"), "/foo");
    assert_eq!(join("/foo", "bar"), "/foo/bar");
}
