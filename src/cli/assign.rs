use fancy_regex::Regex;

const ASSIGN_PATTERN: &str = r"^([A-Za-z0-9._-]+)=(.+)$";

pub struct Assignment {
    pub key: String,
    pub value: String,
}

/// Parses one `key=value` argument. Keys are restricted to a filename-safe
/// alphabet; values may contain anything, including further `=` signs.
pub fn parse(raw: &str) -> Result<Assignment, String> {
    let re = Regex::new(ASSIGN_PATTERN)
        .map_err(|e| format!("invalid assignment pattern: {}", e))?;

    let caps = re
        .captures(raw)
        .map_err(|e| format!("could not match '{}': {}", raw, e))?
        .ok_or_else(|| format!("'{}' is not of the form key=value", raw))?;

    match (caps.get(1), caps.get(2)) {
        (Some(k), Some(v)) => Ok(Assignment {
            key: k.as_str().to_owned(),
            value: v.as_str().to_owned(),
        }),
        _ => Err(format!("'{}' is not of the form key=value", raw)),
    }
}

#[test]
fn test_parse_simple_assignment() {
    let a = parse("author=alice").unwrap();
    assert_eq!(a.key, "author");
    assert_eq!(a.value, "alice");
}

#[test]
fn test_value_may_contain_equals_signs() {
    let a = parse("formula=a=b+c").unwrap();
    assert_eq!(a.key, "formula");
    assert_eq!(a.value, "a=b+c");
}

#[test]
fn test_malformed_assignments_are_rejected() {
    assert!(parse("no-equals-sign").is_err());
    assert!(parse("=value").is_err());
    assert!(parse("key=").is_err());
    assert!(parse("bad key=value").is_err());
}
