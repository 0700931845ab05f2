//! Hex codec for content hashes. The store keeps raw bytes; hex only exists
//! at the terminal boundary.

const DIGITS: &[u8; 16] = b"0123456789abcdef";

pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(DIGITS[(b >> 4) as usize] as char);
        out.push(DIGITS[(b & 0xf) as usize] as char);
    }
    out
}

/// Accepts any non-empty, even-length hex string, upper- or lowercase.
pub fn decode(s: &str) -> Option<Vec<u8>> {
    if s.is_empty() || s.len() % 2 != 0 || !s.is_ascii() {
        return None;
    }

    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len() / 2);
    for pair in bytes.chunks(2) {
        let hi = (pair[0] as char).to_digit(16)?;
        let lo = (pair[1] as char).to_digit(16)?;
        out.push((hi * 16 + lo) as u8);
    }
    Some(out)
}

#[test]
fn test_encode() {
    assert_eq!(encode(&[]), "");
    assert_eq!(encode(&[0x00, 0xff, 0x1a]), "00ff1a");
}

#[test]
fn test_decode() {
    assert_eq!(decode("00ff1a"), Some(vec![0x00, 0xff, 0x1a]));
    assert_eq!(decode("00FF1A"), Some(vec![0x00, 0xff, 0x1a]));
    assert_eq!(decode(""), None);
    assert_eq!(decode("abc"), None);
    assert_eq!(decode("zz"), None);
}

#[test]
fn test_roundtrip() {
    let digest: Vec<u8> = (0..=255).collect();
    assert_eq!(decode(&encode(&digest)), Some(digest));
}
