//! Line-oriented text format of the backing file.
//!
//! One record per line, `<type> <location> <available>`, where `available`
//! is `1` for available and `0` for borrowed. There is no header and no
//! escaping, so neither `type` nor `location` may contain whitespace.

use crate::state::{BicycleRecord, BicycleType};

/// Result of decoding a backing file.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    pub records: Vec<BicycleRecord>,
    /// 1-based line number of the first malformed line, if decoding stopped
    /// on one.
    pub stopped_at: Option<usize>,
}

/// Parse a single line. Returns `None` unless the line holds exactly three
/// tokens with an allow-listed type and a `0`/`1` flag.
pub fn parse_line(line: &str) -> Option<BicycleRecord> {
    let mut tokens = line.split_whitespace();
    let kind = tokens.next()?.parse::<BicycleType>().ok()?;
    let location = tokens.next()?;
    let available = match tokens.next()? {
        "1" => true,
        "0" => false,
        _ => return None,
    };
    if tokens.next().is_some() {
        return None;
    }
    Some(BicycleRecord {
        kind,
        location: location.to_string(),
        available,
    })
}

/// Decode raw file bytes, keeping at most `capacity` records.
///
/// The first line that fails to parse ends decoding: it and everything after
/// it are dropped. A line that is not valid UTF-8 counts as malformed.
pub fn decode(content: &[u8], capacity: usize) -> Decoded {
    let mut decoded = Decoded::default();
    let body = content.strip_suffix(b"\n").unwrap_or(content);
    if body.is_empty() {
        return decoded;
    }
    for (number, raw) in body.split(|&b| b == b'\n').enumerate() {
        if decoded.records.len() >= capacity {
            break;
        }
        let line = std::str::from_utf8(raw).ok();
        match line.and_then(parse_line) {
            Some(record) => decoded.records.push(record),
            None => {
                decoded.stopped_at = Some(number + 1);
                break;
            }
        }
    }
    decoded
}

/// Serialize one record without the trailing newline.
pub fn format_record(record: &BicycleRecord) -> String {
    format!(
        "{} {} {}",
        record.kind,
        record.location,
        u8::from(record.available)
    )
}

/// Serialize the whole store, one line per record.
pub fn encode(records: &[BicycleRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&format_record(record));
        out.push('\n');
    }
    out
}
