// crates/graysim-core/src/decode/pgm.rs

use crate::decode::read_file;
use crate::error::{Result, SimError};
use crate::sample::{BitDepth, ImageSample};

const MAGIC: &str = "P5";

/// P5 layout:
/// magic line            "P5"
/// comment lines         zero or more, first byte '#'
/// dimension line        "<width> <height>"
/// maxval token          single integer, then exactly one separator byte
/// payload               width*height raw bytes, row-major
///
/// The declared maxval is validated as a positive integer and then ignored;
/// payload bytes are used as-is even when maxval != 255.
pub fn decode(path: &str) -> Result<ImageSample> {
    let bytes = read_file(path)?;
    parse(&bytes, path)
}

fn parse(bytes: &[u8], path: &str) -> Result<ImageSample> {
    let mut i = 0usize;

    let magic = read_line(bytes, &mut i);
    if magic != MAGIC {
        return Err(format_err(path, "missing P5 magic"));
    }

    // Skip-while on comment lines; the first non-comment line is the header.
    let mut header = read_line(bytes, &mut i);
    while header.as_bytes().first() == Some(&b'#') {
        header = read_line(bytes, &mut i);
    }

    let mut fields = header.split_whitespace();
    let width = parse_dim(fields.next(), path, "width")?;
    let height = parse_dim(fields.next(), path, "height")?;

    // Maxval is validated, then deliberately ignored: payload bytes are
    // used verbatim even when the header declares something other than 255.
    let maxval = read_token(bytes, &mut i);
    match maxval.parse::<u32>() {
        Ok(v) if v > 0 => {}
        _ => return Err(format_err(path, "unparsable maxval")),
    }

    // Exactly one separator byte sits between maxval and the payload.
    if i >= bytes.len() {
        return Err(format_err(path, "missing separator after maxval"));
    }
    i += 1;

    let count = (width as usize) * (height as usize);
    let available = bytes.len() - i;
    if available < count {
        return Err(SimError::TruncatedData {
            path: path.into(),
            expected: count,
            actual: available,
        });
    }

    let samples = bytes[i..i + count].iter().map(|&b| b as f64).collect();
    Ok(ImageSample::new(width, height, BitDepth::Eight, samples))
}

/// Encode samples as a minimal P5 stream (maxval 255, one `\n` separator).
/// Values are truncated to bytes; inputs are expected to be 8-bit samples.
pub fn encode(image: &ImageSample) -> Vec<u8> {
    let header = format!("{}\n{} {}\n255\n", MAGIC, image.width(), image.height());
    let mut out = Vec::with_capacity(header.len() + image.len());
    out.extend_from_slice(header.as_bytes());
    out.extend(image.samples().iter().map(|&v| v as u8));
    out
}

fn parse_dim(field: Option<&str>, path: &str, name: &str) -> Result<u32> {
    field
        .and_then(|s| s.parse::<i64>().ok())
        .filter(|&v| v > 0 && v <= u32::MAX as i64)
        .map(|v| v as u32)
        .ok_or_else(|| format_err(path, &format!("unparsable {name} in header")))
}

fn format_err(path: &str, reason: &str) -> SimError {
    SimError::Format {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Consume up to and including the next `\n`; returns the line without the
/// terminator (and without a trailing `\r` if present).
fn read_line(bytes: &[u8], i: &mut usize) -> String {
    let start = *i;
    while *i < bytes.len() && bytes[*i] != b'\n' {
        *i += 1;
    }
    let mut end = *i;
    if *i < bytes.len() {
        *i += 1; // consume the newline
    }
    if end > start && bytes[end - 1] == b'\r' {
        end -= 1;
    }
    String::from_utf8_lossy(&bytes[start..end]).into_owned()
}

/// Skip leading whitespace, then consume one whitespace-delimited token.
/// The delimiter after the token is left in place for the separator rule.
fn read_token(bytes: &[u8], i: &mut usize) -> String {
    while *i < bytes.len() && bytes[*i].is_ascii_whitespace() {
        *i += 1;
    }
    let start = *i;
    while *i < bytes.len() && !bytes[*i].is_ascii_whitespace() {
        *i += 1;
    }
    String::from_utf8_lossy(&bytes[start..*i]).into_owned()
}
