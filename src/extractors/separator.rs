// src/extractors/separator.rs

// --- Constants ---
// First byte value that starts a multi-byte UTF-8 sequence
const MULTI_BYTE_START: u8 = 0x80;
// Minimum run of hyphens that makes a separator line
const MIN_HYPHENS: usize = 3;
const MAX_UTF8_WIDTH: usize = 4;

/// Returns true when `line` (no embedded newline) is a frontmatter separator:
/// optional whitespace, three or more `-`, optional whitespace, nothing else.
///
/// Whitespace is the ASCII space or any multi-byte code point classified as
/// Unicode whitespace. Other ASCII controls such as tab or carriage return
/// disqualify the line.
pub fn is_separator_line(line: &[u8]) -> bool {
    // Leading zone: a non-whitespace character just ends it
    let mut idx = skip_whitespace(line, 0);

    let hyphens_start = idx;
    while idx < line.len() && line[idx] == b'-' {
        idx += 1;
    }
    if idx - hyphens_start < MIN_HYPHENS {
        return false;
    }

    // Trailing zone: anything but whitespace disqualifies
    skip_whitespace(line, idx) == line.len()
}

/// Advances past a run of separator whitespace starting at `idx`.
fn skip_whitespace(line: &[u8], mut idx: usize) -> usize {
    while idx < line.len() {
        match whitespace_width(&line[idx..]) {
            Some(width) => idx += width,
            None => break,
        }
    }
    idx
}

/// Byte width of the whitespace character at the start of `rest`, or `None`
/// if it starts with anything else.
fn whitespace_width(rest: &[u8]) -> Option<usize> {
    let first = *rest.first()?;
    if first < MULTI_BYTE_START {
        return (first == b' ').then_some(1);
    }
    match decode_char(rest) {
        Some(c) if c.is_whitespace() => Some(c.len_utf8()),
        _ => None,
    }
}

/// Decodes the UTF-8 code point at the start of `bytes`. Invalid or truncated
/// sequences yield `None`.
fn decode_char(bytes: &[u8]) -> Option<char> {
    let window = &bytes[..bytes.len().min(MAX_UTF8_WIDTH)];
    let valid = match std::str::from_utf8(window) {
        Ok(s) => s,
        // valid_up_to always lands on a char boundary
        Err(e) => std::str::from_utf8(&window[..e.valid_up_to()]).unwrap_or_default(),
    };
    valid.chars().next()
}

/// Finds the line starting at `start`. Returns the offset where the line ends
/// (exclusive, newline not included) and the offset where the next line starts.
/// A final line without a newline ends, and continues, at end of input.
pub(crate) fn next_line(contents: &[u8], start: usize) -> (usize, usize) {
    match contents[start..].iter().position(|&b| b == b'\n') {
        Some(pos) => (start + pos, start + pos + 1),
        None => (contents.len(), contents.len()),
    }
}
