//! Client-side reader for the header line of an uploaded CSV file.
//!
//! Only the first line is inspected and it is split on the literal comma.
//! Quoting and escaping are not supported; cells are returned exactly as they
//! appear, including surrounding whitespace and a trailing `\r` on files with
//! Windows line endings.

/// Splits the first line of `text` into column names.
///
/// An empty input yields a single empty column name, mirroring how the
/// browser reader behaves on an empty file.
pub fn parse_header(text: &str) -> Vec<String> {
    let first_line = text.split('\n').next().unwrap_or_default();
    first_line.split(',').map(str::to_string).collect()
}

/// Same as [`parse_header`] for raw file bytes. Invalid UTF-8 sequences are
/// replaced rather than rejected.
pub fn parse_header_bytes(bytes: &[u8]) -> Vec<String> {
    parse_header(&String::from_utf8_lossy(bytes))
}
