//! PLS playlist parsing
//!
//! Internet radio stations publish a small line-oriented text file with
//! `Key=value` entries; only the primary `File1=` entry names the live
//! stream endpoint. Nothing else in the file (`Title1`, `Length1`,
//! `NumberOfEntries`, ...) is interpreted here.

/// Scan a playlist body for the primary stream entry.
///
/// Lines are split on any of LF, CR or CRLF. The first line starting
/// with the literal prefix `File1=` wins and everything after the
/// prefix is returned verbatim; later `File2=`/`File3=` entries are
/// ignored by design.
pub fn first_stream_entry(content: &str) -> Option<&str> {
    content
        .split(['\n', '\r'])
        .find_map(|line| line.strip_prefix("File1="))
}
