//! File URI construction for clickable links

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Make `path` absolute without touching the file system
///
/// Falls back to the path as given if the working directory is unavailable.
pub fn absolutize(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Build a `file://` URI for `path`
///
/// Relative paths are made absolute first. The raw path bytes are encoded,
/// so file names that are not valid UTF-8 keep distinct links. On Windows
/// backslashes become `/` and a leading drive letter gets the extra slash
/// (`file:///C:/...`). Every byte outside the RFC 3986 path characters is
/// percent-encoded, and so are `[` and `]`, which would otherwise end a
/// PlantUML link.
pub fn file_uri(path: &Path) -> String {
    let absolute = absolutize(path);
    let bytes = absolute.as_os_str().as_encoded_bytes();

    let mut uri = String::with_capacity(bytes.len() + 8);
    uri.push_str("file://");
    if !bytes.first().copied().is_some_and(is_separator) {
        uri.push('/');
    }
    for &byte in bytes {
        let byte = if is_separator(byte) { b'/' } else { byte };
        if is_path_byte(byte) {
            uri.push(byte as char);
        } else {
            let _ = write!(uri, "%{:02X}", byte);
        }
    }
    uri
}

/// `\` is only a separator on Windows; elsewhere it is a file-name byte
fn is_separator(byte: u8) -> bool {
    byte == b'/' || (cfg!(windows) && byte == b'\\')
}

fn is_path_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(
            byte,
            b'-' | b'.'
                | b'_'
                | b'~'
                | b'/'
                | b':'
                | b'@'
                | b'!'
                | b'$'
                | b'&'
                | b'\''
                | b'('
                | b')'
                | b'*'
                | b'+'
                | b','
                | b';'
                | b'='
        )
}
