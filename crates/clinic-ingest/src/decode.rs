//! Reading and decoding export files.

use std::path::Path;

use encoding_rs::{UTF_8, WINDOWS_1252};
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

/// Maximum export size loaded into memory (200 MB).
pub const MAX_EXPORT_FILE_SIZE: u64 = 200 * 1024 * 1024;

/// Export text together with the encoding it was decoded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding: &'static str,
}

/// Decodes export bytes.
///
/// A byte-order mark selects UTF-8 or UTF-16; without one the bytes are read
/// as UTF-8, falling back to Windows-1252 (the usual encoding of spreadsheet
/// exports on Brazilian Windows installs) when they are not valid UTF-8.
pub fn decode_export(bytes: &[u8]) -> DecodedText {
    let (text, encoding, had_errors) = UTF_8.decode(bytes);
    if had_errors && encoding == UTF_8 {
        let (text, _, _) = WINDOWS_1252.decode(bytes);
        warn!("export is not valid UTF-8, decoded as windows-1252");
        return DecodedText {
            text: text.into_owned(),
            encoding: WINDOWS_1252.name(),
        };
    }
    DecodedText {
        text: text.into_owned(),
        encoding: encoding.name(),
    }
}

/// Reads and decodes an export file.
pub fn read_export(path: &Path) -> Result<DecodedText> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::from_io(path, e))?;
    if metadata.len() > MAX_EXPORT_FILE_SIZE {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size: MAX_EXPORT_FILE_SIZE,
        });
    }
    let bytes = std::fs::read(path).map_err(|e| IngestError::from_io(path, e))?;
    let decoded = decode_export(&bytes);
    debug!(
        path = %path.display(),
        bytes = bytes.len(),
        encoding = decoded.encoding,
        "read export"
    );
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_decode_utf8_strips_bom() {
        let decoded = decode_export("\u{feff}Nome;Endereço\n".as_bytes());
        assert_eq!(decoded.text, "Nome;Endereço\n");
        assert_eq!(decoded.encoding, "UTF-8");
    }

    #[test]
    fn test_decode_falls_back_to_windows_1252() {
        // "João" with ã encoded as 0xE3.
        let decoded = decode_export(&[b'J', b'o', 0xE3, b'o']);
        assert_eq!(decoded.text, "João");
        assert_eq!(decoded.encoding, "windows-1252");
    }

    #[test]
    fn test_decode_utf16_bom() {
        let decoded = decode_export(&[0xFF, 0xFE, b'A', 0x00, b';', 0x00, b'B', 0x00]);
        assert_eq!(decoded.text, "A;B");
        assert_eq!(decoded.encoding, "UTF-16LE");
    }

    #[test]
    fn test_read_export() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "CPF;Nome\n1;Ana\n").unwrap();
        let decoded = read_export(file.path()).unwrap();
        assert_eq!(decoded.text, "CPF;Nome\n1;Ana\n");
    }

    #[test]
    fn test_read_export_missing_file() {
        let result = read_export(Path::new("/nope/pacientes.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
