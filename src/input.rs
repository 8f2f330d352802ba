use crate::error::AnalysisError;

/// Decode raw document bytes as UTF-8.
///
/// A leading byte-order mark is dropped. Invalid UTF-8 is an error; nothing
/// is analyzed from a partially decoded document.
pub fn decode(bytes: Vec<u8>) -> Result<String, AnalysisError> {
    let mut text = String::from_utf8(bytes)?;
    if text.starts_with('\u{feff}') {
        text.remove(0);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_valid_text() {
        assert_eq!(decode(b"We track you.".to_vec()).unwrap(), "We track you.");
    }

    #[test]
    fn test_decode_strips_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("cookies".as_bytes());
        assert_eq!(decode(bytes).unwrap(), "cookies");
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let err = decode(vec![b'o', b'k', 0xFF, 0xFE]).unwrap_err();
        assert!(matches!(err, AnalysisError::InputDecoding(_)));
    }
}
