//! H3C vendor payloads carried inside EAP type-data
//!
//! ## Integrity challenge (code 10)
//!
//! ```text
//! offset 0..3   opaque
//! offset 3      sub-message marker (0x35 = integrity challenge)
//! offset 4..36  challenge
//! ```
//!
//! ## Failure message (code 4, type 9)
//!
//! ```text
//! offset 0      length of message + terminator
//! offset 1..    message, GBK encoded
//! last          0x00 terminator
//! ```

use encoding_rs::GBK;
use h3cauth_core::{Error, Result};

use super::constants::*;

/// Challenge field of an H3C integrity challenge, borrowed from the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegrityChallenge<'a> {
    /// Challenge bytes handed to the credential provider
    pub challenge: &'a [u8],
}

impl<'a> IntegrityChallenge<'a> {
    /// Extract the challenge from vendor type-data.
    ///
    /// Returns `Ok(None)` when the marker byte is absent or different, and a
    /// decode error when the marker is present but the challenge is cut
    /// short.
    pub fn parse(type_data: &'a [u8]) -> Result<Option<Self>> {
        let marker = match type_data.get(H3C_INTEGRITY_CHALLENGE_HEADER - 1) {
            Some(&marker) => marker,
            None => return Ok(None),
        };

        if marker != H3C_INTEGRITY_CHALLENGE_MARKER {
            return Ok(None);
        }

        let end = H3C_INTEGRITY_CHALLENGE_HEADER + H3C_INTEGRITY_CHALLENGE_LENGTH;
        if type_data.len() < end {
            return Err(Error::decode(format!(
                "H3C integrity challenge truncated: got {} bytes, expected {}",
                type_data.len(),
                end
            )));
        }

        Ok(Some(Self {
            challenge: &type_data[H3C_INTEGRITY_CHALLENGE_HEADER..end],
        }))
    }
}

/// Decode the server message of an H3C MD5-failure.
///
/// The length byte counts the text plus its terminator; the terminator
/// itself may be missing. Returns `None` when the length byte is absent,
/// zero, or points past the end of the type-data. Invalid GBK sequences
/// come back as U+FFFD.
pub fn decode_failure_message(type_data: &[u8]) -> Option<String> {
    let size = *type_data.get(H3C_FAILURE_LENGTH_OFFSET)? as usize;
    if size == 0 {
        return None;
    }

    let text_start = H3C_FAILURE_LENGTH_OFFSET + 1;
    let text_end = text_start + size - 1;
    let text = type_data.get(text_start..text_end)?;

    let (decoded, _had_errors) = GBK.decode_without_bom_handling(text);
    Some(decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    // "你好" in GBK
    const NI_HAO_GBK: [u8; 4] = [0xC4, 0xE3, 0xBA, 0xC3];

    fn integrity_payload(marker: u8) -> Vec<u8> {
        let mut data = vec![0x01, 0x02, 0x03, marker];
        data.extend((0..32).map(|i| i as u8));
        data
    }

    #[test]
    fn test_integrity_challenge_extracted() {
        let data = integrity_payload(H3C_INTEGRITY_CHALLENGE_MARKER);
        let challenge = IntegrityChallenge::parse(&data).unwrap().unwrap();
        assert_eq!(challenge.challenge.len(), H3C_INTEGRITY_CHALLENGE_LENGTH);
        assert_eq!(challenge.challenge[0], 0);
        assert_eq!(challenge.challenge[31], 31);
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let mut data = integrity_payload(H3C_INTEGRITY_CHALLENGE_MARKER);
        data.extend_from_slice(&[0xFF; 8]);
        let challenge = IntegrityChallenge::parse(&data).unwrap().unwrap();
        assert!(!challenge.challenge.contains(&0xFF));
    }

    #[test]
    fn test_other_marker_is_not_a_challenge() {
        let data = integrity_payload(0x2B);
        assert_eq!(IntegrityChallenge::parse(&data).unwrap(), None);
    }

    #[test]
    fn test_short_type_data_is_not_a_challenge() {
        assert_eq!(IntegrityChallenge::parse(&[0x00, 0x35]).unwrap(), None);
    }

    #[test]
    fn test_truncated_challenge_is_decode_error() {
        let mut data = integrity_payload(H3C_INTEGRITY_CHALLENGE_MARKER);
        data.truncate(20);
        assert!(matches!(IntegrityChallenge::parse(&data), Err(Error::Decode(_))));
    }

    #[test]
    fn test_failure_message_gbk() {
        let mut data = vec![5];
        data.extend_from_slice(&NI_HAO_GBK);
        data.push(0);
        assert_eq!(decode_failure_message(&data).as_deref(), Some("你好"));
    }

    #[test]
    fn test_failure_message_without_terminator() {
        let mut data = vec![5];
        data.extend_from_slice(&NI_HAO_GBK);
        assert_eq!(decode_failure_message(&data).as_deref(), Some("你好"));
    }

    #[test]
    fn test_failure_message_ascii() {
        let data = b"\x0fuser not found\x00";
        assert_eq!(
            decode_failure_message(data).as_deref(),
            Some("user not found")
        );
    }

    #[test]
    fn test_failure_message_empty_text() {
        assert_eq!(decode_failure_message(&[1, 0]).as_deref(), Some(""));
    }

    #[test]
    fn test_failure_message_malformed() {
        assert_eq!(decode_failure_message(&[]), None);
        assert_eq!(decode_failure_message(&[0]), None);
        assert_eq!(decode_failure_message(&[10, b'a', b'b']), None);
    }
}
