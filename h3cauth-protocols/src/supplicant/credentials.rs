//! Challenge computation
//!
//! The state machine hands every server challenge to a
//! [`CredentialProvider`] and treats the returned bytes as opaque.
//! [`Md5Credentials`] is the stock provider: the RFC 1994 style MD5
//! response, with the H3C integrity computation plugged in separately.

use h3cauth_core::{Error, Result};

use crate::dot1x::constants::MD5_RESPONSE_SIZE;

/// Everything an MD5-Challenge response may depend on
#[derive(Debug, Clone, Copy)]
pub struct Md5Request<'a> {
    /// Identifier of the request, mixed into the digest
    pub identifier: u8,
    /// Raw type-data of the request
    pub challenge: &'a [u8],
    pub username: &'a str,
    pub password: &'a str,
    /// Pending H3C integrity result, if the server sent a challenge
    pub vendor_buffer: Option<&'a [u8]>,
}

/// Computes challenge responses on behalf of the state machine
pub trait CredentialProvider {
    /// Answer an H3C integrity challenge
    fn integrity_response(&self, challenge: &[u8]) -> Result<Vec<u8>>;

    /// Type-data of the MD5-Challenge response
    fn md5_response(&self, request: &Md5Request<'_>) -> Result<Vec<u8>>;
}

/// Computes the H3C integrity answer
pub trait IntegrityResponder: Send + Sync {
    fn respond(&self, challenge: &[u8]) -> Result<Vec<u8>>;
}

impl<F> IntegrityResponder for F
where
    F: Fn(&[u8]) -> Result<Vec<u8>> + Send + Sync,
{
    fn respond(&self, challenge: &[u8]) -> Result<Vec<u8>> {
        self(challenge)
    }
}

/// MD5-Challenge credentials with an optional integrity responder
#[derive(Default)]
pub struct Md5Credentials {
    integrity: Option<Box<dyn IntegrityResponder>>,
}

impl Md5Credentials {
    /// Provider that fails integrity challenges
    pub fn new() -> Self {
        Self { integrity: None }
    }

    /// Provider that answers integrity challenges with `responder`
    pub fn with_integrity_responder<R>(responder: R) -> Self
    where
        R: IntegrityResponder + 'static,
    {
        Self {
            integrity: Some(Box::new(responder)),
        }
    }
}

impl std::fmt::Debug for Md5Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Md5Credentials")
            .field("integrity", &self.integrity.is_some())
            .finish()
    }
}

/// MD5(identifier || password || value)
pub fn md5_digest(identifier: u8, password: &[u8], value: &[u8]) -> [u8; MD5_RESPONSE_SIZE] {
    let mut data = Vec::with_capacity(1 + password.len() + value.len());
    data.push(identifier);
    data.extend_from_slice(password);
    data.extend_from_slice(value);

    md5::compute(&data).0
}

/// Value field of MD5-Challenge type-data: `{value-size, value, name}`
fn challenge_value(type_data: &[u8]) -> Result<&[u8]> {
    let (&size, rest) = type_data
        .split_first()
        .ok_or_else(|| Error::decode("MD5 challenge is empty"))?;

    rest.get(..size as usize).ok_or_else(|| {
        Error::decode(format!(
            "MD5 challenge value truncated: size {} but {} bytes follow",
            size,
            rest.len()
        ))
    })
}

impl CredentialProvider for Md5Credentials {
    fn integrity_response(&self, challenge: &[u8]) -> Result<Vec<u8>> {
        match &self.integrity {
            Some(responder) => responder.respond(challenge),
            None => Err(Error::challenge(
                "server sent an H3C integrity challenge but no responder is configured",
            )),
        }
    }

    fn md5_response(&self, request: &Md5Request<'_>) -> Result<Vec<u8>> {
        let value = challenge_value(request.challenge)?;
        let digest = md5_digest(request.identifier, request.password.as_bytes(), value);

        let vendor = request.vendor_buffer.unwrap_or_default();
        let mut data =
            Vec::with_capacity(1 + MD5_RESPONSE_SIZE + request.username.len() + vendor.len());
        data.push(MD5_RESPONSE_SIZE as u8);
        data.extend_from_slice(&digest);
        data.extend_from_slice(request.username.as_bytes());
        data.extend_from_slice(vendor);

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn challenge_data(value: &[u8]) -> Vec<u8> {
        let mut data = vec![value.len() as u8];
        data.extend_from_slice(value);
        data.extend_from_slice(b"h3c-server");
        data
    }

    #[test]
    fn test_md5_digest_known_value() {
        let value: Vec<u8> = (0..16).collect();
        let digest = md5_digest(7, b"secret", &value);
        assert_eq!(
            digest,
            [
                0x82, 0x16, 0x43, 0x66, 0x5b, 0x43, 0x03, 0x59, 0xe5, 0x2a, 0xc5, 0x24, 0xd2,
                0x9c, 0x8f, 0x95
            ]
        );
    }

    #[test]
    fn test_md5_response_layout() {
        let challenge = challenge_data(&[0xAA; 16]);
        let request = Md5Request {
            identifier: 1,
            challenge: &challenge,
            username: "alice",
            password: "password",
            vendor_buffer: None,
        };

        let data = Md5Credentials::new().md5_response(&request).unwrap();
        assert_eq!(data[0], 16);
        assert_eq!(
            &data[1..17],
            &[
                0xcf, 0x25, 0xe0, 0x7a, 0x85, 0x86, 0xab, 0xc9, 0x6b, 0xc1, 0x31, 0x2d, 0xe8,
                0x50, 0x58, 0x85
            ]
        );
        assert_eq!(&data[17..], b"alice");
    }

    #[test]
    fn test_md5_response_appends_vendor_buffer() {
        let challenge = challenge_data(&[0xAA; 16]);
        let vendor = [0x5A; 8];
        let request = Md5Request {
            identifier: 1,
            challenge: &challenge,
            username: "alice",
            password: "password",
            vendor_buffer: Some(&vendor),
        };

        let data = Md5Credentials::new().md5_response(&request).unwrap();
        assert_eq!(data.len(), 1 + 16 + 5 + 8);
        assert_eq!(&data[22..], &vendor);
    }

    #[test]
    fn test_md5_response_is_deterministic() {
        let challenge = challenge_data(&[0x01, 0x02, 0x03]);
        let request = Md5Request {
            identifier: 9,
            challenge: &challenge,
            username: "bob",
            password: "pw",
            vendor_buffer: None,
        };
        let provider = Md5Credentials::new();
        assert_eq!(
            provider.md5_response(&request).unwrap(),
            provider.md5_response(&request).unwrap()
        );
    }

    #[test]
    fn test_malformed_challenge_is_decode_error() {
        let provider = Md5Credentials::new();
        for challenge in [&[][..], &[16, 1, 2][..]] {
            let request = Md5Request {
                identifier: 1,
                challenge,
                username: "alice",
                password: "pw",
                vendor_buffer: None,
            };
            let err = provider.md5_response(&request).unwrap_err();
            assert!(matches!(err, Error::Decode(_)));
            assert!(!err.is_session_fatal());
        }
    }

    #[test]
    fn test_integrity_without_responder_fails() {
        let err = Md5Credentials::new().integrity_response(&[0u8; 32]).unwrap_err();
        assert!(err.is_session_fatal());
    }

    #[test]
    fn test_integrity_with_closure_responder() {
        let provider =
            Md5Credentials::with_integrity_responder(|challenge: &[u8]| -> Result<Vec<u8>> {
                Ok(challenge.iter().rev().copied().collect())
            });
        assert_eq!(provider.integrity_response(&[1, 2, 3]).unwrap(), vec![3, 2, 1]);
    }
}
