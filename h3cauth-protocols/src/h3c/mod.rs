//! H3C vendor EAP extension
//!
//! H3C authenticators layer a proprietary sub-protocol inside EAP: an
//! integrity challenge delivered on vendor code 10, whose computed answer
//! rides along with the following MD5 response, and a failure sub-type
//! that carries a GBK-encoded reason from the server.

pub mod constants;
pub mod payload;

pub use constants::{
    H3C_INTEGRITY_CHALLENGE_HEADER, H3C_INTEGRITY_CHALLENGE_LENGTH,
    H3C_INTEGRITY_CHALLENGE_MARKER,
};
pub use payload::{decode_failure_message, IntegrityChallenge};
