//! H3C 802.1X supplicant
//!
//! The pieces that turn captured frames into responses:
//!
//! - [`decoder`] extracts the source address and EAP message of a frame
//! - [`session`] holds the per-attempt state owned by the caller
//! - [`credentials`] computes MD5 and H3C integrity answers
//! - [`response`] builds and serializes the outbound frames
//! - [`machine`] ties them together behind [`Supplicant`]
//!
//! ## Example
//!
//! ```no_run
//! use h3cauth_core::Transport;
//! use h3cauth_protocols::supplicant::{AuthSession, Md5Credentials, Supplicant};
//!
//! # fn run<T: Transport>(transport: T, frames: Vec<Vec<u8>>) -> h3cauth_core::Result<()> {
//! let mut session = AuthSession::new(transport.local_address(), "alice", "secret");
//! let mut supplicant = Supplicant::new(transport, Md5Credentials::new());
//!
//! supplicant.start(&session)?;
//! for frame in frames {
//!     if let Some(verdict) = supplicant.handle_frame(&mut session, &frame)? {
//!         if verdict.is_terminal() {
//!             break;
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod credentials;
pub mod decoder;
pub mod machine;
pub mod response;
pub mod session;


pub use credentials::{CredentialProvider, IntegrityResponder, Md5Credentials, Md5Request};
pub use decoder::{decode_frame, DecodedFrame};
pub use machine::{peer_filter, Supplicant};
pub use response::{build_response, eap_frame, eapol_frame, ResponseKind};
pub use session::{AuthSession, FailureReason, SessionState, Verdict};
