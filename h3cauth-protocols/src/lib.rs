//! Protocol implementations for h3cauth
//!
//! ## Modules
//!
//! ### 802.1X (Port-based Network Access Control)
//! EAPOL and EAP parsing and construction.
//! See [`dot1x`] module for details.
//!
//! ### H3C vendor extension
//! Integrity challenge and failure message payloads.
//! See [`h3c`] module for details.
//!
//! ### Supplicant
//! The authentication state machine and its collaborators.
//! See [`supplicant`] module for details.

pub mod dot1x;
pub mod h3c;
pub mod supplicant;

pub use supplicant::{AuthSession, Md5Credentials, Supplicant, Verdict};
