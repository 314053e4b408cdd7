//! Frame construction and parsing library for h3cauth
//!
//! 802.1X runs directly on Ethernet II, so this crate only deals with
//! layer 2: building frames addressed to the authenticator and splitting
//! captured frames into header and payload without copying.
//!
//! # Quick Start
//!
//! ```rust
//! use h3cauth_core::MacAddr;
//! use h3cauth_packet::ethernet::{EtherType, EthernetFrame};
//!
//! let src = MacAddr([0x00, 0x11, 0x22, 0x33, 0x44, 0x55]);
//! let dst = MacAddr([0x01, 0x80, 0xC2, 0x00, 0x00, 0x03]);
//! let eapol_start = vec![0x01, 0x01, 0x00, 0x00];
//!
//! let bytes = EthernetFrame::new(dst, src, EtherType::Dot1X, eapol_start).to_bytes();
//! let view = EthernetFrame::parse(&bytes).unwrap();
//! assert_eq!(view.source, src);
//! assert_eq!(view.ethertype, EtherType::Dot1X);
//! ```

pub mod ethernet;

// Re-export commonly used types for convenience
pub use ethernet::{EtherType, EthernetFrame, EthernetView};
