//! h3cauth Core Library
//!
//! This crate provides the fundamental types, error handling and the
//! transport trait shared by every h3cauth crate.

pub mod error;
pub mod packet;
pub mod transport;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use packet::Packet;
pub use transport::Transport;
pub use types::*;
