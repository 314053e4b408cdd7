//! Packet capture transport for h3cauth
//!
//! Wraps a live pcap handle as an [`h3cauth_core::Transport`]: frames are
//! sent with `pcap_sendpacket` and read back through a BPF filter that is
//! narrowed to the authenticator once it is known.
//!
//! ## Example
//!
//! ```no_run
//! use h3cauth_capture::PcapTransport;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut transport = PcapTransport::open("eth0")?;
//!
//! while let Some(packet) = transport.next_packet()? {
//!     println!("Got frame: {} bytes", packet.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod capture;
pub mod filters;
pub mod interface;
pub mod stats;

// Re-export main types
pub use capture::{CaptureConfig, PcapTransport};
pub use interface::{get_interface, InterfaceInfo};
pub use stats::CaptureStats;
