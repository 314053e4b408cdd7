//! Link-layer transport seam
//!
//! The supplicant never touches a socket or a capture handle itself. It
//! talks to the wire through this trait, which the capture crate implements
//! on top of pcap and tests implement in memory.

use crate::{MacAddr, Result};

/// Sends frames and narrows the capture to the negotiated peer.
pub trait Transport {
    /// Transmit one serialized Ethernet frame
    fn send(&mut self, frame: &[u8]) -> Result<()>;

    /// Replace the capture filter so only frames from `peer` are delivered
    fn restrict_capture_to(&mut self, peer: MacAddr, filter: &str) -> Result<()>;

    /// Hardware address of the local interface
    fn local_address(&self) -> MacAddr;

    /// Peer recorded by [`Transport::set_peer`], if any
    fn current_peer(&self) -> Option<MacAddr>;

    /// Record the authenticator's address
    fn set_peer(&mut self, peer: MacAddr);
}
