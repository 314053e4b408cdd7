//! Frame decoder
//!
//! Pulls the source address and the EAP message out of a captured frame
//! without copying. Frames that carry no EAP message (other EtherTypes,
//! EAPOL-Start, EAPOL-Key, ...) are not applicable rather than errors.

use h3cauth_core::{MacAddr, Result};
use h3cauth_packet::{EtherType, EthernetFrame};
use tracing::trace;

use crate::dot1x::{EapMessage, EapolPacket, EapolType};

/// An EAP message and the address it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedFrame<'a> {
    /// Link-layer source address
    pub source: MacAddr,
    /// EAP message borrowed from the frame
    pub message: EapMessage<'a>,
}

/// Decode one captured frame.
///
/// Returns `Ok(None)` when the frame carries no EAP sub-layer and a decode
/// error when one is present but malformed.
pub fn decode_frame(frame: &[u8]) -> Result<Option<DecodedFrame<'_>>> {
    let ethernet = EthernetFrame::parse(frame)?;
    if ethernet.ethertype != EtherType::Dot1X {
        trace!("Ignoring {} frame from {}", ethernet.ethertype, ethernet.source);
        return Ok(None);
    }

    let eapol = EapolPacket::view(ethernet.payload)?;
    if eapol.packet_type != EapolType::EapPacket || eapol.body.is_empty() {
        return Ok(None);
    }

    let message = EapMessage::parse(eapol.body)?;

    Ok(Some(DecodedFrame {
        source: ethernet.source,
        message,
    }))
}
