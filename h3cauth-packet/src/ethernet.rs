//! Ethernet frame construction and parsing
//!
//! This module provides functionality for building and parsing Ethernet II
//! frames, the only framing EAPOL uses.

use bytes::{BufMut, BytesMut};
use h3cauth_core::{Error, MacAddr, Result};
use std::fmt;

/// EtherType of an Ethernet II frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EtherType {
    /// 802.1X (0x888E)
    Dot1X,
    /// Any other EtherType
    Custom(u16),
}

impl EtherType {
    /// Convert EtherType to u16 value
    pub fn to_u16(self) -> u16 {
        match self {
            EtherType::Dot1X => 0x888E,
            EtherType::Custom(val) => val,
        }
    }

    /// Create EtherType from u16 value
    pub fn from_u16(value: u16) -> Self {
        match value {
            0x888E => EtherType::Dot1X,
            val => EtherType::Custom(val),
        }
    }
}

impl fmt::Display for EtherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EtherType::Dot1X => write!(f, "802.1X"),
            EtherType::Custom(val) => write!(f, "0x{:04X}", val),
        }
    }
}

/// Ethernet II frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EthernetFrame {
    /// Destination MAC address
    pub destination: MacAddr,
    /// Source MAC address
    pub source: MacAddr,
    /// EtherType field
    pub ethertype: EtherType,
    /// Payload data
    pub payload: Vec<u8>,
}

/// Borrowed view of a captured Ethernet II frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EthernetView<'a> {
    /// Destination MAC address
    pub destination: MacAddr,
    /// Source MAC address
    pub source: MacAddr,
    /// EtherType field
    pub ethertype: EtherType,
    /// Everything after the header, padding included
    pub payload: &'a [u8],
}

impl EthernetFrame {
    /// Minimum Ethernet frame size (without FCS)
    pub const MIN_FRAME_SIZE: usize = 60;

    /// Ethernet header size (dst + src + type)
    pub const HEADER_SIZE: usize = 14;

    /// Create a new Ethernet frame
    pub fn new(
        destination: MacAddr,
        source: MacAddr,
        ethertype: EtherType,
        payload: Vec<u8>,
    ) -> Self {
        EthernetFrame {
            destination,
            source,
            ethertype,
            payload,
        }
    }

    /// Convert the frame to bytes
    ///
    /// Frames shorter than the Ethernet minimum are zero-padded.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buffer = BytesMut::with_capacity(Self::HEADER_SIZE + self.payload.len());

        buffer.put_slice(self.destination.as_bytes());
        buffer.put_slice(self.source.as_bytes());
        buffer.put_u16(self.ethertype.to_u16());
        buffer.put_slice(&self.payload);

        let mut result = buffer.to_vec();

        if result.len() < Self::MIN_FRAME_SIZE {
            result.resize(Self::MIN_FRAME_SIZE, 0);
        }

        result
    }

    /// Split a captured frame into header fields and payload
    pub fn parse(data: &[u8]) -> Result<EthernetView<'_>> {
        if data.len() < Self::HEADER_SIZE {
            return Err(Error::decode(format!(
                "Ethernet frame too short: {} bytes (need at least {})",
                data.len(),
                Self::HEADER_SIZE
            )));
        }

        let destination = MacAddr([data[0], data[1], data[2], data[3], data[4], data[5]]);
        let source = MacAddr([data[6], data[7], data[8], data[9], data[10], data[11]]);
        let ethertype = EtherType::from_u16(u16::from_be_bytes([data[12], data[13]]));

        Ok(EthernetView {
            destination,
            source,
            ethertype,
            payload: &data[Self::HEADER_SIZE..],
        })
    }
}
