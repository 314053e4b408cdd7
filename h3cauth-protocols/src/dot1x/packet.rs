//! EAPOL and EAP Packet Structures
//!
//! This module implements parsing and building of 802.1X EAPOL and EAP packets.
//!
//! ## EAPOL Frame Structure
//!
//! ```text
//! +------------------+
//! | Protocol Version | 1 byte
//! +------------------+
//! | Packet Type      | 1 byte
//! +------------------+
//! | Body Length      | 2 bytes (network order)
//! +------------------+
//! | Body             | Variable (0-65535 bytes)
//! +------------------+
//! ```
//!
//! ## EAP Packet Structure (when EAPOL Type = EAP-Packet)
//!
//! ```text
//! +------------------+
//! | Code             | 1 byte
//! +------------------+
//! | Identifier       | 1 byte
//! +------------------+
//! | Length           | 2 bytes (network order)
//! +------------------+
//! | Type             | 1 byte (present whenever Length > 4)
//! +------------------+
//! | Data             | Variable (optional)
//! +------------------+
//! ```
//!
//! H3C servers put a type byte on Failure frames too, so the type is read
//! whenever the length leaves room for it, whatever the code.

use h3cauth_core::{Error, Result};

use super::constants::*;

/// EAPOL Packet Type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EapolType {
    /// EAP-Packet (contains EAP frame)
    EapPacket,
    /// EAPOL-Start (supplicant initiates)
    Start,
    /// EAPOL-Logoff
    Logoff,
    /// EAPOL-Key (WPA/WPA2)
    Key,
    /// EAPOL-Encapsulated-ASF-Alert
    AsfAlert,
    /// Anything else
    Other(u8),
}

impl EapolType {
    /// Convert to byte value
    pub fn to_byte(&self) -> u8 {
        match self {
            EapolType::EapPacket => EAPOL_TYPE_EAP_PACKET,
            EapolType::Start => EAPOL_TYPE_START,
            EapolType::Logoff => EAPOL_TYPE_LOGOFF,
            EapolType::Key => EAPOL_TYPE_KEY,
            EapolType::AsfAlert => EAPOL_TYPE_ASF_ALERT,
            EapolType::Other(byte) => *byte,
        }
    }

    /// Parse from byte value
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            EAPOL_TYPE_EAP_PACKET => EapolType::EapPacket,
            EAPOL_TYPE_START => EapolType::Start,
            EAPOL_TYPE_LOGOFF => EapolType::Logoff,
            EAPOL_TYPE_KEY => EapolType::Key,
            EAPOL_TYPE_ASF_ALERT => EapolType::AsfAlert,
            other => EapolType::Other(other),
        }
    }
}

/// EAP Code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EapCode {
    /// EAP Request
    Request,
    /// EAP Response
    Response,
    /// EAP Success
    Success,
    /// EAP Failure
    Failure,
    /// H3C vendor data
    H3cData,
    /// Unrecognized code
    Other(u8),
}

impl EapCode {
    /// Convert to byte value
    pub fn to_byte(&self) -> u8 {
        match self {
            EapCode::Request => EAP_CODE_REQUEST,
            EapCode::Response => EAP_CODE_RESPONSE,
            EapCode::Success => EAP_CODE_SUCCESS,
            EapCode::Failure => EAP_CODE_FAILURE,
            EapCode::H3cData => EAP_CODE_H3C_DATA,
            EapCode::Other(byte) => *byte,
        }
    }

    /// Parse from byte value
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            EAP_CODE_REQUEST => EapCode::Request,
            EAP_CODE_RESPONSE => EapCode::Response,
            EAP_CODE_SUCCESS => EapCode::Success,
            EAP_CODE_FAILURE => EapCode::Failure,
            EAP_CODE_H3C_DATA => EapCode::H3cData,
            other => EapCode::Other(other),
        }
    }
}

/// EAP Type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EapType {
    /// Identity
    Identity,
    /// Notification
    Notification,
    /// NAK (Response only)
    Nak,
    /// MD5-Challenge
    Md5Challenge,
    /// OTP
    Otp,
    /// Generic Token Card
    Gtc,
    /// H3C failure with server message
    Md5Failed,
    /// H3C vendor response
    H3c,
    /// Unrecognized type
    Other(u8),
}

impl EapType {
    /// Convert to byte value
    pub fn to_byte(&self) -> u8 {
        match self {
            EapType::Identity => EAP_TYPE_IDENTITY,
            EapType::Notification => EAP_TYPE_NOTIFICATION,
            EapType::Nak => EAP_TYPE_NAK,
            EapType::Md5Challenge => EAP_TYPE_MD5_CHALLENGE,
            EapType::Otp => EAP_TYPE_OTP,
            EapType::Gtc => EAP_TYPE_GTC,
            EapType::Md5Failed => EAP_TYPE_MD5_FAILED,
            EapType::H3c => EAP_TYPE_H3C,
            EapType::Other(byte) => *byte,
        }
    }

    /// Parse from byte value
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            EAP_TYPE_IDENTITY => EapType::Identity,
            EAP_TYPE_NOTIFICATION => EapType::Notification,
            EAP_TYPE_NAK => EapType::Nak,
            EAP_TYPE_MD5_CHALLENGE => EapType::Md5Challenge,
            EAP_TYPE_OTP => EapType::Otp,
            EAP_TYPE_GTC => EapType::Gtc,
            EAP_TYPE_MD5_FAILED => EapType::Md5Failed,
            EAP_TYPE_H3C => EapType::H3c,
            other => EapType::Other(other),
        }
    }
}

/// Borrowed view of one EAP message inside a captured frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EapMessage<'a> {
    /// EAP Code
    pub code: EapCode,
    /// Identifier, echoed verbatim in any response
    pub identifier: u8,
    /// EAP Type, `None` when the length stops at the header
    pub eap_type: Option<EapType>,
    /// Type data, bounded by the EAP length field
    pub type_data: &'a [u8],
}

impl<'a> EapMessage<'a> {
    /// Parse an EAP message without copying its payload
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        if data.len() < EAP_HEADER_SIZE {
            return Err(Error::decode(format!(
                "EAP packet too short: {} bytes (need at least {})",
                data.len(),
                EAP_HEADER_SIZE
            )));
        }

        let code = EapCode::from_byte(data[0]);
        let identifier = data[1];
        let length = u16::from_be_bytes([data[2], data[3]]) as usize;

        if length < EAP_HEADER_SIZE {
            return Err(Error::decode(format!(
                "EAP length field {} is below the header size",
                length
            )));
        }

        if data.len() < length {
            return Err(Error::decode(format!(
                "EAP packet truncated: got {} bytes, expected {}",
                data.len(),
                length
            )));
        }

        let (eap_type, type_data) = if length > EAP_HEADER_SIZE {
            (
                Some(EapType::from_byte(data[EAP_HEADER_SIZE])),
                &data[EAP_HEADER_SIZE + 1..length],
            )
        } else {
            (None, &data[..0])
        };

        Ok(Self {
            code,
            identifier,
            eap_type,
            type_data,
        })
    }

    /// Copy the message out of the frame buffer
    pub fn to_packet(&self) -> EapPacket {
        EapPacket {
            code: self.code,
            identifier: self.identifier,
            eap_type: self.eap_type,
            data: self.type_data.to_vec(),
        }
    }
}

/// EAP Packet
#[derive(Debug, Clone, PartialEq)]
pub struct EapPacket {
    /// EAP Code
    pub code: EapCode,
    /// Identifier (for matching requests/responses)
    pub identifier: u8,
    /// EAP Type
    pub eap_type: Option<EapType>,
    /// EAP Data (type-specific data)
    pub data: Vec<u8>,
}

impl EapPacket {
    /// Create a new EAP packet
    pub fn new(code: EapCode, identifier: u8) -> Self {
        Self {
            code,
            identifier,
            eap_type: None,
            data: Vec::new(),
        }
    }

    /// Create EAP Response/Identity packet
    pub fn response_identity(identifier: u8, identity: &[u8]) -> Self {
        Self {
            code: EapCode::Response,
            identifier,
            eap_type: Some(EapType::Identity),
            data: identity.to_vec(),
        }
    }

    /// Create EAP Request/Identity packet
    pub fn request_identity(identifier: u8) -> Self {
        Self {
            code: EapCode::Request,
            identifier,
            eap_type: Some(EapType::Identity),
            data: Vec::new(),
        }
    }

    /// Create EAP Success packet
    pub fn success(identifier: u8) -> Self {
        Self::new(EapCode::Success, identifier)
    }

    /// Create EAP Failure packet
    pub fn failure(identifier: u8) -> Self {
        Self::new(EapCode::Failure, identifier)
    }

    /// Set EAP type
    pub fn with_type(mut self, eap_type: EapType) -> Self {
        self.eap_type = Some(eap_type);
        self
    }

    /// Set EAP data
    pub fn with_data(mut self, data: Vec<u8>) -> Self {
        self.data = data;
        self
    }

    /// Parse EAP packet from bytes
    pub fn parse(data: &[u8]) -> Result<Self> {
        EapMessage::parse(data).map(|message| message.to_packet())
    }

    /// Length of the encoded packet, as written into the length field
    pub fn encoded_len(&self) -> usize {
        if self.eap_type.is_some() {
            EAP_HEADER_SIZE + 1 + self.data.len()
        } else {
            EAP_HEADER_SIZE
        }
    }

    /// Build EAP packet to bytes
    ///
    /// Data is only written when a type is set.
    pub fn build(&self) -> Vec<u8> {
        let length = self.encoded_len();
        let mut bytes = Vec::with_capacity(length);

        bytes.push(self.code.to_byte());
        bytes.push(self.identifier);
        bytes.extend_from_slice(&(length as u16).to_be_bytes());

        if let Some(eap_type) = self.eap_type {
            bytes.push(eap_type.to_byte());
            bytes.extend_from_slice(&self.data);
        }

        bytes
    }
}

/// Borrowed view of an EAPOL header and body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EapolView<'a> {
    /// Protocol version
    pub version: u8,
    /// Packet type
    pub packet_type: EapolType,
    /// Body, bounded by the body length field
    pub body: &'a [u8],
}

/// EAPOL Packet
#[derive(Debug, Clone, PartialEq)]
pub struct EapolPacket {
    /// Protocol version (1, 2, or 3)
    pub version: u8,
    /// Packet type
    pub packet_type: EapolType,
    /// Body (can be EAP packet or other data)
    pub body: Vec<u8>,
}

impl EapolPacket {
    /// Create a new EAPOL packet
    pub fn new(version: u8, packet_type: EapolType) -> Self {
        Self {
            version,
            packet_type,
            body: Vec::new(),
        }
    }

    /// Create EAPOL-Start packet
    pub fn start() -> Self {
        Self::new(DEFAULT_EAPOL_VERSION, EapolType::Start)
    }

    /// Create EAPOL-Logoff packet
    pub fn logoff() -> Self {
        Self::new(DEFAULT_EAPOL_VERSION, EapolType::Logoff)
    }

    /// Create EAPOL packet containing an EAP packet
    pub fn eap_packet(eap: &EapPacket) -> Self {
        Self {
            version: DEFAULT_EAPOL_VERSION,
            packet_type: EapolType::EapPacket,
            body: eap.build(),
        }
    }

    /// Parse the EAPOL header, borrowing the body
    pub fn view(data: &[u8]) -> Result<EapolView<'_>> {
        if data.len() < MIN_EAPOL_SIZE {
            return Err(Error::decode(format!(
                "EAPOL packet too short: {} bytes (need at least {})",
                data.len(),
                MIN_EAPOL_SIZE
            )));
        }

        let version = data[0];
        let packet_type = EapolType::from_byte(data[1]);
        let body_length = u16::from_be_bytes([data[2], data[3]]) as usize;

        if data.len() < EAPOL_HEADER_SIZE + body_length {
            return Err(Error::decode(format!(
                "EAPOL packet truncated: got {} bytes, expected {}",
                data.len(),
                EAPOL_HEADER_SIZE + body_length
            )));
        }

        Ok(EapolView {
            version,
            packet_type,
            body: &data[EAPOL_HEADER_SIZE..EAPOL_HEADER_SIZE + body_length],
        })
    }

    /// Parse EAPOL packet from bytes
    pub fn parse(data: &[u8]) -> Result<Self> {
        let view = Self::view(data)?;
        Ok(Self {
            version: view.version,
            packet_type: view.packet_type,
            body: view.body.to_vec(),
        })
    }

    /// Build EAPOL packet to bytes
    pub fn build(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(EAPOL_HEADER_SIZE + self.body.len());

        bytes.push(self.version);
        bytes.push(self.packet_type.to_byte());
        bytes.extend_from_slice(&(self.body.len() as u16).to_be_bytes());
        bytes.extend_from_slice(&self.body);

        bytes
    }

    /// Parse the body as an EAP packet (if packet_type is EapPacket)
    pub fn parse_eap_body(&self) -> Result<EapPacket> {
        if self.packet_type != EapolType::EapPacket {
            return Err(Error::decode(format!(
                "Not an EAP packet, type is {:?}",
                self.packet_type
            )));
        }

        EapPacket::parse(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eapol_type_conversion() {
        assert_eq!(EapolType::Start.to_byte(), 0x01);
        assert_eq!(EapolType::Logoff.to_byte(), 0x02);
        assert_eq!(EapolType::EapPacket.to_byte(), 0x00);

        assert_eq!(EapolType::from_byte(0x01), EapolType::Start);
        assert_eq!(EapolType::from_byte(0x7F), EapolType::Other(0x7F));
    }

    #[test]
    fn test_eap_code_conversion() {
        assert_eq!(EapCode::Request.to_byte(), 0x01);
        assert_eq!(EapCode::Response.to_byte(), 0x02);
        assert_eq!(EapCode::Success.to_byte(), 0x03);
        assert_eq!(EapCode::Failure.to_byte(), 0x04);
        assert_eq!(EapCode::H3cData.to_byte(), 0x0A);

        assert_eq!(EapCode::from_byte(0x0A), EapCode::H3cData);
        assert_eq!(EapCode::from_byte(0x05), EapCode::Other(0x05));
    }

    #[test]
    fn test_eap_type_conversion() {
        assert_eq!(EapType::Identity.to_byte(), 0x01);
        assert_eq!(EapType::Md5Challenge.to_byte(), 0x04);
        assert_eq!(EapType::Md5Failed.to_byte(), 0x09);

        assert_eq!(EapType::from_byte(0x04), EapType::Md5Challenge);
        assert_eq!(EapType::from_byte(0x0D), EapType::Other(0x0D));
    }

    #[test]
    fn test_eapol_start_packet() {
        let bytes = EapolPacket::start().build();
        assert_eq!(bytes, vec![EAPOL_VERSION_1, EAPOL_TYPE_START, 0x00, 0x00]);
    }

    #[test]
    fn test_eapol_logoff_packet() {
        let bytes = EapolPacket::logoff().build();
        assert_eq!(bytes[1], EAPOL_TYPE_LOGOFF);
    }

    #[test]
    fn test_eap_response_identity() {
        let packet = EapPacket::response_identity(1, b"testuser");
        let bytes = packet.build();

        // Length = 4 (header) + 1 (type) + 8 (data) = 13
        assert_eq!(bytes.len(), 13);
        assert_eq!(bytes[0], EAP_CODE_RESPONSE);
        assert_eq!(bytes[1], 1);
        assert_eq!(u16::from_be_bytes([bytes[2], bytes[3]]), 13);
        assert_eq!(bytes[4], EAP_TYPE_IDENTITY);
        assert_eq!(&bytes[5..], b"testuser");
    }

    #[test]
    fn test_eap_success_header_only() {
        let bytes = EapPacket::success(5).build();
        assert_eq!(bytes, vec![EAP_CODE_SUCCESS, 5, 0x00, 0x04]);
    }

    #[test]
    fn test_failure_type_is_parsed() {
        let data = [EAP_CODE_FAILURE, 9, 0x00, 0x07, EAP_TYPE_MD5_FAILED, 0x01, 0x00];
        let message = EapMessage::parse(&data).unwrap();
        assert_eq!(message.code, EapCode::Failure);
        assert_eq!(message.eap_type, Some(EapType::Md5Failed));
        assert_eq!(message.type_data, &[0x01, 0x00]);
    }

    #[test]
    fn test_type_data_excludes_padding() {
        let mut data = vec![EAP_CODE_REQUEST, 2, 0x00, 0x06, EAP_TYPE_IDENTITY, 0xAA];
        data.extend_from_slice(&[0u8; 20]);
        let message = EapMessage::parse(&data).unwrap();
        assert_eq!(message.type_data, &[0xAA]);
    }

    #[test]
    fn test_eap_truncated() {
        let data = [EAP_CODE_REQUEST, 1, 0x00, 0x20, EAP_TYPE_MD5_CHALLENGE, 0x10];
        assert!(matches!(EapMessage::parse(&data), Err(Error::Decode(_))));
    }

    #[test]
    fn test_eap_length_below_header() {
        let data = [EAP_CODE_REQUEST, 1, 0x00, 0x02, 0x00];
        assert!(EapMessage::parse(&data).is_err());
    }

    #[test]
    fn test_eap_too_short() {
        assert!(EapPacket::parse(&[0x01, 0x00, 0x00]).is_err());
    }

    #[test]
    fn test_eapol_view_bounds_body() {
        let data = [EAPOL_VERSION_1, EAPOL_TYPE_EAP_PACKET, 0x00, 0x04, 3, 1, 0, 4, 0, 0, 0];
        let view = EapolPacket::view(&data).unwrap();
        assert_eq!(view.packet_type, EapolType::EapPacket);
        assert_eq!(view.body, &[3, 1, 0, 4]);
    }

    #[test]
    fn test_eapol_too_short() {
        assert!(EapolPacket::parse(&[0x01, 0x00]).is_err());
    }

    #[test]
    fn test_eapol_truncated_body() {
        let data = [EAPOL_VERSION_1, EAPOL_TYPE_EAP_PACKET, 0x00, 0x10, 1, 2];
        assert!(EapolPacket::view(&data).is_err());
    }

    #[test]
    fn test_eapol_parse_eap_body_wrong_type() {
        assert!(EapolPacket::start().parse_eap_body().is_err());
    }
}
