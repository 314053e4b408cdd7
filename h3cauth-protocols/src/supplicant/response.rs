//! Response builder
//!
//! Builds the EAP responses the supplicant sends and wraps them, like the
//! EAPOL control frames, in Ethernet II for the transport.

use h3cauth_core::{Error, MacAddr, Result};
use h3cauth_packet::{EtherType, EthernetFrame};

use crate::dot1x::constants::MAX_EAP_DATA_LEN;
use crate::dot1x::{EapCode, EapPacket, EapType, EapolPacket};

/// What a response answers, with its type-data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind<'a> {
    /// Identity response carrying the user name
    Identity(&'a [u8]),
    /// MD5-Challenge response type-data from the credential provider
    Md5Challenge(&'a [u8]),
    /// H3C vendor response
    H3c(&'a [u8]),
}

impl ResponseKind<'_> {
    fn eap_type(&self) -> EapType {
        match self {
            ResponseKind::Identity(_) => EapType::Identity,
            ResponseKind::Md5Challenge(_) => EapType::Md5Challenge,
            ResponseKind::H3c(_) => EapType::H3c,
        }
    }

    fn data(&self) -> &[u8] {
        match self {
            ResponseKind::Identity(data)
            | ResponseKind::Md5Challenge(data)
            | ResponseKind::H3c(data) => *data,
        }
    }
}

/// Build an EAP Response echoing `identifier`.
///
/// Fails only when the type-data cannot fit in one EAPOL frame.
pub fn build_response(identifier: u8, kind: ResponseKind<'_>) -> Result<EapPacket> {
    let data = kind.data();
    if data.len() > MAX_EAP_DATA_LEN {
        return Err(Error::PacketConstruction(format!(
            "{:?} response type-data is {} bytes (max {})",
            kind.eap_type(),
            data.len(),
            MAX_EAP_DATA_LEN
        )));
    }

    Ok(EapPacket::new(EapCode::Response, identifier)
        .with_type(kind.eap_type())
        .with_data(data.to_vec()))
}

/// Serialize an EAPOL packet into an Ethernet II frame
pub fn eapol_frame(source: MacAddr, destination: MacAddr, eapol: &EapolPacket) -> Vec<u8> {
    EthernetFrame::new(destination, source, EtherType::Dot1X, eapol.build()).to_bytes()
}

/// Serialize an EAP packet inside EAPOL inside Ethernet II
pub fn eap_frame(source: MacAddr, destination: MacAddr, eap: &EapPacket) -> Vec<u8> {
    eapol_frame(source, destination, &EapolPacket::eap_packet(eap))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::supplicant::decoder::decode_frame;

    const LOCAL: MacAddr = MacAddr([0x02, 0x00, 0x00, 0x00, 0x00, 0x01]);
    const PEER: MacAddr = MacAddr([0x00, 0x0F, 0xE2, 0x11, 0x22, 0x33]);

    #[test]
    fn test_identity_response() {
        let packet = build_response(3, ResponseKind::Identity(b"alice")).unwrap();
        assert_eq!(packet.code, EapCode::Response);
        assert_eq!(packet.identifier, 3);
        assert_eq!(packet.eap_type, Some(EapType::Identity));
        assert_eq!(packet.data, b"alice");
    }

    #[test]
    fn test_response_frame_decodes_back() {
        let md5 = [0x10u8; 17];
        let vendor = [0x35u8, 0x01, 0x02];
        let kinds = [
            ResponseKind::Identity(b"alice"),
            ResponseKind::Md5Challenge(&md5),
            ResponseKind::H3c(&vendor),
        ];

        for (identifier, kind) in kinds.into_iter().enumerate() {
            let identifier = identifier as u8 + 40;
            let packet = build_response(identifier, kind).unwrap();
            let bytes = eap_frame(LOCAL, PEER, &packet);

            let decoded = decode_frame(&bytes).unwrap().unwrap();
            assert_eq!(decoded.source, LOCAL);
            assert_eq!(decoded.message.code, EapCode::Response);
            assert_eq!(decoded.message.identifier, identifier);
            assert_eq!(decoded.message.eap_type, Some(kind.eap_type()));
            assert_eq!(decoded.message.type_data, kind.data());
        }
    }

    #[test]
    fn test_frame_addressing() {
        let bytes = eapol_frame(LOCAL, PEER, &EapolPacket::logoff());
        assert_eq!(&bytes[0..6], PEER.as_bytes());
        assert_eq!(&bytes[6..12], LOCAL.as_bytes());
        assert_eq!(&bytes[12..14], &[0x88, 0x8E]);
        assert_eq!(bytes.len(), EthernetFrame::MIN_FRAME_SIZE);
    }

    #[test]
    fn test_oversized_response_rejected() {
        let data = vec![0u8; MAX_EAP_DATA_LEN + 1];
        let err = build_response(1, ResponseKind::Md5Challenge(&data)).unwrap_err();
        assert!(matches!(err, Error::PacketConstruction(_)));
    }
}
