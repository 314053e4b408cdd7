//! IEEE 802.1X (Port-based Network Access Control) codec
//!
//! 802.1X is the IEEE standard for port-based network access control,
//! providing authentication for devices attempting to attach to a LAN.
//!
//! ## EAPOL Frame Structure
//!
//! ```text
//! Ethernet Header (14 bytes)
//!   Dst: 01:80:C2:00:00:03 (PAE multicast address) or the authenticator
//!   Src: Supplicant or Authenticator MAC
//!   EtherType: 0x888E (EAPOL)
//! EAPOL Header (4 bytes)
//!   Protocol Version: 0x01, 0x02, or 0x03
//!   Packet Type: 0x00-0x04
//!   Body Length: 2 bytes (network order)
//! EAPOL Body (variable)
//!   EAP packet or other data
//! ```
//!
//! ## EAP Codes
//!
//! - **Request (1)**: Authenticator requests information
//! - **Response (2)**: Supplicant responds with requested information
//! - **Success (3)**: Authentication succeeded
//! - **Failure (4)**: Authentication failed
//! - **H3C Data (10)**: H3C vendor extension (integrity challenge)
//!
//! ## EAP Types met on H3C equipment
//!
//! - **Identity (1)**: Username/identity
//! - **MD5-Challenge (4)**: MD5 password challenge
//! - **MD5-Failed (9)**: H3C failure sub-type carrying a GBK server message
//!
//! ## Authentication Flow
//!
//! 1. Supplicant sends EAPOL-Start to the PAE group address
//! 2. Authenticator sends EAP-Request/Identity
//! 3. Supplicant sends EAP-Response/Identity
//! 4. H3C servers may push an integrity challenge (code 10)
//! 5. Authenticator sends EAP-Request/MD5-Challenge
//! 6. Supplicant answers with the MD5 digest
//! 7. Authenticator sends Success or Failure
//!
//! ## References
//!
//! - IEEE 802.1X-2010: Port-Based Network Access Control
//! - RFC 3748: Extensible Authentication Protocol (EAP)
//! - RFC 1994: PPP Challenge Handshake Authentication Protocol (MD5 response)

pub mod constants;
pub mod packet;


pub use constants::{
    DOT1X_ETHERTYPE, DOT1X_PAE_MULTICAST, EAPOL_VERSION_1,
    EAP_CODE_FAILURE, EAP_CODE_H3C_DATA, EAP_CODE_REQUEST, EAP_CODE_RESPONSE, EAP_CODE_SUCCESS,
    EAP_TYPE_IDENTITY, EAP_TYPE_MD5_CHALLENGE, EAP_TYPE_MD5_FAILED,
};
pub use packet::{EapCode, EapMessage, EapPacket, EapType, EapolPacket, EapolType, EapolView};
