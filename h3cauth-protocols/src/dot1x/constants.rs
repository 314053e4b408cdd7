//! 802.1X Protocol Constants
//!
//! This module defines the constants for IEEE 802.1X (Port-based Network
//! Access Control) and the EAP codes and types a supplicant meets on H3C
//! equipment.

use h3cauth_core::MacAddr;

/// 802.1X PAE (Port Access Entity) Multicast MAC Address
/// Used as destination for EAPOL frames before the authenticator is known
pub const DOT1X_PAE_MULTICAST: MacAddr = MacAddr([0x01, 0x80, 0xC2, 0x00, 0x00, 0x03]);

/// EtherType for EAPOL frames (0x888E)
pub const DOT1X_ETHERTYPE: u16 = 0x888E;

// ===== EAPOL Protocol Versions =====

/// EAPOL Version 1 (802.1X-2001)
pub const EAPOL_VERSION_1: u8 = 0x01;

// ===== EAPOL Packet Types =====

/// EAPOL-Packet (contains EAP data)
pub const EAPOL_TYPE_EAP_PACKET: u8 = 0x00;

/// EAPOL-Start (supplicant initiates authentication)
pub const EAPOL_TYPE_START: u8 = 0x01;

/// EAPOL-Logoff (supplicant logs off)
pub const EAPOL_TYPE_LOGOFF: u8 = 0x02;

/// EAPOL-Key (key exchange for WPA/WPA2)
pub const EAPOL_TYPE_KEY: u8 = 0x03;

/// EAPOL-Encapsulated-ASF-Alert
pub const EAPOL_TYPE_ASF_ALERT: u8 = 0x04;

// ===== EAP Codes =====

/// EAP Request
pub const EAP_CODE_REQUEST: u8 = 0x01;

/// EAP Response
pub const EAP_CODE_RESPONSE: u8 = 0x02;

/// EAP Success
pub const EAP_CODE_SUCCESS: u8 = 0x03;

/// EAP Failure
pub const EAP_CODE_FAILURE: u8 = 0x04;

/// H3C vendor data (integrity challenge and friends)
pub const EAP_CODE_H3C_DATA: u8 = 0x0A;

// ===== EAP Types =====

/// EAP Identity
pub const EAP_TYPE_IDENTITY: u8 = 0x01;

/// EAP Notification
pub const EAP_TYPE_NOTIFICATION: u8 = 0x02;

/// EAP NAK (Response only)
pub const EAP_TYPE_NAK: u8 = 0x03;

/// EAP MD5-Challenge
pub const EAP_TYPE_MD5_CHALLENGE: u8 = 0x04;

/// EAP One-Time Password (OTP)
pub const EAP_TYPE_OTP: u8 = 0x05;

/// EAP Generic Token Card (GTC)
pub const EAP_TYPE_GTC: u8 = 0x06;

/// H3C failure carrying a server message (rides on EAP-Failure)
pub const EAP_TYPE_MD5_FAILED: u8 = 0x09;

/// H3C vendor response type
pub const EAP_TYPE_H3C: u8 = 0x14;

// ===== Default Values =====

/// Default EAPOL version (Version 1)
pub const DEFAULT_EAPOL_VERSION: u8 = EAPOL_VERSION_1;

/// Maximum EAP data length (MTU minus EAPOL and EAP headers)
pub const MAX_EAP_DATA_LEN: usize = 1500 - EAPOL_HEADER_SIZE - EAP_HEADER_SIZE - 1;

/// Minimum EAPOL packet size (header only)
pub const MIN_EAPOL_SIZE: usize = 4;

/// EAPOL header size (Version + Type + Body Length)
pub const EAPOL_HEADER_SIZE: usize = 4;

/// EAP header size (Code + Identifier + Length)
pub const EAP_HEADER_SIZE: usize = 4;

// ===== EAP-MD5 =====

/// MD5 digest length carried in an MD5-Challenge response
pub const MD5_RESPONSE_SIZE: usize = 16;
