//! H3C vendor extension constants

/// Type-data offset of the byte following the sub-message marker
pub const H3C_INTEGRITY_CHALLENGE_HEADER: usize = 4;

/// Marker value identifying an integrity challenge
pub const H3C_INTEGRITY_CHALLENGE_MARKER: u8 = 0x35;

/// Length of the integrity challenge field
pub const H3C_INTEGRITY_CHALLENGE_LENGTH: usize = 32;

/// Type-data offset of the failure message length byte
pub const H3C_FAILURE_LENGTH_OFFSET: usize = 0;
