//! Named parameter bundles for common `(n, poly, fcr, prim)` tuples.
//!
//! Pure configuration sugar over [`RsCodec::new`] — out of scope as
//! algorithmic content, kept here as thin external collaborators the way
//! the rest of this corpus treats preset bundles.

use crate::error::RsError;
use crate::field::RsCodec;

pub fn rs_3_7(nroots: u32) -> Result<RsCodec, RsError> {
    RsCodec::new(2, 0x7, 1, 1, nroots)
}

pub fn rs_7_b(nroots: u32) -> Result<RsCodec, RsError> {
    RsCodec::new(3, 0xb, 1, 1, nroots)
}

pub fn rs_15_13(nroots: u32) -> Result<RsCodec, RsError> {
    RsCodec::new(4, 0x13, 1, 1, nroots)
}

pub fn rs_31_25(nroots: u32) -> Result<RsCodec, RsError> {
    RsCodec::new(5, 0x25, 1, 1, nroots)
}

pub fn rs_63_43(nroots: u32) -> Result<RsCodec, RsError> {
    RsCodec::new(6, 0x43, 1, 1, nroots)
}

pub fn rs_127_89(nroots: u32) -> Result<RsCodec, RsError> {
    RsCodec::new(7, 0x89, 1, 1, nroots)
}

pub fn rs_255_11d(nroots: u32) -> Result<RsCodec, RsError> {
    RsCodec::new(8, 0x11d, 1, 1, nroots)
}

/// The CCSDS (255, 223) convolutionally-interleaved downlink preset:
/// `fcr = 112`, `prim = 11`.
pub fn rs_255_187_ccsds(nroots: u32) -> Result<RsCodec, RsError> {
    RsCodec::new(8, 0x187, 112, 11, nroots)
}

pub fn rs_511_211(nroots: u32) -> Result<RsCodec, RsError> {
    RsCodec::new(9, 0x211, 1, 1, nroots)
}

pub fn rs_1023_409(nroots: u32) -> Result<RsCodec, RsError> {
    RsCodec::new(10, 0x409, 1, 1, nroots)
}

pub fn rs_2047_805(nroots: u32) -> Result<RsCodec, RsError> {
    RsCodec::new(11, 0x805, 1, 1, nroots)
}

pub fn rs_4095_1053(nroots: u32) -> Result<RsCodec, RsError> {
    RsCodec::new(12, 0x1053, 1, 1, nroots)
}

pub fn rs_8191_201b(nroots: u32) -> Result<RsCodec, RsError> {
    RsCodec::new(13, 0x201b, 1, 1, nroots)
}

pub fn rs_16383_4443(nroots: u32) -> Result<RsCodec, RsError> {
    RsCodec::new(14, 0x4443, 1, 1, nroots)
}

pub fn rs_32767_8003(nroots: u32) -> Result<RsCodec, RsError> {
    RsCodec::new(15, 0x8003, 1, 1, nroots)
}

pub fn rs_65535_1100b(nroots: u32) -> Result<RsCodec, RsError> {
    RsCodec::new(16, 0x1100b, 1, 1, nroots)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ccsds_preset_matches_named_parameters() {
        let rs = rs_255_187_ccsds(32).unwrap();
        let p = rs.params();
        assert_eq!(p.n, 255);
        assert_eq!(p.poly, 0x187);
        assert_eq!(p.fcr, 112);
        assert_eq!(p.prim, 11);
    }

    #[test]
    fn byte_preset_matches_named_parameters() {
        let rs = rs_255_11d(32).unwrap();
        let p = rs.params();
        assert_eq!(p.n, 255);
        assert_eq!(p.poly, 0x11d);
    }

    #[test]
    fn small_presets_construct_without_error() {
        assert!(rs_3_7(2).is_ok());
        assert!(rs_7_b(2).is_ok());
        assert!(rs_15_13(4).is_ok());
        assert!(rs_31_25(4).is_ok());
        assert!(rs_63_43(8).is_ok());
        assert!(rs_127_89(8).is_ok());
    }
}
