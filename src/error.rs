use thiserror::Error;

/// Failure modes surfaced by codec construction and by `encode`/`decode`.
///
/// Decoder *correction* outcomes (uncorrectable frames) are not represented
/// here — `decode` returns `Ok(-1)` for those, since a caller streaming many
/// frames should not pay exception-style control flow on every bad one.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsError {
    /// `poly` does not generate the full multiplicative group of GF(2^m):
    /// the antilog LFSR did not cycle through all `n - 1` nonzero elements.
    #[error("poly 0x{poly:x} is not a primitive polynomial for GF(2^{m})")]
    NonPrimitivePolynomial { m: u32, poly: u32 },

    /// `pad = n - nroots - len` fell outside `[0, n - nroots]`, i.e. `len`
    /// exceeds the block's payload capacity or underflows it.
    #[error("length {len} out of range for n={n}, nroots={nroots} (payload capacity {capacity})")]
    LengthOutOfRange { len: usize, n: u32, nroots: u32, capacity: usize },

    /// `no_eras` or an individual erasure position violated the decoder's
    /// precondition (`no_eras` within `[0, nroots]`, every position a valid
    /// shortened-block symbol position).
    #[error("invalid erasure input: no_eras={no_eras} exceeds nroots={nroots}, or a position was out of range")]
    InvalidErasures { no_eras: usize, nroots: u32 },
}
