//! Encoding and decoding: the LFSR encoder and the syndrome /
//! Berlekamp–Massey / Chien-search / Forney decoder with erasure support.
//!
//! This is a direct generalisation of the classic fixed-GF(256), Vec-based
//! encode/decode pair this crate started from: same Horner-rule syndrome
//! evaluation, same index-form/element-form split, widened from one fixed
//! field to any `RsCodec` built by [`crate::field::RsCodec::new`].

use crate::error::RsError;
use crate::field::{modn, RsCodec};

impl RsCodec {
    /// Compute the `nroots` parity symbols for `data[0..len)` into
    /// `parity[0..nroots)`.
    ///
    /// `invmask` XOR-masks every data symbol as it is consumed; a later
    /// `decode` call over the same transmitted block must supply the same
    /// mask for the effective message to match.
    pub fn encode(&self, data: &[u32], parity: &mut [u32], invmask: u32) -> Result<(), RsError> {
        let RsCodec { params, alpha_to, index_of, genpoly, .. } = self;
        let n = params.n;
        let m = params.m;
        let nroots = params.nroots as usize;
        let a0 = n;

        let len = data.len();
        self.check_len(len)?;
        assert_eq!(parity.len(), nroots, "parity buffer must be exactly nroots symbols");

        for p in parity.iter_mut() {
            *p = 0;
        }

        for i in 0..len {
            let fb_elem = data[i] ^ invmask ^ parity[0];
            let fb = index_of[fb_elem as usize];
            if fb != a0 {
                for j in 1..nroots {
                    parity[j] ^= alpha_to[modn(fb + genpoly[nroots - j], n, m) as usize];
                }
            }
            for k in 0..nroots - 1 {
                parity[k] = parity[k + 1];
            }
            parity[nroots - 1] = if fb != a0 { alpha_to[modn(fb + genpoly[0], n, m) as usize] } else { 0 };
        }

        Ok(())
    }

    /// Decode a possibly-corrupted block, optionally using caller-supplied
    /// erasure positions.
    ///
    /// `eras_pos[0..no_eras)` on entry names known-erased shortened-block
    /// positions; on a successful correcting return its first `count`
    /// entries are overwritten with the located positions in ascending
    /// (chronological Chien-search) order, and, if `corr` is supplied,
    /// `corr[0..count)` holds the XOR patterns applied, aligned with
    /// `eras_pos`. Returns `Ok(count)` with `count >= 0` symbols corrected,
    /// or `Ok(-1)` for an uncorrectable block — that is an ordinary result,
    /// not an error.
    pub fn decode(
        &self,
        data: &mut [u32],
        parity: &mut [u32],
        mut eras_pos: Option<&mut [usize]>,
        no_eras: usize,
        mut corr: Option<&mut [u32]>,
        invmask: u32,
    ) -> Result<i32, RsError> {
        let RsCodec { params, alpha_to, index_of, genpoly: _, iprim } = self;
        let n = params.n;
        let m = params.m;
        let nroots = params.nroots as usize;
        let a0 = n;
        let fcr = params.fcr;
        let prim = params.prim;

        let len = data.len();
        let pad = self.check_len(len)?;
        assert_eq!(parity.len(), nroots, "parity buffer must be exactly nroots symbols");

        if no_eras > nroots {
            return Err(RsError::InvalidErasures { no_eras, nroots: params.nroots });
        }
        if no_eras > 0 && eras_pos.is_none() {
            return Err(RsError::InvalidErasures { no_eras, nroots: params.nroots });
        }
        if let Some(ref ep) = eras_pos {
            if ep.len() < no_eras || ep.len() < nroots {
                return Err(RsError::InvalidErasures { no_eras, nroots: params.nroots });
            }
            for &p in ep[..no_eras].iter() {
                if p >= len + nroots {
                    return Err(RsError::InvalidErasures { no_eras, nroots: params.nroots });
                }
            }
        }
        if let Some(ref c) = corr {
            if c.len() < nroots {
                return Err(RsError::InvalidErasures { no_eras, nroots: params.nroots });
            }
        }

        // --- 4.4.1 syndrome computation ---
        // Every data symbol (not parity) is XOR-masked with `invmask` as it
        // is folded in, mirroring the encoder so that decoding a block
        // encoded under a mask with the same mask is a no-op on the mask.
        let mut s = vec![0u32; nroots];
        for i in 0..nroots {
            let mut acc = 0u32;
            let mut data_iter = data.iter();
            if let Some(&first) = data_iter.next() {
                acc = first ^ invmask;
            }
            for &d in data_iter {
                let c = d ^ invmask;
                acc = if acc == 0 {
                    c
                } else {
                    c ^ alpha_to[modn(index_of[acc as usize] + (fcr + i as u32) * prim, n, m) as usize]
                };
            }
            for &p in parity.iter() {
                acc = if acc == 0 {
                    p
                } else {
                    p ^ alpha_to[modn(index_of[acc as usize] + (fcr + i as u32) * prim, n, m) as usize]
                };
            }
            s[i] = acc;
        }

        let syn_error = s.iter().fold(0u32, |acc, &x| acc | x);
        if syn_error == 0 {
            return Ok(0);
        }

        for syn in s.iter_mut() {
            *syn = index_of[*syn as usize];
        }

        // --- 4.4.2 erasure-locator seeding ---
        let mut lambda = vec![0u32; nroots + 1];
        lambda[0] = 1;
        if no_eras > 0 {
            let eras = &eras_pos.as_ref().unwrap()[..no_eras];
            // `eras_pos` is expressed in shortened-block coordinates (same
            // convention as the positions this function reports back), so
            // it must be shifted by `pad` to land on the full n-symbol
            // block the index-form arithmetic operates over.
            let u0 = modn(prim * (n - 1 - (eras[0] as u32 + pad as u32)), n, m);
            lambda[1] = alpha_to[u0 as usize];
            for k in 1..no_eras {
                let uk = modn(prim * (n - 1 - (eras[k] as u32 + pad as u32)), n, m);
                for j in (1..=k + 1).rev() {
                    if index_of[lambda[j - 1] as usize] != a0 {
                        lambda[j] ^= alpha_to[modn(uk + index_of[lambda[j - 1] as usize], n, m) as usize];
                    }
                }
            }
        }

        if cfg!(debug_assertions) && no_eras > 0 {
            self.debug_check_erasure_locator(&lambda, no_eras);
        }

        // --- 4.4.3 Berlekamp-Massey loop ---
        let mut b = vec![0u32; nroots + 1];
        for i in 0..=nroots {
            b[i] = index_of[lambda[i] as usize];
        }
        let mut el = no_eras;
        for r in (no_eras + 1)..=nroots {
            let mut discr = 0u32;
            for i in 0..r {
                if lambda[i] != 0 && s[r - i - 1] != a0 {
                    discr ^= alpha_to[modn(index_of[lambda[i] as usize] + s[r - i - 1], n, m) as usize];
                }
            }
            let discr_log = index_of[discr as usize];

            if discr_log == a0 {
                // b <- x * b
                for i in (1..=nroots).rev() {
                    b[i] = b[i - 1];
                }
                b[0] = a0;
            } else {
                let mut t = vec![0u32; nroots + 1];
                t[0] = lambda[0];
                for i in 0..nroots {
                    t[i + 1] = lambda[i + 1] ^ if b[i] != a0 { alpha_to[modn(discr_log + b[i], n, m) as usize] } else { 0 };
                }

                if 2 * el <= r + no_eras - 1 {
                    el = r + no_eras - el;
                    for i in 0..=nroots {
                        b[i] = if lambda[i] == 0 { a0 } else { modn(index_of[lambda[i] as usize] + n - discr_log, n, m) };
                    }
                } else {
                    for i in (1..=nroots).rev() {
                        b[i] = b[i - 1];
                    }
                    b[0] = a0;
                }
                lambda = t;
            }
        }

        // --- 4.4.4 locator-polynomial finalisation ---
        let mut lambda_idx = vec![0u32; nroots + 1];
        let mut deg_lambda = 0usize;
        for i in 0..=nroots {
            lambda_idx[i] = index_of[lambda[i] as usize];
            if lambda_idx[i] != a0 {
                deg_lambda = i;
            }
        }

        // --- 4.4.5 Chien search ---
        let mut reg = lambda_idx.clone();
        let mut root = vec![0u32; nroots];
        let mut loc = vec![0usize; nroots];
        let mut located = 0usize;
        let mut k_pos: i64 = -1;
        for i in 1..=n {
            k_pos += *iprim as i64;
            let k = k_pos.rem_euclid(n as i64) as u32;
            let mut q = 1u32;
            for j in (1..=deg_lambda).rev() {
                if reg[j] != a0 {
                    reg[j] = modn(reg[j] + j as u32, n, m);
                    q ^= alpha_to[reg[j] as usize];
                }
            }
            if q != 0 {
                continue;
            }
            root[located] = i;
            loc[located] = k as usize;
            located += 1;
            if located == deg_lambda {
                break;
            }
        }

        if located != deg_lambda {
            return Ok(-1);
        }

        // --- 4.4.6 Forney evaluation ---
        let deg_omega = deg_lambda.saturating_sub(1);
        let mut omega = vec![0u32; nroots];
        for i in 0..=deg_omega {
            let mut acc = 0u32;
            for j in 0..=i {
                if s[i - j] != a0 && lambda_idx[j] != a0 {
                    acc ^= alpha_to[modn(s[i - j] + lambda_idx[j], n, m) as usize];
                }
            }
            omega[i] = index_of[acc as usize];
        }

        // --- 4.4.7 correction application ---
        let mut out_count = 0usize;
        for j in 0..located {
            let mut num1 = 0u32;
            for i in 0..=deg_omega {
                if omega[i] != a0 {
                    num1 ^= alpha_to[modn(omega[i] + (i as u32) * root[j], n, m) as usize];
                }
            }
            if num1 == 0 {
                continue;
            }

            let num2_exp = (root[j] as i64) * (fcr as i64 - 1) + n as i64;
            let num2 = alpha_to[modn(num2_exp as u32, n, m) as usize];

            let mut den = 0u32;
            let mut i = 0usize;
            while i <= deg_lambda.min(nroots - 1) {
                if lambda_idx[i + 1] != a0 {
                    den ^= alpha_to[modn(lambda_idx[i + 1] + (i as u32) * root[j], n, m) as usize];
                }
                i += 2;
            }

            let cor = alpha_to
                [modn(index_of[num1 as usize] + index_of[num2 as usize] + n - index_of[den as usize], n, m) as usize];

            let pos = loc[j];
            if pos < pad {
                continue;
            }
            if pos < (n - params.nroots) as usize {
                data[pos - pad] ^= cor;
            } else if pos < n as usize {
                parity[pos - (n - params.nroots) as usize] ^= cor;
            }
            if let Some(c) = corr.as_deref_mut() {
                c[out_count] = cor;
            }
            if let Some(ep) = eras_pos.as_deref_mut() {
                ep[out_count] = pos - pad;
            }
            out_count += 1;
        }

        Ok(out_count as i32)
    }

    /// Shared length precondition for `encode`/`decode`: `pad = n - nroots
    /// - len` must land in `[0, n)`. Returns `pad` on success.
    fn check_len(&self, len: usize) -> Result<usize, RsError> {
        let n = self.params.n;
        let nroots = self.params.nroots;
        let pad = n as i64 - nroots as i64 - len as i64;
        if pad < 0 || pad >= n as i64 {
            return Err(RsError::LengthOutOfRange { len, n, nroots, capacity: (n - nroots) as usize });
        }
        Ok(pad as usize)
    }

    /// Debug-only cross-check (spec's "Open Question" diagnostic, never
    /// part of the shipped contract): the erasure-only locator should have
    /// exactly `no_eras` roots among `alpha^0 .. alpha^(n-1)`.
    fn debug_check_erasure_locator(&self, lambda: &[u32], no_eras: usize) {
        let RsCodec { params, alpha_to, .. } = self;
        let n = params.n;
        let mut roots = 0usize;
        for i in 0..n {
            let mut acc = 0u32;
            for (j, &l) in lambda.iter().enumerate() {
                if l != 0 {
                    acc ^= self.gf_mul_elem(l, alpha_to[((i as u64 * j as u64) % n as u64) as usize]);
                }
            }
            if acc == 0 {
                roots += 1;
            }
        }
        debug_assert_eq!(roots, no_eras, "erasure locator root count mismatch");
    }

    #[inline]
    fn gf_mul_elem(&self, a: u32, b: u32) -> u32 {
        if a == 0 || b == 0 {
            return 0;
        }
        let RsCodec { params, alpha_to, index_of, .. } = self;
        alpha_to[modn(index_of[a as usize] + index_of[b as usize], params.n, params.m) as usize]
    }
}
