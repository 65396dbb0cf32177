// src/crypto.rs
use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("Secure random number generation not available: {0}")]
    RandomSourceUnavailable(String),

    #[error("Cannot draw an index from an empty range")]
    EmptyRange,
}

pub type Result<T> = std::result::Result<T, CryptoError>;

// 2^32, the number of distinct raw draws
const DRAW_SPACE: u64 = 1 << 32;

/// A producer of cryptographically secure 32-bit unsigned integers.
///
/// Every generator draws all of its randomness through this trait. There is
/// no fallback: if the source fails, generation fails.
pub trait RandomSource {
    fn next_u32(&mut self) -> Result<u32>;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_u32(&mut self) -> Result<u32> {
        (**self).next_u32()
    }
}

/// The operating system's CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn next_u32(&mut self) -> Result<u32> {
        fill_u32(&mut OsRng)
    }
}

/// Wraps any rng that is marked as cryptographically secure.
#[derive(Debug, Clone)]
pub struct CryptoRngSource<R>(pub R);

impl<R: RngCore + CryptoRng> RandomSource for CryptoRngSource<R> {
    fn next_u32(&mut self) -> Result<u32> {
        fill_u32(&mut self.0)
    }
}

fn fill_u32<R: RngCore + ?Sized>(rng: &mut R) -> Result<u32> {
    let mut bytes = [0u8; 4];
    rng.try_fill_bytes(&mut bytes)
        .map_err(|e| CryptoError::RandomSourceUnavailable(e.to_string()))?;
    Ok(u32::from_le_bytes(bytes))
}

/// Draw a uniformly distributed index in `[0, max)` using rejection sampling.
///
/// Raw values at or above the largest multiple of `max` that fits in 2^32 are
/// discarded and redrawn, so the final `value % max` carries no modulo bias.
/// Fails with [`CryptoError::EmptyRange`] when `max` is zero.
pub fn unbiased_index<S: RandomSource + ?Sized>(source: &mut S, max: usize) -> Result<usize> {
    if max == 0 {
        return Err(CryptoError::EmptyRange);
    }
    let max = max as u64;
    let range = (DRAW_SPACE / max) * max;

    loop {
        let value = u64::from(source.next_u32()?);
        if value < range {
            return Ok((value % max) as usize);
        }
    }
}

/// Draw an index in `[0, len)` by plain modulo reduction of one raw value.
///
/// Carries a small modulo bias whenever `len` does not divide 2^32. Used for
/// word, separator and digit picks where that bias is accepted. Fails with
/// [`CryptoError::EmptyRange`] when `len` is zero.
pub fn modulo_index<S: RandomSource + ?Sized>(source: &mut S, len: usize) -> Result<usize> {
    if len == 0 {
        return Err(CryptoError::EmptyRange);
    }
    let value = u64::from(source.next_u32()?);
    Ok((value % len as u64) as usize)
}
