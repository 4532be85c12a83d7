//! The FNV-1a mixing step and its per-width parameters.

pub const FNV32_PRIME: u32 = 0x0100_0193;
pub const FNV32_OFFSET_BASIS: u32 = 0x811C_9DC5;

pub const FNV64_PRIME: u64 = 0x0000_0100_0000_01B3;
pub const FNV64_OFFSET_BASIS: u64 = 0xCBF2_9CE4_8422_2325;

/// One 32-bit mixing step: xor the byte in, then multiply by the prime.
#[inline(always)]
pub const fn mix32(state: u32, byte: u8) -> u32 {
    (state ^ byte as u32).wrapping_mul(FNV32_PRIME)
}

/// One 64-bit mixing step.
#[inline(always)]
pub const fn mix64(state: u64, byte: u8) -> u64 {
    (state ^ byte as u64).wrapping_mul(FNV64_PRIME)
}

/// An accumulator width the engine can run on.
///
/// Implemented for `u32` and `u64` only. Each implementation carries its own
/// (prime, offset basis) pair so generic code picks the right constants by
/// type alone.
pub trait HashState: Copy + Eq + core::fmt::Debug + Send + Sync + 'static {
    const PRIME: Self;
    const OFFSET_BASIS: Self;
    const BITS: u32;

    fn mix(self, byte: u8) -> Self;

    /// Zero-extends the state for `core::hash::Hasher::finish`.
    fn widen(self) -> u64;
}

impl HashState for u32 {
    const PRIME: u32 = FNV32_PRIME;
    const OFFSET_BASIS: u32 = FNV32_OFFSET_BASIS;
    const BITS: u32 = 32;

    #[inline(always)]
    fn mix(self, byte: u8) -> u32 {
        mix32(self, byte)
    }

    #[inline(always)]
    fn widen(self) -> u64 {
        self as u64
    }
}

impl HashState for u64 {
    const PRIME: u64 = FNV64_PRIME;
    const OFFSET_BASIS: u64 = FNV64_OFFSET_BASIS;
    const BITS: u32 = 64;

    #[inline(always)]
    fn mix(self, byte: u8) -> u64 {
        mix64(self, byte)
    }

    #[inline(always)]
    fn widen(self) -> u64 {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_step_vectors() {
        assert_eq!(mix32(FNV32_OFFSET_BASIS, b'a'), 0xE40C_292C);
        assert_eq!(mix64(FNV64_OFFSET_BASIS, b'a'), 0xAF63_DC4C_8601_EC8C);
    }

    #[test]
    fn test_xor_before_multiply() {
        let state = 0x1234_5678u32;
        let expected = (state ^ 0x9A).wrapping_mul(FNV32_PRIME);
        assert_eq!(mix32(state, 0x9A), expected);
    }

    #[test]
    fn test_wraps_instead_of_overflowing() {
        assert_eq!(mix32(u32::MAX, 0), u32::MAX.wrapping_mul(FNV32_PRIME));
        assert_eq!(mix64(u64::MAX, 0), u64::MAX.wrapping_mul(FNV64_PRIME));
    }

    #[test]
    fn test_trait_matches_const_fns() {
        for byte in [0u8, 1, 0x41, 0x7F, 0x80, 0xFF] {
            assert_eq!(
                HashState::mix(FNV32_OFFSET_BASIS, byte),
                mix32(FNV32_OFFSET_BASIS, byte)
            );
            assert_eq!(
                HashState::mix(FNV64_OFFSET_BASIS, byte),
                mix64(FNV64_OFFSET_BASIS, byte)
            );
        }
        assert_eq!(<u32 as HashState>::BITS, 32);
        assert_eq!(<u64 as HashState>::BITS, 64);
    }

    #[test]
    fn test_widen() {
        assert_eq!(0xDEAD_BEEFu32.widen(), 0xDEAD_BEEFu64);
        assert_eq!(u64::MAX.widen(), u64::MAX);
    }
}
