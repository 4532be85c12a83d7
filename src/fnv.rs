//! Compile-time engines.
//!
//! Stable `const fn` cannot call trait methods or function pointers, so each
//! (state width, code unit width) pair gets its own concrete function. `while`
//! loops stand in for iterators for the same reason.

use crate::mixer::{mix32, mix64, FNV32_OFFSET_BASIS, FNV32_PRIME, FNV64_OFFSET_BASIS, FNV64_PRIME};
use crate::transform::Transform;

macro_rules! impl_sized {
    ($name:ident, $state:ty, $mix:ident, $basis:expr, $unit:ty, $apply:ident) => {
        #[inline]
        pub const fn $name(units: &[$unit], transform: Transform) -> $state {
            let mut hash = $basis;
            let mut i = 0;
            while i < units.len() {
                let bytes = transform.$apply(units[i]).to_le_bytes();
                let mut b = 0;
                while b < bytes.len() {
                    hash = $mix(hash, bytes[b]);
                    b += 1;
                }
                i += 1;
            }
            hash
        }
    };
}

macro_rules! impl_terminated {
    ($name:ident, $state:ty, $mix:ident, $basis:expr, $unit:ty, $apply:ident) => {
        /// Stops at the first NUL unit, or at the end of the slice.
        #[inline]
        pub const fn $name(units: &[$unit], transform: Transform) -> $state {
            let mut hash = $basis;
            let mut i = 0;
            while i < units.len() && units[i] != 0 {
                let bytes = transform.$apply(units[i]).to_le_bytes();
                let mut b = 0;
                while b < bytes.len() {
                    hash = $mix(hash, bytes[b]);
                    b += 1;
                }
                i += 1;
            }
            hash
        }
    };
}

macro_rules! impl_engine {
    ($engine:ident, $state:ty, $mix:ident, $prime:expr, $basis:expr) => {
        impl $engine {
            pub const PRIME: $state = $prime;
            pub const OFFSET_BASIS: $state = $basis;

            #[inline(always)]
            pub const fn mix(state: $state, byte: u8) -> $state {
                $mix(state, byte)
            }

            impl_sized!(hash_u8, $state, $mix, $basis, u8, apply_u8);
            impl_sized!(hash_u16, $state, $mix, $basis, u16, apply_u16);
            impl_sized!(hash_u32, $state, $mix, $basis, u32, apply_u32);

            impl_terminated!(hash_u8_terminated, $state, $mix, $basis, u8, apply_u8);
            impl_terminated!(hash_u16_terminated, $state, $mix, $basis, u16, apply_u16);
            impl_terminated!(hash_u32_terminated, $state, $mix, $basis, u32, apply_u32);

            #[inline]
            pub const fn hash_str(s: &str, transform: Transform) -> $state {
                Self::hash_u8(s.as_bytes(), transform)
            }
        }
    };
}

/// 32-bit FNV-1a.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Fnv1a32;

/// 64-bit FNV-1a.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Fnv1a64;

impl_engine!(Fnv1a32, u32, mix32, FNV32_PRIME, FNV32_OFFSET_BASIS);
impl_engine!(Fnv1a64, u64, mix64, FNV64_PRIME, FNV64_OFFSET_BASIS);

/// Engine matching the target's pointer width.
#[cfg(target_pointer_width = "64")]
pub type Fnv1a = Fnv1a64;
#[cfg(not(target_pointer_width = "64"))]
pub type Fnv1a = Fnv1a32;

/// Hash type produced by [`Fnv1a`].
#[cfg(target_pointer_width = "64")]
pub type NativeHash = u64;
#[cfg(not(target_pointer_width = "64"))]
pub type NativeHash = u32;
