//! Code units: the fixed-width elements an input sequence is made of.

use crate::mixer::HashState;

/// One element of an input sequence.
///
/// Every implementor decomposes into `BYTES` bytes, fed to the mixer least
/// significant byte first regardless of host endianness.
pub trait CodeUnit: Copy + Eq + Send + Sync + 'static {
    const BYTES: usize;
    /// Sentinel that ends a terminated sequence.
    const NUL: Self;

    /// Maps `A..=Z` to `a..=z`; every other value is returned unchanged.
    fn ascii_tolower(self) -> Self;

    /// Maps `a..=z` to `A..=Z`; every other value is returned unchanged.
    fn ascii_toupper(self) -> Self;

    /// Mixes every byte of this unit into `state`, low byte first.
    fn mix_into<S: HashState>(self, state: S) -> S;
}

macro_rules! impl_case_fns {
    ($type:ty, $lower:ident, $upper:ident) => {
        #[inline(always)]
        pub const fn $lower(c: $type) -> $type {
            if c >= b'A' as $type && c <= b'Z' as $type {
                c + (b'a' - b'A') as $type
            } else {
                c
            }
        }

        #[inline(always)]
        pub const fn $upper(c: $type) -> $type {
            if c >= b'a' as $type && c <= b'z' as $type {
                c - (b'a' - b'A') as $type
            } else {
                c
            }
        }
    };
}

impl_case_fns!(u8, ascii_tolower_u8, ascii_toupper_u8);
impl_case_fns!(u16, ascii_tolower_u16, ascii_toupper_u16);
impl_case_fns!(u32, ascii_tolower_u32, ascii_toupper_u32);

macro_rules! impl_code_unit {
    ($type:ty, $lower:ident, $upper:ident) => {
        impl CodeUnit for $type {
            const BYTES: usize = core::mem::size_of::<$type>();
            const NUL: $type = 0;

            #[inline(always)]
            fn ascii_tolower(self) -> $type {
                $lower(self)
            }

            #[inline(always)]
            fn ascii_toupper(self) -> $type {
                $upper(self)
            }

            #[inline(always)]
            fn mix_into<S: HashState>(self, state: S) -> S {
                self.to_le_bytes()
                    .iter()
                    .fold(state, |state, &byte| state.mix(byte))
            }
        }
    };
}

impl_code_unit!(u8, ascii_tolower_u8, ascii_toupper_u8);
impl_code_unit!(u16, ascii_tolower_u16, ascii_toupper_u16);
impl_code_unit!(u32, ascii_tolower_u32, ascii_toupper_u32);

// `char` hashes exactly like its scalar value as a 32-bit unit.
impl CodeUnit for char {
    const BYTES: usize = 4;
    const NUL: char = '\0';

    #[inline(always)]
    fn ascii_tolower(self) -> char {
        self.to_ascii_lowercase()
    }

    #[inline(always)]
    fn ascii_toupper(self) -> char {
        self.to_ascii_uppercase()
    }

    #[inline(always)]
    fn mix_into<S: HashState>(self, state: S) -> S {
        (self as u32).mix_into(state)
    }
}
