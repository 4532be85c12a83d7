//! Named one-call helpers for hashing string literals, usable in `const`
//! items.
//!
//! `fnv1a_upper` hashes at the native width and `fnv1a64_upper` always hashes
//! at 64 bits; they are separate operations and agree only on 64-bit targets.

use crate::fnv::{Fnv1a, Fnv1a32, Fnv1a64, NativeHash};
use crate::transform::Transform;

pub const fn fnv1a32(s: &str) -> u32 {
    Fnv1a32::hash_str(s, Transform::Identity)
}

pub const fn fnv1a32_lower(s: &str) -> u32 {
    Fnv1a32::hash_str(s, Transform::AsciiLower)
}

pub const fn fnv1a32_upper(s: &str) -> u32 {
    Fnv1a32::hash_str(s, Transform::AsciiUpper)
}

pub const fn fnv1a64(s: &str) -> u64 {
    Fnv1a64::hash_str(s, Transform::Identity)
}

pub const fn fnv1a64_lower(s: &str) -> u64 {
    Fnv1a64::hash_str(s, Transform::AsciiLower)
}

pub const fn fnv1a64_upper(s: &str) -> u64 {
    Fnv1a64::hash_str(s, Transform::AsciiUpper)
}

pub const fn fnv1a(s: &str) -> NativeHash {
    Fnv1a::hash_str(s, Transform::Identity)
}

pub const fn fnv1a_lower(s: &str) -> NativeHash {
    Fnv1a::hash_str(s, Transform::AsciiLower)
}

pub const fn fnv1a_upper(s: &str) -> NativeHash {
    Fnv1a::hash_str(s, Transform::AsciiUpper)
}

/// UTF-16 text at the native width.
pub const fn fnv1a_wide(units: &[u16]) -> NativeHash {
    Fnv1a::hash_u16(units, Transform::Identity)
}

/// UTF-32 text at the native width.
pub const fn fnv1a_utf32(units: &[u32]) -> NativeHash {
    Fnv1a::hash_u32(units, Transform::Identity)
}

/// Hashes a string at compile time with the native-width engine.
///
/// ```
/// const ID: fnv1a::NativeHash = fnv1a::fnv1a!("NtClose");
/// assert_eq!(ID, fnv1a::fnv1a("NtClose"));
/// const ID_CI: fnv1a::NativeHash = fnv1a::fnv1a!(lower "NTCLOSE");
/// assert_eq!(ID_CI, fnv1a::fnv1a("ntclose"));
/// ```
#[macro_export]
macro_rules! fnv1a {
    (lower $s:expr) => {{
        const HASH: $crate::NativeHash = $crate::fnv1a_lower($s);
        HASH
    }};
    (upper $s:expr) => {{
        const HASH: $crate::NativeHash = $crate::fnv1a_upper($s);
        HASH
    }};
    ($s:expr) => {{
        const HASH: $crate::NativeHash = $crate::fnv1a($s);
        HASH
    }};
}

/// 32-bit counterpart of [`fnv1a!`].
#[macro_export]
macro_rules! fnv1a32 {
    (lower $s:expr) => {{
        const HASH: u32 = $crate::fnv1a32_lower($s);
        HASH
    }};
    (upper $s:expr) => {{
        const HASH: u32 = $crate::fnv1a32_upper($s);
        HASH
    }};
    ($s:expr) => {{
        const HASH: u32 = $crate::fnv1a32($s);
        HASH
    }};
}

/// 64-bit counterpart of [`fnv1a!`].
#[macro_export]
macro_rules! fnv1a64 {
    (lower $s:expr) => {{
        const HASH: u64 = $crate::fnv1a64_lower($s);
        HASH
    }};
    (upper $s:expr) => {{
        const HASH: u64 = $crate::fnv1a64_upper($s);
        HASH
    }};
    ($s:expr) => {{
        const HASH: u64 = $crate::fnv1a64($s);
        HASH
    }};
}
