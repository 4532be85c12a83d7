//! fnv1a - FNV-1a hashing for bytes and wide strings, at compile time or run time
//! **WARNING: NOT CRYPTOGRAPHICALLY SECURE**
//!
//! Two state widths (`u32`, `u64`) times three code unit widths (`u8`, `u16`,
//! `u32`). Wide code units are split into bytes low byte first, so results do
//! not depend on host endianness. An optional ASCII case fold is applied to
//! each whole code unit before it is split.
//!
//! ```
//! use fnv1a::{Fnv1a64, Transform};
//!
//! const KEY: u64 = Fnv1a64::hash_str("Content-Type", Transform::AsciiLower);
//! assert_eq!(KEY, fnv1a::fnv1a64("content-type"));
//!
//! let wide: Vec<u16> = "Content-Type".encode_utf16().collect();
//! let h: u32 = fnv1a::hash_sized(&wide, Transform::Identity);
//! assert_eq!(h, fnv1a::Fnv1a32::hash_u16(&wide, Transform::Identity));
//! ```

pub mod code_unit;
pub mod engine;
pub mod fnv;
pub mod hasher;
pub mod mixer;
pub mod shorthand;
pub mod transform;

pub use code_unit::CodeUnit;
pub use engine::{hash_iter, hash_sized, hash_terminated, hash_terminated_ptr, hash_with};
pub use fnv::{Fnv1a, Fnv1a32, Fnv1a64, NativeHash};
pub use hasher::{BuildFnv1a, Fnv1aHasher, FnvHashMap, FnvHashSet};
pub use mixer::{
    mix32, mix64, HashState, FNV32_OFFSET_BASIS, FNV32_PRIME, FNV64_OFFSET_BASIS, FNV64_PRIME,
};
pub use shorthand::{
    fnv1a, fnv1a32, fnv1a32_lower, fnv1a32_upper, fnv1a64, fnv1a64_lower, fnv1a64_upper,
    fnv1a_lower, fnv1a_upper, fnv1a_utf32, fnv1a_wide,
};
pub use transform::Transform;

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn test_deterministic() {
        let data = "Hello, FNV-1a!";
        assert_eq!(fnv1a64(data), fnv1a64(data), "Same input should produce same hash");
        assert_eq!(fnv1a32(data), fnv1a32(data));
    }

    #[test]
    fn test_concurrent_callers_agree() {
        let keys: Vec<String> = (0..10_000).map(|i| format!("key-{i:05}")).collect();
        let serial: Vec<u64> = keys.iter().map(|k| fnv1a64(k)).collect();
        let parallel: Vec<u64> = keys.par_iter().map(|k| fnv1a64(k)).collect();
        assert_eq!(serial, parallel);

        let repeated: Vec<u32> = (0..256)
            .into_par_iter()
            .map(|_| fnv1a32_lower("SHARED-INPUT"))
            .collect();
        assert!(repeated.iter().all(|&h| h == fnv1a32("shared-input")));
    }

    #[test]
    fn test_width_independence_of_shape() {
        let bytes = b"abc";
        assert_eq!(
            hash_sized::<u32, u8>(bytes, Transform::Identity),
            Fnv1a32::hash_u8(bytes, Transform::Identity)
        );
        assert_eq!(
            hash_sized::<u64, u8>(bytes, Transform::Identity),
            Fnv1a64::hash_u8(bytes, Transform::Identity)
        );
        assert_ne!(
            hash_sized::<u32, u8>(bytes, Transform::Identity) as u64,
            hash_sized::<u64, u8>(bytes, Transform::Identity)
        );
    }
}
