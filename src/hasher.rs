//! Streaming API and `std::collections` integration.

use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasherDefault, Hasher};

use crate::code_unit::CodeUnit;
use crate::mixer::HashState;
use crate::transform::Transform;

/// Incremental FNV-1a over any number of `absorb` calls.
///
/// FNV-1a carries no buffer or length, so splitting the input anywhere gives
/// the same result as hashing it in one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fnv1aHasher<S: HashState = u64> {
    state: S,
}

impl<S: HashState> Fnv1aHasher<S> {
    pub fn new() -> Self {
        Self {
            state: S::OFFSET_BASIS,
        }
    }

    /// absorb raw bytes
    #[inline]
    pub fn absorb(&mut self, data: &[u8]) {
        self.state = data.iter().fold(self.state, |state, &byte| state.mix(byte));
    }

    /// absorb wide code units, folding case first if asked
    #[inline]
    pub fn absorb_units<C: CodeUnit>(&mut self, units: &[C], transform: Transform) {
        self.state = units
            .iter()
            .fold(self.state, |state, &cu| transform.apply(cu).mix_into(state));
    }

    /// Current accumulator; the hasher stays usable.
    pub fn state(&self) -> S {
        self.state
    }

    pub fn reset(&mut self) {
        self.state = S::OFFSET_BASIS;
    }
}

impl<S: HashState> Default for Fnv1aHasher<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: HashState> Hasher for Fnv1aHasher<S> {
    #[inline]
    fn finish(&self) -> u64 {
        self.state.widen()
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.absorb(bytes);
    }
}

pub type BuildFnv1a<S = u64> = BuildHasherDefault<Fnv1aHasher<S>>;

pub type FnvHashMap<K, V> = HashMap<K, V, BuildFnv1a>;
pub type FnvHashSet<T> = HashSet<T, BuildFnv1a>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::hash_sized;
    use crate::fnv::{Fnv1a32, Fnv1a64};
    use std::hash::{BuildHasher, Hash};

    #[test]
    fn test_streaming_matches_oneshot() {
        let data = b"The quick brown fox jumps over the lazy dog";
        let oneshot = Fnv1a64::hash_u8(data, Transform::Identity);

        let mut streaming = Fnv1aHasher::<u64>::new();
        streaming.absorb(&data[..10]);
        streaming.absorb(&data[10..20]);
        streaming.absorb(&data[20..]);

        assert_eq!(oneshot, streaming.state(), "Streaming should match one-shot");
        assert_eq!(streaming.finish(), oneshot);
    }

    #[test]
    fn test_streaming_units() {
        let wide: Vec<u16> = "Hello Wide World".encode_utf16().collect();
        let mut hasher = Fnv1aHasher::<u32>::new();
        hasher.absorb_units(&wide[..5], Transform::AsciiLower);
        hasher.absorb_units(&wide[5..], Transform::AsciiLower);
        assert_eq!(hasher.state(), hash_sized::<u32, u16>(&wide, Transform::AsciiLower));
        assert_eq!(hasher.finish(), hasher.state() as u64);
    }

    #[test]
    fn test_reset() {
        let mut hasher = Fnv1aHasher::<u32>::default();
        hasher.write(b"scratch");
        hasher.reset();
        assert_eq!(hasher.state(), Fnv1a32::OFFSET_BASIS);
        hasher.write(b"a");
        assert_eq!(hasher.state(), 0xE40C_292C);
    }

    #[test]
    fn test_build_hasher_is_deterministic() {
        let build = BuildFnv1a::<u64>::default();
        let mut h1 = build.build_hasher();
        let mut h2 = build.build_hasher();
        "route/key".hash(&mut h1);
        "route/key".hash(&mut h2);
        assert_eq!(h1.finish(), h2.finish());
    }

    #[test]
    fn test_hash_map_alias() {
        let mut map: FnvHashMap<&str, u32> = FnvHashMap::default();
        map.insert("alpha", 1);
        map.insert("beta", 2);
        assert_eq!(map.get("alpha"), Some(&1));
        assert_eq!(map.get("beta"), Some(&2));

        let set: FnvHashSet<u16> = [1u16, 2, 2, 3].into_iter().collect();
        assert_eq!(set.len(), 3);
    }
}
