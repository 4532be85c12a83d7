//! Generic run-time engine, monomorphized per (state width, code unit) pair.
//!
//! See [`crate::fnv`] for the `const fn` counterparts usable at compile time.

use crate::code_unit::CodeUnit;
use crate::mixer::HashState;
use crate::transform::Transform;

/// Hashes exactly `units.len()` code units.
#[inline]
pub fn hash_sized<S: HashState, C: CodeUnit>(units: &[C], transform: Transform) -> S {
    units
        .iter()
        .fold(S::OFFSET_BASIS, |state, &cu| transform.apply(cu).mix_into(state))
}

/// Hashes code units up to (not including) the first NUL, or the whole slice
/// when it holds none.
#[inline]
pub fn hash_terminated<S: HashState, C: CodeUnit>(units: &[C], transform: Transform) -> S {
    let len = units.iter().position(|&cu| cu == C::NUL).unwrap_or(units.len());
    hash_sized(&units[..len], transform)
}

/// Hashes a NUL-terminated buffer handed over from foreign code.
///
/// # Safety
///
/// `ptr` must be non-null, aligned for `C`, and point to a readable sequence
/// of `C` that ends with `C::NUL`. The buffer is only read for the duration
/// of the call.
pub unsafe fn hash_terminated_ptr<S: HashState, C: CodeUnit>(
    ptr: *const C,
    transform: Transform,
) -> S {
    let mut state = S::OFFSET_BASIS;
    let mut cursor = ptr;
    loop {
        let cu = cursor.read();
        if cu == C::NUL {
            break state;
        }
        state = transform.apply(cu).mix_into(state);
        cursor = cursor.add(1);
    }
}

/// Like [`hash_sized`] with a caller-supplied transform.
#[inline]
pub fn hash_with<S, C, F>(units: &[C], f: F) -> S
where
    S: HashState,
    C: CodeUnit,
    F: Fn(C) -> C,
{
    units
        .iter()
        .fold(S::OFFSET_BASIS, |state, &cu| f(cu).mix_into(state))
}

/// Hashes every unit an iterator yields, e.g. `str::encode_utf16()`.
#[inline]
pub fn hash_iter<S, C, I>(units: I, transform: Transform) -> S
where
    S: HashState,
    C: CodeUnit,
    I: IntoIterator<Item = C>,
{
    units
        .into_iter()
        .fold(S::OFFSET_BASIS, |state, cu| transform.apply(cu).mix_into(state))
}
