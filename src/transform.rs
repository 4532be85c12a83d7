use crate::code_unit::{
    ascii_tolower_u16, ascii_tolower_u32, ascii_tolower_u8, ascii_toupper_u16, ascii_toupper_u32,
    ascii_toupper_u8, CodeUnit,
};

/// Per-code-unit rewrite applied before a unit is decomposed into bytes.
///
/// A plain enum rather than a function pointer so the compile-time engine
/// can dispatch on it inside `const fn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Transform {
    #[default]
    Identity,
    AsciiLower,
    AsciiUpper,
}

impl Transform {
    #[inline(always)]
    pub fn apply<C: CodeUnit>(self, c: C) -> C {
        match self {
            Transform::Identity => c,
            Transform::AsciiLower => c.ascii_tolower(),
            Transform::AsciiUpper => c.ascii_toupper(),
        }
    }

    #[inline(always)]
    pub const fn apply_u8(self, c: u8) -> u8 {
        match self {
            Transform::Identity => c,
            Transform::AsciiLower => ascii_tolower_u8(c),
            Transform::AsciiUpper => ascii_toupper_u8(c),
        }
    }

    #[inline(always)]
    pub const fn apply_u16(self, c: u16) -> u16 {
        match self {
            Transform::Identity => c,
            Transform::AsciiLower => ascii_tolower_u16(c),
            Transform::AsciiUpper => ascii_toupper_u16(c),
        }
    }

    #[inline(always)]
    pub const fn apply_u32(self, c: u32) -> u32 {
        match self {
            Transform::Identity => c,
            Transform::AsciiLower => ascii_tolower_u32(c),
            Transform::AsciiUpper => ascii_toupper_u32(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        assert_eq!(Transform::default(), Transform::Identity);
        assert_eq!(Transform::default().apply(b'Q'), b'Q');
    }

    #[test]
    fn test_generic_matches_const() {
        for t in [Transform::Identity, Transform::AsciiLower, Transform::AsciiUpper] {
            for c in 0u8..=0xFF {
                assert_eq!(t.apply(c), t.apply_u8(c));
                assert_eq!(t.apply(c as u16), t.apply_u16(c as u16));
                assert_eq!(t.apply(c as u32 | 0x100), t.apply_u32(c as u32 | 0x100));
            }
        }
    }

    #[test]
    fn test_high_byte_blocks_folding() {
        assert_eq!(Transform::AsciiLower.apply_u16(0x1241), 0x1241);
        assert_eq!(Transform::AsciiUpper.apply_u32(0x0000_0061), 0x41);
    }
}
