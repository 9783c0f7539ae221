//! String isomorphism via a two-way character correspondence.
//!
//! Two strings are isomorphic when there is a bijection between their characters that maps
//! one string onto the other position by position. Both directions of the bijection are
//! tracked explicitly: with only the `s → t` direction, `"ab"` would wrongly map onto `"cc"`.
//!
//! ```rust
//! use auxiliary_methods::isomorphic::is_isomorphic;
//!
//! assert!(is_isomorphic("egg", "add"));
//! assert!(is_isomorphic("paper", "title"));
//! assert!(!is_isomorphic("foo", "bar"));
//! assert!(!is_isomorphic("ab", "cc"));
//! ```

use std::collections::HashMap;

/// Number of directly indexed code points: the full 8-bit extended ASCII range.
const TABLE_SIZE: usize = 256;

/// Marks an empty table slot. Not a valid `char`, since code points stop at `0x10FFFF`.
const UNMAPPED: u32 = u32::MAX;

/// One direction of a character mapping.
///
/// Code points below [`TABLE_SIZE`] live in a fixed table, the rest in a hash map.
#[derive(Debug, Clone)]
struct Mapping {
    table: [u32; TABLE_SIZE],
    wide: HashMap<char, char>,
}

impl Mapping {
    fn new() -> Self {
        Self {
            table: [UNMAPPED; TABLE_SIZE],
            wide: HashMap::new(),
        }
    }

    fn get(&self, c: char) -> Option<char> {
        let code = c as usize;
        if code < TABLE_SIZE {
            match self.table[code] {
                UNMAPPED => None,
                v => char::from_u32(v),
            }
        } else {
            self.wide.get(&c).copied()
        }
    }

    fn insert(&mut self, from: char, to: char) {
        let code = from as usize;
        if code < TABLE_SIZE {
            self.table[code] = to as u32;
        } else {
            self.wide.insert(from, to);
        }
    }
}

/// A partial bijection between the characters of two strings.
#[derive(Debug, Clone)]
pub struct Correspondence {
    forward: Mapping,
    backward: Mapping,
    len: usize,
}

impl Default for Correspondence {
    fn default() -> Self {
        Self::new()
    }
}

impl Correspondence {
    /// Creates an empty correspondence.
    pub fn new() -> Self {
        Self {
            forward: Mapping::new(),
            backward: Mapping::new(),
            len: 0,
        }
    }

    /// Relates `a` (from the first string) to `b` (from the second string).
    ///
    /// If neither character is mapped yet, both directions are established together.
    /// Otherwise the existing mapping must send `a` to `b` and `b` back to `a`.
    /// Returns false on a contradiction, in which case nothing is changed.
    pub fn bind(&mut self, a: char, b: char) -> bool {
        match (self.forward.get(a), self.backward.get(b)) {
            (None, None) => {
                self.forward.insert(a, b);
                self.backward.insert(b, a);
                self.len += 1;
                true
            }
            (fa, fb) => fa == Some(b) && fb == Some(a),
        }
    }

    /// Character of the second string that `a` is mapped to.
    pub fn image(&self, a: char) -> Option<char> {
        self.forward.get(a)
    }

    /// Character of the first string that `b` is mapped from.
    pub fn preimage(&self, b: char) -> Option<char> {
        self.backward.get(b)
    }

    /// Number of related character pairs.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Returns the bijection mapping `s` onto `t`, if the strings are isomorphic.
pub fn isomorphism(s: &str, t: &str) -> Option<Correspondence> {
    if s.chars().count() != t.chars().count() {
        return None;
    }
    let mut correspondence = Correspondence::new();
    for (a, b) in s.chars().zip(t.chars()) {
        if !correspondence.bind(a, b) {
            return None;
        }
    }
    Some(correspondence)
}

/// Determines whether `s` and `t` are isomorphic.
///
/// Strings of different lengths (counted in characters) are never isomorphic.
pub fn is_isomorphic(s: &str, t: &str) -> bool {
    isomorphism(s, t).is_some()
}

/// Byte-string variant: each byte is read as the extended ASCII (Latin-1) code point of the same value.
pub fn is_isomorphic_bytes(s: &[u8], t: &[u8]) -> bool {
    if s.len() != t.len() {
        return false;
    }
    let mut correspondence = Correspondence::new();
    s.iter()
        .zip(t)
        .all(|(&a, &b)| correspondence.bind(char::from(a), char::from(b)))
}
