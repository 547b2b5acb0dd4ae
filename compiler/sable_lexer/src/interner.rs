//! String interning.
//!
//! Identifiers, attribute names and cooked string contents are stored once
//! and referenced by a 4-byte [`Name`] handle, which keeps tokens `Copy`
//! and makes name comparison an integer compare.
//!
//! Each lex invocation owns its interner; nothing is shared across
//! invocations, so there is no locking anywhere on the lexing path.

use rustc_hash::FxHashMap;

/// Handle to an interned string.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Name(u32);

impl Name {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

/// Deduplicating string store.
#[derive(Debug, Default)]
pub struct Interner {
    map: FxHashMap<Box<str>, Name>,
    strings: Vec<Box<str>>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a string, returning the existing handle if seen before.
    pub fn intern(&mut self, text: &str) -> Name {
        if let Some(&name) = self.map.get(text) {
            return name;
        }
        let name = Name(u32::try_from(self.strings.len()).unwrap_or(u32::MAX));
        let boxed: Box<str> = text.into();
        self.strings.push(boxed.clone());
        self.map.insert(boxed, name);
        name
    }

    /// Resolve a handle back to its string.
    ///
    /// Handles are only minted by [`intern`](Self::intern) on this
    /// interner; a foreign handle resolves to the empty string.
    pub fn resolve(&self, name: Name) -> &str {
        self.strings
            .get(name.0 as usize)
            .map_or("", |s| s.as_ref())
    }

    /// Number of distinct interned strings.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
