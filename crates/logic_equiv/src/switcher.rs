//! Simultaneous variable renaming over printed formulas.

use smallvec::SmallVec;

/// Offset from a replacement character to its placeholder. Lands in
/// supplementary private use plane A, which no notation uses.
pub const PLACEHOLDER_OFFSET: u32 = 0xF_0000;

/// A symmetric, bijective variable renaming scoped to one recursive branch.
///
/// Each swap is stored in both directions, so `get(a) == Some(b)` implies
/// `get(b) == Some(a)`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Switches {
    pairs: SmallVec<[(char, char); 6]>,
}

impl Switches {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of directed entries (two per swap).
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn get(&self, var: char) -> Option<char> {
        self.pairs
            .iter()
            .find_map(|&(from, to)| (from == var).then_some(to))
    }

    /// Whether `var` already takes part in a swap.
    pub fn contains(&self, var: char) -> bool {
        self.get(var).is_some()
    }

    /// The printed symbol for `var` under this renaming.
    pub fn apply_char(&self, var: char) -> char {
        self.get(var).unwrap_or(var)
    }

    /// A copy of this renaming extended with `a ↔ b`.
    ///
    /// Neither symbol may already be switched; the caller checks this.
    pub fn with_swap(&self, a: char, b: char) -> Self {
        debug_assert!(!self.contains(a) && !self.contains(b));
        let mut next = self.clone();
        if a != b {
            next.pairs.push((a, b));
            next.pairs.push((b, a));
        }
        next
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.pairs.iter().copied()
    }
}

// Variable symbols are ASCII, so the offset never leaves the valid range.
fn placeholder(c: char) -> char {
    char::from_u32(PLACEHOLDER_OFFSET + u32::from(c)).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Rewrite every switched symbol in `text` to its partner.
///
/// Two passes: keys first become placeholders derived from their
/// replacements, then placeholders become the replacements. A cyclic swap such
/// as `x↔y` therefore comes out right whatever order the pairs are visited in.
pub fn apply_switches(text: &str, switches: &Switches) -> String {
    if switches.is_empty() {
        return text.to_string();
    }

    let mut staged = text.to_string();
    for (from, to) in switches.iter() {
        staged = staged.replace(from, placeholder(to).encode_utf8(&mut [0; 4]));
    }
    for (_, to) in switches.iter() {
        staged = staged.replace(placeholder(to), to.encode_utf8(&mut [0; 4]));
    }
    staged
}
