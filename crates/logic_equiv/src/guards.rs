//! Bounds that keep the rewrite search finite.
//!
//! The proliferator has no global size or depth budget. Termination rests on
//! structural recursion plus the two guards below.

use logic_ast::Formula;

/// Fixed pool of variables tried when exploring alpha-renamed quantifiers.
/// At most one swap per candidate can be active at a time, so renaming
/// recursion is at most this deep.
pub const ALPHA_RENAME_CANDIDATES: [char; 3] = ['x', 'y', 'z'];

/// Marker added to the closure of `(p∧¬p)`.
pub const CONTRADICTION_MARKER: &str = "✖";

/// Biconditional unfolding is skipped once either side already contains a
/// biconditional; otherwise unfolded forms would be unfolded again.
pub fn iff_unfold_blocked(left: &Formula, right: &Formula) -> bool {
    let iff = left.notation().iff;
    left.normal().contains(iff) || right.normal().contains(iff)
}
