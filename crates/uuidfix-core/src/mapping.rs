//! Invalid prefix -> valid hex pair table.

/// Every invalid two-character prefix the corrector knows about, paired with
/// the hex pair it stands for.
///
/// The table is the coverage boundary: a non-hex pair that is not listed here
/// (for example `l0` or `x0`) is never rewritten.
pub const PREFIX_MAP: [(&str, &str); 16] = [
    ("g0", "20"),
    ("h0", "30"),
    ("i0", "40"),
    ("j0", "50"),
    ("k0", "60"),
    ("m0", "70"),
    ("n0", "80"),
    ("o0", "90"),
    ("p0", "a1"),
    ("q0", "a2"),
    ("r0", "a3"),
    ("s0", "a4"),
    ("t0", "a5"),
    ("u0", "a6"),
    ("v0", "a7"),
    ("w0", "a8"),
];

/// Look up the replacement for an invalid prefix.
pub fn lookup(prefix: &str) -> Option<&'static str> {
    PREFIX_MAP
        .iter()
        .find(|(invalid, _)| *invalid == prefix)
        .map(|(_, valid)| *valid)
}

/// Regex alternation over the table keys, e.g. `g0|h0|...|w0`.
pub(crate) fn key_alternation() -> String {
    PREFIX_MAP
        .iter()
        .map(|(invalid, _)| *invalid)
        .collect::<Vec<_>>()
        .join("|")
}
