//! String pairs with known LCS answers.

/// `(left, right, lcs)` triples.
///
/// Where a pair admits several longest common subsequences, the listed
/// answer is the one the engine's deterministic tie-break (prefer the
/// row-decrement direction) reconstructs.
pub const KNOWN_PAIRS: &[(&str, &str, &str)] = &[
    ("ABCBDAB", "BDCABA", "BCBA"),
    ("AGGTAB", "GXTXAYB", "GTAB"),
    ("ABC", "ABC", "ABC"),
    ("ABC", "DEF", ""),
    ("AAAA", "AA", "AA"),
    ("", "", ""),
    ("XMJYAUZ", "MZJAWXU", "MJAU"),
];
