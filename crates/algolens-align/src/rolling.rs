//! Space-optimized length-only LCS.

/// LCS length in O(min(m, n)) space.
///
/// Keeps two 1D rows; the shorter string drives the inner loop and the
/// rows swap roles after each outer iteration. Path reconstruction is
/// impossible from this variant because the full table history is never
/// materialized.
pub fn lcs_length(a: &str, b: &str) -> u32 {
    let mut short: Vec<char> = a.chars().collect();
    let mut long: Vec<char> = b.chars().collect();
    if short.len() > long.len() {
        std::mem::swap(&mut short, &mut long);
    }

    let mut prev = vec![0u32; short.len() + 1];
    let mut curr = vec![0u32; short.len() + 1];

    for i in 1..=long.len() {
        for j in 1..=short.len() {
            curr[j] = if short[j - 1] == long[i - 1] {
                prev[j - 1] + 1
            } else {
                prev[j].max(curr[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}
