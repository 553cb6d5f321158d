//! True three-sequence LCS.
//!
//! A match advances all three axes at once and requires all three
//! characters to be equal; every such transition is recorded as a
//! [`Dependency`](crate::multiway::Dependency) so the presentation layer
//! can animate the diagonal chain through the cube.

use algolens_core::Matrix3;

use crate::multiway::Dependency;

/// The `(l1+1) × (l2+1) × (l3+1)` LCS cube; all three boundary planes
/// are zero and the monotonicity invariant holds along every axis.
pub type DpTable3 = Matrix3<u32>;

pub(crate) struct ThreeWay {
    pub table: DpTable3,
    pub lcs: String,
    pub dependencies: Vec<Dependency>,
}

pub(crate) fn solve(a: &str, b: &str, c: &str) -> ThreeWay {
    let s1: Vec<char> = a.chars().collect();
    let s2: Vec<char> = b.chars().collect();
    let s3: Vec<char> = c.chars().collect();
    let (l1, l2, l3) = (s1.len(), s2.len(), s3.len());

    let mut table = DpTable3::filled(l1 + 1, l2 + 1, l3 + 1, 0);
    let mut dependencies = Vec::new();

    for i in 1..=l1 {
        for j in 1..=l2 {
            for k in 1..=l3 {
                if s1[i - 1] == s2[j - 1] && s2[j - 1] == s3[k - 1] {
                    let value = table[(i - 1, j - 1, k - 1)] + 1;
                    table[(i, j, k)] = value;
                    dependencies.push(Dependency {
                        from: [i - 1, j - 1, k - 1],
                        to: [i, j, k],
                        value,
                    });
                } else {
                    table[(i, j, k)] = table[(i - 1, j, k)]
                        .max(table[(i, j - 1, k)])
                        .max(table[(i, j, k - 1)]);
                }
            }
        }
    }

    let lcs = reconstruct(&s1, &s2, &s3, &table);
    ThreeWay {
        table,
        lcs,
        dependencies,
    }
}

/// Walks the cube back from `(l1, l2, l3)`. On a three-way match the
/// walk steps along the main diagonal; otherwise it follows the best
/// single-axis predecessor, preferring axis order i, j, k on ties.
fn reconstruct(s1: &[char], s2: &[char], s3: &[char], table: &DpTable3) -> String {
    let mut lcs = Vec::new();
    let (mut i, mut j, mut k) = (s1.len(), s2.len(), s3.len());

    while i > 0 && j > 0 && k > 0 {
        if s1[i - 1] == s2[j - 1] && s2[j - 1] == s3[k - 1] {
            lcs.push(s1[i - 1]);
            i -= 1;
            j -= 1;
            k -= 1;
        } else {
            let along_i = table[(i - 1, j, k)];
            let along_j = table[(i, j - 1, k)];
            let along_k = table[(i, j, k - 1)];
            if along_i >= along_j && along_i >= along_k {
                i -= 1;
            } else if along_j >= along_k {
                j -= 1;
            } else {
                k -= 1;
            }
        }
    }

    lcs.reverse();
    lcs.into_iter().collect()
}
