use std::collections::HashMap;

/// A keyword gate passes when the keyword is a literal substring of the
/// query or the whole-string similarity clears this bound.
pub const INTENT_FUZZY_THRESHOLD: f64 = 0.72;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Block {
    a: usize,
    b: usize,
    size: usize,
}

/// Whole-string similarity ratio in [0, 1]: 2*M / T, where M is the total
/// length of matching blocks found by greedy longest-block alignment and
/// T is the combined character length. 1.0 for identical strings (including
/// two empty strings), near 0 for disjoint ones. Ties between equally long
/// blocks prefer the earliest position in `a`, then in `b`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    let matched: usize = matching_blocks(&a, &b).iter().map(|m| m.size).sum();
    2.0 * matched as f64 / total as f64
}

/// True if any keyword occurs verbatim in `q` or is fuzzily close to it.
pub fn intent_match(q: &str, keywords: &[&str]) -> bool {
    keywords
        .iter()
        .any(|k| q.contains(k) || similarity(q, k) > INTENT_FUZZY_THRESHOLD)
}

/// Plain substring disjunction, no fuzzy component.
pub fn contains_any(q: &str, words: &[&str]) -> bool {
    words.iter().any(|w| q.contains(w))
}

/// All maximal matching blocks, found by recursively splitting around the
/// longest match, in ascending `a` order.
fn matching_blocks(a: &[char], b: &[char]) -> Vec<Block> {
    let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
    for (j, ch) in b.iter().enumerate() {
        b2j.entry(*ch).or_default().push(j);
    }

    let mut queue = vec![(0usize, a.len(), 0usize, b.len())];
    let mut blocks = Vec::new();
    while let Some((alo, ahi, blo, bhi)) = queue.pop() {
        let m = longest_match(a, &b2j, alo, ahi, blo, bhi);
        if m.size > 0 {
            if alo < m.a && blo < m.b {
                queue.push((alo, m.a, blo, m.b));
            }
            if m.a + m.size < ahi && m.b + m.size < bhi {
                queue.push((m.a + m.size, ahi, m.b + m.size, bhi));
            }
            blocks.push(m);
        }
    }
    blocks.sort_by_key(|m| (m.a, m.b));
    blocks
}

/// Longest contiguous matching block within a[alo..ahi] x b[blo..bhi],
/// tracked with a rolling map from b-index to run length.
fn longest_match(
    a: &[char],
    b2j: &HashMap<char, Vec<usize>>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> Block {
    let mut best = Block {
        a: alo,
        b: blo,
        size: 0,
    };
    let mut j2len: HashMap<usize, usize> = HashMap::new();
    for i in alo..ahi {
        let mut new_j2len: HashMap<usize, usize> = HashMap::new();
        if let Some(indices) = b2j.get(&a[i]) {
            // Indices are ascending, so everything past bhi can be skipped.
            for &j in indices {
                if j < blo {
                    continue;
                }
                if j >= bhi {
                    break;
                }
                let k = if j > 0 {
                    j2len.get(&(j - 1)).copied().unwrap_or(0) + 1
                } else {
                    1
                };
                new_j2len.insert(j, k);
                if k > best.size {
                    best = Block {
                        a: i + 1 - k,
                        b: j + 1 - k,
                        size: k,
                    };
                }
            }
        }
        j2len = new_j2len;
    }
    best
}
