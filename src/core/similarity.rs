//! String similarity metrics used by the scorers.

use std::collections::BTreeSet;

/// Levenshtein distance where a substitution costs 2 (one delete plus one insert).
///
/// # Returns
/// Number of insertions and deletions needed to transform a into b
pub fn indel_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 { return n; }
    if n == 0 { return m; }

    // Two rows are enough
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 2 };
            curr[j] = (prev[j] + 1)
                .min(curr[j - 1] + 1)
                .min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Normalized indel similarity in [0, 1]
///
/// `(len_a + len_b - indel_distance) / (len_a + len_b)`
pub fn indel_ratio(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let total = a.chars().count() + b.chars().count();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    (total - indel_distance(a, b)) as f64 / total as f64
}

/// Whole-percent ratio, 0 when either side is empty
#[inline]
fn percent_ratio(a: &str, b: &str) -> u32 {
    if a == b {
        return 100;
    }
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    (indel_ratio(a, b) * 100.0).round_ties_even() as u32
}

/// Strip non-ASCII, replace punctuation with spaces, lower-case, trim
fn full_process(s: &str) -> String {
    let processed: String = s
        .chars()
        .filter(char::is_ascii)
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();
    processed.trim().to_string()
}

fn join(tokens: impl IntoIterator<Item = impl AsRef<str>>) -> String {
    tokens
        .into_iter()
        .map(|t| t.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Token-order-insensitive similarity in [0, 1]
///
/// Both strings are split into sorted token sets. The shared tokens are
/// compared against "shared + leftovers" of each side, and the two
/// "shared + leftovers" strings against each other. The best of those three
/// indel ratios wins, rounded to whole percent.
///
/// "palace spicy" and "Spicy Palace" score 1.0.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let a = full_process(a);
    let b = full_process(b);
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();

    let sect = join(tokens_a.intersection(&tokens_b));
    let only_a = join(tokens_a.difference(&tokens_b));
    let only_b = join(tokens_b.difference(&tokens_a));

    let combined_a = format!("{} {}", sect, only_a).trim().to_string();
    let combined_b = format!("{} {}", sect, only_b).trim().to_string();

    let best = percent_ratio(&sect, &combined_a)
        .max(percent_ratio(&sect, &combined_b))
        .max(percent_ratio(&combined_a, &combined_b));

    f64::from(best) / 100.0
}

/// Classic Jaro similarity in [0, 1]
///
/// Characters match when equal and no further apart than
/// `max(len_a, len_b) / 2 - 1` positions. Transpositions are matched
/// characters that appear in a different order, halved.
pub fn jaro(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let window = (a.len().max(b.len()) / 2).saturating_sub(1);

    let mut a_matches = vec![false; a.len()];
    let mut b_matches = vec![false; b.len()];
    let mut matches = 0usize;

    for (i, &ac) in a.iter().enumerate() {
        let start = i.saturating_sub(window);
        let end = (i + window + 1).min(b.len());

        for j in start..end {
            if b_matches[j] || b[j] != ac {
                continue;
            }
            a_matches[i] = true;
            b_matches[j] = true;
            matches += 1;
            break;
        }
    }

    if matches == 0 {
        return 0.0;
    }

    let mut transpositions = 0usize;
    let mut k = 0usize;
    for (i, &ac) in a.iter().enumerate() {
        if !a_matches[i] {
            continue;
        }
        while !b_matches[k] {
            k += 1;
        }
        if ac != b[k] {
            transpositions += 1;
        }
        k += 1;
    }

    let m = matches as f64;
    let t = (transpositions / 2) as f64;

    (m / a.len() as f64 + m / b.len() as f64 + (m - t) / m) / 3.0
}
