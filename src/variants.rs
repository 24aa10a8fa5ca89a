use crate::rules::SubstitutionTable;
use std::collections::HashSet;

/// Character indices of `word` that the table can substitute, left to right,
/// paired with their replacement.
fn substitutable_positions(word: &[char], table: &SubstitutionTable) -> Vec<(usize, char)> {
    word.iter()
        .enumerate()
        .filter_map(|(index, &c)| table.lookup(c).map(|replacement| (index, replacement)))
        .collect()
}

pub fn substitutable_count(word: &str, table: &SubstitutionTable) -> usize {
    word.chars().filter(|&c| table.lookup(c).is_some()).count()
}

/// Every string reachable from `word` by substituting any subset of its
/// substitutable characters, the unmodified word included.
///
/// The subsets are enumerated iteratively: each substitutable position
/// doubles the current batch, so exactly `2^k` candidates are built for
/// `k` substitutable characters. Characters outside the chosen subset keep
/// their original case.
pub fn generate_variants(word: &str, table: &SubstitutionTable) -> HashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let positions = substitutable_positions(&chars, table);

    let mut batch: Vec<Vec<char>> = Vec::with_capacity(1 << positions.len().min(16));
    batch.push(chars);

    for (index, replacement) in positions {
        let substituted: Vec<Vec<char>> = batch
            .iter()
            .map(|variant| {
                let mut variant = variant.clone();
                if let Some(slot) = variant.get_mut(index) {
                    *slot = replacement;
                }
                variant
            })
            .collect();
        batch.extend(substituted);
    }

    batch
        .into_iter()
        .map(|chars| chars.into_iter().collect())
        .collect()
}
