use std::{collections::HashMap, hash::Hash};

/// count occurrences of each symbol
pub fn count_occurrences<I, T>(symbols: I) -> HashMap<T, usize>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash,
{
    let mut occurrences: HashMap<T, usize> = HashMap::new();
    for symbol in symbols {
        *occurrences.entry(symbol).or_insert(0) += 1;
    }
    occurrences
}
