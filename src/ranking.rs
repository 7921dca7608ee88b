use indexmap::IndexMap;
use std::hash::Hash;

/// Occurrence counts in first-seen order.
#[derive(Debug, Clone)]
pub struct FrequencyTable<T: Hash + Eq> {
    counts: IndexMap<T, usize>,
}

impl<T: Hash + Eq> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self {
            counts: IndexMap::new(),
        }
    }
}

impl<T: Hash + Eq + Clone> FrequencyTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: T) {
        *self.counts.entry(item).or_insert(0) += 1;
    }

    pub fn count(&self, item: &T) -> usize {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// Number of distinct items.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The `n` most frequent items, highest count first. Items with equal
    /// counts keep the order in which they were first seen.
    pub fn most_common(&self, n: usize) -> Vec<(T, usize)> {
        let mut ranked: Vec<(T, usize)> = self
            .counts
            .iter()
            .map(|(item, count)| (item.clone(), *count))
            .collect();

        // stable: ties stay in insertion order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }
}

impl<T: Hash + Eq + Clone> FromIterator<T> for FrequencyTable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = Self::new();
        for item in iter {
            table.add(item);
        }
        table
    }
}

pub fn pick_top<T, I>(items: I, top_size: usize) -> Vec<(T, usize)>
where
    T: Hash + Eq + Clone,
    I: IntoIterator<Item = T>,
{
    items.into_iter().collect::<FrequencyTable<T>>().most_common(top_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_by_count_then_first_seen() {
        let top = pick_top(["b", "a", "c", "a", "c", "d"], 10);
        assert_eq!(top, vec![("a", 2), ("c", 2), ("b", 1), ("d", 1)]);
    }

    #[test]
    fn truncates_to_top_size() {
        assert_eq!(pick_top(["x", "y", "y"], 1), vec![("y", 2)]);
        assert!(pick_top(["x", "y"], 0).is_empty());
        assert!(pick_top(Vec::<&str>::new(), 3).is_empty());
    }

    #[test]
    fn ranking_is_idempotent() {
        let words = ["get", "set", "get", "run", "set", "load", "get", "save"];
        let first = pick_top(words, 3);
        let labels: Vec<_> = first.iter().map(|(label, _)| *label).collect();
        let second = pick_top(labels.clone(), 3);
        let relabeled: Vec<_> = second.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels, relabeled);
        assert_eq!(labels, vec!["get", "set", "run"]);
    }

    #[test]
    fn counts_are_queryable() {
        let table: FrequencyTable<String> = ["a", "b", "a"].iter().map(|s| s.to_string()).collect();
        assert_eq!(table.len(), 2);
        assert_eq!(table.count(&"a".to_string()), 2);
        assert_eq!(table.count(&"z".to_string()), 0);
    }
}
