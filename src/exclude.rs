//! Exclusion set and the filter that applies it to a [`RecordStore`].
use std::collections::HashSet;

use crate::record::RecordStore;

/// Identifiers to drop before any cleaning happens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    ids: HashSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>) {
        self.ids.insert(id.into());
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Entries that name no record in `store`.
    pub fn unmatched<'a>(&'a self, store: &'a RecordStore) -> impl Iterator<Item = &'a str> + 'a {
        self.ids.iter().map(String::as_str).filter(move |id| !store.contains(id))
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        ExclusionSet { ids: iter.into_iter().map(Into::into).collect() }
    }
}

/// Copy of `store` without the records named in `excluded`, order preserved.
pub fn filter_excluded(store: &RecordStore, excluded: &ExclusionSet) -> RecordStore {
    let mut kept = RecordStore::new();
    for (id, seq) in store.iter().filter(|(id, _)| !excluded.contains(id)) {
        kept.insert_owned(id.to_string(), seq.to_vec());
    }
    tracing::debug!(
        kept = kept.len(),
        dropped = store.len() - kept.len(),
        unmatched = excluded.unmatched(store).count(),
        "exclusion filter applied"
    );
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_listed_ids_and_keeps_order() {
        let store: RecordStore = [("s1", "ACGT"), ("s2", "GGGG"), ("s3", "TTTT")].into_iter().collect();
        let excluded: ExclusionSet = ["s2", "not_there"].into_iter().collect();
        let kept = filter_excluded(&store, &excluded);
        assert_eq!(kept.ids().collect::<Vec<_>>(), vec!["s1", "s3"]);
        assert_eq!(kept.get("s3"), Some(&b"TTTT"[..]));
        assert_eq!(excluded.unmatched(&store).collect::<Vec<_>>(), vec!["not_there"]);
    }

    #[test]
    fn empty_exclusion_is_identity() {
        let store: RecordStore = [("a", "AC"), ("b", "GT")].into_iter().collect();
        assert_eq!(filter_excluded(&store, &ExclusionSet::new()), store);
    }
}
