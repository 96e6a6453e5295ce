//! In-memory record store: identifier → uppercase sequence bytes.
//!
//! Iteration order is the order in which identifiers were first seen. A
//! repeated identifier replaces the stored sequence in place, so the record
//! keeps the slot of its first occurrence.
use indexmap::IndexMap;

/// Placeholder base for unknown nucleotides.
pub const AMBIGUOUS_BASE: u8 = b'N';

/// Identifier of a sequence record: the first whitespace-delimited token of its header.
pub fn header_id(header: &[u8]) -> String {
    let text = String::from_utf8_lossy(header);
    text.split_whitespace().next().unwrap_or("").to_string()
}

/// Ordered mapping from record identifier to sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: IndexMap<String, Vec<u8>>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, uppercasing the sequence. Returns `true` if the id was already present.
    pub fn insert(&mut self, id: impl Into<String>, seq: &[u8]) -> bool {
        self.records.insert(id.into(), seq.to_ascii_uppercase()).is_some()
    }

    /// Insert an already-normalized sequence without copying it.
    pub(crate) fn insert_owned(&mut self, id: String, seq: Vec<u8>) -> bool {
        self.records.insert(id, seq).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&[u8]> {
        self.records.get(id).map(Vec::as_slice)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.records.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }
}

impl<S: Into<String>, B: AsRef<[u8]>> FromIterator<(S, B)> for RecordStore {
    fn from_iter<I: IntoIterator<Item = (S, B)>>(iter: I) -> Self {
        let mut store = RecordStore::new();
        for (id, seq) in iter {
            store.insert(id, seq.as_ref());
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_id_takes_first_token() {
        assert_eq!(header_id(b"scaffold_1 length=1200 cov=3.1"), "scaffold_1");
        assert_eq!(header_id(b"  lead\tspace"), "lead");
        assert_eq!(header_id(b""), "");
    }

    #[test]
    fn insert_uppercases_and_keeps_first_position_on_duplicate() {
        let mut store = RecordStore::new();
        assert!(!store.insert("a", b"acgt"));
        store.insert("b", b"GG");
        assert!(store.insert("a", b"ttnn"));
        let ids: Vec<_> = store.ids().collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(store.get("a"), Some(&b"TTNN"[..]));
    }
}
