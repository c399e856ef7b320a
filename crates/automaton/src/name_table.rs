use rustc_hash::FxHashMap;

/// Interns names to dense indices, in order of first insertion.
#[derive(Clone, Debug, Default)]
pub(crate) struct NameTable {
    names: Vec<String>,
    indices: FxHashMap<String, usize>,
}

impl NameTable {
    /// Returns the index of the given name, inserting it when it is new.
    pub fn insert(&mut self, name: &str) -> usize {
        if let Some(index) = self.indices.get(name) {
            return *index;
        }

        let index = self.names.len();
        self.names.push(name.to_string());
        self.indices.insert(name.to_string(), index);
        index
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    pub fn name(&self, index: usize) -> &str {
        &self.names[index]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut table = NameTable::default();

        assert_eq!(table.insert("q0"), 0);
        assert_eq!(table.insert("q1"), 1);
        assert_eq!(table.insert("q0"), 0);

        assert_eq!(table.len(), 2);
        assert_eq!(table.index_of("q1"), Some(1));
        assert_eq!(table.index_of("q2"), None);
        assert_eq!(table.iter().collect::<Vec<_>>(), vec!["q0", "q1"]);
    }
}
