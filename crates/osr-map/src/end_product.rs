use std::collections::HashMap;

use osr_model::ReferenceTable;

/// Proper name → suggested end product, used to prefill Digi-Key feedback.
///
/// Keys compare exactly, matching the reference data's own spelling; the
/// first entry for a key wins.
#[derive(Debug, Clone, Default)]
pub struct EndProductMap {
    products: HashMap<String, String>,
}

impl EndProductMap {
    pub fn from_reference(table: &ReferenceTable) -> Self {
        let mut products = HashMap::new();
        for entry in &table.entries {
            products
                .entry(entry.key.clone())
                .or_insert_with(|| entry.value.clone());
        }
        Self { products }
    }

    pub fn lookup(&self, proper_name: &str) -> Option<&str> {
        self.products.get(proper_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_first_entry_wins() {
        let table = ReferenceTable::from_pairs(
            "EndProductMap",
            [("Acme", "Drones"), ("Acme", "Robots"), ("Globex", "Sensors")],
        );
        let map = EndProductMap::from_reference(&table);
        assert_eq!(map.lookup("Acme"), Some("Drones"));
        assert_eq!(map.lookup("ACME"), None);
        assert_eq!(map.len(), 2);
    }
}
