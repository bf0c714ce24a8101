//! Read-only lookup tables built once during startup.
//!
//! A `Catalog` keeps entries in the order they were first seen so iteration (and the
//! fuzzy resolver's tie-breaking) is deterministic across runs of the same source data.

pub mod items;
pub mod pets;

use std::collections::HashMap;

pub use items::CatalogItem;
pub use pets::CatalogPet;

/// Anything a catalog can index and the fuzzy resolver can search.
pub trait CatalogEntry {
    fn id(&self) -> i64;
    fn name(&self) -> &str;
}

#[derive(Debug, Clone)]
pub struct Catalog<T> {
    entries: Vec<T>,
    index: HashMap<i64, usize>,
}

impl<T: CatalogEntry> Catalog<T> {
    /// Later entries with an id already present replace the earlier entry in place.
    pub fn from_entries(entries: impl IntoIterator<Item = T>) -> Self {
        let mut catalog = Self {
            entries: Vec::new(),
            index: HashMap::new(),
        };
        for entry in entries {
            match catalog.index.get(&entry.id()) {
                Some(&pos) => catalog.entries[pos] = entry,
                None => {
                    catalog.index.insert(entry.id(), catalog.entries.len());
                    catalog.entries.push(entry);
                }
            }
        }
        catalog
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.index.get(&id).map(|&pos| &self.entries[pos])
    }

    pub fn contains(&self, id: i64) -> bool {
        self.index.contains_key(&id)
    }

    pub fn all(&self) -> &[T] {
        &self.entries
    }

    pub fn sorted_by_id(&self) -> Vec<&T> {
        let mut sorted: Vec<&T> = self.entries.iter().collect();
        sorted.sort_by_key(|e| e.id());
        sorted
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Both catalogs, loaded together before the gateway connects.
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub items: Catalog<CatalogItem>,
    pub pets: Catalog<CatalogPet>,
}

/// Renders entries as a fenced block with one `id: name` line each.
pub fn render_id_list<'a, T, I>(entries: I) -> String
where
    T: CatalogEntry + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let lines: Vec<String> = entries
        .into_iter()
        .map(|e| format!("{}: {}", e.id(), e.name()))
        .collect();
    format!("```\n{}\n```", lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, name: &str) -> CatalogItem {
        CatalogItem {
            id,
            name: name.to_string(),
        }
    }

    #[test]
    fn duplicate_ids_keep_first_position_but_latest_value() {
        let catalog = Catalog::from_entries([item(2, "Old"), item(1, "One"), item(2, "New")]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(2).map(|i| i.name.as_str()), Some("New"));
        assert_eq!(catalog.all()[0].id, 2);
    }

    #[test]
    fn sorted_by_id_is_ascending() {
        let catalog = Catalog::from_entries([item(30, "c"), item(4, "a"), item(12, "b")]);
        let ids: Vec<i64> = catalog.sorted_by_id().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![4, 12, 30]);
    }

    #[test]
    fn render_id_list_wraps_in_code_block() {
        let catalog = Catalog::from_entries([item(2, "Prince"), item(1, "Baby Mole")]);
        assert_eq!(
            render_id_list(catalog.sorted_by_id()),
            "```\n1: Baby Mole\n2: Prince\n```"
        );
    }
}
