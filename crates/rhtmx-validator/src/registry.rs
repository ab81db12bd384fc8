// File: src/registry.rs
// Purpose: Registration-ordered map of field name to rules and elements

use crate::dom::Document;
use crate::rules::Rule;

/// A registered field
pub(crate) struct FieldEntry<D: Document> {
    pub name: String,
    pub rules: Vec<Rule>,
    pub elements: Vec<D::Element>,
    /// Reactive subscriptions, detached when dropped
    pub listeners: Vec<D::Listener>,
}

/// Fields in registration order, one entry per name
pub(crate) struct Registry<D: Document> {
    entries: Vec<FieldEntry<D>>,
}

impl<D: Document> Default for Registry<D> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<D: Document> Registry<D> {
    /// Store `entry`; a field registered again keeps its slot and its old
    /// entry (listeners included) is returned to be dropped
    pub fn insert(&mut self, entry: FieldEntry<D>) -> Option<FieldEntry<D>> {
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(slot) => Some(std::mem::replace(slot, entry)),
            None => {
                self.entries.push(entry);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldEntry<D>> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldEntry<D>> {
        self.entries.iter()
    }

    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
