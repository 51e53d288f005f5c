use indexmap::IndexMap;

/// Mutable response-header seam the engine writes through.
///
/// Lookup by name is case-insensitive. `set` overwrites any existing value;
/// `append` adds to an existing value without removing what is already there.
pub trait ResponseHeaders {
    fn set(&mut self, name: &str, value: &str);
    fn append(&mut self, name: &str, value: &str);
}

/// Insertion-ordered header collection.
///
/// Ships as the default [`ResponseHeaders`] implementation for callers whose
/// runtime has no header map of its own; `append` joins values with `", "`
/// the way the Fetch `Headers` API does.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeaderMap {
    entries: IndexMap<String, String>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries
            .keys()
            .position(|key| key.eq_ignore_ascii_case(name))
    }
}

impl ResponseHeaders for HeaderMap {
    fn set(&mut self, name: &str, value: &str) {
        match self.position(name) {
            Some(index) => {
                if let Some((_, slot)) = self.entries.get_index_mut(index) {
                    value.clone_into(slot);
                }
            }
            None => {
                self.entries.insert(name.to_owned(), value.to_owned());
            }
        }
    }

    fn append(&mut self, name: &str, value: &str) {
        match self.position(name) {
            Some(index) => {
                if let Some((_, slot)) = self.entries.get_index_mut(index) {
                    slot.push_str(", ");
                    slot.push_str(value);
                }
            }
            None => {
                self.entries.insert(name.to_owned(), value.to_owned());
            }
        }
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
