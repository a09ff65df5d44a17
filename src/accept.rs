use crate::util::lenient_float;
use indexmap::IndexMap;
use std::cmp::Ordering;

const WILDCARD: &str = "*/*";
const QUALITY_PARAM: &str = "q";

/// A single entry of an `Accept`, `Accept-Encoding` or `Accept-Language` header.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptEntry {
    name: String,
    quality: f64,
    params: IndexMap<String, String>,
    markers: Vec<String>,
    position: usize,
}

impl AcceptEntry {
    fn new(name: &str, position: usize) -> Self {
        Self {
            name: name.to_owned(),
            quality: 1.0,
            params: IndexMap::new(),
            markers: Vec::new(),
            position,
        }
    }

    /// Media type, encoding or language tag.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quality(&self) -> f64 {
        self.quality
    }

    /// `key=value` extension parameters other than `q`, in header order.
    pub fn params(&self) -> &IndexMap<String, String> {
        &self.params
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Bare parameters that carried no `=value`.
    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// Index of the comma-separated segment this entry came from.
    pub fn position(&self) -> usize {
        self.position
    }

    fn is_wildcard(&self) -> bool {
        self.name == WILDCARD
    }

    fn is_partial_wildcard(&self) -> bool {
        self.name.ends_with('*')
    }

    fn apply_param(&mut self, raw: &str) {
        let raw = raw.trim();
        if raw.is_empty() {
            return;
        }

        match raw.split_once('=') {
            Some((key, value)) => {
                let key = key.trim();
                let value = value.trim();
                if key.eq_ignore_ascii_case(QUALITY_PARAM) {
                    self.quality = lenient_float(value);
                } else {
                    self.params.insert(key.to_owned(), value.to_owned());
                }
            }
            None => self.markers.push(raw.to_owned()),
        }
    }
}

/// Preference order between two entries; `Less` means `a` is preferred.
fn preference(a: &AcceptEntry, b: &AcceptEntry) -> Ordering {
    b.quality
        .total_cmp(&a.quality)
        .then_with(|| a.is_wildcard().cmp(&b.is_wildcard()))
        .then_with(|| {
            if a.is_wildcard() || b.is_wildcard() {
                Ordering::Equal
            } else {
                a.is_partial_wildcard().cmp(&b.is_partial_wildcard())
            }
        })
        .then_with(|| a.position.cmp(&b.position))
}

/// Parsed accept-family header, ordered from most to least preferred.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AcceptList {
    entries: IndexMap<String, AcceptEntry>,
}

impl AcceptList {
    /// Parses a raw header value such as
    /// `text/html, application/xml;q=0.9, */*;q=0.8`.
    ///
    /// Entries default to quality `1.0`. Equal qualities keep header order,
    /// except that `*/*` sorts last and other wildcards (`text/*`) sort after
    /// concrete values. A repeated name replaces the earlier entry.
    pub fn parse(raw: &str) -> Self {
        let mut entries: IndexMap<String, AcceptEntry> = IndexMap::new();

        for (position, segment) in raw.split(',').enumerate() {
            let mut parts = segment.split(';');
            let name = parts.next().unwrap_or_default().trim();
            if name.is_empty() {
                continue;
            }

            let mut entry = AcceptEntry::new(name, position);
            for param in parts {
                entry.apply_param(param);
            }
            entries.insert(entry.name.clone(), entry);
        }

        entries.sort_by(|_, a, _, b| preference(a, b));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&AcceptEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn quality_of(&self, name: &str) -> Option<f64> {
        self.get(name).map(AcceptEntry::quality)
    }

    /// The most preferred entry, if any.
    pub fn preferred(&self) -> Option<&AcceptEntry> {
        self.entries.first().map(|(_, entry)| entry)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AcceptEntry> {
        self.entries.values()
    }
}

impl<'a> IntoIterator for &'a AcceptList {
    type Item = &'a AcceptEntry;
    type IntoIter = indexmap::map::Values<'a, String, AcceptEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

#[cfg(test)]
#[path = "accept_test.rs"]
mod accept_test;
