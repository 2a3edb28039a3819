//! Catalogue records and the resource links they carry.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Well-known reference scheme tags observed in catalogue records.
///
/// Scheme tags are provider-defined strings and the set is open ended;
/// these constants only name the access methods consumers reach for most.
pub mod scheme {
    /// OPeNDAP subsetting access to the dataset.
    pub const OPENDAP: &str = "OPeNDAP:OPeNDAP";
    /// OGC Web Map Service endpoint for rendered imagery.
    pub const WMS: &str = "OGC:WMS";
    /// Plain HTTP download of the dataset file.
    pub const HTTP_DOWNLOAD: &str = "WWW:DOWNLOAD-1.0-http--download";
}

/// One resource link carried by a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Provider-defined access-method tag, e.g. `OGC:WMS`.
    pub scheme: String,
    /// Resource URL.
    pub url: String,
}

/// One catalogue record: the identifier the catalogue assigned to it plus
/// the resource links it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique key assigned by the catalogue, not by this crate.
    pub identifier: String,
    /// Dataset title, when the catalogue provides one.
    #[serde(default)]
    pub title: Option<String>,
    /// Resource links in the order the catalogue listed them.
    #[serde(default)]
    pub references: Vec<Reference>,
}

impl Record {
    /// Record with the given identifier and no references yet.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            title: None,
            references: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Appends a resource link.
    pub fn with_reference(mut self, scheme: impl Into<String>, url: impl Into<String>) -> Self {
        self.references.push(Reference {
            scheme: scheme.into(),
            url: url.into(),
        });
        self
    }
}

/// Records keyed by identifier, preserving first-insertion order.
///
/// Re-inserting an identifier replaces its record in place, so a
/// catalogue that repeats records across pages cannot inflate the set.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    records: Vec<Record>,
    index: HashMap<String, usize>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, returning the record it replaced, if any. A
    /// replaced record keeps its original position.
    pub fn insert(&mut self, record: Record) -> Option<Record> {
        match self.index.get(&record.identifier) {
            Some(&at) => Some(std::mem::replace(&mut self.records[at], record)),
            None => {
                self.index
                    .insert(record.identifier.clone(), self.records.len());
                self.records.push(record);
                None
            }
        }
    }

    pub fn get(&self, identifier: &str) -> Option<&Record> {
        self.index.get(identifier).map(|&at| &self.records[at])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Identifiers in insertion order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.identifier.as_str())
    }

    /// URLs of every reference carrying the given scheme tag, traversing
    /// records in insertion order and references in list order.
    ///
    /// A scheme nothing refers to yields an empty list, not an error.
    /// Nothing is mutated, so repeated extraction returns the same URLs.
    pub fn urls_for_scheme(&self, scheme: &str) -> Vec<&str> {
        self.records
            .iter()
            .flat_map(|record| record.references.iter())
            .filter(|reference| reference.scheme == scheme)
            .map(|reference| reference.url.as_str())
            .collect()
    }

    /// Distinct scheme tags present in the set, in first-seen order.
    pub fn schemes(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for record in &self.records {
            for reference in &record.references {
                if !seen.contains(&reference.scheme.as_str()) {
                    seen.push(reference.scheme.as_str());
                }
            }
        }
        seen
    }
}

impl Extend<Record> for RecordSet {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}
