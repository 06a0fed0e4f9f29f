use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One status label with its amount of unresolved issues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub label: String,
    pub count: u64,
}

impl StatusCount {
    pub fn new(label: impl Into<String>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Ordered label → count mapping.
///
/// Iteration follows insertion order, and the JSON form is an object whose
/// keys are read back in document order. Inserting an existing label replaces
/// its count in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusCounts {
    entries: Vec<StatusCount>,
}

impl StatusCounts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, count: u64) {
        let label = label.into();
        match self.entries.iter_mut().find(|e| e.label == label) {
            Some(existing) => existing.count = count,
            None => self.entries.push(StatusCount { label, count }),
        }
    }

    pub fn get(&self, label: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.count)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StatusCount> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }
}

impl<L: Into<String>> FromIterator<(L, u64)> for StatusCounts {
    fn from_iter<I: IntoIterator<Item = (L, u64)>>(iter: I) -> Self {
        let mut counts = Self::new();
        for (label, count) in iter {
            counts.insert(label, count);
        }
        counts
    }
}

impl<'a> IntoIterator for &'a StatusCounts {
    type Item = &'a StatusCount;
    type IntoIter = std::slice::Iter<'a, StatusCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for StatusCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.label, &entry.count)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StatusCounts {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CountsVisitor;

        impl<'de> Visitor<'de> for CountsVisitor {
            type Value = StatusCounts;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of status label to issue count")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut counts = StatusCounts::new();
                while let Some((label, count)) = access.next_entry::<String, u64>()? {
                    counts.insert(label, count);
                }
                Ok(counts)
            }
        }

        deserializer.deserialize_map(CountsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order() {
        let counts: StatusCounts = [("Open", 3), ("Closed", 1), ("In Progress", 7)]
            .into_iter()
            .collect();
        let labels: Vec<&str> = counts.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Open", "Closed", "In Progress"]);
        assert_eq!(counts.total(), 11);
    }

    #[test]
    fn insert_existing_label_replaces_in_place() {
        let mut counts = StatusCounts::new();
        counts.insert("Open", 1);
        counts.insert("Closed", 2);
        counts.insert("Open", 5);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get("Open"), Some(5));
        assert_eq!(counts.iter().next().unwrap().label, "Open");
    }

    #[test]
    fn deserialize_preserves_document_order() {
        let json = r#"{"Reopened": 2, "Open": 10, "Closed": 0, "Resolved": 4}"#;
        let counts: StatusCounts = serde_json::from_str(json).expect("should deserialize");
        let labels: Vec<&str> = counts.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Reopened", "Open", "Closed", "Resolved"]);
        assert_eq!(counts.get("Open"), Some(10));
    }

    #[test]
    fn deserialize_rejects_negative_counts() {
        let json = r#"{"Open": -1}"#;
        assert!(serde_json::from_str::<StatusCounts>(json).is_err());
    }

    #[test]
    fn serialize_as_object() {
        let counts: StatusCounts = [("B", 1), ("A", 2)].into_iter().collect();
        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(json, r#"{"B":1,"A":2}"#);
    }

    #[test]
    fn empty_counts() {
        let counts: StatusCounts = serde_json::from_str("{}").unwrap();
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
    }
}
