use crate::party::Guess;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// All stored tips, keyed by participant name.
///
/// Backed by a Vec instead of a map so that iteration follows file/submission
/// order. Ranking relies on this: a stable sort over the collection keeps tied
/// participants in the order they submitted.
///
/// On the wire this is a plain JSON object, name to per-party percentages:
///
/// ```json
/// { "Anna": { "SPD": 30.0, "CDU": 25.0, ... } }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TipCollection {
    entries: Vec<(String, Guess)>,
}

impl TipCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    pub fn get(&self, name: &str) -> Option<&Guess> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, g)| g)
    }

    /// Appends a new tip, or replaces the guess in place when the name is
    /// already present. Replacement keeps the original position so ordering
    /// stays stable; callers that must refuse duplicates check [`contains`]
    /// first.
    ///
    /// [`contains`]: TipCollection::contains
    pub fn insert(&mut self, name: String, guess: Guess) {
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = guess;
        } else {
            self.entries.push((name, guess));
        }
    }

    /// Iterate in file/submission order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Guess)> {
        self.entries.iter().map(|(n, g)| (n.as_str(), g))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

impl Serialize for TipCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, guess) in &self.entries {
            map.serialize_entry(name, guess)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for TipCollection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TipVisitor;

        impl<'de> Visitor<'de> for TipVisitor {
            type Value = TipCollection;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from participant name to per-party percentages")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut tips = TipCollection {
                    entries: Vec::with_capacity(access.size_hint().unwrap_or(0)),
                };
                while let Some((name, guess)) = access.next_entry::<String, Guess>()? {
                    // Duplicate keys in the file: last value wins, first
                    // position kept, matching plain JSON object semantics.
                    tips.insert(name, guess);
                }
                Ok(tips)
            }
        }

        deserializer.deserialize_map(TipVisitor)
    }
}
