//! Nested specification values
//!
//! A device's specifications are a mapping from category name to either a
//! leaf string or a further mapping. `SpecValue` makes that shape explicit and
//! `SpecGroup::resolve` walks it, returning `None` for a missing path. An
//! empty string is a value, not a missing path.

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single specification value: leaf text or a nested group
#[derive(Debug, Clone, PartialEq)]
pub enum SpecValue {
    Text(String),
    Group(SpecGroup),
}

impl SpecValue {
    /// Leaf text, if this value is a leaf
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SpecValue::Text(text) => Some(text),
            SpecValue::Group(_) => None,
        }
    }

    /// Nested group, if this value is a group
    pub fn as_group(&self) -> Option<&SpecGroup> {
        match self {
            SpecValue::Group(group) => Some(group),
            SpecValue::Text(_) => None,
        }
    }

    /// True for leaf text that is the empty string
    pub fn is_empty_text(&self) -> bool {
        matches!(self, SpecValue::Text(text) if text.is_empty())
    }
}

impl From<&str> for SpecValue {
    fn from(text: &str) -> Self {
        SpecValue::Text(text.to_string())
    }
}

impl From<String> for SpecValue {
    fn from(text: String) -> Self {
        SpecValue::Text(text)
    }
}

impl From<SpecGroup> for SpecValue {
    fn from(group: SpecGroup) -> Self {
        SpecValue::Group(group)
    }
}

/// Insertion-ordered mapping of key to [`SpecValue`]
///
/// Order matters: detail views and comparison cells list entries in the
/// order the dataset declares them.
///
/// A JSON array is held as a group keyed by index and remembers that it was
/// a sequence, so it serializes back as an array.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecGroup {
    entries: Vec<(String, SpecValue)>,
    sequence: bool,
}

impl SpecGroup {
    /// Create an empty group
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value; an existing key keeps its position and takes the new value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<SpecValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<SpecValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// True when this group was read from a JSON array
    pub fn is_sequence(&self) -> bool {
        self.sequence
    }

    /// Direct child lookup
    pub fn get(&self, key: &str) -> Option<&SpecValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Walk a path of keys, one level per segment
    ///
    /// Returns `None` as soon as a segment is absent or a leaf is reached
    /// before the path ends. An empty path resolves to `None`.
    pub fn resolve<S: AsRef<str>>(&self, segments: &[S]) -> Option<&SpecValue> {
        let (first, rest) = segments.split_first()?;
        let mut current = self.get(first.as_ref())?;
        for segment in rest {
            current = current.as_group()?.get(segment.as_ref())?;
        }
        Some(current)
    }

    /// Leaf text at `category.key`, if present and a leaf
    pub fn text_at(&self, category: &str, key: &str) -> Option<&str> {
        self.resolve(&[category, key]).and_then(SpecValue::as_text)
    }

    /// Iterate entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpecValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Dotted `category.key` reference into a device's specifications
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpecPath {
    segments: Vec<String>,
}

impl SpecPath {
    /// Split a dotted path on `.`
    pub fn parse(dotted: &str) -> Self {
        Self {
            segments: dotted.split('.').map(str::to_string).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Last segment, used as the display label
    pub fn leaf(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }
}

impl fmt::Display for SpecPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("."))
    }
}

// ---- serde ----
//
// JSON strings become Text, numbers and booleans their textual form, null an
// empty Text, arrays a Group keyed by index, objects a Group.

impl Serialize for SpecValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SpecValue::Text(text) => serializer.serialize_str(text),
            SpecValue::Group(group) => group.serialize(serializer),
        }
    }
}

impl Serialize for SpecGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.sequence {
            let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
            for (_, value) in &self.entries {
                seq.serialize_element(value)?;
            }
            return seq.end();
        }
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct SpecValueVisitor;

impl<'de> Visitor<'de> for SpecValueVisitor {
    type Value = SpecValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a specification string or mapping")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<SpecValue, E> {
        Ok(SpecValue::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<SpecValue, E> {
        Ok(SpecValue::Text(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<SpecValue, E> {
        Ok(SpecValue::Text(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<SpecValue, E> {
        Ok(SpecValue::Text(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<SpecValue, E> {
        Ok(SpecValue::Text(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<SpecValue, E> {
        Ok(SpecValue::Text(v.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<SpecValue, E> {
        Ok(SpecValue::Text(String::new()))
    }

    fn visit_none<E: de::Error>(self) -> Result<SpecValue, E> {
        Ok(SpecValue::Text(String::new()))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<SpecValue, A::Error> {
        let mut group = SpecGroup {
            sequence: true,
            ..SpecGroup::default()
        };
        let mut index = 0usize;
        while let Some(value) = seq.next_element::<SpecValue>()? {
            group.insert(index.to_string(), value);
            index += 1;
        }
        Ok(SpecValue::Group(group))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<SpecValue, A::Error> {
        let mut group = SpecGroup::new();
        while let Some((key, value)) = map.next_entry::<String, SpecValue>()? {
            group.insert(key, value);
        }
        Ok(SpecValue::Group(group))
    }
}

impl<'de> Deserialize<'de> for SpecValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SpecValueVisitor)
    }
}

impl<'de> Deserialize<'de> for SpecGroup {
    /// A non-mapping `specifications` value is tolerated as an empty group
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match SpecValue::deserialize(deserializer)? {
            SpecValue::Group(group) if !group.sequence => Ok(group),
            SpecValue::Group(_) | SpecValue::Text(_) => Ok(SpecGroup::new()),
        }
    }
}
