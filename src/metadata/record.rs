use std::collections::BTreeMap;

use crate::schema::Field;

use super::map::AttributeMap;
use super::value::AttributeValue;

/// Caller-side description of a recording.
///
/// Known fields are held by [`Field`] so typed setters cannot misspell a
/// name; everything else lives in an open-ended extension map whose keys may
/// be canonical names, shorthand aliases or arbitrary extra keys. Nothing
/// here is validated; see [`super::normalize`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingMetadata {
    known: BTreeMap<Field, AttributeValue>,
    extensions: AttributeMap,
}

impl RecordingMetadata {
    /// Create empty metadata
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing attribute map (used as the extension part)
    pub fn from_map(map: AttributeMap) -> Self {
        Self {
            known: BTreeMap::new(),
            extensions: map,
        }
    }

    /// Set a known field
    pub fn set(mut self, field: Field, value: impl Into<AttributeValue>) -> Self {
        self.known.insert(field, value.into());
        self
    }

    /// Set an arbitrary key (canonical name, alias, or extra key)
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.extensions.insert(key, value);
        self
    }

    /// Set the sampling frequency in Hz
    pub fn sampling_frequency(self, hz: f64) -> Self {
        self.set(Field::SamplingFrequency, hz)
    }

    /// Set the RF carrier frequency in Hz
    pub fn carrier_frequency(self, hz: f64) -> Self {
        self.set(Field::CarrierFrequency, hz)
    }

    /// Set the coarse timestamp (date/time, date string or epoch seconds)
    pub fn timestamp(self, value: impl Into<AttributeValue>) -> Self {
        self.set(Field::TimestampCoarse, value)
    }

    /// Set the free-text comment
    pub fn comment(self, text: impl Into<String>) -> Self {
        self.set(Field::Comment, text.into())
    }

    /// Set the device description
    pub fn device(self, text: impl Into<String>) -> Self {
        self.set(Field::Device, text.into())
    }

    /// Value set for a known field through a typed setter
    pub fn get(&self, field: Field) -> Option<&AttributeValue> {
        self.known.get(&field)
    }

    /// Extension entries in insertion order
    pub fn extensions(&self) -> &AttributeMap {
        &self.extensions
    }

    /// Merge both parts into a fresh raw attribute map.
    ///
    /// Extension entries come first in their own order; typed fields follow
    /// under their canonical names and replace any extension entry with the
    /// same canonical name.
    pub fn to_attribute_map(&self) -> AttributeMap {
        let mut map = self.extensions.clone();
        for (field, value) in &self.known {
            map.insert(field.name(), value.clone());
        }
        map
    }
}

impl From<AttributeMap> for RecordingMetadata {
    fn from(map: AttributeMap) -> Self {
        RecordingMetadata::from_map(map)
    }
}
