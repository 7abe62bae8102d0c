use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

use crate::model::SpecGroup;

/// A manufacturer record with its devices in dataset order
///
/// Brand names are not unique across a dataset; nothing here assumes they are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub brand_name: String,
    #[serde(default)]
    pub devices: Vec<Device>,
}

impl Brand {
    pub fn new(brand_name: impl Into<String>, devices: Vec<Device>) -> Self {
        Self {
            brand_name: brand_name.into(),
            devices,
        }
    }
}

/// A single phone model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    #[serde(default, deserialize_with = "lenient_text")]
    pub model_name: String,

    #[serde(
        rename = "imageUrl",
        default,
        deserialize_with = "lenient_url",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,

    #[serde(default)]
    pub specifications: SpecGroup,
}

impl Device {
    pub fn new(model_name: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            image_url: None,
            specifications: SpecGroup::new(),
        }
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_specifications(mut self, specifications: SpecGroup) -> Self {
        self.specifications = specifications;
        self
    }

    /// The trimmed image URL, or `placeholder` when absent or blank
    pub fn image_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        self.image_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(placeholder)
    }
}

/// Scraped exports put null or numbers where text belongs; a scalar keeps
/// its textual form and anything else reads as empty
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

/// Only a string is an image URL
fn lenient_url<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(url) => Some(url),
        _ => None,
    })
}

/// Session-local lookup key: `brand_name + "_" + model_name`, with every
/// whitespace run in the model name collapsed to a single `-`
///
/// Two devices can normalize to the same id; that collision is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeviceId(String);

impl DeviceId {
    pub fn from_parts(brand_name: &str, model_name: &str) -> Self {
        let mut id = String::with_capacity(brand_name.len() + model_name.len() + 1);
        id.push_str(brand_name);
        id.push('_');
        let mut in_whitespace = false;
        for ch in model_name.chars() {
            if ch.is_whitespace() {
                if !in_whitespace {
                    id.push('-');
                }
                in_whitespace = true;
            } else {
                id.push(ch);
                in_whitespace = false;
            }
        }
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Wrap an id typed by a user; no normalization is applied
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A device together with the name of the brand that owns it
///
/// Every result list and comparison input is made of these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DeviceRef<'a> {
    pub brand_name: &'a str,
    pub device: &'a Device,
}

impl<'a> DeviceRef<'a> {
    pub fn new(brand_name: &'a str, device: &'a Device) -> Self {
        Self { brand_name, device }
    }

    pub fn model_name(&self) -> &'a str {
        &self.device.model_name
    }

    pub fn id(&self) -> DeviceId {
        DeviceId::from_parts(self.brand_name, &self.device.model_name)
    }

    /// Display title, `"<brand> <model>"`
    pub fn title(&self) -> String {
        format!("{} {}", self.brand_name, self.device.model_name)
    }
}
