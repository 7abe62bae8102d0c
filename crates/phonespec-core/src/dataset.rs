//! Dataset Store
//!
//! Holds the brand/device list exactly as loaded plus an id-keyed lookup.
//! The dataset is built once and never mutated afterward.

use std::collections::HashMap;

use crate::errors::Result;
use crate::model::{Brand, DeviceId, DeviceRef};

/// The loaded catalog
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    brands: Vec<Brand>,
    /// DeviceId -> (brand index, device index)
    index: HashMap<DeviceId, (usize, usize)>,
}

impl Dataset {
    /// Build a dataset and its lookup
    ///
    /// When two devices share an id, the later one in dataset order owns
    /// the lookup slot.
    pub fn new(brands: Vec<Brand>) -> Self {
        let mut index = HashMap::new();
        for (b, brand) in brands.iter().enumerate() {
            for (d, device) in brand.devices.iter().enumerate() {
                let id = DeviceId::from_parts(&brand.brand_name, &device.model_name);
                if let Some(previous) = index.insert(id.clone(), (b, d)) {
                    tracing::debug!(
                        device_id = %id,
                        previous_brand_index = previous.0,
                        previous_device_index = previous.1,
                        "device id collision, later device wins"
                    );
                }
            }
        }
        Self { brands, index }
    }

    /// The dataset a session sees before its load completes
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a JSON array of brand records
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if the document is not a brand array.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let brands: Vec<Brand> = serde_json::from_str(json)?;
        Ok(Self::new(brands))
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    /// Every device in dataset order (brand order, then device order)
    pub fn devices(&self) -> impl Iterator<Item = DeviceRef<'_>> {
        self.brands.iter().flat_map(|brand| {
            brand
                .devices
                .iter()
                .map(move |device| DeviceRef::new(&brand.brand_name, device))
        })
    }

    /// Look a device up by id
    pub fn get(&self, id: &DeviceId) -> Option<DeviceRef<'_>> {
        let &(b, d) = self.index.get(id)?;
        let brand = self.brands.get(b)?;
        let device = brand.devices.get(d)?;
        Some(DeviceRef::new(&brand.brand_name, device))
    }

    pub fn brand_count(&self) -> usize {
        self.brands.len()
    }

    pub fn device_count(&self) -> usize {
        self.brands.iter().map(|b| b.devices.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.device_count() == 0
    }
}
