//! Comparison selection state
//!
//! At most one left-side device is pinned at a time. Pinning again replaces
//! the earlier pin. Finalizing consumes the pin whether or not a matrix
//! results.

use crate::compare::resolver::{resolve_comparison, ComparisonMatrix};
use crate::dataset::Dataset;
use crate::errors::Result;
use crate::model::{DeviceId, DeviceRef};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareSelection {
    left: Option<DeviceId>,
}

impl CompareSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pin a device as the left side, returning the replaced pin
    pub fn pin(&mut self, id: DeviceId) -> Option<DeviceId> {
        self.left.replace(id)
    }

    pub fn pinned(&self) -> Option<&DeviceId> {
        self.left.as_ref()
    }

    /// The pinned device, resolved against `dataset`
    pub fn pinned_device<'a>(&self, dataset: &'a Dataset) -> Option<DeviceRef<'a>> {
        self.left.as_ref().and_then(|id| dataset.get(id))
    }

    pub fn clear(&mut self) {
        self.left = None;
    }

    /// Pair the pinned device with `right` and build the matrix
    ///
    /// # Errors
    ///
    /// Returns `IncompleteSelection` when nothing is pinned, the pin no longer
    /// resolves, or `right` is absent.
    pub fn finalize<'a>(
        &mut self,
        dataset: &'a Dataset,
        right: Option<DeviceRef<'a>>,
    ) -> Result<ComparisonMatrix> {
        let left = self.left.take().and_then(|id| dataset.get(&id));
        resolve_comparison(left, right)
    }
}
