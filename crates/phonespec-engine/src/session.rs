//! Browsing session with boundary logging.
//!
//! A [`Session`] replaces the page-global state of a catalog browser: the
//! loaded dataset, the device pinned for comparison and the active theme
//! all live here and are passed explicitly.
//!
//! ## Logging Ownership
//!
//! The engine layer owns lifecycle logging for session operations:
//! - `log_op_start!` at entry
//! - `log_op_end!` on success
//! - `log_op_error!` on failure
//!
//! Lower layers (store, core) use only `tracing::debug!()` for internal details.

use phonespec_core::analysis::common_spec_keys;
use phonespec_core::errors::{CatalogError, ExError, ExErrorKind};
use phonespec_core::query;
use phonespec_core::render::LOAD_ERROR_MESSAGE;
use phonespec_core::{
    log_op_end, log_op_error, log_op_start, CompareSelection, ComparisonMatrix, Dataset,
    DeviceId, DeviceRef, FilterDefaults, FilterSpec, Theme,
};
use phonespec_core_types::SessionId;
use phonespec_store::dataset::load_dataset;
use phonespec_store::errors::Result;
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

use crate::state::LoadState;

/// Counts and fingerprint of the session's dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetStats {
    pub brand_count: usize,
    pub device_count: usize,
    /// SHA256 hex of the dataset file; `None` until a load succeeds
    pub digest: Option<String>,
    pub byte_len: usize,
}

/// One browsing session
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    state: LoadState,
    selection: CompareSelection,
    theme: Theme,
    filter_defaults: FilterDefaults,
    digest: Option<String>,
    byte_len: usize,
}

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

impl Session {
    pub fn new(filter_defaults: FilterDefaults, theme: Theme) -> Self {
        Self {
            id: SessionId::new(),
            state: LoadState::Pending,
            selection: CompareSelection::new(),
            theme,
            filter_defaults,
            digest: None,
            byte_len: 0,
        }
    }

    /// A session that starts with an in-memory dataset already loaded
    pub fn with_dataset(dataset: Dataset, filter_defaults: FilterDefaults, theme: Theme) -> Self {
        let mut session = Self::new(filter_defaults, theme);
        session.state = LoadState::Ready(dataset);
        session
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// The dataset queries run against; empty unless the load succeeded
    pub fn dataset(&self) -> &Dataset {
        self.state.dataset()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    fn stamp(&self, err: impl Into<ExError>, op: &str) -> ExError {
        err.into().with_op(op).with_session_id(self.id.clone())
    }

    /// Load the dataset file, once
    ///
    /// On failure the error is logged, the session moves to
    /// `Failed("Error loading data.")` and stays there. There is no retry.
    ///
    /// # Errors
    ///
    /// Returns the store's `Io`/`Serialization` error when the load fails and
    /// `InvalidInput` when the session already attempted a load.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        log_op_start!("dataset_load", session_id = %self.id, path = %path.display());
        let start = Instant::now();

        if !self.state.is_pending() {
            let err = ExError::new(ExErrorKind::InvalidInput)
                .with_op("dataset_load")
                .with_session_id(self.id.clone())
                .with_message("Dataset load already attempted for this session");
            log_op_error!(
                "dataset_load",
                err.clone(),
                duration_ms = elapsed_ms(start),
                session_id = %self.id
            );
            return Err(err);
        }

        match load_dataset(path) {
            Ok(loaded) => {
                log_op_end!(
                    "dataset_load",
                    duration_ms = elapsed_ms(start),
                    session_id = %self.id,
                    brand_count = loaded.dataset.brand_count(),
                    device_count = loaded.dataset.device_count(),
                    digest = %loaded.digest
                );
                self.digest = Some(loaded.digest);
                self.byte_len = loaded.byte_len;
                self.state = LoadState::Ready(loaded.dataset);
                Ok(())
            }
            Err(e) => {
                let err = e.with_session_id(self.id.clone());
                log_op_error!(
                    "dataset_load",
                    err.clone(),
                    duration_ms = elapsed_ms(start),
                    session_id = %self.id
                );
                self.state = LoadState::Failed(LOAD_ERROR_MESSAGE.to_string());
                Err(err)
            }
        }
    }

    /// The first devices in dataset order, capped
    pub fn list_initial(&self) -> Vec<DeviceRef<'_>> {
        log_op_start!("list_initial", session_id = %self.id);
        let start = Instant::now();

        let results = query::list_initial(self.dataset());

        log_op_end!(
            "list_initial",
            duration_ms = elapsed_ms(start),
            session_id = %self.id,
            result_len = results.len()
        );
        results
    }

    /// Free-text search over model and brand names
    pub fn search(&self, text: &str) -> Vec<DeviceRef<'_>> {
        log_op_start!("search", session_id = %self.id, query = text);
        let start = Instant::now();

        let results = query::search(self.dataset(), text);

        log_op_end!(
            "search",
            duration_ms = elapsed_ms(start),
            session_id = %self.id,
            result_len = results.len()
        );
        results
    }

    /// A filter with every control at its initial value
    pub fn default_filter(&self) -> FilterSpec {
        FilterSpec::from_defaults(self.filter_defaults)
    }

    /// Structured filtering
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the filter is out of range.
    pub fn filter(&self, spec: &FilterSpec) -> Result<Vec<DeviceRef<'_>>> {
        log_op_start!("filter", session_id = %self.id, brand = ?spec.active_brand());
        let start = Instant::now();

        if let Err(e) = spec.validate() {
            let err = self.stamp(e, "filter");
            log_op_error!(
                "filter",
                err.clone(),
                duration_ms = elapsed_ms(start),
                session_id = %self.id
            );
            return Err(err);
        }

        let results = query::filter(self.dataset(), spec);

        log_op_end!(
            "filter",
            duration_ms = elapsed_ms(start),
            session_id = %self.id,
            result_len = results.len()
        );
        Ok(results)
    }

    /// Candidate list for the right-hand side of a comparison
    pub fn search_for_compare(&self, text: &str) -> Vec<DeviceRef<'_>> {
        log_op_start!("search_for_compare", session_id = %self.id, query = text);
        let start = Instant::now();

        let results = query::search_for_compare(self.dataset(), text);

        log_op_end!(
            "search_for_compare",
            duration_ms = elapsed_ms(start),
            session_id = %self.id,
            result_len = results.len()
        );
        results
    }

    /// Distinct brand names, sorted
    pub fn brand_names(&self) -> Vec<&str> {
        query::brand_names(self.dataset())
    }

    /// Look up one device
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no device has this id.
    pub fn device(&self, id: &DeviceId) -> Result<DeviceRef<'_>> {
        self.dataset().get(id).ok_or_else(|| {
            self.stamp(
                CatalogError::DeviceNotFound {
                    device_id: id.to_string(),
                },
                "device",
            )
        })
    }

    /// Pin a device as the left side of a comparison
    ///
    /// Replaces any earlier pin. An unknown id changes nothing and returns
    /// `false`.
    pub fn pin_for_compare(&mut self, id: &DeviceId) -> bool {
        log_op_start!("pin_for_compare", session_id = %self.id, device_id = %id);
        let start = Instant::now();

        let found = self.state.dataset().get(id).is_some();
        if found {
            if let Some(previous) = self.selection.pin(id.clone()) {
                tracing::debug!(previous = %previous, "replaced pinned device");
            }
        } else {
            tracing::debug!(device_id = %id, "pin ignored, unknown device");
        }

        log_op_end!(
            "pin_for_compare",
            duration_ms = elapsed_ms(start),
            session_id = %self.id,
            pinned = found
        );
        found
    }

    /// The device currently pinned for comparison
    pub fn pinned(&self) -> Option<DeviceRef<'_>> {
        self.selection.pinned_device(self.state.dataset())
    }

    /// Forget the pinned device
    pub fn clear_compare(&mut self) {
        self.selection.clear();
    }

    /// Compare the pinned device with `right`, consuming the pin
    ///
    /// An incomplete selection is the normal "nothing to compare yet" case
    /// and is logged at debug, not as an operation failure.
    ///
    /// # Errors
    ///
    /// Returns `IncompleteSelection` when nothing is pinned or `right` does
    /// not resolve.
    pub fn finalize_compare(&mut self, right: &DeviceId) -> Result<ComparisonMatrix> {
        log_op_start!("finalize_compare", session_id = %self.id, device_id = %right);
        let start = Instant::now();

        let dataset = self.state.dataset();
        let right_ref = dataset.get(right);
        match self.selection.finalize(dataset, right_ref) {
            Ok(matrix) => {
                log_op_end!(
                    "finalize_compare",
                    duration_ms = elapsed_ms(start),
                    session_id = %self.id,
                    row_count = matrix.rows.len()
                );
                Ok(matrix)
            }
            Err(CatalogError::IncompleteSelection) => {
                tracing::debug!(session_id = %self.id, "comparison needs two devices");
                log_op_end!(
                    "finalize_compare",
                    duration_ms = elapsed_ms(start),
                    session_id = %self.id,
                    row_count = 0
                );
                Err(self.stamp(CatalogError::IncompleteSelection, "finalize_compare"))
            }
            Err(e) => {
                let err = self.stamp(e, "finalize_compare");
                log_op_error!(
                    "finalize_compare",
                    err.clone(),
                    duration_ms = elapsed_ms(start),
                    session_id = %self.id
                );
                Err(err)
            }
        }
    }

    /// Switch between light and dark, returning the new theme
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        tracing::debug!(theme = %self.theme, "theme toggled");
        self.theme
    }

    /// Dotted spec paths shared by every device
    pub fn common_features(&self) -> Vec<String> {
        log_op_start!("common_features", session_id = %self.id);
        let start = Instant::now();

        let keys = common_spec_keys(self.dataset());

        log_op_end!(
            "common_features",
            duration_ms = elapsed_ms(start),
            session_id = %self.id,
            result_len = keys.len()
        );
        keys
    }

    pub fn stats(&self) -> DatasetStats {
        let dataset = self.dataset();
        DatasetStats {
            brand_count: dataset.brand_count(),
            device_count: dataset.device_count(),
            digest: self.digest.clone(),
            byte_len: self.byte_len,
        }
    }
}
