use phonespec_core_types::SessionId;
use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that front ends and tests can
/// match on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Lookup/Selection
    NotFound,
    IncompleteSelection,

    // Validation
    InvalidInput,
    InvalidDataset,

    // Integration/IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::IncompleteSelection => "ERR_INCOMPLETE_SELECTION",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidDataset => "ERR_INVALID_DATASET",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and context
/// for the one place errors are reported to a user: the load boundary.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    session_id: Option<SessionId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            session_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context (a device id, a file path)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add session context
    pub fn with_session_id(mut self, session_id: SessionId) -> Self {
        self.session_id = Some(session_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the session context, if any
    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for catalog operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// No device is registered under the given id
    #[error("Device not found: {device_id}")]
    DeviceNotFound { device_id: String },

    /// A comparison was finalized without both sides selected
    #[error("Comparison needs both a left and a right device")]
    IncompleteSelection,

    /// A filter field is out of range
    #[error("Invalid filter field {field}: {reason}")]
    InvalidFilter { field: String, reason: String },

    /// The dataset document has the wrong shape
    #[error("Invalid dataset: {reason}")]
    InvalidDataset { reason: String },

    /// JSON serialization/deserialization failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<CatalogError> for ExError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::DeviceNotFound { device_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(device_id)
                .with_message("Device not found"),

            CatalogError::IncompleteSelection => ExError::new(ExErrorKind::IncompleteSelection)
                .with_message("Comparison needs both a left and a right device"),

            CatalogError::InvalidFilter { field, reason } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_entity_id(field)
                    .with_message(format!("Invalid filter: {}", reason))
            }

            CatalogError::InvalidDataset { reason } => {
                ExError::new(ExErrorKind::InvalidDataset).with_message(reason)
            }

            CatalogError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to CatalogError
impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Serialization {
            message: err.to_string(),
        }
    }
}
