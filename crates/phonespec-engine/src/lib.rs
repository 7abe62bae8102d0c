//! PhoneSpec Engine - Session orchestration
//!
//! Holds the explicit state of one browsing session (dataset load state,
//! pending comparison, theme) and exposes the operations a front end calls,
//! each wrapped in boundary logging.

pub mod session;
pub mod state;

pub use session::{DatasetStats, Session};
pub use state::LoadState;
