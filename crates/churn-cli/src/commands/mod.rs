//! CLI command implementations.

pub mod form;
pub mod inspect;
pub mod predict;

pub use form::FormCommand;
pub use inspect::InspectCommand;
pub use predict::PredictCommand;
