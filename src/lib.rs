// Receipt Processor - Core Library
// Exposes models, store and scoring rules for the CLI, the API server, and tests

pub mod error;
pub mod logging;
pub mod models;
pub mod points;
pub mod store;
pub mod validation;

// Only compiled with the web server feature
#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;

// Re-export commonly used types
pub use error::{ReceiptError, Result};
pub use logging::init_logging;
pub use models::{Item, Points, Receipt, ReceiptIdResponse};
pub use points::{breakdown, compute, PointsBreakdown};
pub use store::ReceiptStore;
pub use validation::{ReceiptValidator, ValidationError, ValidationResult};

#[cfg(feature = "server")]
pub use api::{router, AppState};
#[cfg(feature = "server")]
pub use config::ServerConfig;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
