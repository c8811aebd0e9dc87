//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error and diagnostics types    |
//! | `field`  | Field paths cited by diagnostics             |
//! | `handle` | Global configuration handle (set once)       |

mod error;
mod field;
pub mod handle;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use handle::{cfg, init_config};
