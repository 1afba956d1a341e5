//! Terminal output for the dependency checker.
//!
//! - [`DotTheme`] for colored or plain styling
//! - [`Reporter`] for writing check results and install hints

pub mod report;
pub mod theme;

pub use report::Reporter;
pub use theme::{should_use_colors, DotTheme};
