//! # relief-charts
//!
//! Chart geometry engine and SVG chart components for the humanitarian data
//! dashboard. The engine is pure: every call maps its arguments to new
//! values, with no shared state and no I/O.
//!
//! ## Modules
//!
//! - `chartkit` - Bounds, scale functions, tick intervals, even distribution
//! - `path` - SVG path data and gap splitting
//! - `dates` - Month/year boundary sequences for temporal axes
//! - `color` - Hex/RGB/HSL conversion and palette color scales
//! - `layout` - Data area dimensions inside margins, padding and axes
//! - `chart_data` - Raw items to points, ticks and paths
//! - `config` - Chart configuration
//! - `timeseries` - Time-series line chart component
//! - `legend` - Severity legend component

pub mod chart_data;
pub mod chartkit;
pub mod color;
pub mod config;
pub mod dates;
pub mod layout;
pub mod legend;
pub mod path;
pub mod timeseries;

pub use chart_data::*;
pub use chartkit::*;
pub use color::*;
pub use config::*;
pub use dates::*;
pub use layout::*;
pub use legend::*;
pub use path::*;
pub use timeseries::*;

// Re-export colors from relief-core for convenience
pub use relief_core::colors;
