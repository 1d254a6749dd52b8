//! Data layer: core types, loading, filtering and aggregation.
//!
//! Architecture:
//! ```text
//!  .csv / .json
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse file → DisasterDataset   (once, at startup)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌─────────────────┐
//!   │ DisasterDataset  │  immutable Vec<DisasterEvent>, type/year index
//!   └─────────────────┘
//!        │   + FilterSelection
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  year range & type set → FilteredView (indices)
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────┐
//!   │ aggregate  │  FilteredView → YearlyCount
//!   └───────────┘
//! ```

pub mod aggregate;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;

pub use aggregate::YearlyCount;
pub use error::{LoadError, SchemaError};
pub use filter::{apply, FilterSelection, FilteredView};
pub use model::{DisasterDataset, DisasterEvent};
