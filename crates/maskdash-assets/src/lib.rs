//! # maskdash-assets
//!
//! Image store for the precomputed artifacts the dashboard displays.
//! Loads bytes by [`AssetRef`](maskdash_core::AssetRef); never decodes them.

pub mod audit;
pub mod error;
pub mod store;

pub use audit::{audit, AssetReport, AssetState, AssetStatus};
pub use error::AssetError;
pub use store::{FsImageStore, ImageStore, MemoryImageStore};
