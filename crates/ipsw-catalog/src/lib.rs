//! Firmware metadata catalog and the selection filter applied to it.
//!
//! - [`FirmwareCatalog`] is parsed once from the metadata document and is
//!   read-only afterwards.
//! - [`select`] flattens it into an ordered target list according to
//!   [`FilterCriteria`].

pub use catalog::{DeviceEntry, FirmwareCatalog, FirmwareRecord, IPSW_SUFFIX};
pub use error::{MetadataError, Result};
pub use filter::{FilterCriteria, Selection, select};

mod catalog;
mod error;
mod filter;
