//! I/O operations: HTTP access, metadata retrieval and verified downloads.

mod fetcher;
mod http;
mod metadata;

pub use fetcher::{Fetcher, VerifyResult};
pub use http::{BoxStream, HttpClient, ResponseBody};
pub use metadata::fetch_catalog;

#[cfg(feature = "reqwest")]
pub use http::{ClientSetting, ReqwestClient};
