//! Firmware metadata retrieval and verified streaming downloads.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Options and progress types
//! - [`plan`] - Pure decisions (eligibility, target paths)
//! - `effects` - I/O operations behind the [`HttpClient`] trait
//!
//! Downloads run one at a time. Each record gets its own file handle and
//! hash accumulator; the body is hashed while it is written.

pub mod plan;
pub mod data;
mod effects;
mod error;

pub use plan::{SkipReason, target_path};
pub use data::{FetchOptions, FetchPhase, Progress};
pub use effects::{BoxStream, Fetcher, HttpClient, ResponseBody, VerifyResult, fetch_catalog};

#[cfg(feature = "reqwest")]
pub use effects::{ClientSetting, ReqwestClient};

pub use error::{Result, TransferError};
