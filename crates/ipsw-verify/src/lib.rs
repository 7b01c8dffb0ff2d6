//! Checksum verification primitives for downloaded firmware.
//!
//! Digests are computed incrementally while bytes are written, so a file is
//! hashed in the same pass that stores it.
//!
//! # Example
//!
//! ```
//! use ipsw_verify::{Hasher, Md5Hasher, digest_matches};
//!
//! let mut hasher = Md5Hasher::new();
//! hasher.update(b"hello ");
//! hasher.update(b"world");
//! let digest = hex::encode(hasher.finalize());
//!
//! assert!(digest_matches(&digest, "5EB63BBBE01EEED093CB22BB8F5ACDC3"));
//! ```

pub use self::hasher::{Hasher, Md5Hasher};
pub use self::writer::{Verification, VerifiedWriter, digest_matches};

mod hasher;
mod writer;
