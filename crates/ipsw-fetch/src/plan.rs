//! Pure decisions taken before any I/O.

use std::path::{Path, PathBuf};

use ipsw_catalog::FirmwareRecord;

/// Why a record was not downloaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// URL does not end with `.ipsw`.
    NotIpsw,
    /// A file with the target name is already present.
    AlreadyExists,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NotIpsw => write!(f, "URL does not point to an ipsw"),
            SkipReason::AlreadyExists => write!(f, "already exists"),
        }
    }
}

/// Where `record` is stored inside `output_dir`, or why it is ineligible.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use ipsw_catalog::FirmwareRecord;
/// use ipsw_fetch::{SkipReason, target_path};
///
/// let fw = FirmwareRecord::new("14.4", "https://cdn.example.com/a/iPhone.ipsw", "");
/// assert_eq!(target_path(&fw, Path::new("/tmp")), Ok(Path::new("/tmp/iPhone.ipsw").to_path_buf()));
///
/// let zip = FirmwareRecord::new("14.4", "https://cdn.example.com/a/iPhone.zip", "");
/// assert_eq!(target_path(&zip, Path::new("/tmp")), Err(SkipReason::NotIpsw));
/// ```
pub fn target_path(record: &FirmwareRecord, output_dir: &Path) -> Result<PathBuf, SkipReason> {
    if !record.is_ipsw() {
        return Err(SkipReason::NotIpsw);
    }
    Ok(output_dir.join(record.file_name()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_path_uses_url_basename() {
        let fw = FirmwareRecord::new(
            "14.4",
            "https://updates.cdn-apple.com/2021/iPhone_4.7_14.4_18D52_Restore.ipsw",
            "",
        );
        assert_eq!(
            target_path(&fw, Path::new("out")).unwrap(),
            Path::new("out").join("iPhone_4.7_14.4_18D52_Restore.ipsw")
        );
    }

    #[test]
    fn test_suffix_is_case_sensitive() {
        let fw = FirmwareRecord::new("1.0", "https://example.com/x.IPSW", "");
        assert_eq!(target_path(&fw, Path::new("out")), Err(SkipReason::NotIpsw));
    }

    #[test]
    fn test_query_string_is_not_ipsw() {
        let fw = FirmwareRecord::new("1.0", "https://example.com/x.ipsw?sig=1", "");
        assert_eq!(target_path(&fw, Path::new("out")), Err(SkipReason::NotIpsw));
    }
}
