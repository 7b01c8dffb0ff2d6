use indexmap::IndexMap;
use ipsw_version::Version;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{MetadataError, Result};

/// Suffix a URL must carry to be eligible for download.
pub const IPSW_SUFFIX: &str = ".ipsw";

/// One downloadable firmware image.
///
/// Only `version`, `url` and `md5sum` are load-bearing. The remaining fields
/// are informational and fall back to `None` when the document carries an
/// unexpected type for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirmwareRecord {
    pub version: Version,
    pub url: String,
    /// Reference MD5 digest, hex encoded.
    #[serde(rename = "md5sum", default)]
    pub checksum: String,
    #[serde(default, deserialize_with = "lenient")]
    pub identifier: Option<String>,
    #[serde(rename = "buildid", default, deserialize_with = "lenient")]
    pub build_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub size: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub signed: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub filename: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl FirmwareRecord {
    pub fn new(
        version: impl Into<Version>,
        url: impl Into<String>,
        checksum: impl Into<String>,
    ) -> Self {
        Self {
            version: version.into(),
            url: url.into(),
            checksum: checksum.into(),
            identifier: None,
            build_id: None,
            size: None,
            signed: None,
            filename: None,
        }
    }

    pub fn is_ipsw(&self) -> bool {
        self.url.ends_with(IPSW_SUFFIX)
    }

    /// Final `/`-separated segment of the URL.
    pub fn file_name(&self) -> &str {
        self.url.rsplit('/').next().unwrap_or(&self.url)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceEntry {
    pub name: String,
    pub firmwares: Vec<FirmwareRecord>,
}

/// Parsed metadata document, keyed by device name in document order.
#[derive(Debug, Clone, Default)]
pub struct FirmwareCatalog {
    pub devices: IndexMap<String, DeviceEntry>,
}

#[derive(Deserialize)]
struct RawDocument {
    #[serde(default)]
    devices: Option<IndexMap<String, RawDevice>>,
}

#[derive(Deserialize)]
struct RawDevice {
    #[serde(default)]
    firmwares: Vec<FirmwareRecord>,
}

impl FirmwareCatalog {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let raw: RawDocument = serde_json::from_slice(bytes)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawDocument) -> Result<Self> {
        let devices = raw.devices.unwrap_or_default();
        if devices.is_empty() {
            return Err(MetadataError::NoDevices);
        }

        let devices = devices
            .into_iter()
            .map(|(name, device)| {
                let entry = DeviceEntry {
                    name: name.clone(),
                    firmwares: device.firmwares,
                };
                (name, entry)
            })
            .collect();

        Ok(Self { devices })
    }

    pub fn len(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Total number of firmware records across all devices.
    pub fn firmware_count(&self) -> usize {
        self.devices.values().map(|d| d.firmwares.len()).sum()
    }
}

impl std::str::FromStr for FirmwareCatalog {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self> {
        let raw: RawDocument = serde_json::from_str(s)?;
        Self::from_raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "devices": {
            "iPhone7,2": {
                "name": "iPhone 6",
                "firmwares": [
                    {
                        "identifier": "iPhone7,2",
                        "version": "12.0",
                        "buildid": "16A366",
                        "md5sum": "ABCDEF",
                        "size": 3015948832,
                        "url": "https://updates.cdn-apple.com/iPhone_4.7_12.0_16A366_Restore.ipsw",
                        "signed": false,
                        "releasedate": "2018-09-17T17:03:50Z"
                    }
                ]
            },
            "iPad2,1": { "firmwares": [] },
            "AppleTV5,3": {
                "firmwares": [
                    { "version": "9.0", "url": "https://example.com/tv.ipsw", "md5sum": "00" }
                ]
            }
        }
    }"#;

    #[test]
    fn test_parse_preserves_document_order() {
        let catalog = DOC.parse::<FirmwareCatalog>().unwrap();
        let names: Vec<_> = catalog.devices.keys().map(String::as_str).collect();
        assert_eq!(names, ["iPhone7,2", "iPad2,1", "AppleTV5,3"]);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.firmware_count(), 2);
    }

    #[test]
    fn test_parse_record_fields() {
        let catalog = FirmwareCatalog::from_slice(DOC.as_bytes()).unwrap();
        let device = &catalog.devices["iPhone7,2"];
        assert_eq!(device.name, "iPhone7,2");

        let fw = &device.firmwares[0];
        assert_eq!(fw.version, Version::parse("12.0"));
        assert_eq!(fw.version.as_str(), "12.0");
        assert_eq!(fw.checksum, "ABCDEF");
        assert_eq!(fw.build_id.as_deref(), Some("16A366"));
        assert_eq!(fw.size, Some(3015948832));
        assert_eq!(fw.signed, Some(false));
        assert_eq!(fw.file_name(), "iPhone_4.7_12.0_16A366_Restore.ipsw");
        assert!(fw.is_ipsw());
    }

    #[test]
    fn test_mistyped_extra_fields_are_ignored() {
        let doc = r#"{
            "devices": {
                "iPhone7,2": {
                    "firmwares": [
                        {
                            "identifier": 72,
                            "version": "12.0",
                            "buildid": ["16A366"],
                            "md5sum": "ABCDEF",
                            "size": "3015948832",
                            "url": "https://x/iPhone7,2_12.0.ipsw",
                            "signed": 1,
                            "filename": null
                        }
                    ]
                }
            }
        }"#;

        let catalog = doc.parse::<FirmwareCatalog>().unwrap();
        let fw = &catalog.devices["iPhone7,2"].firmwares[0];
        assert_eq!(fw.version.as_str(), "12.0");
        assert_eq!(fw.checksum, "ABCDEF");
        assert_eq!(fw.url, "https://x/iPhone7,2_12.0.ipsw");
        assert_eq!(fw.identifier, None);
        assert_eq!(fw.build_id, None);
        assert_eq!(fw.size, None);
        assert_eq!(fw.signed, None);
        assert_eq!(fw.filename, None);
    }

    #[test]
    fn test_missing_devices_is_error() {
        let err = r#"{ "other": 1 }"#.parse::<FirmwareCatalog>().unwrap_err();
        assert!(matches!(err, MetadataError::NoDevices));
    }

    #[test]
    fn test_empty_devices_is_error() {
        let err = r#"{ "devices": {} }"#.parse::<FirmwareCatalog>().unwrap_err();
        assert!(matches!(err, MetadataError::NoDevices));
    }

    #[test]
    fn test_malformed_document_is_error() {
        let err = "<html>503</html>".parse::<FirmwareCatalog>().unwrap_err();
        assert!(matches!(err, MetadataError::Malformed(_)));
    }

    #[test]
    fn test_file_name_and_suffix() {
        let fw = FirmwareRecord::new("1.0", "https://example.com/a/b/c.zip", "");
        assert_eq!(fw.file_name(), "c.zip");
        assert!(!fw.is_ipsw());

        let bare = FirmwareRecord::new("1.0", "plain.ipsw", "");
        assert_eq!(bare.file_name(), "plain.ipsw");
        assert!(bare.is_ipsw());
    }
}
