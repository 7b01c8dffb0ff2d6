use ipsw_catalog::{FilterCriteria, FirmwareCatalog, FirmwareRecord, select};
use ipsw_version::Version;

const DOC: &str = r#"{
    "devices": {
        "iPhone7,2": {
            "firmwares": [
                { "version": "12.0",   "url": "https://cdn.example.com/iPhone7,2_12.0.ipsw",   "md5sum": "a" },
                { "version": "14.4",   "url": "https://cdn.example.com/iPhone7,2_14.4.ipsw",   "md5sum": "b" },
                { "version": "14.5.1", "url": "https://cdn.example.com/iPhone7,2_14.5.1.ipsw", "md5sum": "c" }
            ]
        },
        "iPad2,1": {
            "firmwares": [
                { "version": "9.3.5", "url": "https://cdn.example.com/iPad2,1_9.3.5.ipsw", "md5sum": "d" },
                { "version": "14.2",  "url": "https://cdn.example.com/iPad2,1_14.2.ipsw",  "md5sum": "e" }
            ]
        },
        "iPhone8,1": {
            "firmwares": [
                { "version": "15.0", "url": "https://cdn.example.com/iPhone8,1_15.0.ipsw", "md5sum": "f" },
                { "version": "14.3", "url": "https://cdn.example.com/iPhone8,1_14.3.ipsw", "md5sum": "g" }
            ]
        }
    }
}"#;

fn catalog() -> FirmwareCatalog {
    DOC.parse().expect("fixture parses")
}

fn criteria(device: Option<&str>, min: Option<&str>, max: Option<&str>) -> FilterCriteria {
    FilterCriteria::new(
        device.map(str::to_string),
        min.map(Version::parse),
        max.map(Version::parse),
    )
}

fn urls(targets: &[&FirmwareRecord]) -> Vec<String> {
    targets
        .iter()
        .map(|fw| fw.file_name().to_string())
        .collect()
}

#[test]
fn nothing_set_selects_nothing() {
    let catalog = catalog();
    assert!(select(&catalog, &criteria(None, None, None)).is_empty());
}

#[test]
fn empty_version_bound_selects_nothing() {
    let catalog = catalog();
    for c in [
        criteria(None, Some(""), None),
        criteria(None, None, Some("")),
        criteria(None, Some(""), Some("")),
    ] {
        assert!(c.is_empty());
        assert!(select(&catalog, &c).is_empty());
    }
}

#[test]
fn empty_version_bound_beside_device_selects_whole_device() {
    let catalog = catalog();
    let targets = select(&catalog, &criteria(Some("ipad"), Some(""), None));
    assert_eq!(urls(&targets), ["iPad2,1_9.3.5.ipsw", "iPad2,1_14.2.ipsw"]);
}

#[test]
fn device_only_selects_all_of_matching_devices_in_order() {
    let catalog = catalog();
    let targets = select(&catalog, &criteria(Some("IPHONE"), None, None));
    assert_eq!(
        urls(&targets),
        [
            "iPhone7,2_12.0.ipsw",
            "iPhone7,2_14.4.ipsw",
            "iPhone7,2_14.5.1.ipsw",
            "iPhone8,1_15.0.ipsw",
            "iPhone8,1_14.3.ipsw",
        ]
    );
}

#[test]
fn version_only_applies_across_devices() {
    let catalog = catalog();
    let targets = select(&catalog, &criteria(None, Some("14.0"), Some("14.4")));
    assert_eq!(
        urls(&targets),
        [
            "iPhone7,2_14.4.ipsw",
            "iPad2,1_14.2.ipsw",
            "iPhone8,1_14.3.ipsw",
        ]
    );
}

#[test]
fn min_only_uses_default_upper_bound() {
    let catalog = catalog();
    let targets = select(&catalog, &criteria(None, Some("14.5"), None));
    assert_eq!(
        urls(&targets),
        ["iPhone7,2_14.5.1.ipsw", "iPhone8,1_15.0.ipsw"]
    );
}

#[test]
fn device_and_version_restrict_within_matching_devices() {
    let catalog = catalog();
    let targets = select(&catalog, &criteria(Some("ipad"), Some("14.0"), None));
    // iPhone firmwares in range are not selected because the device filter gates them.
    assert_eq!(urls(&targets), ["iPad2,1_14.2.ipsw"]);
}

#[test]
fn device_that_matches_nothing_selects_nothing() {
    let catalog = catalog();
    let targets = select(&catalog, &criteria(Some("watch"), Some("1.0"), None));
    assert!(targets.is_empty());
}

#[test]
fn iphone7_range_selects_single_release() {
    let catalog = catalog();
    let targets = select(&catalog, &criteria(Some("iphone7"), Some("14.0"), Some("14.4.5")));
    let versions: Vec<_> = targets.iter().map(|fw| fw.version.as_str()).collect();
    assert_eq!(versions, ["14.4"]);
}

#[test]
fn duplicates_are_kept() {
    let doc = r#"{
        "devices": {
            "iPod5,1": { "firmwares": [ { "version": "9.3.5", "url": "https://x/shared.ipsw", "md5sum": "1" } ] },
            "iPod7,1": { "firmwares": [ { "version": "9.3.5", "url": "https://x/shared.ipsw", "md5sum": "1" } ] }
        }
    }"#;
    let catalog: FirmwareCatalog = doc.parse().unwrap();
    let targets = select(&catalog, &criteria(Some("ipod"), None, None));
    assert_eq!(targets.len(), 2);
    assert_eq!(targets[0], targets[1]);
}
