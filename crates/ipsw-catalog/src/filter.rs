//! Selection of firmware records from a catalog.
//!
//! Device-name matching takes precedence: when a device substring is given,
//! version bounds only apply inside matching devices. Without a device
//! substring, version bounds apply to every device. With neither, nothing is
//! selected.

use ipsw_version::Version;
use tracing::trace;

use crate::catalog::{DeviceEntry, FirmwareCatalog, FirmwareRecord};

/// What to take from a single device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Device name matched and no version bound is set.
    DeviceAll,
    /// Device name matched; keep firmwares inside the version range.
    DeviceInRange,
    /// No device filter; keep firmwares inside the version range.
    GlobalInRange,
    Skip,
}

/// User-supplied filter.
#[derive(Debug, Clone)]
pub struct FilterCriteria {
    device: Option<String>,
    min_version: Option<Version>,
    max_version: Option<Version>,
    min: Version,
    max: Version,
}

impl FilterCriteria {
    /// An empty device string or version bound counts as unset.
    pub fn new(
        device: Option<String>,
        min_version: Option<Version>,
        max_version: Option<Version>,
    ) -> Self {
        let device = device
            .filter(|d| !d.is_empty())
            .map(|d| d.to_lowercase());
        let min_version = min_version.filter(|v| !v.as_str().is_empty());
        let max_version = max_version.filter(|v| !v.as_str().is_empty());
        let min = min_version
            .clone()
            .unwrap_or_else(|| Version::parse(Version::DEFAULT_MIN));
        let max = max_version
            .clone()
            .unwrap_or_else(|| Version::parse(Version::DEFAULT_MAX));

        Self {
            device,
            min_version,
            max_version,
            min,
            max,
        }
    }

    pub fn device(&self) -> Option<&str> {
        self.device.as_deref()
    }

    pub fn has_version_bound(&self) -> bool {
        self.min_version.is_some() || self.max_version.is_some()
    }

    /// Effective inclusive bounds, with defaults filled in.
    pub fn bounds(&self) -> (&Version, &Version) {
        (&self.min, &self.max)
    }

    pub fn is_empty(&self) -> bool {
        self.device.is_none() && !self.has_version_bound()
    }

    pub fn in_range(&self, version: &Version) -> bool {
        version.within(&self.min, &self.max)
    }

    pub fn decide(&self, device_name: &str) -> Selection {
        let name_matches = self
            .device
            .as_deref()
            .map(|d| device_name.to_lowercase().contains(d));

        match (name_matches, self.has_version_bound()) {
            (Some(true), false) => Selection::DeviceAll,
            (Some(true), true) => Selection::DeviceInRange,
            (Some(false), _) => Selection::Skip,
            (None, true) => Selection::GlobalInRange,
            (None, false) => Selection::Skip,
        }
    }
}

/// Flatten the catalog into the ordered list of records to download.
///
/// Order follows the catalog, then each device's firmware list. Records are
/// not de-duplicated.
pub fn select<'a>(catalog: &'a FirmwareCatalog, criteria: &FilterCriteria) -> Vec<&'a FirmwareRecord> {
    let mut targets = Vec::new();

    for device in catalog.devices.values() {
        let selection = criteria.decide(&device.name);
        trace!(device = %device.name, ?selection, "filter decision");
        collect(device, selection, criteria, &mut targets);
    }

    targets
}

fn collect<'a>(
    device: &'a DeviceEntry,
    selection: Selection,
    criteria: &FilterCriteria,
    targets: &mut Vec<&'a FirmwareRecord>,
) {
    match selection {
        Selection::DeviceAll => targets.extend(device.firmwares.iter()),
        Selection::DeviceInRange | Selection::GlobalInRange => targets.extend(
            device
                .firmwares
                .iter()
                .filter(|fw| criteria.in_range(&fw.version)),
        ),
        Selection::Skip => {}
    }
}
