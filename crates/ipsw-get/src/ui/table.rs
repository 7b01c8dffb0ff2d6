use indicatif::HumanBytes;
use ipsw_catalog::FirmwareRecord;
use tabled::{Table, Tabled, settings::Style};

#[derive(Debug, Tabled)]
pub struct TargetRow {
    #[tabled(rename = "Device")]
    pub device: String,
    #[tabled(rename = "Version")]
    pub version: String,
    #[tabled(rename = "Build")]
    pub build: String,
    #[tabled(rename = "Size")]
    pub size: String,
    #[tabled(rename = "File")]
    pub file: String,
}

impl From<&FirmwareRecord> for TargetRow {
    fn from(fw: &FirmwareRecord) -> Self {
        let or_dash = |v: Option<&str>| v.unwrap_or("-").to_string();
        Self {
            device: or_dash(fw.identifier.as_deref()),
            version: fw.version.to_string(),
            build: or_dash(fw.build_id.as_deref()),
            size: fw
                .size
                .map(|s| HumanBytes(s).to_string())
                .unwrap_or_else(|| "-".to_string()),
            file: fw.file_name().to_string(),
        }
    }
}

pub fn targets(records: &[&FirmwareRecord]) -> Table {
    let mut table = Table::new(records.iter().map(|fw| TargetRow::from(*fw)));
    table.with(Style::psql());
    table
}
