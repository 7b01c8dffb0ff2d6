use ipsw_catalog::{FirmwareCatalog, MetadataError};
use tracing::debug;

use super::http::HttpClient;

/// Retrieve and parse the metadata document at `url`.
pub async fn fetch_catalog<C: HttpClient>(
    client: &C,
    url: &str,
) -> Result<FirmwareCatalog, MetadataError> {
    debug!(url, "fetching firmware metadata");

    let body = client
        .get(url)
        .await
        .map_err(|e| MetadataError::Unreachable {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

    let catalog = FirmwareCatalog::from_slice(&body)?;
    debug!(
        devices = catalog.len(),
        firmwares = catalog.firmware_count(),
        "parsed firmware metadata"
    );

    Ok(catalog)
}
