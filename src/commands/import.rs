use crate::codec::{CodecError, encode};
use crate::domain::named::{NameNotFound, find_by_name};
use crate::domain::{CHANNEL_FIELDS, ChannelRow, DeviceType};
use crate::meshify::{MeshifyClient, MeshifyClientError};
use serde_json::Value;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{info, instrument, warn};

#[derive(Debug, Default, PartialEq)]
pub struct ImportReport {
    pub created: Vec<String>,
    pub failed: Vec<String>,
}

/// Posts every row of `csv_file` as a new channel of the named device type. A row that can't be created is
/// reported and skipped, the remaining rows are still posted.
#[instrument(skip(client))]
pub async fn import_channels(client: &MeshifyClient, device_type_name: &str, csv_file: &Path) -> Result<ImportReport, ImportError> {
    let device_types = client.query::<DeviceType>("devicetypes").await?;
    let device_type = find_by_name(device_type_name, &device_types)?;

    let content = fs::read(csv_file).await.map_err(|e| ImportError::Io {
        source: e,
        path: csv_file.to_path_buf(),
    })?;
    let rows = read_rows(&content)?;
    info!("📄 Read {} channels from {}", rows.len(), csv_file.display());

    let endpoint = format!("devicetypes/{}/channels", device_type.id);
    let mut report = ImportReport::default();
    for row in rows {
        let name = row.name.clone();
        match create_channel(client, &endpoint, row).await {
            Ok(()) => {
                info!("✅ Created channel '{}'", name);
                report.created.push(name);
            }
            Err(e) => {
                warn!("⚠️ Failed to create channel '{}': {}", name, e);
                report.failed.push(name);
            }
        }
    }

    info!("📄 Import finished, {} created, {} failed", report.created.len(), report.failed.len());
    Ok(report)
}

fn read_rows(content: &[u8]) -> Result<Vec<ChannelRow>, ImportError> {
    let mut reader = csv::Reader::from_reader(content);

    let headers = reader.headers()?.clone();
    if let Some(missing) = CHANNEL_FIELDS.iter().find(|field| !headers.iter().any(|header| header == **field)) {
        return Err(ImportError::MissingColumn(missing.to_string()));
    }

    Ok(reader.deserialize::<ChannelRow>().collect::<Result<Vec<_>, _>>()?)
}

async fn create_channel(client: &MeshifyClient, endpoint: &str, row: ChannelRow) -> Result<(), RowError> {
    let channel = encode(row)?;
    match client.post(endpoint, &channel).await? {
        Some(created) if !is_empty(&created) => Ok(()),
        _ => Err(RowError::NotCreated),
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    }
}

#[derive(Error, Debug)]
enum RowError {
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Client(#[from] MeshifyClientError),
    #[error("Meshify did not create the channel")]
    NotCreated,
}

#[derive(Error, Debug)]
pub enum ImportError {
    #[error(transparent)]
    Client(#[from] MeshifyClientError),
    #[error("unknown device type: {0}")]
    DeviceTypeNotFound(#[from] NameNotFound<DeviceType>),
    #[error("CSV file is missing the '{0}' column")]
    MissingColumn(String),
    #[error("unable to read CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("unable to read '{}': {}", path.display(), source)]
    Io { source: io::Error, path: PathBuf },
}
