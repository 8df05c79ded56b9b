use crate::codec::{CodecError, decode};
use crate::domain::named::{NameNotFound, find_by_name};
use crate::domain::{CHANNEL_FIELDS, ChannelRow, DeviceType, WireChannel};
use crate::meshify::{MeshifyClient, MeshifyClientError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tokio::fs;
use tracing::{info, instrument};

pub fn default_output_file(device_type_name: &str) -> PathBuf {
    PathBuf::from(format!("channels_{}.csv", device_type_name))
}

/// Writes the channels of the named device type to a CSV file and returns its path.
#[instrument(skip(client))]
pub async fn export_channels(client: &MeshifyClient, device_type_name: &str, output_file: Option<PathBuf>) -> Result<PathBuf, ExportError> {
    let device_types = client.query::<DeviceType>("devicetypes").await?;
    let device_type = find_by_name(device_type_name, &device_types)?;

    let channels = client
        .query::<WireChannel>(&format!("devicetypes/{}/channels", device_type.id))
        .await?;
    info!("📡 Found {} channels for '{}'", channels.len(), device_type.name);

    let rows = channels.into_iter().map(decode).collect::<Result<Vec<_>, _>>()?;

    let output_file = output_file.unwrap_or_else(|| default_output_file(device_type_name));
    fs::write(&output_file, to_csv(&rows)?).await.map_err(|e| ExportError::Io {
        source: e,
        path: output_file.clone(),
    })?;

    info!("💾 Wrote channels to {}", output_file.display());
    Ok(output_file)
}

fn to_csv(rows: &[ChannelRow]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if rows.is_empty() {
        writer.write_record(CHANNEL_FIELDS)?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    Ok(writer.into_inner().map_err(|e| csv::Error::from(e.into_error()))?)
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    Client(#[from] MeshifyClientError),
    #[error("unknown device type: {0}")]
    DeviceTypeNotFound(#[from] NameNotFound<DeviceType>),
    #[error("unable to decode channel: {0}")]
    Codec(#[from] CodecError),
    #[error("unable to write CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("unable to write '{}': {}", path.display(), source)]
    Io { source: io::Error, path: PathBuf },
}
