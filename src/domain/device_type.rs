use crate::domain::named::Named;
use serde::Deserialize;

// Only the fields needed to address the device type's channels, the API returns many more.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct DeviceType {
    pub id: i64,
    pub name: String,
}

impl Named for DeviceType {
    fn name(&self) -> &str {
        &self.name
    }
}
