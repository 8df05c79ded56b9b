use crate::domain::lenient_deserializer::{deserialize_flag, deserialize_text, deserialize_text_or_empty};
use serde::{Deserialize, Serialize};

/// CSV header of an exported channel file, in column order.
pub const CHANNEL_FIELDS: [&str; 12] = [
    "id",
    "name",
    "deviceTypeId",
    "fromMe",
    "io",
    "subTitle",
    "helpExplanation",
    "channelType",
    "dataType",
    "defaultValue",
    "regex",
    "regexErrMsg",
];

/// A channel as exchanged with the Meshify API.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireChannel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_text_or_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub from_me: bool,
    pub io: IoCode,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub sub_title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub help_explanation: Option<String>,
    pub channel_type: i64,
    pub data_type: i64,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub default_value: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub regex: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub regex_err_msg: Option<String>,
}

/// The API reports `io` as `0`/`1` but expects a boolean when a channel is created.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IoCode {
    Flag(bool),
    Code(i64),
}

/// A channel as a CSV row, every enumeration spelled out as its label.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelRow {
    pub id: String,
    pub name: String,
    pub device_type_id: String,
    pub from_me: String,
    pub io: String,
    pub sub_title: String,
    pub help_explanation: String,
    pub channel_type: String,
    pub data_type: String,
    pub default_value: String,
    pub regex: String,
    pub regex_err_msg: String,
}
