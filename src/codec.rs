use crate::domain::{ChannelRow, ChannelType, DataType, Io, IoCode, WireChannel};
use std::num::ParseIntError;
use thiserror::Error;

/// Spells out the enumerations of an API channel so it can be written to a CSV file.
pub fn decode(channel: WireChannel) -> Result<ChannelRow, CodecError> {
    let io = Io::from_wire(&channel.io).ok_or_else(|| CodecError::UnknownEnumValue {
        field: "io",
        value: match channel.io {
            IoCode::Flag(flag) => flag.to_string(),
            IoCode::Code(code) => code.to_string(),
        },
    })?;
    let channel_type = ChannelType::from_code(channel.channel_type).ok_or_else(|| CodecError::UnknownEnumValue {
        field: "channelType",
        value: channel.channel_type.to_string(),
    })?;
    let data_type = DataType::from_code(channel.data_type).ok_or_else(|| CodecError::UnknownEnumValue {
        field: "dataType",
        value: channel.data_type.to_string(),
    })?;

    Ok(ChannelRow {
        id: channel.id.map(|id| id.to_string()).unwrap_or_default(),
        name: channel.name,
        device_type_id: channel.device_type_id.map(|id| id.to_string()).unwrap_or_default(),
        from_me: if channel.from_me { "True" } else { "False" }.to_string(),
        io: io.label().to_string(),
        sub_title: channel.sub_title.unwrap_or_default(),
        help_explanation: channel.help_explanation.unwrap_or_default(),
        channel_type: channel_type.label().to_string(),
        data_type: data_type.label().to_string(),
        default_value: channel.default_value.unwrap_or_default(),
        regex: channel.regex.unwrap_or_default(),
        regex_err_msg: channel.regex_err_msg.unwrap_or_default(),
    })
}

/// Turns a CSV row back into a channel the API accepts. An empty `id` is left out so the API assigns one.
pub fn encode(row: ChannelRow) -> Result<WireChannel, CodecError> {
    let io = Io::from_label(&row.io).ok_or_else(|| unknown("io", &row.io))?;
    let channel_type = ChannelType::from_label(&row.channel_type).ok_or_else(|| unknown("channelType", &row.channel_type))?;
    let data_type = DataType::from_label(&row.data_type).ok_or_else(|| unknown("dataType", &row.data_type))?;

    let id = match row.id.trim() {
        "" => None,
        id => Some(parse_int("id", id)?),
    };

    Ok(WireChannel {
        id,
        name: row.name,
        device_type_id: Some(parse_int("deviceTypeId", row.device_type_id.trim())?),
        from_me: row.from_me.eq_ignore_ascii_case("true"),
        io: io.to_wire(),
        sub_title: Some(row.sub_title),
        help_explanation: Some(row.help_explanation),
        channel_type: channel_type.code(),
        data_type: data_type.code(),
        default_value: Some(row.default_value),
        regex: Some(row.regex),
        regex_err_msg: Some(row.regex_err_msg),
    })
}

fn unknown(field: &'static str, value: &str) -> CodecError {
    CodecError::UnknownEnumValue {
        field,
        value: value.to_string(),
    }
}

fn parse_int(field: &'static str, value: &str) -> Result<i64, CodecError> {
    value.parse().map_err(|source| CodecError::InvalidNumber {
        field,
        value: value.to_string(),
        source,
    })
}

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("unknown {field} value '{value}'")]
    UnknownEnumValue { field: &'static str, value: String },
    #[error("invalid {field} '{value}': {source}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        source: ParseIntError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn wire_channel(channel_type: i64, io: IoCode, data_type: i64) -> WireChannel {
        WireChannel {
            id: Some(7),
            name: "casing_pressure".to_string(),
            device_type_id: Some(42),
            from_me: false,
            io,
            sub_title: Some("Casing Pressure".to_string()),
            help_explanation: None,
            channel_type,
            data_type,
            default_value: None,
            regex: Some("^\\d+$".to_string()),
            regex_err_msg: Some("digits only".to_string()),
        }
    }

    fn row(channel_type: &str, io: &str, data_type: &str) -> ChannelRow {
        ChannelRow {
            id: "".to_string(),
            name: "setpoint".to_string(),
            device_type_id: "42".to_string(),
            from_me: "True".to_string(),
            io: io.to_string(),
            sub_title: "Setpoint".to_string(),
            help_explanation: "".to_string(),
            channel_type: channel_type.to_string(),
            data_type: data_type.to_string(),
            default_value: "0".to_string(),
            regex: "".to_string(),
            regex_err_msg: "".to_string(),
        }
    }

    #[test]
    fn decode_spells_out_enumerations() -> Result<(), CodecError> {
        let decoded = decode(wire_channel(1, IoCode::Code(0), 3))?;

        assert_eq!(
            decoded,
            ChannelRow {
                id: "7".to_string(),
                name: "casing_pressure".to_string(),
                device_type_id: "42".to_string(),
                from_me: "False".to_string(),
                io: "readonly".to_string(),
                sub_title: "Casing Pressure".to_string(),
                help_explanation: "".to_string(),
                channel_type: "device".to_string(),
                data_type: "integer".to_string(),
                default_value: "".to_string(),
                regex: "^\\d+$".to_string(),
                regex_err_msg: "digits only".to_string(),
            }
        );
        Ok(())
    }

    #[rstest]
    #[case::from_me(true, "True")]
    #[case::not_from_me(false, "False")]
    fn decode_spells_from_me_with_a_capital(#[case] from_me: bool, #[case] expected: &str) -> Result<(), CodecError> {
        let mut channel = wire_channel(1, IoCode::Code(0), 1);
        channel.from_me = from_me;

        assert_eq!(decode(channel)?.from_me, expected);
        Ok(())
    }

    #[rstest]
    #[case::channel_type(wire_channel(2, IoCode::Code(0), 1), "channelType", "2")]
    #[case::data_type(wire_channel(1, IoCode::Code(0), 9), "dataType", "9")]
    #[case::io(wire_channel(1, IoCode::Code(3), 1), "io", "3")]
    fn decode_rejects_codes_outside_the_tables(#[case] channel: WireChannel, #[case] expected_field: &str, #[case] expected_value: &str) {
        match decode(channel) {
            Err(CodecError::UnknownEnumValue { field, value }) => {
                assert_eq!(field, expected_field);
                assert_eq!(value, expected_value);
            }
            other => panic!("expected an unknown enum value, got {:?}", other),
        }
    }

    #[test]
    fn encode_converts_labels_to_codes() -> Result<(), CodecError> {
        let encoded = encode(row("static", "readwrite", "boolean"))?;

        assert_eq!(encoded.channel_type, 5);
        assert_eq!(encoded.io, IoCode::Flag(true));
        assert_eq!(encoded.data_type, 4);
        assert_eq!(encoded.from_me, true);
        assert_eq!(encoded.device_type_id, Some(42));
        assert_eq!(encoded.id, None);
        Ok(())
    }

    #[test]
    fn encode_produces_the_api_payload() -> Result<(), Box<dyn std::error::Error>> {
        let encoded = encode(row("User Input", "READONLY", "Float"))?;

        assert_eq!(
            serde_json::to_value(&encoded)?,
            json!({
                "name": "setpoint",
                "deviceTypeId": 42,
                "fromMe": true,
                "io": false,
                "subTitle": "Setpoint",
                "helpExplanation": "",
                "channelType": 6,
                "dataType": 1,
                "defaultValue": "0",
                "regex": "",
                "regexErrMsg": ""
            })
        );
        Ok(())
    }

    #[rstest]
    #[case::true_lower("true", true)]
    #[case::true_mixed("TrUe", true)]
    #[case::false_("False", false)]
    #[case::empty("", false)]
    #[case::yes("yes", false)]
    fn encode_reads_from_me(#[case] from_me: &str, #[case] expected: bool) -> Result<(), CodecError> {
        let mut row = row("device", "readonly", "float");
        row.from_me = from_me.to_string();

        assert_eq!(encode(row)?.from_me, expected);
        Ok(())
    }

    #[rstest]
    #[case::channel_type(row("sensor", "readonly", "float"), "channelType")]
    #[case::io(row("device", "write", "float"), "io")]
    #[case::data_type(row("device", "readonly", "double"), "dataType")]
    fn encode_rejects_unknown_labels(#[case] row: ChannelRow, #[case] expected_field: &str) {
        match encode(row) {
            Err(CodecError::UnknownEnumValue { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("expected an unknown enum value, got {:?}", other),
        }
    }

    #[test]
    fn encode_rejects_a_non_numeric_device_type_id() {
        let mut row = row("device", "readonly", "float");
        row.device_type_id = "pump".to_string();

        assert!(matches!(encode(row), Err(CodecError::InvalidNumber { field: "deviceTypeId", .. })));
    }

    #[test]
    fn encode_keeps_an_exported_id() -> Result<(), CodecError> {
        let mut row = row("device", "readonly", "float");
        row.id = "7".to_string();

        assert_eq!(encode(row)?.id, Some(7));
        Ok(())
    }

    #[test]
    fn channel_type_and_data_type_survive_a_round_trip() -> Result<(), CodecError> {
        for channel_type in ChannelType::all() {
            for data_type in DataType::all() {
                let channel = wire_channel(channel_type.code(), IoCode::Code(1), data_type.code());

                let round_tripped = encode(decode(channel)?)?;

                assert_eq!(round_tripped.channel_type, channel_type.code());
                assert_eq!(round_tripped.data_type, data_type.code());
            }
        }
        Ok(())
    }
}
