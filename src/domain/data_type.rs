#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum DataType {
    Float,
    String,
    Integer,
    Boolean,
    DateTime,
    TimeSpan,
    File,
    LatLng,
}

impl DataType {
    pub fn all() -> [DataType; 8] {
        [
            DataType::Float,
            DataType::String,
            DataType::Integer,
            DataType::Boolean,
            DataType::DateTime,
            DataType::TimeSpan,
            DataType::File,
            DataType::LatLng,
        ]
    }

    pub fn code(&self) -> i64 {
        match self {
            DataType::Float => 1,
            DataType::String => 2,
            DataType::Integer => 3,
            DataType::Boolean => 4,
            DataType::DateTime => 5,
            DataType::TimeSpan => 6,
            DataType::File => 7,
            DataType::LatLng => 8,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DataType::Float => "float",
            DataType::String => "string",
            DataType::Integer => "integer",
            DataType::Boolean => "boolean",
            DataType::DateTime => "datetime",
            DataType::TimeSpan => "timespan",
            DataType::File => "file",
            DataType::LatLng => "latlng",
        }
    }

    pub fn from_code(code: i64) -> Option<DataType> {
        Self::all().into_iter().find(|data_type| data_type.code() == code)
    }

    /// Case-insensitive.
    pub fn from_label(label: &str) -> Option<DataType> {
        Self::all().into_iter().find(|data_type| data_type.label().eq_ignore_ascii_case(label))
    }
}
