use crate::domain::ChannelType::*;

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum ChannelType {
    Device,
    Static,
    UserInput,
    System,
}

impl ChannelType {
    pub fn all() -> [ChannelType; 4] {
        [Device, Static, UserInput, System]
    }

    pub fn code(&self) -> i64 {
        match self {
            Device => 1,
            Static => 5,
            UserInput => 6,
            System => 7,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Device => "device",
            Static => "static",
            UserInput => "user input",
            System => "system",
        }
    }

    pub fn from_code(code: i64) -> Option<ChannelType> {
        Self::all().into_iter().find(|channel_type| channel_type.code() == code)
    }

    /// Case-insensitive.
    pub fn from_label(label: &str) -> Option<ChannelType> {
        Self::all().into_iter().find(|channel_type| channel_type.label().eq_ignore_ascii_case(label))
    }
}
