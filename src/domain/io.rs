use crate::domain::Io::*;
use crate::domain::IoCode;

/// Direction of a channel. Decoded from integer codes `0`/`1` (booleans are accepted too) but always
/// sent to the API as a boolean.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Io {
    ReadOnly,
    ReadWrite,
}

impl Io {
    pub fn all() -> [Io; 2] {
        [ReadOnly, ReadWrite]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReadOnly => "readonly",
            ReadWrite => "readwrite",
        }
    }

    pub fn from_wire(code: &IoCode) -> Option<Io> {
        match code {
            IoCode::Code(0) | IoCode::Flag(false) => Some(ReadOnly),
            IoCode::Code(1) | IoCode::Flag(true) => Some(ReadWrite),
            IoCode::Code(_) => None,
        }
    }

    pub fn to_wire(&self) -> IoCode {
        IoCode::Flag(*self == ReadWrite)
    }

    /// Case-insensitive.
    pub fn from_label(label: &str) -> Option<Io> {
        Self::all().into_iter().find(|io| io.label().eq_ignore_ascii_case(label))
    }
}
