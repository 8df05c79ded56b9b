mod channel;
mod channel_type;
mod data_type;
mod device_type;
mod io;
mod lenient_deserializer;
pub mod named;

pub use channel::{CHANNEL_FIELDS, ChannelRow, IoCode, WireChannel};
pub use channel_type::ChannelType;
pub use data_type::DataType;
pub use device_type::DeviceType;
pub use io::Io;
