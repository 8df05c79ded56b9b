mod client;

pub use client::{MeshifyClient, MeshifyClientError};
