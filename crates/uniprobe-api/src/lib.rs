// uniprobe-api: async HTTP surface for the UniFi controller management API.

pub mod client;
pub mod error;
pub mod models;
pub mod platform;
pub mod session;
pub mod transport;

pub use client::SiteClient;
pub use error::Error;
pub use platform::{ControllerKind, detect_kind};
pub use session::{Session, login};
pub use transport::TransportConfig;
