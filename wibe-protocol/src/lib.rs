#[cfg(feature = "http")]
pub mod http;
#[cfg(feature = "token")]
pub mod token;

pub const WIBE_PROTOCOL_VERSION: &str = env!("CARGO_PKG_VERSION");
