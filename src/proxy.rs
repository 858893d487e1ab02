pub mod client;
pub mod headers;

pub use client::ProxyClient;
pub use headers::SiteHeaders;
