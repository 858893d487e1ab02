pub mod resolve;
pub mod uri_attr;

pub use resolve::resolve_url;
pub use uri_attr::rewrite_uri_attributes;
