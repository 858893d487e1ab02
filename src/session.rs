pub mod credentials;
pub mod page;
pub mod resolver;
pub mod source;

pub use credentials::SessionCredentials;
pub use resolver::SessionResolver;
pub use source::SourceReference;
