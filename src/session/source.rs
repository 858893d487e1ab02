/// A user-supplied source URL, classified by what the resolver must do with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceReference {
    /// Embed URL on the catalogue site; needs the version/iframe dance.
    IframeEmbed { url: String, site_url: String },
    /// Player page that already carries the session script.
    DirectPage(String),
    Unsupported(String),
}

impl SourceReference {
    pub fn classify(url: &str) -> Self {
        if url.contains("iframe") {
            let site_url = url.split("/iframe").next().unwrap_or_default();
            Self::IframeEmbed {
                url: url.to_string(),
                site_url: site_url.to_string(),
            }
        } else if url.contains("movie") || url.contains("tv") {
            Self::DirectPage(url.to_string())
        } else {
            Self::Unsupported(url.to_string())
        }
    }
}
