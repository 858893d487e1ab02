use url::Url;

/// Resolve a playlist reference against the URL of the playlist it came from.
///
/// Absolute references are returned as-is, root-relative ones keep only the
/// base's scheme and authority, everything else goes through standard
/// relative resolution. When the base (or the join) cannot be parsed, the
/// reference is returned unchanged so a later fetch can still try it.
pub fn resolve_url(reference: &str, base: &str) -> String {
    if reference.starts_with("http") {
        return reference.to_string();
    }

    let base_url = match Url::parse(base) {
        Ok(url) => url,
        Err(e) => {
            tracing::warn!("Unparsable base URL {:?}: {}", base, e);
            return reference.to_string();
        }
    };

    if reference.starts_with('/') {
        return format!("{}://{}{}", base_url.scheme(), authority(&base_url), reference);
    }

    match base_url.join(reference) {
        Ok(resolved) => resolved.to_string(),
        Err(e) => {
            tracing::warn!("Failed to resolve {:?} against {}: {}", reference, base, e);
            reference.to_string()
        }
    }
}

fn authority(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    }
}
