use std::collections::HashMap;

/// Request header sets used when talking to the streaming site.
pub struct SiteHeaders;

impl SiteHeaders {
    /// Headers for the site's own pages: `Referer: {site}/`, `Origin: {site}`.
    pub fn site(site_url: &str) -> HashMap<String, String> {
        HashMap::from([
            ("Referer".to_string(), format!("{}/", site_url)),
            ("Origin".to_string(), site_url.to_string()),
        ])
    }

    /// Inertia headers that make the site answer with the embed payload.
    pub fn inertia(version: &str) -> HashMap<String, String> {
        HashMap::from([
            ("x-inertia".to_string(), "true".to_string()),
            ("x-inertia-version".to_string(), version.to_string()),
        ])
    }

    pub fn referer(url: &str) -> HashMap<String, String> {
        HashMap::from([("Referer".to_string(), url.to_string())])
    }

    /// Headers for nested playlists, which the origin only serves to its own player.
    pub fn playlist(origin: &str, user_agent: &str) -> HashMap<String, String> {
        HashMap::from([
            ("User-Agent".to_string(), user_agent.to_string()),
            ("Referer".to_string(), origin.to_string()),
            ("Origin".to_string(), origin.to_string()),
        ])
    }
}
