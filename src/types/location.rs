use std::fmt;

/// Where a document library lives: the owning site's base URL and the
/// library's server-relative path.
///
/// Built only by the URL resolver, so `library_path` always extends the
/// path of `site_url` by exactly one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation {
    site_url: String,
    library_path: String,
}

impl ResolvedLocation {
    pub(crate) fn new(site_url: String, library_path: String) -> Self {
        Self {
            site_url,
            library_path,
        }
    }

    /// Absolute URL of the owning site, without a trailing slash.
    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    /// Server-relative path of the library, e.g. `/sites/A/B/Docs`.
    pub fn library_path(&self) -> &str {
        &self.library_path
    }

    /// The library's internal (URL) name.
    pub fn library_name(&self) -> &str {
        self.library_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.library_path)
    }
}

impl fmt::Display for ResolvedLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Site URL: {} | Library: {}", self.site_url, self.library_path)
    }
}
