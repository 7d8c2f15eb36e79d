use crate::pages::AppRoute;
use url::form_urlencoded;

/// A resolved navigation target, together with its query parameters and fragment.
///
/// The search string and fragment are kept exactly as requested, so `full_path` reproduces the
/// original address. `query` holds the decoded pairs for lookups.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Location {
    pub target: AppRoute,
    query: Vec<(String, String)>,
    search: String,
    hash: String,
}

impl Location {
    pub fn new(target: AppRoute) -> Self {
        Self {
            target,
            ..Default::default()
        }
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let (key, value) = (key.into(), value.into());
        self.search = form_urlencoded::Serializer::new(std::mem::take(&mut self.search))
            .append_pair(&key, &value)
            .finish();
        self.query.push((key, value));
        self
    }

    /// Append the pairs of a `?key=value&...` search string.
    pub fn with_query_string(mut self, search: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);
        if search.is_empty() {
            return self;
        }
        if !self.search.is_empty() {
            self.search.push('&');
        }
        self.search.push_str(search);
        self.query
            .extend(form_urlencoded::parse(search.as_bytes()).into_owned());
        self
    }

    /// Set the fragment, with or without its leading `#`.
    pub fn with_hash(mut self, hash: &str) -> Self {
        self.hash = hash.strip_prefix('#').unwrap_or(hash).to_string();
        self
    }

    pub fn query(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Path, search and fragment, e.g. `/signin?redirect=%2Fdashboard`.
    pub fn full_path(&self) -> String {
        let mut full_path = self.target.path().to_string();
        if !self.search.is_empty() {
            full_path.push('?');
            full_path.push_str(&self.search);
        }
        if !self.hash.is_empty() {
            full_path.push('#');
            full_path.push_str(&self.hash);
        }
        full_path
    }

    /// Parse a full path. Returns `None` if the path is not part of the route table.
    pub fn parse(full_path: &str) -> Option<Self> {
        let (rest, hash) = full_path.split_once('#').unwrap_or((full_path, ""));
        let (path, search) = rest.split_once('?').unwrap_or((rest, ""));
        let target = AppRoute::resolve(path)?;
        Some(
            Self::new(target)
                .with_query_string(search)
                .with_hash(hash),
        )
    }
}

impl From<AppRoute> for Location {
    fn from(target: AppRoute) -> Self {
        Self::new(target)
    }
}
