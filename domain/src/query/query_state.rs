//! Query-string reconciliation for toolbar interactions.
//!
//! A toolbar interaction changes exactly one query parameter. Everything
//! else in the widget's base URL is carried over verbatim, in order. A
//! parameter set back to its default is dropped so the URL never carries a
//! redundant default.
//!
//! # Example
//!
//! ```
//! use toolbar_domain::query::BaseUrl;
//!
//! let base = BaseUrl::parse("/catalog?color=red&product_list_order=price");
//! let reconciled = base.reconcile("product_list_order", "position", "position");
//! assert_eq!(reconciled.query(), "color=red");
//! assert_eq!(reconciled.url(), "/catalog?color=red");
//! ```

/// Marker parameter appended to asynchronous refresh requests.
pub const ASYNC_MARKER_PARAM: &str = "ajax";
pub const ASYNC_MARKER_VALUE: &str = "1";

/// Ordered name → value pairs parsed from a query string.
///
/// Each name appears at most once. A later duplicate overwrites the value
/// but keeps the position of the first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pairs: Vec<(String, String)>,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string (without the leading `?`).
    ///
    /// Values stay exactly as they appear in the URL; nothing is decoded.
    /// A segment without `=` has an empty value, empty segments are skipped.
    pub fn parse(query: &str) -> Self {
        let mut state = Self::new();
        for segment in query.split('&').filter(|s| !s.is_empty()) {
            let (name, value) = segment.split_once('=').unwrap_or((segment, ""));
            state.set(name, value);
        }
        state
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Update in place when present, append otherwise.
    pub fn set(&mut self, name: &str, value: &str) {
        match self.pairs.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.pairs.push((name.to_string(), value.to_string())),
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.pairs.iter().position(|(n, _)| n == name)?;
        Some(self.pairs.remove(index).1)
    }

    /// Apply one control change.
    ///
    /// The candidate value is encoded for the query string first; a value
    /// equal to `default_value` removes the parameter instead.
    pub fn reconcile(&mut self, name: &str, candidate: &str, default_value: &str) {
        if candidate == default_value {
            self.remove(name);
        } else {
            self.set(name, &encode_value(candidate));
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(n, _)| n.as_str())
    }

    /// Serialize back to `name=value&…`.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(n, v)| format!("{}={}", n, v))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Percent-encode only the characters that would change the structure of a
/// query string. Spaces stay literal so URLs remain readable.
fn encode_value(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '%' => encoded.push_str("%25"),
            '&' => encoded.push_str("%26"),
            '=' => encoded.push_str("%3D"),
            '#' => encoded.push_str("%23"),
            '+' => encoded.push_str("%2B"),
            _ => encoded.push(c),
        }
    }
    encoded
}

/// The widget's base URL split into path and query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl {
    path: String,
    query: String,
}

impl BaseUrl {
    /// Split at the first `?`. Any fragment is dropped.
    pub fn parse(url: &str) -> Self {
        let url = url.split_once('#').map(|(u, _)| u).unwrap_or(url);
        match url.split_once('?') {
            Some((path, query)) => Self {
                path: path.to_string(),
                query: query.to_string(),
            },
            None => Self {
                path: url.to_string(),
                query: String::new(),
            },
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Fresh query state for one interaction; never cached.
    pub fn query_state(&self) -> QueryState {
        QueryState::parse(&self.query)
    }

    pub fn reconcile(&self, name: &str, candidate: &str, default_value: &str) -> ReconciledUrl {
        let mut state = self.query_state();
        state.reconcile(name, candidate, default_value);
        ReconciledUrl {
            path: self.path.clone(),
            query: state.to_query_string(),
        }
    }
}

/// Result of reconciling one control change against the base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciledUrl {
    path: String,
    query: String,
}

impl ReconciledUrl {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Address-bar / navigation form: `path`, plus `?query` when non-empty.
    pub fn url(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query)
        }
    }

    /// Query for the asynchronous request, with the marker appended.
    pub fn async_query(&self) -> String {
        let marker = format!("{}={}", ASYNC_MARKER_PARAM, ASYNC_MARKER_VALUE);
        if self.query.is_empty() {
            marker
        } else {
            format!("{}&{}", self.query, marker)
        }
    }

    pub fn async_url(&self) -> String {
        format!("{}?{}", self.path, self.async_query())
    }
}
