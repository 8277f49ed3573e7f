use std::fmt::{Display, Formatter};

use itertools::Itertools;

const REST_ROOT: &str = "rest";

/// Path of a resource on the DBMS REST API, kept as raw (unencoded) segments.
/// The HTTP client percent-encodes each segment when building the final URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    segments: Vec<String>,
}

impl ResourcePath {
    fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: std::iter::once(REST_ROOT.to_string())
                .chain(segments.into_iter().map(Into::into))
                .collect(),
        }
    }

    // GET /rest/database
    pub fn databases() -> Self {
        Self::from_segments(["database"])
    }

    // GET|POST|DELETE /rest/database/{name}
    pub fn database(database: &str) -> Self {
        Self::from_segments(["database", database])
    }

    // GET /rest/database/{name}/table
    pub fn tables(database: &str) -> Self {
        Self::from_segments(["database", database, "table"])
    }

    // GET|POST|DELETE /rest/database/{name}/table/{table}
    pub fn table(database: &str, table: &str) -> Self {
        Self::from_segments(["database", database, "table", table])
    }

    // GET|POST|PUT|DELETE /rest/database/{name}/table/{table}/row
    pub fn rows(database: &str, table: &str) -> Self {
        Self::from_segments(["database", database, "table", table, "row"])
    }

    // POST /rest/save
    pub fn save() -> Self {
        Self::from_segments(["save"])
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl Display for ResourcePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}", self.segments.iter().join("/"))
    }
}
