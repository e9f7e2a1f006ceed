//! Traits tying parameter structs to their endpoints.

use serde::Serialize;

use crate::rest::errors::FetchError;
use crate::rest::filter::FilterSet;

/// A cursor-paginated list endpoint and its parameters.
///
/// Implementors serialize only their filter and output-shaping fields; the
/// starting cursor is exposed through [`page_info`](Self::page_info) and
/// injected by [`FilterSet::assemble`].
pub trait ListQuery: Serialize + Sync {
    /// The body key holding the page's item array.
    const ITEMS_KEY: &'static str;

    /// The endpoint path, relative to the Admin API base path.
    fn path(&self) -> String;

    /// The caller-supplied starting cursor, if resuming a traversal.
    fn page_info(&self) -> Option<&str>;

    /// Builds the query for one page.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidParams`] if the parameters cannot be
    /// flattened.
    fn filter_set(&self, cursor: Option<&str>) -> Result<FilterSet, FetchError> {
        FilterSet::assemble(self, cursor)
    }
}

/// A count endpoint. Counts never accept a cursor.
pub trait CountQuery: Serialize + Sync {
    /// The endpoint path, relative to the Admin API base path.
    fn path(&self) -> String;

    /// Builds the query.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidParams`] if the parameters cannot be
    /// flattened.
    fn filter_set(&self) -> Result<FilterSet, FetchError> {
        FilterSet::from_params(self)
    }
}
