//! Listing and search queries for the movie collection.

/// Movie field the API can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    /// Match on the movie title.
    Title,
    /// Match on the rating label (for example `PG-13`).
    Rated,
}

impl SearchField {
    /// Returns the query parameter name the API expects for this field.
    #[must_use]
    pub const fn as_param(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Rated => "rated",
        }
    }
}

/// A single page request against the movie collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieQuery {
    /// Unfiltered listing.
    All {
        /// Zero-based page number.
        page: u32,
    },
    /// Listing filtered by one field.
    ByField {
        /// Field to filter on.
        field: SearchField,
        /// Literal value sent to the server.
        value: String,
        /// Zero-based page number.
        page: u32,
    },
}

impl MovieQuery {
    /// Creates an unfiltered listing query.
    #[must_use]
    pub const fn all(page: u32) -> Self {
        Self::All { page }
    }

    /// Creates a query filtered by `field`.
    #[must_use]
    pub fn by_field(field: SearchField, value: impl Into<String>, page: u32) -> Self {
        Self::ByField {
            field,
            value: value.into(),
            page,
        }
    }

    /// Returns the requested page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        match self {
            Self::All { page } | Self::ByField { page, .. } => *page,
        }
    }

    /// Returns the filter applied by this query, if any.
    #[must_use]
    pub fn filter(&self) -> Option<(SearchField, &str)> {
        match self {
            Self::All { .. } => None,
            Self::ByField { field, value, .. } => Some((*field, value.as_str())),
        }
    }

    /// Returns the query parameters in the order the API documents them.
    ///
    /// The filter parameter, when present, precedes `page`.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some((field, value)) = self.filter() {
            pairs.push((field.as_param(), value.to_owned()));
        }
        pairs.push(("page", self.page().to_string()));
        pairs
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{MovieQuery, SearchField};

    #[rstest]
    fn unfiltered_query_has_only_page() {
        assert_eq!(
            MovieQuery::all(7).query_pairs(),
            vec![("page", "7".to_owned())]
        );
    }

    #[rstest]
    #[case::title(SearchField::Title, "title")]
    #[case::rated(SearchField::Rated, "rated")]
    fn filtered_query_leads_with_field(#[case] field: SearchField, #[case] param: &str) {
        let query = MovieQuery::by_field(field, "value", 2);

        assert_eq!(
            query.query_pairs(),
            vec![(param, "value".to_owned()), ("page", "2".to_owned())]
        );
        assert_eq!(query.page(), 2);
    }

    #[rstest]
    fn empty_filter_value_is_sent_literally() {
        let query = MovieQuery::by_field(SearchField::Title, "", 0);

        assert_eq!(query.filter(), Some((SearchField::Title, "")));
    }
}
