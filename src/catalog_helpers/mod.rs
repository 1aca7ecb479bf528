//! Queries over the fixture catalog. Every page view is a linear filter or
//! sort over a handful of in-memory records.

mod chapter_helpers;
mod community_helpers;
mod library_helpers;
mod novel_helpers;
mod ranking_helpers;
mod search_helpers;

pub use chapter_helpers::*;
pub use community_helpers::*;
pub use library_helpers::*;
pub use novel_helpers::*;
pub use ranking_helpers::*;
pub use search_helpers::*;

use std::str::FromStr;

/// Parses a selector from a query string, falling back to the page default
/// for missing or unrecognized values.
pub fn selection_or_default<T>(raw: Option<&str>) -> T
where
    T: FromStr + Default,
{
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or_default()
}

/// Comma separated facet list; blanks are dropped.
pub fn parse_facets(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|facet| !facet.is_empty())
            .map(str::to_owned)
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_selections_use_the_default() {
        let tab: RankingTab = selection_or_default(Some("bogus"));
        assert_eq!(tab, RankingTab::Popular);
        let tab: RankingTab = selection_or_default(Some("completed"));
        assert_eq!(tab, RankingTab::Completed);
        let filter: SearchFilter = selection_or_default(None);
        assert_eq!(filter, SearchFilter::All);
    }

    #[test]
    fn facets_split_on_commas() {
        assert_eq!(
            parse_facets(Some("Fantasy, Romance,,")),
            vec!["Fantasy".to_owned(), "Romance".to_owned()]
        );
        assert!(parse_facets(None).is_empty());
    }
}
