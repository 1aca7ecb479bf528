use std::str::FromStr;

use crate::fixtures::Catalog;
use crate::models::Novel;

/// Sort orders offered on the explore page. The selection is echoed back
/// with the results; results keep catalog order whichever one is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExploreSort {
    #[default]
    Popularity,
    Rating,
    Newest,
    Updated,
    Chapters,
}

impl ExploreSort {
    pub const ALL: [ExploreSort; 5] = [
        ExploreSort::Popularity,
        ExploreSort::Rating,
        ExploreSort::Newest,
        ExploreSort::Updated,
        ExploreSort::Chapters,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExploreSort::Popularity => "popularity",
            ExploreSort::Rating => "rating",
            ExploreSort::Newest => "newest",
            ExploreSort::Updated => "updated",
            ExploreSort::Chapters => "chapters",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExploreSort::Popularity => "Most Popular",
            ExploreSort::Rating => "Highest Rated",
            ExploreSort::Newest => "Newest",
            ExploreSort::Updated => "Recently Updated",
            ExploreSort::Chapters => "Most Chapters",
        }
    }
}

impl FromStr for ExploreSort {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExploreSort::ALL
            .into_iter()
            .find(|sort| sort.as_str() == s)
            .ok_or(())
    }
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Explore page filter: text match on title, author or description, then a
/// genre facet check. Facets are OR-ed; no facets means no genre constraint.
pub fn filter_novels(novels: &[Novel], query: &str, facets: &[String]) -> Vec<Novel> {
    let term = query.to_lowercase();
    novels
        .iter()
        .filter(|novel| {
            let matches_search = contains_ignore_case(&novel.title, &term)
                || contains_ignore_case(&novel.author, &term)
                || contains_ignore_case(&novel.description, &term);
            let matches_genre =
                facets.is_empty() || facets.iter().any(|facet| novel.genre.contains(facet));
            matches_search && matches_genre
        })
        .cloned()
        .collect()
}

/// Search page matching. Wider than [`filter_novels`]: genres and tags count,
/// and a blank term finds nothing.
pub fn search_novels(novels: &[Novel], term: &str) -> Vec<Novel> {
    if term.trim().is_empty() {
        return Vec::new();
    }
    let term = term.to_lowercase();
    novels
        .iter()
        .filter(|novel| {
            contains_ignore_case(&novel.title, &term)
                || contains_ignore_case(&novel.author, &term)
                || contains_ignore_case(&novel.description, &term)
                || novel.genre.iter().any(|g| contains_ignore_case(g, &term))
                || novel.tags.iter().any(|t| contains_ignore_case(t, &term))
        })
        .cloned()
        .collect()
}

/// Adds `facet` when absent, removes it when present.
pub fn toggle_facet(selected: &mut Vec<String>, facet: &str) {
    match selected.iter().position(|s| s == facet) {
        Some(index) => {
            selected.remove(index);
        }
        None => selected.push(facet.to_owned()),
    }
}

/// Looks a novel up by id. Unknown ids silently get the first featured novel.
pub fn find_novel_or_default(catalog: &Catalog, id: &str) -> Option<Novel> {
    catalog
        .all_novels()
        .into_iter()
        .find(|novel| novel.id == id)
        .or_else(|| catalog.featured.first().cloned())
}

pub fn find_novels_by_ids(catalog: &Catalog, ids: &[String]) -> Vec<Novel> {
    let novels = catalog.all_novels();
    ids.iter()
        .filter_map(|id| novels.iter().find(|novel| &novel.id == id).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(novels: &[Novel]) -> Vec<&str> {
        novels.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn query_matching_nothing_is_empty() {
        let novels = Catalog::load().all_novels();
        assert!(filter_novels(&novels, "zzzz-no-such-novel", &[]).is_empty());
        assert!(search_novels(&novels, "zzzz-no-such-novel").is_empty());
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let novels = Catalog::load().all_novels();
        assert_eq!(filter_novels(&novels, "", &[]), novels);
    }

    #[test]
    fn query_is_case_insensitive_across_fields() {
        let novels = Catalog::load().all_novels();
        assert_eq!(ids(&filter_novels(&novels, "DIGITAL", &[])), vec!["2"]);
        assert_eq!(ids(&filter_novels(&novels, "kai naka", &[])), vec!["4"]);
        assert_eq!(ids(&filter_novels(&novels, "ley lines", &[])), vec!["1"]);
    }

    #[test]
    fn facets_are_or_combined() {
        let novels = Catalog::load().all_novels();
        let facets = vec!["Romance".to_owned(), "Cyberpunk".to_owned()];
        assert_eq!(ids(&filter_novels(&novels, "", &facets)), vec!["2", "4"]);

        let fantasy = vec!["Fantasy".to_owned()];
        assert_eq!(ids(&filter_novels(&novels, "", &fantasy)), vec!["1", "5"]);
    }

    #[test]
    fn clearing_facets_restores_the_full_list() {
        let novels = Catalog::load().all_novels();
        let mut selected = Vec::new();
        toggle_facet(&mut selected, "Fantasy");
        toggle_facet(&mut selected, "Mystery");
        assert_eq!(filter_novels(&novels, "", &selected).len(), 3);

        toggle_facet(&mut selected, "Fantasy");
        toggle_facet(&mut selected, "Mystery");
        assert!(selected.is_empty());
        assert_eq!(filter_novels(&novels, "", &selected).len(), novels.len());
    }

    #[test]
    fn search_also_matches_genres_and_tags() {
        let novels = Catalog::load().all_novels();
        assert_eq!(ids(&search_novels(&novels, "archaeology")), vec!["3"]);
        assert_eq!(ids(&search_novels(&novels, "thriller")), vec!["3", "4"]);
        assert!(search_novels(&novels, "   ").is_empty());
    }

    #[test]
    fn unknown_novel_falls_back_to_first_featured() {
        let catalog = Catalog::load();
        let novel = find_novel_or_default(&catalog, "does-not-exist").unwrap();
        assert_eq!(novel.id, "1");
        assert_eq!(find_novel_or_default(&catalog, "4").unwrap().id, "4");
    }

    #[test]
    fn unknown_sort_values_do_not_parse() {
        assert_eq!("chapters".parse(), Ok(ExploreSort::Chapters));
        assert!("alphabetical".parse::<ExploreSort>().is_err());
    }
}
