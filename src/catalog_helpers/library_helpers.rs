use std::str::FromStr;

use crate::errors::RequestError;
use crate::fixtures::Catalog;
use crate::models::{Chapter, Novel, ReadingList};

use super::find_novels_by_ids;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LibraryTab {
    #[default]
    Reading,
    Favorites,
    Bookmarks,
    Lists,
}

impl LibraryTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            LibraryTab::Reading => "reading",
            LibraryTab::Favorites => "favorites",
            LibraryTab::Bookmarks => "bookmarks",
            LibraryTab::Lists => "lists",
        }
    }
}

impl FromStr for LibraryTab {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reading" => Ok(LibraryTab::Reading),
            "favorites" => Ok(LibraryTab::Favorites),
            "bookmarks" => Ok(LibraryTab::Bookmarks),
            "lists" => Ok(LibraryTab::Lists),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibraryCounts {
    pub reading: usize,
    pub favorites: usize,
    pub bookmarks: usize,
    pub lists: usize,
}

pub fn library_counts(catalog: &Catalog) -> LibraryCounts {
    let library = &catalog.library;
    LibraryCounts {
        reading: library.reading_now.len(),
        favorites: library.favorites.len(),
        bookmarks: library.bookmarks.len(),
        lists: library.custom_lists.len(),
    }
}

pub fn reading_now(catalog: &Catalog) -> Vec<Novel> {
    find_novels_by_ids(catalog, &catalog.library.reading_now)
}

pub fn favorites(catalog: &Catalog) -> Vec<Novel> {
    find_novels_by_ids(catalog, &catalog.library.favorites)
}

pub fn bookmarks(catalog: &Catalog) -> Vec<Chapter> {
    catalog
        .library
        .bookmarks
        .iter()
        .filter_map(|id| catalog.chapters.iter().find(|chapter| &chapter.id == id))
        .cloned()
        .collect()
}

/// A reading list with its novel ids swapped for the novels. Ids that do not
/// resolve are skipped.
pub fn resolve_list(catalog: &Catalog, list: &ReadingList) -> (ReadingList, Vec<Novel>) {
    (list.clone(), find_novels_by_ids(catalog, &list.novel_ids))
}

/// Checks a new list name. The library itself is never changed.
pub fn validate_list_name(name: &str) -> Result<String, RequestError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(RequestError::RunTimeError("List name can't be blank"));
    }
    Ok(name.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_the_demo_library() {
        let counts = library_counts(&Catalog::load());
        assert_eq!(
            counts,
            LibraryCounts {
                reading: 2,
                favorites: 2,
                bookmarks: 1,
                lists: 2
            }
        );
    }

    #[test]
    fn favorites_resolve_across_featured_and_trending() {
        let titles: Vec<_> = favorites(&Catalog::load()).into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["The Chronicles of Mystic Realms", "The Last Bookkeeper"]);
    }

    #[test]
    fn unresolvable_list_entries_are_skipped() {
        let catalog = Catalog::load();
        let list = ReadingList {
            id: "list9".to_owned(),
            name: "Ghosts".to_owned(),
            novel_ids: vec!["2".to_owned(), "404".to_owned()],
            is_public: false,
        };
        let (_, novels) = resolve_list(&catalog, &list);
        assert_eq!(novels.len(), 1);
    }

    #[test]
    fn list_names_are_trimmed_and_required() {
        assert_eq!(validate_list_name("  Cozy Reads ").unwrap(), "Cozy Reads");
        assert!(validate_list_name("   ").is_err());
    }
}
