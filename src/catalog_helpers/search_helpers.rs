use std::str::FromStr;

use crate::fixtures::Catalog;
use crate::models::{Author, CommunityPost, Novel};

use super::search_novels;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchFilter {
    #[default]
    All,
    Novels,
    Authors,
    Posts,
}

impl SearchFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchFilter::All => "all",
            SearchFilter::Novels => "novels",
            SearchFilter::Authors => "authors",
            SearchFilter::Posts => "posts",
        }
    }
}

impl FromStr for SearchFilter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(SearchFilter::All),
            "novels" => Ok(SearchFilter::Novels),
            "authors" => Ok(SearchFilter::Authors),
            "posts" => Ok(SearchFilter::Posts),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub novels: Vec<Novel>,
    pub authors: Vec<Author>,
    pub posts: Vec<CommunityPost>,
}

impl SearchResults {
    pub fn total(&self) -> usize {
        self.novels.len() + self.authors.len() + self.posts.len()
    }

    /// Drops the groups the filter hides. Counts are taken before this.
    pub fn narrow(mut self, filter: SearchFilter) -> Self {
        match filter {
            SearchFilter::All => {}
            SearchFilter::Novels => {
                self.authors.clear();
                self.posts.clear();
            }
            SearchFilter::Authors => {
                self.novels.clear();
                self.posts.clear();
            }
            SearchFilter::Posts => {
                self.novels.clear();
                self.authors.clear();
            }
        }
        self
    }
}

pub fn search_all(catalog: &Catalog, term: &str) -> SearchResults {
    if term.trim().is_empty() {
        return SearchResults::default();
    }
    let needle = term.to_lowercase();
    let matches = |value: &str| value.to_lowercase().contains(&needle);

    let novels = search_novels(&catalog.all_novels(), term);
    let authors = catalog
        .authors
        .iter()
        .filter(|author| matches(author.name.as_str()))
        .cloned()
        .collect();
    let posts = catalog
        .community_posts
        .iter()
        .filter(|post| {
            matches(post.title.as_str())
                || matches(post.content.as_str())
                || matches(post.author.as_str())
                || post.tags.iter().any(|tag| matches(tag.as_str()))
        })
        .cloned()
        .collect();

    SearchResults {
        novels,
        authors,
        posts,
    }
}
