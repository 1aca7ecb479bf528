use std::str::FromStr;

use crate::fixtures::Catalog;
use crate::models::{Comment, CommunityPost};

/// Community page tabs. Only echoed back: every tab lists the same feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommunityTab {
    #[default]
    All,
    Discussions,
    Reviews,
    Trending,
}

impl CommunityTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommunityTab::All => "all",
            CommunityTab::Discussions => "discussions",
            CommunityTab::Reviews => "reviews",
            CommunityTab::Trending => "trending",
        }
    }
}

impl FromStr for CommunityTab {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CommunityTab::All),
            "discussions" => Ok(CommunityTab::Discussions),
            "reviews" => Ok(CommunityTab::Reviews),
            "trending" => Ok(CommunityTab::Trending),
            _ => Err(()),
        }
    }
}

/// The community feed: shared posts, then the pinned community-only ones.
pub fn community_feed(catalog: &Catalog) -> Vec<CommunityPost> {
    catalog.all_community_posts()
}

/// Posts whose tags name the novel.
pub fn posts_for_novel(catalog: &Catalog, title: &str) -> Vec<CommunityPost> {
    catalog
        .community_posts
        .iter()
        .filter(|post| post.tags.iter().any(|tag| tag == title))
        .cloned()
        .collect()
}

/// Every comment in the thread, replies included.
pub fn count_comments(comments: &[Comment]) -> usize {
    comments
        .iter()
        .map(|comment| 1 + count_comments(&comment.replies))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(posts: &[CommunityPost]) -> Vec<&str> {
        posts.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn feed_keeps_catalog_order() {
        let posts = community_feed(&Catalog::load());
        assert_eq!(ids(&posts), vec!["post1", "post2", "post3", "post4"]);
        assert!(posts[2].is_pinned && posts[3].is_pinned);
    }

    #[test]
    fn unknown_tab_does_not_parse() {
        assert_eq!("reviews".parse(), Ok(CommunityTab::Reviews));
        assert!("popular".parse::<CommunityTab>().is_err());
    }

    #[test]
    fn related_posts_match_the_exact_title() {
        let catalog = Catalog::load();
        assert_eq!(ids(&posts_for_novel(&catalog, "Digital Hearts")), vec!["post2"]);
        assert!(posts_for_novel(&catalog, "Neon Shadows").is_empty());
    }

    #[test]
    fn nested_replies_are_counted() {
        assert_eq!(count_comments(&Catalog::load().novel_comments), 3);
    }
}
