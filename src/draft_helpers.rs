//! Authoring previews. Drafts are measured and normalized, never stored.

use crate::catalog_helpers::{paragraphs, toggle_facet};
use crate::models::NovelStatus;

pub const WORDS_PER_MINUTE: usize = 200;

pub const NOVEL_GENRES: [&str; 16] = [
    "Fantasy",
    "Romance",
    "Sci-Fi",
    "Mystery",
    "Adventure",
    "Historical",
    "Cyberpunk",
    "Thriller",
    "Contemporary",
    "Drama",
    "Horror",
    "Comedy",
    "Action",
    "Slice of Life",
    "Supernatural",
    "Martial Arts",
];

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn estimated_read_minutes(words: usize) -> usize {
    (words + WORDS_PER_MINUTE - 1) / WORDS_PER_MINUTE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftStats {
    pub word_count: usize,
    pub estimated_read_minutes: usize,
    pub paragraphs: usize,
}

impl DraftStats {
    pub fn measure(content: &str) -> Self {
        let words = word_count(content);
        let paragraphs = if content.trim().is_empty() {
            0
        } else {
            paragraphs(content.trim())
                .iter()
                .filter(|p| !p.trim().is_empty())
                .count()
        };
        DraftStats {
            word_count: words,
            estimated_read_minutes: estimated_read_minutes(words),
            paragraphs,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NovelDraft {
    pub title: String,
    pub description: String,
    pub genre: Vec<String>,
    pub tags: Vec<String>,
    pub status: NovelStatus,
    pub mature: bool,
    pub language: String,
}

impl Default for NovelDraft {
    fn default() -> Self {
        NovelDraft {
            title: String::new(),
            description: String::new(),
            genre: Vec::new(),
            tags: Vec::new(),
            status: NovelStatus::Ongoing,
            mature: false,
            language: "English".to_owned(),
        }
    }
}

impl NovelDraft {
    pub fn toggle_genre(&mut self, genre: &str) {
        toggle_facet(&mut self.genre, genre);
    }

    /// Returns false when the tag is blank or already present.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_owned());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_whitespace_delimited_tokens() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t "), 0);
        assert_eq!(word_count("one"), 1);
        assert_eq!(word_count("  one two\n\nthree\tfour  "), 4);
    }

    #[test]
    fn read_time_rounds_up() {
        assert_eq!(estimated_read_minutes(0), 0);
        assert_eq!(estimated_read_minutes(1), 1);
        assert_eq!(estimated_read_minutes(200), 1);
        assert_eq!(estimated_read_minutes(201), 2);
        assert_eq!(estimated_read_minutes(1000), 5);
    }

    #[test]
    fn stats_for_a_two_paragraph_draft() {
        let stats = DraftStats::measure("The mist rose.\n\nAria woke up early.\n");
        assert_eq!(
            stats,
            DraftStats {
                word_count: 7,
                estimated_read_minutes: 1,
                paragraphs: 2
            }
        );
    }

    #[test]
    fn tags_are_trimmed_and_deduplicated() {
        let mut draft = NovelDraft::default();
        assert!(draft.add_tag(" Magic "));
        assert!(!draft.add_tag("Magic"));
        assert!(!draft.add_tag("   "));
        draft.remove_tag("Magic");
        assert!(draft.tags.is_empty());
    }

    #[test]
    fn genres_toggle() {
        let mut draft = NovelDraft::default();
        draft.toggle_genre("Horror");
        draft.toggle_genre("Comedy");
        draft.toggle_genre("Horror");
        assert_eq!(draft.genre, vec!["Comedy".to_owned()]);
    }
}
