use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NovelStatus {
    #[default]
    Ongoing,
    Completed,
    Hiatus,
}

impl NovelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NovelStatus::Ongoing => "ongoing",
            NovelStatus::Completed => "completed",
            NovelStatus::Hiatus => "hiatus",
        }
    }
}

impl fmt::Display for NovelStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NovelStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ongoing" => Ok(NovelStatus::Ongoing),
            "completed" => Ok(NovelStatus::Completed),
            "hiatus" => Ok(NovelStatus::Hiatus),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Novel {
    pub id: String,
    pub title: String,
    pub author: String,
    pub author_id: String,
    pub cover: String,
    pub genre: Vec<String>,
    pub status: NovelStatus,
    pub rating: f64,
    pub total_reads: u64,
    pub total_chapters: u32,
    pub description: String,
    pub tags: Vec<String>,
    pub last_updated: NaiveDate,
    pub is_bookmarked: bool,
    pub is_in_library: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chapter {
    pub id: String,
    pub novel_id: String,
    pub title: String,
    pub content: String,
    pub chapter_number: u32,
    pub published_at: DateTime<Utc>,
    pub is_read: bool,
    pub is_bookmarked: bool,
}

/// Threaded discussion entry. Replies keep the order they were posted in.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub user_avatar: String,
    pub content: String,
    pub timestamp: String,
    pub likes: u32,
    pub replies: Vec<Comment>,
}

/// Reader comment pinned to a paragraph of a chapter.
#[derive(Debug, Clone, PartialEq)]
pub struct ChapterComment {
    pub id: u32,
    pub user: String,
    pub avatar: String,
    pub content: String,
    pub timestamp: String,
    pub likes: u32,
    pub paragraph: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommunityPost {
    pub id: String,
    pub title: String,
    pub author: String,
    pub content: String,
    pub likes: u32,
    pub replies: u32,
    pub timestamp: String,
    pub tags: Vec<String>,
    pub is_pinned: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: u32,
    pub name: String,
    pub novels: u32,
    pub followers: u64,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadingList {
    pub id: String,
    pub name: String,
    pub novel_ids: Vec<String>,
    pub is_public: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Library {
    pub reading_now: Vec<String>,
    pub favorites: Vec<String>,
    pub bookmarks: Vec<String>,
    pub custom_lists: Vec<ReadingList>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub xp: u32,
    pub level: u32,
    pub is_author: bool,
    pub badges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenreSummary {
    pub name: String,
    pub novels: u32,
}
