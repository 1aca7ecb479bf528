use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::catalog_helpers::{rank_badge, ExploreSort, LibraryCounts};
use crate::draft_helpers::{DraftStats, NovelDraft};
use crate::models::{
    Author, Chapter, ChapterComment, Comment, CommunityPost, GenreSummary, Novel, ReadingList,
    User,
};
use crate::theme::DisplayMode;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct NovelResponse {
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(rename = "authorId")]
    pub author_id: String,
    pub cover: String,
    pub genre: Vec<String>,
    pub status: String,
    pub rating: f64,
    #[serde(rename = "totalReads")]
    pub total_reads: u64,
    #[serde(rename = "totalChapters")]
    pub total_chapters: u32,
    pub description: String,
    pub tags: Vec<String>,
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
    #[serde(rename = "isBookmarked")]
    pub is_bookmarked: bool,
    #[serde(rename = "isInLibrary")]
    pub is_in_library: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RankedNovelResponse {
    pub rank: usize,
    pub badge: String,
    #[serde(flatten)]
    pub novel: NovelResponse,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ChapterResponse {
    pub id: String,
    #[serde(rename = "novelId")]
    pub novel_id: String,
    pub title: String,
    pub content: String,
    #[serde(rename = "chapterNumber")]
    pub chapter_number: u32,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    #[serde(rename = "isRead")]
    pub is_read: bool,
    #[serde(rename = "isBookmarked")]
    pub is_bookmarked: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CommentResponse {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    #[serde(rename = "userAvatar")]
    pub user_avatar: String,
    pub content: String,
    pub timestamp: String,
    pub likes: u32,
    pub replies: Vec<CommentResponse>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ChapterCommentResponse {
    pub id: u32,
    pub user: String,
    pub avatar: String,
    pub content: String,
    pub timestamp: String,
    pub likes: u32,
    pub paragraph: usize,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub author: String,
    pub content: String,
    pub likes: u32,
    pub replies: u32,
    pub timestamp: String,
    pub tags: Vec<String>,
    #[serde(rename = "isPinned")]
    pub is_pinned: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct AuthorResponse {
    pub id: u32,
    pub name: String,
    pub novels: u32,
    pub followers: u64,
    pub avatar: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub xp: u32,
    pub level: u32,
    #[serde(rename = "isAuthor")]
    pub is_author: bool,
    pub badges: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GenreResponse {
    pub name: String,
    pub novels: u32,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SortOptionResponse {
    pub value: String,
    pub label: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ReadingListResponse {
    pub id: String,
    pub name: String,
    #[serde(rename = "isPublic")]
    pub is_public: bool,
    pub novels: Vec<NovelResponse>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct LibraryCountsResponse {
    pub reading: usize,
    pub favorites: usize,
    pub bookmarks: usize,
    pub lists: usize,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PaletteResponse {
    pub background: String,
    pub text: String,
    #[serde(rename = "rootClass")]
    pub root_class: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ThemeResponse {
    pub theme: String,
    pub palette: PaletteResponse,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ReaderStyleResponse {
    pub background: String,
    pub text: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct DraftStatsResponse {
    pub title: String,
    #[serde(rename = "wordCount")]
    pub word_count: usize,
    #[serde(rename = "estimatedReadMinutes")]
    pub estimated_read_minutes: usize,
    pub paragraphs: usize,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct NovelDraftResponse {
    pub title: String,
    pub description: String,
    pub genre: Vec<String>,
    pub tags: Vec<String>,
    pub status: String,
    pub mature: bool,
    pub language: String,
    #[serde(rename = "availableGenres")]
    pub available_genres: Vec<String>,
}

impl NovelResponse {
    pub fn new(
        Novel {
            id,
            title,
            author,
            author_id,
            cover,
            genre,
            status,
            rating,
            total_reads,
            total_chapters,
            description,
            tags,
            last_updated,
            is_bookmarked,
            is_in_library,
        }: Novel,
    ) -> Self {
        NovelResponse {
            id,
            title,
            author,
            author_id,
            cover,
            genre,
            status: status.to_string(),
            rating,
            total_reads,
            total_chapters,
            description,
            tags,
            last_updated: last_updated.to_string(),
            is_bookmarked,
            is_in_library,
        }
    }

    pub fn many(novels: Vec<Novel>) -> Vec<Self> {
        novels.into_iter().map(NovelResponse::new).collect()
    }
}

impl RankedNovelResponse {
    /// Ranks start at 1.
    pub fn ranked(novels: Vec<Novel>) -> Vec<Self> {
        novels
            .into_iter()
            .enumerate()
            .map(|(index, novel)| RankedNovelResponse {
                rank: index + 1,
                badge: rank_badge(index + 1).to_owned(),
                novel: NovelResponse::new(novel),
            })
            .collect()
    }
}

impl ChapterResponse {
    pub fn new(
        Chapter {
            id,
            novel_id,
            title,
            content,
            chapter_number,
            published_at,
            is_read,
            is_bookmarked,
        }: Chapter,
    ) -> Self {
        ChapterResponse {
            id,
            novel_id,
            title,
            content,
            chapter_number,
            published_at: published_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            is_read,
            is_bookmarked,
        }
    }
}

impl CommentResponse {
    pub fn new(
        Comment {
            id,
            user_id,
            user_name,
            user_avatar,
            content,
            timestamp,
            likes,
            replies,
        }: Comment,
    ) -> Self {
        CommentResponse {
            id,
            user_id,
            user_name,
            user_avatar,
            content,
            timestamp,
            likes,
            replies: replies.into_iter().map(CommentResponse::new).collect(),
        }
    }
}

impl From<ChapterComment> for ChapterCommentResponse {
    fn from(comment: ChapterComment) -> Self {
        ChapterCommentResponse {
            id: comment.id,
            user: comment.user,
            avatar: comment.avatar,
            content: comment.content,
            timestamp: comment.timestamp,
            likes: comment.likes,
            paragraph: comment.paragraph,
        }
    }
}

impl From<CommunityPost> for PostResponse {
    fn from(post: CommunityPost) -> Self {
        PostResponse {
            id: post.id,
            title: post.title,
            author: post.author,
            content: post.content,
            likes: post.likes,
            replies: post.replies,
            timestamp: post.timestamp,
            tags: post.tags,
            is_pinned: post.is_pinned,
        }
    }
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        AuthorResponse {
            id: author.id,
            name: author.name,
            novels: author.novels,
            followers: author.followers,
            avatar: author.avatar,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            name: user.name,
            email: user.email,
            avatar: user.avatar,
            xp: user.xp,
            level: user.level,
            is_author: user.is_author,
            badges: user.badges,
        }
    }
}

impl From<GenreSummary> for GenreResponse {
    fn from(genre: GenreSummary) -> Self {
        GenreResponse {
            name: genre.name,
            novels: genre.novels,
        }
    }
}

impl From<ExploreSort> for SortOptionResponse {
    fn from(sort: ExploreSort) -> Self {
        SortOptionResponse {
            value: sort.as_str().to_owned(),
            label: sort.label().to_owned(),
        }
    }
}

impl From<LibraryCounts> for LibraryCountsResponse {
    fn from(counts: LibraryCounts) -> Self {
        LibraryCountsResponse {
            reading: counts.reading,
            favorites: counts.favorites,
            bookmarks: counts.bookmarks,
            lists: counts.lists,
        }
    }
}

impl ReadingListResponse {
    pub fn new(list: ReadingList, novels: Vec<Novel>) -> Self {
        ReadingListResponse {
            id: list.id,
            name: list.name,
            is_public: list.is_public,
            novels: NovelResponse::many(novels),
        }
    }
}

impl From<DisplayMode> for ThemeResponse {
    fn from(mode: DisplayMode) -> Self {
        let palette = mode.palette();
        ThemeResponse {
            theme: mode.to_string(),
            palette: PaletteResponse {
                background: palette.background.to_owned(),
                text: palette.text.to_owned(),
                root_class: palette.root_class.map(str::to_owned),
            },
        }
    }
}

impl DraftStatsResponse {
    pub fn new(title: String, stats: DraftStats) -> Self {
        DraftStatsResponse {
            title,
            word_count: stats.word_count,
            estimated_read_minutes: stats.estimated_read_minutes,
            paragraphs: stats.paragraphs,
        }
    }
}

impl NovelDraftResponse {
    pub fn new(draft: NovelDraft, available_genres: Vec<String>) -> Self {
        NovelDraftResponse {
            title: draft.title,
            description: draft.description,
            genre: draft.genre,
            tags: draft.tags,
            status: draft.status.to_string(),
            mature: draft.mature,
            language: draft.language,
            available_genres,
        }
    }
}

pub fn into_responses<T, R: From<T>>(items: Vec<T>) -> Vec<R> {
    items.into_iter().map(R::from).collect()
}
