use serde::{Deserialize, Serialize};

use super::response::{
    AuthorResponse, ChapterCommentResponse, ChapterResponse, CommentResponse, GenreResponse,
    LibraryCountsResponse, NovelResponse, PostResponse, RankedNovelResponse, ReaderStyleResponse,
    ReadingListResponse, SortOptionResponse, UserResponse,
};

#[derive(Debug, Deserialize, Serialize)]
pub struct UserWrapper<T> {
    pub user: T,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ThemeWrapper<T> {
    pub settings: T,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct DraftWrapper<T> {
    pub draft: T,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ListWrapper {
    pub list: ReadingListResponse,
    /// Always false: lists are previewed, never saved.
    pub saved: bool,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct MultipleNovelsWrapper {
    pub novels: Vec<NovelResponse>,
    #[serde(rename = "novelsCount")]
    pub novels_count: usize,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct StatResponse {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct HomeView {
    #[serde(rename = "currentBanner")]
    pub current_banner: usize,
    pub featured: Vec<NovelResponse>,
    pub trending: Vec<NovelResponse>,
    pub genres: Vec<GenreResponse>,
    pub stats: Vec<StatResponse>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ExploreView {
    pub query: String,
    #[serde(rename = "selectedGenres")]
    pub selected_genres: Vec<String>,
    pub genres: Vec<String>,
    pub sort: String,
    #[serde(rename = "sortOptions")]
    pub sort_options: Vec<SortOptionResponse>,
    #[serde(flatten)]
    pub results: MultipleNovelsWrapper,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct NovelDetailView {
    pub novel: NovelResponse,
    pub chapters: Vec<ChapterResponse>,
    #[serde(rename = "relatedPosts")]
    pub related_posts: Vec<PostResponse>,
    pub comments: Vec<CommentResponse>,
    #[serde(rename = "commentsCount")]
    pub comments_count: usize,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ReaderView {
    pub novel: NovelResponse,
    pub chapter: ChapterResponse,
    #[serde(rename = "chapterNumber")]
    pub chapter_number: u32,
    #[serde(rename = "previousChapter")]
    pub previous_chapter: Option<u32>,
    #[serde(rename = "nextChapter")]
    pub next_chapter: Option<u32>,
    pub paragraphs: Vec<String>,
    pub theme: String,
    pub style: ReaderStyleResponse,
    pub comments: Vec<ChapterCommentResponse>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RankingsView {
    pub tab: String,
    #[serde(rename = "timeFrame")]
    pub time_frame: String,
    pub novels: Vec<RankedNovelResponse>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LibraryView {
    pub tab: String,
    pub counts: LibraryCountsResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub novels: Option<Vec<NovelResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookmarks: Option<Vec<ChapterResponse>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lists: Option<Vec<ReadingListResponse>>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CommunityView {
    pub tab: String,
    pub posts: Vec<PostResponse>,
    #[serde(rename = "postsCount")]
    pub posts_count: usize,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SearchView {
    pub query: String,
    pub filter: String,
    pub novels: Vec<NovelResponse>,
    pub authors: Vec<AuthorResponse>,
    pub posts: Vec<PostResponse>,
    pub total: usize,
    #[serde(rename = "trendingSearches")]
    pub trending_searches: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ProfileView {
    #[serde(rename = "signedIn")]
    pub signed_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stats: Vec<StatResponse>,
    #[serde(rename = "readingNow", default, skip_serializing_if = "Vec::is_empty")]
    pub reading_now: Vec<NovelResponse>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct AuthorDashboardView {
    pub author: UserResponse,
    pub novels: Vec<NovelResponse>,
    #[serde(rename = "totalReads")]
    pub total_reads: u64,
    #[serde(rename = "totalChapters")]
    pub total_chapters: u32,
    #[serde(rename = "averageRating")]
    pub average_rating: f64,
}

impl<T> UserWrapper<T> {
    pub fn wrap_with_user_data(request: T) -> UserWrapper<T> {
        UserWrapper { user: request }
    }
}

impl MultipleNovelsWrapper {
    pub fn new(novels: Vec<NovelResponse>) -> Self {
        MultipleNovelsWrapper {
            novels_count: novels.len(),
            novels,
        }
    }
}

impl StatResponse {
    pub fn new(label: &str, value: &str) -> Self {
        StatResponse {
            label: label.to_owned(),
            value: value.to_owned(),
        }
    }
}

impl ProfileView {
    pub fn sign_in_required() -> Self {
        ProfileView {
            signed_in: false,
            user: None,
            message: Some("Please sign in to view your profile".to_owned()),
            stats: Vec::new(),
            reading_now: Vec::new(),
        }
    }
}
