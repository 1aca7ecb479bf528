//! Hard-coded sample records standing in for a backend dataset.
//!
//! Everything here is built once by [`Catalog::load`] and never mutated
//! afterwards. References between records (a chapter's novel id, a reading
//! list's novel ids) are not checked.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::{
    Author, Chapter, ChapterComment, Comment, CommunityPost, GenreSummary, Library, Novel,
    NovelStatus, ReadingList, User,
};

const COVER_MYSTIC: &str =
    "https://images.pexels.com/photos/1029141/pexels-photo-1029141.jpeg?auto=compress&cs=tinysrgb&w=400";
const COVER_PAGES: &str = "https://images.pexels.com/photos/159866/books-book-pages-read-literature-159866.jpeg?auto=compress&cs=tinysrgb&w=400";
const AVATAR_A: &str =
    "https://images.pexels.com/photos/614810/pexels-photo-614810.jpeg?auto=compress&cs=tinysrgb&w=150";
const AVATAR_B: &str =
    "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=150";
const AVATAR_C: &str =
    "https://images.pexels.com/photos/733872/pexels-photo-733872.jpeg?auto=compress&cs=tinysrgb&w=150";

/// The whole in-memory dataset for one process.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub featured: Vec<Novel>,
    pub trending: Vec<Novel>,
    pub chapters: Vec<Chapter>,
    pub community_posts: Vec<CommunityPost>,
    pub pinned_posts: Vec<CommunityPost>,
    pub authors: Vec<Author>,
    pub library: Library,
    pub novel_comments: Vec<Comment>,
    pub chapter_comments: Vec<ChapterComment>,
    pub genres: Vec<GenreSummary>,
    /// Novels the demo author manages from the dashboard.
    pub authored_novels: Vec<String>,
    pub explore_genres: Vec<String>,
    pub trending_searches: Vec<String>,
}

impl Catalog {
    pub fn load() -> Self {
        Catalog {
            featured: featured_novels(),
            trending: trending_novels(),
            chapters: sample_chapters(),
            community_posts: community_posts(),
            pinned_posts: pinned_posts(),
            authors: authors(),
            library: user_library(),
            novel_comments: novel_comments(),
            chapter_comments: chapter_comments(),
            genres: genre_summaries(),
            authored_novels: strings(&["1", "3"]),
            explore_genres: strings(&[
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
            ]),
            trending_searches: strings(&[
                "fantasy magic systems",
                "completed romance novels",
                "cyberpunk stories",
                "Elena Starweaver",
                "ancient empire mystery",
                "digital hearts review",
            ]),
        }
    }

    /// Featured novels followed by trending ones.
    pub fn all_novels(&self) -> Vec<Novel> {
        self.featured
            .iter()
            .chain(self.trending.iter())
            .cloned()
            .collect()
    }

    /// Shared posts followed by the community-only pinned ones.
    pub fn all_community_posts(&self) -> Vec<CommunityPost> {
        self.community_posts
            .iter()
            .chain(self.pinned_posts.iter())
            .cloned()
            .collect()
    }
}

pub fn demo_user() -> User {
    User {
        id: "1".to_owned(),
        name: "Alex Reader".to_owned(),
        email: "alex@example.com".to_owned(),
        avatar: AVATAR_A.to_owned(),
        xp: 2450,
        level: 12,
        is_author: true,
        badges: strings(&["Early Reader", "Novel Reviewer", "Community Helper"]),
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn day(value: &str) -> NaiveDate {
    value.parse().unwrap_or_default()
}

fn instant(value: &str) -> DateTime<Utc> {
    value.parse().unwrap_or_default()
}

fn featured_novels() -> Vec<Novel> {
    vec![
        Novel {
            id: "1".to_owned(),
            title: "The Chronicles of Mystic Realms".to_owned(),
            author: "Elena Starweaver".to_owned(),
            author_id: "author1".to_owned(),
            cover: COVER_MYSTIC.to_owned(),
            genre: strings(&["Fantasy", "Adventure"]),
            status: NovelStatus::Ongoing,
            rating: 4.8,
            total_reads: 1_250_000,
            total_chapters: 156,
            description: "In a world where magic flows through ancient ley lines, young Aria discovers she possesses a rare gift that could either save or destroy the realm. Follow her journey as she navigates political intrigue, forbidden romance, and an ancient prophecy that speaks of a chosen one who will unite the scattered kingdoms.".to_owned(),
            tags: strings(&["Magic", "Romance", "Politics", "Prophecy"]),
            last_updated: day("2024-01-15"),
            is_bookmarked: true,
            is_in_library: true,
        },
        Novel {
            id: "2".to_owned(),
            title: "Digital Hearts".to_owned(),
            author: "Marcus Chen".to_owned(),
            author_id: "author2".to_owned(),
            cover: COVER_PAGES.to_owned(),
            genre: strings(&["Romance", "Contemporary"]),
            status: NovelStatus::Completed,
            rating: 4.6,
            total_reads: 890_000,
            total_chapters: 89,
            description: "A heartwarming story about love in the digital age. When app developer Jake meets bookstore owner Sofia through a dating app glitch, their virtual connection blossoms into something real and beautiful.".to_owned(),
            tags: strings(&["Modern Romance", "Technology", "Small Town"]),
            last_updated: day("2024-01-10"),
            is_bookmarked: false,
            is_in_library: true,
        },
        Novel {
            id: "3".to_owned(),
            title: "Shadow of the Ancient Empire".to_owned(),
            author: "Dr. Alexandra Blackwood".to_owned(),
            author_id: "author3".to_owned(),
            cover: COVER_MYSTIC.to_owned(),
            genre: strings(&["Historical Fiction", "Mystery"]),
            status: NovelStatus::Ongoing,
            rating: 4.7,
            total_reads: 567_000,
            total_chapters: 78,
            description: "An archaeological thriller that spans millennia. Dr. Sarah Mitchell uncovers a conspiracy that threatens to rewrite history itself, connecting ancient civilizations with modern-day power struggles.".to_owned(),
            tags: strings(&["Archaeology", "Conspiracy", "Ancient History"]),
            last_updated: day("2024-01-12"),
            is_bookmarked: true,
            is_in_library: false,
        },
    ]
}

fn trending_novels() -> Vec<Novel> {
    vec![
        Novel {
            id: "4".to_owned(),
            title: "Neon Shadows".to_owned(),
            author: "Kai Nakamura".to_owned(),
            author_id: "author4".to_owned(),
            cover: COVER_PAGES.to_owned(),
            genre: strings(&["Cyberpunk", "Thriller"]),
            status: NovelStatus::Ongoing,
            rating: 4.5,
            total_reads: 445_000,
            total_chapters: 45,
            description: "In 2087, corporate hacker Zara infiltrates the most secure networks in Neo-Tokyo, but when she stumbles upon a conspiracy involving AI consciousness, she must choose between profit and humanity.".to_owned(),
            tags: strings(&["Cyberpunk", "AI", "Corporate Espionage"]),
            last_updated: day("2024-01-14"),
            is_bookmarked: false,
            is_in_library: false,
        },
        Novel {
            id: "5".to_owned(),
            title: "The Last Bookkeeper".to_owned(),
            author: "Isabella Rodriguez".to_owned(),
            author_id: "author5".to_owned(),
            cover: COVER_MYSTIC.to_owned(),
            genre: strings(&["Fantasy", "Drama"]),
            status: NovelStatus::Ongoing,
            rating: 4.9,
            total_reads: 789_000,
            total_chapters: 67,
            description: "In a world where books are becoming extinct, librarian Emma discovers that stories have the power to literally come alive. She becomes the guardian of humanity's last hope for preserving imagination.".to_owned(),
            tags: strings(&["Books", "Magic Realism", "Preservation"]),
            last_updated: day("2024-01-13"),
            is_bookmarked: false,
            is_in_library: false,
        },
    ]
}

const AWAKENING: &str = "The morning mist clung to the ancient stones of Silverfall Academy like whispered secrets from another age. Aria Moonwhisper pressed her palm against the cool surface of her dormitory window, watching as the first rays of dawn painted the sky in shades of rose and gold.

Today was different. She could feel it in the very air around her, a subtle shift in the magical currents that flowed through the academy grounds. The pendant at her throat, a family heirloom passed down through generations, pulsed with a soft, ethereal light.

\"Another sleepless night?\" came a voice from behind her.

Aria turned to see her roommate, Luna Starfall, emerging from beneath a pile of covers that looked more like a cocoon than a bed. Luna's silver hair caught the early morning light, giving her an almost otherworldly appearance.

\"I keep having the same dream,\" Aria admitted, moving away from the window. \"There's a voice calling to me from somewhere deep within the Whispering Woods. It sounds... familiar, somehow.\"

Luna sat up, suddenly alert. \"The Whispering Woods? Aria, you know students aren't allowed there. The magical barriers are too unstable, and the creatures that dwell within...\"

\"I know,\" Aria interrupted, but her gaze drifted back to the window, toward the dark line of trees that marked the edge of the forbidden forest. \"But the voice... it's getting stronger. More insistent.\"

As if summoned by her words, the pendant at her throat flared with brilliant light, casting dancing shadows across the room. Both girls stared in amazement as ancient symbols appeared in the air around them, glowing with the same ethereal radiance.

\"What in the realm...\" Luna whispered.

The symbols pulsed once, twice, then faded away, leaving only the echo of power in the air and the sound of approaching footsteps in the corridor outside.";

fn sample_chapters() -> Vec<Chapter> {
    vec![Chapter {
        id: "ch1".to_owned(),
        novel_id: "1".to_owned(),
        title: "The Awakening".to_owned(),
        content: AWAKENING.to_owned(),
        chapter_number: 1,
        published_at: instant("2024-01-15T10:00:00Z"),
        is_read: true,
        is_bookmarked: true,
    }]
}

fn community_posts() -> Vec<CommunityPost> {
    vec![
        CommunityPost {
            id: "post1".to_owned(),
            title: "Theory: Is Aria actually from the Ancient Empire?".to_owned(),
            author: "TheoryMaster92".to_owned(),
            content: "I've been re-reading Chronicles of Mystic Realms and I noticed some interesting parallels...".to_owned(),
            likes: 234,
            replies: 45,
            timestamp: "2 hours ago".to_owned(),
            tags: strings(&["Theory", "Chronicles of Mystic Realms"]),
            is_pinned: false,
        },
        CommunityPost {
            id: "post2".to_owned(),
            title: "Digital Hearts made me cry happy tears".to_owned(),
            author: "BookwormBella".to_owned(),
            content: "Just finished reading Digital Hearts and I'm an emotional mess. The ending was perfect!".to_owned(),
            likes: 156,
            replies: 28,
            timestamp: "4 hours ago".to_owned(),
            tags: strings(&["Review", "Digital Hearts"]),
            is_pinned: false,
        },
    ]
}

fn pinned_posts() -> Vec<CommunityPost> {
    vec![
        CommunityPost {
            id: "post3".to_owned(),
            title: "What makes a good fantasy magic system?".to_owned(),
            author: "WorldBuilder23".to_owned(),
            content: "I've been thinking about different approaches to magic systems in fantasy novels...".to_owned(),
            likes: 89,
            replies: 34,
            timestamp: "6 hours ago".to_owned(),
            tags: strings(&["Discussion", "Fantasy", "Writing"]),
            is_pinned: true,
        },
        CommunityPost {
            id: "post4".to_owned(),
            title: "Monthly Reading Challenge - January 2024".to_owned(),
            author: "CommunityMod".to_owned(),
            content: "Welcome to our monthly reading challenge! This month we're focusing on completed novels...".to_owned(),
            likes: 156,
            replies: 67,
            timestamp: "1 day ago".to_owned(),
            tags: strings(&["Challenge", "Community"]),
            is_pinned: true,
        },
    ]
}

fn authors() -> Vec<Author> {
    vec![
        Author {
            id: 1,
            name: "Elena Starweaver".to_owned(),
            novels: 3,
            followers: 15_400,
            avatar: AVATAR_A.to_owned(),
        },
        Author {
            id: 2,
            name: "Marcus Chen".to_owned(),
            novels: 2,
            followers: 8_900,
            avatar: AVATAR_B.to_owned(),
        },
        Author {
            id: 3,
            name: "Dr. Alexandra Blackwood".to_owned(),
            novels: 1,
            followers: 5_600,
            avatar: AVATAR_C.to_owned(),
        },
    ]
}

fn user_library() -> Library {
    Library {
        reading_now: strings(&["1", "2"]),
        favorites: strings(&["1", "5"]),
        bookmarks: strings(&["ch1"]),
        custom_lists: vec![
            ReadingList {
                id: "list1".to_owned(),
                name: "Fantasy Favorites".to_owned(),
                novel_ids: strings(&["1", "5"]),
                is_public: false,
            },
            ReadingList {
                id: "list2".to_owned(),
                name: "Must Read Romance".to_owned(),
                novel_ids: strings(&["2"]),
                is_public: true,
            },
        ],
    }
}

fn novel_comments() -> Vec<Comment> {
    vec![
        Comment {
            id: "c1".to_owned(),
            user_id: "u99".to_owned(),
            user_name: "BookLover99".to_owned(),
            user_avatar: AVATAR_A.to_owned(),
            content: "Absolutely captivating! The world-building is incredible and the characters feel so real.".to_owned(),
            timestamp: "2 days ago".to_owned(),
            likes: 23,
            replies: vec![Comment {
                id: "c1-1".to_owned(),
                user_id: "u12".to_owned(),
                user_name: "FantasyFan".to_owned(),
                user_avatar: AVATAR_B.to_owned(),
                content: "Agreed, the ley line magic is so well thought out.".to_owned(),
                timestamp: "1 day ago".to_owned(),
                likes: 4,
                replies: Vec::new(),
            }],
        },
        Comment {
            id: "c2".to_owned(),
            user_id: "u12".to_owned(),
            user_name: "FantasyFan".to_owned(),
            user_avatar: AVATAR_B.to_owned(),
            content: "Great story with amazing plot twists. Can't wait for the next chapter!".to_owned(),
            timestamp: "1 week ago".to_owned(),
            likes: 15,
            replies: Vec::new(),
        },
    ]
}

fn chapter_comments() -> Vec<ChapterComment> {
    vec![
        ChapterComment {
            id: 1,
            user: "MagicFan92".to_owned(),
            avatar: AVATAR_A.to_owned(),
            content: "The magical pendant scene gave me chills! Elena really knows how to build tension.".to_owned(),
            timestamp: "2 hours ago".to_owned(),
            likes: 12,
            paragraph: 3,
        },
        ChapterComment {
            id: 2,
            user: "BookwormSarah".to_owned(),
            avatar: AVATAR_B.to_owned(),
            content: "I love the friendship between Aria and Luna. Their dynamic is so well written!".to_owned(),
            timestamp: "4 hours ago".to_owned(),
            likes: 8,
            paragraph: 5,
        },
    ]
}

fn genre_summaries() -> Vec<GenreSummary> {
    [
        ("Fantasy", 12_450),
        ("Romance", 8_900),
        ("Sci-Fi", 6_750),
        ("Mystery", 4_320),
        ("Adventure", 7_890),
        ("Historical", 3_450),
    ]
    .into_iter()
    .map(|(name, novels)| GenreSummary {
        name: name.to_owned(),
        novels,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_novels_keeps_featured_then_trending_order() {
        let catalog = Catalog::load();
        let ids: Vec<_> = catalog.all_novels().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn fixture_dates_parse() {
        let catalog = Catalog::load();
        assert_eq!(catalog.featured[0].last_updated.to_string(), "2024-01-15");
        assert_eq!(
            catalog.chapters[0].published_at.to_rfc3339(),
            "2024-01-15T10:00:00+00:00"
        );
    }
}
