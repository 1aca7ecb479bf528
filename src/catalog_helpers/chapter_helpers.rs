use crate::fixtures::Catalog;
use crate::models::{Chapter, ChapterComment};
use crate::theme::DisplayMode;

pub fn chapters_for_novel(catalog: &Catalog, novel_id: &str) -> Vec<Chapter> {
    catalog
        .chapters
        .iter()
        .filter(|chapter| chapter.novel_id == novel_id)
        .cloned()
        .collect()
}

/// First chapter of the novel, or the first sample chapter when the novel has
/// none. The requested chapter number only drives navigation.
pub fn find_chapter_or_default(catalog: &Catalog, novel_id: &str) -> Option<Chapter> {
    catalog
        .chapters
        .iter()
        .find(|chapter| chapter.novel_id == novel_id)
        .or_else(|| catalog.chapters.first())
        .cloned()
}

pub fn paragraphs(content: &str) -> Vec<String> {
    content.split("\n\n").map(str::to_owned).collect()
}

/// Chapter number from a route segment, defaulting to 1 and capped at the
/// novel's last chapter.
pub fn parse_chapter_number(raw: &str, total_chapters: u32) -> u32 {
    let number = raw.trim().parse().ok().filter(|n| *n > 0).unwrap_or(1);
    number.min(total_chapters.max(1))
}

/// Previous and next chapter numbers, bounded by the novel's chapter count.
pub fn neighbours(chapter_number: u32, total_chapters: u32) -> (Option<u32>, Option<u32>) {
    let chapter_number = chapter_number.clamp(1, total_chapters.max(1));
    let previous = (chapter_number > 1).then(|| chapter_number - 1);
    let next = (chapter_number < total_chapters).then(|| chapter_number + 1);
    (previous, next)
}

pub fn comments_for_paragraph(comments: &[ChapterComment], paragraph: usize) -> Vec<ChapterComment> {
    comments
        .iter()
        .filter(|comment| comment.paragraph == paragraph)
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderStyle {
    pub background: &'static str,
    pub text: &'static str,
}

pub fn reader_style(mode: DisplayMode) -> ReaderStyle {
    match mode {
        DisplayMode::Light => ReaderStyle {
            background: "bg-white",
            text: "text-gray-900",
        },
        DisplayMode::Dark => ReaderStyle {
            background: "bg-gray-900",
            text: "text-gray-100",
        },
        DisplayMode::Sepia => ReaderStyle {
            background: "bg-amber-50",
            text: "text-amber-900",
        },
    }
}
