use serde::{Deserialize, Serialize};

// ----------------- Session Request -----------------
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// ----------------- Settings Request -----------------
#[derive(Deserialize, Serialize, Debug)]
pub struct ThemeRequest {
    pub theme: String,
}

// ----------------- Library Request -----------------
#[derive(Deserialize, Serialize, Debug)]
pub struct CreateListRequest {
    pub name: String,
    #[serde(rename = "isPublic", default)]
    pub is_public: bool,
}

// ----------------- Author Request -----------------
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct ChapterDraftRequest {
    pub title: String,
    pub content: String,
    #[serde(rename = "authorNote")]
    pub author_note: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct NovelDraftRequest {
    pub title: String,
    pub description: String,
    pub genre: Vec<String>,
    pub tags: Vec<String>,
    pub status: Option<String>,
    pub mature: bool,
    pub language: Option<String>,
}
