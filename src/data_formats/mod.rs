mod request;
mod response;
mod wrapper;

pub use request::*;
pub use response::*;
pub use wrapper::*;

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct ExploreQueryParams {
    #[serde(default)]
    pub q: Option<String>,
    /// Comma separated genre facets.
    #[serde(default)]
    pub genres: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RankingQueryParams {
    #[serde(default)]
    pub tab: Option<String>,
    #[serde(rename = "timeFrame", default)]
    pub time_frame: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct TabQueryParams {
    #[serde(default)]
    pub tab: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SearchQueryParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub filter: Option<String>,
}
