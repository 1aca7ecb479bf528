use std::{cmp::Ordering, str::FromStr};

use crate::models::{Novel, NovelStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankingTab {
    #[default]
    Popular,
    Rated,
    New,
    Completed,
}

impl RankingTab {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankingTab::Popular => "popular",
            RankingTab::Rated => "rated",
            RankingTab::New => "new",
            RankingTab::Completed => "completed",
        }
    }
}

impl FromStr for RankingTab {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popular" => Ok(RankingTab::Popular),
            "rated" => Ok(RankingTab::Rated),
            "new" => Ok(RankingTab::New),
            "completed" => Ok(RankingTab::Completed),
            _ => Err(()),
        }
    }
}

/// Selectable on the rankings page and echoed back, but never applied to the
/// ordering: the data has no per-period read counts to rank by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFrame {
    #[default]
    Week,
    Month,
    Year,
    AllTime,
}

impl TimeFrame {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeFrame::Week => "week",
            TimeFrame::Month => "month",
            TimeFrame::Year => "year",
            TimeFrame::AllTime => "alltime",
        }
    }
}

impl FromStr for TimeFrame {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "week" => Ok(TimeFrame::Week),
            "month" => Ok(TimeFrame::Month),
            "year" => Ok(TimeFrame::Year),
            "alltime" => Ok(TimeFrame::AllTime),
            _ => Err(()),
        }
    }
}

/// Ties keep whatever order the unstable sort leaves them in.
pub fn rank_novels(novels: &[Novel], tab: RankingTab) -> Vec<Novel> {
    let mut ranked = novels.to_vec();
    match tab {
        RankingTab::Popular => ranked.sort_unstable_by(|a, b| b.total_reads.cmp(&a.total_reads)),
        RankingTab::Rated => ranked
            .sort_unstable_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)),
        RankingTab::New => ranked.sort_unstable_by(|a, b| b.last_updated.cmp(&a.last_updated)),
        RankingTab::Completed => ranked.retain(|novel| novel.status == NovelStatus::Completed),
    }
    ranked
}

pub fn rank_badge(rank: usize) -> &'static str {
    match rank {
        1 => "crown",
        2 => "medal",
        3 => "award",
        _ => "none",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Catalog;

    fn ids(novels: &[Novel]) -> Vec<&str> {
        novels.iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn rated_tab_orders_by_rating() {
        let ranked = rank_novels(&Catalog::load().all_novels(), RankingTab::Rated);
        let ratings: Vec<f64> = ranked.iter().map(|n| n.rating).collect();
        assert_eq!(ratings, vec![4.9, 4.8, 4.7, 4.6, 4.5]);
    }

    #[test]
    fn popular_tab_orders_by_reads() {
        let ranked = rank_novels(&Catalog::load().all_novels(), RankingTab::Popular);
        assert_eq!(ids(&ranked), vec!["1", "2", "5", "3", "4"]);
    }

    #[test]
    fn new_tab_orders_by_last_update() {
        let ranked = rank_novels(&Catalog::load().all_novels(), RankingTab::New);
        assert_eq!(ids(&ranked), vec!["1", "4", "5", "3", "2"]);
    }

    #[test]
    fn completed_tab_only_keeps_completed_novels() {
        let ranked = rank_novels(&Catalog::load().all_novels(), RankingTab::Completed);
        assert_eq!(ids(&ranked), vec!["2"]);
    }

    #[test]
    fn badges_for_the_podium_only() {
        assert_eq!(rank_badge(1), "crown");
        assert_eq!(rank_badge(3), "award");
        assert_eq!(rank_badge(4), "none");
    }
}
