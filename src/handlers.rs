use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::{StatusCode, Uri},
    Extension, Json,
};
use tracing::{debug, info};

use crate::{
    authentication::MaybeUser,
    catalog_helpers::{
        bookmarks, chapters_for_novel, comments_for_paragraph, community_feed, count_comments,
        favorites, filter_novels, find_chapter_or_default, find_novel_or_default,
        find_novels_by_ids, library_counts, neighbours, paragraphs, parse_chapter_number,
        parse_facets, posts_for_novel, rank_novels, reader_style, reading_now, resolve_list,
        search_all, selection_or_default, validate_list_name, CommunityTab, ExploreSort,
        LibraryTab, RankingTab, SearchFilter, TimeFrame,
    },
    data_formats::*,
    draft_helpers::{DraftStats, NovelDraft, NOVEL_GENRES},
    errors::RequestError,
    models::{NovelStatus, ReadingList},
    theme::DisplayMode,
    AppState,
};

type JsonResult<T> = Result<Json<T>, RequestError>;
type SharedState = Extension<Arc<AppState>>;

// ----------------- Helper Handlers -----------------
pub async fn alive() -> &'static str {
    "alive"
}

pub async fn not_found(uri: Uri) -> Result<(), (StatusCode, String)> {
    Err((
        StatusCode::NOT_FOUND,
        format!("URL {} provided was not found", uri),
    ))
}

// ----------------- Browse Handlers -----------------
pub async fn home(Extension(state): SharedState) -> Json<HomeView> {
    let catalog = &state.catalog;
    Json(HomeView {
        current_banner: state.carousel.current(),
        featured: NovelResponse::many(catalog.featured.clone()),
        trending: NovelResponse::many(catalog.trending.clone()),
        genres: into_responses(catalog.genres.clone()),
        stats: vec![
            StatResponse::new("Novels Available", "50,000+"),
            StatResponse::new("Active Readers", "2.5M+"),
            StatResponse::new("Chapters Read", "100M+"),
            StatResponse::new("Featured Authors", "5,000+"),
        ],
    })
}

pub async fn explore(
    Extension(state): SharedState,
    Query(params): Query<ExploreQueryParams>,
) -> Json<ExploreView> {
    let catalog = &state.catalog;
    let query = params.q.unwrap_or_default();
    let facets = parse_facets(params.genres.as_deref());
    let sort: ExploreSort = selection_or_default(params.sort.as_deref());

    let novels = filter_novels(&catalog.all_novels(), &query, &facets);
    debug!("Explore {:?} {:?} matched {}", query, facets, novels.len());

    Json(ExploreView {
        query,
        selected_genres: facets,
        genres: catalog.explore_genres.clone(),
        sort: sort.as_str().to_owned(),
        sort_options: ExploreSort::ALL.into_iter().map(Into::into).collect(),
        results: MultipleNovelsWrapper::new(NovelResponse::many(novels)),
    })
}

pub async fn novel_detail(
    Extension(state): SharedState,
    Path(id): Path<String>,
) -> JsonResult<NovelDetailView> {
    let catalog = &state.catalog;
    let novel = find_novel_or_default(catalog, &id).ok_or(RequestError::NotFound)?;
    let chapters = chapters_for_novel(catalog, &novel.id);
    let related_posts = posts_for_novel(catalog, &novel.title);
    let comments = catalog.novel_comments.clone();

    Ok(Json(NovelDetailView {
        novel: NovelResponse::new(novel),
        chapters: chapters.into_iter().map(ChapterResponse::new).collect(),
        related_posts: into_responses(related_posts),
        comments_count: count_comments(&comments),
        comments: comments.into_iter().map(CommentResponse::new).collect(),
    }))
}

pub async fn read_chapter(
    Extension(state): SharedState,
    Path((novel_id, chapter_id)): Path<(String, String)>,
) -> JsonResult<ReaderView> {
    let catalog = &state.catalog;
    let novel = find_novel_or_default(catalog, &novel_id).ok_or(RequestError::NotFound)?;
    let chapter = find_chapter_or_default(catalog, &novel_id).ok_or(RequestError::NotFound)?;
    let chapter_number = parse_chapter_number(&chapter_id, novel.total_chapters);
    let (previous_chapter, next_chapter) = neighbours(chapter_number, novel.total_chapters);
    let mode = state.theme.current();
    let style = reader_style(mode);
    let paragraphs = paragraphs(&chapter.content);
    let comments = (0..paragraphs.len())
        .flat_map(|index| comments_for_paragraph(&catalog.chapter_comments, index))
        .map(Into::into)
        .collect();

    Ok(Json(ReaderView {
        novel: NovelResponse::new(novel),
        chapter: ChapterResponse::new(chapter),
        chapter_number,
        previous_chapter,
        next_chapter,
        paragraphs,
        theme: mode.to_string(),
        style: ReaderStyleResponse {
            background: style.background.to_owned(),
            text: style.text.to_owned(),
        },
        comments,
    }))
}

pub async fn rankings(
    Extension(state): SharedState,
    Query(params): Query<RankingQueryParams>,
) -> Json<RankingsView> {
    let tab: RankingTab = selection_or_default(params.tab.as_deref());
    let time_frame: TimeFrame = selection_or_default(params.time_frame.as_deref());
    let ranked = rank_novels(&state.catalog.all_novels(), tab);

    Json(RankingsView {
        tab: tab.as_str().to_owned(),
        time_frame: time_frame.as_str().to_owned(),
        novels: RankedNovelResponse::ranked(ranked),
    })
}

pub async fn community(
    Extension(state): SharedState,
    Query(params): Query<TabQueryParams>,
) -> Json<CommunityView> {
    let tab: CommunityTab = selection_or_default(params.tab.as_deref());
    let posts: Vec<PostResponse> = into_responses(community_feed(&state.catalog));

    Json(CommunityView {
        tab: tab.as_str().to_owned(),
        posts_count: posts.len(),
        posts,
    })
}

pub async fn search(
    Extension(state): SharedState,
    Query(params): Query<SearchQueryParams>,
) -> Json<SearchView> {
    let query = params.q.unwrap_or_default();
    let filter: SearchFilter = selection_or_default(params.filter.as_deref());
    let results = search_all(&state.catalog, &query);
    let total = results.total();
    let results = results.narrow(filter);

    Json(SearchView {
        query,
        filter: filter.as_str().to_owned(),
        novels: NovelResponse::many(results.novels),
        authors: into_responses(results.authors),
        posts: into_responses(results.posts),
        total,
        trending_searches: state.catalog.trending_searches.clone(),
    })
}

// ----------------- Library Handlers -----------------
pub async fn library(
    Extension(state): SharedState,
    Query(params): Query<TabQueryParams>,
) -> Json<LibraryView> {
    let catalog = &state.catalog;
    let tab: LibraryTab = selection_or_default(params.tab.as_deref());
    let mut view = LibraryView {
        tab: tab.as_str().to_owned(),
        counts: library_counts(catalog).into(),
        novels: None,
        bookmarks: None,
        lists: None,
    };
    match tab {
        LibraryTab::Reading => view.novels = Some(NovelResponse::many(reading_now(catalog))),
        LibraryTab::Favorites => view.novels = Some(NovelResponse::many(favorites(catalog))),
        LibraryTab::Bookmarks => {
            view.bookmarks = Some(
                bookmarks(catalog)
                    .into_iter()
                    .map(ChapterResponse::new)
                    .collect(),
            )
        }
        LibraryTab::Lists => {
            view.lists = Some(
                catalog
                    .library
                    .custom_lists
                    .iter()
                    .map(|list| {
                        let (list, novels) = resolve_list(catalog, list);
                        ReadingListResponse::new(list, novels)
                    })
                    .collect(),
            )
        }
    }
    Json(view)
}

pub async fn create_list(
    Extension(state): SharedState,
    Json(request): Json<CreateListRequest>,
) -> JsonResult<ListWrapper> {
    let name = validate_list_name(&request.name)?;
    info!("Previewing new reading list {:?}", name);
    let list = ReadingList {
        id: format!("list{}", state.catalog.library.custom_lists.len() + 1),
        name,
        novel_ids: Vec::new(),
        is_public: request.is_public,
    };
    Ok(Json(ListWrapper {
        list: ReadingListResponse::new(list, Vec::new()),
        saved: false,
    }))
}

// ----------------- Profile Handlers -----------------
pub async fn profile(
    Extension(state): SharedState,
    MaybeUser(maybe_user): MaybeUser,
) -> Json<ProfileView> {
    let user = match maybe_user {
        Some(user) => user,
        None => return Json(ProfileView::sign_in_required()),
    };
    Json(ProfileView {
        signed_in: true,
        user: Some(user.into()),
        message: None,
        stats: vec![
            StatResponse::new("Novels Read", "156"),
            StatResponse::new("Chapters Read", "2,340"),
            StatResponse::new("Reviews Written", "89"),
            StatResponse::new("Comments Posted", "445"),
        ],
        reading_now: NovelResponse::many(
            reading_now(&state.catalog).into_iter().take(3).collect(),
        ),
    })
}

// ----------------- Author Handlers -----------------
pub async fn author_dashboard(
    Extension(state): SharedState,
    MaybeUser(maybe_user): MaybeUser,
) -> JsonResult<AuthorDashboardView> {
    let user = maybe_user.ok_or(RequestError::NotAuthorized("Need to be authorized"))?;
    if !user.is_author {
        return Err(RequestError::Forbidden);
    }
    let novels = find_novels_by_ids(&state.catalog, &state.catalog.authored_novels);
    let total_reads = novels.iter().map(|n| n.total_reads).sum();
    let total_chapters = novels.iter().map(|n| n.total_chapters).sum();
    let average_rating = if novels.is_empty() {
        0.0
    } else {
        novels.iter().map(|n| n.rating).sum::<f64>() / novels.len() as f64
    };

    Ok(Json(AuthorDashboardView {
        author: user.into(),
        novels: NovelResponse::many(novels),
        total_reads,
        total_chapters,
        average_rating,
    }))
}

pub async fn preview_chapter(
    Json(request): Json<ChapterDraftRequest>,
) -> Json<DraftWrapper<DraftStatsResponse>> {
    let stats = DraftStats::measure(&request.content);
    debug!("Chapter draft measured at {} words", stats.word_count);
    Json(DraftWrapper {
        draft: DraftStatsResponse::new(request.title.trim().to_owned(), stats),
    })
}

pub async fn preview_novel(
    Json(request): Json<NovelDraftRequest>,
) -> Json<DraftWrapper<NovelDraftResponse>> {
    let mut draft = NovelDraft {
        title: request.title.trim().to_owned(),
        description: request.description.trim().to_owned(),
        status: request
            .status
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(NovelStatus::Ongoing),
        mature: request.mature,
        ..Default::default()
    };
    if let Some(language) = request.language.filter(|l| !l.trim().is_empty()) {
        draft.language = language.trim().to_owned();
    }
    for genre in &request.genre {
        draft.toggle_genre(genre);
    }
    for tag in &request.tags {
        draft.add_tag(tag);
    }
    let available = NOVEL_GENRES.iter().map(|g| g.to_string()).collect();
    Json(DraftWrapper {
        draft: NovelDraftResponse::new(draft, available),
    })
}

// ----------------- Settings Handlers -----------------
pub async fn get_theme(Extension(state): SharedState) -> Json<ThemeWrapper<ThemeResponse>> {
    Json(ThemeWrapper {
        settings: state.theme.current().into(),
    })
}

pub async fn update_theme(
    Extension(state): SharedState,
    Json(request): Json<ThemeRequest>,
) -> JsonResult<ThemeWrapper<ThemeResponse>> {
    let mode: DisplayMode = request
        .theme
        .parse()
        .map_err(|_| RequestError::RunTimeError("Unknown display mode"))?;
    state.theme.set(mode)?;
    Ok(Json(ThemeWrapper {
        settings: mode.into(),
    }))
}

// ----------------- Session Handlers -----------------
pub async fn get_session(
    MaybeUser(maybe_user): MaybeUser,
) -> Json<UserWrapper<Option<UserResponse>>> {
    Json(UserWrapper::wrap_with_user_data(maybe_user.map(Into::into)))
}

pub async fn login(
    Extension(state): SharedState,
    Json(request): Json<LoginRequest>,
) -> Json<UserWrapper<UserResponse>> {
    let user = state.session.sign_in(&request.email, &request.password);
    Json(UserWrapper::wrap_with_user_data(user.into()))
}

pub async fn logout(Extension(state): SharedState) -> Json<UserWrapper<Option<UserResponse>>> {
    state.session.sign_out();
    Json(UserWrapper::wrap_with_user_data(None))
}
