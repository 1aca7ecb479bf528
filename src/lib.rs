//! Inkwell serves the views of a novel-reading site as JSON: browsing,
//! rankings, search, the reader, a personal library, community posts and
//! authoring previews. All content is fixture data held in memory; the only
//! thing that outlives the process is the chosen display mode.

mod authentication;
mod carousel;
pub mod catalog_helpers;
pub mod config;
mod data_formats;
pub mod draft_helpers;
mod errors;
pub mod fixtures;
mod handlers;
pub mod models;
pub mod theme;

pub use anyhow::Result;
pub use authentication::{MaybeUser, Session};
pub use carousel::{spawn_rotation, BannerCarousel};
pub use config::Config;
pub use data_formats::*;
pub use errors::{RequestError, RequestErrorJsonWrapper};

use axum::http::StatusCode;
use axum::{routing::*, Extension, Json, Router};
use fixtures::Catalog;
use handlers::*;
use std::{
    net::{SocketAddr, TcpListener},
    sync::Arc,
};
use theme::{FileThemeStore, ThemeSettings, ThemeStore};
use tracing::info;

pub type JsonResponse<T> = (StatusCode, Json<T>);

/// Everything the handlers share for the lifetime of the process.
pub struct AppState {
    pub catalog: Catalog,
    pub session: Session,
    pub theme: ThemeSettings,
    pub carousel: Arc<BannerCarousel>,
}

impl AppState {
    pub fn new(store: Box<dyn ThemeStore>) -> Self {
        let catalog = Catalog::load();
        let carousel = Arc::new(BannerCarousel::new(catalog.featured.len()));
        AppState {
            catalog,
            session: Session::signed_in(),
            theme: ThemeSettings::restore(store),
            carousel,
        }
    }
}

pub async fn run_app(app: Router, config: &Config) -> Result<()> {
    let state = Arc::new(AppState::new(Box::new(FileThemeStore::new(
        &config.theme_path,
    ))));
    let rotation = spawn_rotation(state.carousel.clone(), config.banner_interval);
    let app = app.layer(Extension(state));

    let address = config.address();
    info!("Server started on {}", address);
    let served = axum::Server::bind(&address)
        .serve(app.into_make_service())
        .await;
    rotation.abort();
    served?;
    Ok(())
}

pub fn get_random_free_port() -> (u16, SocketAddr) {
    let listener = TcpListener::bind("localhost:0").unwrap();
    match listener.local_addr() {
        Ok(addr) => (addr.port(), addr),
        Err(_) => panic!("Could not get a free port"),
    }
}

pub fn make_router() -> Router {
    Router::new()
        .route("/check_health", get(alive))
        .route("/home", get(home))
        .route("/explore", get(explore))
        .route("/novels/:id", get(novel_detail))
        .route("/read/:novel_id/:chapter_id", get(read_chapter))
        .route("/rankings", get(rankings))
        .route("/library", get(library))
        .route("/library/lists", post(create_list))
        .route("/community", get(community))
        .route("/search", get(search))
        .route("/profile", get(profile))
        .route("/author", get(author_dashboard))
        .route("/author/chapters/preview", post(preview_chapter))
        .route("/author/novels/preview", post(preview_novel))
        .route("/settings/theme", get(get_theme).put(update_theme))
        .route("/session", get(get_session))
        .route("/session/login", post(login))
        .route("/session/logout", post(logout))
        .fallback(not_found)
}
