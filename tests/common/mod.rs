#![allow(dead_code)]

use std::{net::SocketAddr, path::PathBuf, time::Duration};

use inkwell::{get_random_free_port, make_router, run_app, Config};

pub struct TestApp {
    pub address: SocketAddr,
    pub theme_path: PathBuf,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.address, path)
    }
}

pub fn theme_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "inkwell-it-{}-{}.json",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

pub async fn spawn_app_with_theme(theme_path: PathBuf) -> TestApp {
    let (port, address) = get_random_free_port();
    let config = Config {
        host: address.ip(),
        port,
        theme_path: theme_path.clone(),
        banner_interval: Duration::from_secs(5),
    };
    tokio::spawn(async move {
        run_app(make_router(), &config).await.unwrap();
    });

    let client = reqwest::Client::new();
    let app = TestApp {
        address,
        theme_path,
        client,
    };
    for _ in 0..50 {
        if let Ok(response) = app.client.get(app.url("/check_health")).send().await {
            if response.status().is_success() {
                return app;
            }
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("server did not come up on {}", address);
}

pub async fn spawn_app(name: &str) -> TestApp {
    spawn_app_with_theme(theme_path(name)).await
}
