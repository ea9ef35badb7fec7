use axum::{routing::get, Router};
use clap::Parser;
use common::models::PublicConfig;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use tower::ServiceBuilder;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod handlers;

#[derive(Parser, Debug)]
#[clap(name = "backend", about = "wedding marketplace site host")]
struct Opt {
    #[clap(short = 'l', long = "log", default_value = "debug")]
    log_level: String,

    #[clap(short = 'a', long = "addr", default_value = "::1")]
    addr: String,

    #[clap(short = 'p', long = "port", default_value = "8080")]
    port: u16,

    #[clap(long = "static-dir", default_value = "./dist")]
    static_dir: String,
}

#[derive(Clone)]
pub struct AppState {
    config: Option<PublicConfig>,
}

/// Build the router: the config endpoint plus the compiled frontend, with
/// `index.html` served for anything that isn't a file.

fn app(state: AppState, static_dir: &str) -> Router {
    let index_path = PathBuf::from(static_dir).join("index.html");
    Router::new()
        .route("/api/config", get(handlers::config))
        .fallback_service(ServeDir::new(static_dir).not_found_service(ServeFile::new(index_path)))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

#[tokio::main]
async fn main() {
    let opt = Opt::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},hyper=info,mio=info", opt.log_level)));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = config::load_public_config();
    if config.is_none() {
        log::warn!("SUPABASE_URL or SUPABASE_ANON_KEY not set, vendor sign in will be unavailable");
    }

    let app = app(AppState { config }, &opt.static_dir);

    let mut port = opt.port;
    if let Ok(port_env) = std::env::var("PORT") {
        match port_env.parse::<u16>() {
            Ok(p) => port = p,
            Err(_) => log::warn!("ignoring invalid PORT value {:?}", port_env),
        }
    }

    let sock_addr = SocketAddr::from((
        IpAddr::from_str(opt.addr.as_str()).unwrap_or(IpAddr::V6(Ipv6Addr::LOCALHOST)),
        port,
    ));

    log::info!("listening on http://{}", sock_addr);

    let listener = match tokio::net::TcpListener::bind(&sock_addr).await {
        Ok(listener) => listener,
        Err(err) => {
            log::error!("couldn't bind {}: {}", sock_addr, err);
            std::process::exit(1);
        }
    };
    if let Err(err) = axum::serve(listener, app).await {
        log::error!("server stopped: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn static_dir(name: &str) -> String {
        let dir = std::env::temp_dir().join(format!("wedding-site-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("index.html"), "<html>site</html>").unwrap();
        dir.to_string_lossy().into_owned()
    }

    fn configured() -> AppState {
        AppState {
            config: Some(PublicConfig {
                auth_url: "https://abc.supabase.co".into(),
                anon_key: "anon".into(),
                dashboard_path: "/vendor/dashboard".into(),
            }),
        }
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn serves_public_config() {
        let (status, body) = get(app(configured(), &static_dir("config")), "/api/config").await;
        assert_eq!(status, StatusCode::OK);
        let config: PublicConfig = serde_json::from_str(&body).unwrap();
        assert_eq!(config.anon_key, "anon");
    }

    #[tokio::test]
    async fn missing_config_is_unavailable() {
        let (status, _) = get(app(AppState { config: None }, &static_dir("missing")), "/api/config").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn unknown_paths_get_the_app_shell() {
        let (_, body) = get(app(configured(), &static_dir("shell")), "/vendors/login").await;
        assert_eq!(body, "<html>site</html>");
    }
}
