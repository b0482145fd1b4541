mod config;
mod error;
mod services;

use crate::config::Config;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{info, warn};
use mime_guess::from_path;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    embedded_response(&STATIC_DIR, req.path())
}

/// Serves `path` from `dir`, falling back to `index.html` so client-side
/// routes still load the app.
fn embedded_response(dir: &Dir, path: &str) -> HttpResponse {
    let path = path.trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match dir.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match dir.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::load()?;
    let url = config.url();

    match config.store_config() {
        Some(store) => info!("Student records served from {} (table {})", store.url, store.table),
        None => warn!("Store is not configured; the app will show a loading error"),
    }

    if config.server.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    info!("Server running at {}", url);

    let bind = (config.server.host.clone(), config.server.port);
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .app_data(config.clone())
            .service(services::config::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
    .bind(bind)?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::{header, StatusCode};
    use include_dir::{DirEntry, File};

    static APP_DIR: Dir = Dir::new(
        "",
        &[
            DirEntry::File(File::new("index.html", b"<div id=\"app\"></div>")),
            DirEntry::File(File::new("frontend.js", b"init();")),
        ],
    );
    static EMPTY_DIR: Dir = Dir::new("", &[]);

    async fn body(resp: HttpResponse) -> String {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn content_type(resp: &HttpResponse) -> String {
        resp.headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    #[actix_web::test]
    async fn root_serves_index() {
        let resp = embedded_response(&APP_DIR, "/");
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(content_type(&resp).starts_with("text/html"));
        assert_eq!(body(resp).await, "<div id=\"app\"></div>");
    }

    #[actix_web::test]
    async fn assets_get_their_mime_type() {
        let resp = embedded_response(&APP_DIR, "/frontend.js");
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(content_type(&resp).contains("javascript"));
        assert_eq!(body(resp).await, "init();");
    }

    #[actix_web::test]
    async fn unknown_path_falls_back_to_index() {
        let resp = embedded_response(&APP_DIR, "/alunos/42");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(content_type(&resp), "text/html; charset=utf-8");
        assert_eq!(body(resp).await, "<div id=\"app\"></div>");
    }

    #[actix_web::test]
    async fn nothing_embedded_is_not_found() {
        let resp = embedded_response(&EMPTY_DIR, "/alunos");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
