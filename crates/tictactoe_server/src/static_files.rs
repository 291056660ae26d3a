//! Static file serving for the browser UI.

use crate::app::AppState;
use axum::{
    extract::State,
    http::{StatusCode, Uri, header},
    response::{Html, IntoResponse, Response},
};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, error, instrument, warn};

/// Content type for a file, chosen by extension.
pub fn content_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("html") => "text/html",
        Some("js") => "application/javascript",
        Some("css") => "text/css",
        Some("json") => "application/json",
        Some("png") => "image/png",
        Some("jpg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("ico") => "image/x-icon",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Maps a request path onto a file under `root`.
///
/// `/` maps to `index.html`. Returns `None` for paths that would leave
/// `root` or that name no file component at all.
pub fn resolve(root: &Path, request_path: &str) -> Option<PathBuf> {
    let relative = match request_path {
        "/" => "index.html",
        path => path.trim_start_matches('/'),
    };

    let mut resolved = root.to_path_buf();
    let mut components = 0;
    for component in Path::new(relative).components() {
        match component {
            Component::Normal(part) => resolved.push(part),
            _ => return None,
        }
        components += 1;
    }

    (components > 0).then_some(resolved)
}

/// Fallback handler: serves files from the configured static directory.
#[instrument(skip(state), fields(path = %uri.path()))]
pub async fn serve_static(State(state): State<AppState>, uri: Uri) -> Response {
    let path = uri.path();
    let Some(file) = resolve(state.static_dir(), path) else {
        warn!("Rejected path");
        return not_found(path);
    };

    match tokio::fs::read(&file).await {
        Ok(content) => {
            debug!(file = %file.display(), bytes = content.len(), "Serving file");
            (
                [
                    (header::CONTENT_TYPE, content_type(&file)),
                    (header::CACHE_CONTROL, "no-cache"),
                ],
                content,
            )
                .into_response()
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(file = %file.display(), "File not found");
            not_found(path)
        }
        Err(e) => {
            error!(file = %file.display(), error = %e, "Failed to read file");
            server_error()
        }
    }
}

fn not_found(path: &str) -> Response {
    let page = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>404 - File Not Found</title>
    <style>
        body {{ font-family: Arial, sans-serif; text-align: center; padding: 50px; }}
        h1 {{ color: #e74c3c; }}
        a {{ color: #3498db; text-decoration: none; }}
    </style>
</head>
<body>
    <h1>404 - File Not Found</h1>
    <p>The requested file <code>{}</code> was not found.</p>
    <a href="/">Go back to the game</a>
</body>
</html>
"#,
        escape_html(path)
    );
    (StatusCode::NOT_FOUND, Html(page)).into_response()
}

fn server_error() -> Response {
    let page = r#"<!DOCTYPE html>
<html>
<head>
    <title>500 - Server Error</title>
    <style>
        body { font-family: Arial, sans-serif; text-align: center; padding: 50px; }
        h1 { color: #e74c3c; }
    </style>
</head>
<body>
    <h1>500 - Server Error</h1>
    <p>Something went wrong on the server.</p>
</body>
</html>
"#;
    (StatusCode::INTERNAL_SERVER_ERROR, Html(page)).into_response()
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
