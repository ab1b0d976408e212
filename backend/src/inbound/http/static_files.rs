//! Static asset pass-through under `/static/{path}`.
//!
//! Files are read through a `cap_std` directory handle opened once at start
//! up, so request paths cannot reach outside the configured directory.

use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, get, web};
use cap_std::{ambient_authority, fs::Dir};
use tracing::debug;

use crate::domain::Error;
use crate::inbound::http::ApiResult;

/// Capability handle over the static asset directory.
#[derive(Clone)]
pub struct StaticFiles {
    root: Arc<Dir>,
}

impl StaticFiles {
    /// Open `path` as the asset root.
    ///
    /// # Examples
    /// ```
    /// use directory::inbound::http::static_files::StaticFiles;
    ///
    /// let tmp = tempfile::tempdir()?;
    /// let files = StaticFiles::open(tmp.path())?;
    /// # let _ = files;
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn open(path: &Path) -> io::Result<Self> {
        let root = Dir::open_ambient_dir(path, ambient_authority())?;
        Ok(Self { root: Arc::new(root) })
    }

    /// Read a file relative to the root; `None` when it cannot be served.
    fn read(&self, relative: &Path) -> Option<Vec<u8>> {
        match self.root.read(relative) {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                debug!(path = %relative.display(), error = %err, "static asset unavailable");
                None
            }
        }
    }
}

/// Accept only plain relative paths made of normal components.
fn sanitise(requested: &str) -> Option<PathBuf> {
    let path = Path::new(requested);
    let mut components = path.components().peekable();
    components.peek()?;
    components
        .all(|component| matches!(component, Component::Normal(_)))
        .then(|| path.to_path_buf())
}

fn content_type_for(path: &Path) -> ContentType {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let mime = match extension.as_deref() {
        Some("css") => "text/css; charset=utf-8",
        Some("js") => "text/javascript; charset=utf-8",
        Some("html") | Some("htm") => "text/html; charset=utf-8",
        Some("txt") => "text/plain; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("ico") => "image/x-icon",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    };
    mime.parse().map_or_else(|_| ContentType::octet_stream(), ContentType)
}

/// Serve one asset, or the 404 page when it is missing or the path is refused.
#[get("/static/{path:.*}")]
pub async fn serve_static(
    files: web::Data<StaticFiles>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let requested = path.into_inner();
    let relative = sanitise(&requested)
        .ok_or_else(|| Error::not_found(format!("no asset at {requested}")))?;

    let reader = files.get_ref().clone();
    let lookup = relative.clone();
    let bytes = web::block(move || reader.read(&lookup))
        .await
        .map_err(|err| Error::internal(format!("static asset read aborted: {err}")))?
        .ok_or_else(|| Error::not_found(format!("no asset at {requested}")))?;

    Ok(HttpResponse::Ok()
        .insert_header(content_type_for(&relative))
        .insert_header((header::CACHE_CONTROL, "public, max-age=3600"))
        .body(bytes))
}
