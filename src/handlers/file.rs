use crate::error::RouteError;
use crate::server::response::HttpResponse;
use crate::static_files::StaticFiles;

/// Body returned when the path exists. File contents are never served.
pub const FOUND_BODY: &str = "Would theoretically be a file but removed this part, you do not have to do anything with it for the assignment";

/// `GET /file/<path>`: Existence check only.
pub fn handle(files: &StaticFiles, path: &str) -> Result<HttpResponse, RouteError> {
    if path.is_empty() || !files.exists(path) {
        return Err(RouteError::NotFound(path.to_string()));
    }
    Ok(HttpResponse::ok_html(FOUND_BODY))
}
