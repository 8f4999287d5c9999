use crate::error::RouteError;
use crate::images::random_image;
use crate::server::response::{HttpResponse, APPLICATION_JSON};
use crate::static_files::StaticFiles;
use http::StatusCode;
use rand::Rng;

/// `GET /json`: One random image as `{"header": ..., "image": ...}`.
pub fn json<R: Rng + ?Sized>(rng: &mut R) -> Result<HttpResponse, RouteError> {
    let image = random_image(rng);
    let body = serde_json::to_vec(image)
        .map_err(|e| RouteError::Io(std::io::Error::other(e)))?;
    Ok(HttpResponse::new(StatusCode::OK, APPLICATION_JSON, body))
}

/// `GET /random`: The static page that fetches `/json` client side.
pub fn page(www: &StaticFiles) -> Result<HttpResponse, RouteError> {
    Ok(HttpResponse::ok_html(www.read("index.html")?))
}
