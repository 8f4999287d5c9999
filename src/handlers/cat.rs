use crate::error::RouteError;
use crate::handlers::require_query;
use crate::server::response::HttpResponse;
use crate::static_files::StaticFiles;

/// `GET /cat?kitty=<1|2>`: One of two fixed kitten pages.
pub fn handle(images: &StaticFiles, query: &str) -> Result<HttpResponse, RouteError> {
    let params = require_query(query, "cat")?;
    let kitty = params.get("kitty").ok_or_else(|| {
        RouteError::MissingArgument(
            "Does not contain correct query argument. Check if you spelled kitty correctly.\n"
                .to_string(),
        )
    })?;
    let page = match kitty {
        "1" => "kitty1.html",
        "2" => "kitty2.html",
        _ => {
            return Err(RouteError::InvalidArgument(
                "Does not have a number in the correct range of pictures. Please try either 1 or 2."
                    .to_string(),
            ))
        }
    };
    Ok(HttpResponse::ok_html(images.read(page)?))
}
