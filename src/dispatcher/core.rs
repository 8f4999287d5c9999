use crate::error::RouteError;
use crate::handlers;
use crate::router::{classify, Route};
use crate::runtime_config::ServerConfig;
use crate::server::response::HttpResponse;
use crate::static_files::StaticFiles;
use crate::upstream::{HttpFetcher, RepoFetcher};
use anyhow::Context;
use http::StatusCode;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Body sent when the header block contained no `GET` line.
pub const NO_GET_BODY: &str = "<html>Illegal request: no GET</html>";

/// Body sent for paths that match no route.
pub const UNRECOGNIZED_BODY: &str = "I am not sure what you want me to do...";

/// Routes parsed request paths to handlers.
pub struct Dispatcher {
    www: StaticFiles,
    images: StaticFiles,
    files: StaticFiles,
    fetcher: Arc<dyn RepoFetcher>,
    github_api: String,
}

impl Dispatcher {
    pub fn new(
        www: StaticFiles,
        images: StaticFiles,
        files: StaticFiles,
        fetcher: Arc<dyn RepoFetcher>,
        github_api: impl Into<String>,
    ) -> Self {
        Self {
            www,
            images,
            files,
            fetcher,
            github_api: github_api.into(),
        }
    }

    /// Build a dispatcher with an [`HttpFetcher`] using the configured timeout.
    pub fn from_config(config: &ServerConfig) -> anyhow::Result<Self> {
        let fetcher = HttpFetcher::new(config.upstream_timeout)
            .context("failed to build upstream HTTP client")?;
        Ok(Self::new(
            StaticFiles::new(&config.www_dir),
            StaticFiles::new(&config.images_dir),
            StaticFiles::new(&config.file_root),
            Arc::new(fetcher),
            config.github_api.clone(),
        ))
    }

    /// Produce the response for one request.
    ///
    /// `path` is `None` when no `GET` line was found. Every outcome, including
    /// handler failures, is a complete response.
    pub fn dispatch(&self, path: Option<&str>) -> HttpResponse {
        let Some(path) = path else {
            warn!("Request without GET line");
            return HttpResponse::html(StatusCode::BAD_REQUEST, NO_GET_BODY);
        };

        let start = Instant::now();
        let route = classify(path);
        let response = match self.dispatch_route(route, path) {
            Ok(response) => response,
            Err(err) => {
                warn!(route = %route, path = %path, error = %err, "Route handler rejected request");
                HttpResponse::html(err.status(), err.body())
            }
        };

        info!(
            route = %route,
            path = %path,
            status = response.status().as_u16(),
            latency_us = start.elapsed().as_micros() as u64,
            "Request dispatched"
        );
        response
    }

    /// Run `route`'s handler against the raw `path`.
    pub fn dispatch_route(&self, route: Route, path: &str) -> Result<HttpResponse, RouteError> {
        match route {
            Route::Root => handlers::root::handle(&self.www),
            Route::RandomJson => handlers::random::json(&mut rand::rng()),
            Route::RandomPage => handlers::random::page(&self.www),
            Route::Cat => handlers::cat::handle(&self.images, &route.strip_token(path)),
            Route::FtToCm => handlers::ft_to_cm::handle(&route.strip_token(path)),
            Route::File => handlers::file::handle(&self.files, &route.strip_token(path)),
            Route::Multiply => handlers::multiply::handle(&route.strip_token(path)),
            Route::Github => handlers::github::handle(
                self.fetcher.as_ref(),
                &self.github_api,
                &route.strip_token(path),
            ),
            Route::Unrecognized => Ok(HttpResponse::html(
                StatusCode::BAD_REQUEST,
                UNRECOGNIZED_BODY,
            )),
        }
    }
}
