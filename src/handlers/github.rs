use crate::error::RouteError;
use crate::handlers::require_query;
use crate::server::response::HttpResponse;
use crate::upstream::RepoFetcher;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
pub struct Owner {
    pub login: String,
}

/// The fields read from each element of the GitHub response array.
#[derive(Debug, Deserialize)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub id: i64,
    pub owner: Owner,
}

/// Parse a GitHub JSON array into repositories.
pub fn parse_repositories(json: &str) -> Result<Vec<Repository>, serde_json::Error> {
    serde_json::from_str(json)
}

pub fn render_repositories(repos: &[Repository]) -> String {
    repos
        .iter()
        .map(|repo| {
            format!(
                "Full Name: {}\n\nID: {}\n\nLogin: {}\n\n",
                repo.full_name, repo.id, repo.owner.login
            )
        })
        .collect()
}

/// `GET /github?query=<GitHub REST path>`
///
/// Fetches `<api_base>/<query>` and lists each repository's full name, id
/// and owner login. Fetch and decoding failures become a 400 carrying the
/// failure's message.
pub fn handle(
    fetcher: &dyn RepoFetcher,
    api_base: &str,
    query: &str,
) -> Result<HttpResponse, RouteError> {
    let params = require_query(query, "github")?;
    let target = params.get("query").ok_or_else(|| {
        RouteError::MissingArgument(
            "Does not contain correct query argument. Check if you inputted query correctly.\n"
                .to_string(),
        )
    })?;

    let url = format!("{}/{}", api_base.trim_end_matches('/'), target);
    let json = fetcher
        .fetch(&url)
        .map_err(|e| RouteError::Upstream(e.to_string()))?;
    let repos = parse_repositories(&json).map_err(|e| RouteError::Upstream(e.to_string()))?;

    for repo in &repos {
        debug!(name = %repo.name, full_name = %repo.full_name, "Repository listed");
    }
    Ok(HttpResponse::ok_html(render_repositories(&repos)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_render() {
        let json = r#"[{"name":"linux","full_name":"torvalds/linux","id":2325298,
            "owner":{"login":"torvalds","id":1024025},"private":false}]"#;
        let repos = parse_repositories(json).unwrap();
        assert_eq!(
            render_repositories(&repos),
            "Full Name: torvalds/linux\n\nID: 2325298\n\nLogin: torvalds\n\n"
        );
    }

    #[test]
    fn test_object_instead_of_array_fails() {
        assert!(parse_repositories(r#"{"message":"Not Found"}"#).is_err());
    }

    #[test]
    fn test_missing_owner_fails() {
        assert!(parse_repositories(r#"[{"name":"a","full_name":"b/a","id":1}]"#).is_err());
    }
}
