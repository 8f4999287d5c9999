use crate::error::RouteError;
use crate::server::response::HttpResponse;
use crate::static_files::StaticFiles;

/// Placeholder in `root.html` replaced by the directory listing.
pub const LINKS_PLACEHOLDER: &str = "${links}";

/// Render directory entries as an HTML bullet list.
pub fn build_file_list(names: &[String]) -> String {
    if names.is_empty() {
        return "No files in directory".to_string();
    }
    let items: String = names
        .iter()
        .map(|name| format!("<li>{}</li>", name))
        .collect();
    format!("<ul>\n{}</ul>\n", items)
}

/// `GET /`: The welcome page with the `www` listing spliced in.
pub fn handle(www: &StaticFiles) -> Result<HttpResponse, RouteError> {
    let page = www.read_to_string("root.html")?;
    let links = build_file_list(&www.list()?);
    Ok(HttpResponse::ok_html(page.replace(LINKS_PLACEHOLDER, &links)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_file_list() {
        let names = vec!["a.html".to_string(), "b.html".to_string()];
        assert_eq!(
            build_file_list(&names),
            "<ul>\n<li>a.html</li><li>b.html</li></ul>\n"
        );
        assert_eq!(build_file_list(&[]), "No files in directory");
    }
}
