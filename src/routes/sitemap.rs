use axum::response::Html;

use crate::routes::collection_paths;

/// Non-resource endpoints linked from the landing page.
const EXTRA_ENDPOINTS: &[&str] = &["/health", "/docs"];

pub fn endpoints() -> Vec<&'static str> {
    collection_paths()
        .chain(EXTRA_ENDPOINTS.iter().copied())
        .collect()
}

pub async fn sitemap() -> Html<String> {
    let links: String = endpoints()
        .into_iter()
        .map(|path| format!("<li><a href=\"{path}\">{path}</a></li>"))
        .collect();

    Html(format!(
        "<div style=\"text-align: center;\">\
         <h1>Star Wars Blog API</h1>\
         <p>Available endpoints:</p>\
         <ul style=\"list-style: none;\">{links}</ul>\
         <p>Items can be fetched by id, e.g. <code>/user/1</code>, and their \
         favorites with <code>/user/1/favorites</code>.</p>\
         </div>"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_every_routed_collection() {
        let Html(page) = sitemap().await;
        for path in collection_paths() {
            assert!(page.contains(&format!("href=\"{path}\"")), "missing {path}");
        }
        assert_eq!(collection_paths().count(), 4);
    }
}
