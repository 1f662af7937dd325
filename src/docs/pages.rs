//! Rendered documentation pages.
//!
//! `/api/all` serves an HTML index describing every data endpoint, built
//! from a static table of descriptors. Unmatched routes get a rendered
//! error page. Both pages are assembled inline; there is no template file
//! to load, so rendering cannot fail at request time.

use axum::http::StatusCode;
use axum::response::Html;

/// One entry on the API index page.
struct ApiCall {
    method: &'static str,
    path: &'static str,
    description: &'static str,
    usage: &'static str,
    body: Option<&'static str>,
    example: &'static str,
}

/// The endpoint table rendered by `/api/all`. Kept next to the renderer so
/// route changes and their documentation move together.
const API_CALLS: &[ApiCall] = &[
    ApiCall {
        method: "POST",
        path: "/api/insertdata",
        description: "Inserts a new message into the database.",
        usage: "Send a POST request to /api/insertdata.",
        body: Some(
            r#"{
    "name": "John Doe",
    "email": "john@example.com",
    "message": "Hello, World!",
    "status": true
}"#,
        ),
        example: r#"curl -X POST -H 'Content-Type: application/json' \
-d '{"name": "John Doe", "email": "john@example.com", "message": "Hello, World!", "status": true}' \
http://localhost:8080/api/insertdata"#,
    },
    ApiCall {
        method: "GET",
        path: "/api/getdata",
        description: "Retrieves all messages from the database.",
        usage: "Send a GET request to /api/getdata.",
        body: None,
        example: "curl http://localhost:8080/api/getdata",
    },
    ApiCall {
        method: "PUT",
        path: "/api/updatedata/{id}",
        description: "Updates an existing message in the database.",
        usage: "Send a PUT request to /api/updatedata/{id}.",
        body: Some(
            r#"{
    "name": "Updated Name",
    "email": "updated@example.com",
    "message": "Updated message",
    "status": false
}"#,
        ),
        example: r#"curl -X PUT -H 'Content-Type: application/json' \
-d '{"name": "Updated Name", "email": "updated@example.com", "message": "Updated message", "status": false}' \
http://localhost:8080/api/updatedata/12345678"#,
    },
    ApiCall {
        method: "DELETE",
        path: "/api/deletedata/{id}",
        description: "Deletes a message from the database.",
        usage: "Send a DELETE request to /api/deletedata/{id}.",
        body: None,
        example: "curl -X DELETE http://localhost:8080/api/deletedata/12345678",
    },
    ApiCall {
        method: "PATCH",
        path: "/api/patchdata/{id}",
        description: "Partially updates an existing message in the database.",
        usage: "Send a PATCH request to /api/patchdata/{id}.",
        body: Some(
            r#"{
    "status": false
}"#,
        ),
        example: r#"curl -X PATCH -H 'Content-Type: application/json' \
-d '{"status": false}' \
http://localhost:8080/api/patchdata/12345678"#,
    },
];

/// Handler for `GET /api/all`: the self-describing API index.
pub async fn api_index() -> Html<String> {
    let mut sections = String::new();
    for call in API_CALLS {
        let body = call
            .body
            .map(|b| format!("<h4>Body</h4>\n<pre>{b}</pre>\n"))
            .unwrap_or_default();
        sections.push_str(&format!(
            r#"<section class="endpoint {method_lower}">
<h2><span class="method">{method}</span> {path}</h2>
<p>{description}</p>
<p><em>{usage}</em></p>
<h4>Headers</h4>
<pre>Content-Type: application/json</pre>
{body}<h4>Example</h4>
<pre>{example}</pre>
</section>
"#,
            method_lower = call.method.to_lowercase(),
            method = call.method,
            path = call.path,
            description = call.description,
            usage = call.usage,
            body = body,
            example = call.example,
        ));
    }

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Contactbox API</title>
<style>
body {{ font-family: sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; }}
section.endpoint {{ border: 1px solid #ddd; border-radius: 6px; padding: 1rem; margin-bottom: 1.5rem; }}
span.method {{ font-family: monospace; background: #eef; padding: 0.1rem 0.4rem; border-radius: 4px; }}
pre {{ background: #f6f6f6; padding: 0.6rem; overflow-x: auto; }}
</style>
</head>
<body>
<h1>Contactbox API</h1>
<p>All endpoints accept and return JSON unless noted otherwise.</p>
{sections}</body>
</html>
"#
    ))
}

/// Fallback handler: renders the error page for any unmatched route.
pub async fn not_found_page() -> (StatusCode, Html<&'static str>) {
    (
        StatusCode::NOT_FOUND,
        Html(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Not Found</title>
<style>
body { font-family: sans-serif; max-width: 40rem; margin: 4rem auto; text-align: center; }
</style>
</head>
<body>
<h1>404 - Not Found</h1>
<p>The requested URL does not match any API endpoint.</p>
<p>See <a href="/api/all">/api/all</a> for the list of available endpoints.</p>
</body>
</html>
"#,
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn index_lists_every_endpoint() {
        let Html(page) = api_index().await;
        for path in [
            "/api/insertdata",
            "/api/getdata",
            "/api/updatedata/{id}",
            "/api/deletedata/{id}",
            "/api/patchdata/{id}",
        ] {
            assert!(page.contains(path), "index missing {path}");
        }
    }

    #[tokio::test]
    async fn not_found_page_is_404() {
        let (status, _) = not_found_page().await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
