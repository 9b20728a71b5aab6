//! Static pages.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Welcome to the App</title>
    <style>
        main {
            display: flex;
            min-height: 100vh;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            padding: 6rem;
            font-family: Arial, sans-serif;
        }
        h1 { font-size: 2.25rem; font-weight: 700; }
        p { margin-top: 1rem; }
    </style>
</head>
<body>
    <main>
        <h1>Welcome to the App</h1>
        <p>Getting started with Next.js and Flask</p>
    </main>
</body>
</html>
"#;

const NOT_FOUND_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>404: This page could not be found</title>
</head>
<body>
    <h1>404</h1>
    <p>This page could not be found.</p>
</body>
</html>
"#;

/// `GET /`
pub async fn landing_page() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

/// Fallback for unknown paths.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE))
}
