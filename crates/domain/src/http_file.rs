//! `.http` request file rendering.
//!
//! Produces the plain-text request format read by httpyac and REST Client:
//!
//! ```text
//! POST https://api.example.com/login
//! Content-Type: application/json
//!
//! {"user": "a"}
//! ```

use std::fmt::Write as _;

use crate::request::{Request, Url};

/// Render a request as an `.http` file.
///
/// The request line is `<method> <url>`, followed by one `<key>: <value>`
/// line per header in order, a blank line, and the body text if there is a
/// body. Nothing is validated, escaped or deduplicated.
#[must_use]
pub fn render_request(request: &Request) -> String {
    let mut out = String::new();

    let url = request.url.as_ref().map(Url::raw).unwrap_or_default();
    let _ = writeln!(out, "{} {url}", request.method);

    for header in &request.headers {
        let _ = writeln!(out, "{}: {}", header.key, header.value);
    }

    out.push('\n');

    if let Some(body) = &request.body {
        out.push_str(body.raw());
    }

    out
}
