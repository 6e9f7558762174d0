//! The `/gui` page.
//!
//! A minimal HTML landing page. External test suites use it purely as a
//! liveness probe: a 200 here means the system is ready.

use axum::response::Html;
use tracing::debug;

const GUI_PAGE: &str = "<!DOCTYPE html>\n\
<html>\n\
<head><title>thingd</title></head>\n\
<body>\n\
<h1>thingd</h1>\n\
<p>REST entity/relationship server. Entities: <a href=\"/projects\">projects</a>,\n\
<a href=\"/todos\">todos</a>, <a href=\"/categories\">categories</a>.</p>\n\
</body>\n\
</html>\n";

/// Handler for the `/gui` liveness page.
///
/// # HTTP Request
///
/// `GET [base]/gui`
///
/// # Response
///
/// - `200 OK` - always, with a small HTML page
pub async fn gui_handler() -> Html<&'static str> {
    debug!("Processing gui request");
    Html(GUI_PAGE)
}
