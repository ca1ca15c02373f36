//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct HomeTemplate;

/// Display the home page.
pub async fn index() -> HomeTemplate {
    HomeTemplate
}
