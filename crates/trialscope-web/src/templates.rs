//! Page templates, compiled into the binary.
//!
//! Templates named `*.html` are auto-escaped by minijinja, which covers both
//! user input echoed back into the form and text coming from the registry.

use axum::response::Html;
use minijinja::{Environment, Value};
use crate::error::WebError;

pub const SEARCH_PAGE: &str = "search.html";
pub const RESULTS_PAGE: &str = "results.html";

pub fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("base.html", include_str!("../templates/base.html"))?;
    env.add_template(SEARCH_PAGE, include_str!("../templates/search.html"))?;
    env.add_template(RESULTS_PAGE, include_str!("../templates/results.html"))?;
    Ok(env)
}

pub fn render(env: &Environment<'_>, name: &str, ctx: Value) -> Result<Html<String>, WebError> {
    let html = env.get_template(name)?.render(ctx)?;
    Ok(Html(html))
}
