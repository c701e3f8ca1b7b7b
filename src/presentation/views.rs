use crate::application::error::HttpError;
use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Page sizes offered by the browser viewer.
pub const VIEWER_PAGE_SIZES: [u32; 3] = [3, 5, 10];
pub const VIEWER_DEFAULT_PAGE_SIZE: u32 = 5;

pub fn render_template<T: Template>(template: T) -> Result<Html<String>, HttpError> {
    template.render().map(Html).map_err(|err| {
        HttpError::from_error(
            "presentation::views::render_template",
            StatusCode::INTERNAL_SERVER_ERROR,
            "Template rendering failed",
            &err,
        )
    })
}

pub fn render_template_response<T: Template>(template: T, status: StatusCode) -> Response {
    match render_template(template) {
        Ok(html) => (status, html).into_response(),
        Err(err) => err.into_response(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSizeOption {
    pub value: u32,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub title: &'static str,
    pub posts_endpoint: &'static str,
    pub page_sizes: Vec<PageSizeOption>,
}

impl IndexTemplate {
    pub fn viewer() -> Self {
        let page_sizes = VIEWER_PAGE_SIZES
            .iter()
            .map(|&value| PageSizeOption {
                value,
                selected: value == VIEWER_DEFAULT_PAGE_SIZE,
            })
            .collect();

        Self {
            title: "Post Viewer",
            posts_endpoint: "/posts",
            page_sizes,
        }
    }
}
