use std::error::Error as StdError;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use metrics::counter;

use crate::application::error::ErrorReport;
use crate::application::pagination::ListPostsError;

use super::models::{ApiMessage, GENERIC_FAILURE_MESSAGE, INVALID_PAGINATION_MESSAGE};

/// JSON failure. Clients only ever see the public message; the full error
/// chain travels in an [`ErrorReport`] for the logging middleware.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
    report: ErrorReport,
}

impl ApiError {
    pub fn internal(source: &'static str, error: &dyn StdError) -> Self {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        Self {
            status,
            message: GENERIC_FAILURE_MESSAGE,
            report: ErrorReport::from_error(source, status, error),
        }
    }

    pub fn bad_request(source: &'static str, error: &dyn StdError) -> Self {
        let status = StatusCode::BAD_REQUEST;
        Self {
            status,
            message: INVALID_PAGINATION_MESSAGE,
            report: ErrorReport::from_error(source, status, error),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<ListPostsError> for ApiError {
    fn from(error: ListPostsError) -> Self {
        match &error {
            ListPostsError::InvalidParams(_) => {
                ApiError::bad_request("infra::http::api::list_posts", &error)
            }
            ListPostsError::Repo(_) => {
                counter!("postboard_posts_failures_total").increment(1);
                ApiError::internal("infra::http::api::list_posts", &error)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiMessage { msg: self.message };
        let mut response = (self.status, Json(body)).into_response();
        self.report.attach(&mut response);
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::repos::RepoError;
    use crate::domain::error::DomainError;

    #[test]
    fn store_failures_are_generic_500s() {
        let err = ApiError::from(ListPostsError::Repo(RepoError::Timeout));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = err.into_response();
        let report = response
            .extensions()
            .get::<ErrorReport>()
            .expect("report attached");
        assert_eq!(report.messages, vec!["database timeout".to_string()]);
    }

    #[test]
    fn invalid_params_are_400s() {
        let err = ApiError::from(ListPostsError::InvalidParams(DomainError::validation(
            "bad page",
        )));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
