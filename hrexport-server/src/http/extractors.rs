//! Custom Axum extractors
//!
//! Extractors run in argument order. Handlers take [`ValidPage`] before
//! [`DbSession`] so bad input is rejected before a session is opened.

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use super::error::ApiError;
use super::server::AppState;
use crate::db::Session;
use crate::models::{Page, PageParams, ValidationError};

/// Extract and validate `offset` / `limit` from the query string
#[derive(Debug)]
pub struct ValidPage(pub Page);

impl<S> FromRequestParts<S> for ValidPage
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<PageParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                ApiError::Validation(ValidationError::MalformedQuery {
                    reason: e.body_text(),
                })
            })?;

        let page = Page::try_from(params)?;
        Ok(Self(page))
    }
}

/// A database session scoped to one request.
///
/// Dropped (and its connection released) when the handler returns, whether it
/// succeeded or failed.
pub struct DbSession(Box<dyn Session>);

impl Deref for DbSession {
    type Target = dyn Session;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl DerefMut for DbSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.0.as_mut()
    }
}

impl FromRequestParts<Arc<AppState>> for DbSession {
    type Rejection = ApiError;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let session = state.sessions().open().await?;
        Ok(Self(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{Request, StatusCode};

    async fn extract(uri: &str) -> Result<Page, ApiError> {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        ValidPage::from_request_parts(&mut parts, &())
            .await
            .map(|ValidPage(page)| page)
    }

    #[tokio::test]
    async fn extracts_defaults() {
        let page = extract("/employees/").await.unwrap();
        assert_eq!(page, Page::default());
    }

    #[tokio::test]
    async fn extracts_values() {
        let page = extract("/employees/?offset=20&limit=5").await.unwrap();
        assert_eq!(page, Page { offset: 20, limit: 5 });
    }

    #[tokio::test]
    async fn rejects_limit_over_100() {
        let err = extract("/employees/?limit=101").await.unwrap_err();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn rejects_wrong_type() {
        let err = extract("/employees/?offset=first").await.unwrap_err();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn rejects_repeated_key() {
        let err = extract("/employees/?limit=1&limit=2").await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Validation(ValidationError::MalformedQuery { .. })
        ));
    }
}
