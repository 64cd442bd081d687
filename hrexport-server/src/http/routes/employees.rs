//! Employee export endpoint
//!
//! `offset` and `limit` are applied to the query: the response is the
//! requested window of rows ordered by `employee_id`.

use std::sync::Arc;

use axum::{routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::{DbSession, ValidPage};
use crate::http::server::AppState;
use crate::models::Employee;

/// Export path for the employees table
pub const EMPLOYEES_PATH: &str = "/data/export/hr_sample/tables/employees/";

/// GET /data/export/hr_sample/tables/employees/?offset=&limit=
///
/// The page is validated before the session is opened; the session is
/// dropped when this function returns, before the body is written.
async fn list_employees(
    ValidPage(page): ValidPage,
    mut session: DbSession,
) -> Result<Json<Vec<Employee>>, ApiError> {
    let employees = session.list_employees(page).await?;
    Ok(Json(employees))
}

/// Employee routes, with and without the trailing slash
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(EMPLOYEES_PATH, get(list_employees))
        .route(EMPLOYEES_PATH.trim_end_matches('/'), get(list_employees))
}
