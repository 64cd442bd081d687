//! Employee repository
//!
//! Read-only. Runs against a single borrowed connection so every statement
//! of a request goes through that request's session.

use sqlx::PgConnection;

use crate::db::StorageError;
use crate::models::{Employee, Page};

/// Paged read over `employees`, columns in storage order.
///
/// Ordered by primary key so that offset/limit windows are stable.
pub const EMPLOYEES_QUERY: &str = r#"
    SELECT
        employee_id,
        first_name,
        last_name,
        email,
        phone_number,
        hire_date,
        job_id,
        salary,
        manager_id,
        department_id
    FROM employees
    ORDER BY employee_id
    LIMIT $1 OFFSET $2
"#;

/// Employee repository
pub struct EmployeeRepo<'c> {
    conn: &'c mut PgConnection,
}

impl<'c> EmployeeRepo<'c> {
    pub fn new(conn: &'c mut PgConnection) -> Self {
        Self { conn }
    }

    /// List one page of employees.
    pub async fn list(&mut self, page: Page) -> Result<Vec<Employee>, StorageError> {
        let rows = sqlx::query_as::<_, Employee>(EMPLOYEES_QUERY)
            .bind(page.sql_limit())
            .bind(page.sql_offset())
            .fetch_all(&mut *self.conn)
            .await?;

        tracing::debug!(
            offset = page.offset,
            limit = page.limit,
            rows = rows.len(),
            "listed employees"
        );
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_selects_columns_in_storage_order() {
        let select = EMPLOYEES_QUERY
            .split("FROM")
            .next()
            .unwrap()
            .trim()
            .trim_start_matches("SELECT");
        let columns: Vec<&str> = select.split(',').map(str::trim).collect();
        assert_eq!(columns, Employee::COLUMNS);
    }

    #[test]
    fn query_applies_pagination() {
        assert!(EMPLOYEES_QUERY.contains(&format!("FROM {}", Employee::TABLE)));
        assert!(EMPLOYEES_QUERY.contains("ORDER BY employee_id"));
        assert!(EMPLOYEES_QUERY.contains("LIMIT $1 OFFSET $2"));
    }
}
