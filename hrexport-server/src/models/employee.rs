//! Employee record as stored in `employees`
//!
//! Field order and nullability mirror the table definition. The struct is
//! both the row decoder and the JSON wire shape.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the `employees` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub employee_id: i32,
    /// VARCHAR(20)
    pub first_name: Option<String>,
    /// VARCHAR(25) NOT NULL
    pub last_name: String,
    /// VARCHAR(100) NOT NULL
    pub email: String,
    /// VARCHAR(20)
    pub phone_number: Option<String>,
    /// Serialized as `YYYY-MM-DD`
    pub hire_date: NaiveDate,
    pub job_id: i32,
    /// Serialized as a decimal string with the stored scale (`"75000.00"`)
    pub salary: Decimal,
    pub manager_id: Option<i32>,
    pub department_id: Option<i32>,
}

impl Employee {
    /// Table the record is read from.
    pub const TABLE: &'static str = "employees";

    /// Column list in storage order.
    pub const COLUMNS: [&'static str; 10] = [
        "employee_id",
        "first_name",
        "last_name",
        "email",
        "phone_number",
        "hire_date",
        "job_id",
        "salary",
        "manager_id",
        "department_id",
    ];
}
