//! Student request / response shapes

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::shared::validations::{not_blank, violation};

pub const MIN_AGE: i32 = 18;
pub const MAX_AGE: i32 = 100;

/// Create / update student request
///
/// Missing or `null` text fields are read as empty strings so they are
/// reported as blank by validation rather than as a parse error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        custom(function = "not_blank", message = "Name cannot be blank"),
        length(min = 2, max = 50, message = "Name must be between 2 and 50 characters")
    )]
    #[schema(example = "Ada Lovelace", min_length = 2, max_length = 50)]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(custom(function = "not_blank", message = "Course cannot be blank"))]
    #[schema(example = "Mathematics")]
    pub course: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(
        custom(function = "not_blank", message = "Email cannot be blank"),
        email(message = "Invalid email format")
    )]
    #[schema(example = "ada@example.com")]
    pub email: String,

    #[validate(
        required(message = "Age cannot be blank"),
        custom(function = "age_in_range")
    )]
    #[schema(example = 21, minimum = 18, maximum = 100)]
    pub age: Option<i32>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn age_in_range(age: i32) -> Result<(), ValidationError> {
    if age < MIN_AGE {
        return Err(violation("range", "Age must be greater than 18"));
    }
    if age > MAX_AGE {
        return Err(violation("range", "Age is very high"));
    }
    Ok(())
}

/// Student API representation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub id: i32,
    pub name: String,
    pub course: String,
    pub email: String,
    /// ISO date (YYYY-MM-DD)
    pub enrollment_date: NaiveDate,
}

/// Search query parameters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Exact, case-sensitive course name
    pub course: String,
}
