//! Request payloads accepted by the backend.
//!
//! These are the input side of the input/stored split: they carry only what a
//! client may supply, and are validated before anything touches the store.
//! Stored records live in [`crate::entities`].

use crate::entities::{ApplicationStatus, BusinessType, Industry, PlanType};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, de};
use validator::Validate;

/// Parses a calendar date from `YYYY-MM-DD` or an ISO 8601 datetime.
///
/// A datetime keeps the date as written; any offset is not applied.
#[must_use]
pub fn parse_date_or_datetime(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| raw.parse::<NaiveDateTime>().ok().map(|dt| dt.date()))
}

fn date_or_datetime<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date_or_datetime(&raw).ok_or_else(|| {
        de::Error::custom(format!(
            "invalid date '{raw}', expected YYYY-MM-DD or an ISO 8601 datetime"
        ))
    })
}

/// Payload for registering a new business owner
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BusinessOwnerCreate {
    pub first_name: String,
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub phone: String,
    pub business_name: String,
    pub business_type: BusinessType,
    pub industry: Industry,
    pub tax_id: String,
    #[validate(range(min = 0))]
    pub years_in_business: i32,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

/// Payload for adding an employee to a business
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EmployeeCreate {
    pub business_owner_id: String,
    pub first_name: String,
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub phone: String,
    pub job_title: String,
    #[validate(range(min = 0.0))]
    pub annual_salary: f64,
    #[serde(deserialize_with = "date_or_datetime")]
    pub hire_date: NaiveDate,
    #[serde(deserialize_with = "date_or_datetime")]
    pub birth_date: NaiveDate,
    #[serde(default)]
    pub has_current_health_insurance: bool,
    #[serde(default)]
    pub has_current_life_insurance: bool,
    #[validate(range(min = 0.0))]
    pub current_health_premium: Option<f64>,
    #[validate(range(min = 0.0))]
    pub current_life_premium: Option<f64>,
}

/// Payload for adding a plan to the catalog
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BenefitPlanCreate {
    pub name: String,
    pub plan_type: PlanType,
    pub description: String,
    #[validate(range(min = 0.0))]
    pub monthly_premium_per_employee: f64,
    pub coverage_amount: Option<f64>,
    pub deductible: Option<f64>,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Payload for opening an enrollment application
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationCreate {
    pub business_owner_id: String,
    pub selected_health_plan_id: Option<String>,
    pub selected_life_plan_id: Option<String>,
    pub notes: Option<String>,
}

/// Partial update of an application; `None` fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationUpdate {
    pub status: Option<ApplicationStatus>,
    pub selected_health_plan_id: Option<String>,
    pub selected_life_plan_id: Option<String>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_employee_with_defaults() {
        let json = r#"{
            "business_owner_id": "owner-1",
            "first_name": "Jane",
            "last_name": "Smith",
            "email": "jane.smith@testbusiness.com",
            "phone": "555-987-6543",
            "job_title": "Software Engineer",
            "annual_salary": 75000.0,
            "hire_date": "2023-01-15",
            "birth_date": "1990-05-20"
        }"#;

        let employee: EmployeeCreate = serde_json::from_str(json).unwrap();
        assert!(!employee.has_current_health_insurance);
        assert!(!employee.has_current_life_insurance);
        assert!(employee.current_health_premium.is_none());
        assert_eq!(
            employee.hire_date,
            NaiveDate::from_ymd_opt(2023, 1, 15).unwrap()
        );
        assert!(employee.validate().is_ok());
    }

    #[test]
    fn test_employee_dates_accept_datetimes() {
        let json = r#"{
            "business_owner_id": "owner-1",
            "first_name": "Jane",
            "last_name": "Smith",
            "email": "jane.smith@testbusiness.com",
            "phone": "555-987-6543",
            "job_title": "Software Engineer",
            "annual_salary": 75000.0,
            "hire_date": "2023-01-15T00:00:00",
            "birth_date": "1990-05-20T08:30:00.000Z"
        }"#;

        let employee: EmployeeCreate = serde_json::from_str(json).unwrap();
        assert_eq!(
            employee.hire_date,
            NaiveDate::from_ymd_opt(2023, 1, 15).unwrap()
        );
        assert_eq!(
            employee.birth_date,
            NaiveDate::from_ymd_opt(1990, 5, 20).unwrap()
        );
    }

    #[test]
    fn test_parse_date_or_datetime() {
        let expected = NaiveDate::from_ymd_opt(2023, 1, 15);
        assert_eq!(parse_date_or_datetime("2023-01-15"), expected);
        assert_eq!(parse_date_or_datetime("2023-01-15T00:00:00"), expected);
        assert_eq!(parse_date_or_datetime("2023-01-15T23:59:59.5"), expected);
        assert_eq!(parse_date_or_datetime("2023-01-15T23:00:00-05:00"), expected);
        assert_eq!(parse_date_or_datetime("15/01/2023"), None);
        assert_eq!(parse_date_or_datetime(""), None);
    }

    #[test]
    fn test_negative_salary_fails_validation() {
        let json = r#"{
            "business_owner_id": "owner-1",
            "first_name": "Jane",
            "last_name": "Smith",
            "email": "jane.smith@testbusiness.com",
            "phone": "555-987-6543",
            "job_title": "Software Engineer",
            "annual_salary": -1.0,
            "hire_date": "2023-01-15",
            "birth_date": "1990-05-20"
        }"#;

        let employee: EmployeeCreate = serde_json::from_str(json).unwrap();
        assert!(employee.validate().is_err());
    }

    #[test]
    fn test_unknown_industry_is_rejected() {
        let json = r#"{
            "first_name": "John",
            "last_name": "Doe",
            "email": "john.doe@testbusiness.com",
            "phone": "555-123-4567",
            "business_name": "Test Business LLC",
            "business_type": "llc",
            "industry": "mining",
            "tax_id": "12-3456789",
            "years_in_business": 5,
            "address": "123 Business St",
            "city": "Business City",
            "state": "CA",
            "zip_code": "90210"
        }"#;

        assert!(serde_json::from_str::<BusinessOwnerCreate>(json).is_err());
    }

    #[test]
    fn test_application_update_omitted_fields_are_none() {
        let patch: ApplicationUpdate = serde_json::from_str(r#"{"notes": "x"}"#).unwrap();
        assert!(patch.status.is_none());
        assert!(patch.selected_health_plan_id.is_none());
        assert_eq!(patch.notes.as_deref(), Some("x"));
    }
}
