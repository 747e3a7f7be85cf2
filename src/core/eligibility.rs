//! Eligibility rules for the FICA reduction program.
//!
//! Eligibility is derived on demand and never stored. All failing rules are
//! reported together so a business sees every blocker at once.

use crate::{
    core::{business_owner::get_business_owner, employee::count_employees_for_business},
    entities::Industry,
    errors::Result,
};
use sea_orm::DatabaseConnection;
use serde::Serialize;

/// Smallest headcount that qualifies.
pub const MIN_EMPLOYEES: u64 = 2;
/// Smallest number of whole years in operation that qualifies.
pub const MIN_YEARS_IN_BUSINESS: i32 = 1;

pub const REASON_TOO_FEW_EMPLOYEES: &str = "Business must have at least 2 employees";
pub const REASON_TOO_YOUNG: &str = "Business must be operating for at least 1 year";
pub const REASON_RESTRICTED_INDUSTRY: &str = "Industry type may require special review";
pub const REASON_ALL_MET: &str = "All eligibility criteria met";

/// Outcome of an eligibility check, as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EligibilityReport {
    pub eligible: bool,
    pub employee_count: u64,
    pub years_in_business: i32,
    pub industry: Industry,
    /// Every failed rule, or a single success message
    pub reasons: Vec<String>,
}

/// Evaluates the rules against already-loaded facts.
#[must_use]
pub fn evaluate(
    employee_count: u64,
    years_in_business: i32,
    industry: Industry,
) -> EligibilityReport {
    let mut failures = Vec::new();

    if employee_count < MIN_EMPLOYEES {
        failures.push(REASON_TOO_FEW_EMPLOYEES);
    }
    if years_in_business < MIN_YEARS_IN_BUSINESS {
        failures.push(REASON_TOO_YOUNG);
    }
    if industry == Industry::Other {
        failures.push(REASON_RESTRICTED_INDUSTRY);
    }

    let eligible = failures.is_empty();
    let reasons = if eligible {
        vec![REASON_ALL_MET.to_string()]
    } else {
        failures.into_iter().map(ToString::to_string).collect()
    };

    EligibilityReport {
        eligible,
        employee_count,
        years_in_business,
        industry,
        reasons,
    }
}

/// Checks whether a business qualifies for the program.
///
/// # Errors
/// Returns [`crate::errors::Error::NotFound`] if the owner does not exist.
pub async fn check_eligibility(
    db: &DatabaseConnection,
    owner_id: &str,
) -> Result<EligibilityReport> {
    let owner = get_business_owner(db, owner_id).await?;
    let employee_count = count_employees_for_business(db, owner_id).await?;
    Ok(evaluate(employee_count, owner.years_in_business, owner.industry))
}
