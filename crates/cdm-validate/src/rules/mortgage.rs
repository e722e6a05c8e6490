//! Mortgage business rules.

use cdm_model::is_truthy;
use serde_json::Value;

use super::{RuleError, field, inconsistency, number, section};
use crate::config::LTV_TOLERANCE;
use crate::issue::{Issue, display_value};

pub const LTV_CONSISTENCY: &str = "LTV_Consistency";
pub const TYPE_CONSISTENCY: &str = "Type_Consistency";
pub const SHARED_OWNERSHIP_CONSISTENCY: &str = "Shared_Ownership_Consistency";
pub const EMPLOYMENT_CONSISTENCY: &str = "Employment_Consistency";
pub const DEFAULT_CONSISTENCY: &str = "Default_Consistency";

/// Youngest plausible retirement age.
const MIN_RETIREMENT_AGE: f64 = 55.0;
/// Earliest plausible working age.
const MIN_WORKING_AGE: f64 = 16.0;

pub fn check(record: &Value, issues: &mut Vec<Issue>) -> Result<(), RuleError> {
    let financial = section(record, &["Mortgage", "FinancialTerms"])?;
    let current = section(record, &["Mortgage", "CurrentStatus"])?;
    let features = section(record, &["Mortgage", "Features"])?;
    let application = section(record, &["Mortgage", "Application"])?;
    let borrower = section(record, &["Mortgage", "BorrowerDetails"])?;
    let default = section(record, &["Mortgage", "Default"])?;

    // LTV
    let purchase_value = field(financial, "PurchaseValue");
    let original_loan = field(financial, "OriginalLoan");
    let outstanding_balance = field(current, "OutstandingBalance");

    if let (Some(purchase), Some(loan)) = (truthy(purchase_value), truthy(original_loan)) {
        let calculated = number(loan, "OriginalLoan")? / number(purchase, "PurchaseValue")?;
        let reported = reported_ratio(field(financial, "OriginalLTV"), "OriginalLTV")?;
        if (calculated - reported).abs() > LTV_TOLERANCE {
            issues.push(inconsistency(
                LTV_CONSISTENCY,
                format!("Original LTV mismatch: calculated {calculated:.4} vs reported {reported:.4}"),
            ));
        }
    }

    if let (Some(purchase), Some(balance)) = (truthy(purchase_value), truthy(outstanding_balance)) {
        let calculated =
            number(balance, "OutstandingBalance")? / number(purchase, "PurchaseValue")?;
        let reported = reported_ratio(field(current, "CurrentLTV"), "CurrentLTV")?;
        if (calculated - reported).abs() > LTV_TOLERANCE {
            issues.push(inconsistency(
                LTV_CONSISTENCY,
                format!("Current LTV mismatch: calculated {calculated:.4} vs reported {reported:.4}"),
            ));
        }
    }

    // Mortgage type
    let mortgage_type = field(features, "MortgageType").and_then(Value::as_str);
    let occupancy_type = field(application, "OccupancyType").and_then(Value::as_str);

    if mortgage_type == Some("Buy-to-Let") && occupancy_type == Some("PrimaryResidence") {
        issues.push(inconsistency(
            TYPE_CONSISTENCY,
            "Buy-to-Let mortgage should not have PrimaryResidence occupancy",
        ));
    }

    if mortgage_type == Some("Shared Ownership") {
        let valid = match truthy(field(features, "SharedOwnershipShare")) {
            Some(share) => {
                let share = number(share, "SharedOwnershipShare")?;
                share > 0.0 && share < 1.0
            }
            None => false,
        };
        if !valid {
            issues.push(inconsistency(
                SHARED_OWNERSHIP_CONSISTENCY,
                "Shared Ownership mortgages must have valid ownership share (0 < share < 1)",
            ));
        }
    }

    // Age and employment
    let age = truthy(field(borrower, "BorrowerAge"));
    let employment = field(borrower, "BorrowerEmployment").and_then(Value::as_str);
    let years_employment = truthy(field(borrower, "YearsInCurrentEmployment"));

    if let Some(age) = age
        && employment == Some("Retired")
        && number(age, "BorrowerAge")? < MIN_RETIREMENT_AGE
    {
        issues.push(inconsistency(
            EMPLOYMENT_CONSISTENCY,
            format!("Borrower age {} seems young for retirement", display_value(age)),
        ));
    }

    if let (Some(years), Some(age)) = (years_employment, age)
        && number(years, "YearsInCurrentEmployment")?
            > number(age, "BorrowerAge")? - MIN_WORKING_AGE
    {
        issues.push(inconsistency(
            EMPLOYMENT_CONSISTENCY,
            format!(
                "Years in employment ({}) exceeds reasonable working years for age {}",
                display_value(years),
                display_value(age)
            ),
        ));
    }

    // Default status
    let default_flag = truthy(field(default, "DefaultFlag")).is_some();
    let defaulted = field(current, "LatestStatus").and_then(Value::as_str) == Some("Defaulted");

    if default_flag && !defaulted {
        issues.push(inconsistency(
            DEFAULT_CONSISTENCY,
            "DefaultFlag is True but LatestStatus is not 'Defaulted'",
        ));
    }
    if defaulted && !default_flag {
        issues.push(inconsistency(
            DEFAULT_CONSISTENCY,
            "LatestStatus is 'Defaulted' but DefaultFlag is not True",
        ));
    }

    Ok(())
}

fn truthy(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| is_truthy(v))
}

/// Reported ratio; a missing value reads as zero.
fn reported_ratio(value: Option<&Value>, name: &'static str) -> Result<f64, RuleError> {
    value.map_or(Ok(0.0), |v| number(v, name))
}
