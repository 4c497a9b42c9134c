use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum IncentiveError {
    #[error("Malformed incentive data: {0}")]
    Malformed(#[from] serde_json::Error),
}

// ============================================================================
// Incentive
// ============================================================================

/// Direction of a salary adjustment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncentiveType {
    #[default]
    Add,
    Subtract,
}

impl IncentiveType {
    /// Id of the radio input bound to this type
    pub fn as_str(&self) -> &'static str {
        match self {
            IncentiveType::Add => "add",
            IncentiveType::Subtract => "subtract",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            IncentiveType::Add => "Add",
            IncentiveType::Subtract => "Deduct",
        }
    }
}

/// Additive or subtractive adjustment for one employee
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Incentive {
    #[serde(rename = "type", default)]
    pub kind: IncentiveType,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount: f64,
}

impl Incentive {
    pub fn new(kind: IncentiveType, amount: f64) -> Self {
        Self {
            kind,
            amount: sanitize_amount(amount),
        }
    }

    /// Signed contribution to the salary
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            IncentiveType::Add => self.amount,
            IncentiveType::Subtract => -self.amount,
        }
    }
}

/// Parses a form amount the lenient way: leading numeric prefix, anything else is 0
///
/// "250.5" -> 250.5, "12abc" -> 12, "" -> 0, "abc" -> 0, "-5" -> 0
pub fn parse_amount(input: &str) -> f64 {
    let trimmed = input.trim();
    let parsed = trimmed
        .char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .rev()
        .find_map(|end| trimmed[..end].parse::<f64>().ok())
        .unwrap_or(0.0);
    sanitize_amount(parsed)
}

fn sanitize_amount(amount: f64) -> f64 {
    if amount.is_finite() && amount > 0.0 {
        amount
    } else {
        0.0
    }
}

// Older pages stored the raw field text, so accept strings as well as numbers
fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(f64),
        Text(String),
        Null(()),
    }

    Ok(match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(n) => sanitize_amount(n),
        RawAmount::Text(s) => parse_amount(&s),
        RawAmount::Null(()) => 0.0,
    })
}

// ============================================================================
// Incentive book
// ============================================================================

/// Employee id -> incentive, overwritten wholesale per employee on each save
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncentiveBook(BTreeMap<String, Incentive>);

impl IncentiveBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, employee_id: &str) -> Option<&Incentive> {
        self.0.get(employee_id)
    }

    pub fn set(&mut self, employee_id: impl Into<String>, incentive: Incentive) {
        self.0.insert(employee_id.into(), incentive);
    }

    /// True when a non-zero adjustment is recorded for the employee
    pub fn has_incentive(&self, employee_id: &str) -> bool {
        self.get(employee_id).is_some_and(|i| i.amount > 0.0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn from_json(json: &str) -> Result<Self, IncentiveError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, IncentiveError> {
        Ok(serde_json::to_string(self)?)
    }
}

// ============================================================================
// Employee pay data
// ============================================================================

/// Pay inputs for one employee, supplied by the hosting page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmployeePay {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(
        rename = "ratePerDay",
        alias = "rate_per_day",
        default,
        deserialize_with = "deserialize_amount"
    )]
    pub rate_per_day: f64,
    #[serde(
        rename = "totalAttendance",
        alias = "total_attendance",
        default,
        deserialize_with = "deserialize_days"
    )]
    pub total_attendance: u32,
}

impl EmployeePay {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn base_salary(&self) -> f64 {
        self.rate_per_day * f64::from(self.total_attendance)
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// Whole days; text such as "22" or "22.5" keeps its integer part
fn deserialize_days<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let days = deserialize_amount(deserializer)?;
    Ok(days.trunc() as u32)
}

/// Base pay adjusted by the incentive, never below zero
///
/// A missing incentive counts as adding 0.
pub fn calculate_salary(employee: &EmployeePay, incentive: Option<&Incentive>) -> f64 {
    let adjustment = incentive.map(Incentive::signed_amount).unwrap_or(0.0);
    (employee.base_salary() + adjustment).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(rate: f64, days: u32) -> EmployeePay {
        EmployeePay {
            id: "1".to_string(),
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            rate_per_day: rate,
            total_attendance: days,
        }
    }

    #[test]
    fn test_salary_without_incentive() {
        assert_eq!(calculate_salary(&employee(500.0, 22), None), 11_000.0);
    }

    #[test]
    fn test_salary_with_additive_incentive() {
        let bonus = Incentive::new(IncentiveType::Add, 1_000.0);
        assert_eq!(calculate_salary(&employee(500.0, 22), Some(&bonus)), 12_000.0);
    }

    #[test]
    fn test_salary_with_subtractive_incentive() {
        let deduction = Incentive::new(IncentiveType::Subtract, 1_000.0);
        assert_eq!(
            calculate_salary(&employee(500.0, 22), Some(&deduction)),
            10_000.0
        );
    }

    #[test]
    fn test_salary_clamped_at_zero() {
        let deduction = Incentive::new(IncentiveType::Subtract, 1_000.0);
        assert_eq!(calculate_salary(&employee(500.0, 0), Some(&deduction)), 0.0);
        assert_eq!(calculate_salary(&employee(20.0, 22), Some(&deduction)), 0.0);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("250.5"), 250.5);
        assert_eq!(parse_amount(" 12abc"), 12.0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("-5"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
    }

    #[test]
    fn test_book_json_round_trip() {
        let mut book = IncentiveBook::new();
        book.set("7", Incentive::new(IncentiveType::Subtract, 150.0));

        let json = book.to_json().unwrap();
        assert_eq!(json, r#"{"7":{"type":"subtract","amount":150.0}}"#);

        let restored = IncentiveBook::from_json(&json).unwrap();
        assert_eq!(restored.get("7"), Some(&Incentive::new(IncentiveType::Subtract, 150.0)));
    }

    #[test]
    fn test_book_accepts_text_amounts() {
        let book = IncentiveBook::from_json(r#"{"3":{"type":"add","amount":"75"},"4":{"type":"add","amount":""}}"#)
            .unwrap();
        assert_eq!(book.get("3").map(|i| i.amount), Some(75.0));
        assert!(book.has_incentive("3"));
        assert!(!book.has_incentive("4"));
        assert!(!book.has_incentive("5"));
    }

    #[test]
    fn test_book_rejects_malformed_json() {
        assert!(matches!(
            IncentiveBook::from_json("{not json"),
            Err(IncentiveError::Malformed(_))
        ));
    }

    #[test]
    fn test_save_overwrites_previous_record() {
        let mut book = IncentiveBook::new();
        book.set("1", Incentive::new(IncentiveType::Add, 100.0));
        book.set("1", Incentive::new(IncentiveType::Subtract, 40.0));
        assert_eq!(book.len(), 1);
        assert_eq!(book.get("1").map(|i| i.kind), Some(IncentiveType::Subtract));
    }

    #[test]
    fn test_employee_accepts_numeric_id() {
        let e: EmployeePay = serde_json::from_str(
            r#"{"id": 1, "first_name": "John", "last_name": "Doe", "ratePerDay": 500, "totalAttendance": 22}"#,
        )
        .unwrap();
        assert_eq!(e.id, "1");
        assert_eq!(e.full_name(), "John Doe");
        assert_eq!(e.base_salary(), 11_000.0);
    }

    #[test]
    fn test_employee_accepts_text_pay_fields() {
        let e: EmployeePay = serde_json::from_str(
            r#"{"id": 1, "first_name": "John", "last_name": "Doe", "ratePerDay": "500.00", "totalAttendance": "22"}"#,
        )
        .unwrap();
        assert_eq!(e.rate_per_day, 500.0);
        assert_eq!(e.total_attendance, 22);
        assert_eq!(calculate_salary(&e, None), 11_000.0);
    }

    #[test]
    fn test_employee_blank_pay_fields_are_zero() {
        let e: EmployeePay = serde_json::from_str(
            r#"{"id": "2", "ratePerDay": "", "totalAttendance": null}"#,
        )
        .unwrap();
        assert_eq!(e.rate_per_day, 0.0);
        assert_eq!(e.total_attendance, 0);

        let e: EmployeePay =
            serde_json::from_str(r#"{"id": "3", "ratePerDay": 450.5, "totalAttendance": "10.9"}"#)
                .unwrap();
        assert_eq!(e.total_attendance, 10);
        assert_eq!(e.base_salary(), 4_505.0);
    }
}
