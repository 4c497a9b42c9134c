use contracts::domain::a100_employee_incentive::EmployeePay;
use serde::Deserialize;

pub const DEFAULT_STORAGE_KEY: &str = "employeeIncentives";
pub const DEFAULT_CURRENCY: &str = "PHP";

/// Settings passed by the hosting page to `mount_incentive_editor`
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IncentiveEditorConfig {
    pub storage_key: String,
    pub currency: String,
    /// Employees rendered by the page, with their pay inputs
    pub employees: Vec<EmployeePay>,
}

impl Default for IncentiveEditorConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            employees: Vec::new(),
        }
    }
}
