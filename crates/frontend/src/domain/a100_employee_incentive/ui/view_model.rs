use super::model;
use crate::domain::a100_employee_incentive::IncentiveEditorConfig;
use crate::shared::number_format::format_currency;
use crate::shared::storage::{BrowserStorage, KeyValueStorage};
use contracts::domain::a100_employee_incentive::{
    calculate_salary, parse_amount, EmployeePay, Incentive, IncentiveBook, IncentiveType,
};
use leptos::prelude::*;
use std::collections::HashMap;

/// What the salary cell of one employee currently shows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryDisplay {
    pub amount: f64,
    pub has_incentive: bool,
}

/// ViewModel for the incentive editor
///
/// Owns the incentive book for the lifetime of the mounted editor. At most
/// one popup is open at a time; `editing` holds the employee it belongs to.
#[derive(Clone, Copy)]
pub struct IncentiveEditorViewModel {
    pub employees: RwSignal<Vec<EmployeePay>>,
    pub book: RwSignal<IncentiveBook>,
    pub displayed: RwSignal<HashMap<String, SalaryDisplay>>,
    pub editing: RwSignal<Option<String>>,
    pub form_type: RwSignal<Option<IncentiveType>>,
    pub form_amount: RwSignal<String>,
    storage_key: StoredValue<String>,
    currency: StoredValue<String>,
    storage: StoredValue<Box<dyn KeyValueStorage>, LocalStorage>,
}

impl IncentiveEditorViewModel {
    pub fn new(config: IncentiveEditorConfig) -> Self {
        Self::with_storage(config, BrowserStorage)
    }

    pub fn with_storage(
        config: IncentiveEditorConfig,
        storage: impl KeyValueStorage + 'static,
    ) -> Self {
        let boxed: Box<dyn KeyValueStorage> = Box::new(storage);
        Self {
            employees: RwSignal::new(config.employees),
            book: RwSignal::new(IncentiveBook::new()),
            displayed: RwSignal::new(HashMap::new()),
            editing: RwSignal::new(None),
            form_type: RwSignal::new(None),
            form_amount: RwSignal::new(String::new()),
            storage_key: StoredValue::new(config.storage_key),
            currency: StoredValue::new(config.currency),
            storage: StoredValue::new_local(boxed),
        }
    }

    /// Restore the book from storage, then render every salary
    pub fn load_from_storage(&self) {
        let key = self.storage_key.get_value();
        let book = self
            .storage
            .with_value(|storage| model::load_incentives(storage.as_ref(), &key));
        log::debug!("Restored {} incentive record(s)", book.len());
        self.book.set(book);
        self.update_all_salaries();
    }

    pub fn employee(&self, employee_id: &str) -> Option<EmployeePay> {
        self.employees
            .with_untracked(|list| list.iter().find(|e| e.id == employee_id).cloned())
    }

    /// Salary of the employee from current state (0 for unknown employees)
    pub fn calculate_salary(&self, employee_id: &str) -> f64 {
        let Some(employee) = self.employee(employee_id) else {
            return 0.0;
        };
        self.book
            .with_untracked(|book| calculate_salary(&employee, book.get(employee_id)))
    }

    pub fn popup_title(&self) -> String {
        let name = self
            .editing
            .get()
            .and_then(|id| self.employee(&id))
            .map(|e| e.full_name())
            .unwrap_or_default();
        format!("Add/Deduct for {}", name)
    }

    pub fn is_popup_open(&self) -> bool {
        self.editing.get().is_some()
    }

    /// Open the popup pre-filled with the stored incentive (add, empty amount when none)
    pub fn show_incentive_popup(&self, employee_id: &str) {
        let current = self
            .book
            .with_untracked(|book| book.get(employee_id).copied());
        let (kind, amount) = match current {
            Some(incentive) if incentive.amount > 0.0 => {
                (incentive.kind, incentive.amount.to_string())
            }
            Some(incentive) => (incentive.kind, String::new()),
            None => (IncentiveType::Add, String::new()),
        };
        self.form_type.set(Some(kind));
        self.form_amount.set(amount);
        self.editing.set(Some(employee_id.to_string()));
    }

    /// Hide the popup and clear its fields
    pub fn close_incentive_popup(&self) {
        self.editing.set(None);
        self.form_amount.set(String::new());
        self.form_type.set(None);
    }

    pub fn cancel_edit_incentives(&self) {
        self.close_incentive_popup();
    }

    /// Store the form values for the employee, refresh its salary and persist the book
    pub fn save_incentives(&self, employee_id: &str) {
        let kind = match self.form_type.get_untracked() {
            Some(IncentiveType::Add) => IncentiveType::Add,
            _ => IncentiveType::Subtract,
        };
        let amount = parse_amount(&self.form_amount.get_untracked());

        self.book
            .update(|book| book.set(employee_id, Incentive::new(kind, amount)));
        self.update_salary_display(employee_id);
        self.close_incentive_popup();
        self.persist();
    }

    fn persist(&self) {
        let key = self.storage_key.get_value();
        let result = self.book.with_untracked(|book| {
            self.storage
                .with_value(|storage| model::save_incentives(storage.as_ref(), &key, book))
        });
        if let Err(e) = result {
            log::warn!("Failed to persist incentives: {}", e);
        }
    }

    pub fn update_salary_display(&self, employee_id: &str) {
        if self.employee(employee_id).is_none() {
            return;
        }
        let display = SalaryDisplay {
            amount: self.calculate_salary(employee_id),
            has_incentive: self
                .book
                .with_untracked(|book| book.has_incentive(employee_id)),
        };
        self.displayed.update(|displayed| {
            displayed.insert(employee_id.to_string(), display);
        });
    }

    pub fn update_all_salaries(&self) {
        let ids: Vec<String> = self
            .employees
            .with_untracked(|list| list.iter().map(|e| e.id.clone()).collect());
        for id in ids {
            self.update_salary_display(&id);
        }
    }

    /// Swap in fresh pay data (e.g. after attendance changed) and re-render
    pub fn replace_employees(&self, employees: Vec<EmployeePay>) {
        self.employees.set(employees);
        self.displayed.set(HashMap::new());
        self.update_all_salaries();
    }

    pub fn salary_text(&self, employee_id: &str) -> String {
        let currency = self.currency.get_value();
        self.displayed
            .with(|displayed| displayed.get(employee_id).map(|d| d.amount))
            .map(|amount| format_currency(amount, &currency))
            .unwrap_or_default()
    }

    /// Tracked lookup so row cells follow `replace_employees`
    fn with_employee<R>(
        &self,
        employee_id: &str,
        f: impl FnOnce(&EmployeePay) -> R,
    ) -> Option<R> {
        self.employees
            .with(|list| list.iter().find(|e| e.id == employee_id).map(f))
    }

    pub fn name_text(&self, employee_id: &str) -> String {
        self.with_employee(employee_id, EmployeePay::full_name)
            .unwrap_or_default()
    }

    pub fn rate_text(&self, employee_id: &str) -> String {
        self.with_employee(employee_id, |e| format!("{:.2}", e.rate_per_day))
            .unwrap_or_default()
    }

    pub fn attendance_text(&self, employee_id: &str) -> String {
        self.with_employee(employee_id, |e| e.total_attendance.to_string())
            .unwrap_or_default()
    }

    pub fn has_incentive_indicator(&self, employee_id: &str) -> bool {
        self.displayed.with(|displayed| {
            displayed
                .get(employee_id)
                .is_some_and(|d| d.has_incentive)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::memory::MemoryStorage;

    fn config() -> IncentiveEditorConfig {
        IncentiveEditorConfig {
            employees: vec![EmployeePay {
                id: "1".to_string(),
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                rate_per_day: 500.0,
                total_attendance: 22,
            }],
            ..IncentiveEditorConfig::default()
        }
    }

    fn with_owner(test: impl FnOnce()) {
        let owner = Owner::new();
        owner.set();
        test();
        drop(owner);
    }

    fn view_model(storage: MemoryStorage) -> IncentiveEditorViewModel {
        let vm = IncentiveEditorViewModel::with_storage(config(), storage);
        vm.load_from_storage();
        vm
    }

    #[test]
    fn test_initial_salary_rendered_on_load() {
        with_owner(|| {
            let vm = view_model(MemoryStorage::default());
            assert_eq!(vm.salary_text("1"), "₱11,000.00");
            assert!(!vm.has_incentive_indicator("1"));
        });
    }

    #[test]
    fn test_popup_prefills_default_add() {
        with_owner(|| {
            let vm = view_model(MemoryStorage::default());
            vm.show_incentive_popup("1");
            assert!(vm.is_popup_open());
            assert_eq!(vm.popup_title(), "Add/Deduct for John Doe");
            assert_eq!(vm.form_type.get_untracked(), Some(IncentiveType::Add));
            assert_eq!(vm.form_amount.get_untracked(), "");
        });
    }

    #[test]
    fn test_save_clamps_and_closes_popup() {
        with_owner(|| {
            let vm = view_model(MemoryStorage::default());
            vm.show_incentive_popup("1");
            vm.form_type.set(Some(IncentiveType::Subtract));
            vm.form_amount.set("20000".to_string());
            vm.save_incentives("1");

            assert_eq!(vm.salary_text("1"), "₱0.00");
            assert!(vm.has_incentive_indicator("1"));
            assert!(!vm.is_popup_open());
            assert_eq!(vm.form_amount.get_untracked(), "");
            assert_eq!(vm.form_type.get_untracked(), None);
        });
    }

    #[test]
    fn test_invalid_amount_coerced_to_zero() {
        with_owner(|| {
            let vm = view_model(MemoryStorage::default());
            vm.show_incentive_popup("1");
            vm.form_amount.set("abc".to_string());
            vm.save_incentives("1");

            assert_eq!(vm.calculate_salary("1"), 11_000.0);
            assert!(!vm.has_incentive_indicator("1"));
        });
    }

    #[test]
    fn test_saved_incentive_survives_reload() {
        with_owner(|| {
            let storage = MemoryStorage::default();
            let vm = view_model(storage.clone());
            vm.show_incentive_popup("1");
            vm.form_type.set(Some(IncentiveType::Add));
            vm.form_amount.set("1500.50".to_string());
            vm.save_incentives("1");

            let reloaded = view_model(storage);
            assert_eq!(
                reloaded.book.get_untracked().get("1"),
                Some(&Incentive::new(IncentiveType::Add, 1500.5))
            );
            assert_eq!(reloaded.salary_text("1"), "₱12,500.50");

            reloaded.show_incentive_popup("1");
            assert_eq!(reloaded.form_amount.get_untracked(), "1500.5");
        });
    }

    #[test]
    fn test_replace_employees_recomputes() {
        with_owner(|| {
            let vm = view_model(MemoryStorage::default());
            let mut updated = config().employees;
            updated[0].total_attendance = 10;
            vm.replace_employees(updated);
            assert_eq!(vm.calculate_salary("1"), 5_000.0);
            assert_eq!(vm.salary_text("1"), "₱5,000.00");
        });
    }

    #[test]
    fn test_row_cells_follow_replaced_pay_data() {
        with_owner(|| {
            let vm = view_model(MemoryStorage::default());
            assert_eq!(vm.rate_text("1"), "500.00");
            assert_eq!(vm.attendance_text("1"), "22");

            let mut updated = config().employees;
            updated[0].rate_per_day = 650.0;
            updated[0].total_attendance = 18;
            updated[0].last_name = "Smith".to_string();
            vm.replace_employees(updated);

            assert_eq!(vm.name_text("1"), "John Smith");
            assert_eq!(vm.rate_text("1"), "650.00");
            assert_eq!(vm.attendance_text("1"), "18");
            assert_eq!(vm.salary_text("1"), "₱11,700.00");
            assert_eq!(vm.rate_text("missing"), "");
        });
    }
}
