use crate::shared::storage::KeyValueStorage;
use contracts::domain::a100_employee_incentive::IncentiveBook;

/// Restore the incentive book saved under `key`
///
/// Missing or malformed data yields an empty book.
pub fn load_incentives(storage: &dyn KeyValueStorage, key: &str) -> IncentiveBook {
    let Some(saved) = storage.get_item(key) else {
        return IncentiveBook::new();
    };
    match IncentiveBook::from_json(&saved) {
        Ok(book) => book,
        Err(e) => {
            log::warn!("Ignoring stored incentives under '{}': {}", key, e);
            IncentiveBook::new()
        }
    }
}

/// Persist the whole book as JSON under `key`
pub fn save_incentives(
    storage: &dyn KeyValueStorage,
    key: &str,
    book: &IncentiveBook,
) -> Result<(), String> {
    let json = book.to_json().map_err(|e| e.to_string())?;
    storage.set_item(key, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::memory::MemoryStorage;
    use contracts::domain::a100_employee_incentive::{Incentive, IncentiveType};

    #[test]
    fn test_save_then_load_restores_book() {
        let storage = MemoryStorage::default();
        let mut book = IncentiveBook::new();
        book.set("42", Incentive::new(IncentiveType::Subtract, 1000.0));

        save_incentives(&storage, "employeeIncentives", &book).unwrap();
        let restored = load_incentives(&storage, "employeeIncentives");

        assert_eq!(
            restored.get("42"),
            Some(&Incentive::new(IncentiveType::Subtract, 1000.0))
        );
    }

    #[test]
    fn test_missing_key_is_empty_book() {
        let storage = MemoryStorage::default();
        assert!(load_incentives(&storage, "employeeIncentives").is_empty());
    }

    #[test]
    fn test_malformed_data_is_empty_book() {
        let storage = MemoryStorage::default();
        storage.set_item("employeeIncentives", "{\"1\":").unwrap();
        assert!(load_incentives(&storage, "employeeIncentives").is_empty());
    }
}
