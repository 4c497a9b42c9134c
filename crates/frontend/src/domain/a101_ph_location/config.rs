use contracts::domain::a101_ph_location::{LocationOption, LocationRank};
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "/payroll_system/ajax";

/// Settings passed by the hosting page to `mount_address_fields`
///
/// Field names follow the page's JavaScript config object
/// (`regionInputId`, `regionListId`, ..., `baseUrl`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AddressFieldsConfig {
    pub region_input_id: String,
    pub region_list_id: String,
    pub province_input_id: String,
    pub province_list_id: String,
    pub city_input_id: String,
    pub city_list_id: String,
    pub barangay_input_id: String,
    pub barangay_list_id: String,
    pub base_url: String,
    /// Region options rendered with the page
    pub regions: Vec<LocationOption>,
    /// Values already stored on the record being edited
    pub region: String,
    pub province: String,
    pub city: String,
    pub barangay: String,
    /// Name attribute prefix so the inputs post with the surrounding form
    pub name_prefix: String,
}

impl Default for AddressFieldsConfig {
    fn default() -> Self {
        Self {
            region_input_id: "region".to_string(),
            region_list_id: "region-list".to_string(),
            province_input_id: "province".to_string(),
            province_list_id: "province-list".to_string(),
            city_input_id: "city".to_string(),
            city_list_id: "city-list".to_string(),
            barangay_input_id: "barangay".to_string(),
            barangay_list_id: "barangay-list".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            regions: Vec::new(),
            region: String::new(),
            province: String::new(),
            city: String::new(),
            barangay: String::new(),
            name_prefix: String::new(),
        }
    }
}

impl AddressFieldsConfig {
    /// (input id, option list id) of a rank
    pub fn element_ids(&self, rank: LocationRank) -> (&str, &str) {
        match rank {
            LocationRank::Region => (self.region_input_id.as_str(), self.region_list_id.as_str()),
            LocationRank::Province => (self.province_input_id.as_str(), self.province_list_id.as_str()),
            LocationRank::City => (self.city_input_id.as_str(), self.city_list_id.as_str()),
            LocationRank::Barangay => (self.barangay_input_id.as_str(), self.barangay_list_id.as_str()),
        }
    }

    /// Pre-filled values ordered region first
    pub fn initial_values(&self) -> [String; 4] {
        [
            self.region.clone(),
            self.province.clone(),
            self.city.clone(),
            self.barangay.clone(),
        ]
    }

    pub fn input_name(&self, rank: LocationRank) -> String {
        let field = match rank {
            LocationRank::Region => "region",
            LocationRank::Province => "province",
            LocationRank::City => "city",
            LocationRank::Barangay => "barangay",
        };
        format!("{}{}", self.name_prefix, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AddressFieldsConfig = serde_json::from_str(
            r#"{
                "regionInputId": "id_region",
                "regionListId": "regions",
                "regions": [{"name": "NCR", "code": "13"}],
                "region": "NCR"
            }"#,
        )
        .unwrap();

        assert_eq!(config.element_ids(LocationRank::Region), ("id_region", "regions"));
        assert_eq!(
            config.element_ids(LocationRank::Barangay),
            ("barangay", "barangay-list")
        );
        assert_eq!(config.base_url, "/payroll_system/ajax");
        assert_eq!(config.initial_values()[0], "NCR");
        assert_eq!(config.regions.len(), 1);
    }

    #[test]
    fn test_input_name_prefix() {
        let config = AddressFieldsConfig {
            name_prefix: "permanent_".to_string(),
            ..AddressFieldsConfig::default()
        };
        assert_eq!(config.input_name(LocationRank::City), "permanent_city");
    }
}
