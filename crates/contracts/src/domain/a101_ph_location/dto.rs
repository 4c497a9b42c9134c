use serde::{Deserialize, Serialize};

/// Entry of a location option list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationOption {
    /// Display name, matched exactly against the typed input
    pub name: String,
    /// Backend code used to scope the next rank
    pub code: String,
}

impl LocationOption {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

/// Response of `GET {base}/get-provinces/?region={code}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvincesResponse {
    #[serde(default)]
    pub provinces: Vec<ProvinceDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvinceDto {
    #[serde(rename = "provDesc")]
    pub prov_desc: String,
    #[serde(rename = "provCode")]
    pub prov_code: String,
}

/// Response of `GET {base}/get-cities/?province={code}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CitiesResponse {
    #[serde(default)]
    pub cities: Vec<CityDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityDto {
    #[serde(rename = "citymunDesc")]
    pub citymun_desc: String,
    #[serde(rename = "citymunCode")]
    pub citymun_code: String,
}

/// Response of `GET {base}/get-barangays/?city={code}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BarangaysResponse {
    #[serde(default)]
    pub barangays: Vec<BarangayDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarangayDto {
    #[serde(rename = "brgyDesc")]
    pub brgy_desc: String,
    #[serde(rename = "brgyCode")]
    pub brgy_code: String,
}

impl From<ProvincesResponse> for Vec<LocationOption> {
    fn from(response: ProvincesResponse) -> Self {
        response
            .provinces
            .into_iter()
            .map(|p| LocationOption::new(p.prov_desc, p.prov_code))
            .collect()
    }
}

impl From<CitiesResponse> for Vec<LocationOption> {
    fn from(response: CitiesResponse) -> Self {
        response
            .cities
            .into_iter()
            .map(|c| LocationOption::new(c.citymun_desc, c.citymun_code))
            .collect()
    }
}

impl From<BarangaysResponse> for Vec<LocationOption> {
    fn from(response: BarangaysResponse) -> Self {
        response
            .barangays
            .into_iter()
            .map(|b| LocationOption::new(b.brgy_desc, b.brgy_code))
            .collect()
    }
}
