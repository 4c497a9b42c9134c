use crate::shared::api_utils::{api_url, get_json, with_query};
use contracts::domain::a101_ph_location::{
    BarangaysResponse, CitiesResponse, LocationOption, LocationRank, ProvincesResponse,
};
use std::collections::HashMap;

/// URL listing the options of `rank` under `parent_code`
///
/// Regions have no endpoint.
pub fn options_url(base_url: &str, rank: LocationRank, parent_code: &str) -> Option<String> {
    let endpoint = rank.endpoint()?;
    let param = rank.parent_param()?;
    let query = HashMap::from([(param, parent_code)]);
    with_query(&api_url(base_url, endpoint), &query).ok()
}

/// Load the options of `rank` scoped to the parent's code
pub async fn fetch_options(
    base_url: &str,
    rank: LocationRank,
    parent_code: &str,
) -> Result<Vec<LocationOption>, String> {
    let url = options_url(base_url, rank, parent_code)
        .ok_or_else(|| format!("No endpoint for {} options", rank.display_name()))?;

    match rank {
        LocationRank::Region => Err("Regions are not fetched".to_string()),
        LocationRank::Province => Ok(get_json::<ProvincesResponse>(&url).await?.into()),
        LocationRank::City => Ok(get_json::<CitiesResponse>(&url).await?.into()),
        LocationRank::Barangay => Ok(get_json::<BarangaysResponse>(&url).await?.into()),
    }
}
