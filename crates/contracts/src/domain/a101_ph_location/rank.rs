use serde::{Deserialize, Serialize};

static RANKS: [LocationRank; 4] = LocationRank::ALL;

/// One level of the Philippine address cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationRank {
    Region,
    Province,
    City,
    Barangay,
}

impl LocationRank {
    pub const ALL: [LocationRank; 4] = [
        LocationRank::Region,
        LocationRank::Province,
        LocationRank::City,
        LocationRank::Barangay,
    ];

    pub fn index(self) -> usize {
        match self {
            LocationRank::Region => 0,
            LocationRank::Province => 1,
            LocationRank::City => 2,
            LocationRank::Barangay => 3,
        }
    }

    pub fn parent(self) -> Option<LocationRank> {
        match self {
            LocationRank::Region => None,
            LocationRank::Province => Some(LocationRank::Region),
            LocationRank::City => Some(LocationRank::Province),
            LocationRank::Barangay => Some(LocationRank::City),
        }
    }

    pub fn child(self) -> Option<LocationRank> {
        match self {
            LocationRank::Region => Some(LocationRank::Province),
            LocationRank::Province => Some(LocationRank::City),
            LocationRank::City => Some(LocationRank::Barangay),
            LocationRank::Barangay => None,
        }
    }

    /// Every rank below this one, nearest first
    pub fn descendants(self) -> &'static [LocationRank] {
        &RANKS[self.index() + 1..]
    }

    pub fn display_name(self) -> &'static str {
        match self {
            LocationRank::Region => "Region",
            LocationRank::Province => "Province",
            LocationRank::City => "City / Municipality",
            LocationRank::Barangay => "Barangay",
        }
    }

    /// Path segment of the endpoint listing options of this rank
    ///
    /// Regions are rendered with the page, so they have none.
    pub fn endpoint(self) -> Option<&'static str> {
        match self {
            LocationRank::Region => None,
            LocationRank::Province => Some("get-provinces/"),
            LocationRank::City => Some("get-cities/"),
            LocationRank::Barangay => Some("get-barangays/"),
        }
    }

    /// Query parameter carrying the parent code when listing this rank
    pub fn parent_param(self) -> Option<&'static str> {
        match self {
            LocationRank::Region => None,
            LocationRank::Province => Some("region"),
            LocationRank::City => Some("province"),
            LocationRank::Barangay => Some("city"),
        }
    }
}
