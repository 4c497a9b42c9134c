//! Region -> province -> city -> barangay dependency state
//!
//! Every rank holds the typed value, the options loaded for the current
//! parent and the code the value resolved to. Option lists are valid only
//! for the parent code they were fetched with, so any change upstream wipes
//! everything below it. Each rank also carries a request generation: a
//! response is applied only when it answers the latest request for its rank.

use contracts::domain::a101_ph_location::{LocationOption, LocationRank};

/// Pending load of a rank's options, scoped to the parent's code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub rank: LocationRank,
    pub parent_code: String,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Options installed; `next` primes the following rank for a pre-filled value
    Applied { next: Option<FetchRequest> },
    /// A newer request for the rank is outstanding
    Stale,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct RankState {
    value: String,
    options: Vec<LocationOption>,
    code: Option<String>,
    generation: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationCascade {
    ranks: [RankState; 4],
}

impl LocationCascade {
    /// Start with the region options rendered by the page and any pre-filled values
    pub fn new(regions: Vec<LocationOption>, values: [String; 4]) -> Self {
        let mut cascade = Self::default();
        for (state, value) in cascade.ranks.iter_mut().zip(values) {
            state.value = value;
        }
        cascade.state_mut(LocationRank::Region).options = regions;
        cascade
    }

    fn state(&self, rank: LocationRank) -> &RankState {
        &self.ranks[rank.index()]
    }

    fn state_mut(&mut self, rank: LocationRank) -> &mut RankState {
        &mut self.ranks[rank.index()]
    }

    pub fn value(&self, rank: LocationRank) -> &str {
        &self.state(rank).value
    }

    pub fn options(&self, rank: LocationRank) -> &[LocationOption] {
        &self.state(rank).options
    }

    pub fn code(&self, rank: LocationRank) -> Option<&str> {
        self.state(rank).code.as_deref()
    }

    /// Region is always editable; any other rank only once its parent holds a value
    pub fn is_enabled(&self, rank: LocationRank) -> bool {
        match rank.parent() {
            None => true,
            Some(parent) => !self.value(parent).is_empty(),
        }
    }

    fn find_code(&self, rank: LocationRank, name: &str) -> Option<String> {
        if name.is_empty() {
            return None;
        }
        self.options(rank)
            .iter()
            .find(|option| option.name == name)
            .map(|option| option.code.clone())
    }

    /// Wipe values, lists and codes below `rank` and invalidate their in-flight loads
    fn clear_descendants(&mut self, rank: LocationRank) {
        for &descendant in rank.descendants() {
            let state = self.state_mut(descendant);
            state.value.clear();
            state.options.clear();
            state.code = None;
            state.generation += 1;
        }
    }

    fn request_child(&mut self, rank: LocationRank) -> Option<FetchRequest> {
        let child = rank.child()?;
        let parent_code = self.state(rank).code.clone()?;
        let state = self.state_mut(child);
        state.generation += 1;
        Some(FetchRequest {
            rank: child,
            parent_code,
            generation: state.generation,
        })
    }

    /// The user typed or picked `value` for `rank`
    ///
    /// Empty clears everything below. An exact option match resolves the
    /// code, clears everything below and asks for the next rank's options.
    /// Anything else is only recorded as the typed value.
    pub fn set_value(&mut self, rank: LocationRank, value: String) -> Option<FetchRequest> {
        self.state_mut(rank).value = value;

        if self.value(rank).is_empty() {
            self.state_mut(rank).code = None;
            self.clear_descendants(rank);
            return None;
        }

        let code = self.find_code(rank, self.value(rank))?;
        self.state_mut(rank).code = Some(code);
        self.clear_descendants(rank);
        self.request_child(rank)
    }

    /// Resolve a pre-filled region and ask for its provinces
    pub fn prime(&mut self) -> Option<FetchRequest> {
        let code = self.find_code(LocationRank::Region, self.value(LocationRank::Region))?;
        self.state_mut(LocationRank::Region).code = Some(code);
        self.request_child(LocationRank::Region)
    }

    /// Install the options answering `request`
    ///
    /// A pre-filled value of the rank that matches the new list is resolved
    /// and the next rank requested, keeping pre-filled values further down.
    pub fn apply_options(
        &mut self,
        request: &FetchRequest,
        options: Vec<LocationOption>,
    ) -> ApplyOutcome {
        if self.state(request.rank).generation != request.generation {
            return ApplyOutcome::Stale;
        }

        self.state_mut(request.rank).options = options;

        let resolved = self.find_code(request.rank, self.value(request.rank));
        let next = match resolved {
            Some(code) => {
                self.state_mut(request.rank).code = Some(code);
                self.request_child(request.rank)
            }
            None => None,
        };
        ApplyOutcome::Applied { next }
    }
}
