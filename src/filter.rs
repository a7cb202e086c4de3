//! Listing filters for the college, counsellor, scholarship and stream pages.
//!
//! Every page owns one criteria struct. Each non-default key narrows the
//! dataset with its own predicate and keys are combined with AND. Results keep
//! the dataset order and are recomputed from scratch on every change.

use crate::error::PortalError;
use crate::models::{College, Counsellor, Scholarship, Stream};

/// Sentinel accepted by select-style filters.
pub const ALL: &str = "all";

/// Per-page filter criteria over one record type.
pub trait FilterCriteria: Default + PartialEq {
    type Record: 'static;

    /// Page name used in error messages.
    const PAGE: &'static str;

    /// Keys accepted by [`FilterCriteria::set`], in display order.
    const KEYS: &'static [&'static str];

    fn set(&mut self, key: &str, value: &str) -> Result<(), PortalError>;

    fn get(&self, key: &str) -> Option<&str>;

    fn matches(&self, record: &Self::Record) -> bool;

    fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

pub fn apply_filters<'a, C: FilterCriteria>(
    records: &'a [C::Record],
    criteria: &C,
) -> Vec<&'a C::Record> {
    records.iter().filter(|record| criteria.matches(record)).collect()
}

/// Empty or `"all"` places no constraint.
pub fn is_unconstrained(value: &str) -> bool {
    value.is_empty() || value == ALL
}

pub fn exact(field: &str, wanted: &str) -> bool {
    is_unconstrained(wanted) || field == wanted
}

pub fn contains_ci(field: &str, needle: &str) -> bool {
    needle.is_empty() || field.to_lowercase().contains(&needle.to_lowercase())
}

pub fn any_contains_ci(fields: &[&str], needle: &str) -> bool {
    needle.is_empty() || fields.iter().any(|field| contains_ci(field, needle))
}

pub fn any_exact(fields: &[&str], wanted: &str) -> bool {
    is_unconstrained(wanted) || fields.iter().any(|field| *field == wanted)
}

fn unknown_key(page: &'static str, key: &str) -> PortalError {
    PortalError::UnknownFilterKey {
        page,
        key: key.to_string(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollegeFilters {
    pub kind: String,
    pub location: String,
    pub program: String,
    pub search_term: String,
}

impl FilterCriteria for CollegeFilters {
    type Record = College;
    const PAGE: &'static str = "colleges";
    const KEYS: &'static [&'static str] = &["type", "location", "program", "searchTerm"];

    fn set(&mut self, key: &str, value: &str) -> Result<(), PortalError> {
        let slot = match key {
            "type" => &mut self.kind,
            "location" => &mut self.location,
            "program" => &mut self.program,
            "searchTerm" => &mut self.search_term,
            _ => return Err(unknown_key(Self::PAGE, key)),
        };
        *slot = value.to_string();
        Ok(())
    }

    fn get(&self, key: &str) -> Option<&str> {
        match key {
            "type" => Some(&self.kind),
            "location" => Some(&self.location),
            "program" => Some(&self.program),
            "searchTerm" => Some(&self.search_term),
            _ => None,
        }
    }

    fn matches(&self, college: &College) -> bool {
        exact(college.kind, &self.kind)
            && contains_ci(college.location, &self.location)
            && any_contains_ci(college.programs, &self.program)
            && (contains_ci(college.name, &self.search_term)
                || contains_ci(college.description, &self.search_term))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounsellorFilters {
    pub specialization: String,
    pub location: String,
    pub consultation_mode: String,
}

impl Default for CounsellorFilters {
    fn default() -> Self {
        Self {
            specialization: ALL.to_string(),
            location: String::new(),
            consultation_mode: ALL.to_string(),
        }
    }
}

impl FilterCriteria for CounsellorFilters {
    type Record = Counsellor;
    const PAGE: &'static str = "counsellors";
    const KEYS: &'static [&'static str] = &["specialization", "location", "consultationMode"];

    fn set(&mut self, key: &str, value: &str) -> Result<(), PortalError> {
        let slot = match key {
            "specialization" => &mut self.specialization,
            "location" => &mut self.location,
            "consultationMode" => &mut self.consultation_mode,
            _ => return Err(unknown_key(Self::PAGE, key)),
        };
        *slot = value.to_string();
        Ok(())
    }

    fn get(&self, key: &str) -> Option<&str> {
        match key {
            "specialization" => Some(&self.specialization),
            "location" => Some(&self.location),
            "consultationMode" => Some(&self.consultation_mode),
            _ => None,
        }
    }

    fn matches(&self, counsellor: &Counsellor) -> bool {
        (is_unconstrained(&self.specialization)
            || any_contains_ci(counsellor.specializations, &self.specialization))
            && contains_ci(counsellor.location, &self.location)
            && any_exact(counsellor.consultation_modes, &self.consultation_mode)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScholarshipFilters {
    pub category: String,
    pub field: String,
}

impl Default for ScholarshipFilters {
    fn default() -> Self {
        Self {
            category: ALL.to_string(),
            field: String::new(),
        }
    }
}

impl FilterCriteria for ScholarshipFilters {
    type Record = Scholarship;
    const PAGE: &'static str = "scholarships";
    const KEYS: &'static [&'static str] = &["category", "field"];

    fn set(&mut self, key: &str, value: &str) -> Result<(), PortalError> {
        let slot = match key {
            "category" => &mut self.category,
            "field" => &mut self.field,
            _ => return Err(unknown_key(Self::PAGE, key)),
        };
        *slot = value.to_string();
        Ok(())
    }

    fn get(&self, key: &str) -> Option<&str> {
        match key {
            "category" => Some(&self.category),
            "field" => Some(&self.field),
            _ => None,
        }
    }

    fn matches(&self, scholarship: &Scholarship) -> bool {
        exact(scholarship.category, &self.category)
            && (contains_ci(scholarship.title, &self.field)
                || contains_ci(scholarship.description, &self.field))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamFilters {
    pub search: String,
    pub category: String,
}

impl Default for StreamFilters {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL.to_string(),
        }
    }
}

impl FilterCriteria for StreamFilters {
    type Record = Stream;
    const PAGE: &'static str = "streams";
    const KEYS: &'static [&'static str] = &["search", "category"];

    fn set(&mut self, key: &str, value: &str) -> Result<(), PortalError> {
        let slot = match key {
            "search" => &mut self.search,
            "category" => &mut self.category,
            _ => return Err(unknown_key(Self::PAGE, key)),
        };
        *slot = value.to_string();
        Ok(())
    }

    fn get(&self, key: &str) -> Option<&str> {
        match key {
            "search" => Some(&self.search),
            "category" => Some(&self.category),
            _ => None,
        }
    }

    fn matches(&self, stream: &Stream) -> bool {
        let search_hit = self.search.is_empty()
            || contains_ci(stream.name, &self.search)
            || contains_ci(stream.description, &self.search)
            || stream
                .career_options
                .iter()
                .any(|option| contains_ci(option, &self.search));

        search_hit && exact(stream.category, &self.category)
    }
}

/// Page state: a dataset, the live criteria and the last computed result.
pub struct Listing<C: FilterCriteria> {
    records: &'static [C::Record],
    criteria: C,
    results: Vec<&'static C::Record>,
}

impl<C: FilterCriteria> Listing<C> {
    pub fn new(records: &'static [C::Record]) -> Self {
        Self {
            records,
            criteria: C::default(),
            results: records.iter().collect(),
        }
    }

    pub fn set_filter(&mut self, key: &str, value: &str) -> Result<(), PortalError> {
        self.criteria.set(key, value)?;
        self.refresh();
        Ok(())
    }

    pub fn clear(&mut self) {
        self.criteria = C::default();
        self.refresh();
    }

    pub fn criteria(&self) -> &C {
        &self.criteria
    }

    pub fn results(&self) -> &[&'static C::Record] {
        &self.results
    }

    pub fn total(&self) -> usize {
        self.records.len()
    }

    fn refresh(&mut self) {
        self.results = apply_filters(self.records, &self.criteria);
        tracing::debug!(
            page = C::PAGE,
            matched = self.results.len(),
            total = self.records.len(),
            "filters applied"
        );
    }
}
