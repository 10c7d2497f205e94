use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Placeholder used for nested fields the upstream left out.
pub const PLACEHOLDER: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacancyRecord {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub total_slots: u32,
    pub registered_count: u32,
    pub company: Company,
    pub schedule: Schedule,
    pub status_label: String,
    pub study_programs: Vec<StudyProgram>,
    pub degree_levels: Vec<String>,
}

impl VacancyRecord {
    pub fn remaining_slots(&self) -> u32 {
        self.total_slots.saturating_sub(self.registered_count)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub regency: String,
    pub province: String,
    pub address: String,
    pub logo_url: Option<String>,
    pub banner_url: Option<String>,
    pub description: Option<String>,
}

impl Default for Company {
    fn default() -> Self {
        Self {
            name: PLACEHOLDER.to_string(),
            regency: PLACEHOLDER.to_string(),
            province: PLACEHOLDER.to_string(),
            address: PLACEHOLDER.to_string(),
            logo_url: None,
            banner_url: None,
            description: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub batch: String,
    pub year: String,
    pub registration: DateRange,
    pub selection: DateRange,
    pub announcement: DateRange,
    pub program: DateRange,
}

impl Default for Schedule {
    fn default() -> Self {
        Self {
            batch: PLACEHOLDER.to_string(),
            year: PLACEHOLDER.to_string(),
            registration: DateRange::default(),
            selection: DateRange::default(),
            announcement: DateRange::default(),
            program: DateRange::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyProgram {
    pub code: String,
    pub title: String,
}

/// One page of normalized listing results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacancyPage {
    pub items: Vec<VacancyRecord>,
    pub pagination: super::pagination::Pagination,
}
