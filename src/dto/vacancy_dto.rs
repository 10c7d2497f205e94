use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::Result;
use crate::models::pagination::{PageToken, Pagination};
use crate::models::vacancy::{DateRange, Schedule, VacancyPage, VacancyRecord};
use crate::services::maganghub_service::VacancySearch;
use crate::utils::pagination::controls_for;
use crate::utils::sanitize::{escape, excerpt};
use crate::utils::time::{
    classify_range, format_count, format_period, is_open_for_registration, DateRangeState,
};
use crate::utils::validation::region_code;

/// Card descriptions are cut to this many characters.
pub const CARD_DESCRIPTION_LIMIT: usize = 150;
pub const NO_DESCRIPTION: &str = "Tidak ada deskripsi";

#[derive(Debug, Clone, Serialize, Deserialize, Default, Validate)]
#[serde(default)]
pub struct SearchQuery {
    #[validate(range(min = 1))]
    pub page: Option<u32>,
    #[validate(range(min = 1, max = 100))]
    pub per_page: Option<u32>,
    #[validate(length(max = 100))]
    pub keyword: Option<String>,
    #[validate(length(max = 10))]
    pub province: Option<String>,
    #[validate(length(max = 10))]
    pub regency: Option<String>,
}

impl SearchQuery {
    pub fn into_search(self, default_per_page: u32, max_per_page: u32) -> Result<VacancySearch> {
        let province = region_code(self.province.as_deref(), "province")?;
        let regency = region_code(self.regency.as_deref(), "regency")?;

        Ok(VacancySearch {
            page: self.page.unwrap_or(1).max(1),
            per_page: self
                .per_page
                .unwrap_or(default_per_page)
                .clamp(1, max_per_page.max(1)),
            keyword: self.keyword.unwrap_or_default().trim().to_string(),
            province,
            regency,
        })
    }
}

/// Listing entry with every display string already safe to embed in markup.
///
/// `id` stays raw: it is a lookup key, not display text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacancyCard {
    pub id: String,
    pub title: String,
    pub company_name: String,
    pub location: String,
    pub batch_label: String,
    pub status_label: String,
    pub description: String,
    pub study_programs: Vec<String>,
    pub degree_levels: Vec<String>,
    pub quota: u32,
    pub registered: u32,
    pub remaining: u32,
    pub registration_period: String,
    pub program_period: String,
    pub logo_url: Option<String>,
    pub is_open: bool,
    pub badge: String,
}

impl VacancyCard {
    pub fn from_record(record: &VacancyRecord, now: NaiveDateTime) -> Self {
        let is_open = is_open_for_registration(&record.schedule, now);
        let description = match record.description.as_deref() {
            Some(text) => excerpt(Some(text), CARD_DESCRIPTION_LIMIT),
            None => NO_DESCRIPTION.to_string(),
        };

        Self {
            id: record.id.clone(),
            title: escape(Some(&record.title)),
            company_name: escape(Some(&record.company.name)),
            location: escape(Some(&format!(
                "{}, {}",
                record.company.regency, record.company.province
            ))),
            batch_label: escape(Some(&format!(
                "Angkatan {} - {}",
                record.schedule.batch, record.schedule.year
            ))),
            status_label: escape(Some(&record.status_label)),
            description,
            study_programs: record
                .study_programs
                .iter()
                .map(|p| escape(Some(&p.title)))
                .collect(),
            degree_levels: record
                .degree_levels
                .iter()
                .map(|d| escape(Some(d)))
                .collect(),
            quota: record.total_slots,
            registered: record.registered_count,
            remaining: record.remaining_slots(),
            registration_period: format_period(&record.schedule.registration),
            program_period: format_period(&record.schedule.program),
            logo_url: record.company.logo_url.as_deref().map(|u| escape(Some(u))),
            is_open,
            badge: if is_open { "Buka" } else { "Tutup" }.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacancyListResponse {
    pub items: Vec<VacancyCard>,
    pub pagination: Pagination,
    pub pages: Vec<PageToken>,
    pub total_label: String,
    pub has_previous: bool,
    pub has_next: bool,
}

impl VacancyListResponse {
    pub fn from_page(page: &VacancyPage, now: NaiveDateTime) -> Self {
        Self {
            items: page
                .items
                .iter()
                .map(|record| VacancyCard::from_record(record, now))
                .collect(),
            pagination: page.pagination,
            pages: controls_for(&page.pagination),
            total_label: format_count(page.pagination.total),
            has_previous: page.pagination.has_previous(),
            has_next: page.pagination.has_next(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelinePhase {
    Registration,
    Selection,
    Announcement,
    Program,
}

impl TimelinePhase {
    pub fn label(self) -> &'static str {
        match self {
            TimelinePhase::Registration => "Pendaftaran",
            TimelinePhase::Selection => "Seleksi",
            TimelinePhase::Announcement => "Pengumuman",
            TimelinePhase::Program => "Periode Magang",
        }
    }

    fn range(self, schedule: &Schedule) -> &DateRange {
        match self {
            TimelinePhase::Registration => &schedule.registration,
            TimelinePhase::Selection => &schedule.selection,
            TimelinePhase::Announcement => &schedule.announcement,
            TimelinePhase::Program => &schedule.program,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub phase: TimelinePhase,
    pub label: String,
    pub period: String,
    pub state: DateRangeState,
}

pub fn timeline(schedule: &Schedule, now: NaiveDateTime) -> Vec<TimelineEntry> {
    [
        TimelinePhase::Registration,
        TimelinePhase::Selection,
        TimelinePhase::Announcement,
        TimelinePhase::Program,
    ]
    .into_iter()
    .map(|phase| {
        let range = phase.range(schedule);
        TimelineEntry {
            phase,
            label: phase.label().to_string(),
            period: format_period(range),
            state: classify_range(range, now),
        }
    })
    .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacancyDetailResponse {
    pub vacancy: VacancyRecord,
    pub card: VacancyCard,
    pub description: String,
    pub company_description: String,
    pub company_address: String,
    pub timeline: Vec<TimelineEntry>,
}

impl VacancyDetailResponse {
    pub fn from_record(record: VacancyRecord, now: NaiveDateTime) -> Self {
        let card = VacancyCard::from_record(&record, now);
        Self {
            description: record
                .description
                .as_deref()
                .map(|d| escape(Some(d)))
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            company_description: escape(record.company.description.as_deref()),
            company_address: escape(Some(&record.company.address)),
            timeline: timeline(&record.schedule, now),
            card,
            vacancy: record,
        }
    }
}
