//! Turns MagangHub payloads into typed records.
//!
//! Nothing in here returns an error for a malformed field: the offending value
//! is replaced by a default and the rest of the record survives. The only
//! failure is a detail response that holds no record at all.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::dto::upstream_dto::{
    RawCompany, RawEnvelope, RawMeta, RawRegency, RawSchedule, RawStatus, RawStudyProgram,
    RawVacancy,
};
use crate::error::{Error, Result};
use crate::models::pagination::Pagination;
use crate::models::region::Regency;
use crate::models::vacancy::{
    Company, DateRange, Schedule, StudyProgram, VacancyPage, VacancyRecord, PLACEHOLDER,
};
use crate::utils::time::parse_datetime;

pub fn normalize(raw: &Value) -> VacancyRecord {
    let raw: RawVacancy = lenient(raw, "vacancy");

    VacancyRecord {
        id: text(&raw.id_posisi)
            .or_else(|| text(&raw.id))
            .unwrap_or_default(),
        title: text(&raw.posisi).unwrap_or_default(),
        description: text(&raw.deskripsi_posisi),
        total_slots: count(&raw.jumlah_kuota),
        registered_count: count(&raw.jumlah_terdaftar),
        company: company(&raw.perusahaan),
        schedule: schedule(&raw.jadwal),
        status_label: status_label(&raw.ref_status_posisi),
        study_programs: decode_json_list(&raw.program_studi, "program_studi")
            .iter()
            .filter_map(study_program)
            .collect(),
        degree_levels: decode_json_list(&raw.jenjang, "jenjang")
            .iter()
            .filter_map(text)
            .collect(),
    }
}

/// Extracts the single record of a detail response.
///
/// The detail endpoint answers with either the object itself or a list
/// wrapping it; an empty list or a missing `data` means the vacancy is gone.
pub fn normalize_detail(data: &Value) -> Result<VacancyRecord> {
    let record = match data {
        Value::Array(items) => items.iter().find(|item| item.is_object()),
        Value::Object(_) => Some(data),
        _ => None,
    };

    record
        .map(normalize)
        .ok_or_else(|| Error::NotFound("Vacancy not found".to_string()))
}

/// Normalizes a whole listing body (`{ data, meta: { pagination } }`).
pub fn normalize_listing(body: &Value) -> VacancyPage {
    let envelope: RawEnvelope = lenient(body, "listing envelope");

    let items: Vec<VacancyRecord> = match &envelope.data {
        Value::Array(records) => records.iter().map(normalize).collect(),
        Value::Null => Vec::new(),
        other => {
            debug!(kind = value_kind(other), "Listing data is not a list");
            Vec::new()
        }
    };

    let meta: RawMeta = lenient(&envelope.meta, "listing meta");
    let pagination = match meta.pagination {
        Some(raw) => Pagination::new(
            count(&raw.current_page),
            count(&raw.last_page),
            raw.total.as_u64().unwrap_or(items.len() as u64),
        ),
        None => Pagination::single(items.len() as u64),
    };

    VacancyPage { items, pagination }
}

/// Regency lookup body: a `data` list of `{ kode_kabupaten, nama_kabupaten }`.
pub fn normalize_regencies(body: &Value) -> Vec<Regency> {
    let envelope: RawEnvelope = lenient(body, "regency envelope");
    let Value::Array(items) = &envelope.data else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let raw: RawRegency = lenient(item, "regency");
            Some(Regency {
                code: text(&raw.kode_kabupaten)?,
                name: text(&raw.nama_kabupaten).unwrap_or_else(|| PLACEHOLDER.to_string()),
            })
        })
        .collect()
}

/// Accepts a native list or a JSON-encoded one. Anything else is an empty list.
pub fn decode_json_list(value: &Value, field: &str) -> Vec<Value> {
    match value {
        Value::Array(items) => items.clone(),
        Value::String(encoded) => match serde_json::from_str::<Value>(encoded) {
            Ok(Value::Array(items)) => items,
            Ok(other) => {
                debug!(field, kind = value_kind(&other), "Encoded field is not a list");
                Vec::new()
            }
            Err(err) => {
                debug!(field, error = %err, "Encoded field is not valid JSON");
                Vec::new()
            }
        },
        _ => Vec::new(),
    }
}

fn company(value: &Value) -> Company {
    if value.is_null() {
        return Company::default();
    }
    let raw: RawCompany = lenient(value, "perusahaan");

    Company {
        name: text_or_placeholder(&raw.nama_perusahaan),
        regency: text_or_placeholder(&raw.nama_kabupaten),
        province: text_or_placeholder(&raw.nama_provinsi),
        address: text_or_placeholder(&raw.alamat),
        logo_url: text(&raw.logo),
        banner_url: text(&raw.banner),
        description: text(&raw.deskripsi_perusahaan),
    }
}

fn schedule(value: &Value) -> Schedule {
    if value.is_null() {
        return Schedule::default();
    }
    let raw: RawSchedule = lenient(value, "jadwal");

    Schedule {
        batch: text_or_placeholder(&raw.angkatan),
        year: text_or_placeholder(&raw.tahun),
        registration: range(&raw.tanggal_pendaftaran_awal, &raw.tanggal_pendaftaran_akhir),
        selection: range(&raw.tanggal_seleksi_awal, &raw.tanggal_seleksi_akhir),
        announcement: range(&raw.tanggal_pengumuman_awal, &raw.tanggal_pengumuman_akhir),
        program: range(&raw.tanggal_mulai, &raw.tanggal_selesai),
    }
}

fn status_label(value: &Value) -> String {
    let raw: RawStatus = lenient(value, "ref_status_posisi");
    text_or_placeholder(&raw.nama_status_posisi)
}

fn study_program(value: &Value) -> Option<StudyProgram> {
    // Some payloads list bare titles instead of objects.
    if let Some(title) = value.as_str() {
        return Some(StudyProgram {
            code: String::new(),
            title: title.trim().to_string(),
        });
    }

    let raw: RawStudyProgram = lenient(value, "program_studi item");
    let title = text(&raw.title).or_else(|| text(&raw.nama))?;
    Some(StudyProgram {
        code: text(&raw.kode).or_else(|| text(&raw.id)).unwrap_or_default(),
        title,
    })
}

fn range(start: &Value, end: &Value) -> DateRange {
    DateRange {
        start: start.as_str().and_then(parse_datetime),
        end: end.as_str().and_then(parse_datetime),
    }
}

fn lenient<T>(value: &Value, what: &str) -> T
where
    T: DeserializeOwned + Default,
{
    if value.is_null() {
        return T::default();
    }
    T::deserialize(value).unwrap_or_else(|err| {
        debug!(what, error = %err, "Falling back to defaults for malformed object");
        T::default()
    })
}

fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn text_or_placeholder(value: &Value) -> String {
    text(value).unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Non-negative count; negatives and garbage become zero.
fn count(value: &Value) -> u32 {
    let parsed = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed
        .map(|n| n.clamp(0, i64::from(u32::MAX)) as u32)
        .unwrap_or(0)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
