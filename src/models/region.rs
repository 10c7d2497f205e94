use serde::{Deserialize, Serialize};

/// Kabupaten/kota under a province, as offered by the upstream region lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regency {
    pub code: String,
    pub name: String,
}
