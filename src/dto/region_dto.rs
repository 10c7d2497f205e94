use serde::{Deserialize, Serialize};

use crate::models::region::Regency;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegencyListResponse {
    pub province: String,
    pub items: Vec<Regency>,
}
