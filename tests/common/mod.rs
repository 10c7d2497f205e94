use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

#[derive(Clone, Default)]
pub struct UpstreamCalls {
    pub listing: Arc<AtomicUsize>,
    pub regency: Arc<AtomicUsize>,
}

impl UpstreamCalls {
    pub fn regency_calls(&self) -> usize {
        self.regency.load(Ordering::SeqCst)
    }
}

pub fn raw_vacancy(id: &str, title: &str) -> Value {
    json!({
        "id_posisi": id,
        "posisi": title,
        "deskripsi_posisi": "Mendukung tim <b>operasional</b>",
        "jumlah_kuota": 8,
        "jumlah_terdaftar": 3,
        "perusahaan": {
            "nama_perusahaan": "PT Sinar Jaya",
            "nama_kabupaten": "KOTA SURABAYA",
            "nama_provinsi": "JAWA TIMUR",
            "alamat": "Jl. Pemuda 10"
        },
        "jadwal": {
            "angkatan": 1,
            "tahun": 2025,
            "tanggal_pendaftaran_awal": "2000-01-01",
            "tanggal_pendaftaran_akhir": "2999-12-31",
            "tanggal_mulai": "2999-01-01",
            "tanggal_selesai": "2999-06-30"
        },
        "program_studi": "[{\"title\":\"Manajemen\"}]",
        "jenjang": "not json"
    })
}

async fn listing(
    State(calls): State<UpstreamCalls>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    calls.listing.fetch_add(1, Ordering::SeqCst);

    if params.get("kode_provinsi").map(String::as_str) == Some("99") {
        return (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "message": "down" })));
    }

    let keyword = params.get("keyword").cloned().unwrap_or_default();
    if keyword == "slow" {
        tokio::time::sleep(Duration::from_millis(300)).await;
    }

    let page: u32 = params
        .get("page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(1);
    let title = if keyword.is_empty() {
        "Staf Gudang".to_string()
    } else {
        format!("Posisi {}", keyword)
    };

    (
        StatusCode::OK,
        Json(json!({
            "data": [raw_vacancy(&format!("v-{}", page), &title)],
            "meta": {
                "pagination": {
                    "current_page": page,
                    "last_page": 12,
                    "total": 1234
                }
            }
        })),
    )
}

async fn detail(Path(id): Path<String>) -> Response {
    match id.as_str() {
        "gone" => (StatusCode::OK, Json(json!({ "data": [] }))).into_response(),
        "boom" => (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({}))).into_response(),
        "garbled" => (StatusCode::OK, "<html>maintenance</html>").into_response(),
        "flat" => Json(json!({ "data": raw_vacancy("flat", "Analis Data") })).into_response(),
        other => Json(json!({ "data": [raw_vacancy(other, "Analis Data")] })).into_response(),
    }
}

async fn regencies(
    State(calls): State<UpstreamCalls>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    calls.regency.fetch_add(1, Ordering::SeqCst);
    let province = params.get("kode_provinsi").cloned().unwrap_or_default();
    match province.as_str() {
        "98" => (StatusCode::SERVICE_UNAVAILABLE, Json(json!({ "message": "down" }))),
        "00" => (StatusCode::OK, Json(json!({ "data": [] }))),
        _ => (
            StatusCode::OK,
            Json(json!({
                "data": [
                    { "kode_kabupaten": format!("{}01", province), "nama_kabupaten": "KABUPATEN SATU" },
                    { "kode_kabupaten": format!("{}71", province), "nama_kabupaten": "KOTA TUJUH" }
                ]
            })),
        ),
    }
}

/// Starts a fake MagangHub on an ephemeral port and returns its `/api` base URL.
pub async fn spawn_upstream() -> (String, UpstreamCalls) {
    let calls = UpstreamCalls::default();
    let app = Router::new()
        .route("/api/vacancies", get(listing))
        .route("/api/vacancies/:id", get(detail))
        .route("/api/regencies", get(regencies))
        .with_state(calls.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind upstream");
    let addr: SocketAddr = listener.local_addr().expect("upstream addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("upstream server");
    });

    (format!("http://{}/api", addr), calls)
}
