//! Wire shapes of the MagangHub API.
//!
//! Every leaf is a [`Value`] so that deserializing never fails on a type the
//! upstream decided to change; coercion happens in the normalizer.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawVacancy {
    pub id_posisi: Value,
    pub id: Value,
    pub posisi: Value,
    pub deskripsi_posisi: Value,
    pub jumlah_kuota: Value,
    pub jumlah_terdaftar: Value,
    pub perusahaan: Value,
    pub jadwal: Value,
    pub ref_status_posisi: Value,
    pub program_studi: Value,
    pub jenjang: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawCompany {
    pub nama_perusahaan: Value,
    pub nama_kabupaten: Value,
    pub nama_provinsi: Value,
    pub alamat: Value,
    pub logo: Value,
    pub banner: Value,
    pub deskripsi_perusahaan: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSchedule {
    pub angkatan: Value,
    pub tahun: Value,
    pub tanggal_pendaftaran_awal: Value,
    pub tanggal_pendaftaran_akhir: Value,
    pub tanggal_seleksi_awal: Value,
    pub tanggal_seleksi_akhir: Value,
    pub tanggal_pengumuman_awal: Value,
    pub tanggal_pengumuman_akhir: Value,
    pub tanggal_mulai: Value,
    pub tanggal_selesai: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawStatus {
    pub nama_status_posisi: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawStudyProgram {
    pub kode: Value,
    pub id: Value,
    pub title: Value,
    pub nama: Value,
}

/// Body of both the listing and the detail endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawEnvelope {
    pub data: Value,
    pub meta: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawMeta {
    pub pagination: Option<RawPagination>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawPagination {
    pub current_page: Value,
    pub last_page: Value,
    pub total: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawRegency {
    pub kode_kabupaten: Value,
    pub nama_kabupaten: Value,
}
