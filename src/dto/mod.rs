pub mod region_dto;
pub mod upstream_dto;
pub mod vacancy_dto;
