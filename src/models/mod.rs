pub mod pagination;
pub mod region;
pub mod vacancy;
