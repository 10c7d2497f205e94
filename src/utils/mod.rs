pub mod pagination;
pub mod sanitize;
pub mod time;
pub mod validation;
