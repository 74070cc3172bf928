pub mod database;
pub mod pagination;
pub mod pricing;
pub mod validation;
