pub mod catalog;
pub mod seed;

pub use catalog::{matches, summarize, DoctorCatalog};
pub use seed::seed_doctors;
