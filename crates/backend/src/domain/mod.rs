pub mod error;

pub mod c001_category;
pub mod c002_subcategory;
