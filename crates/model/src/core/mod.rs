pub mod metadata;
pub mod value;
