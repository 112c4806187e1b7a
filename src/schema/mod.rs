// Tue Jan 13 2026 - Alex

pub mod field;
pub mod layout;
pub mod pe;

pub use field::FieldSpec;
pub use layout::StructSchema;
