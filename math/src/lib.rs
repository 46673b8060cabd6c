pub mod error;
pub mod field_element;
pub mod polynomial;
pub mod prelude;
