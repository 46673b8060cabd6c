pub use crate::{fe, fe_vec};
pub use crate::{field_element::FieldElement, polynomial::Polynomial};

/// Prime modulus (alias to the single source of truth).
pub const P: u32 = FieldElement::P;
