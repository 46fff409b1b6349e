//! Declarative form validation
//!
//! Each form declares a static list of [`FieldRule`]s and maps field names to
//! values through [`FormSchema`]. Running the schema yields [`FormErrors`],
//! one message per failing field, rendered inline next to the input.

mod errors;
mod rules;
mod schema;

pub use errors::FormErrors;
pub use rules::{ValidationRules, EMAIL_PATTERN, PHONE_PATTERN};
pub use schema::{FieldRule, FieldValue, FormSchema};
