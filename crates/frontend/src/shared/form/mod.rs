pub mod binding;
pub mod fields;
pub mod references;

pub use binding::{
    bind_choice, bind_date, bind_flag, bind_id_input, bind_number, bind_ref, bind_text,
    FlagBinding, FormContext, IdBinding, TextBinding,
};
pub use fields::{CheckboxField, ReferenceField, SelectField, TextAreaField, TextField};
pub use references::use_reference_options;
