pub mod codigo;
pub mod errors;
pub mod formatting;
pub mod validation;
