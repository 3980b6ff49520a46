pub mod companies;
pub mod public;
