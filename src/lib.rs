pub mod config;
pub mod domains;
pub mod errors;
pub mod signing;
pub mod structs;
pub mod typed_data;
pub mod verifier;
