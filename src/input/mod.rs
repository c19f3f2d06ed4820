//! Input adapters: line parsing, block (form) parsing and the
//! interactive text session.

pub mod errors;
pub mod form;
pub mod parse;
pub mod session;

pub use errors::InputError;
