//! Model to entity mappers
//!
//! `From<Model> for Entity` conversions turning database rows into domain
//! objects. Writes bind entity fields directly.

mod address;
mod contact;
mod user;
