//! # contact-service
//!
//! Application layer: the use cases run by every endpoint, the bearer token
//! auth gate, and the DTOs exchanged with the HTTP layer.

pub mod dto;
pub mod services;

pub use services::{
    AddressService, AuthService, ContactService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, UserService,
};
