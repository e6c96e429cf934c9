//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs and the uniform response envelope
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreateAddressRequest, CreateContactRequest, LoginUserRequest, RegisterUserRequest,
    SearchContactRequest, UpdateAddressRequest, UpdateContactRequest, UpdateUserRequest,
};

pub use responses::{
    AddressResponse, ContactResponse, HealthChecks, HealthResponse, PageMetadata, Paged,
    ReadinessResponse, TokenResponse, UserResponse, WebResponse,
};
