pub mod auth_service;
pub mod authz;
pub mod geo;
