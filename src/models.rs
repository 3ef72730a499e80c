pub mod access;
pub mod auth;
pub mod crm;
pub mod hotel;
pub mod purchasing;
pub mod tenancy;
