pub mod access_service;
pub mod auth;
pub mod crm_service;
pub mod hotel_service;
