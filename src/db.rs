pub mod access_repo;
pub use access_repo::AccessRepository;
pub mod crm_repo;
pub use crm_repo::CrmRepository;
pub mod hotel_repo;
pub use hotel_repo::HotelRepository;
pub mod lookup_repo;
pub use lookup_repo::LookupRepository;
pub mod purchasing_repo;
pub use purchasing_repo::PurchasingRepository;
pub mod tenancy_repo;
pub use tenancy_repo::TenantRepository;
pub mod user_repo;
pub use user_repo::UserRepository;
