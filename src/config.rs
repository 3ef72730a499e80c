// src/config.rs

use sqlx::{PgPool, postgres::PgPoolOptions};
use std::{env, time::Duration};

use crate::{
    db::{
        AccessRepository, CrmRepository, HotelRepository, LookupRepository,
        PurchasingRepository, TenantRepository, UserRepository,
    },
    services::{
        access_service::AccessService, auth::AuthService, crm_service::CrmService,
        hotel_service::HotelService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub jwt_secret: String,

    // Repositories that handlers use directly for plain reads.
    pub user_repo: UserRepository,
    pub tenant_repo: TenantRepository,
    pub lookup_repo: LookupRepository,
    pub purchasing_repo: PurchasingRepository,

    // Services carrying the transactional business logic.
    pub auth_service: AuthService,
    pub access_service: AccessService,
    pub crm_service: CrmService,
    pub hotel_service: HotelService,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")?;
        let jwt_secret = env::var("JWT_SECRET")?;

        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("database connection established");

        // --- Dependency graph ---
        let user_repo = UserRepository::new(db_pool.clone());
        let tenant_repo = TenantRepository::new(db_pool.clone());
        let access_repo = AccessRepository::new(db_pool.clone());
        let crm_repo = CrmRepository::new(db_pool.clone());
        let hotel_repo = HotelRepository::new(db_pool.clone());
        let lookup_repo = LookupRepository::new(db_pool.clone());
        let purchasing_repo = PurchasingRepository::new(db_pool.clone());

        let auth_service = AuthService::new(
            user_repo.clone(),
            tenant_repo.clone(),
            jwt_secret.clone(),
            db_pool.clone(),
        );
        let access_service =
            AccessService::new(access_repo, user_repo.clone(), db_pool.clone());
        let crm_service = CrmService::new(crm_repo.clone(), db_pool.clone());
        let hotel_service = HotelService::new(hotel_repo, crm_repo, db_pool.clone());

        Ok(Self {
            db_pool,
            jwt_secret,
            user_repo,
            tenant_repo,
            lookup_repo,
            purchasing_repo,
            auth_service,
            access_service,
            crm_service,
            hotel_service,
        })
    }
}
