// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{TenantRepository, UserRepository},
    models::{
        access::Role,
        auth::{Claims, User},
    },
};

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    tenant_repo: TenantRepository,
    jwt_secret: String,
    pool: PgPool,
}

impl AuthService {
    pub fn new(
        user_repo: UserRepository,
        tenant_repo: TenantRepository,
        jwt_secret: String,
        pool: PgPool,
    ) -> Self {
        Self { user_repo, tenant_repo, jwt_secret, pool }
    }

    // Registration bootstraps a property: the tenant row and its first
    // (ADMIN) user are created in one transaction.
    pub async fn register_property(
        &self,
        hotel_name: &str,
        full_name: &str,
        email: &str,
        password: &str,
    ) -> Result<String, AppError> {
        // Hashing happens off the async runtime.
        let password_owned = password.to_owned();
        let hashed_password =
            tokio::task::spawn_blocking(move || hash(&password_owned, bcrypt::DEFAULT_COST))
                .await
                .map_err(|e| anyhow::anyhow!("hashing task failed: {}", e))??;

        let slug = slugify(hotel_name);

        let mut tx = self.pool.begin().await?;

        let tenant = self.tenant_repo.create_tenant(&mut *tx, hotel_name, &slug).await?;

        let admin = self
            .user_repo
            .create_user(&mut *tx, tenant.id, email, &hashed_password, full_name, Role::Admin)
            .await?;

        tx.commit().await?;

        tracing::info!(tenant_id = %tenant.id, "property registered");

        self.create_token(admin.id)
    }

    // Staff creation inside an existing tenant (POST /api/users).
    pub async fn create_staff_user(
        &self,
        tenant_id: Uuid,
        email: &str,
        password: &str,
        full_name: &str,
        role: Role,
    ) -> Result<User, AppError> {
        let password_owned = password.to_owned();
        let hashed_password =
            tokio::task::spawn_blocking(move || hash(&password_owned, bcrypt::DEFAULT_COST))
                .await
                .map_err(|e| anyhow::anyhow!("hashing task failed: {}", e))??;

        let mut tx = self.pool.begin().await?;
        let user = self
            .user_repo
            .create_user(&mut *tx, tenant_id, email, &hashed_password, full_name, role)
            .await?;
        tx.commit().await?;

        Ok(user)
    }

    pub async fn login_user(&self, email: &str, password: &str) -> Result<String, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if !user.is_active {
            return Err(AppError::InvalidCredentials);
        }

        let password_owned = password.to_owned();
        let password_hash = user.password_hash.clone();

        let is_password_valid =
            tokio::task::spawn_blocking(move || verify(&password_owned, &password_hash))
                .await
                .map_err(|e| anyhow::anyhow!("password verification task failed: {}", e))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        self.create_token(user.id)
    }

    pub async fn validate_token(&self, token: &str) -> Result<User, AppError> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &validation,
        )
        .map_err(|_| AppError::InvalidToken)?;

        self.user_repo
            .find_by_id(token_data.claims.sub)
            .await?
            .ok_or(AppError::UserNotFound)
    }

    fn create_token(&self, user_id: Uuid) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::days(7);

        let claims = Claims {
            sub: user_id,
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }
}

// "Seaside Hotel" -> "seaside-hotel". Slugs must be unique, so a short
// random suffix avoids collisions between properties with the same name.
fn slugify(name: &str) -> String {
    let base: String = name
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    let base = base.trim_matches('-').replace("--", "-");

    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", base, &suffix[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_normalizes_and_suffixes() {
        let slug = slugify("Seaside Hotel & Spa");
        assert!(slug.starts_with("seaside-hotel"));
        assert!(!slug.contains(' '));
        assert!(!slug.contains('&'));
    }
}
