// src/services/access_service.rs
//
// The access-control rules engine: a static role -> default-permission
// catalog, a per-user override set (grant/revoke lists) and the resolver
// that merges the two into the effective permission set.
//
// Guard semantics are require-ALL: a route lists the keys it needs and the
// caller must hold every one of them. Navigation visibility is a frontend
// concern computed from the effective set.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{AccessRepository, UserRepository},
    models::{
        access::{EffectivePermissions, OverrideResponse, PermissionState, Role},
        auth::User,
    },
};

// ---
// Permission catalog
// ---

pub const PERM_USERS_READ: &str = "users.read";
pub const PERM_USERS_MANAGE: &str = "users.manage";
pub const PERM_CUSTOMERS_READ: &str = "customers.read";
pub const PERM_CUSTOMERS_MANAGE: &str = "customers.manage";
pub const PERM_BOOKINGS_READ: &str = "bookings.read";
pub const PERM_BOOKINGS_MANAGE: &str = "bookings.manage";
pub const PERM_INVENTORY_READ: &str = "inventory.read";
pub const PERM_INVENTORY_MANAGE: &str = "inventory.manage";
pub const PERM_PURCHASING_READ: &str = "purchasing.read";
pub const PERM_PURCHASING_MANAGE: &str = "purchasing.manage";
pub const PERM_ACCESS_MANAGE: &str = "settings.access.manage";

pub const ALL_PERMISSIONS: &[&str] = &[
    PERM_USERS_READ,
    PERM_USERS_MANAGE,
    PERM_CUSTOMERS_READ,
    PERM_CUSTOMERS_MANAGE,
    PERM_BOOKINGS_READ,
    PERM_BOOKINGS_MANAGE,
    PERM_INVENTORY_READ,
    PERM_INVENTORY_MANAGE,
    PERM_PURCHASING_READ,
    PERM_PURCHASING_MANAGE,
    PERM_ACCESS_MANAGE,
];

pub fn is_known_permission(key: &str) -> bool {
    ALL_PERMISSIONS.contains(&key)
}

// Default permission set per base role. ADMIN holds everything, including
// the permission that gates access management itself.
pub fn role_defaults(role: Role) -> &'static [&'static str] {
    match role {
        Role::Admin => ALL_PERMISSIONS,
        Role::Manager => &[
            PERM_USERS_READ,
            PERM_USERS_MANAGE,
            PERM_CUSTOMERS_READ,
            PERM_CUSTOMERS_MANAGE,
            PERM_BOOKINGS_READ,
            PERM_BOOKINGS_MANAGE,
            PERM_INVENTORY_READ,
            PERM_INVENTORY_MANAGE,
            PERM_PURCHASING_READ,
            PERM_PURCHASING_MANAGE,
        ],
        Role::Receptionist => &[
            PERM_CUSTOMERS_READ,
            PERM_CUSTOMERS_MANAGE,
            PERM_BOOKINGS_READ,
            PERM_BOOKINGS_MANAGE,
        ],
        Role::Cashier => &[PERM_CUSTOMERS_READ, PERM_BOOKINGS_READ],
        Role::Waiter => &[PERM_CUSTOMERS_READ],
        Role::Housekeeping => &[PERM_INVENTORY_READ],
    }
}

// ---
// Override set
// ---

// A user's override lists. Invariant: both lists contain only known keys
// and no key appears in both. Constructors enforce it, so every value of
// this type is well-formed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideSet {
    add: Vec<String>,
    remove: Vec<String>,
}

impl OverrideSet {
    // Validates a client-supplied pair of lists (PUT payload).
    pub fn from_lists(add: Vec<String>, remove: Vec<String>) -> Result<Self, AppError> {
        for key in add.iter().chain(remove.iter()) {
            if !is_known_permission(key) {
                return Err(AppError::UnknownPermission(key.clone()));
            }
        }
        if let Some(dup) = add.iter().find(|k| remove.contains(k)) {
            return Err(AppError::OverrideConflict(format!(
                "Permission '{}' cannot be granted and revoked at the same time.",
                dup
            )));
        }

        let mut set = OverrideSet::default();
        // Dedupe while keeping the validated membership.
        for key in add {
            if !set.add.contains(&key) {
                set.add.push(key);
            }
        }
        for key in remove {
            if !set.remove.contains(&key) {
                set.remove.push(key);
            }
        }
        Ok(set)
    }

    // Rehydrates a stored row. Rows are written through this module, so the
    // lists are trusted to be disjoint already.
    pub(crate) fn from_stored(add: Vec<String>, remove: Vec<String>) -> Self {
        Self { add, remove }
    }

    pub fn add_keys(&self) -> &[String] {
        &self.add
    }

    pub fn remove_keys(&self) -> &[String] {
        &self.remove
    }

    pub fn state_of(&self, key: &str) -> PermissionState {
        if self.add.iter().any(|k| k == key) {
            PermissionState::Grant
        } else if self.remove.iter().any(|k| k == key) {
            PermissionState::Revoke
        } else {
            PermissionState::Neutral
        }
    }

    // Moves a key between grant/neutral/revoke. The key is first cleared
    // from both lists, which keeps them disjoint and makes the operation
    // idempotent.
    pub fn set_state(&mut self, key: &str, state: PermissionState) -> Result<(), AppError> {
        if !is_known_permission(key) {
            return Err(AppError::UnknownPermission(key.to_string()));
        }

        self.add.retain(|k| k != key);
        self.remove.retain(|k| k != key);

        match state {
            PermissionState::Grant => self.add.push(key.to_string()),
            PermissionState::Revoke => self.remove.push(key.to_string()),
            PermissionState::Neutral => {}
        }
        Ok(())
    }
}

// ---
// Resolver
// ---

// The core rule: an explicit grant wins, then an explicit revoke, then the
// role default. A key in neither list is "neutral" and falls through.
pub fn resolve(role: Role, overrides: &OverrideSet, key: &str) -> bool {
    match overrides.state_of(key) {
        PermissionState::Grant => true,
        PermissionState::Revoke => false,
        PermissionState::Neutral => role_defaults(role).contains(&key),
    }
}

pub fn effective_set(role: Role, overrides: &OverrideSet) -> Vec<String> {
    ALL_PERMISSIONS
        .iter()
        .filter(|key| resolve(role, overrides, key))
        .map(|key| key.to_string())
        .collect()
}

// ---
// Service
// ---

#[derive(Clone)]
pub struct AccessService {
    repo: AccessRepository,
    user_repo: UserRepository,
    pool: PgPool,
}

impl AccessService {
    pub fn new(repo: AccessRepository, user_repo: UserRepository, pool: PgPool) -> Self {
        Self { repo, user_repo, pool }
    }

    async fn load_overrides(
        &self,
        tenant_id: Uuid,
        user_id: Uuid,
    ) -> Result<OverrideSet, AppError> {
        let set = match self.repo.find_overrides(tenant_id, user_id).await? {
            Some(record) => OverrideSet::from_stored(record.add_keys, record.remove_keys),
            None => OverrideSet::default(),
        };
        Ok(set)
    }

    // The caller's fully resolved permission set, as served by
    // GET /api/auth/permissions.
    pub async fn effective_for(&self, user: &User) -> Result<EffectivePermissions, AppError> {
        let overrides = self.load_overrides(user.tenant_id, user.id).await?;
        Ok(EffectivePermissions {
            role: user.role,
            granted: effective_set(user.role, &overrides),
        })
    }

    // Require-ALL guard check. Returns the first missing permission as a
    // 403 error.
    pub async fn require_all(&self, user: &User, required: &[&str]) -> Result<(), AppError> {
        let overrides = self.load_overrides(user.tenant_id, user.id).await?;
        for key in required {
            if !resolve(user.role, &overrides, key) {
                return Err(AppError::MissingPermission(key.to_string()));
            }
        }
        Ok(())
    }

    pub async fn get_overrides(
        &self,
        tenant_id: Uuid,
        target_user_id: Uuid,
    ) -> Result<OverrideResponse, AppError> {
        // The target must exist inside the caller's tenant.
        self.user_repo
            .find_in_tenant(tenant_id, target_user_id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        let record = self.repo.find_overrides(tenant_id, target_user_id).await?;
        Ok(match record {
            Some(r) => OverrideResponse {
                user_id: target_user_id,
                add: r.add_keys,
                remove: r.remove_keys,
                updated_at: Some(r.updated_at),
            },
            None => OverrideResponse {
                user_id: target_user_id,
                add: Vec::new(),
                remove: Vec::new(),
                updated_at: None,
            },
        })
    }

    // Full replacement of a user's override lists.
    pub async fn put_overrides(
        &self,
        tenant_id: Uuid,
        target_user_id: Uuid,
        add: Vec<String>,
        remove: Vec<String>,
    ) -> Result<OverrideResponse, AppError> {
        let target = self
            .user_repo
            .find_in_tenant(tenant_id, target_user_id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        let set = OverrideSet::from_lists(add, remove)?;
        guard_admin_lockout(&target, &set)?;

        self.store(tenant_id, target_user_id, &set).await
    }

    // Single-key grant/neutral/revoke toggle.
    pub async fn set_override_state(
        &self,
        tenant_id: Uuid,
        target_user_id: Uuid,
        key: &str,
        state: PermissionState,
    ) -> Result<OverrideResponse, AppError> {
        let target = self
            .user_repo
            .find_in_tenant(tenant_id, target_user_id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        let mut set = self.load_overrides(tenant_id, target_user_id).await?;
        set.set_state(key, state)?;
        guard_admin_lockout(&target, &set)?;

        self.store(tenant_id, target_user_id, &set).await
    }

    async fn store(
        &self,
        tenant_id: Uuid,
        user_id: Uuid,
        set: &OverrideSet,
    ) -> Result<OverrideResponse, AppError> {
        let mut tx = self.pool.begin().await?;
        let record = self
            .repo
            .upsert_overrides(&mut *tx, tenant_id, user_id, set.add_keys(), set.remove_keys())
            .await?;
        tx.commit().await?;

        tracing::info!(
            user_id = %user_id,
            added = record.add_keys.len(),
            removed = record.remove_keys.len(),
            "permission overrides updated"
        );

        Ok(OverrideResponse {
            user_id,
            add: record.add_keys,
            remove: record.remove_keys,
            updated_at: Some(record.updated_at),
        })
    }
}

// An administrator cannot have access management revoked by override;
// otherwise a tenant could lock itself out of this screen entirely.
fn guard_admin_lockout(target: &User, set: &OverrideSet) -> Result<(), AppError> {
    if target.role == Role::Admin
        && set.state_of(PERM_ACCESS_MANAGE) == PermissionState::Revoke
    {
        return Err(AppError::OverrideConflict(
            "Access management cannot be revoked from an administrator.".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user_with_role(role: Role) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            tenant_id: Uuid::new_v4(),
            email: "staff@example.com".to_string(),
            password_hash: "hash".to_string(),
            full_name: "Staff".to_string(),
            role,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn admin_has_every_permission_by_default() {
        let overrides = OverrideSet::default();
        for key in ALL_PERMISSIONS {
            assert!(resolve(Role::Admin, &overrides, key), "missing {key}");
        }
    }

    #[test]
    fn neutral_key_falls_back_to_role_default() {
        let overrides = OverrideSet::default();
        assert!(resolve(Role::Cashier, &overrides, PERM_BOOKINGS_READ));
        assert!(!resolve(Role::Cashier, &overrides, PERM_BOOKINGS_MANAGE));
    }

    #[test]
    fn grant_override_beats_role_default() {
        // Receptionist base set has no inventory.read, the override adds it.
        let overrides =
            OverrideSet::from_lists(vec![PERM_INVENTORY_READ.to_string()], vec![]).unwrap();
        assert!(!role_defaults(Role::Receptionist).contains(&PERM_INVENTORY_READ));
        assert!(resolve(Role::Receptionist, &overrides, PERM_INVENTORY_READ));
    }

    #[test]
    fn revoke_override_beats_role_default() {
        let overrides =
            OverrideSet::from_lists(vec![], vec![PERM_CUSTOMERS_MANAGE.to_string()]).unwrap();
        assert!(!resolve(Role::Manager, &overrides, PERM_CUSTOMERS_MANAGE));
        // Other keys keep their defaults.
        assert!(resolve(Role::Manager, &overrides, PERM_CUSTOMERS_READ));
    }

    #[test]
    fn effective_set_merges_defaults_and_overrides() {
        let mut overrides = OverrideSet::default();
        overrides
            .set_state(PERM_INVENTORY_READ, PermissionState::Grant)
            .unwrap();
        overrides
            .set_state(PERM_BOOKINGS_MANAGE, PermissionState::Revoke)
            .unwrap();

        let granted = effective_set(Role::Receptionist, &overrides);
        assert!(granted.contains(&PERM_INVENTORY_READ.to_string()));
        assert!(!granted.contains(&PERM_BOOKINGS_MANAGE.to_string()));
        assert!(granted.contains(&PERM_CUSTOMERS_READ.to_string()));
    }

    #[test]
    fn set_state_is_idempotent() {
        let mut set = OverrideSet::default();
        set.set_state(PERM_INVENTORY_READ, PermissionState::Grant).unwrap();
        let once = set.clone();
        set.set_state(PERM_INVENTORY_READ, PermissionState::Grant).unwrap();
        assert_eq!(set, once);
    }

    #[test]
    fn set_state_keeps_lists_disjoint() {
        let mut set = OverrideSet::default();
        set.set_state(PERM_INVENTORY_READ, PermissionState::Grant).unwrap();
        set.set_state(PERM_INVENTORY_READ, PermissionState::Revoke).unwrap();

        assert_eq!(set.state_of(PERM_INVENTORY_READ), PermissionState::Revoke);
        assert!(!set.add_keys().contains(&PERM_INVENTORY_READ.to_string()));

        set.set_state(PERM_INVENTORY_READ, PermissionState::Neutral).unwrap();
        assert_eq!(set.state_of(PERM_INVENTORY_READ), PermissionState::Neutral);
        assert!(set.add_keys().is_empty());
        assert!(set.remove_keys().is_empty());
    }

    #[test]
    fn from_lists_rejects_a_key_in_both_lists() {
        let result = OverrideSet::from_lists(
            vec![PERM_INVENTORY_READ.to_string()],
            vec![PERM_INVENTORY_READ.to_string()],
        );
        assert!(matches!(result, Err(AppError::OverrideConflict(_))));
    }

    #[test]
    fn from_lists_rejects_unknown_keys() {
        let result = OverrideSet::from_lists(vec!["spa.manage".to_string()], vec![]);
        assert!(matches!(result, Err(AppError::UnknownPermission(_))));
    }

    #[test]
    fn from_lists_dedupes_repeated_keys() {
        let set = OverrideSet::from_lists(
            vec![PERM_INVENTORY_READ.to_string(), PERM_INVENTORY_READ.to_string()],
            vec![],
        )
        .unwrap();
        assert_eq!(set.add_keys().len(), 1);
    }

    #[test]
    fn admin_cannot_lose_access_management_by_override() {
        let admin = user_with_role(Role::Admin);
        let set =
            OverrideSet::from_lists(vec![], vec![PERM_ACCESS_MANAGE.to_string()]).unwrap();
        assert!(matches!(
            guard_admin_lockout(&admin, &set),
            Err(AppError::OverrideConflict(_))
        ));

        // The same override is fine on a manager.
        let manager = user_with_role(Role::Manager);
        assert!(guard_admin_lockout(&manager, &set).is_ok());
    }

    #[test]
    fn role_defaults_only_contain_known_keys() {
        for role in [
            Role::Admin,
            Role::Manager,
            Role::Receptionist,
            Role::Cashier,
            Role::Waiter,
            Role::Housekeeping,
        ] {
            for key in role_defaults(role) {
                assert!(is_known_permission(key), "{key} missing from catalog");
            }
        }
    }

    #[test]
    fn only_admin_holds_access_management_by_default() {
        for role in [
            Role::Manager,
            Role::Receptionist,
            Role::Cashier,
            Role::Waiter,
            Role::Housekeeping,
        ] {
            assert!(!role_defaults(role).contains(&PERM_ACCESS_MANAGE));
        }
        assert!(role_defaults(Role::Admin).contains(&PERM_ACCESS_MANAGE));
    }
}
