// src/db/hotel_repo.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::hotel::{Booking, BookingStatus, Room, RoomStatus, RoomType},
};

const BOOKING_COLUMNS: &str = "id, tenant_id, customer_id, room_id, check_in, check_out, \
                               status, amount, created_at, updated_at";

#[derive(Clone)]
pub struct HotelRepository {
    pool: PgPool,
}

impl HotelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  ROOM TYPES
    // =========================================================================

    pub async fn create_room_type<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        name: &str,
        base_rate: Decimal,
        capacity: i32,
    ) -> Result<RoomType, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let room_type = sqlx::query_as::<_, RoomType>(
            r#"
            INSERT INTO room_types (tenant_id, name, base_rate, capacity)
            VALUES ($1, $2, $3, $4)
            RETURNING id, tenant_id, name, base_rate, capacity, created_at
            "#,
        )
        .bind(tenant_id)
        .bind(name)
        .bind(base_rate)
        .bind(capacity)
        .fetch_one(executor)
        .await
        .map_err(|e| map_unique(e, "A room type with this name already exists."))?;

        Ok(room_type)
    }

    pub async fn list_room_types(&self, tenant_id: Uuid) -> Result<Vec<RoomType>, AppError> {
        let room_types = sqlx::query_as::<_, RoomType>(
            r#"
            SELECT id, tenant_id, name, base_rate, capacity, created_at
            FROM room_types
            WHERE tenant_id = $1
            ORDER BY name ASC
            "#,
        )
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(room_types)
    }

    pub async fn room_type_exists(
        &self,
        tenant_id: Uuid,
        room_type_id: Uuid,
    ) -> Result<bool, AppError> {
        let exists: (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM room_types WHERE id = $1 AND tenant_id = $2)",
        )
        .bind(room_type_id)
        .bind(tenant_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists.0)
    }

    // =========================================================================
    //  ROOMS
    // =========================================================================

    pub async fn create_room<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        room_type_id: Uuid,
        number: &str,
        floor: i32,
    ) -> Result<Room, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let room = sqlx::query_as::<_, Room>(
            r#"
            INSERT INTO rooms (tenant_id, room_type_id, number, floor)
            VALUES ($1, $2, $3, $4)
            RETURNING id, tenant_id, room_type_id, number, floor, status, created_at
            "#,
        )
        .bind(tenant_id)
        .bind(room_type_id)
        .bind(number)
        .bind(floor)
        .fetch_one(executor)
        .await
        .map_err(|e| map_unique(e, "A room with this number already exists."))?;

        Ok(room)
    }

    pub async fn list_rooms(&self, tenant_id: Uuid) -> Result<Vec<Room>, AppError> {
        let rooms = sqlx::query_as::<_, Room>(
            r#"
            SELECT id, tenant_id, room_type_id, number, floor, status, created_at
            FROM rooms
            WHERE tenant_id = $1
            ORDER BY number ASC
            "#,
        )
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rooms)
    }

    pub async fn find_room(&self, tenant_id: Uuid, room_id: Uuid) -> Result<Option<Room>, AppError> {
        let room = sqlx::query_as::<_, Room>(
            r#"
            SELECT id, tenant_id, room_type_id, number, floor, status, created_at
            FROM rooms
            WHERE id = $1 AND tenant_id = $2
            "#,
        )
        .bind(room_id)
        .bind(tenant_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(room)
    }

    pub async fn update_room_status<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        room_id: Uuid,
        status: RoomStatus,
    ) -> Result<Option<Room>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let room = sqlx::query_as::<_, Room>(
            r#"
            UPDATE rooms
            SET status = $3
            WHERE id = $1 AND tenant_id = $2
            RETURNING id, tenant_id, room_type_id, number, floor, status, created_at
            "#,
        )
        .bind(room_id)
        .bind(tenant_id)
        .bind(status)
        .fetch_optional(executor)
        .await?;

        Ok(room)
    }

    // =========================================================================
    //  BOOKINGS
    // =========================================================================

    pub async fn create_booking<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        customer_id: Uuid,
        room_id: Uuid,
        check_in: NaiveDate,
        check_out: NaiveDate,
        amount: Decimal,
    ) -> Result<Booking, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let booking = sqlx::query_as::<_, Booking>(&format!(
            r#"
            INSERT INTO bookings (tenant_id, customer_id, room_id, check_in, check_out, amount)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {BOOKING_COLUMNS}
            "#
        ))
        .bind(tenant_id)
        .bind(customer_id)
        .bind(room_id)
        .bind(check_in)
        .bind(check_out)
        .bind(amount)
        .fetch_one(executor)
        .await?;

        Ok(booking)
    }

    pub async fn list_bookings(&self, tenant_id: Uuid) -> Result<Vec<Booking>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE tenant_id = $1 ORDER BY check_in DESC"
        ))
        .bind(tenant_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    pub async fn update_booking_status<'e, E>(
        &self,
        executor: E,
        tenant_id: Uuid,
        booking_id: Uuid,
        status: BookingStatus,
    ) -> Result<Option<Booking>, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let booking = sqlx::query_as::<_, Booking>(&format!(
            r#"
            UPDATE bookings
            SET status = $3, updated_at = NOW()
            WHERE id = $1 AND tenant_id = $2
            RETURNING {BOOKING_COLUMNS}
            "#
        ))
        .bind(booking_id)
        .bind(tenant_id)
        .bind(status)
        .fetch_optional(executor)
        .await?;

        Ok(booking)
    }

    // Plain relational availability lookup: does any non-cancelled booking
    // for the room overlap [check_in, check_out)?
    pub async fn has_overlapping_booking(
        &self,
        room_id: Uuid,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<bool, AppError> {
        let exists: (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS (
                SELECT 1
                FROM bookings
                WHERE room_id = $1
                  AND status <> 'CANCELLED'
                  AND check_in < $3
                  AND check_out > $2
            )
            "#,
        )
        .bind(room_id)
        .bind(check_in)
        .bind(check_out)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists.0)
    }
}

fn map_unique(e: sqlx::Error, message: &str) -> AppError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() {
            return AppError::UniqueConstraintViolation(message.to_string());
        }
    }
    e.into()
}
