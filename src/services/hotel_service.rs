// src/services/hotel_service.rs

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{CrmRepository, HotelRepository},
    models::hotel::{
        Booking, BookingStatus, CreateBookingPayload, CreateRoomPayload, CreateRoomTypePayload,
        Room, RoomStatus, RoomType,
    },
};

#[derive(Clone)]
pub struct HotelService {
    repo: HotelRepository,
    crm_repo: CrmRepository,
    pool: PgPool,
}

impl HotelService {
    pub fn new(repo: HotelRepository, crm_repo: CrmRepository, pool: PgPool) -> Self {
        Self { repo, crm_repo, pool }
    }

    // =========================================================================
    //  ROOM INVENTORY
    // =========================================================================

    pub async fn create_room_type(
        &self,
        tenant_id: Uuid,
        payload: CreateRoomTypePayload,
    ) -> Result<RoomType, AppError> {
        let mut tx = self.pool.begin().await?;
        let room_type = self
            .repo
            .create_room_type(&mut *tx, tenant_id, &payload.name, payload.base_rate, payload.capacity)
            .await?;
        tx.commit().await?;

        Ok(room_type)
    }

    pub async fn list_room_types(&self, tenant_id: Uuid) -> Result<Vec<RoomType>, AppError> {
        self.repo.list_room_types(tenant_id).await
    }

    pub async fn create_room(
        &self,
        tenant_id: Uuid,
        payload: CreateRoomPayload,
    ) -> Result<Room, AppError> {
        if !self.repo.room_type_exists(tenant_id, payload.room_type_id).await? {
            return Err(AppError::NotFound("Room type"));
        }

        let mut tx = self.pool.begin().await?;
        let room = self
            .repo
            .create_room(&mut *tx, tenant_id, payload.room_type_id, &payload.number, payload.floor)
            .await?;
        tx.commit().await?;

        Ok(room)
    }

    pub async fn list_rooms(&self, tenant_id: Uuid) -> Result<Vec<Room>, AppError> {
        self.repo.list_rooms(tenant_id).await
    }

    pub async fn set_room_status(
        &self,
        tenant_id: Uuid,
        room_id: Uuid,
        status: RoomStatus,
    ) -> Result<Room, AppError> {
        let mut tx = self.pool.begin().await?;
        let room = self
            .repo
            .update_room_status(&mut *tx, tenant_id, room_id, status)
            .await?
            .ok_or(AppError::NotFound("Room"))?;
        tx.commit().await?;

        Ok(room)
    }

    // =========================================================================
    //  BOOKINGS
    // =========================================================================

    pub async fn create_booking(
        &self,
        tenant_id: Uuid,
        payload: CreateBookingPayload,
    ) -> Result<Booking, AppError> {
        validate_stay(payload.check_in, payload.check_out)?;

        self.crm_repo
            .find_customer(tenant_id, payload.customer_id)
            .await?
            .ok_or(AppError::NotFound("Customer"))?;

        self.repo
            .find_room(tenant_id, payload.room_id)
            .await?
            .ok_or(AppError::NotFound("Room"))?;

        if self
            .repo
            .has_overlapping_booking(payload.room_id, payload.check_in, payload.check_out)
            .await?
        {
            return Err(AppError::RoomUnavailable);
        }

        let mut tx = self.pool.begin().await?;
        let booking = self
            .repo
            .create_booking(
                &mut *tx,
                tenant_id,
                payload.customer_id,
                payload.room_id,
                payload.check_in,
                payload.check_out,
                payload.amount,
            )
            .await?;
        tx.commit().await?;

        tracing::info!(booking_id = %booking.id, room_id = %booking.room_id, "booking created");

        Ok(booking)
    }

    pub async fn list_bookings(&self, tenant_id: Uuid) -> Result<Vec<Booking>, AppError> {
        self.repo.list_bookings(tenant_id).await
    }

    pub async fn set_booking_status(
        &self,
        tenant_id: Uuid,
        booking_id: Uuid,
        status: BookingStatus,
    ) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await?;
        let booking = self
            .repo
            .update_booking_status(&mut *tx, tenant_id, booking_id, status)
            .await?
            .ok_or(AppError::NotFound("Booking"))?;
        tx.commit().await?;

        Ok(booking)
    }
}

fn validate_stay(check_in: NaiveDate, check_out: NaiveDate) -> Result<(), AppError> {
    if check_out <= check_in {
        return Err(AppError::InvalidStayDates(
            "Check-out must be after check-in.".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn stay_must_cover_at_least_one_night() {
        assert!(validate_stay(date(2026, 9, 12), date(2026, 9, 13)).is_ok());
        assert!(validate_stay(date(2026, 9, 12), date(2026, 9, 12)).is_err());
        assert!(validate_stay(date(2026, 9, 13), date(2026, 9, 12)).is_err());
    }
}
