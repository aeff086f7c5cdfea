//! In-memory reference store
//!
//! Implements every repository trait over `DashMap` collections. Used by the
//! engine's test suite and as the reference semantics for real store
//! adapters. `set_unavailable(true)` makes every call fail with
//! `StoreError::Unavailable`, which is how the fail-closed conflict path is
//! exercised.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::NaiveDateTime;
use dashmap::DashMap;
use shared::models::{Business, Customer, Shift, ShiftCreate, ShiftStatus};

use super::{
    BusinessRepository, CustomerRepository, IdAllocator, ShiftRepository, StoreError, StoreResult,
};

/// DashMap-backed document store plus sequential ID counters
#[derive(Default)]
pub struct MemoryStore {
    businesses: DashMap<String, Business>,
    customers: DashMap<String, Customer>,
    shifts: DashMap<String, Shift>,
    /// Counter per (business_id, prefix)
    counters: DashMap<(String, String), u64>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate a collaborator outage (tests)
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn insert_business(&self, business: Business) {
        self.businesses.insert(business.id.clone(), business);
    }

    pub fn insert_customer(&self, customer: Customer) {
        self.customers.insert(customer.id.clone(), customer);
    }

    /// Raw shift insert, bypassing the creation workflow (tests seed
    /// orphaned records with this)
    pub fn insert_shift(&self, shift: Shift) {
        self.shifts.insert(shift.id.clone(), shift);
    }

    fn check_available(&self) -> StoreResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("store flagged unavailable".into()));
        }
        Ok(())
    }

    fn now() -> NaiveDateTime {
        chrono::Utc::now().naive_utc()
    }
}

#[async_trait]
impl IdAllocator for MemoryStore {
    async fn next_id(&self, business_id: &str, prefix: &str) -> StoreResult<String> {
        self.check_available()?;
        let key = (business_id.to_string(), prefix.to_string());
        let mut counter = self.counters.entry(key).or_insert(0);
        *counter += 1;
        Ok(format!("{business_id}-{prefix}{:04}", *counter))
    }
}

#[async_trait]
impl ShiftRepository for MemoryStore {
    async fn create(&self, id: String, data: ShiftCreate) -> StoreResult<Shift> {
        self.check_available()?;
        let shift = Shift {
            id: id.clone(),
            business_id: data.business_id,
            customer_id: data.customer_id,
            seat: data.seat,
            start_time: data.start_time,
            end_time: data.end_time,
            payment_rate: data.payment_rate,
            status: ShiftStatus::Active,
            created_by: data.created_by,
            created_at: Self::now(),
        };
        self.shifts.insert(id, shift.clone());
        Ok(shift)
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Shift>> {
        self.check_available()?;
        Ok(self.shifts.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_by_ids(&self, ids: &[String]) -> StoreResult<Vec<Shift>> {
        self.check_available()?;
        Ok(ids
            .iter()
            .filter_map(|id| self.shifts.get(id).map(|entry| entry.value().clone()))
            .collect())
    }

    async fn find_active_in_window(
        &self,
        business_id: &str,
        window_start: NaiveDateTime,
        window_end: NaiveDateTime,
    ) -> StoreResult<Vec<Shift>> {
        self.check_available()?;
        Ok(self
            .shifts
            .iter()
            .filter(|entry| {
                let s = entry.value();
                s.business_id == business_id
                    && s.status == ShiftStatus::Active
                    && s.end_time > window_start
                    && s.start_time < window_end
            })
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn find_active_unallocated(&self, customer_id: &str) -> StoreResult<Vec<Shift>> {
        self.check_available()?;
        Ok(self
            .shifts
            .iter()
            .filter(|entry| {
                let s = entry.value();
                s.customer_id == customer_id
                    && s.status == ShiftStatus::Active
                    && s.seat.is_unallocated()
            })
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn find_active_by_business(&self, business_id: &str) -> StoreResult<Vec<Shift>> {
        self.check_available()?;
        Ok(self
            .shifts
            .iter()
            .filter(|entry| {
                let s = entry.value();
                s.business_id == business_id && s.status == ShiftStatus::Active
            })
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn set_status(&self, id: &str, status: ShiftStatus) -> StoreResult<()> {
        self.check_available()?;
        match self.shifts.get_mut(id) {
            Some(mut entry) => {
                entry.status = status;
                Ok(())
            }
            None => Err(StoreError::NotFound(format!("shift {id} not found"))),
        }
    }

    async fn set_status_batch(&self, ids: &[String], status: ShiftStatus) -> StoreResult<()> {
        self.check_available()?;
        for id in ids {
            match self.shifts.get_mut(id) {
                Some(mut entry) => entry.status = status,
                None => return Err(StoreError::NotFound(format!("shift {id} not found"))),
            }
        }
        Ok(())
    }
}

#[async_trait]
impl CustomerRepository for MemoryStore {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Customer>> {
        self.check_available()?;
        Ok(self.customers.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_by_business(&self, business_id: &str) -> StoreResult<Vec<Customer>> {
        self.check_available()?;
        Ok(self
            .customers
            .iter()
            .filter(|entry| entry.value().business_id == business_id)
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn update(&self, customer: &Customer) -> StoreResult<()> {
        self.check_available()?;
        if !self.customers.contains_key(&customer.id) {
            return Err(StoreError::NotFound(format!(
                "customer {} not found",
                customer.id
            )));
        }
        self.customers.insert(customer.id.clone(), customer.clone());
        Ok(())
    }
}

#[async_trait]
impl BusinessRepository for MemoryStore {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Business>> {
        self.check_available()?;
        Ok(self.businesses.get(id).map(|entry| entry.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ids_are_sequential_per_business_and_prefix() {
        let store = MemoryStore::new();
        assert_eq!(store.next_id("b1", "SH").await.unwrap(), "b1-SH0001");
        assert_eq!(store.next_id("b1", "SH").await.unwrap(), "b1-SH0002");
        // Different business or prefix gets its own counter
        assert_eq!(store.next_id("b2", "SH").await.unwrap(), "b2-SH0001");
        assert_eq!(store.next_id("b1", "LV").await.unwrap(), "b1-LV0001");
    }

    #[tokio::test]
    async fn unavailable_flag_fails_every_call() {
        let store = MemoryStore::new();
        store.set_unavailable(true);
        let err = store.next_id("b1", "SH").await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
        let err = ShiftRepository::find_by_id(&store, "x").await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable(_)));
    }
}
