//! Local append-only progress logs.

use std::sync::Arc;

use async_trait::async_trait;
use kv_store::{collection, keys, KeyValueStore};
use serde::de::DeserializeOwned;
use serde::Serialize;
use symmetry_core::{BodyMeasurement, CardioLog, PhysiqueScan, ProgressService, Result};

use crate::error::storage;
use crate::locks::CollectionLocks;
use crate::BACKEND;

/// A log entry that belongs to one user.
trait Owned {
    fn owner(&self) -> &str;
}

impl Owned for BodyMeasurement {
    fn owner(&self) -> &str {
        &self.user_id
    }
}

impl Owned for PhysiqueScan {
    fn owner(&self) -> &str {
        &self.user_id
    }
}

impl Owned for CardioLog {
    fn owner(&self) -> &str {
        &self.user_id
    }
}

/// Measurements, scans and cardio sessions, each an array in creation order.
pub struct LocalProgressService {
    store: Arc<dyn KeyValueStore>,
    locks: Arc<CollectionLocks>,
}

impl LocalProgressService {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_locks(store, Arc::new(CollectionLocks::new()))
    }

    pub fn with_locks(store: Arc<dyn KeyValueStore>, locks: Arc<CollectionLocks>) -> Self {
        Self { store, locks }
    }

    fn list<T>(&self, key: &str, user_id: &str) -> Vec<T>
    where
        T: Owned + DeserializeOwned,
    {
        collection::read_all::<T, _>(self.store.as_ref(), key)
            .into_iter()
            .filter(|entry| entry.owner() == user_id)
            .collect()
    }

    async fn append<T>(&self, key: &str, entry: T) -> Result<T>
    where
        T: Clone + Serialize + DeserializeOwned,
    {
        let _guard = self.locks.lock(key).await;
        let mut entries: Vec<T> = collection::read_all(self.store.as_ref(), key);
        entries.push(entry.clone());
        collection::write_all(self.store.as_ref(), key, &entries).map_err(storage)?;
        tracing::debug!(key, total = entries.len(), "Appended log entry");
        Ok(entry)
    }
}

#[async_trait]
impl ProgressService for LocalProgressService {
    async fn get_body_measurements(&self, user_id: &str) -> Result<Vec<BodyMeasurement>> {
        Ok(self.list(keys::BODY_MEASUREMENTS, user_id))
    }

    async fn add_body_measurement(
        &self,
        measurement: BodyMeasurement,
    ) -> Result<BodyMeasurement> {
        self.append(keys::BODY_MEASUREMENTS, measurement).await
    }

    async fn get_physique_scans(&self, user_id: &str) -> Result<Vec<PhysiqueScan>> {
        Ok(self.list(keys::PHYSIQUE_SCANS, user_id))
    }

    async fn add_physique_scan(&self, scan: PhysiqueScan) -> Result<PhysiqueScan> {
        self.append(keys::PHYSIQUE_SCANS, scan).await
    }

    async fn get_cardio_logs(&self, user_id: &str) -> Result<Vec<CardioLog>> {
        Ok(self.list(keys::CARDIO_LOGS, user_id))
    }

    async fn add_cardio_log(&self, log: CardioLog) -> Result<CardioLog> {
        self.append(keys::CARDIO_LOGS, log).await
    }

    fn backend(&self) -> &str {
        BACKEND
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use kv_store::MemoryStore;
    use symmetry_core::{CardioType, Intensity, MuscleAnalysis, MuscleGroup, MuscleStatus, Pose};

    fn cardio(id: &str, user_id: &str, minutes: u32) -> CardioLog {
        CardioLog {
            id: id.to_string(),
            user_id: user_id.to_string(),
            date: Utc.with_ymd_and_hms(2025, 3, 1, 7, 30, 0).unwrap(),
            kind: CardioType::Running,
            duration_minutes: minutes,
            intensity: Intensity::Moderate,
            calories_burned: Some(300),
            distance: Some(5.0),
            notes: None,
        }
    }

    fn scan(id: &str, user_id: &str) -> PhysiqueScan {
        PhysiqueScan {
            id: id.to_string(),
            user_id: user_id.to_string(),
            date: Utc.with_ymd_and_hms(2025, 3, 2, 8, 15, 0).unwrap(),
            image_url: Some(format!("file:///scans/{}.jpg", id)),
            pose: Pose::FrontDoubleBicep,
            symmetry_score: 87.5,
            muscle_analysis: vec![
                MuscleAnalysis {
                    muscle: MuscleGroup::Biceps,
                    status: MuscleStatus::Lagging,
                    left_score: Some(78.25),
                    right_score: Some(84.0),
                    symmetry_delta: Some(6.9),
                    recommendation: Some("Add single-arm curls on the left".to_string()),
                },
                MuscleAnalysis {
                    muscle: MuscleGroup::Chest,
                    status: MuscleStatus::Balanced,
                    left_score: None,
                    right_score: None,
                    symmetry_delta: None,
                    recommendation: None,
                },
                MuscleAnalysis {
                    muscle: MuscleGroup::Quads,
                    status: MuscleStatus::Strong,
                    left_score: Some(91.0),
                    right_score: None,
                    symmetry_delta: Some(0.0),
                    recommendation: None,
                },
            ],
            overall_assessment: "Arms trail the torso".to_string(),
        }
    }

    #[tokio::test]
    async fn test_physique_scans_roundtrip() {
        let service = LocalProgressService::new(Arc::new(MemoryStore::new("test")));
        let first = service.add_physique_scan(scan("s1", "u1")).await.unwrap();
        service.add_physique_scan(scan("s2", "u2")).await.unwrap();
        let second = service.add_physique_scan(scan("s3", "u1")).await.unwrap();

        let scans = service.get_physique_scans("u1").await.unwrap();
        assert_eq!(scans, vec![scan("s1", "u1"), scan("s3", "u1")]);
        assert_eq!(
            serde_json::to_string(&scans).unwrap(),
            serde_json::to_string(&vec![first, second]).unwrap()
        );

        let other = service.get_physique_scans("u2").await.unwrap();
        assert_eq!(other.len(), 1);
        assert_eq!(other[0].muscle_analysis.len(), 3);
        assert!(service.get_physique_scans("nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_cardio_logs_roundtrip() {
        let service = LocalProgressService::new(Arc::new(MemoryStore::new("test")));
        let written = service.add_cardio_log(cardio("c1", "u1", 30)).await.unwrap();

        let logs = service.get_cardio_logs("u1").await.unwrap();
        assert_eq!(logs, vec![written]);
    }

    #[tokio::test]
    async fn test_logs_scoped_to_user() {
        let service = LocalProgressService::new(Arc::new(MemoryStore::new("test")));
        service.add_cardio_log(cardio("c1", "u1", 30)).await.unwrap();
        service.add_cardio_log(cardio("c2", "u2", 45)).await.unwrap();
        service.add_cardio_log(cardio("c3", "u1", 20)).await.unwrap();

        let ids: Vec<String> = service
            .get_cardio_logs("u1")
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.id)
            .collect();
        assert_eq!(ids, vec!["c1", "c3"]);
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_not_lost() {
        let service = Arc::new(LocalProgressService::new(Arc::new(MemoryStore::new("test"))));

        let mut handles = Vec::new();
        for n in 0..16 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service
                    .add_cardio_log(cardio(&format!("c{}", n), "u1", n))
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(service.get_cardio_logs("u1").await.unwrap().len(), 16);
    }
}
