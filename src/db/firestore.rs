// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Devices (registration profile and last computed streak)
//! - Activities (one document per device per day)

use crate::db::collections;
use crate::error::AppError;
use crate::models::{ActivityRecord, Device};

// Firestore limits batch/transaction writes to 500 operations.
// We use a safe limit of 400 to allow headroom.
const BATCH_SIZE: usize = 400;

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: firestore::FirestoreDb,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self { client })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(project = project_id, "Connected to Firestore emulator");

        Ok(Self { client })
    }

    // ─── Device Operations ───────────────────────────────────────

    /// Get a device by ID.
    pub async fn get_device(&self, device_id: &str) -> Result<Option<Device>, AppError> {
        self.client
            .fluent()
            .select()
            .by_id_in(collections::DEVICES)
            .obj()
            .one(&device_document_id(device_id))
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    // ─── Activity Operations ─────────────────────────────────────

    /// Get all activity records for a device, newest first.
    pub async fn get_activities_for_device(
        &self,
        device_id: &str,
    ) -> Result<Vec<ActivityRecord>, AppError> {
        self.client
            .fluent()
            .select()
            .from(collections::ACTIVITIES)
            .filter(|q| q.for_all([q.field("device_id").eq(device_id)]))
            .order_by([("date", firestore::FirestoreQueryDirection::Descending)])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Atomically store the device and today's activity record.
    ///
    /// Both writes go through one transaction so the stored streak on the
    /// device never disagrees with the activity documents.
    pub async fn save_registration(
        &self,
        device: &Device,
        record: &ActivityRecord,
    ) -> Result<(), AppError> {
        let mut transaction = self
            .client
            .begin_transaction()
            .await
            .map_err(|e| AppError::Database(format!("Failed to begin transaction: {}", e)))?;

        self.client
            .fluent()
            .update()
            .in_col(collections::ACTIVITIES)
            .document_id(record.document_id())
            .object(record)
            .add_to_transaction(&mut transaction)
            .map_err(|e| {
                AppError::Database(format!("Failed to add activity to transaction: {}", e))
            })?;

        self.client
            .fluent()
            .update()
            .in_col(collections::DEVICES)
            .document_id(device_document_id(&device.device_id))
            .object(device)
            .add_to_transaction(&mut transaction)
            .map_err(|e| {
                AppError::Database(format!("Failed to add device to transaction: {}", e))
            })?;

        transaction
            .commit()
            .await
            .map_err(|e| AppError::Database(format!("Transaction commit failed: {}", e)))?;

        tracing::debug!(
            device_id = %device.device_id,
            date = %record.date,
            "Registration saved atomically"
        );

        Ok(())
    }

    // ─── Deletion ────────────────────────────────────────────────

    /// Helper to batch delete documents using transactions.
    async fn batch_delete(&self, doc_ids: &[String], collection: &str) -> Result<(), AppError> {
        for chunk in doc_ids.chunks(BATCH_SIZE) {
            let mut transaction = self
                .client
                .begin_transaction()
                .await
                .map_err(|e| AppError::Database(format!("Failed to begin transaction: {}", e)))?;

            for doc_id in chunk {
                self.client
                    .fluent()
                    .delete()
                    .from(collection)
                    .document_id(doc_id)
                    .add_to_transaction(&mut transaction)
                    .map_err(|e| {
                        AppError::Database(format!(
                            "Failed to add deletion to transaction for {}: {}",
                            collection, e
                        ))
                    })?;
            }

            transaction.commit().await.map_err(|e| {
                AppError::Database(format!("Failed to commit batch deletion: {}", e))
            })?;
        }

        Ok(())
    }

    /// Delete a device and all of its activity records.
    ///
    /// Returns the number of documents deleted.
    pub async fn delete_device_data(&self, device_id: &str) -> Result<usize, AppError> {
        let activities = self.get_activities_for_device(device_id).await?;
        let doc_ids: Vec<String> = activities
            .iter()
            .map(ActivityRecord::document_id)
            .collect();

        self.batch_delete(&doc_ids, collections::ACTIVITIES).await?;
        let mut deleted_count = doc_ids.len();
        tracing::debug!(device_id, count = deleted_count, "Deleted activities");

        if self.get_device(device_id).await?.is_some() {
            self.client
                .fluent()
                .delete()
                .from(collections::DEVICES)
                .document_id(device_document_id(device_id))
                .execute()
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            deleted_count += 1;
        }

        tracing::info!(device_id, deleted_count, "Device data deletion complete");

        Ok(deleted_count)
    }
}

/// Device IDs are client-supplied, so escape them before use as document IDs.
fn device_document_id(device_id: &str) -> String {
    urlencoding::encode(device_id).into_owned()
}
