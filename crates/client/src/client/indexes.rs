//! Index API methods for [`QuickwitClient`].
//!
//! # What this module handles:
//! - Listing, reading, creating, deleting and clearing indexes
//! - Index statistics (`describe`) and split listing
//!
//! # What this module does NOT handle:
//! - Request construction (in [`crate::endpoints`])

use crate::client::QuickwitClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Describe, Index, IndexConfig, SplitsResponse};

impl QuickwitClient {
    /// List all indexes.
    ///
    /// Non-2xx responses surface as [`ClientError::StatusError`](crate::ClientError::StatusError),
    /// without the service's error message.
    pub async fn list_indexes(&self) -> Result<Vec<Index>> {
        let request = self.prepare(endpoints::list_indexes(&self.endpoint)?);
        self.run(endpoints::request_list(self.transport.as_ref(), request))
            .await
    }

    /// Get an index by id.
    pub async fn get_index(&self, index_id: &str) -> Result<Index> {
        let request = self.prepare(endpoints::get_index(&self.endpoint, index_id)?);
        self.run(endpoints::request_value(self.transport.as_ref(), request))
            .await
    }

    /// Create an index and return its metadata.
    pub async fn create_index(&self, config: &IndexConfig) -> Result<Index> {
        let request = self.prepare(endpoints::create_index(&self.endpoint, config)?);
        self.run(endpoints::request_value(self.transport.as_ref(), request))
            .await
    }

    /// Delete an index and all its splits.
    pub async fn delete_index(&self, index_id: &str) -> Result<()> {
        let request = self.prepare(endpoints::delete_index(&self.endpoint, index_id)?);
        self.run(endpoints::request_no_content(self.transport.as_ref(), request))
            .await
    }

    /// Remove every split of an index, keeping the index itself.
    pub async fn clear_index(&self, index_id: &str) -> Result<()> {
        let request = self.prepare(endpoints::clear_index(&self.endpoint, index_id)?);
        self.run(endpoints::request_no_content(self.transport.as_ref(), request))
            .await
    }

    /// Get summary statistics of an index.
    pub async fn describe_index(&self, index_id: &str) -> Result<Describe> {
        let request = self.prepare(endpoints::describe_index(&self.endpoint, index_id)?);
        self.run(endpoints::request_value(self.transport.as_ref(), request))
            .await
    }

    /// List the splits of an index.
    pub async fn list_splits(&self, index_id: &str) -> Result<SplitsResponse> {
        let request = self.prepare(endpoints::list_splits(&self.endpoint, index_id)?);
        self.run(endpoints::request_value(self.transport.as_ref(), request))
            .await
    }
}
