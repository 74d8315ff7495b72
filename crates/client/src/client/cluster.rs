//! Cluster information methods for [`QuickwitClient`].

use crate::client::QuickwitClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Cluster;

impl QuickwitClient {
    /// Elasticsearch-compatible root info.
    ///
    /// Decoded into [`Cluster`]; the fields Quickwit does not send stay at
    /// their defaults.
    pub async fn get_elastic(&self) -> Result<Cluster> {
        let request = self.prepare(endpoints::get_elastic(&self.endpoint)?);
        self.run(endpoints::request_value(self.transport.as_ref(), request))
            .await
    }

    /// Cluster membership and gossip state.
    pub async fn get_cluster(&self) -> Result<Cluster> {
        let request = self.prepare(endpoints::get_cluster(&self.endpoint)?);
        self.run(endpoints::request_value(self.transport.as_ref(), request))
            .await
    }
}
