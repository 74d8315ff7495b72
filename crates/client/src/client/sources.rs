//! Source API methods for [`QuickwitClient`].

use crate::client::QuickwitClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::SourceConfig;

impl QuickwitClient {
    /// Attach a source to an index. Returns the config as stored by the service.
    pub async fn create_source(&self, index_id: &str, config: &SourceConfig) -> Result<SourceConfig> {
        let request = self.prepare(endpoints::create_source(&self.endpoint, index_id, config)?);
        self.run(endpoints::request_value(self.transport.as_ref(), request))
            .await
    }

    /// Detach a source from an index.
    pub async fn delete_source(&self, index_id: &str, source_id: &str) -> Result<()> {
        let request =
            self.prepare(endpoints::delete_source(&self.endpoint, index_id, source_id)?);
        self.run(endpoints::request_no_content(self.transport.as_ref(), request))
            .await
    }
}
