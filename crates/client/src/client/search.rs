//! Search API method for [`QuickwitClient`].

use crate::client::QuickwitClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::SearchResponse;

impl QuickwitClient {
    /// Run a query against an index.
    ///
    /// The query is sent as-is in the URL; percent-encode any character
    /// with a meaning in URLs before calling.
    pub async fn search(&self, index_id: &str, query: &str) -> Result<SearchResponse> {
        let request = self.prepare(endpoints::search(&self.endpoint, index_id, query)?);
        self.run(endpoints::request_value(self.transport.as_ref(), request))
            .await
    }
}
