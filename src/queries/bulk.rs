//! Bulk-data export metadata.

use crate::error::Result;
use crate::models::BulkData;
use crate::pagination::Paginated;
use crate::transport::Transport;

pub struct BulkDataQuery<'a> {
    transport: &'a Transport,
}

impl<'a> BulkDataQuery<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub fn list(&self) -> Result<Paginated<'a, BulkData>> {
        let page = self.transport.get_object("/bulk-data", &[])?;
        Ok(Paginated::from_page(self.transport, page))
    }

    pub fn by_id(&self, id: &str) -> Result<BulkData> {
        self.transport
            .get_object(&format!("/bulk-data/{}", id), &[])
    }

    pub fn by_type(&self, bulk_type: &str) -> Result<BulkData> {
        self.transport
            .get_object(&format!("/bulk-data/{}", bulk_type), &[])
    }
}
