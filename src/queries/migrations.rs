//! Card migration records.

use crate::error::Result;
use crate::models::Migration;
use crate::pagination::Paginated;
use crate::transport::Transport;

pub struct MigrationQuery<'a> {
    transport: &'a Transport,
}

impl<'a> MigrationQuery<'a> {
    pub fn new(transport: &'a Transport) -> Self {
        Self { transport }
    }

    pub fn list(&self) -> Result<Paginated<'a, Migration>> {
        let page = self.transport.get_object("/migrations", &[])?;
        Ok(Paginated::from_page(self.transport, page))
    }

    pub fn by_id(&self, id: &str) -> Result<Migration> {
        self.transport
            .get_object(&format!("/migrations/{}", id), &[])
    }
}
