//! GetQuotationCountHandler - Query handler for the welcome-screen counter.

use crate::application::handlers::KioskState;
use crate::ports::KeyValueStoreError;

pub struct GetQuotationCountHandler {
    state: KioskState,
}

impl GetQuotationCountHandler {
    pub fn new(state: KioskState) -> Self {
        Self { state }
    }

    pub async fn handle(&self) -> Result<u64, KeyValueStoreError> {
        Ok(self.state.load_counter().await?.value())
    }
}
