use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::watch_quantity::WatchQuantityUseCase;
use crate::domain::logger::Logger;
use crate::domain::shared::fault_policy::StoreFaultPolicy;

pub struct WatchQuantityUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
    pub fault_policy: StoreFaultPolicy,
}

#[async_trait]
impl WatchQuantityUseCase for WatchQuantityUseCaseImpl {
    async fn execute(&self, product_id: i64) -> Result<watch::Receiver<Option<i64>>, CartError> {
        match self.repository.watch_quantity(product_id).await {
            Ok(view) => Ok(view),
            Err(err) => match self.fault_policy {
                StoreFaultPolicy::Absorb => {
                    self.logger.error(&format!(
                        "Quantity view for product {product_id} degraded to absent: {err}"
                    ));
                    let (_, rx) = watch::channel(None);
                    Ok(rx)
                }
                StoreFaultPolicy::Surface => Err(err.into()),
            },
        }
    }
}
