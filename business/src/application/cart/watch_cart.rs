use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::watch;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::watch_cart::WatchCartUseCase;
use crate::domain::logger::Logger;
use crate::domain::shared::fault_policy::StoreFaultPolicy;

pub struct WatchCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
    pub fault_policy: StoreFaultPolicy,
}

#[async_trait]
impl WatchCartUseCase for WatchCartUseCaseImpl {
    async fn execute(&self) -> Result<watch::Receiver<Vec<CartItem>>, CartError> {
        match self.repository.watch_all().await {
            Ok(view) => Ok(view),
            Err(err) => match self.fault_policy {
                StoreFaultPolicy::Absorb => {
                    self.logger
                        .error(&format!("Cart view degraded to empty: {err}"));
                    // Static empty view; the sender is gone so it never updates.
                    let (_, rx) = watch::channel(Vec::new());
                    Ok(rx)
                }
                StoreFaultPolicy::Surface => Err(err.into()),
            },
        }
    }
}
