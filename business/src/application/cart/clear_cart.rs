use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::clear_cart::ClearCartUseCase;
use crate::domain::logger::Logger;
use crate::domain::shared::fault_policy::StoreFaultPolicy;

pub struct ClearCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
    pub fault_policy: StoreFaultPolicy,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self) -> Result<(), CartError> {
        self.logger.info("Clearing the cart");

        match self.repository.remove_all().await {
            Ok(()) => Ok(()),
            Err(err) => match self.fault_policy {
                StoreFaultPolicy::Absorb => {
                    self.logger.error(&format!("Cart clear dropped: {err}"));
                    Ok(())
                }
                StoreFaultPolicy::Surface => Err(err.into()),
            },
        }
    }
}
