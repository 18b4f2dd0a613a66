use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_from_cart::RemoveFromCartUseCase;
use crate::domain::logger::Logger;
use crate::domain::shared::fault_policy::StoreFaultPolicy;

pub struct RemoveFromCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
    pub fault_policy: StoreFaultPolicy,
}

#[async_trait]
impl RemoveFromCartUseCase for RemoveFromCartUseCaseImpl {
    async fn execute(&self, product_id: i64) -> Result<(), CartError> {
        self.logger
            .info(&format!("Removing product {product_id} from cart"));

        match self.repository.remove(product_id).await {
            Ok(()) => Ok(()),
            Err(err) => match self.fault_policy {
                StoreFaultPolicy::Absorb => {
                    self.logger.error(&format!(
                        "Cart write dropped for product {product_id}: {err}"
                    ));
                    Ok(())
                }
                StoreFaultPolicy::Surface => Err(err.into()),
            },
        }
    }
}
