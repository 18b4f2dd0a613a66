use std::sync::{Arc, Mutex};

use chrono::Local;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use business::domain::cart::errors::CartError;
use business::domain::cart::model::CartItem;
use business::domain::cart::use_cases::add_to_cart::AddToCartUseCase;
use business::domain::cart::use_cases::clear_cart::ClearCartUseCase;
use business::domain::cart::use_cases::remove_from_cart::RemoveFromCartUseCase;
use business::domain::cart::use_cases::remove_or_decrement::RemoveOrDecrementUseCase;
use business::domain::cart::use_cases::watch_cart::WatchCartUseCase;

use super::coupon::{Coupon, seasonal_coupons};

#[derive(Debug, Clone, PartialEq)]
pub enum CartState {
    Loading,
    EmptyList,
    Success(Vec<CartItem>),
    Error(String),
}

/// Holds the cart screen's discrete state, fed by the live cart view.
///
/// `refresh` abandons the previous subscription, re-emits `Loading`, and
/// follows the store view until the next refresh or drop.
pub struct CartStateHolder {
    watch_cart: Arc<dyn WatchCartUseCase>,
    add_to_cart: Arc<dyn AddToCartUseCase>,
    remove_or_decrement: Arc<dyn RemoveOrDecrementUseCase>,
    remove_from_cart: Arc<dyn RemoveFromCartUseCase>,
    clear_cart: Arc<dyn ClearCartUseCase>,
    state: Arc<watch::Sender<CartState>>,
    coupons: Vec<Coupon>,
    coupon_code_input: Arc<watch::Sender<String>>,
    selected_coupon: Arc<watch::Sender<Option<Coupon>>>,
    subscription: Mutex<Option<JoinHandle<()>>>,
}

impl CartStateHolder {
    pub fn new(
        watch_cart: Arc<dyn WatchCartUseCase>,
        add_to_cart: Arc<dyn AddToCartUseCase>,
        remove_or_decrement: Arc<dyn RemoveOrDecrementUseCase>,
        remove_from_cart: Arc<dyn RemoveFromCartUseCase>,
        clear_cart: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        let (state, _) = watch::channel(CartState::Loading);
        let (coupon_code_input, _) = watch::channel(String::new());
        let (selected_coupon, _) = watch::channel(None);

        Self {
            watch_cart,
            add_to_cart,
            remove_or_decrement,
            remove_from_cart,
            clear_cart,
            state: Arc::new(state),
            coupons: seasonal_coupons(Local::now().date_naive()),
            coupon_code_input: Arc::new(coupon_code_input),
            selected_coupon: Arc::new(selected_coupon),
            subscription: Mutex::new(None),
        }
    }

    pub fn state(&self) -> watch::Receiver<CartState> {
        self.state.subscribe()
    }

    pub async fn refresh(&self) {
        self.state.send_replace(CartState::Loading);
        self.abandon_subscription();

        match self.watch_cart.execute().await {
            Ok(mut view) => {
                let state = self.state.clone();
                let task = tokio::spawn(async move {
                    loop {
                        let items = view.borrow_and_update().clone();
                        state.send_replace(if items.is_empty() {
                            CartState::EmptyList
                        } else {
                            CartState::Success(items)
                        });

                        if view.changed().await.is_err() {
                            break;
                        }
                    }
                });

                if let Ok(mut subscription) = self.subscription.lock() {
                    *subscription = Some(task);
                }
            }
            Err(err) => {
                self.state.send_replace(CartState::Error(err.to_string()));
            }
        }
    }

    pub async fn add_to_cart(&self, item: &CartItem) -> Result<(), CartError> {
        self.add_to_cart.execute(item).await
    }

    pub async fn remove_or_decrement(&self, product_id: i64) -> Result<(), CartError> {
        self.remove_or_decrement.execute(product_id).await
    }

    pub async fn remove_from_cart(&self, product_id: i64) -> Result<(), CartError> {
        self.remove_from_cart.execute(product_id).await
    }

    pub async fn remove_all_from_cart(&self) -> Result<(), CartError> {
        self.clear_cart.execute().await
    }

    pub fn coupons(&self) -> &[Coupon] {
        &self.coupons
    }

    pub fn coupon_code_input(&self) -> watch::Receiver<String> {
        self.coupon_code_input.subscribe()
    }

    pub fn change_coupon_code_input(&self, input: &str) {
        self.coupon_code_input.send_replace(input.to_string());
    }

    pub fn selected_coupon(&self) -> watch::Receiver<Option<Coupon>> {
        self.selected_coupon.subscribe()
    }

    /// Selecting an unknown code clears the selection.
    pub fn change_selected_coupon(&self, coupon_code: &str) {
        let selected = self
            .coupons
            .iter()
            .find(|c| c.coupon_code == coupon_code)
            .cloned();
        self.selected_coupon.send_replace(selected);
    }

    fn abandon_subscription(&self) {
        if let Ok(mut subscription) = self.subscription.lock()
            && let Some(task) = subscription.take()
        {
            task.abort();
        }
    }
}

impl Drop for CartStateHolder {
    fn drop(&mut self) {
        self.abandon_subscription();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::errors::RepositoryError;
    use mockall::mock;

    mock! {
        pub WatchCart {}

        #[async_trait]
        impl WatchCartUseCase for WatchCart {
            async fn execute(&self) -> Result<watch::Receiver<Vec<CartItem>>, CartError>;
        }
    }

    mock! {
        pub AddToCart {}

        #[async_trait]
        impl AddToCartUseCase for AddToCart {
            async fn execute(&self, item: &CartItem) -> Result<(), CartError>;
        }
    }

    mock! {
        pub RemoveOrDecrement {}

        #[async_trait]
        impl RemoveOrDecrementUseCase for RemoveOrDecrement {
            async fn execute(&self, product_id: i64) -> Result<(), CartError>;
        }
    }

    mock! {
        pub RemoveFromCart {}

        #[async_trait]
        impl RemoveFromCartUseCase for RemoveFromCart {
            async fn execute(&self, product_id: i64) -> Result<(), CartError>;
        }
    }

    mock! {
        pub ClearCart {}

        #[async_trait]
        impl ClearCartUseCase for ClearCart {
            async fn execute(&self) -> Result<(), CartError>;
        }
    }

    fn holder_with_watch(watch_cart: MockWatchCart) -> CartStateHolder {
        CartStateHolder::new(
            Arc::new(watch_cart),
            Arc::new(MockAddToCart::new()),
            Arc::new(MockRemoveOrDecrement::new()),
            Arc::new(MockRemoveFromCart::new()),
            Arc::new(MockClearCart::new()),
        )
    }

    fn item(id: i64) -> CartItem {
        CartItem::from_repository(
            id,
            String::new(),
            9.99,
            format!("Product {id}"),
            "electronics".to_string(),
            1,
        )
    }

    #[tokio::test]
    async fn starts_in_loading() {
        let holder = holder_with_watch(MockWatchCart::new());

        assert_eq!(*holder.state().borrow(), CartState::Loading);
    }

    #[tokio::test]
    async fn empty_snapshot_maps_to_empty_list() {
        let mut watch_cart = MockWatchCart::new();
        watch_cart.expect_execute().returning(|| {
            let (_, rx) = watch::channel(Vec::new());
            Ok(rx)
        });
        let holder = holder_with_watch(watch_cart);

        holder.refresh().await;
        let mut state = holder.state();
        state
            .wait_for(|s| *s == CartState::EmptyList)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn snapshot_with_rows_maps_to_success() {
        let mut watch_cart = MockWatchCart::new();
        watch_cart.expect_execute().returning(|| {
            let (tx, rx) = watch::channel(vec![item(1), item(2)]);
            std::mem::forget(tx);
            Ok(rx)
        });
        let holder = holder_with_watch(watch_cart);

        holder.refresh().await;
        let mut state = holder.state();
        let observed = state
            .wait_for(|s| matches!(s, CartState::Success(_)))
            .await
            .unwrap()
            .clone();

        assert_eq!(observed, CartState::Success(vec![item(1), item(2)]));
    }

    #[tokio::test]
    async fn live_updates_flow_into_the_state() {
        let (tx, rx) = watch::channel(Vec::new());
        let mut watch_cart = MockWatchCart::new();
        let view = Mutex::new(Some(rx));
        watch_cart
            .expect_execute()
            .returning(move || Ok(view.lock().unwrap().take().unwrap()));
        let holder = holder_with_watch(watch_cart);

        holder.refresh().await;
        let mut state = holder.state();
        state
            .wait_for(|s| *s == CartState::EmptyList)
            .await
            .unwrap();

        tx.send(vec![item(3)]).unwrap();
        state
            .wait_for(|s| matches!(s, CartState::Success(_)))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn surfaced_store_fault_maps_to_error() {
        let mut watch_cart = MockWatchCart::new();
        watch_cart
            .expect_execute()
            .returning(|| Err(CartError::Repository(RepositoryError::DatabaseError)));
        let holder = holder_with_watch(watch_cart);

        holder.refresh().await;

        assert_eq!(
            *holder.state().borrow(),
            CartState::Error("repository.persistence".to_string())
        );
    }

    #[tokio::test]
    async fn coupon_selection_by_code() {
        let holder = holder_with_watch(MockWatchCart::new());

        holder.change_selected_coupon("WELCOME20");
        assert_eq!(
            holder
                .selected_coupon()
                .borrow()
                .as_ref()
                .map(|c| c.coupon_code.clone()),
            Some("WELCOME20".to_string())
        );

        holder.change_selected_coupon("BOGUS");
        assert!(holder.selected_coupon().borrow().is_none());
    }
}
