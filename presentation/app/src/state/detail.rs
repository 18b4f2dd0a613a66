use std::sync::Arc;

use tokio::sync::watch;

use business::domain::cart::errors::CartError;
use business::domain::cart::model::CartItem;
use business::domain::cart::use_cases::add_to_cart::AddToCartUseCase;
use business::domain::cart::use_cases::remove_from_cart::RemoveFromCartUseCase;
use business::domain::cart::use_cases::remove_or_decrement::RemoveOrDecrementUseCase;
use business::domain::cart::use_cases::watch_quantity::WatchQuantityUseCase;
use business::domain::favorite::errors::FavoriteError;
use business::domain::favorite::model::FavoriteItem;
use business::domain::favorite::use_cases::toggle_favorite::ToggleFavoriteUseCase;
use business::domain::favorite::use_cases::watch_is_favorite::WatchIsFavoriteUseCase;
use business::domain::product::model::Product;
use business::domain::product::use_cases::get_by_id::GetProductByIdUseCase;

/// `Success(None)` renders the "product no longer in the catalog" message;
/// it is not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Success(Option<Product>),
    Error(String),
}

/// One holder per opened product page, pinned to its product id.
pub struct DetailStateHolder {
    product_id: i64,
    get_product_by_id: Arc<dyn GetProductByIdUseCase>,
    add_to_cart: Arc<dyn AddToCartUseCase>,
    remove_or_decrement: Arc<dyn RemoveOrDecrementUseCase>,
    remove_from_cart: Arc<dyn RemoveFromCartUseCase>,
    watch_quantity: Arc<dyn WatchQuantityUseCase>,
    toggle_favorite: Arc<dyn ToggleFavoriteUseCase>,
    watch_is_favorite: Arc<dyn WatchIsFavoriteUseCase>,
    state: Arc<watch::Sender<DetailState>>,
}

impl DetailStateHolder {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        product_id: i64,
        get_product_by_id: Arc<dyn GetProductByIdUseCase>,
        add_to_cart: Arc<dyn AddToCartUseCase>,
        remove_or_decrement: Arc<dyn RemoveOrDecrementUseCase>,
        remove_from_cart: Arc<dyn RemoveFromCartUseCase>,
        watch_quantity: Arc<dyn WatchQuantityUseCase>,
        toggle_favorite: Arc<dyn ToggleFavoriteUseCase>,
        watch_is_favorite: Arc<dyn WatchIsFavoriteUseCase>,
    ) -> Self {
        let (state, _) = watch::channel(DetailState::Loading);

        Self {
            product_id,
            get_product_by_id,
            add_to_cart,
            remove_or_decrement,
            remove_from_cart,
            watch_quantity,
            toggle_favorite,
            watch_is_favorite,
            state: Arc::new(state),
        }
    }

    pub fn product_id(&self) -> i64 {
        self.product_id
    }

    pub fn state(&self) -> watch::Receiver<DetailState> {
        self.state.subscribe()
    }

    pub async fn refresh(&self) {
        self.state.send_replace(DetailState::Loading);

        match self.get_product_by_id.execute(self.product_id).await {
            Ok(product) => {
                self.state.send_replace(DetailState::Success(product));
            }
            Err(err) => {
                self.state.send_replace(DetailState::Error(err.to_string()));
            }
        }
    }

    /// Live quantity of this product in the cart; `None` while absent.
    pub async fn item_quantity(&self) -> Result<watch::Receiver<Option<i64>>, CartError> {
        self.watch_quantity.execute(self.product_id).await
    }

    pub async fn add_to_cart(&self, product: &Product) -> Result<(), CartError> {
        self.add_to_cart
            .execute(&CartItem::from_product(product))
            .await
    }

    pub async fn remove_or_decrement(&self, product: &Product) -> Result<(), CartError> {
        self.remove_or_decrement.execute(product.id).await
    }

    pub async fn remove_from_cart(&self, product: &Product) -> Result<(), CartError> {
        self.remove_from_cart.execute(product.id).await
    }

    pub async fn toggle_favorite(&self, product: &Product) -> Result<(), FavoriteError> {
        self.toggle_favorite
            .execute(&FavoriteItem::from_product(product))
            .await
    }

    pub async fn is_favorite(&self) -> Result<watch::Receiver<bool>, FavoriteError> {
        self.watch_is_favorite.execute(self.product_id).await
    }
}
