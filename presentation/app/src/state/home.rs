use std::sync::Arc;

use tokio::sync::watch;

use business::domain::favorite::errors::FavoriteError;
use business::domain::favorite::model::FavoriteItem;
use business::domain::favorite::use_cases::toggle_favorite::ToggleFavoriteUseCase;
use business::domain::favorite::use_cases::watch_is_favorite::WatchIsFavoriteUseCase;
use business::domain::product::model::Product;
use business::domain::product::use_cases::get_all::GetAllProductsUseCase;

/// An empty catalog is a `Success` with no rows; the screen renders it as
/// a message rather than a separate state.
#[derive(Debug, Clone, PartialEq)]
pub enum HomeState {
    Loading,
    Success(Vec<Product>),
    Error(String),
}

pub struct HomeStateHolder {
    get_all_products: Arc<dyn GetAllProductsUseCase>,
    toggle_favorite: Arc<dyn ToggleFavoriteUseCase>,
    watch_is_favorite: Arc<dyn WatchIsFavoriteUseCase>,
    state: Arc<watch::Sender<HomeState>>,
}

impl HomeStateHolder {
    pub fn new(
        get_all_products: Arc<dyn GetAllProductsUseCase>,
        toggle_favorite: Arc<dyn ToggleFavoriteUseCase>,
        watch_is_favorite: Arc<dyn WatchIsFavoriteUseCase>,
    ) -> Self {
        let (state, _) = watch::channel(HomeState::Loading);

        Self {
            get_all_products,
            toggle_favorite,
            watch_is_favorite,
            state: Arc::new(state),
        }
    }

    pub fn state(&self) -> watch::Receiver<HomeState> {
        self.state.subscribe()
    }

    pub async fn refresh(&self) {
        self.state.send_replace(HomeState::Loading);

        match self.get_all_products.execute().await {
            Ok(products) => {
                self.state.send_replace(HomeState::Success(products));
            }
            Err(err) => {
                self.state.send_replace(HomeState::Error(err.to_string()));
            }
        }
    }

    pub async fn toggle_favorite(&self, item: &FavoriteItem) -> Result<(), FavoriteError> {
        self.toggle_favorite.execute(item).await
    }

    pub async fn is_favorite(
        &self,
        product_id: i64,
    ) -> Result<watch::Receiver<bool>, FavoriteError> {
        self.watch_is_favorite.execute(product_id).await
    }
}
