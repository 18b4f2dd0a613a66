use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use business::domain::favorite::errors::FavoriteError;
use business::domain::favorite::model::FavoriteItem;
use business::domain::favorite::use_cases::clear_favorites::ClearFavoritesUseCase;
use business::domain::favorite::use_cases::toggle_favorite::ToggleFavoriteUseCase;
use business::domain::favorite::use_cases::watch_favorites::WatchFavoritesUseCase;
use business::domain::favorite::use_cases::watch_is_favorite::WatchIsFavoriteUseCase;

#[derive(Debug, Clone, PartialEq)]
pub enum FavoriteState {
    Loading,
    EmptyList,
    Success(Vec<FavoriteItem>),
    Error(String),
}

pub struct FavoriteStateHolder {
    watch_favorites: Arc<dyn WatchFavoritesUseCase>,
    toggle_favorite: Arc<dyn ToggleFavoriteUseCase>,
    watch_is_favorite: Arc<dyn WatchIsFavoriteUseCase>,
    clear_favorites: Arc<dyn ClearFavoritesUseCase>,
    state: Arc<watch::Sender<FavoriteState>>,
    subscription: Mutex<Option<JoinHandle<()>>>,
}

impl FavoriteStateHolder {
    pub fn new(
        watch_favorites: Arc<dyn WatchFavoritesUseCase>,
        toggle_favorite: Arc<dyn ToggleFavoriteUseCase>,
        watch_is_favorite: Arc<dyn WatchIsFavoriteUseCase>,
        clear_favorites: Arc<dyn ClearFavoritesUseCase>,
    ) -> Self {
        let (state, _) = watch::channel(FavoriteState::Loading);

        Self {
            watch_favorites,
            toggle_favorite,
            watch_is_favorite,
            clear_favorites,
            state: Arc::new(state),
            subscription: Mutex::new(None),
        }
    }

    pub fn state(&self) -> watch::Receiver<FavoriteState> {
        self.state.subscribe()
    }

    pub async fn refresh(&self) {
        self.state.send_replace(FavoriteState::Loading);
        self.abandon_subscription();

        match self.watch_favorites.execute().await {
            Ok(mut view) => {
                let state = self.state.clone();
                let task = tokio::spawn(async move {
                    loop {
                        let favorites = view.borrow_and_update().clone();
                        state.send_replace(if favorites.is_empty() {
                            FavoriteState::EmptyList
                        } else {
                            FavoriteState::Success(favorites)
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
                self.state
                    .send_replace(FavoriteState::Error(err.to_string()));
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

    pub async fn clear_all_favorites(&self) -> Result<(), FavoriteError> {
        self.clear_favorites.execute().await
    }

    fn abandon_subscription(&self) {
        if let Ok(mut subscription) = self.subscription.lock()
            && let Some(task) = subscription.take()
        {
            task.abort();
        }
    }
}

impl Drop for FavoriteStateHolder {
    fn drop(&mut self) {
        self.abandon_subscription();
    }
}
