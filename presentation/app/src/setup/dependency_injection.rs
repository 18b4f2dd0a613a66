use std::sync::Arc;

use logger::TracingLogger;
use persistence::cart::repository::CartRepositorySqlite;
use persistence::favorite::repository::FavoriteRepositorySqlite;

use catalog::client::CatalogClient;
use catalog::repository::CatalogRepositoryHttp;

use business::application::cart::add_to_cart::AddToCartUseCaseImpl;
use business::application::cart::clear_cart::ClearCartUseCaseImpl;
use business::application::cart::remove_from_cart::RemoveFromCartUseCaseImpl;
use business::application::cart::remove_or_decrement::RemoveOrDecrementUseCaseImpl;
use business::application::cart::watch_cart::WatchCartUseCaseImpl;
use business::application::cart::watch_quantity::WatchQuantityUseCaseImpl;
use business::application::favorite::clear_favorites::ClearFavoritesUseCaseImpl;
use business::application::favorite::toggle_favorite::ToggleFavoriteUseCaseImpl;
use business::application::favorite::watch_favorites::WatchFavoritesUseCaseImpl;
use business::application::favorite::watch_is_favorite::WatchIsFavoriteUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_category::GetProductsByCategoryUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::get_categories::GetAllCategoriesUseCaseImpl;
use business::domain::cart::use_cases::add_to_cart::AddToCartUseCase;
use business::domain::cart::use_cases::remove_from_cart::RemoveFromCartUseCase;
use business::domain::cart::use_cases::remove_or_decrement::RemoveOrDecrementUseCase;
use business::domain::cart::use_cases::watch_quantity::WatchQuantityUseCase;
use business::domain::favorite::use_cases::toggle_favorite::ToggleFavoriteUseCase;
use business::domain::favorite::use_cases::watch_is_favorite::WatchIsFavoriteUseCase;
use business::domain::product::use_cases::get_by_id::GetProductByIdUseCase;

use crate::config::app_config::AppConfig;
use crate::state::cart::CartStateHolder;
use crate::state::category::CategoryStateHolder;
use crate::state::detail::DetailStateHolder;
use crate::state::favorite::FavoriteStateHolder;
use crate::state::home::HomeStateHolder;

pub struct DependencyContainer {
    pub home: HomeStateHolder,
    pub category: CategoryStateHolder,
    pub cart: CartStateHolder,
    pub favorite: FavoriteStateHolder,

    // Detail holders are created per opened product page.
    get_product_by_id: Arc<dyn GetProductByIdUseCase>,
    add_to_cart: Arc<dyn AddToCartUseCase>,
    remove_or_decrement: Arc<dyn RemoveOrDecrementUseCase>,
    remove_from_cart: Arc<dyn RemoveFromCartUseCase>,
    watch_quantity: Arc<dyn WatchQuantityUseCase>,
    toggle_favorite: Arc<dyn ToggleFavoriteUseCase>,
    watch_is_favorite: Arc<dyn WatchIsFavoriteUseCase>,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::SqlitePool, config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let fault_policy = config.store_fault_policy;

        // Infrastructure adapters
        let cart_repository = Arc::new(CartRepositorySqlite::new(pool.clone()));
        let favorite_repository = Arc::new(FavoriteRepositorySqlite::new(pool));
        let catalog_repository = Arc::new(CatalogRepositoryHttp::new(CatalogClient::new(
            config.catalog.base_url.clone(),
        )));

        // Cart use cases
        let add_to_cart: Arc<dyn AddToCartUseCase> = Arc::new(AddToCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
            fault_policy,
        });
        let remove_or_decrement: Arc<dyn RemoveOrDecrementUseCase> =
            Arc::new(RemoveOrDecrementUseCaseImpl {
                repository: cart_repository.clone(),
                logger: logger.clone(),
                fault_policy,
            });
        let remove_from_cart: Arc<dyn RemoveFromCartUseCase> =
            Arc::new(RemoveFromCartUseCaseImpl {
                repository: cart_repository.clone(),
                logger: logger.clone(),
                fault_policy,
            });
        let clear_cart = Arc::new(ClearCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
            fault_policy,
        });
        let watch_cart = Arc::new(WatchCartUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
            fault_policy,
        });
        let watch_quantity: Arc<dyn WatchQuantityUseCase> = Arc::new(WatchQuantityUseCaseImpl {
            repository: cart_repository,
            logger: logger.clone(),
            fault_policy,
        });

        // Favorite use cases
        let toggle_favorite: Arc<dyn ToggleFavoriteUseCase> = Arc::new(ToggleFavoriteUseCaseImpl {
            repository: favorite_repository.clone(),
            logger: logger.clone(),
            fault_policy,
        });
        let watch_favorites = Arc::new(WatchFavoritesUseCaseImpl {
            repository: favorite_repository.clone(),
            logger: logger.clone(),
            fault_policy,
        });
        let watch_is_favorite: Arc<dyn WatchIsFavoriteUseCase> =
            Arc::new(WatchIsFavoriteUseCaseImpl {
                repository: favorite_repository.clone(),
                logger: logger.clone(),
                fault_policy,
            });
        let clear_favorites = Arc::new(ClearFavoritesUseCaseImpl {
            repository: favorite_repository,
            logger: logger.clone(),
            fault_policy,
        });

        // Catalog use cases
        let get_all_products = Arc::new(GetAllProductsUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let get_product_by_id: Arc<dyn GetProductByIdUseCase> = Arc::new(GetProductByIdUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let get_all_categories = Arc::new(GetAllCategoriesUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let get_products_by_category = Arc::new(GetProductsByCategoryUseCaseImpl {
            repository: catalog_repository,
            logger,
        });

        // Screen state holders
        let home = HomeStateHolder::new(
            get_all_products,
            toggle_favorite.clone(),
            watch_is_favorite.clone(),
        );
        let category = CategoryStateHolder::new(
            get_all_categories,
            get_products_by_category,
            toggle_favorite.clone(),
            watch_is_favorite.clone(),
        );
        let cart = CartStateHolder::new(
            watch_cart,
            add_to_cart.clone(),
            remove_or_decrement.clone(),
            remove_from_cart.clone(),
            clear_cart,
        );
        let favorite = FavoriteStateHolder::new(
            watch_favorites,
            toggle_favorite.clone(),
            watch_is_favorite.clone(),
            clear_favorites,
        );

        Self {
            home,
            category,
            cart,
            favorite,
            get_product_by_id,
            add_to_cart,
            remove_or_decrement,
            remove_from_cart,
            watch_quantity,
            toggle_favorite,
            watch_is_favorite,
        }
    }

    pub fn detail_state_holder(&self, product_id: i64) -> DetailStateHolder {
        DetailStateHolder::new(
            product_id,
            self.get_product_by_id.clone(),
            self.add_to_cart.clone(),
            self.remove_or_decrement.clone(),
            self.remove_from_cart.clone(),
            self.watch_quantity.clone(),
            self.toggle_favorite.clone(),
            self.watch_is_favorite.clone(),
        )
    }
}
