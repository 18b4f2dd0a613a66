use std::sync::Arc;

use tokio::sync::watch;

use business::domain::favorite::errors::FavoriteError;
use business::domain::favorite::model::FavoriteItem;
use business::domain::favorite::use_cases::toggle_favorite::ToggleFavoriteUseCase;
use business::domain::favorite::use_cases::watch_is_favorite::WatchIsFavoriteUseCase;
use business::domain::product::model::Product;
use business::domain::product::use_cases::get_by_category::GetProductsByCategoryUseCase;
use business::domain::product::use_cases::get_categories::GetAllCategoriesUseCase;

#[derive(Debug, Clone, PartialEq)]
pub enum CategoryState {
    Loading,
    Success(Vec<String>),
    Error(String),
}

/// Products of the currently selected category.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductState {
    Loading,
    Success(Vec<Product>),
    Error(String),
}

/// Two coupled states: the category list, and the products of whichever
/// category is selected. A successful categories load auto-selects the
/// first category and fetches its products.
pub struct CategoryStateHolder {
    get_all_categories: Arc<dyn GetAllCategoriesUseCase>,
    get_products_by_category: Arc<dyn GetProductsByCategoryUseCase>,
    toggle_favorite: Arc<dyn ToggleFavoriteUseCase>,
    watch_is_favorite: Arc<dyn WatchIsFavoriteUseCase>,
    categories_state: Arc<watch::Sender<CategoryState>>,
    products_state: Arc<watch::Sender<ProductState>>,
    selected_category: Arc<watch::Sender<String>>,
}

impl CategoryStateHolder {
    pub fn new(
        get_all_categories: Arc<dyn GetAllCategoriesUseCase>,
        get_products_by_category: Arc<dyn GetProductsByCategoryUseCase>,
        toggle_favorite: Arc<dyn ToggleFavoriteUseCase>,
        watch_is_favorite: Arc<dyn WatchIsFavoriteUseCase>,
    ) -> Self {
        let (categories_state, _) = watch::channel(CategoryState::Loading);
        let (products_state, _) = watch::channel(ProductState::Loading);
        let (selected_category, _) = watch::channel(String::new());

        Self {
            get_all_categories,
            get_products_by_category,
            toggle_favorite,
            watch_is_favorite,
            categories_state: Arc::new(categories_state),
            products_state: Arc::new(products_state),
            selected_category: Arc::new(selected_category),
        }
    }

    pub fn categories_state(&self) -> watch::Receiver<CategoryState> {
        self.categories_state.subscribe()
    }

    pub fn products_state(&self) -> watch::Receiver<ProductState> {
        self.products_state.subscribe()
    }

    pub fn selected_category(&self) -> watch::Receiver<String> {
        self.selected_category.subscribe()
    }

    pub async fn refresh(&self) {
        self.categories_state.send_replace(CategoryState::Loading);

        match self.get_all_categories.execute().await {
            Ok(categories) => {
                self.categories_state
                    .send_replace(CategoryState::Success(categories.clone()));

                let first = categories.first().cloned().unwrap_or_default();
                self.change_selected_category(&first).await;
            }
            Err(err) => {
                self.categories_state
                    .send_replace(CategoryState::Error(err.to_string()));
            }
        }
    }

    pub async fn change_selected_category(&self, category_name: &str) {
        self.selected_category
            .send_replace(category_name.to_string());
        self.load_products(category_name).await;
    }

    pub async fn load_products(&self, category_name: &str) {
        self.products_state.send_replace(ProductState::Loading);

        match self.get_products_by_category.execute(category_name).await {
            Ok(products) => {
                self.products_state
                    .send_replace(ProductState::Success(products));
            }
            Err(err) => {
                self.products_state
                    .send_replace(ProductState::Error(err.to_string()));
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

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::product::errors::CatalogError;
    use mockall::mock;

    mock! {
        pub GetAllCategories {}

        #[async_trait]
        impl GetAllCategoriesUseCase for GetAllCategories {
            async fn execute(&self) -> Result<Vec<String>, CatalogError>;
        }
    }

    mock! {
        pub GetProductsByCategory {}

        #[async_trait]
        impl GetProductsByCategoryUseCase for GetProductsByCategory {
            async fn execute(&self, category_name: &str) -> Result<Vec<Product>, CatalogError>;
        }
    }

    mock! {
        pub ToggleFavorite {}

        #[async_trait]
        impl ToggleFavoriteUseCase for ToggleFavorite {
            async fn execute(&self, item: &FavoriteItem) -> Result<(), FavoriteError>;
        }
    }

    mock! {
        pub WatchIsFavorite {}

        #[async_trait]
        impl WatchIsFavoriteUseCase for WatchIsFavorite {
            async fn execute(&self, product_id: i64) -> Result<watch::Receiver<bool>, FavoriteError>;
        }
    }

    #[tokio::test]
    async fn successful_load_selects_the_first_category() {
        let mut get_categories = MockGetAllCategories::new();
        get_categories
            .expect_execute()
            .returning(|| Ok(vec!["electronics".to_string(), "jewelery".to_string()]));

        let mut get_products = MockGetProductsByCategory::new();
        get_products
            .expect_execute()
            .withf(|name| name == "electronics")
            .returning(|_| Ok(Vec::new()));

        let holder = CategoryStateHolder::new(
            Arc::new(get_categories),
            Arc::new(get_products),
            Arc::new(MockToggleFavorite::new()),
            Arc::new(MockWatchIsFavorite::new()),
        );

        holder.refresh().await;

        assert_eq!(*holder.selected_category().borrow(), "electronics");
        assert_eq!(
            *holder.products_state().borrow(),
            ProductState::Success(Vec::new())
        );
    }

    #[tokio::test]
    async fn categories_failure_does_not_touch_products() {
        let mut get_categories = MockGetAllCategories::new();
        get_categories
            .expect_execute()
            .returning(|| Err(CatalogError::Network("offline".to_string())));

        let holder = CategoryStateHolder::new(
            Arc::new(get_categories),
            Arc::new(MockGetProductsByCategory::new()),
            Arc::new(MockToggleFavorite::new()),
            Arc::new(MockWatchIsFavorite::new()),
        );

        holder.refresh().await;

        assert_eq!(
            *holder.categories_state().borrow(),
            CategoryState::Error("catalog.network: offline".to_string())
        );
        assert_eq!(*holder.products_state().borrow(), ProductState::Loading);
    }
}
