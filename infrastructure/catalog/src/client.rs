use reqwest::Client;

pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Shared HTTP client configuration for the remote store catalog.
pub struct CatalogClient {
    pub client: Client,
    pub base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the product list endpoint URL.
    pub fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    /// Returns the single-product endpoint URL.
    pub fn product_url(&self, product_id: i64) -> String {
        format!("{}/products/{}", self.base_url, product_id)
    }

    /// Returns the category list endpoint URL.
    pub fn categories_url(&self) -> String {
        format!("{}/products/categories", self.base_url)
    }

    /// Returns the per-category product list endpoint URL.
    pub fn category_url(&self, category_name: &str) -> String {
        format!(
            "{}/products/category/{}",
            self.base_url,
            urlencoding::encode(category_name)
        )
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL.to_string())
    }
}
