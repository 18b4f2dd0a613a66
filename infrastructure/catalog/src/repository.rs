use async_trait::async_trait;
use serde::de::DeserializeOwned;

use business::domain::product::errors::CatalogError;
use business::domain::product::model::Product;
use business::domain::product::repository::CatalogRepository;

use crate::client::CatalogClient;
use crate::dto::ProductDto;

pub struct CatalogRepositoryHttp {
    client: CatalogClient,
}

impl CatalogRepositoryHttp {
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        let response = self
            .client
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| CatalogError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|err| CatalogError::Decode(err.to_string()))
    }
}

/// The remote API answers an unknown product id with an empty (or `null`)
/// body instead of a 404, so "absent" has to be decoded from the body.
fn parse_optional_product(body: &str) -> Result<Option<Product>, CatalogError> {
    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(None);
    }

    serde_json::from_str::<ProductDto>(trimmed)
        .map(|dto| Some(dto.into_domain()))
        .map_err(|err| CatalogError::Decode(err.to_string()))
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryHttp {
    async fn get_all_products(&self) -> Result<Vec<Product>, CatalogError> {
        let products: Vec<ProductDto> = self.get_json(&self.client.products_url()).await?;
        Ok(products.into_iter().map(ProductDto::into_domain).collect())
    }

    async fn get_single_product(&self, product_id: i64) -> Result<Option<Product>, CatalogError> {
        let url = self.client.product_url(product_id);
        let response = self
            .client
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| CatalogError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|err| CatalogError::Network(err.to_string()))?;

        parse_optional_product(&body)
    }

    async fn get_all_categories(&self) -> Result<Vec<String>, CatalogError> {
        self.get_json(&self.client.categories_url()).await
    }

    async fn get_products_by_category(
        &self,
        category_name: &str,
    ) -> Result<Vec<Product>, CatalogError> {
        let products: Vec<ProductDto> = self
            .get_json(&self.client.category_url(category_name))
            .await?;
        Ok(products.into_iter().map(ProductDto::into_domain).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_decodes_as_absent_product() {
        assert!(parse_optional_product("").unwrap().is_none());
        assert!(parse_optional_product("   \n").unwrap().is_none());
    }

    #[test]
    fn null_body_decodes_as_absent_product() {
        assert!(parse_optional_product("null").unwrap().is_none());
    }

    #[test]
    fn product_body_decodes_as_present() {
        let body = r#"{
            "id": 4,
            "title": "Casual Slim Fit",
            "price": 15.99,
            "description": "Lightweight jacket",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/casual.jpg",
            "rating": { "rate": 2.1, "count": 430 }
        }"#;

        let product = parse_optional_product(body).unwrap().unwrap();
        assert_eq!(product.id, 4);
    }

    #[test]
    fn malformed_body_is_a_decode_failure_not_absent() {
        let result = parse_optional_product("{\"id\": \"not a number\"}");

        assert!(matches!(result, Err(CatalogError::Decode(_))));
    }
}
