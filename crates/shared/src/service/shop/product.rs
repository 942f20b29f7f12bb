use crate::{
    abstract_trait::shop::{repository::DynProductRepository, service::ProductServiceTrait},
    domain::{
        current_user::CurrentUser,
        requests::{CreateProductRequest, FindProductsRequest},
        responses::{ApiResponse, ProductListResponse, ProductResponse},
    },
    errors::{ServiceError, format_validation_errors},
    model::role::Role,
    utils::{Method, Metrics},
};
use async_trait::async_trait;
use tokio::time::Instant;
use tracing::{error, info};
use validator::Validate;

#[derive(Clone)]
pub struct ProductService {
    product: DynProductRepository,
    metrics: Metrics,
}

impl ProductService {
    pub fn new(product: DynProductRepository, metrics: Metrics) -> Self {
        Self { product, metrics }
    }

    async fn create_product(
        &self,
        actor: &CurrentUser,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        actor.require_role(&[Role::Admin])?;

        if let Err(errors) = req.validate() {
            return Err(ServiceError::Validation(format_validation_errors(&errors)));
        }

        let product = self.product.create(req).await.map_err(|e| {
            error!("❌ Failed to create product: {e:?}");
            ServiceError::Repo(e)
        })?;

        info!("🛒 Product {} created by user {}", product.product_id, actor.id);

        Ok(ApiResponse::success(
            "Product created successfully",
            ProductResponse::from(product),
        ))
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn find_all(
        &self,
        req: &FindProductsRequest,
    ) -> Result<ApiResponse<ProductListResponse>, ServiceError> {
        let results: Vec<ProductResponse> = self
            .product
            .find_all(req.featured)
            .await?
            .into_iter()
            .map(ProductResponse::from)
            .collect();

        Ok(ApiResponse::success(
            "Products retrieved successfully",
            ProductListResponse {
                count: results.len(),
                results,
            },
        ))
    }

    async fn find_by_id(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self
            .product
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Product not found".to_string()))?;

        Ok(ApiResponse::success(
            "Product retrieved successfully",
            ProductResponse::from(product),
        ))
    }

    async fn create(
        &self,
        actor: &CurrentUser,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let started = Instant::now();
        let result = self.create_product(actor, req).await;
        self.metrics
            .record_result("create_product", Method::Post, started, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::InMemoryDb;

    fn actor(role: Role) -> CurrentUser {
        CurrentUser {
            id: 1,
            email: "shopkeeper@example.com".into(),
            display_name: "Shopkeeper".into(),
            role,
        }
    }

    fn product(title: &str, featured: bool) -> CreateProductRequest {
        CreateProductRequest {
            title: title.into(),
            description: String::new(),
            price: 1500,
            currency: "GHS".into(),
            category: "books".into(),
            stock: 10,
            featured,
        }
    }

    fn service() -> ProductService {
        let db = InMemoryDb::new();
        ProductService::new(db.repositories().product, Metrics::new())
    }

    #[tokio::test]
    async fn test_only_admins_create_products() {
        let service = service();

        assert!(matches!(
            service
                .create(&actor(Role::Instructor), &product("Notebook", false))
                .await,
            Err(ServiceError::Forbidden(_))
        ));

        let created = service
            .create(&actor(Role::Admin), &product("Notebook", false))
            .await
            .unwrap();
        assert_eq!(created.data.title, "Notebook");
        assert_eq!(created.data.price, 1500);
    }

    #[tokio::test]
    async fn test_create_rejects_bad_currency() {
        let mut req = product("Notebook", false);
        req.currency = "CEDI".into();

        assert!(matches!(
            service().create(&actor(Role::Admin), &req).await,
            Err(ServiceError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_list_is_newest_first_and_filters_featured() {
        let service = service();
        let admin = actor(Role::Admin);
        service.create(&admin, &product("Pen", false)).await.unwrap();
        service.create(&admin, &product("Lamp", true)).await.unwrap();
        service.create(&admin, &product("Desk", false)).await.unwrap();

        let all = service
            .find_all(&FindProductsRequest::default())
            .await
            .unwrap();
        let titles: Vec<_> = all.data.results.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Desk", "Lamp", "Pen"]);

        let featured = service
            .find_all(&FindProductsRequest {
                featured: Some(true),
            })
            .await
            .unwrap();
        assert_eq!(featured.data.count, 1);
        assert_eq!(featured.data.results[0].title, "Lamp");

        let regular = service
            .find_all(&FindProductsRequest {
                featured: Some(false),
            })
            .await
            .unwrap();
        assert_eq!(regular.data.count, 2);
    }

    #[tokio::test]
    async fn test_unknown_product_is_not_found() {
        assert!(matches!(
            service().find_by_id(404).await,
            Err(ServiceError::NotFound(_))
        ));
    }
}
