use crate::{
    middleware::{jwt, path::SimplePath, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::Query,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{
    abstract_trait::shop::service::{DynCartService, DynProductService},
    domain::{
        current_user::CurrentUser,
        requests::{
            AddCartItemRequest, CreateProductRequest, FindProductsRequest, RemoveCartItemRequest,
            UpdateCartItemRequest,
        },
        responses::{ApiResponse, CartResponse, ProductListResponse, ProductResponse},
    },
    errors::{AppErrorHttp, ErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/shop/products/",
    params(FindProductsRequest),
    responses(
        (status = 200, description = "Products, newest first", body = ApiResponse<ProductListResponse>)
    ),
    tag = "Shop"
)]
pub async fn get_products(
    Extension(service): Extension<DynProductService>,
    Query(params): Query<FindProductsRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_all(&params).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/shop/products/{id}/",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product", body = ApiResponse<ProductResponse>),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    tag = "Shop"
)]
pub async fn get_product(
    Extension(service): Extension<DynProductService>,
    SimplePath(id): SimplePath<i32>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_id(id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/shop/products/",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 403, description = "Admin only", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Shop"
)]
pub async fn create_product(
    Extension(service): Extension<DynProductService>,
    Extension(current_user): Extension<CurrentUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateProductRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.create(&current_user, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/shop/cart/",
    responses(
        (status = 200, description = "Caller's cart", body = ApiResponse<CartResponse>)
    ),
    security(("bearer_auth" = [])),
    tag = "Shop"
)]
pub async fn get_cart(
    Extension(service): Extension<DynCartService>,
    Extension(current_user): Extension<CurrentUser>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.get_cart(current_user.id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/shop/cart/",
    request_body = AddCartItemRequest,
    responses(
        (status = 201, description = "Item added or merged", body = ApiResponse<CartResponse>),
        (status = 404, description = "Product not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Shop"
)]
pub async fn add_cart_item(
    Extension(service): Extension<DynCartService>,
    Extension(current_user): Extension<CurrentUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<AddCartItemRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.add_item(current_user.id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    patch,
    path = "/api/shop/cart/",
    request_body = UpdateCartItemRequest,
    responses(
        (status = 200, description = "Quantity set; zero or less removes the line", body = ApiResponse<CartResponse>)
    ),
    security(("bearer_auth" = [])),
    tag = "Shop"
)]
pub async fn update_cart_item(
    Extension(service): Extension<DynCartService>,
    Extension(current_user): Extension<CurrentUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateCartItemRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.update_item(current_user.id, &body).await?;
    Ok(Json(response))
}

#[utoipa::path(
    delete,
    path = "/api/shop/cart/",
    request_body = RemoveCartItemRequest,
    responses(
        (status = 200, description = "Line removed", body = ApiResponse<CartResponse>)
    ),
    security(("bearer_auth" = [])),
    tag = "Shop"
)]
pub async fn remove_cart_item(
    Extension(service): Extension<DynCartService>,
    Extension(current_user): Extension<CurrentUser>,
    SimpleValidatedJson(body): SimpleValidatedJson<RemoveCartItemRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.remove_item(current_user.id, &body).await?;
    Ok(Json(response))
}

pub fn shop_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    let public_routes = OpenApiRouter::new()
        .route("/api/shop/products/", get(get_products))
        .route("/api/shop/products/{id}/", get(get_product))
        .layer(Extension(app_state.di_container.product_service.clone()));

    let private_routes = OpenApiRouter::new()
        .route("/api/shop/products/", post(create_product))
        .route(
            "/api/shop/cart/",
            get(get_cart)
                .post(add_cart_item)
                .patch(update_cart_item)
                .delete(remove_cart_item),
        )
        .route_layer(middleware::from_fn_with_state(app_state.clone(), jwt::auth))
        .layer(Extension(app_state.di_container.product_service.clone()))
        .layer(Extension(app_state.di_container.cart_service.clone()));

    public_routes.merge(private_routes)
}
