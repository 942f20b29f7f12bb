use crate::{
    abstract_trait::user::{
        repository::{command::DynUserCommandRepository, query::DynUserQueryRepository},
        service::UserServiceTrait,
    },
    domain::{
        current_user::CurrentUser,
        requests::{UpdateProfileRequest, UpdateRoleRequest},
        responses::{ApiResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError, format_validation_errors},
    model::role::Role,
    utils::{Method, Metrics},
};
use async_trait::async_trait;
use tokio::time::Instant;
use tracing::{error, info};
use validator::Validate;

#[derive(Clone)]
pub struct UserService {
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
    metrics: Metrics,
}

impl UserService {
    pub fn new(
        query: DynUserQueryRepository,
        command: DynUserCommandRepository,
        metrics: Metrics,
    ) -> Self {
        Self {
            query,
            command,
            metrics,
        }
    }
}

fn not_found(e: RepositoryError) -> ServiceError {
    match e {
        RepositoryError::NotFound => ServiceError::NotFound("User not found".to_string()),
        other => ServiceError::Repo(other),
    }
}

#[async_trait]
impl UserServiceTrait for UserService {
    async fn update_profile(
        &self,
        user_id: i32,
        req: &UpdateProfileRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        let started = Instant::now();

        if let Err(errors) = req.validate() {
            return Err(ServiceError::Validation(format_validation_errors(&errors)));
        }

        let result = self
            .command
            .update_profile(user_id, req.display_name.trim())
            .await
            .map_err(|e| {
                error!("❌ Failed to update profile of user {user_id}: {e:?}");
                not_found(e)
            })
            .map(|user| {
                info!("✅ Updated profile of user {user_id}");
                ApiResponse::success("Profile updated successfully", UserResponse::from(user))
            });

        self.metrics
            .record_result("update_profile", Method::Patch, started, &result);
        result
    }

    async fn update_role(
        &self,
        actor: &CurrentUser,
        user_id: i32,
        req: &UpdateRoleRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        actor.require_role(&[Role::Admin])?;

        let started = Instant::now();

        if self.query.find_by_id(user_id).await?.is_none() {
            return Err(ServiceError::NotFound("User not found".to_string()));
        }

        let result = self
            .command
            .update_role(user_id, req.role)
            .await
            .map_err(not_found)
            .map(|user| {
                info!(
                    "🛡️ Admin {} set role of user {user_id} to {}",
                    actor.id, user.role
                );
                ApiResponse::success("User role updated successfully", UserResponse::from(user))
            });

        self.metrics
            .record_result("update_role", Method::Put, started, &result);
        result
    }
}
