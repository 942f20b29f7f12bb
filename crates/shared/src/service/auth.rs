use crate::{
    abstract_trait::{
        auth::AuthServiceTrait,
        hashing::DynHashing,
        refresh_token::{
            command::DynRefreshTokenCommandRepository, query::DynRefreshTokenQueryRepository,
        },
        token::DynTokenService,
        user::repository::{command::DynUserCommandRepository, query::DynUserQueryRepository},
    },
    domain::{
        current_user::CurrentUser,
        requests::{CreateUserRequest, LoginRequest, RecordLoginRequest, RegisterRequest},
        responses::{
            ApiResponse, LoginResponse, LogoutResponse, RefreshResponse, RegisterResponse,
            UserResponse,
        },
    },
    errors::{RepositoryError, ServiceError, format_validation_errors},
    model::{role::Role, user::UserModel},
    utils::{Method, Metrics},
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::{sync::OnceCell, time::Instant};
use tracing::{error, info, warn};
use validator::Validate;

#[derive(Clone)]
pub struct AuthService {
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
    refresh_query: DynRefreshTokenQueryRepository,
    refresh_command: DynRefreshTokenCommandRepository,
    hashing: DynHashing,
    token: DynTokenService,
    metrics: Metrics,
    decoy_hash: Arc<OnceCell<String>>,
}

/// Hashed once per service; unknown accounts are checked against it.
const DECOY_PASSWORD: &str = "decoy-password-for-unknown-accounts";

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("query", &"DynUserQueryRepository")
            .field("command", &"DynUserCommandRepository")
            .field("refresh_query", &"DynRefreshTokenQueryRepository")
            .field("refresh_command", &"DynRefreshTokenCommandRepository")
            .field("hashing", &"Hashing")
            .field("token", &"DynTokenService")
            .finish()
    }
}

pub struct AuthServiceDeps {
    pub query: DynUserQueryRepository,
    pub command: DynUserCommandRepository,
    pub refresh_query: DynRefreshTokenQueryRepository,
    pub refresh_command: DynRefreshTokenCommandRepository,
    pub hashing: DynHashing,
    pub token: DynTokenService,
    pub metrics: Metrics,
}

impl AuthService {
    pub fn new(deps: AuthServiceDeps) -> Self {
        let AuthServiceDeps {
            query,
            command,
            refresh_query,
            refresh_command,
            hashing,
            token,
            metrics,
        } = deps;

        Self {
            query,
            command,
            refresh_query,
            refresh_command,
            hashing,
            token,
            metrics,
            decoy_hash: Arc::new(OnceCell::new()),
        }
    }

    /// Spends one password verification so unknown and inactive accounts
    /// take as long to reject as a wrong password.
    async fn reject_without_account(&self, password: &str) -> ServiceError {
        let decoy = match self
            .decoy_hash
            .get_or_try_init(|| self.hashing.hash_password(DECOY_PASSWORD))
            .await
        {
            Ok(decoy) => decoy,
            Err(e) => return e,
        };

        match self.hashing.compare_password(decoy, password).await {
            Ok(_) => ServiceError::InvalidCredentials,
            Err(e) => e,
        }
    }

    async fn find_user(&self, user_id: i32) -> Result<Option<UserModel>, ServiceError> {
        self.query.find_by_id(user_id).await.map_err(|e| {
            error!("❌ Failed to load user {user_id}: {e:?}");
            ServiceError::Repo(e)
        })
    }

    async fn register(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<RegisterResponse>, ServiceError> {
        let req = RegisterRequest {
            email: normalize_email(&req.email),
            ..req.clone()
        };

        if let Err(errors) = req.validate() {
            return Err(ServiceError::Validation(format_validation_errors(&errors)));
        }

        info!("🆕 New user registration attempt with email: {}", req.email);

        if self.query.find_by_email(&req.email).await?.is_some() {
            warn!("❌ [REGISTER] Email already taken | Email: {}", req.email);
            return Err(ServiceError::BadRequest("Email already exists".to_string()));
        }

        let hashed_password = self.hashing.hash_password(&req.password).await?;

        let new_user = CreateUserRequest {
            email: req.email.clone(),
            display_name: req.display_name.trim().to_string(),
            password: hashed_password,
            role: Role::default(),
        };

        let user = match self.command.create(&new_user).await {
            Ok(user) => user,
            Err(RepositoryError::AlreadyExists(_)) => {
                warn!("⚠️ [REGISTER] Lost race on email {}", req.email);
                return Err(ServiceError::BadRequest("Email already exists".to_string()));
            }
            Err(e) => {
                error!("❌ Failed to create user: {e:?}");
                return Err(ServiceError::Repo(e));
            }
        };

        info!("✅ User registered successfully: {} ({})", user.email, user.user_id);

        Ok(ApiResponse::success(
            "User registered successfully",
            RegisterResponse {
                user: UserResponse::from(user),
            },
        ))
    }

    async fn login(
        &self,
        req: &LoginRequest,
        client_ip: Option<String>,
    ) -> Result<ApiResponse<LoginResponse>, ServiceError> {
        let email = normalize_email(&req.email);

        info!("🔐 Incoming login request for user: {email}");

        let user = match self.query.find_by_email(&email).await? {
            Some(user) if user.is_active => user,
            Some(_) => {
                warn!("❌ Login attempt on inactive account: {email}");
                return Err(self.reject_without_account(&req.password).await);
            }
            None => {
                warn!("❌ User not found: {email}");
                return Err(self.reject_without_account(&req.password).await);
            }
        };

        if !self
            .hashing
            .compare_password(&user.password, &req.password)
            .await?
        {
            warn!("❌ Invalid password for user: {email}");
            return Err(ServiceError::InvalidCredentials);
        }

        let access = self.token.create_access_token(user.user_id).await?;
        let refresh = self.token.create_refresh_token(user.user_id).await?;

        let record = RecordLoginRequest {
            user_id: user.user_id,
            ip_address: client_ip,
        };
        if let Err(e) = self.command.record_login(&record).await {
            warn!("⚠️ Failed to record login for user {}: {e:?}", user.user_id);
        }

        info!("✅ User logged in: {email}");

        Ok(ApiResponse::success(
            "Login successful",
            LoginResponse {
                access_token: access.token,
                refresh_token: refresh.token,
                expires_in: access.claims.exp - access.claims.iat,
                user: UserResponse::from(user),
            },
        ))
    }

    async fn refresh(
        &self,
        refresh_token: &str,
    ) -> Result<ApiResponse<RefreshResponse>, ServiceError> {
        let claims = self.token.verify(refresh_token)?;

        let user = match self.find_user(claims.user_id).await? {
            Some(user) if user.is_active => user,
            _ => {
                warn!("❌ Refresh for unknown or inactive user {}", claims.user_id);
                return Err(ServiceError::Unauthenticated("User not found".to_string()));
            }
        };

        let stored = self.refresh_query.find_by_token(refresh_token).await?;
        let now = Utc::now().naive_utc();

        let usable = stored
            .as_ref()
            .is_some_and(|record| record.user_id == user.user_id && record.is_usable_at(now));

        if !usable {
            warn!("❌ Refresh token rejected for user {}", user.user_id);
            return Err(ServiceError::InvalidToken(
                "Invalid refresh token".to_string(),
            ));
        }

        let access = self.token.create_access_token(user.user_id).await?;

        info!("🔄 Issued new access token for user {}", user.user_id);

        Ok(ApiResponse::success(
            "Token refreshed successfully",
            RefreshResponse {
                expires_in: access.claims.exp - access.claims.iat,
                access_token: access.token,
            },
        ))
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
impl AuthServiceTrait for AuthService {
    async fn register_user(
        &self,
        req: &RegisterRequest,
    ) -> Result<ApiResponse<RegisterResponse>, ServiceError> {
        let started = Instant::now();
        let result = self.register(req).await;
        self.metrics
            .record_result("register", Method::Post, started, &result);
        result
    }

    async fn login_user(
        &self,
        req: &LoginRequest,
        client_ip: Option<String>,
    ) -> Result<ApiResponse<LoginResponse>, ServiceError> {
        let started = Instant::now();
        let result = self.login(req, client_ip).await;
        self.metrics
            .record_result("login", Method::Post, started, &result);
        result
    }

    async fn refresh_token(
        &self,
        refresh_token: &str,
    ) -> Result<ApiResponse<RefreshResponse>, ServiceError> {
        let started = Instant::now();
        let result = self.refresh(refresh_token).await;
        self.metrics
            .record_result("refresh", Method::Post, started, &result);
        result
    }

    async fn logout(&self, user_id: i32) -> Result<ApiResponse<LogoutResponse>, ServiceError> {
        let started = Instant::now();

        let result = self
            .refresh_command
            .revoke_all_for_user(user_id)
            .await
            .map_err(|e| {
                error!("❌ Failed to revoke refresh tokens for user {user_id}: {e:?}");
                ServiceError::Repo(e)
            })
            .map(|revoked_sessions| {
                info!("👋 User {user_id} logged out, {revoked_sessions} session(s) revoked");
                ApiResponse::success(
                    "Logged out successfully",
                    LogoutResponse { revoked_sessions },
                )
            });

        self.metrics
            .record_result("logout", Method::Post, started, &result);
        result
    }

    async fn get_me(&self, user_id: i32) -> Result<ApiResponse<UserResponse>, ServiceError> {
        info!("👤 Fetching profile for user {user_id}");

        match self.find_user(user_id).await? {
            Some(user) => Ok(ApiResponse::success(
                "User retrieved successfully",
                UserResponse::from(user),
            )),
            None => Err(ServiceError::NotFound("User not found".to_string())),
        }
    }

    async fn authenticate(&self, token: &str) -> Result<CurrentUser, ServiceError> {
        let claims = self.token.verify(token)?;

        match self.find_user(claims.user_id).await? {
            Some(user) if user.is_active => Ok(CurrentUser::from(user)),
            Some(_) => Err(ServiceError::Unauthenticated(
                "User account is inactive".to_string(),
            )),
            None => Err(ServiceError::Unauthenticated("User not found".to_string())),
        }
    }
}
