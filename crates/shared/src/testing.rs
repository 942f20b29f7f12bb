//! In-memory storage implementing every repository trait, for tests.

use crate::{
    abstract_trait::{
        learn::repository::{
            CourseRepositoryTrait, EnrollmentRepositoryTrait, LessonRepositoryTrait,
        },
        refresh_token::{
            command::RefreshTokenCommandRepositoryTrait, query::RefreshTokenQueryRepositoryTrait,
        },
        shop::repository::{CartRepositoryTrait, ProductRepositoryTrait},
        user::repository::{command::UserCommandRepositoryTrait, query::UserQueryRepositoryTrait},
    },
    domain::requests::{
        CreateProductRequest, CreateRefreshToken, CreateUserRequest, NewCourse, NewLesson,
        RecordLoginRequest, UpdateCourseRequest,
    },
    errors::RepositoryError,
    model::{
        cart::{CartItemModel, CartLineModel, CartModel},
        course::{CourseModel, CourseOverviewModel},
        enrollment::{EnrollmentModel, EnrollmentOverviewModel},
        lesson::LessonModel,
        product::ProductModel,
        refresh_token::RefreshTokenModel,
        role::Role,
        user::UserModel,
    },
    repository::Repositories,
};
use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Default)]
struct Tables {
    users: Vec<UserModel>,
    refresh_tokens: Vec<RefreshTokenModel>,
    courses: Vec<CourseModel>,
    lessons: Vec<LessonModel>,
    enrollments: Vec<EnrollmentModel>,
    products: Vec<ProductModel>,
    carts: Vec<CartModel>,
    cart_items: Vec<CartItemModel>,
    next_id: i32,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    fn overview(&self, course: &CourseModel) -> CourseOverviewModel {
        let instructor_name = self
            .users
            .iter()
            .find(|u| u.user_id == course.instructor_id)
            .map(|u| u.display_name.clone())
            .unwrap_or_default();

        CourseOverviewModel {
            course_id: course.course_id,
            title: course.title.clone(),
            description: course.description.clone(),
            instructor_id: course.instructor_id,
            instructor_name,
            lessons_count: self.lesson_count(course.course_id),
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }

    fn lesson_count(&self, course_id: i32) -> i64 {
        self.lessons
            .iter()
            .filter(|l| l.course_id == course_id)
            .count() as i64
    }

    fn touch_cart(&mut self, cart_id: i32) {
        if let Some(cart) = self.carts.iter_mut().find(|c| c.cart_id == cart_id) {
            cart.updated_at = Some(now());
        }
    }
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

#[derive(Default)]
pub struct InMemoryDb {
    tables: Mutex<Tables>,
}

impl InMemoryDb {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn repositories(self: &Arc<Self>) -> Repositories {
        Repositories {
            user_query: self.clone(),
            user_command: self.clone(),
            refresh_query: self.clone(),
            refresh_command: self.clone(),
            course: self.clone(),
            lesson: self.clone(),
            enrollment: self.clone(),
            product: self.clone(),
            cart: self.clone(),
        }
    }

    pub async fn set_active(&self, user_id: i32, active: bool) {
        let mut tables = self.tables.lock().await;
        if let Some(user) = tables.users.iter_mut().find(|u| u.user_id == user_id) {
            user.is_active = active;
        }
    }

    pub async fn user(&self, user_id: i32) -> Option<UserModel> {
        let tables = self.tables.lock().await;
        tables.users.iter().find(|u| u.user_id == user_id).cloned()
    }

    pub async fn refresh_tokens(&self) -> Vec<RefreshTokenModel> {
        self.tables.lock().await.refresh_tokens.clone()
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for InMemoryDb {
    async fn find_by_id(&self, user_id: i32) -> Result<Option<UserModel>, RepositoryError> {
        Ok(self.user(user_id).await)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, RepositoryError> {
        let tables = self.tables.lock().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for InMemoryDb {
    async fn create(&self, req: &CreateUserRequest) -> Result<UserModel, RepositoryError> {
        let mut tables = self.tables.lock().await;

        if tables.users.iter().any(|u| u.email == req.email) {
            return Err(RepositoryError::AlreadyExists("users_email_key".into()));
        }

        let user = UserModel {
            user_id: tables.next_id(),
            email: req.email.clone(),
            display_name: req.display_name.clone(),
            role: req.role,
            password: req.password.clone(),
            email_verified: false,
            is_active: true,
            last_login: None,
            last_login_ip: None,
            created_at: Some(now()),
            updated_at: Some(now()),
        };
        tables.users.push(user.clone());

        Ok(user)
    }

    async fn update_profile(
        &self,
        user_id: i32,
        display_name: &str,
    ) -> Result<UserModel, RepositoryError> {
        let mut tables = self.tables.lock().await;
        let user = tables
            .users
            .iter_mut()
            .find(|u| u.user_id == user_id)
            .ok_or(RepositoryError::NotFound)?;

        user.display_name = display_name.to_string();
        user.updated_at = Some(now());
        Ok(user.clone())
    }

    async fn update_role(&self, user_id: i32, role: Role) -> Result<UserModel, RepositoryError> {
        let mut tables = self.tables.lock().await;
        let user = tables
            .users
            .iter_mut()
            .find(|u| u.user_id == user_id)
            .ok_or(RepositoryError::NotFound)?;

        user.role = role;
        user.updated_at = Some(now());
        Ok(user.clone())
    }

    async fn record_login(&self, req: &RecordLoginRequest) -> Result<(), RepositoryError> {
        let mut tables = self.tables.lock().await;
        if let Some(user) = tables.users.iter_mut().find(|u| u.user_id == req.user_id) {
            user.last_login = Some(now());
            user.last_login_ip = req.ip_address.clone();
        }
        Ok(())
    }
}

#[async_trait]
impl RefreshTokenQueryRepositoryTrait for InMemoryDb {
    async fn find_by_token(
        &self,
        token: &str,
    ) -> Result<Option<RefreshTokenModel>, RepositoryError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .refresh_tokens
            .iter()
            .find(|t| t.token == token)
            .cloned())
    }

    async fn find_active_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<RefreshTokenModel>, RepositoryError> {
        let tables = self.tables.lock().await;
        let now = now();
        Ok(tables
            .refresh_tokens
            .iter()
            .filter(|t| t.user_id == user_id && t.is_usable_at(now))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl RefreshTokenCommandRepositoryTrait for InMemoryDb {
    async fn create(
        &self,
        req: &CreateRefreshToken,
    ) -> Result<RefreshTokenModel, RepositoryError> {
        let mut tables = self.tables.lock().await;

        if tables.refresh_tokens.iter().any(|t| t.token == req.token) {
            return Err(RepositoryError::AlreadyExists("refresh_tokens_token_key".into()));
        }
        if !tables.users.iter().any(|u| u.user_id == req.user_id) {
            return Err(RepositoryError::ForeignKey("refresh_tokens_user_id_fkey".into()));
        }

        let record = RefreshTokenModel {
            refresh_token_id: tables.next_id(),
            user_id: req.user_id,
            token: req.token.clone(),
            expires_at: req.expires_at,
            revoked: false,
            created_at: Some(now()),
        };
        tables.refresh_tokens.push(record.clone());

        Ok(record)
    }

    async fn revoke_all_for_user(&self, user_id: i32) -> Result<u64, RepositoryError> {
        let mut tables = self.tables.lock().await;
        let mut revoked = 0;

        for token in tables
            .refresh_tokens
            .iter_mut()
            .filter(|t| t.user_id == user_id && !t.revoked)
        {
            token.revoked = true;
            revoked += 1;
        }

        Ok(revoked)
    }
}

#[async_trait]
impl CourseRepositoryTrait for InMemoryDb {
    async fn find_all(&self) -> Result<Vec<CourseOverviewModel>, RepositoryError> {
        let tables = self.tables.lock().await;
        let mut courses: Vec<_> = tables.courses.iter().map(|c| tables.overview(c)).collect();
        courses.sort_by(|a, b| b.course_id.cmp(&a.course_id));
        Ok(courses)
    }

    async fn find_overview_by_id(
        &self,
        course_id: i32,
    ) -> Result<Option<CourseOverviewModel>, RepositoryError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .courses
            .iter()
            .find(|c| c.course_id == course_id)
            .map(|c| tables.overview(c)))
    }

    async fn find_by_id(&self, course_id: i32) -> Result<Option<CourseModel>, RepositoryError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .courses
            .iter()
            .find(|c| c.course_id == course_id)
            .cloned())
    }

    async fn create(&self, req: &NewCourse) -> Result<CourseModel, RepositoryError> {
        let mut tables = self.tables.lock().await;
        let course = CourseModel {
            course_id: tables.next_id(),
            title: req.title.clone(),
            description: req.description.clone(),
            instructor_id: req.instructor_id,
            created_at: Some(now()),
            updated_at: Some(now()),
        };
        tables.courses.push(course.clone());
        Ok(course)
    }

    async fn update(
        &self,
        course_id: i32,
        req: &UpdateCourseRequest,
    ) -> Result<CourseModel, RepositoryError> {
        let mut tables = self.tables.lock().await;
        let course = tables
            .courses
            .iter_mut()
            .find(|c| c.course_id == course_id)
            .ok_or(RepositoryError::NotFound)?;

        if let Some(title) = &req.title {
            course.title = title.clone();
        }
        if let Some(description) = &req.description {
            course.description = description.clone();
        }
        course.updated_at = Some(now());

        Ok(course.clone())
    }

    async fn delete(&self, course_id: i32) -> Result<(), RepositoryError> {
        let mut tables = self.tables.lock().await;
        let before = tables.courses.len();
        tables.courses.retain(|c| c.course_id != course_id);

        if tables.courses.len() == before {
            return Err(RepositoryError::NotFound);
        }

        tables.lessons.retain(|l| l.course_id != course_id);
        tables.enrollments.retain(|e| e.course_id != course_id);
        Ok(())
    }
}

#[async_trait]
impl LessonRepositoryTrait for InMemoryDb {
    async fn find_all(&self, course_id: Option<i32>) -> Result<Vec<LessonModel>, RepositoryError> {
        let tables = self.tables.lock().await;
        let mut lessons: Vec<_> = tables
            .lessons
            .iter()
            .filter(|l| course_id.is_none_or(|id| l.course_id == id))
            .cloned()
            .collect();
        lessons.sort_by_key(|l| (l.course_id, l.order_index, l.lesson_id));
        Ok(lessons)
    }

    async fn find_by_id(&self, lesson_id: i32) -> Result<Option<LessonModel>, RepositoryError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .lessons
            .iter()
            .find(|l| l.lesson_id == lesson_id)
            .cloned())
    }

    async fn count_by_course(&self, course_id: i32) -> Result<i64, RepositoryError> {
        Ok(self.tables.lock().await.lesson_count(course_id))
    }

    async fn create(&self, req: &NewLesson) -> Result<LessonModel, RepositoryError> {
        let mut tables = self.tables.lock().await;

        if !tables.courses.iter().any(|c| c.course_id == req.course_id) {
            return Err(RepositoryError::ForeignKey("lessons_course_id_fkey".into()));
        }

        let order_index = req.order_index.unwrap_or_else(|| {
            tables
                .lessons
                .iter()
                .filter(|l| l.course_id == req.course_id)
                .map(|l| l.order_index + 1)
                .max()
                .unwrap_or(0)
        });

        let lesson = LessonModel {
            lesson_id: tables.next_id(),
            course_id: req.course_id,
            title: req.title.clone(),
            content: req.content.clone(),
            video_url: req.video_url.clone(),
            order_index,
            created_at: Some(now()),
            updated_at: Some(now()),
        };
        tables.lessons.push(lesson.clone());
        Ok(lesson)
    }
}

#[async_trait]
impl EnrollmentRepositoryTrait for InMemoryDb {
    async fn find(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> Result<Option<EnrollmentModel>, RepositoryError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .enrollments
            .iter()
            .find(|e| e.user_id == user_id && e.course_id == course_id)
            .cloned())
    }

    async fn find_by_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<EnrollmentOverviewModel>, RepositoryError> {
        let tables = self.tables.lock().await;
        let mut result: Vec<_> = tables
            .enrollments
            .iter()
            .filter(|e| e.user_id == user_id)
            .map(|e| EnrollmentOverviewModel {
                enrollment_id: e.enrollment_id,
                course_id: e.course_id,
                course_title: tables
                    .courses
                    .iter()
                    .find(|c| c.course_id == e.course_id)
                    .map(|c| c.title.clone())
                    .unwrap_or_default(),
                completed_lessons: e.completed_lessons.clone(),
                total_lessons: tables.lesson_count(e.course_id),
                enrolled_at: e.enrolled_at,
                last_accessed_at: e.last_accessed_at,
            })
            .collect();
        result.sort_by(|a, b| b.enrollment_id.cmp(&a.enrollment_id));
        Ok(result)
    }

    async fn get_or_create(
        &self,
        user_id: i32,
        course_id: i32,
    ) -> Result<(EnrollmentModel, bool), RepositoryError> {
        let mut tables = self.tables.lock().await;

        if let Some(existing) = tables
            .enrollments
            .iter()
            .find(|e| e.user_id == user_id && e.course_id == course_id)
        {
            return Ok((existing.clone(), false));
        }

        if !tables.courses.iter().any(|c| c.course_id == course_id) {
            return Err(RepositoryError::ForeignKey("enrollments_course_id_fkey".into()));
        }

        let enrollment = EnrollmentModel {
            enrollment_id: tables.next_id(),
            user_id,
            course_id,
            completed_lessons: Vec::new(),
            enrolled_at: Some(now()),
            last_accessed_at: Some(now()),
        };
        tables.enrollments.push(enrollment.clone());
        Ok((enrollment, true))
    }

    async fn complete_lesson(
        &self,
        user_id: i32,
        course_id: i32,
        lesson_id: i32,
    ) -> Result<Option<EnrollmentModel>, RepositoryError> {
        let mut tables = self.tables.lock().await;

        let Some(enrollment) = tables
            .enrollments
            .iter_mut()
            .find(|e| e.user_id == user_id && e.course_id == course_id)
        else {
            return Ok(None);
        };

        if !enrollment.completed_lessons.contains(&lesson_id) {
            enrollment.completed_lessons.push(lesson_id);
        }
        enrollment.last_accessed_at = Some(now());

        Ok(Some(enrollment.clone()))
    }
}

#[async_trait]
impl ProductRepositoryTrait for InMemoryDb {
    async fn find_all(&self, featured: Option<bool>) -> Result<Vec<ProductModel>, RepositoryError> {
        let tables = self.tables.lock().await;
        let mut products: Vec<_> = tables
            .products
            .iter()
            .filter(|p| featured.is_none_or(|f| p.featured == f))
            .cloned()
            .collect();
        products.sort_by(|a, b| b.product_id.cmp(&a.product_id));
        Ok(products)
    }

    async fn find_by_id(&self, product_id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .products
            .iter()
            .find(|p| p.product_id == product_id)
            .cloned())
    }

    async fn create(&self, req: &CreateProductRequest) -> Result<ProductModel, RepositoryError> {
        let mut tables = self.tables.lock().await;
        let product = ProductModel {
            product_id: tables.next_id(),
            title: req.title.clone(),
            description: req.description.clone(),
            price: req.price,
            currency: req.currency.clone(),
            category: req.category.clone(),
            stock: req.stock,
            featured: req.featured,
            created_at: Some(now()),
            updated_at: Some(now()),
        };
        tables.products.push(product.clone());
        Ok(product)
    }
}

#[async_trait]
impl CartRepositoryTrait for InMemoryDb {
    async fn get_or_create(&self, user_id: i32) -> Result<CartModel, RepositoryError> {
        let mut tables = self.tables.lock().await;

        if let Some(cart) = tables.carts.iter().find(|c| c.user_id == user_id) {
            return Ok(cart.clone());
        }
        if !tables.users.iter().any(|u| u.user_id == user_id) {
            return Err(RepositoryError::ForeignKey("carts_user_id_fkey".into()));
        }

        let cart = CartModel {
            cart_id: tables.next_id(),
            user_id,
            created_at: Some(now()),
            updated_at: Some(now()),
        };
        tables.carts.push(cart.clone());
        Ok(cart)
    }

    async fn find_lines(&self, cart_id: i32) -> Result<Vec<CartLineModel>, RepositoryError> {
        let tables = self.tables.lock().await;
        Ok(tables
            .cart_items
            .iter()
            .filter(|i| i.cart_id == cart_id)
            .filter_map(|i| {
                let product = tables.products.iter().find(|p| p.product_id == i.product_id)?;
                Some(CartLineModel {
                    cart_item_id: i.cart_item_id,
                    product_id: i.product_id,
                    product_title: product.title.clone(),
                    product_price: product.price,
                    currency: product.currency.clone(),
                    quantity: i.quantity,
                })
            })
            .collect())
    }

    async fn add_item(
        &self,
        cart_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<(), RepositoryError> {
        let mut tables = self.tables.lock().await;

        if !tables.products.iter().any(|p| p.product_id == product_id) {
            return Err(RepositoryError::ForeignKey("cart_items_product_id_fkey".into()));
        }

        let existing = tables
            .cart_items
            .iter()
            .position(|i| i.cart_id == cart_id && i.product_id == product_id);

        if let Some(index) = existing {
            tables.cart_items[index].quantity += quantity;
        } else {
            let item = CartItemModel {
                cart_item_id: tables.next_id(),
                cart_id,
                product_id,
                quantity,
                added_at: Some(now()),
            };
            tables.cart_items.push(item);
        }

        tables.touch_cart(cart_id);
        Ok(())
    }

    async fn set_quantity(
        &self,
        cart_id: i32,
        product_id: i32,
        quantity: i32,
    ) -> Result<bool, RepositoryError> {
        let mut tables = self.tables.lock().await;

        let Some(item) = tables
            .cart_items
            .iter_mut()
            .find(|i| i.cart_id == cart_id && i.product_id == product_id)
        else {
            return Ok(false);
        };
        item.quantity = quantity;

        tables.touch_cart(cart_id);
        Ok(true)
    }

    async fn remove_item(&self, cart_id: i32, product_id: i32) -> Result<bool, RepositoryError> {
        let mut tables = self.tables.lock().await;
        let before = tables.cart_items.len();
        tables
            .cart_items
            .retain(|i| !(i.cart_id == cart_id && i.product_id == product_id));

        if tables.cart_items.len() == before {
            return Ok(false);
        }

        tables.touch_cart(cart_id);
        Ok(true)
    }
}
