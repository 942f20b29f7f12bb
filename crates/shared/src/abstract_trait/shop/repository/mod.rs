mod cart;
mod product;

pub use self::cart::{CartRepositoryTrait, DynCartRepository};
pub use self::product::{DynProductRepository, ProductRepositoryTrait};
