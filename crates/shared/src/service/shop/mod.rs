mod cart;
mod product;

pub use self::cart::CartService;
pub use self::product::ProductService;
