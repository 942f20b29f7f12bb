mod cart;
mod product;

pub use self::cart::CartRepository;
pub use self::product::ProductRepository;
