mod cart;
mod product;

pub use self::cart::{CartServiceTrait, DynCartService};
pub use self::product::{DynProductService, ProductServiceTrait};
