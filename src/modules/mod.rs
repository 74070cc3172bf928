pub mod auth;
pub mod cart;
pub mod category;
pub mod menu;
pub mod order;
pub mod payment;
pub mod search;
pub mod user;

mod router;
pub use router::get_router;
