pub mod catalog;
pub mod common;
pub mod user;

pub use catalog::*;
pub use common::*;
pub use user::*;
