//! Pure data structures shared by every store and by the API collaborator.

pub mod ingredient;
pub mod order;
pub mod responses;
pub mod user;

pub use ingredient::*;
pub use order::*;
pub use responses::*;
pub use user::*;
