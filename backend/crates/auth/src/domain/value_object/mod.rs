//! Domain Value Objects

pub mod password;
pub mod role;
pub mod username;

pub use password::{PasswordHash, RawPassword};
pub use role::{Role, RoleError};
pub use username::{Username, UsernameError};
