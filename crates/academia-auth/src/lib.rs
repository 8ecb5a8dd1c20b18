//! # Academia Auth
//!
//! Access tokens for the Academia API.
//!
//! - [`claims`]: The claims carried by an access token
//! - [`jwt`]: Token creation and verification
//!
//! A token only identifies the user. The role and active flag used for
//! authorization are read from the user record on every request, so a role
//! change or deactivation takes effect without waiting for tokens to expire.
//!
//! # Example
//!
//! ```ignore
//! use academia_auth::{create_access_token, verify_token};
//! use academia_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(UserId::new(7), "parent@example.com", Role::Parent, &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.user_id()?, UserId::new(7));
//! ```

pub mod claims;
pub mod jwt;

pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};
