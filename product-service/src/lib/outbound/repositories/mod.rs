pub mod access_token;
pub mod product;
pub mod user;

pub use access_token::PostgresAccessTokenRepository;
pub use product::PostgresProductRepository;
pub use user::PostgresUserRepository;
