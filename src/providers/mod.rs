pub mod orm;
pub mod provider;

pub use orm::OrmServiceProvider;
pub use provider::ServiceProvider;
