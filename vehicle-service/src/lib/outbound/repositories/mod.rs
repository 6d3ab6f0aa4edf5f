pub mod health;
pub mod user;
pub mod vehicle;

pub use health::PostgresStoreHealth;
pub use user::PostgresUserRepository;
pub use vehicle::PostgresVehicleRepository;
