//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL persistence for the hostel core,
//! implemented with SQLx over a connection pool.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: each repository owns the SQL
//! for one slice of the schema and returns domain types, keeping database
//! details out of the domain crates. Multi-statement lifecycle operations
//! (check-in, check-out, group batches, guest deletion, data reset) run in
//! single transactions so a concurrent reader never observes a guest
//! without its unit flipped, or vice versa.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, GuestRepository};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/hostel")).await?;
//! let guests = GuestRepository::new(pool);
//! ```

pub mod error;
pub mod pool;
pub mod repositories;
pub mod seed;

pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use repositories::guests::{CheckoutOutcome, CheckoutTarget, GuestRepository, GuestWithUnit};
pub use repositories::lodging::{BedWithGuest, LodgingRepository, OccupantSummary, RoomWithGuest};
pub use repositories::maintenance::{MaintenanceRepository, ResetReport};
pub use repositories::menu::MenuRepository;
pub use repositories::orders::{OrderRepository, OrderWithContext};
pub use repositories::reports::{CheckoutRecord, DailySummary, ReportsRepository};
pub use repositories::staff::{StaffRepository, StaffSummary};
pub use seed::{seed_all, SeedReport};

/// Embedded migrations, applied by the server at startup.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
