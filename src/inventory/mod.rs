//! Products and suppliers in a local SQLite database
//!
//! ## Schema
//!
//! ```text
//! suppliers (id, name UNIQUE, contact, phone?, email?)
//! products  (id, name, description?, price > 0, quantity >= 0, category,
//!            supplier_id? -> suppliers.id ON DELETE SET NULL)
//! ```
//!
//! Values only ever reach SQL as bound parameters, and every write runs
//! in its own transaction.

pub mod menu;
pub mod model;
pub mod schema;
pub mod store;

pub use menu::InventoryMenu;
pub use model::{InventoryStats, NewProduct, NewSupplier, Product, ProductUpdate, Supplier};
pub use store::InventoryStore;
