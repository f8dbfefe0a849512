//! Database schema definitions
//!
//! Validation is enforced in the schema as well as in Rust, so rows written
//! by other tools still obey the same rules.

/// SQL to create the suppliers table
pub const CREATE_SUPPLIERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS suppliers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    contact TEXT NOT NULL,
    phone TEXT,
    email TEXT,
    CHECK(length(name) > 0),
    CHECK(length(contact) > 0)
)
"#;

/// SQL to create the products table.
/// Deleting a supplier detaches its products instead of removing them.
pub const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT,
    price REAL NOT NULL CHECK(price > 0),
    quantity INTEGER NOT NULL CHECK(quantity >= 0),
    category TEXT NOT NULL,
    supplier_id INTEGER,
    FOREIGN KEY (supplier_id) REFERENCES suppliers(id)
        ON DELETE SET NULL
        ON UPDATE CASCADE,
    CHECK(length(name) > 0),
    CHECK(length(category) > 0)
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_product_name ON products(name)",
    "CREATE INDEX IF NOT EXISTS idx_product_category ON products(category)",
    "CREATE INDEX IF NOT EXISTS idx_product_supplier ON products(supplier_id)",
    "CREATE INDEX IF NOT EXISTS idx_supplier_name ON suppliers(name)",
];

/// Must run on every connection, outside any transaction.
pub const ENABLE_FOREIGN_KEYS: &str = "PRAGMA foreign_keys = ON;";

/// All schema creation statements, parents before children
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_SUPPLIERS_TABLE, CREATE_PRODUCTS_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
