//! SQLite storage implementation
//!
//! Every statement is parameterized. Writes run inside [`InventoryStore::transaction`],
//! which commits on success and rolls back on any error.

use std::path::Path;

use rusqlite::{ffi, params, Connection, ErrorCode, OptionalExtension, Transaction};

use super::model::{InventoryStats, NewProduct, NewSupplier, Product, ProductUpdate, Supplier};
use super::schema;
use crate::{Error, Result};

const PRODUCT_COLUMNS: &str = "id, name, description, price, quantity, category, supplier_id";
const SUPPLIER_COLUMNS: &str = "id, name, contact, phone, email";

/// SQLite-backed product and supplier storage
pub struct InventoryStore {
    conn: Connection,
}

impl InventoryStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let store = Self::from_connection(Connection::open(path)?)?;
        tracing::info!("Opened inventory database {}", path.display());
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(schema::ENABLE_FOREIGN_KEYS)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<()> {
        self.transaction(|tx| {
            for stmt in schema::all_schema_statements() {
                tx.execute(stmt, [])?;
            }
            Ok(())
        })
    }

    /// Run `f` in a transaction: commit if it returns `Ok`, roll back otherwise.
    pub fn transaction<T>(&mut self, f: impl FnOnce(&Transaction<'_>) -> Result<T>) -> Result<T> {
        let tx = self.conn.transaction()?;
        match f(&tx) {
            Ok(value) => {
                tx.commit()?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback) = tx.rollback() {
                    tracing::warn!("Rollback failed after {}: {}", e, rollback);
                } else {
                    tracing::debug!("Rolled back: {}", e);
                }
                Err(e)
            }
        }
    }

    // ========== Product Operations ==========

    /// Insert a product and return its new ID
    pub fn add_product(&mut self, product: &NewProduct) -> Result<i64> {
        product.validate()?;

        let id = self.transaction(|tx| {
            tx.execute(
                r#"
                INSERT INTO products (name, description, price, quantity, category, supplier_id)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
                params![
                    product.name.trim(),
                    product.description,
                    product.price,
                    product.quantity,
                    product.category.trim(),
                    product.supplier_id,
                ],
            )
            .map_err(|e| match (constraint_code(&e), product.supplier_id) {
                (Some(ffi::SQLITE_CONSTRAINT_FOREIGNKEY), Some(supplier_id)) => Error::UnknownSupplier(supplier_id),
                _ => e.into(),
            })?;
            Ok(tx.last_insert_rowid())
        })?;

        tracing::debug!("Inserted product {}", id);
        Ok(id)
    }

    /// Get a product by ID
    pub fn product(&self, id: i64) -> Result<Option<Product>> {
        self.conn
            .query_row(
                &format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1"),
                [id],
                row_to_product,
            )
            .optional()
            .map_err(Into::into)
    }

    /// All products ordered by name
    pub fn all_products(&self) -> Result<Vec<Product>> {
        self.query_products(&format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY name, id"), [])
    }

    /// Case-insensitive substring search over name and description.
    ///
    /// `%` and `_` in the keyword match themselves, not any text.
    pub fn search_products(&self, keyword: &str) -> Result<Vec<Product>> {
        if keyword.is_empty() {
            return Ok(Vec::new());
        }

        let pattern = like_pattern(keyword);
        self.query_products(
            &format!(
                r"SELECT {PRODUCT_COLUMNS} FROM products
                  WHERE name LIKE ?1 ESCAPE '\' OR description LIKE ?1 ESCAPE '\'
                  ORDER BY name, id"
            ),
            [pattern],
        )
    }

    /// Returns `false` when no product has this ID.
    pub fn update_product(&mut self, id: i64, update: &ProductUpdate) -> Result<bool> {
        update.validate()?;

        let changed = self.transaction(|tx| {
            Ok(tx.execute(
                "UPDATE products SET name = ?1, price = ?2, quantity = ?3 WHERE id = ?4",
                params![update.name.trim(), update.price, update.quantity, id],
            )?)
        })?;
        Ok(changed > 0)
    }

    /// Returns `false` when no product has this ID.
    pub fn delete_product(&mut self, id: i64) -> Result<bool> {
        let changed = self.transaction(|tx| Ok(tx.execute("DELETE FROM products WHERE id = ?1", [id])?))?;
        Ok(changed > 0)
    }

    /// Products with `quantity < threshold`, lowest stock first
    pub fn low_stock(&self, threshold: i64) -> Result<Vec<Product>> {
        self.query_products(
            &format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE quantity < ?1 ORDER BY quantity ASC, name"),
            [threshold],
        )
    }

    /// Total stock value, aggregated in SQL
    pub fn inventory_value(&self) -> Result<f64> {
        let value: f64 = self.conn.query_row(
            "SELECT COALESCE(SUM(price * quantity), 0.0) FROM products",
            [],
            |row| row.get(0),
        )?;
        Ok(value)
    }

    fn query_products<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<Vec<Product>> {
        let mut stmt = self.conn.prepare(sql)?;
        let products = stmt
            .query_map(params, row_to_product)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(products)
    }

    // ========== Supplier Operations ==========

    /// Insert a supplier and return its new ID. Names are unique.
    pub fn add_supplier(&mut self, supplier: &NewSupplier) -> Result<i64> {
        supplier.validate()?;

        let id = self.transaction(|tx| {
            tx.execute(
                "INSERT INTO suppliers (name, contact, phone, email) VALUES (?1, ?2, ?3, ?4)",
                params![
                    supplier.name.trim(),
                    supplier.contact.trim(),
                    supplier.phone,
                    supplier.email,
                ],
            )
            .map_err(|e| match constraint_code(&e) {
                Some(ffi::SQLITE_CONSTRAINT_UNIQUE) => Error::DuplicateSupplier(supplier.name.trim().to_string()),
                _ => e.into(),
            })?;
            Ok(tx.last_insert_rowid())
        })?;

        tracing::debug!("Inserted supplier {}", id);
        Ok(id)
    }

    /// Get a supplier by ID
    pub fn supplier(&self, id: i64) -> Result<Option<Supplier>> {
        self.conn
            .query_row(
                &format!("SELECT {SUPPLIER_COLUMNS} FROM suppliers WHERE id = ?1"),
                [id],
                row_to_supplier,
            )
            .optional()
            .map_err(Into::into)
    }

    /// All suppliers ordered by name
    pub fn all_suppliers(&self) -> Result<Vec<Supplier>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {SUPPLIER_COLUMNS} FROM suppliers ORDER BY name"))?;
        let suppliers = stmt
            .query_map([], row_to_supplier)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(suppliers)
    }

    /// Delete a supplier. Its products stay, with their supplier cleared.
    pub fn delete_supplier(&mut self, id: i64) -> Result<bool> {
        let changed = self.transaction(|tx| Ok(tx.execute("DELETE FROM suppliers WHERE id = ?1", [id])?))?;
        Ok(changed > 0)
    }

    /// A supplier with its products (by name), or `None` if the supplier does not exist
    pub fn supplier_products(&self, id: i64) -> Result<Option<(Supplier, Vec<Product>)>> {
        let Some(supplier) = self.supplier(id)? else {
            return Ok(None);
        };

        let products = self.query_products(
            r#"
            SELECT p.id, p.name, p.description, p.price, p.quantity, p.category, p.supplier_id
            FROM products p
            INNER JOIN suppliers s ON p.supplier_id = s.id
            WHERE s.id = ?1
            ORDER BY p.name, p.id
            "#,
            [id],
        )?;
        Ok(Some((supplier, products)))
    }

    // ========== Statistics ==========

    pub fn stats(&self) -> Result<InventoryStats> {
        let (products, units): (i64, i64) = self.conn.query_row(
            "SELECT COUNT(*), COALESCE(SUM(quantity), 0) FROM products",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        let suppliers: i64 = self.conn.query_row("SELECT COUNT(*) FROM suppliers", [], |row| row.get(0))?;

        Ok(InventoryStats {
            products: products as usize,
            suppliers: suppliers as usize,
            units,
        })
    }
}

/// Extended result code of a constraint violation, if `err` is one.
fn constraint_code(err: &rusqlite::Error) -> Option<i32> {
    match err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation => Some(e.extended_code),
        _ => None,
    }
}

/// Substring LIKE pattern with `\` as the escape character.
fn like_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);
    pattern.push('%');
    for c in keyword.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn row_to_product(row: &rusqlite::Row) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        price: row.get(3)?,
        quantity: row.get(4)?,
        category: row.get(5)?,
        supplier_id: row.get(6)?,
    })
}

fn row_to_supplier(row: &rusqlite::Row) -> rusqlite::Result<Supplier> {
    Ok(Supplier {
        id: row.get(0)?,
        name: row.get(1)?,
        contact: row.get(2)?,
        phone: row.get(3)?,
        email: row.get(4)?,
    })
}
