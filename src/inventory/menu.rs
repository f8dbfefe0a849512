use std::io::{BufRead, Write};

use super::model::{NewProduct, NewSupplier, Product, ProductUpdate};
use super::store::InventoryStore;
use crate::menu::Menu;
use crate::prompt::Prompter;
use crate::ui::{self, Icons};
use crate::Result;

pub struct InventoryMenu {
    store: InventoryStore,
}

impl InventoryMenu {
    pub fn new(store: InventoryStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    fn add_product<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<()> {
        let name = p.non_empty("Product name: ")?;
        let description = p.line("Description: ")?;
        let price = p.float("Price: ", Some(0.01), None)?;
        let quantity = p.integer("Quantity: ", Some(0i64), None)?;
        let category = p.non_empty("Category: ")?;
        let supplier_id = p.optional_integer::<i64>("Supplier ID (or press Enter to skip): ")?;

        let mut product = NewProduct::new(name, price, quantity, category).description(description);
        product.supplier_id = supplier_id;

        let id = self.store.add_product(&product)?;
        ui::success(p.out(), &format!("Product added successfully (ID {id})"))?;
        Ok(())
    }

    fn view_products<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<()> {
        print_products(p.out(), &self.store.all_products()?)?;

        let stats = self.store.stats()?;
        ui::summary_row(
            p.out(),
            &format!("{} Products:", Icons::PACKAGE),
            &format!("{} ({} units, {} suppliers)", stats.products, stats.units, stats.suppliers),
        )?;
        Ok(())
    }

    fn search<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<()> {
        let keyword = p.line("Search keyword: ")?;
        let results = self.store.search_products(&keyword)?;
        writeln!(p.out(), "{} Found {} products", Icons::SEARCH, results.len())?;
        print_products(p.out(), &results)
    }

    fn update<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<()> {
        let id = p.integer::<i64>("Product ID: ", None, None)?;
        let update = ProductUpdate {
            name: p.non_empty("New name: ")?,
            price: p.float("New price: ", Some(0.01), None)?,
            quantity: p.integer("New quantity: ", Some(0i64), None)?,
        };

        if self.store.update_product(id, &update)? {
            ui::success(p.out(), "Product updated successfully")?;
        } else {
            ui::warn(p.out(), "Product not found")?;
        }
        Ok(())
    }

    fn delete<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<()> {
        let id = p.integer::<i64>("Product ID to delete: ", None, None)?;
        if self.store.delete_product(id)? {
            ui::success(p.out(), "Product deleted successfully")?;
        } else {
            ui::warn(p.out(), "Product not found")?;
        }
        Ok(())
    }

    fn add_supplier<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<()> {
        let name = p.non_empty("Supplier name: ")?;
        let contact = p.non_empty("Contact person: ")?;
        let phone = p.line("Phone: ")?;
        let email = p.line("Email: ")?;

        let id = self
            .store
            .add_supplier(&NewSupplier::new(name, contact, Some(phone), Some(email)))?;
        ui::success(p.out(), &format!("Supplier added successfully (ID {id})"))?;
        Ok(())
    }

    fn view_suppliers<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<()> {
        let suppliers = self.store.all_suppliers()?;
        if suppliers.is_empty() {
            ui::empty(p.out(), "No suppliers found")?;
        } else {
            writeln!(p.out(), "{}", ui::render_table(&suppliers))?;
        }
        Ok(())
    }

    fn supplier_products<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<()> {
        let id = p.integer::<i64>("Supplier ID: ", None, None)?;
        match self.store.supplier_products(id)? {
            Some((supplier, products)) => {
                ui::section(p.out(), &format!("Supplier: {} | Contact: {}", supplier.name, supplier.contact))?;
                print_products(p.out(), &products)?;
            }
            None => ui::warn(p.out(), "Supplier not found")?,
        }
        Ok(())
    }

    fn low_stock<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<()> {
        let threshold = p.integer("Low stock threshold: ", Some(0i64), None)?;
        let items = self.store.low_stock(threshold)?;
        writeln!(p.out(), "{} Found {} low stock items:", Icons::WARN, items.len())?;
        print_products(p.out(), &items)
    }

    fn value<R: BufRead, W: Write>(&self, p: &mut Prompter<R, W>) -> Result<()> {
        let value = self.store.inventory_value()?;
        ui::info(p.out(), &format!("{} Total inventory value", Icons::MONEY), &format!("${value:.2}"))?;
        Ok(())
    }

    fn delete_supplier<R: BufRead, W: Write>(&mut self, p: &mut Prompter<R, W>) -> Result<()> {
        let id = p.integer::<i64>("Supplier ID to delete: ", None, None)?;
        if self.store.delete_supplier(id)? {
            ui::success(p.out(), "Supplier deleted; their products are now unassigned")?;
        } else {
            ui::warn(p.out(), "Supplier not found")?;
        }
        Ok(())
    }
}

fn print_products(out: &mut impl Write, products: &[Product]) -> Result<()> {
    if products.is_empty() {
        ui::empty(out, "No products found")?;
    } else {
        writeln!(out, "{}", ui::render_table(products))?;
    }
    Ok(())
}

impl Menu for InventoryMenu {
    const TITLE: &'static str = "Inventory Management System";
    const WELCOME: &'static str = "Welcome to Inventory Management System";
    const TAGLINE: &'static str = "Parameterized queries, database constraints and transactions";
    const FAREWELL: &'static str = "Thank you for using Inventory Management System!";
    const OPTIONS: &'static [&'static str] = &[
        "Add Product",
        "View All Products",
        "Search Products",
        "Update Product",
        "Delete Product",
        "Add Supplier",
        "View All Suppliers",
        "View Supplier Products",
        "View Low Stock Items",
        "Calculate Total Inventory Value",
        "Delete Supplier",
        "Exit",
    ];

    fn handle<R: BufRead, W: Write>(&mut self, choice: usize, p: &mut Prompter<R, W>) -> Result<()> {
        match choice {
            1 => self.add_product(p),
            2 => self.view_products(p),
            3 => self.search(p),
            4 => self.update(p),
            5 => self.delete(p),
            6 => self.add_supplier(p),
            7 => self.view_suppliers(p),
            8 => self.supplier_products(p),
            9 => self.low_stock(p),
            10 => self.value(p),
            11 => self.delete_supplier(p),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu;
    use std::io::Cursor;

    fn drive(input: &str) -> (InventoryMenu, String) {
        let mut inventory_menu = InventoryMenu::new(InventoryStore::open_in_memory().unwrap());
        let mut p = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        menu::run(&mut inventory_menu, &mut p).unwrap();
        (inventory_menu, String::from_utf8(p.into_output()).unwrap())
    }

    #[test]
    fn test_add_supplier_and_product() {
        let script = "6\nAcme\nWile E.\n\n\n\
                      1\nAnvil\n\n0\n49.99\n-1\n3\nHeavy\nx\n1\n\
                      8\n1\n10\n12\n";
        let (inventory_menu, out) = drive(script);

        assert!(out.contains("Supplier added successfully (ID 1)"));
        assert!(out.contains("Value must be at least 0.01"));
        assert!(out.contains("Value must be at least 0"));
        assert!(out.contains("Product added successfully (ID 1)"));
        assert!(out.contains("Supplier: Acme | Contact: Wile E."));
        assert!(out.contains("$149.97"));

        let product = inventory_menu.store().product(1).unwrap().unwrap();
        assert_eq!(product.description, None);
        assert_eq!(product.supplier_id, Some(1));
    }

    #[test]
    fn test_unknown_supplier_is_printed_and_loop_continues() {
        let (inventory_menu, out) = drive("1\nGhost\n\n1\n1\nMisc\n9\n2\n12\n");
        assert!(out.contains("Error: Supplier ID 9 does not exist"));
        assert!(out.contains("No products found"));
        assert!(inventory_menu.store().all_products().unwrap().is_empty());
    }

    #[test]
    fn test_not_found_paths() {
        let (_, out) = drive("4\n5\nX\n1\n1\n5\n5\n8\n5\n11\n5\n12\n");
        assert_eq!(out.matches("Product not found").count(), 2);
        assert_eq!(out.matches("Supplier not found").count(), 2);
    }

    #[test]
    fn test_search_and_low_stock() {
        let script = "1\nWidget_XL\nBig one\n2\n1\nParts\n\n\
                      1\nWidgetXL\n\n2\n50\nParts\n\n\
                      3\nt_X\n9\n10\n3\n\n12\n";
        let (_, out) = drive(script);
        assert!(out.contains("Found 1 products"));
        assert!(out.contains("Found 1 low stock items:"));
        assert!(out.contains("Found 0 products"));
    }

    #[test]
    fn test_delete_supplier_unassigns_products() {
        let script = "6\nAcme\nWile\n555\n\n1\nAnvil\n\n10\n1\nHeavy\n1\n11\n1\n12\n";
        let (inventory_menu, out) = drive(script);
        assert!(out.contains("Supplier deleted"));
        assert_eq!(inventory_menu.store().product(1).unwrap().unwrap().supplier_id, None);
    }
}
