//! Numbered menu driving the product repository.

use std::io::{BufRead, Write};

use stockroom_core::{DomainError, ProductId};
use stockroom_products::{Price, Product, ProductRepository, StockDelta};

use crate::input::{InputError, Prompter, parse_value};
use crate::table;

const TITLE: &str = "===== Product Management System =====";
const RULE: &str = "=====================================";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    DisplayAll,
    Search,
    Add,
    Update,
    Delete,
    UpdateStock,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::DisplayAll,
        MenuChoice::Search,
        MenuChoice::Add,
        MenuChoice::Update,
        MenuChoice::Delete,
        MenuChoice::UpdateStock,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> i64 {
        match self {
            MenuChoice::Exit => 0,
            MenuChoice::DisplayAll => 1,
            MenuChoice::Search => 2,
            MenuChoice::Add => 3,
            MenuChoice::Update => 4,
            MenuChoice::Delete => 5,
            MenuChoice::UpdateStock => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Exit => "Exit",
            MenuChoice::DisplayAll => "Display All Products",
            MenuChoice::Search => "Search Products",
            MenuChoice::Add => "Add New Product",
            MenuChoice::Update => "Update Product",
            MenuChoice::Delete => "Delete Product",
            MenuChoice::UpdateStock => "Update Stock",
        }
    }
}

impl TryFrom<i64> for MenuChoice {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.number() == value)
            .ok_or(value)
    }
}

/// Interactive session over a repository handed in by the caller.
pub struct Menu<'r, P: ProductRepository + ?Sized> {
    repo: &'r mut P,
    currency: String,
}

impl<'r, P: ProductRepository + ?Sized> Menu<'r, P> {
    pub fn new(repo: &'r mut P, currency: impl Into<String>) -> Self {
        Self {
            repo,
            currency: currency.into(),
        }
    }

    /// Print the startup banner, then run until the user exits or input ends.
    ///
    /// Domain failures are reported and the loop continues; only I/O errors on
    /// the terminal are returned.
    pub fn run<R: BufRead, W: Write>(&mut self, io: &mut Prompter<R, W>) -> Result<(), InputError> {
        io.say(TITLE)?;
        loop {
            self.show_menu(io)?;
            let outcome = io
                .read_parsed::<i64>("Enter your choice: ")
                .and_then(|n| self.dispatch(io, n));

            match outcome {
                Ok(true) => continue,
                Ok(false) => return Ok(()),
                Err(InputError::Eof) => {
                    tracing::debug!("input closed; leaving menu");
                    io.say("")?;
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Returns `false` once the user chose to exit.
    fn dispatch<R: BufRead, W: Write>(
        &mut self,
        io: &mut Prompter<R, W>,
        number: i64,
    ) -> Result<bool, InputError> {
        let Ok(choice) = MenuChoice::try_from(number) else {
            io.say("Invalid choice. Please try again.")?;
            return Ok(true);
        };

        tracing::debug!(?choice, "menu selection");
        match choice {
            MenuChoice::DisplayAll => self.display_all(io)?,
            MenuChoice::Search => self.search(io)?,
            MenuChoice::Add => self.add(io)?,
            MenuChoice::Update => self.update(io)?,
            MenuChoice::Delete => self.delete(io)?,
            MenuChoice::UpdateStock => self.update_stock(io)?,
            MenuChoice::Exit => {
                io.say("Exiting Product Management System. Goodbye!")?;
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn show_menu<R: BufRead, W: Write>(&self, io: &mut Prompter<R, W>) -> Result<(), InputError> {
        io.say(format!("\n{TITLE}"))?;
        for choice in MenuChoice::ALL {
            io.say(format!("{}. {}", choice.number(), choice.label()))?;
        }
        io.say(RULE)
    }

    fn show_products<R: BufRead, W: Write>(
        &self,
        io: &mut Prompter<R, W>,
        heading: &str,
        products: &[Product],
    ) -> Result<(), InputError> {
        io.say(format!("\n===== {heading} ====="))?;
        io.say(table::render(products, &self.currency))
    }

    fn display_all<R: BufRead, W: Write>(&mut self, io: &mut Prompter<R, W>) -> Result<(), InputError> {
        let products = self.repo.list();
        if products.is_empty() {
            return io.say("No products found in the system.");
        }
        self.show_products(io, "All Products", &products)
    }

    fn search<R: BufRead, W: Write>(&mut self, io: &mut Prompter<R, W>) -> Result<(), InputError> {
        let keyword = io.read_line("Enter search keyword: ")?;
        let results = self.repo.search(&keyword);
        if results.is_empty() {
            return io.say(format!("No products found matching the keyword: {keyword}"));
        }
        self.show_products(io, "Search Results", &results)
    }

    fn add<R: BufRead, W: Write>(&mut self, io: &mut Prompter<R, W>) -> Result<(), InputError> {
        io.say("\n===== Add New Product =====")?;
        let name = io.read_line("Enter product name: ")?;
        let category = io.read_line("Enter product category: ")?;
        let price: Price = io.read_parsed("Enter product price: ")?;
        let stock: i64 = io.read_parsed("Enter initial stock: ")?;

        let stored = self.repo.add(Product::draft(name, category, price, stock));
        io.say(format!("Product added successfully with ID: {}", stored.id))
    }

    fn update<R: BufRead, W: Write>(&mut self, io: &mut Prompter<R, W>) -> Result<(), InputError> {
        io.say("\n===== Update Product =====")?;
        let Some(mut product) = self.find(io, "Enter product ID to update: ")? else {
            return Ok(());
        };
        io.say(format!("Current details: {product}"))?;

        let name = io.read_line("Enter new name (or press enter to keep current): ")?;
        if !name.is_empty() {
            product.name = name;
        }

        let category = io.read_line("Enter new category (or press enter to keep current): ")?;
        if !category.is_empty() {
            product.category = category;
        }

        let price = io.read_line("Enter new price (or press enter to keep current): ")?;
        if !price.trim().is_empty() {
            match parse_value::<Price>(&price) {
                Ok(price) => product.price = price,
                Err(_) => io.say("Invalid price format. Price not updated.")?,
            }
        }

        match self.repo.update(product) {
            Ok(updated) => io.say(format!("Product updated successfully: {updated}")),
            Err(err) => io.say(format!("Failed to update product: {err}")),
        }
    }

    fn delete<R: BufRead, W: Write>(&mut self, io: &mut Prompter<R, W>) -> Result<(), InputError> {
        io.say("\n===== Delete Product =====")?;
        let Some(product) = self.find(io, "Enter product ID to delete: ")? else {
            return Ok(());
        };
        io.say(format!("Product to delete: {product}"))?;

        let confirm = io.read_line("Are you sure you want to delete this product? (y/n): ")?;
        if !confirm.trim().eq_ignore_ascii_case("y") {
            return io.say("Delete operation cancelled.");
        }

        if self.repo.delete(product.id) {
            io.say("Product deleted successfully.")
        } else {
            io.say("Failed to delete product.")
        }
    }

    fn update_stock<R: BufRead, W: Write>(&mut self, io: &mut Prompter<R, W>) -> Result<(), InputError> {
        io.say("\n===== Update Stock =====")?;
        let Some(product) = self.find(io, "Enter product ID: ")? else {
            return Ok(());
        };
        io.say(format!("Current product: {product}"))?;
        io.say(format!("Current stock: {}", product.stock))?;

        let delta: i64 =
            io.read_parsed("Enter quantity to add (positive) or remove (negative): ")?;
        match self.repo.adjust_stock(product.id, StockDelta::new(delta)) {
            Ok(updated) => io.say(format!(
                "Stock updated successfully. New stock: {}",
                updated.stock
            )),
            Err(err @ DomainError::InvalidQuantity { .. }) => io.say(format!(
                "Failed to update stock: {err}. Requested removal exceeds available stock."
            )),
            Err(err) => io.say(format!("Failed to update stock: {err}")),
        }
    }

    /// Prompt for an id and fetch the record, reporting unknown ids.
    ///
    /// Any integer is accepted; one outside the id range is simply not found.
    fn find<R: BufRead, W: Write>(
        &mut self,
        io: &mut Prompter<R, W>,
        prompt: &str,
    ) -> Result<Option<Product>, InputError> {
        let raw: i64 = io.read_parsed(prompt)?;
        let found = u32::try_from(raw)
            .ok()
            .map(ProductId::new)
            .and_then(|id| self.repo.get(id).ok());
        if found.is_none() {
            io.say(format!("Product not found with ID: {raw}"))?;
        }
        Ok(found)
    }
}
