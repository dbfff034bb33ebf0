//! Interactive text front end for the product repository.
//!
//! Everything here is presentation: prompting, parsing raw input, rendering
//! tables, and confirming destructive actions. Domain rules live in
//! `stockroom-products`.

pub mod config;
pub mod input;
pub mod menu;
pub mod table;

pub use config::AppConfig;
pub use input::{InputError, Prompter};
pub use menu::{Menu, MenuChoice};
