//! # Signup Countries
//!
//! Reference list of countries used to fill the country choice of the
//! registration form.
//!
//! The list is fetched once, on a best-effort basis: [`load_countries`] never
//! fails, it logs the problem and hands back an empty list. Nothing in the
//! validation engine depends on the list.
//!
//! ## Example
//!
//! ```rust,no_run
//! use signup_countries::{load_countries, RestCountries};
//!
//! #[tokio::main]
//! async fn main() {
//!     let directory = RestCountries::new(signup_countries::DEFAULT_ENDPOINT);
//!     let countries = load_countries(&directory).await;
//!     println!("{} countries", countries.len());
//! }
//! ```

pub mod directory;
pub mod rest;

pub use directory::{load_countries, CountryDirectory, CountryEntry, DirectoryError, StaticDirectory};
pub use rest::{parse_directory, RestCountries, DEFAULT_ENDPOINT};
