//! # sovran-variant
//!
//! A closed-set variant container with type-safe access and visitor dispatch.
//!
//! `sovran-variant` stores exactly one value drawn from a fixed list of
//! member types you choose when the variant type is defined. The active
//! member is tracked by the enum's own tag, so there is no runtime type
//! table, no hashing, and no way for the tag and the stored value to
//! disagree. Access is total: asking about the wrong type, or a type that
//! isn't in the list at all, answers `false`/`None` instead of failing.
//!
//! ## Key Features
//!
//! - **Closed set**: the member list is fixed at definition time and never
//!   grows; a value outside the list doesn't compile
//! - **Type-safe**: `is_type`/`peek` check the active member for you; stale
//!   references are ruled out by the borrow checker
//! - **No empty state**: a variant always holds a value, from construction
//!   to drop
//! - **Structured dispatch**: `visit` routes the active value to the one
//!   matching operation of a [`Handler`] set, checked for exhaustiveness at
//!   compile time
//! - **No heap, no erasure**: storage is a plain enum payload sized to the
//!   largest member
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use sovran_variant::variant;
//!
//! variant! {
//!     /// A configuration value: one of a few scalar shapes.
//!     #[derive(Debug, Clone, PartialEq)]
//!     pub enum ConfigValue {
//!         Number(i64),
//!         Text(String),
//!         Flag(bool),
//!     }
//! }
//!
//! let mut value = ConfigValue::new(8080i64);
//!
//! // Identify and read the active member.
//! assert!(value.is_type::<i64>());
//! assert_eq!(value.peek::<i64>(), Some(&8080));
//!
//! // The wrong member type is not an error, just a miss.
//! assert_eq!(value.peek::<bool>(), None);
//!
//! // Reassign, possibly switching the member type. Assignments chain.
//! value.assign(true).assign(String::from("on"));
//! assert_eq!(value.peek::<String>().map(String::as_str), Some("on"));
//! ```
//!
//! ### Dispatching with a Handler
//!
//! A [`Handler`] supplies one operation per member type; `visit` invokes the
//! one matching the active member and returns its result. A handler missing
//! an operation for any member doesn't compile.
//!
//! ```rust
//! use sovran_variant::{variant, Handler};
//!
//! variant! {
//!     #[derive(Debug, Clone)]
//!     pub enum ConfigValue {
//!         Number(i64),
//!         Text(String),
//!         Flag(bool),
//!     }
//! }
//!
//! struct Render;
//!
//! impl<'a> Handler<&'a i64> for Render {
//!     type Output = String;
//!     fn handle(&mut self, value: &'a i64) -> String {
//!         format!("number {}", value)
//!     }
//! }
//!
//! impl<'a> Handler<&'a String> for Render {
//!     type Output = String;
//!     fn handle(&mut self, value: &'a String) -> String {
//!         format!("string {}", value)
//!     }
//! }
//!
//! impl<'a> Handler<&'a bool> for Render {
//!     type Output = String;
//!     fn handle(&mut self, value: &'a bool) -> String {
//!         format!("bool {}", value)
//!     }
//! }
//!
//! let mut value = ConfigValue::new(3i64);
//! assert_eq!(value.visit(Render), "number 3");
//!
//! value.assign(String::from("Hello World"));
//! assert_eq!(value.visit(Render), "string Hello World");
//! ```
//!
//! ### Mutating In Place
//!
//! `visit_mut` hands the handler a mutable reference to the live value:
//!
//! ```rust
//! use sovran_variant::{variant, Handler};
//!
//! variant! {
//!     pub enum Counter {
//!         Small(u8),
//!         Large(u64),
//!     }
//! }
//!
//! struct Bump;
//!
//! impl<'a> Handler<&'a mut u8> for Bump {
//!     type Output = ();
//!     fn handle(&mut self, value: &'a mut u8) {
//!         *value += 1;
//!     }
//! }
//!
//! impl<'a> Handler<&'a mut u64> for Bump {
//!     type Output = ();
//!     fn handle(&mut self, value: &'a mut u64) {
//!         *value += 1;
//!     }
//! }
//!
//! let mut counter = Counter::new(7u8);
//! counter.visit_mut(Bump);
//! assert_eq!(counter.peek::<u8>(), Some(&8));
//! ```
//!
//! ## Threading
//!
//! A variant is an ordinary value with no internal synchronization; it
//! follows Rust's usual ownership rules. Share one across threads the same
//! way you would share any other value: behind a lock you supply.

mod handler;
mod variant;

pub use handler::Handler;

// Re-export std::any for convenience
pub use std::any::{Any, TypeId};
