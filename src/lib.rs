//! A ratatui autocomplete: type into a text field, pick from a filtered
//! list of suggestions underneath.
//!
//! ```no_run
//! use tuggest::autocomplete::Autocomplete;
//!
//! let mut fruit = Autocomplete::builder(
//!     vec!["Apple".into(), "Banana".into(), "Mango".into()],
//!     |value| println!("picked {value}"),
//! )
//! .attribute("label", "Fruit")
//! .build()
//! .unwrap();
//! fruit.focus();
//! ```

pub mod autocomplete;
pub mod events;
pub mod traits;
pub mod widgets;
