//! Symbol catalog: which characters play which punctuation role
//!
//! A [`SymbolCatalog`] is resolved from a language code, an optional variant
//! and a list of custom [`Symbol`] overrides:
//!
//! | language | variant      | base table                          |
//! |----------|--------------|-------------------------------------|
//! | `ja`     | `hankaku`    | half-width Japanese                 |
//! | `ja`     | `zenkaku2`   | full-width with `．` and `，`         |
//! | `ja`     | anything else| full-width (`zenkaku`, recorded)    |
//! | `ru`     | any          | default with `№`, `«`, `»`          |
//! | other    | any          | default (ASCII-oriented)            |

pub mod catalog;
pub mod tables;
pub mod types;

pub use catalog::SymbolCatalog;
pub use tables::{default_symbol_for, BuiltinTable, SymbolSet};
pub use types::{Symbol, SymbolType};
