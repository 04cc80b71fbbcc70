//! Per-configuration symbol catalog

use super::tables::{default_symbol_for, BuiltinTable, SymbolSet};
use super::types::{Symbol, SymbolType};
use std::collections::HashMap;
use std::fmt;

/// Resolved set of symbols for one language/variant configuration
///
/// Symbols are keyed by role and, derived from that, by character value.
/// A catalog is an owned copy seeded from a built-in table; cloning it gives
/// an independent catalog that can diverge through further overrides.
#[derive(Clone)]
pub struct SymbolCatalog {
    language: String,
    variant: String,
    symbols: SymbolSet,
    by_value: HashMap<char, SymbolType>,
}

impl SymbolCatalog {
    /// Resolve the built-in table for `language`/`variant` and apply
    /// `overrides` in order
    ///
    /// Never fails. Unknown languages get the default table; unknown
    /// Japanese variants normalize to `"zenkaku"`.
    pub fn resolve<I>(language: &str, variant: Option<&str>, overrides: I) -> Self
    where
        I: IntoIterator<Item = Symbol>,
    {
        let (table, variant) = BuiltinTable::select(language, variant.unwrap_or(""));
        tracing::info!(
            language,
            variant = variant.as_str(),
            table = table.name(),
            "resolved symbol table"
        );

        let mut catalog = Self::empty(language, variant);
        for symbol in table.symbols().values() {
            catalog.override_symbol(symbol.clone());
        }
        for symbol in overrides {
            tracing::trace!(role = %symbol.role(), value = %symbol.value(), "custom symbol");
            catalog.override_symbol(symbol);
        }
        catalog
    }

    /// Build a catalog from `symbols` alone, with no built-in base
    ///
    /// Roles left out stay unconfigured; [`value_or_default`](Self::value_or_default)
    /// falls back to the default table for them.
    pub fn from_symbols<I>(language: &str, variant: Option<&str>, symbols: I) -> Self
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut catalog = Self::empty(language, variant.unwrap_or("").to_string());
        for symbol in symbols {
            catalog.override_symbol(symbol);
        }
        catalog
    }

    fn empty(language: &str, variant: String) -> Self {
        Self {
            language: language.to_string(),
            variant,
            symbols: SymbolSet::new(),
            by_value: HashMap::new(),
        }
    }

    /// Insert or replace the symbol for its role
    ///
    /// The new value always maps to this symbol. When the role previously
    /// used another character, that character stops resolving to this role;
    /// if another role still uses it, lookups by that character go there.
    pub fn override_symbol(&mut self, symbol: Symbol) {
        let role = symbol.role();
        let value = symbol.value();

        if let Some(previous) = self.symbols.insert(role, symbol) {
            let old_value = previous.value();
            if old_value != value && self.by_value.get(&old_value) == Some(&role) {
                self.by_value.remove(&old_value);
                if let Some(other) = self
                    .symbols
                    .values()
                    .rev()
                    .find(|s| s.value() == old_value)
                {
                    self.by_value.insert(old_value, other.role());
                }
            }
        }

        self.by_value.insert(value, role);
    }

    /// Symbol configured for `role`
    pub fn symbol(&self, role: SymbolType) -> Option<&Symbol> {
        self.symbols.get(&role)
    }

    /// Symbol whose primary value is `value`
    pub fn symbol_by_value(&self, value: char) -> Option<&Symbol> {
        self.by_value
            .get(&value)
            .and_then(|role| self.symbols.get(role))
    }

    /// Whether any configured symbol uses `value`
    pub fn contains_value(&self, value: char) -> bool {
        self.by_value.contains_key(&value)
    }

    /// Character for `role`, falling back to the default table when the
    /// role is not configured
    pub fn value_or_default(&self, role: SymbolType) -> char {
        self.symbol(role)
            .unwrap_or_else(|| default_symbol_for(role))
            .value()
    }

    /// First configured symbol that lists `ch` as invalid
    pub fn invalid_symbol_for(&self, ch: char) -> Option<&Symbol> {
        self.symbols.values().find(|s| s.is_invalid(ch))
    }

    /// Configured roles, in declaration order
    pub fn roles(&self) -> impl Iterator<Item = SymbolType> + '_ {
        self.symbols.keys().copied()
    }

    /// Configured symbols, in role declaration order
    pub fn symbols(&self) -> impl Iterator<Item = &Symbol> + '_ {
        self.symbols.values()
    }

    /// Number of configured roles
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether no role is configured
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Language code the catalog was resolved for
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Resolved variant (`""` for the default variant)
    pub fn variant(&self) -> &str {
        &self.variant
    }
}

impl Default for SymbolCatalog {
    fn default() -> Self {
        Self::resolve("en", None, [])
    }
}

// The value index is derived from the role map and not compared.
impl PartialEq for SymbolCatalog {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language
            && self.variant == other.variant
            && self.symbols == other.symbols
    }
}

impl Eq for SymbolCatalog {}

impl fmt::Debug for SymbolCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymbolCatalog")
            .field("language", &self.language)
            .field("variant", &self.variant)
            .field("symbols", &self.symbols.len())
            .finish()
    }
}
