//! Built-in symbol tables
//!
//! Tables are process-wide constants built on first access and never
//! mutated. Each base table is produced from an exhaustive match over
//! [`SymbolType`], so every role is present by construction; variant tables
//! are derived from a base table by replacing a few entries.

use super::types::{Symbol, SymbolType};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

/// Role-keyed symbol table
pub type SymbolSet = BTreeMap<SymbolType, Symbol>;

/// Identifies one of the built-in tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinTable {
    /// ASCII-oriented table used for unrecognized languages
    Default,
    /// Default table with Cyrillic-context number sign and guillemets
    Russian,
    /// Full-width Japanese (`zenkaku`)
    Japanese,
    /// Full-width Japanese with `．`/`，` as full stop and comma
    JapaneseZenkaku2,
    /// Half-width Japanese
    JapaneseHankaku,
}

impl BuiltinTable {
    /// Every built-in table
    pub const ALL: [BuiltinTable; 5] = [
        BuiltinTable::Default,
        BuiltinTable::Russian,
        BuiltinTable::Japanese,
        BuiltinTable::JapaneseZenkaku2,
        BuiltinTable::JapaneseHankaku,
    ];

    /// Pick the table for a language/variant pair
    ///
    /// Returns the table together with the variant that should be recorded
    /// on the catalog: unrecognized Japanese variants normalize to
    /// `"zenkaku"`, other languages keep the requested variant.
    pub fn select(language: &str, variant: &str) -> (BuiltinTable, String) {
        match language {
            "ja" => match variant {
                "hankaku" => (BuiltinTable::JapaneseHankaku, variant.to_string()),
                "zenkaku2" => (BuiltinTable::JapaneseZenkaku2, variant.to_string()),
                _ => (BuiltinTable::Japanese, "zenkaku".to_string()),
            },
            "ru" => (BuiltinTable::Russian, variant.to_string()),
            _ => (BuiltinTable::Default, variant.to_string()),
        }
    }

    /// The table contents
    pub fn symbols(self) -> &'static SymbolSet {
        static DEFAULT: OnceLock<SymbolSet> = OnceLock::new();
        static RUSSIAN: OnceLock<SymbolSet> = OnceLock::new();
        static JAPANESE: OnceLock<SymbolSet> = OnceLock::new();
        static JAPANESE_ZENKAKU2: OnceLock<SymbolSet> = OnceLock::new();
        static JAPANESE_HANKAKU: OnceLock<SymbolSet> = OnceLock::new();

        match self {
            BuiltinTable::Default => DEFAULT.get_or_init(|| build(default_symbol)),
            BuiltinTable::Russian => RUSSIAN.get_or_init(russian_symbols),
            BuiltinTable::Japanese => JAPANESE.get_or_init(|| build(japanese_symbol)),
            BuiltinTable::JapaneseZenkaku2 => JAPANESE_ZENKAKU2.get_or_init(zenkaku2_symbols),
            BuiltinTable::JapaneseHankaku => {
                JAPANESE_HANKAKU.get_or_init(|| build(japanese_hankaku_symbol))
            }
        }
    }

    /// Short name used in logs and listings
    pub fn name(self) -> &'static str {
        match self {
            BuiltinTable::Default => "default",
            BuiltinTable::Russian => "russian",
            BuiltinTable::Japanese => "japanese-zenkaku",
            BuiltinTable::JapaneseZenkaku2 => "japanese-zenkaku2",
            BuiltinTable::JapaneseHankaku => "japanese-hankaku",
        }
    }
}

impl fmt::Display for BuiltinTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Symbol for `role` in the unconditional default table
pub fn default_symbol_for(role: SymbolType) -> &'static Symbol {
    // Built from an exhaustive match, so every role is present.
    &BuiltinTable::Default.symbols()[&role]
}

fn build(entry: fn(SymbolType) -> Symbol) -> SymbolSet {
    SymbolType::ALL
        .iter()
        .map(|&role| (role, entry(role)))
        .collect()
}

fn default_symbol(role: SymbolType) -> Symbol {
    use SymbolType::*;
    match role {
        Space => Symbol::new(role, ' ', ""),
        ExclamationMark => Symbol::new(role, '!', "！"),
        NumberSign => Symbol::new(role, '#', "＃"),
        DollarSign => Symbol::new(role, '$', "＄"),
        PercentSign => Symbol::new(role, '%', "％"),
        QuestionMark => Symbol::new(role, '?', "？"),
        Ampersand => Symbol::new(role, '&', "＆"),
        LeftParenthesis => Symbol::with_spacing(role, '(', "（", true, false),
        RightParenthesis => Symbol::with_spacing(role, ')', "）", false, true),
        Asterisk => Symbol::new(role, '*', "＊"),
        Comma => Symbol::with_spacing(role, ',', "，、", false, true),
        FullStop => Symbol::new(role, '.', "．。"),
        PlusSign => Symbol::new(role, '+', "＋"),
        HyphenSign => Symbol::new(role, '-', "ー"),
        Slash => Symbol::new(role, '/', "／"),
        Colon => Symbol::new(role, ':', "："),
        Semicolon => Symbol::new(role, ';', "；"),
        LessThanSign => Symbol::new(role, '<', "＜"),
        EqualSign => Symbol::new(role, '=', "＝"),
        GreaterThanSign => Symbol::new(role, '>', "＞"),
        AtMark => Symbol::new(role, '@', "＠"),
        LeftSquareBracket => Symbol::with_spacing(role, '[', "", true, false),
        RightSquareBracket => Symbol::with_spacing(role, ']', "", false, true),
        Backslash => Symbol::new(role, '\\', ""),
        CircumflexAccent => Symbol::new(role, '^', ""),
        LowLine => Symbol::new(role, '_', ""),
        LeftCurlyBracket => Symbol::with_spacing(role, '{', "｛", true, false),
        RightCurlyBracket => Symbol::with_spacing(role, '}', "｝", false, true),
        VerticalBar => Symbol::new(role, '|', "｜"),
        Tilde => Symbol::new(role, '~', "〜"),
        LeftSingleQuotationMark => Symbol::new(role, '\'', ""),
        RightSingleQuotationMark => Symbol::new(role, '\'', ""),
        LeftDoubleQuotationMark => Symbol::new(role, '"', "«"),
        RightDoubleQuotationMark => Symbol::new(role, '"', "»"),
        _ => ascii_digit(role, ""),
    }
}

fn japanese_symbol(role: SymbolType) -> Symbol {
    use SymbolType::*;
    match role {
        Space => Symbol::new(role, '\u{3000}', ""),
        ExclamationMark => Symbol::new(role, '！', "!"),
        NumberSign => Symbol::new(role, '＃', "#"),
        DollarSign => Symbol::new(role, '＄', "$"),
        PercentSign => Symbol::new(role, '％', ""),
        QuestionMark => Symbol::new(role, '？', "?"),
        Ampersand => Symbol::new(role, '＆', ""),
        LeftParenthesis => Symbol::new(role, '（', "("),
        RightParenthesis => Symbol::new(role, '）', ")"),
        // "*" stays valid: markdown emphasis uses it
        Asterisk => Symbol::new(role, '＊', ""),
        Comma => Symbol::new(role, '、', ",，"),
        FullStop => Symbol::new(role, '。', ".．"),
        PlusSign => Symbol::new(role, '＋', ""),
        HyphenSign => Symbol::new(role, 'ー', ""),
        Slash => Symbol::new(role, '／', ""),
        Colon => Symbol::new(role, '：', ""),
        Semicolon => Symbol::new(role, '；', ""),
        LessThanSign => Symbol::new(role, '＜', ""),
        EqualSign => Symbol::new(role, '＝', ""),
        GreaterThanSign => Symbol::new(role, '＞', ""),
        AtMark => Symbol::new(role, '＠', ""),
        LeftSquareBracket => Symbol::new(role, '「', ""),
        RightSquareBracket => Symbol::new(role, '」', ""),
        Backslash => Symbol::new(role, '¥', "\\"),
        CircumflexAccent => Symbol::new(role, '＾', ""),
        LowLine => Symbol::new(role, '＿', ""),
        LeftCurlyBracket => Symbol::new(role, '｛', ""),
        RightCurlyBracket => Symbol::new(role, '｝', ""),
        VerticalBar => Symbol::new(role, '｜', "|"),
        Tilde => Symbol::new(role, '〜', "~"),
        LeftSingleQuotationMark => Symbol::new(role, '‘', ""),
        RightSingleQuotationMark => Symbol::new(role, '’', ""),
        LeftDoubleQuotationMark => Symbol::new(role, '“', ""),
        RightDoubleQuotationMark => Symbol::new(role, '”', ""),
        _ => ascii_digit(role, ""),
    }
}

fn japanese_hankaku_symbol(role: SymbolType) -> Symbol {
    use SymbolType::*;
    match role {
        Space => Symbol::new(role, ' ', "\u{3000}"),
        ExclamationMark => Symbol::new(role, '!', "！"),
        NumberSign => Symbol::new(role, '#', "＃"),
        DollarSign => Symbol::new(role, '$', "＄"),
        PercentSign => Symbol::new(role, '%', "％"),
        QuestionMark => Symbol::new(role, '?', "？"),
        Ampersand => Symbol::new(role, '&', "＆"),
        Asterisk => Symbol::new(role, '*', "＊"),
        PlusSign => Symbol::new(role, '+', "＋"),
        HyphenSign => Symbol::new(role, '-', "ー"),
        Slash => Symbol::new(role, '/', "／"),
        Colon => Symbol::new(role, ':', "："),
        Semicolon => Symbol::new(role, ';', "；"),
        LessThanSign => Symbol::new(role, '<', "＜"),
        EqualSign => Symbol::new(role, '=', "＝"),
        GreaterThanSign => Symbol::new(role, '>', "＞"),
        AtMark => Symbol::new(role, '@', "＠"),
        LeftDoubleQuotationMark => Symbol::new(role, '"', ""),
        RightDoubleQuotationMark => Symbol::new(role, '"', ""),
        DigitZero => ascii_digit(role, "０"),
        DigitOne => ascii_digit(role, "１"),
        DigitTwo => ascii_digit(role, "２"),
        DigitThree => ascii_digit(role, "３"),
        DigitFour => ascii_digit(role, "４"),
        DigitFive => ascii_digit(role, "５"),
        DigitSix => ascii_digit(role, "６"),
        DigitSeven => ascii_digit(role, "７"),
        DigitEight => ascii_digit(role, "８"),
        DigitNine => ascii_digit(role, "９"),
        // Brackets, comma, full stop and the rest match the default table.
        _ => default_symbol(role),
    }
}

fn russian_symbols() -> SymbolSet {
    let mut symbols = BuiltinTable::Default.symbols().clone();
    for symbol in [
        Symbol::with_spacing(SymbolType::NumberSign, '№', "#＃", true, false),
        Symbol::with_spacing(SymbolType::LeftDoubleQuotationMark, '«', "\"", true, false),
        Symbol::with_spacing(SymbolType::RightDoubleQuotationMark, '»', "\"", false, true),
    ] {
        symbols.insert(symbol.role(), symbol);
    }
    symbols
}

fn zenkaku2_symbols() -> SymbolSet {
    let mut symbols = BuiltinTable::Japanese.symbols().clone();
    for symbol in [
        Symbol::new(SymbolType::FullStop, '．', "。."),
        Symbol::new(SymbolType::Comma, '，', "、,"),
    ] {
        symbols.insert(symbol.role(), symbol);
    }
    symbols
}

fn ascii_digit(role: SymbolType, invalid_chars: &str) -> Symbol {
    let value = match role {
        SymbolType::DigitZero => '0',
        SymbolType::DigitOne => '1',
        SymbolType::DigitTwo => '2',
        SymbolType::DigitThree => '3',
        SymbolType::DigitFour => '4',
        SymbolType::DigitFive => '5',
        SymbolType::DigitSix => '6',
        SymbolType::DigitSeven => '7',
        SymbolType::DigitEight => '8',
        SymbolType::DigitNine => '9',
        _ => unreachable!("{role} is not a digit role"),
    };
    Symbol::new(role, value, invalid_chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_is_complete() {
        for table in BuiltinTable::ALL {
            let symbols = table.symbols();
            for &role in SymbolType::ALL {
                let symbol = symbols
                    .get(&role)
                    .unwrap_or_else(|| panic!("{table} is missing {role}"));
                assert_eq!(symbol.role(), role);
            }
        }
    }

    #[test]
    fn test_select_rules() {
        assert_eq!(
            BuiltinTable::select("ja", "hankaku"),
            (BuiltinTable::JapaneseHankaku, "hankaku".to_string())
        );
        assert_eq!(
            BuiltinTable::select("ja", "zenkaku2"),
            (BuiltinTable::JapaneseZenkaku2, "zenkaku2".to_string())
        );
        assert_eq!(
            BuiltinTable::select("ja", ""),
            (BuiltinTable::Japanese, "zenkaku".to_string())
        );
        assert_eq!(
            BuiltinTable::select("ja", "kansai"),
            (BuiltinTable::Japanese, "zenkaku".to_string())
        );
        assert_eq!(
            BuiltinTable::select("ru", ""),
            (BuiltinTable::Russian, String::new())
        );
        assert_eq!(
            BuiltinTable::select("en", "us"),
            (BuiltinTable::Default, "us".to_string())
        );
    }

    #[test]
    fn test_russian_differs_from_default_in_three_entries() {
        let default = BuiltinTable::Default.symbols();
        let russian = BuiltinTable::Russian.symbols();
        let changed: Vec<SymbolType> = SymbolType::ALL
            .iter()
            .copied()
            .filter(|role| default[role] != russian[role])
            .collect();
        assert_eq!(
            changed,
            vec![
                SymbolType::NumberSign,
                SymbolType::LeftDoubleQuotationMark,
                SymbolType::RightDoubleQuotationMark
            ]
        );
        assert!(russian[&SymbolType::LeftDoubleQuotationMark].needs_before_space());
        assert!(russian[&SymbolType::RightDoubleQuotationMark].needs_after_space());
    }

    #[test]
    fn test_zenkaku2_full_stop_and_comma() {
        let symbols = BuiltinTable::JapaneseZenkaku2.symbols();
        assert_eq!(symbols[&SymbolType::FullStop].value(), '．');
        assert_eq!(symbols[&SymbolType::Comma].value(), '，');
        assert_eq!(symbols[&SymbolType::QuestionMark].value(), '？');
    }

    #[test]
    fn test_hankaku_digits_flag_full_width() {
        let symbols = BuiltinTable::JapaneseHankaku.symbols();
        assert_eq!(symbols[&SymbolType::DigitFive].value(), '5');
        assert!(symbols[&SymbolType::DigitFive].is_invalid('５'));
        assert_eq!(symbols[&SymbolType::Space].value(), ' ');
    }

    #[test]
    fn test_tables_are_built_once() {
        for table in [
            BuiltinTable::Default,
            BuiltinTable::Russian,
            BuiltinTable::Japanese,
            BuiltinTable::JapaneseZenkaku2,
            BuiltinTable::JapaneseHankaku,
        ] {
            let first = std::thread::spawn(move || table.symbols() as *const SymbolSet as usize)
                .join()
                .unwrap();
            assert!(std::ptr::eq(first as *const SymbolSet, table.symbols()), "{table}");
        }
    }

    #[test]
    fn test_default_symbol_for() {
        assert_eq!(default_symbol_for(SymbolType::FullStop).value(), '.');
        assert_eq!(default_symbol_for(SymbolType::QuestionMark).value(), '?');
        assert_eq!(default_symbol_for(SymbolType::ExclamationMark).value(), '!');
    }
}
