//! Integration tests for symbol catalog resolution and overrides

use kugiri_core::symbol::default_symbol_for;
use kugiri_core::{BuiltinTable, Symbol, SymbolCatalog, SymbolType};

const LANGUAGES: &[(&str, Option<&str>)] = &[
    ("en", None),
    ("en", Some("us")),
    ("fr", None),
    ("de", None),
    ("ru", None),
    ("ja", None),
    ("ja", Some("zenkaku")),
    ("ja", Some("zenkaku2")),
    ("ja", Some("hankaku")),
    ("ja", Some("unknown")),
    ("", None),
];

#[test]
fn test_every_language_has_terminators_and_digits() {
    let required = [
        SymbolType::FullStop,
        SymbolType::QuestionMark,
        SymbolType::ExclamationMark,
        SymbolType::DigitZero,
        SymbolType::DigitOne,
        SymbolType::DigitTwo,
        SymbolType::DigitThree,
        SymbolType::DigitFour,
        SymbolType::DigitFive,
        SymbolType::DigitSix,
        SymbolType::DigitSeven,
        SymbolType::DigitEight,
        SymbolType::DigitNine,
    ];

    for &(language, variant) in LANGUAGES {
        let catalog = SymbolCatalog::resolve(language, variant, []);
        for role in required {
            assert!(
                catalog.symbol(role).is_some(),
                "{language}/{variant:?} is missing {role}"
            );
        }
    }
}

#[test]
fn test_japanese_variants() {
    let hankaku = SymbolCatalog::resolve("ja", Some("hankaku"), []);
    assert_eq!(hankaku.variant(), "hankaku");
    assert_eq!(hankaku.value_or_default(SymbolType::Space), ' ');
    let digits: String = [
        SymbolType::DigitZero,
        SymbolType::DigitOne,
        SymbolType::DigitTwo,
        SymbolType::DigitThree,
        SymbolType::DigitFour,
        SymbolType::DigitFive,
        SymbolType::DigitSix,
        SymbolType::DigitSeven,
        SymbolType::DigitEight,
        SymbolType::DigitNine,
    ]
    .iter()
    .map(|&role| hankaku.value_or_default(role))
    .collect();
    assert_eq!(digits, "0123456789");

    let zenkaku = SymbolCatalog::resolve("ja", None, []);
    assert_eq!(zenkaku.variant(), "zenkaku");
    assert_eq!(zenkaku.value_or_default(SymbolType::Space), '\u{3000}');
    assert_eq!(zenkaku.value_or_default(SymbolType::FullStop), '。');
    assert_eq!(zenkaku.value_or_default(SymbolType::Comma), '、');

    let zenkaku2 = SymbolCatalog::resolve("ja", Some("zenkaku2"), []);
    assert_eq!(zenkaku2.value_or_default(SymbolType::FullStop), '．');
    assert_eq!(zenkaku2.value_or_default(SymbolType::Comma), '，');
}

#[test]
fn test_unknown_japanese_variant_normalizes() {
    let catalog = SymbolCatalog::resolve("ja", Some("kyushu"), []);
    assert_eq!(catalog.variant(), "zenkaku");
    assert_eq!(catalog, SymbolCatalog::resolve("ja", None, []));
}

#[test]
fn test_unknown_language_uses_default_table() {
    let catalog = SymbolCatalog::resolve("xx", Some("whatever"), []);
    assert_eq!(catalog.language(), "xx");
    assert_eq!(catalog.variant(), "whatever");
    for symbol in BuiltinTable::Default.symbols().values() {
        assert_eq!(catalog.symbol(symbol.role()), Some(symbol));
    }
}

#[test]
fn test_russian_catalog() {
    let catalog = SymbolCatalog::resolve("ru", None, []);
    assert_eq!(catalog.value_or_default(SymbolType::NumberSign), '№');
    assert_eq!(catalog.value_or_default(SymbolType::LeftDoubleQuotationMark), '«');
    assert_eq!(catalog.value_or_default(SymbolType::RightDoubleQuotationMark), '»');
    assert_eq!(
        catalog.symbol_by_value('«').map(Symbol::role),
        Some(SymbolType::LeftDoubleQuotationMark)
    );
    assert!(!catalog.contains_value('#'));
    assert!(catalog.symbol(SymbolType::NumberSign).unwrap().is_invalid('#'));
}

#[test]
fn test_overrides_applied_in_order() {
    let first = Symbol::new(SymbolType::FullStop, '．', "");
    let second = Symbol::new(SymbolType::FullStop, '｡', "");
    let catalog = SymbolCatalog::resolve("ja", None, [first, second.clone()]);
    assert_eq!(catalog.symbol(SymbolType::FullStop), Some(&second));
    assert!(!catalog.contains_value('．'));
    assert!(!catalog.contains_value('。'));
}

#[test]
fn test_value_or_default_only_returns_known_characters() {
    let partial = SymbolCatalog::from_symbols(
        "en",
        None,
        [
            Symbol::new(SymbolType::FullStop, '।', ""),
            Symbol::new(SymbolType::Comma, '،', ""),
        ],
    );
    for &role in SymbolType::ALL {
        let value = partial.value_or_default(role);
        assert!(
            partial.contains_value(value) || default_symbol_for(role).value() == value,
            "{role} resolved to unknown {value:?}"
        );
    }
}

#[test]
fn test_catalog_clones_are_independent_across_threads() {
    let base = SymbolCatalog::resolve("en", None, []);
    let handles: Vec<_> = ['。', '．']
        .into_iter()
        .map(|full_stop| {
            let mut catalog = base.clone();
            std::thread::spawn(move || {
                catalog.override_symbol(Symbol::new(SymbolType::FullStop, full_stop, ""));
                catalog.value_or_default(SymbolType::FullStop)
            })
        })
        .collect();

    let results: Vec<char> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec!['。', '．']);
    assert_eq!(base.value_or_default(SymbolType::FullStop), '.');
}
