//! Symbol roles and symbol definitions

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! symbol_types {
    ($($variant:ident => $name:literal,)+) => {
        /// Semantic role a character plays in a document
        ///
        /// Names follow the configuration spelling (`FULL_STOP`, `DIGIT_ZERO`).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum SymbolType {
            $(
                #[doc = $name]
                $variant,
            )+
        }

        impl SymbolType {
            /// Every role, in declaration order
            pub const ALL: &'static [SymbolType] = &[$(SymbolType::$variant,)+];

            /// Configuration name of this role
            pub fn as_str(self) -> &'static str {
                match self {
                    $(SymbolType::$variant => $name,)+
                }
            }
        }

        impl FromStr for SymbolType {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(SymbolType::$variant),)+
                    _ => Err(Error::UnknownSymbolType { name: s.to_string() }),
                }
            }
        }
    };
}

symbol_types! {
    Space => "SPACE",
    ExclamationMark => "EXCLAMATION_MARK",
    NumberSign => "NUMBER_SIGN",
    DollarSign => "DOLLAR_SIGN",
    PercentSign => "PERCENT_SIGN",
    QuestionMark => "QUESTION_MARK",
    Ampersand => "AMPERSAND",
    LeftParenthesis => "LEFT_PARENTHESIS",
    RightParenthesis => "RIGHT_PARENTHESIS",
    Asterisk => "ASTERISK",
    Comma => "COMMA",
    FullStop => "FULL_STOP",
    PlusSign => "PLUS_SIGN",
    HyphenSign => "HYPHEN_SIGN",
    Slash => "SLASH",
    Colon => "COLON",
    Semicolon => "SEMICOLON",
    LessThanSign => "LESS_THAN_SIGN",
    EqualSign => "EQUAL_SIGN",
    GreaterThanSign => "GREATER_THAN_SIGN",
    AtMark => "AT_MARK",
    LeftSquareBracket => "LEFT_SQUARE_BRACKET",
    RightSquareBracket => "RIGHT_SQUARE_BRACKET",
    Backslash => "BACKSLASH",
    CircumflexAccent => "CIRCUMFLEX_ACCENT",
    LowLine => "LOW_LINE",
    LeftCurlyBracket => "LEFT_CURLY_BRACKET",
    RightCurlyBracket => "RIGHT_CURLY_BRACKET",
    VerticalBar => "VERTICAL_BAR",
    Tilde => "TILDE",
    LeftSingleQuotationMark => "LEFT_SINGLE_QUOTATION_MARK",
    RightSingleQuotationMark => "RIGHT_SINGLE_QUOTATION_MARK",
    LeftDoubleQuotationMark => "LEFT_DOUBLE_QUOTATION_MARK",
    RightDoubleQuotationMark => "RIGHT_DOUBLE_QUOTATION_MARK",
    DigitZero => "DIGIT_ZERO",
    DigitOne => "DIGIT_ONE",
    DigitTwo => "DIGIT_TWO",
    DigitThree => "DIGIT_THREE",
    DigitFour => "DIGIT_FOUR",
    DigitFive => "DIGIT_FIVE",
    DigitSix => "DIGIT_SIX",
    DigitSeven => "DIGIT_SEVEN",
    DigitEight => "DIGIT_EIGHT",
    DigitNine => "DIGIT_NINE",
}

impl SymbolType {
    /// Roles that end a sentence
    pub const TERMINATORS: [SymbolType; 3] = [
        SymbolType::FullStop,
        SymbolType::QuestionMark,
        SymbolType::ExclamationMark,
    ];

    /// Opening/closing role pairs used for enclosure tracking
    pub const PAIRS: [(SymbolType, SymbolType); 5] = [
        (SymbolType::LeftParenthesis, SymbolType::RightParenthesis),
        (SymbolType::LeftSquareBracket, SymbolType::RightSquareBracket),
        (SymbolType::LeftCurlyBracket, SymbolType::RightCurlyBracket),
        (
            SymbolType::LeftSingleQuotationMark,
            SymbolType::RightSingleQuotationMark,
        ),
        (
            SymbolType::LeftDoubleQuotationMark,
            SymbolType::RightDoubleQuotationMark,
        ),
    ];

    /// Whether this role ends a sentence
    pub fn is_terminator(self) -> bool {
        Self::TERMINATORS.contains(&self)
    }
}

impl fmt::Display for SymbolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A character bound to a semantic role
///
/// `invalid_chars` lists characters that should not appear in this role
/// (e.g. `．` where `。` is expected); rule checkers use them for style
/// consistency. The spacing flags say whether a space is expected before or
/// after the symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    #[serde(rename = "name")]
    role: SymbolType,
    value: char,
    #[serde(default, rename = "invalid-chars", with = "char_list")]
    invalid_chars: Vec<char>,
    #[serde(default, rename = "before-space")]
    needs_before_space: bool,
    #[serde(default, rename = "after-space")]
    needs_after_space: bool,
}

impl Symbol {
    /// Create a symbol with no spacing requirements
    pub fn new(role: SymbolType, value: char, invalid_chars: &str) -> Self {
        Self::with_spacing(role, value, invalid_chars, false, false)
    }

    /// Create a symbol with explicit spacing requirements
    pub fn with_spacing(
        role: SymbolType,
        value: char,
        invalid_chars: &str,
        needs_before_space: bool,
        needs_after_space: bool,
    ) -> Self {
        Self {
            role,
            value,
            invalid_chars: invalid_chars.chars().collect(),
            needs_before_space,
            needs_after_space,
        }
    }

    /// Semantic role
    pub fn role(&self) -> SymbolType {
        self.role
    }

    /// Primary character
    pub fn value(&self) -> char {
        self.value
    }

    /// Characters that must not be used in this role
    pub fn invalid_chars(&self) -> &[char] {
        &self.invalid_chars
    }

    /// Whether `ch` is listed as invalid for this role
    pub fn is_invalid(&self, ch: char) -> bool {
        self.invalid_chars.contains(&ch)
    }

    /// Whether a space is expected before the symbol
    pub fn needs_before_space(&self) -> bool {
        self.needs_before_space
    }

    /// Whether a space is expected after the symbol
    pub fn needs_after_space(&self) -> bool {
        self.needs_after_space
    }
}

/// Invalid characters are written as one string in configuration files
mod char_list {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(chars: &[char], serializer: S) -> Result<S::Ok, S::Error> {
        let s: String = chars.iter().collect();
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<char>, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(s.chars().collect())
    }
}
