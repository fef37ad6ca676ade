//! Keyword resolution.
//!
//! Identifiers pass through a length-bucketed lookup: the identifier's
//! length is a first-pass filter (keywords range from 2 to 16 bytes), then
//! the text is matched against the keywords of that length only.
//!
//! Two groups are feature-gated:
//! - `SIGNAL`/`SLOT` resolve only under [`LanguageFeatures::QT_KEYWORDS`];
//!   otherwise they stay ordinary identifiers (macro names).
//! - The C++11 keywords (`nullptr`, `constexpr`, `decltype`, `noexcept`,
//!   `static_assert`) resolve only under [`LanguageFeatures::CXX11`].

use cxl_ir::{LanguageFeatures, TokenKind};

/// Look up a keyword by text, honoring the feature gates.
///
/// Returns `None` for regular identifiers.
pub(crate) fn lookup(text: &str, features: LanguageFeatures) -> Option<TokenKind> {
    let qt = features.contains(LanguageFeatures::QT_KEYWORDS);
    let cxx11 = features.contains(LanguageFeatures::CXX11);

    match text.len() {
        2 => match text {
            "do" => Some(TokenKind::Do),
            "if" => Some(TokenKind::If),
            _ => None,
        },
        3 => match text {
            "for" => Some(TokenKind::For),
            "int" => Some(TokenKind::Int),
            "new" => Some(TokenKind::New),
            "try" => Some(TokenKind::Try),
            _ => None,
        },
        4 => match text {
            "auto" => Some(TokenKind::Auto),
            "bool" => Some(TokenKind::Bool),
            "case" => Some(TokenKind::Case),
            "char" => Some(TokenKind::Char),
            "else" => Some(TokenKind::Else),
            "enum" => Some(TokenKind::Enum),
            "goto" => Some(TokenKind::Goto),
            "long" => Some(TokenKind::Long),
            "this" => Some(TokenKind::This),
            "true" => Some(TokenKind::True),
            "void" => Some(TokenKind::Void),
            "SLOT" if qt => Some(TokenKind::Slot),
            _ => None,
        },
        5 => match text {
            "break" => Some(TokenKind::Break),
            "catch" => Some(TokenKind::Catch),
            "class" => Some(TokenKind::Class),
            "const" => Some(TokenKind::Const),
            "false" => Some(TokenKind::False),
            "float" => Some(TokenKind::Float),
            "short" => Some(TokenKind::Short),
            "throw" => Some(TokenKind::Throw),
            "union" => Some(TokenKind::Union),
            "using" => Some(TokenKind::Using),
            "while" => Some(TokenKind::While),
            _ => None,
        },
        6 => match text {
            "delete" => Some(TokenKind::Delete),
            "double" => Some(TokenKind::Double),
            "extern" => Some(TokenKind::Extern),
            "friend" => Some(TokenKind::Friend),
            "inline" => Some(TokenKind::Inline),
            "public" => Some(TokenKind::Public),
            "return" => Some(TokenKind::Return),
            "signed" => Some(TokenKind::Signed),
            "sizeof" => Some(TokenKind::Sizeof),
            "static" => Some(TokenKind::Static),
            "struct" => Some(TokenKind::Struct),
            "switch" => Some(TokenKind::Switch),
            "typeid" => Some(TokenKind::Typeid),
            "SIGNAL" if qt => Some(TokenKind::Signal),
            _ => None,
        },
        7 => match text {
            "default" => Some(TokenKind::Default),
            "mutable" => Some(TokenKind::Mutable),
            "private" => Some(TokenKind::Private),
            "typedef" => Some(TokenKind::Typedef),
            "virtual" => Some(TokenKind::Virtual),
            "nullptr" if cxx11 => Some(TokenKind::Nullptr),
            _ => None,
        },
        8 => match text {
            "continue" => Some(TokenKind::Continue),
            "explicit" => Some(TokenKind::Explicit),
            "operator" => Some(TokenKind::Operator),
            "register" => Some(TokenKind::Register),
            "template" => Some(TokenKind::Template),
            "typename" => Some(TokenKind::Typename),
            "unsigned" => Some(TokenKind::Unsigned),
            "volatile" => Some(TokenKind::Volatile),
            "decltype" if cxx11 => Some(TokenKind::Decltype),
            "noexcept" if cxx11 => Some(TokenKind::Noexcept),
            _ => None,
        },
        9 => match text {
            "namespace" => Some(TokenKind::Namespace),
            "protected" => Some(TokenKind::Protected),
            "constexpr" if cxx11 => Some(TokenKind::Constexpr),
            _ => None,
        },
        10 => match text {
            "const_cast" => Some(TokenKind::ConstCast),
            _ => None,
        },
        11 => match text {
            "static_cast" => Some(TokenKind::StaticCast),
            _ => None,
        },
        12 => match text {
            "dynamic_cast" => Some(TokenKind::DynamicCast),
            _ => None,
        },
        13 => match text {
            "static_assert" if cxx11 => Some(TokenKind::StaticAssert),
            _ => None,
        },
        16 => match text {
            "reinterpret_cast" => Some(TokenKind::ReinterpretCast),
            _ => None,
        },
        _ => None,
    }
}
