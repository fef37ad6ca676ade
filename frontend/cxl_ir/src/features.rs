//! Per-query language configuration.

use bitflags::bitflags;

bitflags! {
    /// Dialect switches supplied by the caller for each query.
    ///
    /// The lexer consumes `QT_KEYWORDS` and `CXX11` (they decide which
    /// identifier spellings resolve to keywords); the expression resolver
    /// consumes `OBJC` (it gates the message-send absorption rule).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LanguageFeatures: u8 {
        /// Recognize the Qt `SIGNAL`/`SLOT` macro names as pseudo-keywords.
        const QT_KEYWORDS = 1 << 0;
        /// Enable Objective-C extensions (`[receiver message` absorption).
        const OBJC = 1 << 1;
        /// Recognize C++11 keywords (`nullptr`, `constexpr`, `decltype`,
        /// `noexcept`, `static_assert`).
        const CXX11 = 1 << 2;
    }
}
