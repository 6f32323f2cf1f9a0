//! A type that can represent symbols in a context-free grammar. Symbols are
//! distinguished by their IDs.

mod repr;
pub mod set;
pub mod source;

pub use self::repr::Symbol;
use self::repr::SymbolRepr;
pub use self::set::SymbolBitSet;
pub use self::source::SymbolSource;

impl Symbol {
    /// Cast the symbol's ID to `usize`.
    #[inline]
    pub fn usize(self) -> usize {
        self.into()
    }
}

impl From<usize> for Symbol {
    #[inline]
    fn from(id: usize) -> Self {
        Symbol::from(id as SymbolRepr)
    }
}

impl From<Symbol> for usize {
    #[inline]
    fn from(sym: Symbol) -> Self {
        let id: SymbolRepr = sym.into();
        id as usize
    }
}
