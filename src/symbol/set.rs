//! Membership sets over symbols, in the form of bit vectors.

use std::iter;

use bit_vec::BitVec;

use crate::symbol::Symbol;

/// A set of symbols in the form of a bit vector.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SymbolBitSet {
    bit_vec: BitVec,
}

/// An iterator over a symbol set.
pub struct Iter<'a> {
    iter: iter::Enumerate<bit_vec::Iter<'a>>,
}

impl SymbolBitSet {
    /// Constructs a `SymbolBitSet` with all `num_syms` entries set to `elem`.
    pub fn new(num_syms: usize, elem: bool) -> Self {
        SymbolBitSet {
            bit_vec: BitVec::from_elem(num_syms, elem),
        }
    }

    /// Sets the entry for a symbol.
    pub fn set(&mut self, sym: Symbol, value: bool) {
        self.bit_vec.set(sym.into(), value);
    }

    /// Checks whether a given symbol is in this set.
    ///
    /// Symbols outside the set's symbol space are reported as absent.
    pub fn has_sym(&self, sym: Symbol) -> bool {
        self.bit_vec.get(sym.usize()).unwrap_or(false)
    }

    /// Returns the size of the symbol space this set covers.
    pub fn len(&self) -> usize {
        self.bit_vec.len()
    }

    /// Checks whether the symbol space is empty.
    pub fn is_empty(&self) -> bool {
        self.bit_vec.is_empty()
    }

    /// Iterates over symbols in the set.
    pub fn iter(&self) -> Iter {
        Iter {
            iter: self.bit_vec.iter().enumerate(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Symbol;
    fn next(&mut self) -> Option<Self::Item> {
        for (id, is_present) in &mut self.iter {
            if is_present {
                return Some(Symbol::from(id));
            }
        }
        None
    }
}
