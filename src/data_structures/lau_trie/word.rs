//! Symbol sequences accepted by the Lau Trie.
//!
//! A word is anything that can be read as a finite sequence of atomic symbols.
//! Strings are read as `char`s, byte strings as `u8`s. No grapheme clustering
//! or normalization is applied.

use std::fmt::Debug;
use std::hash::Hash;
use std::iter::Copied;
use std::slice;
use std::str::Chars;

/// An edge label of the trie.
pub trait Symbol: Copy + Eq + Hash + Debug {}

impl<T: Copy + Eq + Hash + Debug> Symbol for T {}

/// A value that can be walked as a sequence of symbols.
pub trait Word {
    /// The alphabet element of this word.
    type Symbol: Symbol;

    /// Iterator over the symbols of the word, in order.
    type Symbols<'a>: Iterator<Item = Self::Symbol>
    where
        Self: 'a;

    /// Returns the symbols of the word, first to last.
    fn symbols(&self) -> Self::Symbols<'_>;
}

impl Word for str {
    type Symbol = char;
    type Symbols<'a> = Chars<'a>;

    fn symbols(&self) -> Self::Symbols<'_> {
        self.chars()
    }
}

impl Word for String {
    type Symbol = char;
    type Symbols<'a> = Chars<'a>;

    fn symbols(&self) -> Self::Symbols<'_> {
        self.chars()
    }
}

impl Word for [char] {
    type Symbol = char;
    type Symbols<'a> = Copied<slice::Iter<'a, char>>;

    fn symbols(&self) -> Self::Symbols<'_> {
        self.iter().copied()
    }
}

impl Word for Vec<char> {
    type Symbol = char;
    type Symbols<'a> = Copied<slice::Iter<'a, char>>;

    fn symbols(&self) -> Self::Symbols<'_> {
        self.iter().copied()
    }
}

impl Word for [u8] {
    type Symbol = u8;
    type Symbols<'a> = Copied<slice::Iter<'a, u8>>;

    fn symbols(&self) -> Self::Symbols<'_> {
        self.iter().copied()
    }
}

impl Word for Vec<u8> {
    type Symbol = u8;
    type Symbols<'a> = Copied<slice::Iter<'a, u8>>;

    fn symbols(&self) -> Self::Symbols<'_> {
        self.iter().copied()
    }
}

impl<const N: usize> Word for [u8; N] {
    type Symbol = u8;
    type Symbols<'a> = Copied<slice::Iter<'a, u8>>;

    fn symbols(&self) -> Self::Symbols<'_> {
        self.iter().copied()
    }
}
