//! Parser tests.
//!
//! - `parser`: precedence, associativity, literals, calls and lists
//! - `errors`: error kinds and offsets
//! - `grammar`: overriding productions and factories

mod grammar;
