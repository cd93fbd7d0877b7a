//! Query expansion with entity alias tokens.

mod alias_expander;

pub use alias_expander::expand_with_aliases;
