//! Grammar rules, one `impl Parser` block per layer.
//!
//! - `stmt.rs`: statements and blocks
//! - `expr.rs`: declaration, assignment and the binary precedence chain
//! - `primary.rs`: literals, names, parentheses, function literals, calls

mod expr;
mod primary;
mod stmt;
