//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into an Abstract Syntax Tree. One function per
//! grammar nonterminal:
//!
//! - Statement parsing (local declarations, if statements, assignments,
//!   call statements)
//! - Expression parsing (single binary application, right-recursive
//!   prefix operators, function calls, literals)
//!
//! Expressions admit at most one binary-operator application; there is
//! no operator chaining and no precedence climbing.

pub mod expr;
pub mod parser;
pub mod stmt;
