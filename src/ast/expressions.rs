use std::fmt::Display;

use super::ast::Term;

/// `exp := binary` - the expression entry point wraps the single binary
/// production.
#[derive(Debug, Clone, PartialEq)]
pub struct Exp {
    pub binary: Binary,
}

impl Display for Exp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(exp {})", self.binary)
    }
}

/// At most one binary-operator application: a left operand and an optional
/// operator/right pair. No chaining, no precedence climbing.
#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    pub left: Unary,
    pub rest: Option<(Term, Unary)>,
}

impl Display for Binary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.rest {
            Some((operator, right)) => {
                write!(f, "(binary {} {} {})", self.left, operator, right)
            }
            None => write!(f, "(binary {})", self.left),
        }
    }
}

/// Prefix operators are right-recursive, so `not not x` nests. A unary
/// otherwise holds either a call expression or a primary.
#[derive(Debug, Clone, PartialEq)]
pub enum Unary {
    Prefix { operator: Term, right: Box<Unary> },
    Call(FunctionCall),
    Primary(Primary),
}

impl Display for Unary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unary::Prefix { operator, right } => write!(f, "(unary {} {})", operator, right),
            Unary::Call(call) => write!(f, "(unary {})", call),
            Unary::Primary(primary) => write!(f, "(unary {})", primary),
        }
    }
}

/// Call syntax applied to whatever the callee primary produced; the
/// callee's callability is not validated here.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub callee: Primary,
    pub args: Args,
}

impl Display for FunctionCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(functioncall {} {})", self.callee, self.args)
    }
}

/// The closed set of primary productions. Literal variants wrap the
/// terminal carrying their token; a grouping owns its inner expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Primary {
    Nil(Term),
    False(Term),
    True(Term),
    Number(Term),
    Str(Term),
    Grouping(Box<Exp>),
    Var(Term),
}

impl Display for Primary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Primary::Nil(term)
            | Primary::False(term)
            | Primary::True(term)
            | Primary::Number(term)
            | Primary::Str(term)
            | Primary::Var(term) => write!(f, "(primary {})", term),
            Primary::Grouping(exp) => write!(f, "(primary {})", exp),
        }
    }
}

/// Argument list of a call: `(` with an optional single expression `)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub value: Option<Box<Exp>>,
}

impl Display for Args {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "(args {})", value),
            None => write!(f, "(args)"),
        }
    }
}
