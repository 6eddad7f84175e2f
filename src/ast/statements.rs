use std::{fmt::Display, slice::Iter};

use crate::Span;

use super::{ast::Term, expressions::{Exp, FunctionCall}};

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub body: Vec<Stmt>,
    pub span: Span,
}

impl Block {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(block")?;
        for stmt in self.iter() {
            write!(f, " {}", stmt)?;
        }
        write!(f, ")")
    }
}

/// The closed set of statement productions. Exactly one variant per
/// grammar rule reachable from `stat`.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Var(VarStat),
    If(IfStat),
    Assign(AssignStat),
    FunCall(FunCallStat),
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Var(stat) => write!(f, "{}", stat),
            Stmt::If(stat) => write!(f, "{}", stat),
            Stmt::Assign(stat) => write!(f, "{}", stat),
            Stmt::FunCall(stat) => write!(f, "{}", stat),
        }
    }
}

/// `local` declaration with an optional initializer.
#[derive(Debug, Clone, PartialEq)]
pub struct VarStat {
    pub name: Term,
    pub value: Option<Exp>,
    pub span: Span,
}

impl Display for VarStat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.value {
            Some(value) => write!(f, "(varstat {} {})", self.name, value),
            None => write!(f, "(varstat {})", self.name),
        }
    }
}

/// `if <exp> then <block> (else <block>)? end;`
#[derive(Debug, Clone, PartialEq)]
pub struct IfStat {
    pub condition: Exp,
    pub then_block: Block,
    pub else_block: Option<Block>,
    pub span: Span,
}

impl Display for IfStat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.else_block {
            Some(else_block) => write!(
                f,
                "(ifstat {} {} {})",
                self.condition, self.then_block, else_block
            ),
            None => write!(f, "(ifstat {} {})", self.condition, self.then_block),
        }
    }
}

/// Assignment to an already-declared variable. Both the target and the
/// assigned value are kept on the node.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignStat {
    pub target: Term,
    pub value: Exp,
    pub span: Span,
}

impl Display for AssignStat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(assignstat {} {})", self.target, self.value)
    }
}

/// A function call in statement position.
#[derive(Debug, Clone, PartialEq)]
pub struct FunCallStat {
    pub call: FunctionCall,
    pub span: Span,
}

impl Display for FunCallStat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(funcallstat {})", self.call)
    }
}
