// Auto generated code. Edit the astgen node table instead

use super::expr::Expr;
use super::token::Token;

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block     (Block),
    Expression(Expression),
    If        (If),
    Print     (Print),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl Block {
    pub fn new(statements: Vec<Stmt>) -> Stmt {
        Stmt::Block(Self {
            statements,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub expression: Box<Expr>,
}

impl Expression {
    pub fn new(expression: Expr) -> Stmt {
        Stmt::Expression(Self {
            expression: Box::new(expression),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct If {
    pub condition:   Box<Expr>,
    pub then_branch: Box<Stmt>,
    pub else_branch: Option<Box<Stmt>>,
}

impl If {
    pub fn new(condition: Expr, then_branch: Stmt, else_branch: Option<Box<Stmt>>) -> Stmt {
        Stmt::If(Self {
            condition:   Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Print {
    pub expression: Box<Expr>,
}

impl Print {
    pub fn new(expression: Expr) -> Stmt {
        Stmt::Print(Self {
            expression: Box::new(expression),
        })
    }
}

pub trait Visitor<T> {
    fn visit_block     (&mut self, x: &Block)      -> T;
    fn visit_expression(&mut self, x: &Expression) -> T;
    fn visit_if        (&mut self, x: &If)         -> T;
    fn visit_print     (&mut self, x: &Print)      -> T;
}

impl Stmt {
    pub fn accept<T, V: Visitor<T> + ?Sized>(&self, visitor: &mut V) -> T {
        match self {
            Stmt::Block(x)      => visitor.visit_block(x),
            Stmt::Expression(x) => visitor.visit_expression(x),
            Stmt::If(x)         => visitor.visit_if(x),
            Stmt::Print(x)      => visitor.visit_print(x),
        }
    }
}
