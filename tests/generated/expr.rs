// Auto generated code. Edit the astgen node table instead

use super::token::Token;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary  (Binary),
    Grouping(Grouping),
    Literal (Literal),
    Unary   (Unary),
    Variable(Variable),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    pub left:     Box<Expr>,
    pub operator: Token,
    pub right:    Box<Expr>,
}

impl Binary {
    pub fn new(left: Expr, operator: Token, right: Expr) -> Expr {
        Expr::Binary(Self {
            left:     Box::new(left),
            operator,
            right:    Box::new(right),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Grouping {
    pub expression: Box<Expr>,
}

impl Grouping {
    pub fn new(expression: Expr) -> Expr {
        Expr::Grouping(Self {
            expression: Box::new(expression),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: Token,
}

impl Literal {
    pub fn new(value: Token) -> Expr {
        Expr::Literal(Self {
            value,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Unary {
    pub operator: Token,
    pub right:    Box<Expr>,
}

impl Unary {
    pub fn new(operator: Token, right: Expr) -> Expr {
        Expr::Unary(Self {
            operator,
            right:    Box::new(right),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: Token,
}

impl Variable {
    pub fn new(name: Token) -> Expr {
        Expr::Variable(Self {
            name,
        })
    }
}

pub trait Visitor<T> {
    fn visit_binary  (&mut self, x: &Binary)   -> T;
    fn visit_grouping(&mut self, x: &Grouping) -> T;
    fn visit_literal (&mut self, x: &Literal)  -> T;
    fn visit_unary   (&mut self, x: &Unary)    -> T;
    fn visit_variable(&mut self, x: &Variable) -> T;
}

impl Expr {
    pub fn accept<T, V: Visitor<T> + ?Sized>(&self, visitor: &mut V) -> T {
        match self {
            Expr::Binary(x)   => visitor.visit_binary(x),
            Expr::Grouping(x) => visitor.visit_grouping(x),
            Expr::Literal(x)  => visitor.visit_literal(x),
            Expr::Unary(x)    => visitor.visit_unary(x),
            Expr::Variable(x) => visitor.visit_variable(x),
        }
    }
}
