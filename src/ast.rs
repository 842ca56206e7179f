/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constant values that can appear directly in
/// source code. The value domain of this language keeps literals small:
/// integers and booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers all constructs that produce a value, from literals and
/// variables to operator applications, conditionals, function literals and
/// calls. Each variant models a distinct syntactic construct.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (integer or boolean).
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// Reference to a binding by name.
    Identifier {
        /// Name of the binding.
        name: String,
    },
    /// A unary operation (negation or logical NOT).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// A binary operation (arithmetic or comparison).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Conditional expression with an optional alternative.
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        then_branch: Block,
        /// Block evaluated when the condition is falsy, if present.
        else_branch: Option<Block>,
    },
    /// A function literal, e.g. `fn(x, y) { x + y }`.
    Function {
        /// The parameter names.
        parameters: Vec<String>,
        /// The body evaluated when the function is called.
        body:       Block,
    },
    /// A call expression. The callee is itself an expression, so both named
    /// functions and immediately invoked literals are covered.
    Call {
        /// The expression producing the function to call.
        callee:    Box<Self>,
        /// Arguments to the function.
        arguments: Vec<Self>,
    },
}

/// A brace-delimited sequence of statements, used by `if` branches and
/// function bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Statements inside the block.
    pub statements: Vec<Statement>,
}

/// Represents a top-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A binding introduced with `let`.
    Let {
        /// The name being bound.
        name:  String,
        /// The bound value.
        value: Expr,
    },
    /// A `return` statement. Exits the nearest enclosing function call with
    /// the given value.
    Return {
        /// The returned value.
        value: Expr,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
}

/// The root node of every parse: an ordered sequence of statements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical NOT (`!x`).
    Not,
    /// Arithmetic negation (`-x`).
    Negate,
}

/// Represents a binary operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Not => "!",
            Self::Negate => "-",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};

        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

// The Display impls below render a canonical form that parses back to the
// same tree: operator applications are fully parenthesized, blocks keep
// their braces, and `let`/`return` keep their trailing semicolons.

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "{value}"),
            Self::Identifier { name } => write!(f, "{name}"),
            Self::UnaryOp { op, expr } => write!(f, "({op}{expr})"),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::If { condition,
                       then_branch,
                       else_branch, } => {
                write!(f, "if ({condition}) {then_branch}")?;
                if let Some(alternative) = else_branch {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::Function { parameters, body } => {
                write!(f, "fn({}) {body}", parameters.join(", "))
            },
            Self::Call { callee, arguments } => {
                let arguments = arguments.iter()
                                         .map(ToString::to_string)
                                         .collect::<Vec<_>>()
                                         .join(", ");
                write!(f, "{callee}({arguments})")
            },
        }
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ ")?;
        for statement in &self.statements {
            write!(f, "{statement} ")?;
        }
        write!(f, "}}")
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value } => write!(f, "return {value};"),
            Self::Expression { expr } => write!(f, "{expr}"),
        }
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}
