//! Syntax tree consumed by the evaluator
//!
//! The tree is a generic tagged structure rather than a typed AST: every
//! node has a tag naming its grammatical role, literal text, and an ordered
//! list of children. Tags are matched by category substring, because an
//! operand node carries the shared `expr` category alongside its specific
//! rule name (`expr|number|regex`, `expr|>`).
//!
//! ```text
//! "+ 1 (* 2 3)"
//!
//! >
//!   regex
//!   operator|char '+'
//!   expr|number|regex '1'
//!   expr|>
//!     char '('
//!     operator|char '*'
//!     expr|number|regex '2'
//!     expr|number|regex '3'
//!     char ')'
//!   regex
//! ```

pub mod lexer;
pub mod parser;

pub use lexer::Token;
pub use parser::{parse, Parser, DEFAULT_MAX_DEPTH};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tags emitted by the parser.
pub mod tag {
    /// Root of a bare top-level application (`+ 1 2`)
    pub const ROOT: &str = ">";
    /// Start/end-of-input anchor
    pub const ANCHOR: &str = "regex";
    /// Operator symbol
    pub const OPERATOR: &str = "operator|char";
    /// Numeric literal operand
    pub const NUMBER: &str = "expr|number|regex";
    /// Nested application operand (`(* 2 3)`)
    pub const EXPR: &str = "expr|>";
    /// Parenthesis delimiter
    pub const DELIMITER: &str = "char";

    /// Category carried by every numeric leaf
    pub const NUMBER_CATEGORY: &str = "number";
    /// Category carried by every operand node
    pub const OPERAND_CATEGORY: &str = "expr";
}

/// A node of the syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxNode {
    /// Grammatical role, e.g. `expr|number|regex`
    pub tag: String,

    /// Literal text; empty on branches and anchors
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub contents: String,

    /// Ordered children; empty on leaves
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Create a leaf node.
    pub fn leaf(tag: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            contents: contents.into(),
            children: Vec::new(),
        }
    }

    /// Create an interior node.
    pub fn branch(tag: impl Into<String>, children: Vec<SyntaxNode>) -> Self {
        Self {
            tag: tag.into(),
            contents: String::new(),
            children,
        }
    }

    /// A numeric literal leaf. The text is not validated here.
    pub fn number(text: impl Into<String>) -> Self {
        Self::leaf(tag::NUMBER, text)
    }

    /// An operator symbol leaf. The symbol is not validated here.
    pub fn operator(symbol: impl Into<String>) -> Self {
        Self::leaf(tag::OPERATOR, symbol)
    }

    /// A parenthesized application `(op operand...)`, shaped as the parser
    /// emits nested expressions.
    pub fn application(symbol: impl Into<String>, operands: Vec<SyntaxNode>) -> Self {
        let mut children = Vec::with_capacity(operands.len() + 3);
        children.push(Self::leaf(tag::DELIMITER, "("));
        children.push(Self::operator(symbol));
        children.extend(operands);
        children.push(Self::leaf(tag::DELIMITER, ")"));
        Self::branch(tag::EXPR, children)
    }

    /// A bare top-level application `op operand...`, anchored at both ends.
    pub fn root(symbol: impl Into<String>, operands: Vec<SyntaxNode>) -> Self {
        let mut children = Vec::with_capacity(operands.len() + 3);
        children.push(Self::leaf(tag::ANCHOR, ""));
        children.push(Self::operator(symbol));
        children.extend(operands);
        children.push(Self::leaf(tag::ANCHOR, ""));
        Self::branch(tag::ROOT, children)
    }

    /// Whether the tag contains `category`.
    pub fn has_category(&self, category: &str) -> bool {
        self.tag.contains(category)
    }

    /// Whether this node is a numeric literal leaf.
    pub fn is_number(&self) -> bool {
        self.has_category(tag::NUMBER_CATEGORY)
    }

    /// Whether this node is an operand (as opposed to a delimiter or anchor).
    pub fn is_operand(&self) -> bool {
        self.has_category(tag::OPERAND_CATEGORY)
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The child at `index`, if present.
    pub fn child(&self, index: usize) -> Option<&SyntaxNode> {
        self.children.get(index)
    }

    /// Nesting depth of the tree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(SyntaxNode::depth).max().unwrap_or(0)
    }
}

impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(f, self, 0)
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &SyntaxNode, level: usize) -> fmt::Result {
    write!(f, "{:indent$}{}", "", node.tag, indent = level * 2)?;
    if !node.contents.is_empty() {
        write!(f, " '{}'", node.contents)?;
    }
    writeln!(f)?;
    for child in &node.children {
        write_node(f, child, level + 1)?;
    }
    Ok(())
}
