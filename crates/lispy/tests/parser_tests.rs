use lispy::syntax::tag;
use lispy::*;
use pretty_assertions::assert_eq;

// ═══════════════════════════════════════════════════════════════════════
// Tree Shape
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_parse_bare_tree_shape() {
    let tree = parse("+ 1 (* 2 3)").unwrap();
    assert_eq!(tree.tag, tag::ROOT);
    let tags: Vec<&str> = tree.children.iter().map(|c| c.tag.as_str()).collect();
    assert_eq!(
        tags,
        vec![tag::ANCHOR, tag::OPERATOR, tag::NUMBER, tag::EXPR, tag::ANCHOR]
    );
    assert_eq!(tree.children[1].contents, "+");
    assert_eq!(tree.children[2].contents, "1");

    let nested = &tree.children[3];
    let tags: Vec<&str> = nested.children.iter().map(|c| c.tag.as_str()).collect();
    assert_eq!(
        tags,
        vec![
            tag::DELIMITER,
            tag::OPERATOR,
            tag::NUMBER,
            tag::NUMBER,
            tag::DELIMITER
        ]
    );
}

#[test]
fn test_parse_matches_builders() {
    assert_eq!(
        parse("(- 10 1 2)").unwrap(),
        SyntaxNode::application(
            "-",
            vec![
                SyntaxNode::number("10"),
                SyntaxNode::number("1"),
                SyntaxNode::number("2"),
            ]
        )
    );
}

#[test]
fn test_parse_whitespace() {
    assert_eq!(parse("\t(+   1\t2 )  ").unwrap(), parse("(+ 1 2)").unwrap());
}

#[test]
fn test_tree_json() {
    let tree = parse("(+ 1 2)").unwrap();
    let json = serde_json::to_string(&tree).unwrap();
    let back: SyntaxNode = serde_json::from_str(&json).unwrap();
    assert_eq!(back, tree);
    assert!(json.contains(r#""tag":"expr|number|regex","contents":"1""#));
}

// ═══════════════════════════════════════════════════════════════════════
// Parse then Evaluate
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_eval_str_results() {
    assert_eq!(eval_str("(+ 1 (* 2 3))"), Ok(Value::Number(7)));
    assert_eq!(eval_str("+ 1 (* 2 3)"), Ok(Value::Number(7)));
    assert_eq!(eval_str("(- 10 1 2)"), Ok(Value::Number(7)));
    assert_eq!(eval_str("(+ 5)"), Ok(Value::Number(5)));
    assert_eq!(eval_str("(- -5 -5)"), Ok(Value::Number(0)));
    assert_eq!(
        eval_str("(/ 10 (- 3 3))"),
        Ok(Value::Error(ErrorKind::DivideByZero))
    );
    assert_eq!(
        eval_str("+ 1 99999999999999999999"),
        Ok(Value::Error(ErrorKind::BadNumber))
    );
}

#[test]
fn test_eval_minus_glued_to_first_operand() {
    assert_eq!(eval_str("-5 1"), Ok(Value::Number(4)));
    assert_eq!(eval_str("(-5 1)"), Ok(Value::Number(4)));
    assert_eq!(eval_str("(+ 1 (-5 1))"), Ok(Value::Number(5)));
    assert_eq!(eval_str("(-10 -1 2)"), Ok(Value::Number(9)));
}

#[test]
fn test_deep_nesting_within_limit() {
    let depth = 200;
    let source = format!("{}1{}", "(+ ".repeat(depth), ")".repeat(depth));
    let tree = parse(&source).unwrap();
    assert_eq!(tree.depth(), depth + 1);
    assert_eq!(evaluate(&tree), Value::Number(1));
}

#[test]
fn test_deep_nesting_rejected() {
    let depth = DEFAULT_MAX_DEPTH + 1;
    let source = format!("{}1{}", "(+ ".repeat(depth), ")".repeat(depth));
    assert_eq!(
        parse(&source),
        Err(ParseError::NestingTooDeep {
            max: DEFAULT_MAX_DEPTH
        })
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Parse Errors
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_unknown_operator_is_parse_error() {
    let err = parse("(% 1 2)").unwrap_err();
    assert_eq!(err, ParseError::UnexpectedCharacter { column: 2 });
    assert_eq!(err.column(), Some(2));
}

#[test]
fn test_parse_error_messages() {
    assert_eq!(
        parse("(+ 1").unwrap_err().to_string(),
        "expected expression or `)`, found end of input"
    );
    assert_eq!(
        parse("(1 2)").unwrap_err().to_string(),
        "expected operator, found number `1` at column 2"
    );
}
