use logic_ast::{is_variable, BinaryOp, Formula, Notation, Quantifier};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while},
    character::complete::{multispace0, satisfy},
    combinator::{map, opt},
    sequence::{pair, preceded},
    IResult,
};

use crate::error::ParseError;

type Res<'a, T> = IResult<&'a str, T>;

// Intermediate AST for parsing
#[derive(Debug, Clone)]
enum ParseNode {
    Atomic(char, String),
    Falsum,
    Not(Box<ParseNode>),
    Binary(BinaryOp, Box<ParseNode>, Box<ParseNode>),
    Quantified(Quantifier, char, Box<ParseNode>),
}

impl ParseNode {
    fn lower(self, notation: &'static Notation) -> Result<Formula, ParseError> {
        Ok(match self {
            ParseNode::Atomic(predicate, terms) => {
                let terms: Vec<char> = terms.chars().collect();
                Formula::atomic(predicate, &terms, notation)?
            }
            ParseNode::Falsum => Formula::falsum(notation),
            ParseNode::Not(operand) => Formula::negation(operand.lower(notation)?),
            ParseNode::Binary(op, left, right) => {
                let left = left.lower(notation)?;
                let right = right.lower(notation)?;
                Formula::binary(op, left, right)
            }
            ParseNode::Quantified(quantifier, var, body) => {
                Formula::quantified(quantifier, var, body.lower(notation)?)
            }
        })
    }
}

// A notation symbol, allowing leading whitespace
fn symbol<'a>(sym: &'static str) -> impl FnMut(&'a str) -> Res<'a, &'a str> {
    preceded(multispace0, tag(sym))
}

// Atomic: predicate letter followed by term letters (P, Fx, Rab)
fn parse_atomic(input: &str) -> Res<'_, ParseNode> {
    map(
        pair(
            satisfy(|c| c.is_ascii_uppercase()),
            take_while(|c: char| c.is_ascii_lowercase()),
        ),
        |(predicate, terms): (char, &str)| ParseNode::Atomic(predicate, terms.to_string()),
    )(input)
}

fn parse_variable(input: &str) -> Res<'_, char> {
    preceded(multispace0, satisfy(is_variable))(input)
}

fn parse_falsum<'a>(input: &'a str, notation: &'static Notation) -> Res<'a, ParseNode> {
    map(symbol(notation.falsum), |_| ParseNode::Falsum)(input)
}

fn parse_binop<'a>(input: &'a str, notation: &'static Notation) -> Res<'a, BinaryOp> {
    alt((
        map(symbol(notation.and), |_| BinaryOp::And),
        map(symbol(notation.or), |_| BinaryOp::Or),
        map(symbol(notation.ifthen), |_| BinaryOp::IfThen),
        map(symbol(notation.iff), |_| BinaryOp::Iff),
    ))(input)
}

fn parse_negation<'a>(input: &'a str, notation: &'static Notation) -> Res<'a, ParseNode> {
    let (input, _) = symbol(notation.not)(input)?;
    let (input, operand) = parse_wff(input, notation)?;
    Ok((input, ParseNode::Not(Box::new(operand))))
}

// Quantifier symbol, bound variable, then the body: ∀xFx, ∃y(Fy∧Gy)
fn parse_quantified<'a>(input: &'a str, notation: &'static Notation) -> Res<'a, ParseNode> {
    let (input, quantifier) = alt((
        map(symbol(notation.forall), |_| Quantifier::Forall),
        map(symbol(notation.exists), |_| Quantifier::Exists),
    ))(input)?;
    let (input, var) = parse_variable(input)?;
    let (input, body) = parse_wff(input, notation)?;
    Ok((
        input,
        ParseNode::Quantified(quantifier, var, Box::new(body)),
    ))
}

// Connective followed by the right-hand operand
fn parse_binary_tail<'a>(
    input: &'a str,
    notation: &'static Notation,
) -> Res<'a, (BinaryOp, ParseNode)> {
    let (input, op) = parse_binop(input, notation)?;
    let (input, right) = parse_wff(input, notation)?;
    Ok((input, (op, right)))
}

fn join(left: ParseNode, tail: Option<(BinaryOp, ParseNode)>) -> ParseNode {
    match tail {
        Some((op, right)) => ParseNode::Binary(op, Box::new(left), Box::new(right)),
        None => left,
    }
}

// Parentheses: either a binary formula or a redundant wrapper, (P∧Q) or (P)
fn parse_parens<'a>(input: &'a str, notation: &'static Notation) -> Res<'a, ParseNode> {
    let (input, _) = symbol("(")(input)?;
    let (input, first) = parse_wff(input, notation)?;
    let (input, tail) = opt(|i: &'a str| parse_binary_tail(i, notation))(input)?;
    let (input, _) = symbol(")")(input)?;
    Ok((input, join(first, tail)))
}

fn parse_wff<'a>(input: &'a str, notation: &'static Notation) -> Res<'a, ParseNode> {
    preceded(
        multispace0,
        alt((
            |i: &'a str| parse_negation(i, notation),
            |i: &'a str| parse_quantified(i, notation),
            |i: &'a str| parse_falsum(i, notation),
            parse_atomic,
            |i: &'a str| parse_parens(i, notation),
        )),
    )(input)
}

// Top level: a wff, optionally followed by an unparenthesized connective
fn parse_top<'a>(input: &'a str, notation: &'static Notation) -> Res<'a, ParseNode> {
    let (input, first) = parse_wff(input, notation)?;
    let (input, tail) = opt(|i: &'a str| parse_binary_tail(i, notation))(input)?;
    Ok((input, join(first, tail)))
}

/// Parse a formula written in `notation`.
///
/// The outermost binary connective may be written without parentheses
/// (`P∧Q` parses like `(P∧Q)`); everywhere else binary formulas are
/// parenthesized.
pub fn parse(input: &str, notation: &'static Notation) -> Result<Formula, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let (remaining, node) =
        parse_top(input, notation).map_err(|e| ParseError::NomError(format!("{}", e)))?;

    let remaining = remaining.trim();
    if !remaining.is_empty() {
        return Err(ParseError::UnconsumedInput(remaining.to_string()));
    }

    node.lower(notation)
}
