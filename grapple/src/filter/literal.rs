// Copyright (c) 2025 Grapple Contributors.
// SPDX-License-Identifier: Apache-2.0
//
//! Restricted literal grammar for filter clauses
//!
//! A filter clause like `{name:"foo", tags:[1,2]}` is parsed into a
//! `Value` document by this grammar. The grammar accepts object literals,
//! array literals, and primitive literals only; identifiers in value
//! position, calls, operators, and computed keys have no production and
//! fail the parse. Because the output type is the closed `Value` enum,
//! nothing executable can come out of a filter clause no matter what goes
//! in.

use nom::branch::alt;
use nom::bytes::complete::{is_not, tag, take_while, take_while1};
use nom::character::complete::{char, digit1, multispace0, one_of};
use nom::combinator::{all_consuming, map, map_res, opt, recognize, value};
use nom::multi::separated_list0;
use nom::sequence::{delimited, pair, preceded, separated_pair, terminated, tuple};
use nom::IResult;
use std::collections::BTreeMap;

use crate::error::QueryError;
use crate::storage::Value;

/// Parse a complete filter clause into a literal document.
///
/// The entire input must be consumed; trailing garbage is a syntax error
/// like any other grammar violation.
pub fn parse_object_literal(input: &str) -> Result<Value, QueryError> {
    all_consuming(delimited(multispace0, object, multispace0))(input)
        .map(|(_, doc)| doc)
        .map_err(|_: nom::Err<nom::error::Error<&str>>| {
            QueryError::Syntax(format!("invalid filter syntax: {input}"))
        })
}

fn object(input: &str) -> IResult<&str, Value> {
    map(
        delimited(
            terminated(char('{'), multispace0),
            separated_list0(list_separator, key_value),
            preceded(trailing_comma, preceded(multispace0, char('}'))),
        ),
        |pairs| Value::Map(pairs.into_iter().collect::<BTreeMap<_, _>>()),
    )(input)
}

fn array(input: &str) -> IResult<&str, Value> {
    map(
        delimited(
            terminated(char('['), multispace0),
            separated_list0(list_separator, literal),
            preceded(trailing_comma, preceded(multispace0, char(']'))),
        ),
        Value::List,
    )(input)
}

fn key_value(input: &str) -> IResult<&str, (String, Value)> {
    separated_pair(
        key,
        delimited(multispace0, char(':'), multispace0),
        literal,
    )(input)
}

/// Object keys may be bare identifiers or quoted strings.
fn key(input: &str) -> IResult<&str, String> {
    alt((map(identifier, str::to_string), string))(input)
}

fn literal(input: &str) -> IResult<&str, Value> {
    alt((
        object,
        array,
        map(string, Value::String),
        number,
        value(Value::Bool(true), tag("true")),
        value(Value::Bool(false), tag("false")),
        value(Value::Null, tag("null")),
    ))(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(|c: char| c.is_ascii_alphabetic() || c == '_' || c == '$'),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '$'),
    ))(input)
}

fn string(input: &str) -> IResult<&str, String> {
    alt((quoted('"'), quoted('\'')))(input)
}

/// A quote-delimited string with backslash escapes.
fn quoted(quote: char) -> impl Fn(&str) -> IResult<&str, String> {
    move |input| {
        let (mut rest, _) = char(quote)(input)?;
        let mut out = String::new();
        loop {
            let (after, chunk) = opt(is_not(if quote == '"' { "\"\\" } else { "'\\" }))(rest)?;
            if let Some(chunk) = chunk {
                out.push_str(chunk);
            }
            rest = after;
            if rest.starts_with('\\') {
                let (after, escaped) = preceded(
                    char('\\'),
                    alt((
                        value('\n', char('n')),
                        value('\t', char('t')),
                        value('\r', char('r')),
                        one_of("\"'\\/"),
                    )),
                )(rest)?;
                out.push(escaped);
                rest = after;
            } else {
                let (after, _) = char(quote)(rest)?;
                return Ok((after, out));
            }
        }
    }
}

fn number(input: &str) -> IResult<&str, Value> {
    map_res(
        recognize(tuple((
            opt(char('-')),
            digit1,
            opt(preceded(char('.'), digit1)),
            opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
        ))),
        |text: &str| -> Result<Value, std::num::ParseFloatError> {
            if text.contains(['.', 'e', 'E']) {
                text.parse::<f64>().map(Value::Float)
            } else {
                match text.parse::<i64>() {
                    Ok(n) => Ok(Value::Int(n)),
                    // overflow falls back to float rather than failing the parse
                    Err(_) => text.parse::<f64>().map(Value::Float),
                }
            }
        },
    )(input)
}

fn list_separator(input: &str) -> IResult<&str, ()> {
    value((), delimited(multispace0, char(','), multispace0))(input)
}

/// Object and array literals tolerate one trailing comma.
fn trailing_comma(input: &str) -> IResult<&str, ()> {
    value((), opt(preceded(multispace0, char(','))))(input)
}
