// crates/termfolio-core/src/commands/calc.rs - Arithmetic evaluator
//
// GRAMMAR:
// expr   := term (("+" | "-") term)*
// term   := unary (("*" | "/" | "%") unary)*
// unary  := "-" unary | "+" unary | atom
// atom   := number | "(" expr ")"
//
// Sign runs are folded iteratively and parentheses nest at most MAX_DEPTH
// deep, so no input line can exhaust the stack.
//
// Precedence and left associativity match ordinary calculator rules, so
// "2 + 3 * 4" is 14 and "8 / 4 / 2" is 1.

use regex::Regex;
use std::sync::LazyLock;

use crate::html::escape;
use crate::output::{CommandError, CommandResult, Output};

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*(?:(\d+(?:\.\d*)?|\.\d+)|([-+*/%()])|(\S))").unwrap());

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Op(char),
}

const MAX_DEPTH: usize = 256;

pub fn handle(args: &[String]) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::MissingArgument {
            command: "calc",
            message: "Usage: calc [expression] (e.g., calc 2 + 3 * 4)",
        });
    }

    let expression = args.join(" ");
    let value = evaluate(&expression)?;

    Ok(Output::html(format!(
        r#"<div class="space-y-2"><div><span class="text-terminal-text">Expression:</span> <span class="text-terminal-text">{}</span></div><div><span class="text-terminal-text">Result:</span> <span class="text-terminal-accent text-lg">{}</span></div></div>"#,
        escape(&expression),
        format_number(value)
    )))
}

/// Evaluate an arithmetic expression
pub fn evaluate(expression: &str) -> Result<f64, CommandError> {
    let tokens = tokenize(expression)?;
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };

    let value = parser.expr()?;
    if let Some(token) = parser.peek() {
        return Err(invalid(format!("unexpected {}", describe(token))));
    }
    if !value.is_finite() {
        return Err(invalid("result is not a finite number"));
    }
    Ok(value)
}

/// Integers print without a fractional part, everything else as-is
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

fn tokenize(expression: &str) -> Result<Vec<Token>, CommandError> {
    let mut tokens = Vec::new();

    for caps in TOKEN.captures_iter(expression) {
        if let Some(number) = caps.get(1) {
            let value = number
                .as_str()
                .parse::<f64>()
                .map_err(|_| invalid(format!("bad number '{}'", number.as_str())))?;
            tokens.push(Token::Number(value));
        } else if let Some(op) = caps.get(2) {
            tokens.push(Token::Op(op.as_str().chars().next().unwrap_or('?')));
        } else if let Some(other) = caps.get(3) {
            return Err(invalid(format!("unexpected character '{}'", other.as_str())));
        }
    }

    if tokens.is_empty() {
        return Err(invalid("empty expression"));
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.peek();
        self.pos += 1;
        token
    }

    fn expr(&mut self) -> Result<f64, CommandError> {
        let mut value = self.term()?;
        while let Some(Token::Op(op @ ('+' | '-'))) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            value = if op == '+' { value + rhs } else { value - rhs };
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, CommandError> {
        let mut value = self.unary()?;
        while let Some(Token::Op(op @ ('*' | '/' | '%'))) = self.peek() {
            self.pos += 1;
            let rhs = self.unary()?;
            value = match op {
                '*' => value * rhs,
                _ if rhs == 0.0 => return Err(invalid("division by zero")),
                '/' => value / rhs,
                _ => value % rhs,
            };
        }
        Ok(value)
    }

    fn unary(&mut self) -> Result<f64, CommandError> {
        let mut negate = false;
        while let Some(Token::Op(sign @ ('-' | '+'))) = self.peek() {
            self.pos += 1;
            negate ^= sign == '-';
        }
        let value = self.atom()?;
        Ok(if negate { -value } else { value })
    }

    fn atom(&mut self) -> Result<f64, CommandError> {
        match self.next() {
            Some(Token::Number(value)) => Ok(value),
            Some(Token::Op('(')) => {
                if self.depth >= MAX_DEPTH {
                    return Err(invalid("expression nested too deeply"));
                }
                self.depth += 1;
                let value = self.expr()?;
                self.depth -= 1;
                match self.next() {
                    Some(Token::Op(')')) => Ok(value),
                    _ => Err(invalid("missing closing parenthesis")),
                }
            }
            Some(token) => Err(invalid(format!("unexpected {}", describe(token)))),
            None => Err(invalid("unexpected end of expression")),
        }
    }
}

fn describe(token: Token) -> String {
    match token {
        Token::Number(n) => format!("number {}", format_number(n)),
        Token::Op(op) => format!("'{}'", op),
    }
}

fn invalid(message: impl Into<String>) -> CommandError {
    CommandError::InvalidExpression(message.into())
}
