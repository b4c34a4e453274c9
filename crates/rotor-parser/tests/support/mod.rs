//! Token streams for integration tests.
//!
//! A tiny whitespace-driven tokenizer: every word is one token, `//` starts
//! a comment that runs to the end of the line, and line breaks become
//! `Newline` tokens. Good enough to feed the parser realistic streams.

#![allow(dead_code)]

use rotor_token::{Span, Token, TokenKind};

pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut line_start = 0;

    for (index, line) in source.split('\n').enumerate() {
        let line_no = index + 1;

        let (code, comment) = match line.find("//") {
            Some(i) => (&line[..i], Some((i, &line[i..]))),
            None => (line, None),
        };

        for (column, word) in words(code) {
            let start = line_start + column;
            let span = Span::new(start, start + word.len(), line_no, column + 1);
            tokens.push(Token::new(classify(word), span));
        }

        if let Some((column, text)) = comment {
            let start = line_start + column;
            let span = Span::new(start, start + text.len(), line_no, column + 1);
            tokens.push(Token::new(TokenKind::Comment(text.to_string()), span));
        }

        let end = line_start + line.len();
        if end < source.len() {
            let span = Span::new(end, end + 1, line_no, line.len() + 1);
            tokens.push(Token::new(TokenKind::Newline, span));
        }

        line_start = end + 1;
    }

    tokens
}

fn words(code: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut start = None;

    for (i, c) in code.char_indices().chain(std::iter::once((code.len(), ' '))) {
        match (start, c.is_whitespace()) {
            (None, false) => start = Some(i),
            (Some(s), true) => {
                out.push((s, &code[s..i]));
                start = None;
            }
            _ => {}
        }
    }

    out
}

fn classify(word: &str) -> TokenKind {
    if let Ok(n) = word.parse() {
        return TokenKind::Number(n);
    }
    if word.len() >= 2 && word.starts_with('"') && word.ends_with('"') {
        return TokenKind::String(word[1..word.len() - 1].to_string());
    }
    match word {
        "if" | "while" | "return" => TokenKind::Keyword(word.to_string()),
        ";" | "(" | ")" | "{" | "}" => TokenKind::Symbol(word.chars().next().unwrap_or(';')),
        _ if word.chars().all(|c| c.is_alphanumeric() || c == '_') => {
            TokenKind::Identifier(word.to_string())
        }
        _ => TokenKind::Operator(word.to_string()),
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
