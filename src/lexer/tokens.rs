use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("LABEL", TokenKind::Label);
        map.insert("GOTO", TokenKind::Goto);
        map.insert("PRINT", TokenKind::Print);
        map.insert("INPUT", TokenKind::Input);
        map.insert("LET", TokenKind::Let);
        map.insert("IF", TokenKind::If);
        map.insert("THEN", TokenKind::Then);
        map.insert("ELSEIF", TokenKind::ElseIf);
        map.insert("ELSE", TokenKind::Else);
        map.insert("ENDIF", TokenKind::EndIf);
        map.insert("WHILE", TokenKind::While);
        map.insert("REPEAT", TokenKind::Repeat);
        map.insert("ENDWHILE", TokenKind::EndWhile);
        map.insert("FOR", TokenKind::For);
        map.insert("TO", TokenKind::To);
        map.insert("ENDFOR", TokenKind::EndFor);
        map.insert("INT", TokenKind::IntType);
        map.insert("FLOAT", TokenKind::FloatType);
        map.insert("BOOL", TokenKind::BoolType);
        map.insert("STRING", TokenKind::StringType);
        map.insert("TRUE", TokenKind::True);
        map.insert("FALSE", TokenKind::False);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Newline,
    Number,
    String,
    Identifier,

    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    NotEquals,  // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    Label,
    Goto,
    Print,
    Input,
    Let,
    If,
    Then,
    ElseIf,
    Else,
    EndIf,
    While,
    Repeat,
    EndWhile,
    For,
    To,
    EndFor,
    True,
    False,

    // Type keywords
    IntType,
    FloatType,
    BoolType,
    StringType,
}

impl TokenKind {
    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            TokenKind::Equals
                | TokenKind::NotEquals
                | TokenKind::Less
                | TokenKind::LessEquals
                | TokenKind::Greater
                | TokenKind::GreaterEquals
        )
    }

    pub fn is_type_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::IntType | TokenKind::FloatType | TokenKind::BoolType | TokenKind::StringType
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    /// Spelling used in diagnostics; newlines and the end of input have no printable text.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::Newline => String::from("newline"),
            TokenKind::EOF => String::from("end of file"),
            _ => self.value.clone(),
        }
    }
}
