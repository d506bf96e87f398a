//! Subject tokenizing and per-token styling
//!
//! Subjects are split on single spaces. Consecutive spaces yield empty tokens,
//! which are kept so that joining with single spaces gives the input back.

use crate::style::{Color, Painter, Style};
use regex::Regex;
use std::sync::LazyLock;

static PROJECT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+[\p{L}\d_]+").unwrap());
static CONTEXT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^@[\p{L}\d_]+").unwrap());

/// Kind of a word in a subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Plain,
    /// `+name`
    Project,
    /// `@name`
    Context,
}

impl TokenKind {
    /// Classify a whole token by its prefix
    pub fn of(token: &str) -> Self {
        if PROJECT_REGEX.is_match(token) {
            TokenKind::Project
        } else if CONTEXT_REGEX.is_match(token) {
            TokenKind::Context
        } else {
            TokenKind::Plain
        }
    }

    pub fn color(&self) -> Color {
        match self {
            TokenKind::Plain => Color::White,
            TokenKind::Project => Color::BrightBlue,
            TokenKind::Context => Color::BrightWhite,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubjectToken<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> SubjectToken<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            kind: TokenKind::of(text),
            text,
        }
    }

    pub fn style(&self, is_priority: bool) -> Style {
        Style::for_priority(self.kind.color(), is_priority)
    }

    /// Tag name without its sigil, for project and context tokens
    ///
    /// Only the matched prefix counts, so `+work,` yields `work`.
    pub fn tag(&self) -> Option<&'a str> {
        let matched = match self.kind {
            TokenKind::Project => PROJECT_REGEX.find(self.text),
            TokenKind::Context => CONTEXT_REGEX.find(self.text),
            TokenKind::Plain => None,
        }?;
        Some(&self.text[1..matched.end()])
    }
}

pub fn tokenize(subject: &str) -> Vec<SubjectToken<'_>> {
    subject.split(' ').map(SubjectToken::new).collect()
}

/// Style every token of a subject and join them back with single spaces
pub fn style_subject(subject: &str, is_priority: bool, painter: &Painter) -> String {
    tokenize(subject)
        .iter()
        .map(|token| painter.paint(token.text, token.style(is_priority)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Project names tagged in a subject, deduplicated, in order of appearance
pub fn extract_projects(subject: &str) -> Vec<String> {
    extract_tags(subject, TokenKind::Project)
}

/// Context names tagged in a subject, deduplicated, in order of appearance
pub fn extract_contexts(subject: &str) -> Vec<String> {
    extract_tags(subject, TokenKind::Context)
}

fn extract_tags(subject: &str, kind: TokenKind) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in tokenize(subject)
        .iter()
        .filter(|token| token.kind == kind)
        .filter_map(SubjectToken::tag)
    {
        if !tags.iter().any(|seen| seen == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}
