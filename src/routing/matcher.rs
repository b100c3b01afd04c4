//! Route pattern compilation.
//!
//! # Responsibilities
//! - Turn a pattern template (`/user/:id`, `/files/*`, `*`) into an anchored regex
//! - Record declared parameter names in order of appearance
//! - Pass raw expressions through untouched
//!
//! # Design Decisions
//! - Every literal character is escaped, so a well-formed template always compiles
//! - `:name` captures `(.+)`: greedy and NOT restricted to one segment.
//!   `/user/:id` matches `/user/42/extra` with `id = "42/extra"`.
//! - `*` inside a template is `.*`; the whole-pattern `*` accepts any non-empty path
//! - Raw expressions declare no names; their captures are keyed by index
//! - Generated expressions let `.` match `\n`, so `*` and `:name` accept any
//!   character; raw expressions keep their own flags

use std::fmt;

use regex::Regex;

use crate::routing::error::RouterError;
use crate::routing::params::{ParamKey, Params};

/// The universal wildcard pattern.
pub const WILDCARD: &str = "*";

/// A route pattern before compilation.
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Path template using the `:name` / `*` mini-language.
    Literal(String),
    /// Precompiled expression used as-is.
    Raw(Regex),
}

impl Pattern {
    /// Build a raw pattern from expression source.
    pub fn raw(source: &str) -> Result<Self, RouterError> {
        Regex::new(source)
            .map(Pattern::Raw)
            .map_err(|e| RouterError::invalid_pattern(source, e))
    }

    /// Compile into a matcher plus declared parameter names.
    ///
    /// Templates must be `*` or start with `/`. Empty and relative templates
    /// (`user/:id`) are rejected with [`RouterError::InvalidPattern`].
    pub fn compile(&self) -> Result<Matcher, RouterError> {
        match self {
            Pattern::Raw(regex) => Ok(Matcher {
                source: regex.as_str().to_string(),
                regex: regex.clone(),
                param_names: Vec::new(),
            }),
            Pattern::Literal(template) => compile_template(template),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Literal(template) => f.write_str(template),
            Pattern::Raw(regex) => write!(f, "/{}/", regex.as_str()),
        }
    }
}

impl From<&str> for Pattern {
    fn from(template: &str) -> Self {
        Pattern::Literal(template.to_string())
    }
}

impl From<String> for Pattern {
    fn from(template: String) -> Self {
        Pattern::Literal(template)
    }
}

impl From<Regex> for Pattern {
    fn from(regex: Regex) -> Self {
        Pattern::Raw(regex)
    }
}

/// Compile any pattern-like value.
pub fn compile(pattern: impl Into<Pattern>) -> Result<Matcher, RouterError> {
    pattern.into().compile()
}

/// Compiled form of a pattern.
#[derive(Debug, Clone)]
pub struct Matcher {
    source: String,
    regex: Regex,
    param_names: Vec<String>,
}

impl Matcher {
    /// The generated (or raw) expression.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Declared parameter names, left to right.
    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }

    /// Pattern text this matcher was built from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Match `path` and write captures into `params`.
    ///
    /// On failure `params` is left untouched. Groups that did not take part in
    /// the match are skipped.
    pub fn capture_into(&self, path: &str, params: &mut Params) -> bool {
        let Some(caps) = self.regex.captures(path) else {
            return false;
        };

        for (i, group) in caps.iter().skip(1).enumerate() {
            let Some(value) = group else { continue };
            let key = match self.param_names.get(i) {
                Some(name) => ParamKey::Name(name.clone()),
                None => ParamKey::Index(i),
            };
            params.insert(key, value.as_str());
        }
        true
    }
}

fn compile_template(template: &str) -> Result<Matcher, RouterError> {
    if template == WILDCARD {
        let regex =
            Regex::new("(?s)^.+$").map_err(|e| RouterError::invalid_pattern(template, e))?;
        return Ok(Matcher {
            source: template.to_string(),
            regex,
            param_names: Vec::new(),
        });
    }

    if template.is_empty() {
        return Err(RouterError::invalid_pattern(template, "pattern is empty"));
    }
    let Some(rest) = template.strip_prefix('/') else {
        return Err(RouterError::invalid_pattern(
            template,
            "pattern must start with '/' or be '*'",
        ));
    };

    let mut expr = String::from("(?s)^");
    let mut param_names = Vec::new();
    for segment in rest.split('/') {
        expr.push('/');
        translate_segment(segment, &mut expr, &mut param_names);
    }
    expr.push('$');

    let regex = Regex::new(&expr).map_err(|e| RouterError::invalid_pattern(template, e))?;
    Ok(Matcher {
        source: template.to_string(),
        regex,
        param_names,
    })
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn translate_segment(segment: &str, expr: &mut String, names: &mut Vec<String>) {
    let mut chars = segment.char_indices().peekable();
    while let Some((start, c)) = chars.next() {
        match c {
            '*' => expr.push_str(".*"),
            ':' if chars.peek().is_some_and(|&(_, n)| is_name_char(n)) => {
                let mut end = segment.len();
                while let Some(&(i, n)) = chars.peek() {
                    if !is_name_char(n) {
                        end = i;
                        break;
                    }
                    chars.next();
                }
                names.push(segment[start + 1..end].to_string());
                expr.push_str("(.+)");
            }
            _ => {
                let mut buf = [0u8; 4];
                expr.push_str(&regex::escape(c.encode_utf8(&mut buf)));
            }
        }
    }
}
