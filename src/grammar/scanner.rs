//! Textual scanner for the generator-toolchain grammar syntax.
//!
//! The input format is the familiar `ruleName : alt1 | alt2 ;` shape with
//! quoted literals, parenthesized groups, quantifiers (`*`, `+`, `?`),
//! alternative labels (`# label`) and lexer directives (`-> skip`).
//! Grammar text is a trusted host asset, so scanning is lenient about
//! constructs it does not model (header declarations, options blocks,
//! character sets) and strict only about balance: an unterminated literal
//! or unbalanced group fails the whole build.

use super::graph::Symbol;
use super::GrammarError;

/// One `name : body ;` definition split out of the grammar text.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RuleDefinition {
    pub name: String,
    pub alternatives: Vec<Vec<Symbol>>,
}

/// Scan grammar text into rule definitions.
///
/// Definitions that do not match `name : body` (e.g. `grammar Vtl;` or
/// fragments of an `options` block) are skipped.
pub(crate) fn scan(source: &str) -> Result<Vec<RuleDefinition>, GrammarError> {
    let stripped = strip_comments(source)?;
    let mut definitions = Vec::new();

    for raw in split_definitions(&stripped)? {
        let Some((name, body)) = split_header(&raw) else {
            continue;
        };
        let alternatives = parse_alternatives(&body, &name)?;
        definitions.push(RuleDefinition { name, alternatives });
    }

    Ok(definitions)
}

/// Remove `//` line comments and `/* */` block comments, preserving quoted
/// literals.
fn strip_comments(source: &str) -> Result<String, GrammarError> {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '\'' => {
                let end = literal_end(&chars, i).ok_or(GrammarError::UnterminatedLiteral {
                    rule: "<grammar>".to_string(),
                })?;
                out.extend(&chars[i..=end]);
                i = end + 1;
            }
            '/' if chars.get(i + 1) == Some(&'/') => {
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
            }
            '/' if chars.get(i + 1) == Some(&'*') => {
                i += 2;
                while i + 1 < chars.len() && !(chars[i] == '*' && chars[i + 1] == '/') {
                    i += 1;
                }
                i = (i + 2).min(chars.len());
                out.push(' ');
            }
            c => {
                out.push(c);
                i += 1;
            }
        }
    }

    Ok(out)
}

/// Index of the closing quote for a literal starting at `start`.
fn literal_end(chars: &[char], start: usize) -> Option<usize> {
    let mut i = start + 1;
    while i < chars.len() {
        match chars[i] {
            '\\' => i += 2,
            '\'' => return Some(i),
            _ => i += 1,
        }
    }
    None
}

/// Split on top-level `;`, respecting quoted literals.
fn split_definitions(source: &str) -> Result<Vec<String>, GrammarError> {
    let chars: Vec<char> = source.chars().collect();
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '\'' => {
                let end = literal_end(&chars, i).ok_or(GrammarError::UnterminatedLiteral {
                    rule: "<grammar>".to_string(),
                })?;
                current.extend(&chars[i..=end]);
                i = end + 1;
            }
            ';' => {
                if !current.trim().is_empty() {
                    parts.push(current.clone());
                }
                current.clear();
                i += 1;
            }
            c => {
                current.push(c);
                i += 1;
            }
        }
    }

    // Trailing text without a terminating `;` is still a definition; a
    // grammar truncated mid-group is caught by the balance check below.
    if !current.trim().is_empty() {
        parts.push(current);
    }

    Ok(parts)
}

/// Split `name : body` at the first top-level colon. Returns `None` for
/// text that is not a rule definition.
fn split_header(definition: &str) -> Option<(String, String)> {
    let colon = definition.find(':')?;
    let header = definition[..colon].trim();
    // `fragment NAME : ...` helper rules participate like any other rule.
    let name = header
        .strip_prefix("fragment ")
        .map(str::trim)
        .unwrap_or(header);
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    Some((name.to_string(), definition[colon + 1..].to_string()))
}

/// Split a rule body on top-level `|` and tokenize each alternative.
fn parse_alternatives(body: &str, rule: &str) -> Result<Vec<Vec<Symbol>>, GrammarError> {
    let chars: Vec<char> = body.chars().collect();
    let (branches, consumed) = parse_branches(&chars, 0, rule, false)?;
    if consumed != chars.len() {
        // Only an unmatched `)` stops `parse_branches` early at top level.
        return Err(GrammarError::UnbalancedGroup {
            rule: rule.to_string(),
        });
    }
    Ok(branches)
}

/// Parse `|`-separated branches starting at `start`. When `in_group` is
/// true, parsing stops at the matching `)`; otherwise it runs to the end of
/// input. Returns the branches and the index just past the consumed text.
fn parse_branches(
    chars: &[char],
    start: usize,
    rule: &str,
    in_group: bool,
) -> Result<(Vec<Vec<Symbol>>, usize), GrammarError> {
    let mut branches = Vec::new();
    let mut current: Vec<Symbol> = Vec::new();
    let mut i = start;

    loop {
        if i >= chars.len() {
            if in_group {
                return Err(GrammarError::UnbalancedGroup {
                    rule: rule.to_string(),
                });
            }
            branches.push(current);
            return Ok((branches, i));
        }

        match chars[i] {
            c if c.is_whitespace() => i += 1,
            '\'' => {
                let end = literal_end(chars, i).ok_or(GrammarError::UnterminatedLiteral {
                    rule: rule.to_string(),
                })?;
                let text: String = chars[i + 1..end].iter().collect();
                current.push(Symbol::Literal(unescape(&text)));
                i = end + 1;
            }
            '(' => {
                let (group, end) = parse_branches(chars, i + 1, rule, true)?;
                current.push(Symbol::Group(group));
                i = end;
            }
            ')' => {
                if !in_group {
                    return Err(GrammarError::UnbalancedGroup {
                        rule: rule.to_string(),
                    });
                }
                branches.push(current);
                return Ok((branches, i + 1));
            }
            '|' => {
                branches.push(std::mem::take(&mut current));
                i += 1;
            }
            // Quantifiers attach to the preceding symbol; the graph keeps
            // symbols unquantified.
            '*' | '+' | '?' => i += 1,
            // Alternative label: `# someLabel`.
            '#' => {
                i += 1;
                while i < chars.len() && (chars[i].is_whitespace() || is_word_char(chars[i])) {
                    i += 1;
                }
            }
            // Lexer directive (`-> skip`, `-> channel(HIDDEN)`): the rest
            // of the branch is metadata, not symbols.
            '-' if chars.get(i + 1) == Some(&'>') => {
                while i < chars.len() && !matches!(chars[i], '|' | ')') {
                    i += 1;
                }
            }
            // Character set in a lexer rule: abstract, not completable.
            '[' => {
                while i < chars.len() && chars[i] != ']' {
                    i += 1;
                }
                i = (i + 1).min(chars.len());
            }
            c if is_word_char(c) => {
                let mut end = i;
                while end < chars.len() && is_word_char(chars[end]) {
                    end += 1;
                }
                let word: String = chars[i..end].iter().collect();
                current.push(classify_word(word));
                i = end;
            }
            // Anything else (`~`, `.`, `,`, element options) is toolchain
            // syntax the walk never needs.
            _ => i += 1,
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// ALL-CAPS words reference lexer tokens; anything else references a rule.
fn classify_word(word: String) -> Symbol {
    let is_token = word
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
        && word.chars().any(|c| c.is_ascii_uppercase());
    if is_token {
        Symbol::TokenRef(word)
    } else {
        Symbol::RuleRef(word)
    }
}

/// Resolve backslash escapes inside a quoted literal.
fn unescape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some('n') => out.push('\n'),
                Some('t') => out.push('\t'),
                Some('r') => out.push('\r'),
                Some(other) => out.push(other),
                None => out.push('\\'),
            }
        } else {
            out.push(c);
        }
    }
    out
}
