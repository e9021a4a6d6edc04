use std::mem;

use super::{Placeholders, Value};
use crate::{CodegenError, Result};

/// A parsed template, ready to be rendered any number of times.
#[derive(Debug)]
pub(crate) struct Template {
    name: String,
    segments: Vec<Segment>,
}

#[derive(Debug, PartialEq)]
enum Segment {
    Text(String),
    Expr {
        placeholder: String,
        separator: Option<String>,
    },
}

impl Template {
    /// Parses `source` into a template.
    ///
    /// # Arguments
    /// * `name` - The template's name, used in error messages.
    /// * `source` - The template text.
    ///
    /// # Returns
    /// The compiled template or `MalformedTemplate` if `source` is not valid template syntax.
    pub(crate) fn compile(name: &str, source: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut text = String::new();
        let mut rest = source;
        let mut line = 1;

        while let Some(start) = rest.find('$') {
            let before = &rest[..start];
            let after = &rest[start + 1..];
            text.push_str(before);
            line += count_lines(before);

            if let Some(after) = after.strip_prefix('$') {
                text.push('$');
                rest = after;
                continue;
            }

            if let Some(comment) = after.strip_prefix('!') {
                let end = comment
                    .find("!$")
                    .ok_or_else(|| malformed(name, line, "unterminated comment"))?;

                line += count_lines(&comment[..end]);
                rest = &comment[end + 2..];

                // A comment swallows the line break right after it.
                if let Some(after) = rest.strip_prefix('\n') {
                    line += 1;
                    rest = after;
                }
                continue;
            }

            let end = expr_end(after)
                .ok_or_else(|| malformed(name, line, "unterminated expression"))?;

            if !text.is_empty() {
                segments.push(Segment::Text(mem::take(&mut text)));
            }

            let expr = parse_expr(&after[..end]).map_err(|reason| malformed(name, line, reason))?;
            segments.push(expr);
            rest = &after[end + 1..];
        }

        text.push_str(rest);
        if !text.is_empty() {
            segments.push(Segment::Text(text));
        }

        Ok(Self {
            name: name.to_string(),
            segments,
        })
    }

    /// Substitutes every expression of this template.
    ///
    /// # Arguments
    /// * `placeholders` - The values to insert.
    ///
    /// # Returns
    /// The rendered text or `MissingPlaceholder` if an expression has no value.
    pub(crate) fn render(&self, placeholders: &Placeholders) -> Result<String> {
        let mut out = String::new();

        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Expr {
                    placeholder,
                    separator,
                } => {
                    let value = self.lookup(placeholders, placeholder)?;
                    value.render_into(&mut out, separator.as_deref().unwrap_or(""));
                }
            }
        }

        Ok(out)
    }

    fn lookup<'a>(&self, placeholders: &'a Placeholders, placeholder: &str) -> Result<&'a Value> {
        placeholders
            .get(placeholder)
            .ok_or_else(|| CodegenError::MissingPlaceholder {
                template: self.name.clone(),
                placeholder: placeholder.to_string(),
            })
    }
}

fn count_lines(s: &str) -> usize {
    s.matches('\n').count()
}

fn malformed(name: &str, line: usize, reason: impl Into<String>) -> CodegenError {
    CodegenError::MalformedTemplate {
        name: name.to_string(),
        line,
        reason: reason.into(),
    }
}

/// Finds the `$` closing an expression, skipping over quoted option values.
///
/// Expressions never span lines.
fn expr_end(s: &str) -> Option<usize> {
    let mut quoted = false;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        match c {
            '\n' => return None,
            _ if escaped => escaped = false,
            '\\' if quoted => escaped = true,
            '"' => quoted = !quoted,
            '$' if !quoted => return Some(i),
            _ => {}
        }
    }

    None
}

/// Parses `name` or `name; separator="..."`.
fn parse_expr(body: &str) -> std::result::Result<Segment, String> {
    let (placeholder, option) = match body.split_once(';') {
        Some((placeholder, option)) => (placeholder.trim(), Some(option.trim())),
        None => (body.trim(), None),
    };

    if !is_identifier(placeholder) {
        return Err(format!("invalid placeholder name {placeholder:?}"));
    }

    let separator = option.map(parse_separator).transpose()?;

    Ok(Segment::Expr {
        placeholder: placeholder.to_string(),
        separator,
    })
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn parse_separator(option: &str) -> std::result::Result<String, String> {
    let Some((key, value)) = option.split_once('=') else {
        return Err(format!("expected key=value option, got {option:?}"));
    };

    let key = key.trim();
    if key != "separator" {
        return Err(format!("unknown option {key:?}"));
    }

    let literal = value
        .trim()
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .ok_or_else(|| format!("separator must be a quoted string, got {}", value.trim()))?;

    unescape(literal)
}

fn unescape(literal: &str) -> std::result::Result<String, String> {
    let mut out = String::with_capacity(literal.len());
    let mut chars = literal.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some(other) => return Err(format!("unknown escape \\{other}")),
            None => return Err("dangling backslash in separator".to_string()),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholders() -> Placeholders {
        let mut placeholders = Placeholders::new();
        placeholders.insert("count", Value::Int(3));
        placeholders.insert("xs", Value::Floats(vec![1.0, 2.5]));
        placeholders
    }

    fn malformed_at(source: &str) -> (usize, String) {
        match Template::compile("T", source) {
            Err(CodegenError::MalformedTemplate { line, reason, .. }) => (line, reason),
            other => panic!("expected a malformed template, got {other:?}"),
        }
    }

    #[test]
    fn renders_scalars_and_sequences() {
        let source = "n = $count$; xs = {$xs; separator=\", \"$};";
        let template = Template::compile("T", source).unwrap();
        let out = template.render(&placeholders()).unwrap();
        assert_eq!(out, "n = 3; xs = {1.0f, 2.5f};");
    }

    #[test]
    fn separator_accepts_escapes() {
        let template = Template::compile("T", "$xs; separator=\",\\n\"$").unwrap();
        assert_eq!(template.render(&placeholders()).unwrap(), "1.0f,\n2.5f");
    }

    #[test]
    fn separator_may_contain_dollar() {
        let template = Template::compile("T", "$xs; separator=\" $ \"$").unwrap();
        assert_eq!(template.render(&placeholders()).unwrap(), "1.0f $ 2.5f");
    }

    #[test]
    fn comments_and_escaped_dollars() {
        let source = "$! header\nspanning lines !$cost: $$$count$";
        let template = Template::compile("T", source).unwrap();
        assert_eq!(template.render(&placeholders()).unwrap(), "cost: $3");
    }

    #[test]
    fn comment_swallows_following_line_break() {
        let template = Template::compile("T", "$! header !$\nn = $count$\n").unwrap();
        assert_eq!(template.render(&placeholders()).unwrap(), "n = 3\n");
    }

    #[test]
    fn text_without_expressions_is_kept() {
        let template = Template::compile("T", "#include <math.h>\n").unwrap();
        assert_eq!(
            template.segments,
            vec![Segment::Text("#include <math.h>\n".into())]
        );
        assert_eq!(template.render(&Placeholders::new()).unwrap(), "#include <math.h>\n");
    }

    #[test]
    fn unterminated_expression_reports_its_line() {
        let (line, reason) = malformed_at("a\nb\nc = $count;\n$");
        assert_eq!(line, 3);
        assert_eq!(reason, "unterminated expression");
    }

    #[test]
    fn lines_are_counted_across_comments() {
        let (line, _) = malformed_at("$! one\ntwo !$\n$count");
        assert_eq!(line, 3);
    }

    #[test]
    fn unterminated_comment_is_malformed() {
        let (_, reason) = malformed_at("$! never closed");
        assert_eq!(reason, "unterminated comment");
    }

    #[test]
    fn unknown_option_is_malformed() {
        let (_, reason) = malformed_at("$xs; wrap=\"\\n\"$");
        assert_eq!(reason, "unknown option \"wrap\"");
    }

    #[test]
    fn invalid_placeholder_name_is_malformed() {
        let (_, reason) = malformed_at("$1abc$");
        assert_eq!(reason, "invalid placeholder name \"1abc\"");
        malformed_at("$ $");
    }

    #[test]
    fn unquoted_separator_is_malformed() {
        malformed_at("$xs; separator=,$");
        malformed_at("$xs; separator=\"\\q\"$");
    }

    #[test]
    fn missing_value_is_reported() {
        let template = Template::compile("T", "$count$ $weights$").unwrap();
        let err = template.render(&placeholders()).unwrap_err();

        match err {
            CodegenError::MissingPlaceholder {
                template,
                placeholder,
            } => {
                assert_eq!(template, "T");
                assert_eq!(placeholder, "weights");
            }
            other => panic!("expected a missing placeholder, got {other:?}"),
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let template = Template::compile("T", "$xs; separator=\"|\"$ $count$").unwrap();
        let placeholders = placeholders();
        assert_eq!(
            template.render(&placeholders).unwrap(),
            template.render(&placeholders).unwrap()
        );
    }
}
