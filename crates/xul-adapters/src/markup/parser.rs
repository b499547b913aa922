//! Hand-written XML-like parser.
//!
//! Supports what Xul documents use and nothing more: elements, self-closing
//! elements, quoted attributes, text, comments, CDATA sections and `<?...?>` /
//! `<!DOCTYPE ...>` prologs. There are no namespaces and no DTD processing.

use xul_core::{
    application::MAX_DEPTH,
    domain::{DomainError, MarkupNode},
};

type ParseResult<T> = Result<T, DomainError>;

pub(crate) struct Parser<'s> {
    input: &'s str,
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'s> Parser<'s> {
    pub(crate) fn new(input: &'s str) -> Self {
        Self {
            input,
            pos: 0,
            depth: 0,
            max_depth: MAX_DEPTH,
        }
    }

    /// Elements nested deeper than `max_depth` are rejected while parsing.
    pub(crate) fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse a whole document: exactly one root element, optionally
    /// surrounded by whitespace, comments and prologs.
    pub(crate) fn parse_document(&mut self) -> ParseResult<MarkupNode> {
        self.skip_misc()?;
        if self.at_end() {
            return Err(self.error("document has no root element"));
        }
        if !self.starts_with("<") {
            return Err(self.error("text outside the root element"));
        }

        let root = self.parse_element()?;

        self.skip_misc()?;
        if !self.at_end() {
            let reason = if self.starts_with("<") {
                "more than one root element"
            } else {
                "text outside the root element"
            };
            return Err(self.error(reason));
        }
        Ok(root)
    }

    fn parse_element(&mut self) -> ParseResult<MarkupNode> {
        if self.depth >= self.max_depth {
            let limit = self.max_depth;
            return Err(self.error(format!("nesting exceeds {limit} levels")));
        }

        self.depth += 1;
        let element = self.parse_element_body();
        self.depth -= 1;
        element
    }

    fn parse_element_body(&mut self) -> ParseResult<MarkupNode> {
        let open_at = self.pos;
        self.expect("<")?;

        let name = self.parse_name();
        if name.is_empty() {
            return Err(self.error_at(open_at, "expected a tag name after '<'"));
        }
        let mut node =
            MarkupNode::new(name).map_err(|_| self.error_at(open_at, "empty tag name"))?;

        loop {
            self.skip_whitespace();
            if self.eat("/>") {
                return Ok(node);
            }
            if self.eat(">") {
                break;
            }
            if self.at_end() {
                return Err(self.error_at(open_at, format!("unterminated start tag <{name}>")));
            }
            let (key, value) = self.parse_attribute()?;
            node.set_attribute(key, value);
        }

        loop {
            if self.at_end() {
                return Err(self.error_at(open_at, format!("missing closing tag </{name}>")));
            }

            if self.starts_with("</") {
                let close_at = self.pos;
                self.pos += 2;
                let closing = self.parse_name();
                self.skip_whitespace();
                self.expect(">")?;
                if closing != name {
                    return Err(self.error_at(
                        close_at,
                        format!("expected </{name}>, found </{closing}>"),
                    ));
                }
                return Ok(node);
            }

            if self.starts_with("<!--") {
                self.skip_comment()?;
            } else if self.starts_with("<![CDATA[") {
                let text = self.parse_cdata()?;
                if !text.is_empty() {
                    node.push_child(MarkupNode::text(text));
                }
            } else if self.starts_with("<") {
                let child = self.parse_element()?;
                node.push_child(child);
            } else {
                let text_at = self.pos;
                let raw = self.take_until('<');
                if !raw.trim().is_empty() {
                    node.push_child(MarkupNode::text(decode_entities(raw, text_at)?));
                }
            }
        }
    }

    fn parse_attribute(&mut self) -> ParseResult<(&'s str, String)> {
        let name_at = self.pos;
        let name = self.parse_name();
        if name.is_empty() {
            return Err(self.error("expected an attribute name"));
        }

        self.skip_whitespace();
        if !self.eat("=") {
            return Err(self.error(format!("expected '=' after attribute '{name}'")));
        }
        self.skip_whitespace();

        let quote = match self.peek() {
            Some(q @ ('"' | '\'')) => q,
            _ => return Err(self.error(format!("attribute '{name}' value must be quoted"))),
        };
        self.pos += 1;

        let value_at = self.pos;
        let raw = self.take_until(quote);
        if self.at_end() {
            return Err(self.error_at(name_at, format!("unterminated value of attribute '{name}'")));
        }
        self.pos += 1;

        Ok((name, decode_entities(raw, value_at)?))
    }

    fn parse_cdata(&mut self) -> ParseResult<String> {
        let start = self.pos;
        self.pos += "<![CDATA[".len();
        match self.rest().find("]]>") {
            Some(end) => {
                let text = &self.input[self.pos..self.pos + end];
                self.pos += end + 3;
                Ok(text.to_string())
            }
            None => Err(self.error_at(start, "unterminated CDATA section")),
        }
    }

    /// Whitespace, comments and prologs between top-level constructs.
    fn skip_misc(&mut self) -> ParseResult<()> {
        loop {
            self.skip_whitespace();
            if self.starts_with("<!--") {
                self.skip_comment()?;
            } else if self.starts_with("<?") {
                self.skip_past("?>", "unterminated processing instruction")?;
            } else if self.starts_with("<!") {
                self.skip_past(">", "unterminated declaration")?;
            } else {
                return Ok(());
            }
        }
    }

    fn skip_comment(&mut self) -> ParseResult<()> {
        self.skip_past("-->", "unterminated comment")
    }

    fn skip_past(&mut self, terminator: &str, reason: &str) -> ParseResult<()> {
        let start = self.pos;
        match self.rest().find(terminator) {
            Some(end) => {
                self.pos += end + terminator.len();
                Ok(())
            }
            None => Err(self.error_at(start, reason)),
        }
    }

    fn parse_name(&mut self) -> &'s str {
        let input = self.input;
        let start = self.pos;
        for (offset, c) in self.rest().char_indices() {
            if !is_name_char(c) {
                self.pos = start + offset;
                return &input[start..self.pos];
            }
        }
        self.pos = input.len();
        &input[start..]
    }

    fn take_until(&mut self, stop: char) -> &'s str {
        let input = self.input;
        let start = self.pos;
        self.pos = self
            .rest()
            .find(stop)
            .map_or(input.len(), |offset| start + offset);
        &input[start..self.pos]
    }

    fn skip_whitespace(&mut self) {
        let trimmed = self.rest().trim_start();
        self.pos = self.input.len() - trimmed.len();
    }

    fn expect(&mut self, token: &str) -> ParseResult<()> {
        if self.eat(token) {
            Ok(())
        } else {
            Err(self.error(format!("expected '{token}'")))
        }
    }

    fn eat(&mut self, token: &str) -> bool {
        if self.starts_with(token) {
            self.pos += token.len();
            true
        } else {
            false
        }
    }

    fn starts_with(&self, token: &str) -> bool {
        self.rest().starts_with(token)
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn rest(&self) -> &'s str {
        &self.input[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn error(&self, reason: impl Into<String>) -> DomainError {
        self.error_at(self.pos, reason)
    }

    fn error_at(&self, offset: usize, reason: impl Into<String>) -> DomainError {
        DomainError::InvalidMarkup {
            offset,
            reason: reason.into(),
        }
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | ':' | '.')
}

/// Decode the five predefined entities and numeric character references.
///
/// `offset` is the byte position of `raw` in the document, used for errors.
pub(crate) fn decode_entities(raw: &str, offset: usize) -> ParseResult<String> {
    if !raw.contains('&') {
        return Ok(raw.to_string());
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let entity_at = offset + (raw.len() - rest.len()) + amp;
        let after = &rest[amp + 1..];

        let Some(semi) = after.find(';') else {
            return Err(DomainError::InvalidMarkup {
                offset: entity_at,
                reason: "unterminated entity reference".into(),
            });
        };
        let entity = &after[..semi];
        let decoded = match entity {
            "amp" => Some('&'),
            "lt" => Some('<'),
            "gt" => Some('>'),
            "quot" => Some('"'),
            "apos" => Some('\''),
            _ => numeric_reference(entity),
        };
        match decoded {
            Some(c) => out.push(c),
            None => {
                return Err(DomainError::InvalidMarkup {
                    offset: entity_at,
                    reason: format!("unknown entity '&{entity};'"),
                });
            }
        }
        rest = &after[semi + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

fn numeric_reference(entity: &str) -> Option<char> {
    let digits = entity.strip_prefix('#')?;
    let code = match digits.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse().ok()?,
    };
    char::from_u32(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nested(depth: usize) -> String {
        format!("{}{}", "<a>".repeat(depth), "</a>".repeat(depth))
    }

    #[test]
    fn deep_nesting_is_rejected_without_recursing_further() {
        let err = Parser::new(&nested(10_000)).parse_document().unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidMarkup {
                offset: 3 * MAX_DEPTH,
                reason: format!("nesting exceeds {MAX_DEPTH} levels"),
            }
        );
    }

    #[test]
    fn nesting_up_to_the_limit_parses() {
        let root = Parser::new(&nested(4)).with_max_depth(4).parse_document().unwrap();
        assert_eq!(root.depth(), 4);

        let err = Parser::new(&nested(5)).with_max_depth(4).parse_document().unwrap_err();
        assert!(matches!(err, DomainError::InvalidMarkup { offset: 12, .. }));
    }

    #[test]
    fn decodes_predefined_entities() {
        assert_eq!(
            decode_entities("a &lt;b&gt; &amp; &quot;c&quot; &apos;d&apos;", 0).unwrap(),
            "a <b> & \"c\" 'd'"
        );
    }

    #[test]
    fn decodes_numeric_references() {
        assert_eq!(decode_entities("&#65;&#x42;", 0).unwrap(), "AB");
    }

    #[test]
    fn unknown_entity_reports_offset() {
        let err = decode_entities("ok &nbsp;", 10).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidMarkup {
                offset: 13,
                reason: "unknown entity '&nbsp;'".into(),
            }
        );
    }

    #[test]
    fn names_stop_at_delimiters() {
        let mut parser = Parser::new("data-key=\"x\"");
        assert_eq!(parser.parse_name(), "data-key");
        assert!(parser.starts_with("="));
    }
}
