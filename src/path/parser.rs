// Template scanner using recursive descent
//
// Splits "/users/{id}/posts/{post}" into literal segments and parameters.
// `{{` and `}}` escape literal braces.

use crate::error::{PathError, Result};

use super::param::Param;

pub struct TemplateParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> TemplateParser<'a> {
    /// Returns the literal segments and the parameters between them.
    /// There is always exactly one more segment than parameters.
    pub fn parse(template: &'a str) -> Result<(Vec<String>, Vec<Param>)> {
        let mut parser = Self {
            input: template,
            pos: 0,
        };
        parser.parse_template()
    }

    fn parse_template(&mut self) -> Result<(Vec<String>, Vec<Param>)> {
        let mut segments = Vec::new();
        let mut params = Vec::new();
        let mut literal_buf = String::new();

        while self.pos < self.input.len() {
            match (self.peek_char(), self.peek_ahead(1)) {
                (Some('{'), Some('{')) => {
                    self.pos += 2;
                    literal_buf.push('{');
                }
                (Some('{'), _) => {
                    // Close the current segment, even if empty
                    segments.push(std::mem::take(&mut literal_buf));
                    params.push(self.parse_param()?);
                }
                (Some('}'), Some('}')) => {
                    self.pos += 2;
                    literal_buf.push('}');
                }
                (Some('}'), _) => {
                    return Err(self.error("Unexpected closing brace"));
                }
                _ => literal_buf.push(self.consume_char()?),
            }
        }

        segments.push(literal_buf);
        Ok((segments, params))
    }

    fn parse_param(&mut self) -> Result<Param> {
        self.expect_char('{')?;
        self.skip_whitespace();
        let name = self.parse_param_name()?;
        self.skip_whitespace();
        self.expect_char('}')?;

        Ok(Param::new(name))
    }

    fn parse_param_name(&mut self) -> Result<String> {
        let start = self.pos;
        let mut name = String::new();

        while let Some(ch) = self.peek_char() {
            if ch.is_alphanumeric() || ch == '_' {
                name.push(self.consume_char()?);
            } else if ch == '}' || ch.is_whitespace() {
                break;
            } else {
                return Err(self.error(format!("Invalid character '{}' in parameter name", ch)));
            }
        }

        if name.is_empty() {
            return Err(PathError::Parse {
                message: "Empty parameter name".to_string(),
                position: start,
            });
        }

        Ok(name)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() {
                self.pos += ch.len_utf8();
            } else {
                break;
            }
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_ahead(&self, offset: usize) -> Option<char> {
        self.input[self.pos..].chars().nth(offset)
    }

    fn consume_char(&mut self) -> Result<char> {
        let ch = self
            .peek_char()
            .ok_or_else(|| self.error("Unexpected end of input"))?;
        self.pos += ch.len_utf8();
        Ok(ch)
    }

    fn expect_char(&mut self, expected: char) -> Result<()> {
        match self.peek_char() {
            Some(ch) if ch == expected => {
                self.consume_char()?;
                Ok(())
            }
            Some(ch) => Err(self.error(format!("Expected '{}' but found '{}'", expected, ch))),
            None => Err(self.error(format!("Expected '{}' but found end of input", expected))),
        }
    }

    fn error(&self, message: impl Into<String>) -> PathError {
        PathError::Parse {
            message: message.into(),
            position: self.pos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(params: &[Param]) -> Vec<&str> {
        params.iter().map(Param::key).collect()
    }

    #[test]
    fn test_parse_without_params() {
        let (segments, params) = TemplateParser::parse("/foo/bar").unwrap();
        assert_eq!(segments, vec!["/foo/bar"]);
        assert!(params.is_empty());
    }

    #[test]
    fn test_parse_empty_template() {
        let (segments, params) = TemplateParser::parse("").unwrap();
        assert_eq!(segments, vec![""]);
        assert!(params.is_empty());
    }

    #[test]
    fn test_parse_multiple_params() {
        let (segments, params) = TemplateParser::parse("/foo/{hoge}/bar/{fuga}").unwrap();
        assert_eq!(segments, vec!["/foo/", "/bar/", ""]);
        assert_eq!(keys(&params), vec!["hoge", "fuga"]);
    }

    #[test]
    fn test_parse_leading_and_adjacent_params() {
        let (segments, params) = TemplateParser::parse("{a}{b}.json").unwrap();
        assert_eq!(segments, vec!["", "", ".json"]);
        assert_eq!(keys(&params), vec!["a", "b"]);
    }

    #[test]
    fn test_parse_whitespace_inside_braces() {
        let (_, params) = TemplateParser::parse("/{ id }").unwrap();
        assert_eq!(keys(&params), vec!["id"]);
    }

    #[test]
    fn test_parse_escaped_braces() {
        let (segments, params) = TemplateParser::parse("/{{literal}}/{id}").unwrap();
        assert_eq!(segments, vec!["/{literal}/", ""]);
        assert_eq!(keys(&params), vec!["id"]);
    }

    #[test]
    fn test_parse_unicode_literal() {
        let (segments, params) = TemplateParser::parse("/café/{nom}/ü").unwrap();
        assert_eq!(segments, vec!["/café/", "/ü"]);
        assert_eq!(keys(&params), vec!["nom"]);
    }

    #[test]
    fn test_parse_empty_name_fails() {
        let err = TemplateParser::parse("/foo/{}").unwrap_err();
        assert!(err.to_string().contains("Empty parameter name"));
    }

    #[test]
    fn test_parse_optional_marker_fails() {
        let err = TemplateParser::parse("/foo/{id?}").unwrap_err();
        assert!(err.to_string().contains("Invalid character '?'"));
    }

    #[test]
    fn test_parse_unterminated_fails() {
        let err = TemplateParser::parse("/foo/{id").unwrap_err();
        assert!(err.to_string().contains("end of input"));
    }

    #[test]
    fn test_parse_stray_closing_brace_fails() {
        let err = TemplateParser::parse("/foo}").unwrap_err();
        assert_eq!(
            err,
            PathError::Parse {
                message: "Unexpected closing brace".to_string(),
                position: 4,
            }
        );
    }

    #[test]
    fn test_parse_space_in_name_fails() {
        assert!(TemplateParser::parse("/{first name}").is_err());
    }
}
