//! Placeholder substitution for templates.
//!
//! Placeholders look like `{{name}}` and resolve against the four
//! [`RenderContext`] fields. Substitution is a single pass: replaced text is
//! never scanned again, so a field value containing `{{year}}` stays literal
//! in the output. Single braces pass through untouched, which keeps shell
//! `${...}` expansions and C-family braces out of the escaping business.

use crate::error::{Result, SkeletonError};

/// Metadata available to template substitution, immutable for one run.
#[derive(Clone, Debug)]
pub struct RenderContext {
    pub name: String,
    pub author: String,
    pub license: String,
    pub year: String,
}

impl RenderContext {
    pub fn new(name: impl Into<String>, author: impl Into<String>, license: impl Into<String>, year: i32) -> Self {
        Self {
            name: name.into(),
            author: author.into(),
            license: license.into(),
            year: year.to_string(),
        }
    }

    fn field(&self, key: &str) -> Option<&str> {
        match key {
            "name" => Some(&self.name),
            "author" => Some(&self.author),
            "license" => Some(&self.license),
            "year" => Some(&self.year),
            _ => None,
        }
    }
}

/// Substitute every `{{key}}` in `template` with the matching context field.
///
/// `template_id` only feeds error messages. An unknown key or an unterminated
/// `{{` is a hard [`SkeletonError::TemplateMalformed`] failure.
pub fn render(template_id: &str, template: &str, ctx: &RenderContext) -> Result<String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            return Err(SkeletonError::TemplateMalformed {
                template: template_id.to_owned(),
                placeholder: format!("{{{{{}", after.chars().take(24).collect::<String>()),
            });
        };
        let key = &after[..end];
        let value = ctx
            .field(key)
            .ok_or_else(|| SkeletonError::TemplateMalformed {
                template: template_id.to_owned(),
                placeholder: key.to_owned(),
            })?;
        out.push_str(value);
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> RenderContext {
        RenderContext::new("probe", "Ada Lovelace", "GNU GPLv3", 2026)
    }

    #[test]
    fn substitutes_all_four_fields() {
        let rendered = render(
            "t",
            "# {{name}} by {{author}}, {{year}}, under the {{license}}",
            &ctx(),
        )
        .unwrap();
        assert_eq!(
            rendered,
            "# probe by Ada Lovelace, 2026, under the GNU GPLv3"
        );
    }

    #[test]
    fn single_braces_are_literal() {
        let rendered = render("t", "main() { echo ${1}; }", &ctx()).unwrap();
        assert_eq!(rendered, "main() { echo ${1}; }");
    }

    #[test]
    fn unknown_placeholder_is_malformed() {
        let err = render("py", "hello {{email}}", &ctx()).unwrap_err();
        match err {
            SkeletonError::TemplateMalformed {
                template,
                placeholder,
            } => {
                assert_eq!(template, "py");
                assert_eq!(placeholder, "email");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unterminated_placeholder_is_malformed() {
        let err = render("t", "broken {{name", &ctx()).unwrap_err();
        assert!(matches!(err, SkeletonError::TemplateMalformed { .. }));
    }

    #[test]
    fn substitution_is_not_recursive() {
        let mut context = ctx();
        context.author = "{{year}}".to_owned();
        let rendered = render("t", "by {{author}}", &context).unwrap();
        assert_eq!(rendered, "by {{year}}");
    }

    #[test]
    fn repeated_placeholders_each_resolve() {
        let rendered = render("t", "{{name}}/{{name}}.log", &ctx()).unwrap();
        assert_eq!(rendered, "probe/probe.log");
    }
}
