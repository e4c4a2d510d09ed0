//! Field checker shared by the campaign and internal validators.
//!
//! Walks a `serde_json::Value` while building the typed result, and records
//! every issue with its dotted path instead of stopping at the first one.
//! Issues come out in traversal order: depth-first, in the order the
//! validator asks for fields.

use crate::error::{IssueCode, ValidationError, ValidationIssue};
use serde_json::{Map, Value};

pub type Object = Map<String, Value>;

/// How forgiving the checker is about loosely-typed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `null` means absent and numeric strings count as numbers.
    Lenient,
    /// `null` is a type error and numbers must be JSON numbers.
    Strict,
}

pub struct Checker {
    mode: Mode,
    path: Vec<String>,
    issues: Vec<ValidationIssue>,
}

impl Checker {
    pub fn new(mode: Mode) -> Self {
        Self { mode, path: Vec::new(), issues: Vec::new() }
    }

    pub fn lenient() -> Self {
        Self::new(Mode::Lenient)
    }

    pub fn strict() -> Self {
        Self::new(Mode::Strict)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    /// Consume the checker, yielding `value` only when nothing was reported.
    pub fn finish<T>(self, value: T) -> Result<T, ValidationError> {
        if self.issues.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError::new(self.issues))
        }
    }

    /// Dotted path of `key` below the current position.
    pub fn path_to(&self, key: &str) -> String {
        let mut parts: Vec<&str> = self.path.iter().map(String::as_str).collect();
        if !key.is_empty() {
            parts.push(key);
        }
        parts.join(".")
    }

    pub fn report(&mut self, key: &str, code: IssueCode, message: impl Into<String>) {
        let path = self.path_to(key);
        self.issues.push(ValidationIssue { path, message: message.into(), code });
    }

    /// Run `f` with `segment` pushed onto the current path.
    pub fn within<T>(&mut self, segment: impl Into<String>, f: impl FnOnce(&mut Self) -> T) -> T {
        self.path.push(segment.into());
        let out = f(self);
        self.path.pop();
        out
    }

    /// Require the document root to be an object.
    pub fn root<'v>(&mut self, raw: &'v Value) -> Option<&'v Object> {
        match raw.as_object() {
            Some(obj) => Some(obj),
            None => {
                self.report("", IssueCode::InvalidType, expected("object", raw));
                None
            }
        }
    }

    fn is_missing(&self, obj: &Object, key: &str) -> bool {
        match obj.get(key) {
            None => true,
            Some(Value::Null) => self.mode == Mode::Lenient,
            Some(_) => false,
        }
    }

    /// Look up `key` and convert it with `extract`, reporting a type issue
    /// when the value has the wrong shape.
    fn field<'v, T>(
        &mut self,
        obj: &'v Object,
        key: &str,
        what: &str,
        extract: impl FnOnce(&'v Value, Mode) -> Option<T>,
    ) -> Option<T> {
        if self.is_missing(obj, key) {
            return None;
        }
        let value = obj.get(key)?;
        match extract(value, self.mode) {
            Some(out) => Some(out),
            None => {
                self.report(key, IssueCode::InvalidType, expected(what, value));
                None
            }
        }
    }

    fn required(&mut self, obj: &Object, key: &str) -> bool {
        if self.is_missing(obj, key) {
            self.report(key, IssueCode::InvalidType, "Required");
            false
        } else {
            true
        }
    }

    pub fn opt_str(&mut self, obj: &Object, key: &str) -> Option<String> {
        self.field(obj, key, "string", |v, _| v.as_str().map(str::to_string))
    }

    pub fn req_str(&mut self, obj: &Object, key: &str) -> String {
        if !self.required(obj, key) {
            return String::new();
        }
        self.opt_str(obj, key).unwrap_or_default()
    }

    /// Required string that must hold at least one non-whitespace character.
    pub fn req_text(&mut self, obj: &Object, key: &str) -> String {
        if !self.required(obj, key) {
            return String::new();
        }
        match self.opt_str(obj, key) {
            Some(text) if text.trim().is_empty() => {
                self.report(
                    key,
                    IssueCode::TooSmall,
                    "String must contain at least 1 character(s)",
                );
                text
            }
            Some(text) => text,
            None => String::new(),
        }
    }

    pub fn opt_url(&mut self, obj: &Object, key: &str) -> Option<String> {
        let text = self.opt_str(obj, key)?;
        if url::Url::parse(&text).is_err() {
            self.report(key, IssueCode::InvalidString, "Invalid url");
        }
        Some(text)
    }

    pub fn req_url(&mut self, obj: &Object, key: &str) -> String {
        if !self.required(obj, key) {
            return String::new();
        }
        self.opt_url(obj, key).unwrap_or_default()
    }

    pub fn opt_bool(&mut self, obj: &Object, key: &str) -> Option<bool> {
        self.field(obj, key, "boolean", |v, _| v.as_bool())
    }

    pub fn opt_number(&mut self, obj: &Object, key: &str) -> Option<f64> {
        self.field(obj, key, "number", number)
    }

    pub fn opt_integer(&mut self, obj: &Object, key: &str) -> Option<i64> {
        self.field(obj, key, "integer", integer)
    }

    /// Pick one of `choices` by its string tag.
    pub fn opt_choice<T: Copy>(
        &mut self,
        obj: &Object,
        key: &str,
        choices: &[(&str, T)],
    ) -> Option<T> {
        let tag = self.opt_str(obj, key)?;
        match choices.iter().find(|(name, _)| *name == tag) {
            Some((_, choice)) => Some(*choice),
            None => {
                let allowed = choices
                    .iter()
                    .map(|(name, _)| format!("'{}'", name))
                    .collect::<Vec<_>>()
                    .join(" | ");
                self.report(
                    key,
                    IssueCode::InvalidEnumValue,
                    format!("Invalid enum value. Expected {}, received '{}'", allowed, tag),
                );
                None
            }
        }
    }

    pub fn opt_str_list(&mut self, obj: &Object, key: &str) -> Option<Vec<String>> {
        self.opt_items(obj, key, "string", |v, _| v.as_str().map(str::to_string))
    }

    pub fn opt_integer_list(&mut self, obj: &Object, key: &str) -> Option<Vec<i64>> {
        self.opt_items(obj, key, "integer", integer)
    }

    pub fn req_str_list(&mut self, obj: &Object, key: &str) -> Vec<String> {
        if !self.required(obj, key) {
            return Vec::new();
        }
        self.opt_str_list(obj, key).unwrap_or_default()
    }

    fn opt_items<'v, T>(
        &mut self,
        obj: &'v Object,
        key: &str,
        what: &str,
        extract: impl Fn(&'v Value, Mode) -> Option<T>,
    ) -> Option<Vec<T>> {
        let items = self.field(obj, key, "array", |v, _| v.as_array())?;
        let mode = self.mode;
        let mut out = Vec::with_capacity(items.len());
        self.within(key, |c| {
            for (index, item) in items.iter().enumerate() {
                match extract(item, mode) {
                    Some(value) => out.push(value),
                    None => c.report(&index.to_string(), IssueCode::InvalidType, expected(what, item)),
                }
            }
        });
        Some(out)
    }

    /// Descend into an optional nested object.
    pub fn opt_object<T>(
        &mut self,
        obj: &Object,
        key: &str,
        f: impl FnOnce(&mut Self, &Object) -> T,
    ) -> Option<T> {
        let nested = self.field(obj, key, "object", |v, _| v.as_object())?;
        Some(self.within(key, |c| f(c, nested)))
    }

    /// Descend into a required nested object; reports `Required` when absent.
    pub fn req_object<T: Default>(
        &mut self,
        obj: &Object,
        key: &str,
        f: impl FnOnce(&mut Self, &Object) -> T,
    ) -> T {
        if !self.required(obj, key) {
            return T::default();
        }
        self.opt_object(obj, key, f).unwrap_or_default()
    }

    /// Optional array whose elements are objects, each converted with `f`.
    pub fn opt_list<T>(
        &mut self,
        obj: &Object,
        key: &str,
        mut f: impl FnMut(&mut Self, &Object) -> T,
    ) -> Option<Vec<T>> {
        let items = self.field(obj, key, "array", |v, _| v.as_array())?;
        let mut out = Vec::with_capacity(items.len());
        self.within(key, |c| {
            for (index, item) in items.iter().enumerate() {
                match item.as_object() {
                    Some(element) => out.push(c.within(index.to_string(), |c| f(c, element))),
                    None => c.report(&index.to_string(), IssueCode::InvalidType, expected("object", item)),
                }
            }
        });
        Some(out)
    }

    pub fn req_list<T>(
        &mut self,
        obj: &Object,
        key: &str,
        f: impl FnMut(&mut Self, &Object) -> T,
    ) -> Vec<T> {
        if !self.required(obj, key) {
            return Vec::new();
        }
        self.opt_list(obj, key, f).unwrap_or_default()
    }
}

/// JSON type name used in issue messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn expected(what: &str, got: &Value) -> String {
    format!("Expected {}, received {}", what, json_kind(got))
}

fn number(value: &Value, mode: Mode) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if mode == Mode::Lenient => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn integer(value: &Value, mode: Mode) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) if mode == Mode::Lenient => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Object {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_paths_follow_nesting() {
        let obj = object(json!({ "outer": { "inner": 5 } }));
        let mut checker = Checker::strict();
        checker.opt_object(&obj, "outer", |c, o| c.opt_str(o, "inner"));
        let err = checker.finish(()).unwrap_err();
        assert_eq!(err.paths(), vec!["outer.inner"]);
        assert_eq!(err.issues[0].message, "Expected string, received number");
    }

    #[test]
    fn test_null_handling_depends_on_mode() {
        let obj = object(json!({ "name": null }));

        let mut lenient = Checker::lenient();
        assert_eq!(lenient.opt_str(&obj, "name"), None);
        assert!(lenient.finish(()).is_ok());

        let mut strict = Checker::strict();
        assert_eq!(strict.opt_str(&obj, "name"), None);
        let err = strict.finish(()).unwrap_err();
        assert_eq!(err.issues[0].message, "Expected string, received null");
    }

    #[test]
    fn test_lenient_numbers_accept_numeric_strings() {
        let obj = object(json!({ "width": "1080", "ratio": "1.5", "height": 720.0 }));
        let mut checker = Checker::lenient();
        assert_eq!(checker.opt_integer(&obj, "width"), Some(1080));
        assert_eq!(checker.opt_number(&obj, "ratio"), Some(1.5));
        assert_eq!(checker.opt_integer(&obj, "height"), Some(720));
        assert!(checker.finish(()).is_ok());

        let mut strict = Checker::strict();
        assert_eq!(strict.opt_number(&obj, "ratio"), None);
        assert!(strict.finish(()).is_err());
    }

    #[test]
    fn test_required_text_rejects_blank() {
        let obj = object(json!({ "title": "   " }));
        let mut checker = Checker::strict();
        checker.req_text(&obj, "title");
        checker.req_text(&obj, "missing");
        let err = checker.finish(()).unwrap_err();
        assert_eq!(err.issues[0].code, IssueCode::TooSmall);
        assert_eq!(err.issues[1].code, IssueCode::InvalidType);
        assert_eq!(err.issues[1].message, "Required");
    }

    #[test]
    fn test_list_elements_report_their_index() {
        let obj = object(json!({ "items": [{ "a": "x" }, 3, { "a": 1 }] }));
        let mut checker = Checker::strict();
        let items = checker.opt_list(&obj, "items", |c, o| c.req_str(o, "a")).unwrap();
        assert_eq!(items.len(), 2);
        let err = checker.finish(()).unwrap_err();
        assert_eq!(err.paths(), vec!["items.1", "items.2.a"]);
    }

    #[test]
    fn test_url_format_checked() {
        let obj = object(json!({ "good": "https://example.com/a.png", "bad": "not a url" }));
        let mut checker = Checker::lenient();
        checker.opt_url(&obj, "good");
        checker.opt_url(&obj, "bad");
        let err = checker.finish(()).unwrap_err();
        assert_eq!(err.paths(), vec!["bad"]);
        assert_eq!(err.issues[0].code, IssueCode::InvalidString);
    }

    #[test]
    fn test_choice_reports_allowed_values() {
        let obj = object(json!({ "variant": "tertiary" }));
        let mut checker = Checker::strict();
        let picked = checker.opt_choice(&obj, "variant", &[("primary", 1), ("secondary", 2)]);
        assert_eq!(picked, None);
        let err = checker.finish(()).unwrap_err();
        assert_eq!(err.issues[0].code, IssueCode::InvalidEnumValue);
        assert!(err.issues[0].message.contains("'primary' | 'secondary'"));
    }
}
