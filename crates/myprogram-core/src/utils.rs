//! Greeting, input validation and date helpers

use chrono::{Local, NaiveDate};

/// Shortest input accepted by [`is_valid_input`]
pub const DEFAULT_MIN_LENGTH: usize = 1;

/// Longest input accepted by [`is_valid_input`]
pub const DEFAULT_MAX_LENGTH: usize = 100;

/// A value handed to the input validator.
///
/// Only [`Input::Text`] can ever pass validation; the other variants exist so
/// callers holding numbers or missing values get `false` instead of an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input<'a> {
    Text(&'a str),
    Integer(i64),
    Float(f64),
    Absent,
}

impl<'a> Input<'a> {
    /// The text payload, if this is a text value
    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

impl<'a> From<Option<&'a str>> for Input<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(Self::Absent, Self::Text)
    }
}

impl From<i64> for Input<'_> {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Input<'_> {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for Input<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Format the greeting printed by `myprogram greet`
pub fn format_greeting(name: &str) -> String {
    format!("Hello, {}! Welcome to MyProgram.", name)
}

/// Check that `value` is text whose length lies in `min_length..=max_length`.
///
/// Length is counted in characters, not bytes.
pub fn validate_input<'a>(
    value: impl Into<Input<'a>>,
    min_length: usize,
    max_length: usize,
) -> bool {
    value
        .into()
        .as_text()
        .is_some_and(|text| (min_length..=max_length).contains(&text.chars().count()))
}

/// [`validate_input`] with the default 1..=100 bounds
pub fn is_valid_input<'a>(value: impl Into<Input<'a>>) -> bool {
    validate_input(value, DEFAULT_MIN_LENGTH, DEFAULT_MAX_LENGTH)
}

/// Format a date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's local date as `YYYY-MM-DD`
pub fn current_date() -> String {
    format_date(Local::now().date_naive())
}
