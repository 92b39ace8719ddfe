//! Styled text rendering of a [`Screen`].
//!
//! Layout lives in a minijinja template; colors live in a [`Theme`] and are applied
//! through the template's `style` filter, so the same template serves colored and
//! plain output. With color off the filter passes text through untouched.
//!
//! Template filters:
//!
//! - `style(name)`: apply the named theme style. Unknown names are flagged with
//!   `(!?)` so a typo in the template shows up in the output instead of silently
//!   dropping the style.
//! - `fit(width)`: truncate to a display width, ending in `…`.

use super::screen::Screen;
use crate::error::Result;
use console::Style;
use minijinja::{Environment, Value};
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Columns taken by everything on a row except the todo text.
const ROW_CHROME_WIDTH: usize = 24;
const MIN_TEXT_WIDTH: usize = 10;

const LIST_TEMPLATE_NAME: &str = "list";
const LIST_TEMPLATE: &str = r#"{{ title | style("title") }}
{% if empty_message %}
  {{ empty_message | style("empty") }}
{% else %}
{% for row in rows %}
  {{ ("[x]" if row.complete else "[ ]") | style("checkbox") }} {{ row.id | style("id") }}  {{ row.text | fit(text_width) | style("complete" if row.complete else "text") }}  {{ ("[" ~ row.delete_label ~ "]") | style("delete") }}
{% endfor %}
{% endif %}
{{ ("> " ~ placeholder ~ " [" ~ submit_label ~ "]") | style("hint") }}"#;

/// Named styles for the `style` filter.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a named style.
    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static TODO_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::new()
        .add("title", Style::new().bold().underlined())
        .add("hint", Style::new().dim().italic())
        .add("empty", Style::new().italic())
        .add("checkbox", Style::new().cyan())
        .add("id", Style::new().yellow())
        .add("text", Style::new())
        .add("complete", Style::new().dim().strikethrough())
        .add("delete", Style::new().red())
});

#[derive(Serialize)]
struct ListContext<'a> {
    #[serde(flatten)]
    screen: &'a Screen,
    text_width: usize,
}

/// Renders screens with a fixed theme, width and color setting.
pub struct Renderer {
    env: Environment<'static>,
    line_width: usize,
}

impl Renderer {
    pub fn new(theme: Theme, use_color: bool, line_width: usize) -> Result<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_filter("style", move |value: Value, name: String| -> String {
            theme.apply(&name, &value.to_string(), use_color)
        });
        env.add_filter("fit", |value: String, width: usize| -> String {
            truncate_to_width(&value, width)
        });
        env.add_template(LIST_TEMPLATE_NAME, LIST_TEMPLATE)?;
        Ok(Self { env, line_width })
    }

    pub fn render(&self, screen: &Screen) -> Result<String> {
        let text_width = self
            .line_width
            .saturating_sub(ROW_CHROME_WIDTH)
            .max(MIN_TEXT_WIDTH);
        let tmpl = self.env.get_template(LIST_TEMPLATE_NAME)?;
        let output = tmpl.render(ListContext { screen, text_width })?;
        Ok(output)
    }
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
