use crate::types::BoxModel;

const BORDER_STYLES: [&str; 10] = [
    "none", "hidden", "dotted", "dashed", "solid", "double", "groove", "ridge", "inset", "outset",
];

/// Parsed `style` attribute. Later declarations win, as in a browser.
#[derive(Debug, Clone, Default)]
pub(crate) struct Declarations {
    entries: Vec<(String, String)>,
}

impl Declarations {
    pub(crate) fn parse(style: &str) -> Self {
        let mut entries = Vec::new();
        for decl in style.split(';') {
            let Some((name, value)) = decl.split_once(':') else {
                continue;
            };
            let name = name.trim().to_ascii_lowercase();
            let value = value.trim().trim_end_matches("!important").trim();
            if name.is_empty() || value.is_empty() {
                continue;
            }
            entries.push((name, value.to_string()));
        }
        Self { entries }
    }

    pub(crate) fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn owned(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }

    pub(crate) fn box_model(&self) -> BoxModel {
        let [margin_top, margin_right, margin_bottom, margin_left] = self.sides("margin");
        let [padding_top, padding_right, padding_bottom, padding_left] = self.sides("padding");
        let (border_width, border, border_color) = self.border();
        BoxModel {
            margin_top,
            margin_right,
            margin_bottom,
            margin_left,
            padding_top,
            padding_right,
            padding_bottom,
            padding_left,
            border,
            border_color,
            border_width,
            border_radius: self.owned("border-radius"),
            text_align: self.owned("text-align"),
            min_height: self.owned("min-height"),
            background_color: self.owned("background-color"),
        }
    }

    /// `justify-content` in a flex column maps to the vertical alignment the
    /// authoring tool exposes.
    pub(crate) fn vertical_alignment(&self) -> Option<String> {
        let value = match self.get("justify-content")? {
            "flex-start" | "start" => "top",
            "center" => "middle",
            "flex-end" | "end" => "bottom",
            _ => return None,
        };
        Some(value.to_string())
    }

    pub(crate) fn background_image_url(&self) -> Option<String> {
        self.get("background-image").and_then(css_url)
    }

    // Side-specific declarations override the shorthand regardless of order.
    fn sides(&self, property: &str) -> [Option<String>; 4] {
        let mut out = self
            .get(property)
            .map(expand_shorthand)
            .unwrap_or_default();
        for (slot, side) in out.iter_mut().zip(["top", "right", "bottom", "left"]) {
            if let Some(value) = self.get(&format!("{property}-{side}")) {
                *slot = Some(value.to_string());
            }
        }
        out
    }

    // Returns (width, style, color).
    fn border(&self) -> (Option<String>, Option<String>, Option<String>) {
        let (mut width, mut style, mut color) = (None, None, None);
        if let Some(shorthand) = self.get("border") {
            for token in split_css_values(shorthand) {
                let token = token.as_str();
                if BORDER_STYLES.contains(&token.to_ascii_lowercase().as_str()) {
                    style = Some(token.to_string());
                } else if token.starts_with(|c: char| c.is_ascii_digit() || c == '.')
                    || matches!(token, "thin" | "medium" | "thick")
                {
                    width = Some(token.to_string());
                } else {
                    color = Some(token.to_string());
                }
            }
        }
        (
            self.owned("border-width").or(width),
            self.owned("border-style").or(style),
            self.owned("border-color").or(color),
        )
    }
}

/// Expands a 1–4 value box shorthand into top/right/bottom/left.
fn expand_shorthand(value: &str) -> [Option<String>; 4] {
    let parts: Vec<String> = split_css_values(value);
    let pick = |i: usize| parts.get(i).cloned();
    match parts.len() {
        1 => [pick(0), pick(0), pick(0), pick(0)],
        2 => [pick(0), pick(1), pick(0), pick(1)],
        3 => [pick(0), pick(1), pick(2), pick(1)],
        4 => [pick(0), pick(1), pick(2), pick(3)],
        _ => Default::default(),
    }
}

// Splits on whitespace outside parentheses so `calc(1px + 2px)` stays whole.
fn split_css_values(value: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    for ch in value.chars() {
        match ch {
            '(' => {
                depth += 1;
                current.push(ch);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            c if c.is_whitespace() && depth == 0 => {
                if !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// Extracts the locator from `url(...)`, with or without quotes.
pub(crate) fn css_url(value: &str) -> Option<String> {
    let start = value.find("url(")? + 4;
    let end = start + value[start..].find(')')?;
    let inner = value[start..end]
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim();
    if inner.is_empty() {
        None
    } else {
        Some(inner.to_string())
    }
}
