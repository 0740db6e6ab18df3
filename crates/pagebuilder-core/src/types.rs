use serde::Serialize;

use crate::shortcode::Shortcode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    Row,
    ColumnGroup,
    ColumnLine,
    Column,
    Banner,
    Slide,
    Slider,
    Image,
    Text,
    Html,
    Heading,
    Buttons,
    ButtonItem,
    Divider,
    Block,
    Products,
}

impl ContentKind {
    /// Maps a marker attribute value onto a known kind. Unknown values yield
    /// `None` and are rendered as raw markup by the dispatcher.
    pub fn from_marker(value: &str) -> Option<Self> {
        let kind = match value.trim() {
            "row" => Self::Row,
            "column-group" => Self::ColumnGroup,
            "column-line" => Self::ColumnLine,
            "column" => Self::Column,
            "banner" => Self::Banner,
            "slide" => Self::Slide,
            "slider" => Self::Slider,
            "image" => Self::Image,
            "text" => Self::Text,
            "html" => Self::Html,
            "heading" => Self::Heading,
            "buttons" => Self::Buttons,
            "button-item" => Self::ButtonItem,
            "divider" => Self::Divider,
            "block" => Self::Block,
            "products" => Self::Products,
            _ => return None,
        };
        Some(kind)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Row => "row",
            Self::ColumnGroup => "column-group",
            Self::ColumnLine => "column-line",
            Self::Column => "column",
            Self::Banner => "banner",
            Self::Slide => "slide",
            Self::Slider => "slider",
            Self::Image => "image",
            Self::Text => "text",
            Self::Html => "html",
            Self::Heading => "heading",
            Self::Buttons => "buttons",
            Self::ButtonItem => "button-item",
            Self::Divider => "divider",
            Self::Block => "block",
            Self::Products => "products",
        }
    }
}

/// One parsed page-builder block.
///
/// Serialises as a flat object with a `kind` discriminator, the kind's fields
/// in camelCase and, for containers, a `children` array.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ContentNode {
    Row(Row),
    ColumnGroup(ColumnGroup),
    ColumnLine(ColumnLine),
    Column(Column),
    Banner(Banner),
    Slide(Banner),
    Slider(Slider),
    Image(Image),
    Text(Text),
    Html(Html),
    Heading(Heading),
    Buttons(Buttons),
    ButtonItem(ButtonItem),
    Divider(Divider),
    Block(Block),
    Products(Products),
}

impl ContentNode {
    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Row(_) => ContentKind::Row,
            Self::ColumnGroup(_) => ContentKind::ColumnGroup,
            Self::ColumnLine(_) => ContentKind::ColumnLine,
            Self::Column(_) => ContentKind::Column,
            Self::Banner(_) => ContentKind::Banner,
            Self::Slide(_) => ContentKind::Slide,
            Self::Slider(_) => ContentKind::Slider,
            Self::Image(_) => ContentKind::Image,
            Self::Text(_) => ContentKind::Text,
            Self::Html(_) => ContentKind::Html,
            Self::Heading(_) => ContentKind::Heading,
            Self::Buttons(_) => ContentKind::Buttons,
            Self::ButtonItem(_) => ContentKind::ButtonItem,
            Self::Divider(_) => ContentKind::Divider,
            Self::Block(_) => ContentKind::Block,
            Self::Products(_) => ContentKind::Products,
        }
    }

    /// Nested blocks in rendering order; empty for leaf kinds.
    pub fn children(&self) -> &[ContentNode] {
        match self {
            Self::Row(row) => &row.children,
            Self::ColumnGroup(group) => &group.children,
            Self::ColumnLine(line) => &line.children,
            Self::Column(column) => &column.children,
            Self::Slider(slider) => &slider.children,
            Self::Buttons(buttons) => &buttons.children,
            _ => &[],
        }
    }

    /// Common attributes, absent only on raw-markup fallbacks.
    pub fn common(&self) -> Option<&Common> {
        match self {
            Self::Row(n) => Some(&n.common),
            Self::ColumnGroup(n) => Some(&n.common),
            Self::ColumnLine(n) => Some(&n.common),
            Self::Column(n) => Some(&n.common),
            Self::Banner(n) | Self::Slide(n) => Some(&n.common),
            Self::Slider(n) => Some(&n.common),
            Self::Image(n) => Some(&n.common),
            Self::Text(n) => Some(&n.common),
            Self::Html(n) => n.common.as_ref(),
            Self::Heading(n) => Some(&n.common),
            Self::Buttons(n) => Some(&n.common),
            Self::ButtonItem(n) => Some(&n.common),
            Self::Divider(n) => Some(&n.common),
            Self::Block(n) => Some(&n.common),
            Self::Products(n) => Some(&n.common),
        }
    }

    pub(crate) fn raw_markup(html: String) -> Self {
        Self::Html(Html {
            common: None,
            html,
            shortcode: None,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_right: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_bottom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Common {
    pub css_classes: Vec<String>,
    #[serde(flatten)]
    pub box_model: BoxModel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Background {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desktop_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeat: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonType {
    Primary,
    Secondary,
    Link,
}

impl ButtonType {
    pub fn from_attribute(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            "link" => Some(Self::Link),
            _ => None,
        }
    }

    /// Infers the style from class-name substrings such as `pagebuilder-button-primary`.
    pub fn from_classes(classes: &str) -> Option<Self> {
        if classes.contains("primary") {
            Some(Self::Primary)
        } else if classes.contains("secondary") {
            Some(Self::Secondary)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    #[serde(flatten)]
    pub common: Common,
    pub appearance: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_alignment: Option<String>,
    pub background: Background,
    pub enable_parallax: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallax_speed: Option<f32>,
    pub children: Vec<ContentNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnGroup {
    #[serde(flatten)]
    pub common: Common,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_size: Option<u32>,
    pub children: Vec<ContentNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnLine {
    #[serde(flatten)]
    pub common: Common,
    pub children: Vec<ContentNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    #[serde(flatten)]
    pub common: Common,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appearance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_alignment: Option<String>,
    pub background: Background,
    pub children: Vec<ContentNode>,
}

/// Shared by `banner` and `slide` blocks.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    #[serde(flatten)]
    pub common: Common,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appearance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide_name: Option<String>,
    pub background: Background,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub open_in_new_tab: bool,
    pub show_overlay: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay_color: Option<String>,
    pub show_button: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_type: Option<ButtonType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slider {
    #[serde(flatten)]
    pub common: Common,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appearance: Option<String>,
    #[serde(flatten)]
    pub carousel: CarouselSettings,
    pub fade: bool,
    pub children: Vec<ContentNode>,
}

/// Autoplay and navigation flags shared by sliders and product carousels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselSettings {
    pub autoplay: bool,
    pub autoplay_speed: u32,
    pub infinite_loop: bool,
    pub show_arrows: bool,
    pub show_dots: bool,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            autoplay: false,
            autoplay_speed: 4000,
            infinite_loop: true,
            show_arrows: true,
            show_dots: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(flatten)]
    pub common: Common,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub open_in_new_tab: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Text {
    #[serde(flatten)]
    pub common: Common,
    pub content: String,
}

/// Free-form markup. `common` is `None` when the node is the fallback for an
/// unknown block kind, in which case `html` holds the original outer markup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Html {
    #[serde(flatten)]
    pub common: Option<Common>,
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortcode: Option<Shortcode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Heading {
    #[serde(flatten)]
    pub common: Common,
    pub heading_type: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Buttons {
    #[serde(flatten)]
    pub common: Common,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appearance: Option<String>,
    pub is_same_width: bool,
    pub children: Vec<ContentNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonItem {
    #[serde(flatten)]
    pub common: Common,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub open_in_new_tab: bool,
    pub button_type: ButtonType,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Divider {
    #[serde(flatten)]
    pub common: Common,
    pub line_width: String,
    pub line_color: String,
    pub line_thickness: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(flatten)]
    pub common: Common,
    pub block_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Products {
    #[serde(flatten)]
    pub common: Common,
    pub skus: Vec<String>,
    pub url_keys: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appearance: Option<String>,
    pub carousel: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slides_to_show: Option<u32>,
    #[serde(flatten)]
    pub settings: CarouselSettings,
}
