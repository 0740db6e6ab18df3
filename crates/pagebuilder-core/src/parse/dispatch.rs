use kuchiki::NodeRef;

use crate::shortcode::parse_shortcode;
use crate::types::{
    Background, Banner, Block, ButtonItem, ButtonType, Buttons, CarouselSettings, Column,
    ColumnGroup, ColumnLine, Common, ContentKind, ContentNode, Divider, Heading, Html, Image,
    Products, Row, Slider, Text,
};

use super::background::decode_background_images;
use super::dom::{
    attr, attr_value, find_element, find_in_block, find_tag, flag, flag_default_on, is_heading,
    link_target, list, number, style, tag_name, text,
};
use super::entities::decode_entities;
use super::serialize::{inner_html, outer_html};
use super::style::Declarations;
use super::tree::build_children;
use super::BuildContext;

const APPEARANCE: &str = "data-appearance";
const BACKGROUND_IMAGES: &str = "data-background-images";
const BLOCK_ID: &str = "data-block-id";

const DEFAULT_ROW_APPEARANCE: &str = "contained";
const DEFAULT_VISIBILITY: &str = "never";
const DEFAULT_HEADING: &str = "h2";
const DEFAULT_LINE_WIDTH: &str = "100%";
const DEFAULT_LINE_COLOR: &str = "#ccc";
const DEFAULT_LINE_THICKNESS: &str = "1px";

/// A marked element being converted, with its parsed inline style.
struct Marked<'a> {
    node: &'a NodeRef,
    decls: Declarations,
    ctx: &'a BuildContext<'a>,
    depth: usize,
}

impl Marked<'_> {
    fn common(&self) -> Common {
        let prefix = self.ctx.options.reserved_class_prefix.as_str();
        let css_classes = attr(self.node, "class")
            .map(|classes| {
                classes
                    .split_whitespace()
                    .filter(|c| prefix.is_empty() || !c.starts_with(prefix))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        Common {
            css_classes,
            box_model: self.decls.box_model(),
        }
    }

    fn appearance(&self) -> Option<String> {
        attr_value(self.node, APPEARANCE)
    }

    fn element(&self, role: &str) -> Option<NodeRef> {
        find_element(self.node, self.ctx.marker(), role)
    }

    fn tag(&self, tag: &str) -> Option<NodeRef> {
        if tag_name(self.node).as_deref() == Some(tag) {
            return Some(self.node.clone());
        }
        find_tag(self.node, self.ctx.marker(), tag)
    }

    fn link(&self) -> Option<NodeRef> {
        self.element("link").or_else(|| self.tag("a"))
    }

    fn children(&self) -> Vec<ContentNode> {
        build_children(self.node, self.ctx, self.depth + 1)
    }
}

pub(crate) fn dispatch(node: &NodeRef, ctx: &BuildContext<'_>, depth: usize) -> ContentNode {
    if depth > ctx.options.max_depth {
        tracing::warn!(
            depth,
            max_depth = ctx.options.max_depth,
            "page builder nesting too deep; keeping raw markup"
        );
        return ContentNode::raw_markup(outer_html(node));
    }
    let marker = attr(node, ctx.marker()).unwrap_or_default();
    let Some(kind) = ContentKind::from_marker(&marker) else {
        tracing::debug!("unknown content type {:?}; keeping raw markup", marker);
        return ContentNode::raw_markup(outer_html(node));
    };
    let el = Marked {
        node,
        decls: style(node),
        ctx,
        depth,
    };
    match kind {
        ContentKind::Row => ContentNode::Row(row(&el)),
        ContentKind::ColumnGroup => ContentNode::ColumnGroup(ColumnGroup {
            common: el.common(),
            grid_size: number(node, "data-grid-size"),
            children: el.children(),
        }),
        ContentKind::ColumnLine => ContentNode::ColumnLine(ColumnLine {
            common: el.common(),
            children: el.children(),
        }),
        ContentKind::Column => ContentNode::Column(column(&el)),
        ContentKind::Banner => ContentNode::Banner(banner(&el)),
        ContentKind::Slide => ContentNode::Slide(banner(&el)),
        ContentKind::Slider => ContentNode::Slider(Slider {
            common: el.common(),
            appearance: el.appearance(),
            carousel: carousel_settings(node),
            fade: flag(node, "data-fade"),
            children: el.children(),
        }),
        ContentKind::Image => ContentNode::Image(image(&el)),
        ContentKind::Text => ContentNode::Text(Text {
            common: el.common(),
            content: inner_html(node),
        }),
        ContentKind::Html => ContentNode::Html(html(&el)),
        ContentKind::Heading => ContentNode::Heading(heading(&el)),
        ContentKind::Buttons => {
            let appearance = el.appearance();
            ContentNode::Buttons(Buttons {
                common: el.common(),
                is_same_width: appearance.as_deref() == Some("stacked"),
                appearance,
                children: el.children(),
            })
        }
        ContentKind::ButtonItem => ContentNode::ButtonItem(button_item(&el)),
        ContentKind::Divider => ContentNode::Divider(divider(&el)),
        ContentKind::Block => ContentNode::Block(Block {
            common: el.common(),
            block_id: block_id(node),
        }),
        ContentKind::Products => ContentNode::Products(products(&el)),
    }
}

fn background(attr_sources: &[&NodeRef], styles: &[&Declarations]) -> Background {
    let images = attr_sources
        .iter()
        .find_map(|node| {
            attr(node, BACKGROUND_IMAGES).and_then(|raw| decode_background_images(&raw))
        })
        .unwrap_or_default();
    let pick = |name: &str| styles.iter().find_map(|decls| decls.owned(name));
    Background {
        desktop_image: images
            .desktop_image
            .or_else(|| styles.iter().find_map(|decls| decls.background_image_url())),
        mobile_image: images.mobile_image,
        size: pick("background-size"),
        position: pick("background-position"),
        attachment: pick("background-attachment"),
        repeat: pick("background-repeat"),
    }
}

fn carousel_settings(node: &NodeRef) -> CarouselSettings {
    let defaults = CarouselSettings::default();
    CarouselSettings {
        autoplay: flag(node, "data-autoplay"),
        autoplay_speed: number(node, "data-autoplay-speed").unwrap_or(defaults.autoplay_speed),
        infinite_loop: flag_default_on(node, "data-infinite-loop"),
        show_arrows: flag_default_on(node, "data-show-arrows"),
        show_dots: flag_default_on(node, "data-show-dots"),
    }
}

// Contained rows keep their background and parallax settings on an inner element.
fn row(el: &Marked<'_>) -> Row {
    let inner = el.element("inner");
    let inner_decls = inner.as_ref().map(style).unwrap_or_default();
    let mut attr_sources = vec![el.node];
    attr_sources.extend(inner.as_ref());
    let from_either = |name: &str| {
        attr_sources
            .iter()
            .find_map(|node| attr_value(node, name))
    };
    Row {
        common: el.common(),
        appearance: el
            .appearance()
            .unwrap_or_else(|| DEFAULT_ROW_APPEARANCE.to_string()),
        vertical_alignment: el
            .decls
            .vertical_alignment()
            .or_else(|| inner_decls.vertical_alignment()),
        background: background(&attr_sources, &[&el.decls, &inner_decls]),
        enable_parallax: from_either("data-enable-parallax")
            .map(|v| matches!(v.as_str(), "1" | "true"))
            .unwrap_or(false),
        parallax_speed: from_either("data-parallax-speed").and_then(|v| v.parse().ok()),
        children: el.children(),
    }
}

fn column(el: &Marked<'_>) -> Column {
    Column {
        common: el.common(),
        appearance: el.appearance(),
        width: el.decls.owned("width"),
        vertical_alignment: el.decls.vertical_alignment(),
        background: background(&[el.node], &[&el.decls]),
        children: el.children(),
    }
}

fn banner(el: &Marked<'_>) -> Banner {
    let wrapper = el.element("wrapper");
    let wrapper_decls = wrapper.as_ref().map(style).unwrap_or_default();

    let mut common = el.common();
    if let Some(color) = wrapper_decls.owned("background-color") {
        common.box_model.background_color = Some(color);
    }
    if let Some(height) = wrapper_decls.owned("min-height") {
        common.box_model.min_height = Some(height);
    }

    let mut attr_sources = vec![el.node];
    attr_sources.extend(wrapper.as_ref());
    let background = background(&attr_sources, &[&wrapper_decls, &el.decls]);

    let (link, open_in_new_tab) = el
        .link()
        .map(|link| link_target(&link))
        .unwrap_or((None, false));

    let overlay_color = el.element("overlay").and_then(|overlay| {
        attr_value(&overlay, "data-overlay-color")
            .or_else(|| style(&overlay).owned("background-color"))
    });

    let button = el.element("button");
    let button_text = button.as_ref().and_then(text);
    let button_type = button
        .as_ref()
        .and_then(|b| attr(b, "class"))
        .and_then(|classes| ButtonType::from_classes(&classes));

    Banner {
        common,
        appearance: el.appearance(),
        slide_name: attr_value(el.node, "data-slide-name"),
        background,
        link,
        open_in_new_tab,
        show_overlay: attr_value(el.node, "data-show-overlay")
            .unwrap_or_else(|| DEFAULT_VISIBILITY.to_string()),
        overlay_color,
        show_button: attr_value(el.node, "data-show-button")
            .unwrap_or_else(|| DEFAULT_VISIBILITY.to_string()),
        button_text,
        button_type,
        content: el.element("content").map(|content| inner_html(&content)),
    }
}

fn image(el: &Marked<'_>) -> Image {
    let desktop = el.element("desktop_image").or_else(|| el.tag("img"));
    let mobile = el.element("mobile_image");
    let from_desktop = |name: &str| desktop.as_ref().and_then(|img| attr_value(img, name));
    let (link, open_in_new_tab) = el
        .link()
        .map(|link| link_target(&link))
        .unwrap_or((None, false));
    Image {
        common: el.common(),
        src: from_desktop("src"),
        mobile_src: mobile.as_ref().and_then(|img| attr_value(img, "src")),
        alt: from_desktop("alt"),
        title: from_desktop("title"),
        caption: el.tag("figcaption").as_ref().and_then(text),
        link,
        open_in_new_tab,
    }
}

fn html(el: &Marked<'_>) -> Html {
    let html = decode_entities(&inner_html(el.node));
    let shortcode = parse_shortcode(&html);
    Html {
        common: Some(el.common()),
        html,
        shortcode,
    }
}

fn heading(el: &Marked<'_>) -> Heading {
    let found = if is_heading(el.node) {
        Some(el.node.clone())
    } else {
        find_in_block(el.node, el.ctx.marker(), is_heading)
    };
    let heading_type = found
        .as_ref()
        .and_then(tag_name)
        .unwrap_or_else(|| DEFAULT_HEADING.to_string());
    Heading {
        common: el.common(),
        heading_type,
        text: inner_html(found.as_ref().unwrap_or(el.node)),
    }
}

fn button_item(el: &Marked<'_>) -> ButtonItem {
    let link = el.link();
    let label = el
        .element("link_text")
        .as_ref()
        .and_then(text)
        .or_else(|| link.as_ref().and_then(text));
    let (href, open_in_new_tab) = link
        .as_ref()
        .map(link_target)
        .unwrap_or((None, false));
    let button_type = attr_value(el.node, "data-button-type")
        .or_else(|| link.as_ref().and_then(|l| attr_value(l, "data-button-type")))
        .and_then(|t| ButtonType::from_attribute(&t))
        .or_else(|| {
            link.as_ref()
                .and_then(|l| attr(l, "class"))
                .and_then(|c| ButtonType::from_classes(&c))
        })
        .or_else(|| attr(el.node, "class").and_then(|c| ButtonType::from_classes(&c)))
        .unwrap_or(ButtonType::Link);
    ButtonItem {
        common: el.common(),
        text: label,
        link: href,
        open_in_new_tab,
        button_type,
    }
}

fn divider(el: &Marked<'_>) -> Divider {
    let line = el.element("line").or_else(|| el.tag("hr"));
    let decls = line.as_ref().map(style).unwrap_or_default();
    let model = decls.box_model();
    Divider {
        common: el.common(),
        line_width: decls
            .owned("width")
            .unwrap_or_else(|| DEFAULT_LINE_WIDTH.to_string()),
        line_color: model
            .border_color
            .or(model.background_color)
            .unwrap_or_else(|| DEFAULT_LINE_COLOR.to_string()),
        line_thickness: model
            .border_width
            .unwrap_or_else(|| DEFAULT_LINE_THICKNESS.to_string()),
    }
}

fn block_id(node: &NodeRef) -> String {
    attr_value(node, BLOCK_ID)
        .or_else(|| {
            node.descendants()
                .find_map(|descendant| attr_value(&descendant, BLOCK_ID))
        })
        .unwrap_or_default()
}

fn products(el: &Marked<'_>) -> Products {
    let appearance = el.appearance();
    Products {
        common: el.common(),
        skus: list(el.node, "data-skus"),
        url_keys: list(el.node, "data-url-keys"),
        carousel: appearance.as_deref() == Some("carousel"),
        appearance,
        slides_to_show: number(el.node, "data-slides-to-show"),
        settings: carousel_settings(el.node),
    }
}
