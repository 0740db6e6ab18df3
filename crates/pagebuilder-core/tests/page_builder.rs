use pagebuilder_core::{
    parse::{Html5Backend, NoBackend},
    parse_page_builder, ContentKind, ContentNode, NotApplicable, PageBuilderParser, ParserOptions,
};
use serde_json::{json, Value};

const HOME_PAGE: &str = r#"
<div data-content-type="row" data-appearance="contained" class="pagebuilder-row hero">
  <div data-element="inner" style="margin: 0 0 10px; justify-content: flex-start">
    <div data-content-type="slider" data-autoplay="true" data-autoplay-speed="3000">
      <div class="slick-list"><div class="slick-track">
        <div data-content-type="slide" data-show-button="hover">
          <a href="/summer" data-element="link">
            <div data-element="wrapper" style="min-height: 300px"></div>
          </a>
        </div>
      </div></div>
    </div>
  </div>
</div>
<div data-content-type="html">___widget_product_recommendation __id("home") __limit(8)</div>
<div data-content-type="map">unsupported</div>
"#;

fn to_json(node: &ContentNode) -> Value {
    serde_json::to_value(node).expect("content nodes serialise")
}

#[test]
fn parses_a_realistic_page() {
    let nodes = parse_page_builder(HOME_PAGE).expect("page builder content");
    let kinds: Vec<ContentKind> = nodes.iter().map(ContentNode::kind).collect();
    assert_eq!(
        kinds,
        vec![ContentKind::Row, ContentKind::Html, ContentKind::Html]
    );

    let row = &nodes[0];
    let slider = &row.children()[0];
    assert_eq!(slider.kind(), ContentKind::Slider);
    assert_eq!(slider.children().len(), 1);
    assert_eq!(slider.children()[0].kind(), ContentKind::Slide);
}

#[test]
fn serialises_as_kind_and_fields() {
    let nodes = parse_page_builder(HOME_PAGE).unwrap();
    let row = to_json(&nodes[0]);
    assert_eq!(row["kind"], "row");
    assert_eq!(row["appearance"], "contained");
    assert_eq!(row["cssClasses"], json!(["hero"]));
    assert_eq!(row["verticalAlignment"], "top");
    assert!(row.get("marginTop").is_none());

    let slider = &row["children"][0];
    assert_eq!(slider["kind"], "slider");
    assert_eq!(slider["autoplay"], true);
    assert_eq!(slider["autoplaySpeed"], 3000);
    assert_eq!(slider["infiniteLoop"], true);

    let slide = &slider["children"][0];
    assert_eq!(slide["kind"], "slide");
    assert_eq!(slide["link"], "/summer");
    assert_eq!(slide["showButton"], "hover");
    assert_eq!(slide["showOverlay"], "never");
    assert_eq!(slide["minHeight"], "300px");
    assert!(slide.get("children").is_none());
}

#[test]
fn serialises_shortcodes_and_fallbacks() {
    let nodes = parse_page_builder(HOME_PAGE).unwrap();
    let widget = to_json(&nodes[1]);
    assert_eq!(
        widget["shortcode"],
        json!({"widget": "product_recommendation", "id": "home", "limit": 8})
    );
    assert_eq!(widget["cssClasses"], json!([]));

    let fallback = to_json(&nodes[2]);
    assert_eq!(fallback["kind"], "html");
    assert!(fallback["html"]
        .as_str()
        .unwrap()
        .contains(r#"data-content-type="map""#));
    assert!(fallback.get("cssClasses").is_none());
    assert_eq!(fallback.as_object().unwrap().len(), 2);
}

#[test]
fn parser_is_reusable_across_inputs() {
    let parser = PageBuilderParser::new(Html5Backend, ParserOptions::default());
    assert!(parser.parse(HOME_PAGE).is_ok());
    assert_eq!(
        parser.parse("<p>No builder here</p>"),
        Err(NotApplicable::NoMarker)
    );
    assert_eq!(parser.parse(HOME_PAGE).unwrap().len(), 3);
}

#[test]
fn unavailable_backend_is_not_applicable() {
    let parser = PageBuilderParser::new(NoBackend, ParserOptions::default());
    assert_eq!(parser.parse(HOME_PAGE), Err(NotApplicable::NoBackend));
}

#[test]
fn options_from_toml_drive_the_parser() {
    let options = ParserOptions::from_toml_str(r#"reserved-class-prefix = "hero""#).unwrap();
    let parser = PageBuilderParser::new(Html5Backend, options);
    let nodes = parser.parse(HOME_PAGE).unwrap();
    let row = to_json(&nodes[0]);
    assert_eq!(row["cssClasses"], json!(["pagebuilder-row"]));
}
