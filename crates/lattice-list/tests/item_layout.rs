//! Integration tests for list item layout, keys and handles.

use lattice_list::prelude::*;
use serde_json::{json, Value};

fn setup() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn data() -> Vec<Value> {
    vec![json!({
        "key": 1,
        "href": "https://ant.design",
        "title": "ant design",
        "avatar": "https://zos.alipayobjects.com/rmsportal/ODTLcjxAfvqbxHnVXCYX.png",
        "description": "Ant Design, a design language for background applications, is refined by Ant UED Team.",
        "content": "We supply a series of design principles, practical patterns and high quality design resources.",
        "extra": "extra",
    })]
}

fn data_with_id() -> Vec<Value> {
    (1..=3)
        .map(|id| json!({ "id": id, "title": "ant design" }))
        .collect()
}

fn text(record: &Value, field: &str) -> String {
    record[field].as_str().unwrap_or_default().to_string()
}

fn meta(record: &Value) -> Meta {
    Meta::new()
        .with_title(
            Node::element("a")
                .attr("href", text(record, "href"))
                .text(text(record, "title")),
        )
        .with_description(text(record, "description"))
}

fn list(options: ListOptions) -> ListContainer<Value> {
    ListContainer::new(ListConfig::new(options).expect("valid options"))
}

fn first_item_is_no_flex(rendered: &RenderedList) -> bool {
    let item = rendered.items()[0].element;
    rendered
        .document()
        .has_class(item, "lattice-list-item-no-flex")
}

#[test]
fn horizontal_list_with_inline_text_is_not_flex() {
    setup();
    let rendered = list(ListOptions::new()).render(&data(), |_, _| {
        ListItem::new(ItemContent::inline([
            Node::text("I am "),
            Node::element("span").text("ant").into(),
            Node::text(" design list item"),
        ]))
    });

    assert!(first_item_is_no_flex(&rendered));
    assert_eq!(rendered.items()[0].classification, ItemClassification::Block);
}

#[test]
fn horizontal_list_without_decoration_is_not_flex() {
    setup();
    let rendered = list(ListOptions::new()).render(&data(), |_, _| ListItem::default());

    assert!(first_item_is_no_flex(&rendered));
    assert_eq!(
        rendered.to_html(),
        concat!(
            r#"<div class="lattice-list lattice-list-split">"#,
            r#"<ul class="lattice-list-items">"#,
            r#"<li class="lattice-list-item lattice-list-item-no-flex" data-key="1"></li>"#,
            r#"</ul></div>"#,
        )
    );

    let cards = vec![json!({ "id": 1 }), json!({ "id": 2 })];
    let rendered = list(ListOptions::new().with_row_key("id")).render(&cards, |_, _| {
        ListItem::new(ItemContent::block([Node::element("div")
            .class("card")
            .child(Node::element("p").child(Node::element("em").text("nested")))
            .into()]))
    });

    assert!(rendered
        .items()
        .iter()
        .all(|i| i.classification == ItemClassification::Block));
}

#[test]
fn horizontal_list_is_flex_by_default() {
    setup();
    let rendered = list(ListOptions::new())
        .render(&data(), |record, _| ListItem::default().with_meta(meta(record)));

    assert!(!first_item_is_no_flex(&rendered));
}

#[test]
fn vertical_list_with_extra_is_flex() {
    setup();
    let rendered = list(ListOptions::new().with_item_layout(ItemLayout::Vertical)).render(
        &data(),
        |record, _| {
            ListItem::default()
                .with_meta(meta(record))
                .with_extra(text(record, "extra"))
        },
    );

    assert!(!first_item_is_no_flex(&rendered));
    let doc = rendered.document();
    let item = rendered.items()[0].element;
    assert!(doc.first_by_class(item, "lattice-list-item-main").is_some());
    assert!(doc.first_by_class(item, "lattice-list-item-extra").is_some());
}

#[test]
fn vertical_list_without_extra_is_not_flex() {
    setup();
    let rendered = list(ListOptions::new().with_item_layout(ItemLayout::Vertical))
        .render(&data(), |record, _| ListItem::default().with_meta(meta(record)));

    assert!(first_item_is_no_flex(&rendered));
}

fn decorated(record: &Value, _: usize) -> ListItem {
    ListItem::default()
        .with_meta(meta(record))
        .with_action(Node::element("a").text("Action"))
        .with_extra(Node::element("span").text(text(record, "extra")))
}

#[test]
fn horizontal_list_accepts_extra() {
    setup();
    let rendered = list(ListOptions::new()).render(&data(), decorated);

    assert_eq!(
        rendered.to_html(),
        concat!(
            r#"<div class="lattice-list lattice-list-split">"#,
            r#"<ul class="lattice-list-items">"#,
            r#"<li class="lattice-list-item" data-key="1">"#,
            r#"<div class="lattice-list-item-meta">"#,
            r#"<div class="lattice-list-item-meta-content">"#,
            r#"<h4 class="lattice-list-item-meta-title"><a href="https://ant.design">ant design</a></h4>"#,
            r#"<div class="lattice-list-item-meta-description">Ant Design, a design language for background applications, is refined by Ant UED Team.</div>"#,
            r#"</div></div>"#,
            r#"<ul class="lattice-list-item-action" style="margin-left: 48px">"#,
            r#"<li style="padding-left: 0px; padding-right: 8px"><a>Action</a></li>"#,
            r#"</ul>"#,
            r#"<div class="lattice-list-item-extra"><span>extra</span></div>"#,
            r#"</li></ul></div>"#,
        )
    );
}

#[test]
fn renders_in_rtl_direction() {
    setup();
    let rendered = list(ListOptions::new())
        .with_context(ListContext::with_direction(Direction::Rtl))
        .render(&data(), decorated);

    assert_eq!(
        rendered.to_html(),
        concat!(
            r#"<div class="lattice-list lattice-list-split lattice-list-rtl" dir="rtl">"#,
            r#"<ul class="lattice-list-items">"#,
            r#"<li class="lattice-list-item lattice-list-item-rtl" data-key="1">"#,
            r#"<div class="lattice-list-item-extra"><span>extra</span></div>"#,
            r#"<ul class="lattice-list-item-action" style="margin-right: 48px">"#,
            r#"<li style="padding-right: 0px; padding-left: 8px"><a>Action</a></li>"#,
            r#"</ul>"#,
            r#"<div class="lattice-list-item-meta">"#,
            r#"<div class="lattice-list-item-meta-content">"#,
            r#"<h4 class="lattice-list-item-meta-title"><a href="https://ant.design">ant design</a></h4>"#,
            r#"<div class="lattice-list-item-meta-description">Ant Design, a design language for background applications, is refined by Ant UED Team.</div>"#,
            r#"</div></div>"#,
            r#"</li></ul></div>"#,
        )
    );
    assert_eq!(
        rendered.items()[0].slots,
        vec![ItemSlot::Meta, ItemSlot::Actions, ItemSlot::Extra]
    );
}

#[test]
fn row_key_could_be_string() {
    setup();
    let rendered = list(ListOptions::new().with_row_key("id"))
        .render(&data_with_id(), |record, _| ListItem::text(text(record, "title")));

    assert_eq!(rendered.keys(), vec![&Key::Int(1), &Key::Int(2), &Key::Int(3)]);
}

#[test]
fn row_key_could_be_function() {
    setup();
    let config = ListConfig::default().with_row_key(RowKey::func(|r: &Value| r.field("id")));
    let rendered = ListContainer::new(config)
        .render(&data_with_id(), |record, _| ListItem::text(text(record, "title")));

    assert_eq!(rendered.keys(), vec![&Key::Int(1), &Key::Int(2), &Key::Int(3)]);
}

#[test]
fn keys_fall_back_to_position() {
    setup();
    let rendered = list(ListOptions::new())
        .render(&data_with_id(), |record, _| ListItem::text(text(record, "title")));

    assert_eq!(
        rendered.keys(),
        vec![&Key::Index(0), &Key::Index(1), &Key::Index(2)]
    );
    let labels: Vec<String> = rendered.keys().iter().map(|k| k.to_string()).collect();
    assert_eq!(labels, vec!["0", "1", "2"]);
}

#[test]
fn handles_resolve_to_elements() {
    setup();
    let item_handle = ElementHandle::new();
    let list_handle = ElementHandle::new();
    let config = ListConfig::new(ListOptions::new())
        .unwrap()
        .with_row_key(RowKey::func(|r: &Value| r.field("id")))
        .with_handle(list_handle.clone());

    let rendered = ListContainer::new(config).render(&data_with_id()[..1], |record, _| {
        ListItem::text(text(record, "title")).with_handle(item_handle.clone())
    });

    let doc = rendered.document();
    let item = item_handle.current().and_then(|id| doc.get(id)).unwrap();
    assert_eq!(item.tag(), "li");
    let root = list_handle.current().and_then(|id| doc.get(id)).unwrap();
    assert!(root.has_class("lattice-list"));

    let grid_handle = ElementHandle::new();
    let grid_list_handle = ElementHandle::new();
    let config = ListConfig::new(ListOptions::new().with_grid(GridSpec::columns(2)))
        .unwrap()
        .with_row_key(RowKey::func(|r: &Value| r.field("id")))
        .with_handle(grid_list_handle.clone());
    let rendered = ListContainer::new(config).render(&data_with_id()[..1], |record, _| {
        ListItem::text(text(record, "title")).with_handle(grid_handle.clone())
    });

    let element = grid_handle
        .current()
        .and_then(|id| rendered.document().get(id))
        .unwrap();
    assert_eq!(element.tag(), "div");
    assert!(element.has_class("lattice-list-item"));
    assert_eq!(
        rendered.item_by_key(&Key::Int(1)).map(|i| i.element),
        grid_handle.current()
    );

    let grid_root = grid_list_handle
        .current()
        .and_then(|id| rendered.document().get(id))
        .unwrap();
    assert!(grid_root.has_class("lattice-list"));
    assert!(grid_root.has_class("lattice-list-grid"));
    assert_eq!(grid_list_handle.current(), Some(rendered.root()));
}

#[test]
fn handles_rebind_on_each_pass() {
    setup();
    let handle = ElementHandle::new();
    let container = list(ListOptions::new().with_row_key("id"));
    let render = |record: &Value, _: usize| {
        ListItem::text(text(record, "title")).with_handle(handle.clone())
    };

    let first = container.render(&data_with_id()[..1], render);
    let first_id = handle.current();
    assert_eq!(first_id, Some(first.items()[0].element));

    let second = container.render(&data_with_id()[..1], render);
    assert_eq!(handle.current(), Some(second.items()[0].element));
    assert_eq!(first.items()[0].key, second.items()[0].key);
}

#[test]
fn options_loaded_from_toml_drive_rendering() {
    setup();
    let options = ListOptions::from_toml_str(
        r#"
        item-layout = "vertical"
        row-key = "id"
        "#,
    )
    .unwrap();
    let rendered = list(options).render(&data_with_id(), |record, _| {
        ListItem::default()
            .with_meta(Meta::new().with_title(text(record, "title")))
            .with_extra("extra")
    });

    assert!(rendered
        .items()
        .iter()
        .all(|i| i.classification == ItemClassification::Flex));
    assert!(rendered
        .document()
        .has_class(rendered.root(), "lattice-list-vertical"));
}
