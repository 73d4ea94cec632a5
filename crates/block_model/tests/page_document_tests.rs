//! Integration tests for loading, editing and saving page documents

use block_model::{
    Block, BlockIcon, BlockId, BlockOptions, Breakpoint, Direction, EditorState, PageTree,
    StyleValue,
};
use proptest::prelude::*;

const PAGE: &str = r##"{
    "element": "div",
    "originalElement": "body",
    "blockId": "ignored",
    "draggable": true,
    "children": [
        {
            "element": "section",
            "blockId": "hero",
            "styles": {"display": "flex", "padding": "40px"},
            "mobileStyles": {"padding": "12px"},
            "children": [
                {
                    "element": "h1",
                    "blockId": "headline",
                    "innerText": "Welcome",
                    "baseStyles": {"fontFamily": "Poppins", "font-size": 48},
                    "tabletStyles": {"font-size": 36}
                },
                {
                    "element": "button",
                    "blockId": "cta",
                    "attributes": {"style": "color: red", "data-action": "signup"},
                    "classes": ["btn", "btn-primary"],
                    "computedStyles": {"color": "red"}
                }
            ]
        },
        {
            "element": "img",
            "blockId": "badge",
            "attributes": {"src": "/files/badge.png"},
            "styles": {"position": "absolute", "top": "10px", "left": "20px"}
        }
    ]
}"##;

#[test]
fn test_load_page_document() {
    let tree = PageTree::from_json(PAGE).unwrap();
    let root = tree.root();
    assert_eq!(root.id(), "root");
    assert_eq!(root.draggable(), Some(false));
    assert_eq!(root.get_icon(), BlockIcon::Hash);
    assert_eq!(tree.len(), 5);

    for (_, block) in tree.iter() {
        for child in block.children() {
            assert_eq!(child.parent_id(), Some(block.id()));
        }
    }

    let cta = tree.find_block("cta").unwrap();
    assert!(cta.attributes().get("style").is_none());
    assert_eq!(cta.attributes().get("data-action"), Some(&serde_json::json!("signup")));
    assert_eq!(cta.get_tag(), "div");
    assert_eq!(cta.editor_styles().get("display"), Some(&StyleValue::from("inline-block")));
    assert_eq!(tree.parent_of(cta).unwrap().id(), "hero");
}

#[test]
fn test_breakpoint_resolution_across_page() {
    let tree = PageTree::from_json(PAGE).unwrap();
    let hero = tree.find_block("hero").unwrap();
    let headline = tree.find_block("headline").unwrap();

    let base = EditorState::with_breakpoint(Breakpoint::Base);
    let tablet = EditorState::with_breakpoint(Breakpoint::Tablet);
    let mobile = EditorState::with_breakpoint(Breakpoint::Mobile);

    assert_eq!(hero.get_style(&base, "padding"), Some(&StyleValue::from("40px")));
    assert_eq!(hero.get_style(&mobile, "padding"), Some(&StyleValue::from("12px")));
    assert_eq!(hero.get_style(&tablet, "padding"), Some(&StyleValue::from("40px")));

    assert_eq!(headline.get_style(&tablet, "font-size"), Some(&StyleValue::Number(36.0)));
    assert_eq!(headline.get_style(&mobile, "font-size"), Some(&StyleValue::Number(48.0)));
    assert_eq!(headline.get_font_family(), "Poppins");
}

#[test]
fn test_edit_and_save_round_trip() {
    let mut tree = PageTree::from_json(PAGE).unwrap();
    let mut state = EditorState::new();

    let badge = tree.find_block_mut("badge").unwrap();
    assert!(badge.nudge(&state, Direction::Right));
    assert!(badge.nudge(&state, Direction::Up));
    badge.select_block(&mut state);

    state.set_active_breakpoint(Breakpoint::Mobile);
    let headline = tree.find_block_mut("headline").unwrap();
    headline.set_style(&state, "font-size", Some(StyleValue::from("28px")));

    let dirty = tree.take_dirty_blocks();
    assert_eq!(dirty, vec![BlockId::from("headline"), BlockId::from("badge")]);

    let saved = tree.to_json().unwrap();
    let reloaded = PageTree::from_json(&saved).unwrap();

    let badge = reloaded.find_block("badge").unwrap();
    assert!(badge.is_selected(&state));
    assert_eq!(badge.base_styles().get("left"), Some(&StyleValue::from("21px")));
    assert_eq!(badge.base_styles().get("top"), Some(&StyleValue::from("9px")));

    let headline = reloaded.find_block("headline").unwrap();
    assert_eq!(headline.get_style(&state, "font-size"), Some(&StyleValue::from("28px")));
    assert_eq!(headline.inner_text(), Some("Welcome"));

    let value: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert!(value.get("editorStyles").is_none());
    assert_eq!(value["children"][0]["children"][1]["classes"][1], "btn-primary");
}

#[test]
fn test_malformed_page_is_an_error() {
    assert!(PageTree::from_json("{").is_err());
    assert!(PageTree::from_json(r#"{"element": "div"}"#).is_err());
}

fn arb_options(depth: u32) -> impl Strategy<Value = BlockOptions> {
    let element = prop::sample::select(vec!["div", "section", "p", "img", "button", "a"]);
    let leaf = element.prop_map(|element| BlockOptions::new(element));
    leaf.prop_recursive(depth, 48, 4, |inner| {
        (prop::sample::select(vec!["div", "section"]), prop::collection::vec(inner, 0..4)).prop_map(
            |(element, children)| {
                children
                    .into_iter()
                    .fold(BlockOptions::new(element), BlockOptions::with_child)
            },
        )
    })
}

proptest! {
    #[test]
    fn children_always_point_at_their_parent(body in arb_options(4)) {
        let mut options = BlockOptions::body();
        options.children = Some(vec![body]);
        let tree = PageTree::from_options(options).unwrap();

        for (_, block) in tree.iter() {
            for child in block.children() {
                prop_assert_eq!(child.parent_id(), Some(block.id()));
                prop_assert_eq!(tree.parent_of(child).map(Block::id), Some(block.id()));
            }
        }
    }
}
