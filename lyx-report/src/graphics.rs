//! Figure builder
//!
//! Builds the standard figure block reports embed: a centered `Graphics`
//! inset plus a caption carrying a label named after the figure file, so the
//! figure can be cross-referenced. Standalone figures are wrapped in a
//! `Float figure` inset; sub-figures are emitted inline so the caller can
//! stack several inside one float.

use lyx_parser::lyx::ast::{Container, ContentItem, Node};

/// Build a figure layout block.
///
/// `wide` selects the 70% text-width variant instead of the default 45%.
/// `sub_fig` emits the graphics and caption inline; otherwise they are
/// wrapped in a `Float figure` inset.
pub fn graphics(fig_name: &str, caption_text: &str, wide: bool, sub_fig: bool) -> Container {
    let width_line = if wide {
        "width 70text%"
    } else {
        "width 45text%"
    };

    let graphics_inset = Container::with_children(
        "inset",
        Some("Graphics"),
        vec![
            ContentItem::from(format!("filename \"{}\"", fig_name)),
            ContentItem::from(width_line),
        ],
    );

    let caption = caption_block(fig_name, caption_text);

    let mut outer = Container::with_attribute("layout", "Standard");
    outer.push(Node::new("noindent"));
    outer.push(Node::with_attribute("align", "center"));
    if sub_fig {
        outer.push(graphics_inset);
        outer.push(caption);
    } else {
        outer.push(Container::with_children(
            "inset",
            Some("Float figure"),
            vec![
                ContentItem::from("wide false"),
                ContentItem::from("sideways false"),
                ContentItem::from("status open"),
                ContentItem::from(Container::with_children(
                    "layout",
                    Some("Plain Layout"),
                    vec![
                        ContentItem::from(Node::new("noindent")),
                        ContentItem::from(Node::with_attribute("align", "center")),
                        ContentItem::from(graphics_inset),
                    ],
                )),
                ContentItem::from(caption),
            ],
        ));
    }
    outer
}

/// Caption layout: the caption text followed by a label named after the
/// figure, inside the Caption inset scaffold.
fn caption_block(fig_name: &str, caption_text: &str) -> Container {
    Container::with_children(
        "layout",
        Some("Plain Layout"),
        vec![ContentItem::from(Container::with_children(
            "inset",
            Some("Caption"),
            vec![ContentItem::from(Container::with_children(
                "layout",
                Some("Plain Layout"),
                vec![
                    ContentItem::from(caption_text),
                    ContentItem::from(Container::with_children(
                        "inset",
                        Some("CommandInset label"),
                        vec![
                            ContentItem::from("LatexCommand label"),
                            ContentItem::from(format!("name \"{}\"", fig_name)),
                        ],
                    )),
                ],
            ))],
        ))],
    )
}
