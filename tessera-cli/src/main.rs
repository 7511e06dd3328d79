//! Tessera CLI - style and lay out an HTML fragment
//!
//! Parses an HTML document and a stylesheet, resolves styles, builds the
//! layout tree against a viewport-sized containing block, and prints the
//! result as an indented tree or as JSON.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use serde_json::{Map, Value as JsonValue, json};
use tessera_css::{
    BoxDimensions, EdgeSizes, LayoutBox, Stylesheet, layout_tree, parse_stylesheet, style_tree,
};
use tessera_dom::NodeType;
use tessera_html::print_tree;

/// Longest text preview shown in the layout tree.
const TEXT_PREVIEW_CHARS: usize = 30;

/// Tessera - resolve styles and block widths for an HTML fragment
#[derive(Parser, Debug)]
#[command(name = "tessera")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r"EXAMPLES:
    # Lay out a file with a stylesheet
    tessera page.html --css page.css

    # Inline sources
    tessera --html '<div><p>a</p></div>' --style 'div { display: block; width: 100px; }'

    # JSON output with a custom viewport
    tessera page.html --css page.css --json --width 1024

    # Debug logging
    RUST_LOG=tessera_css=trace tessera page.html --css page.css
")]
struct Cli {
    /// Path to the HTML file
    #[arg(value_name = "FILE", required_unless_present = "html")]
    path: Option<PathBuf>,

    /// Parse an HTML string directly instead of a file
    #[arg(long, value_name = "HTML", conflicts_with = "path")]
    html: Option<String>,

    /// Path to the CSS file (default: empty stylesheet)
    #[arg(long, value_name = "FILE")]
    css: Option<PathBuf>,

    /// Parse a CSS string directly instead of a file
    #[arg(long, value_name = "CSS", conflicts_with = "css")]
    style: Option<String>,

    /// Viewport width in pixels
    #[arg(long, default_value = "800")]
    width: f32,

    /// Viewport height in pixels
    #[arg(long, default_value = "600")]
    height: f32,

    /// Print the layout tree as JSON
    #[arg(short, long)]
    json: bool,

    /// Also print the parsed document tree
    #[arg(long, conflicts_with = "json")]
    dom: bool,

    /// Enable debug logging (`RUST_LOG` takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let html = load_html(&cli)?;
    let document = tessera_html::parse(&html).context("failed to parse HTML")?;

    if cli.dom {
        println!("=== DOM Tree ===");
        print_tree(&document);
        println!();
    }

    let stylesheet = load_stylesheet(&cli)?;
    log::debug!("loaded {} CSS rules", stylesheet.rules.len());
    let styles = style_tree(&document, &stylesheet);

    let mut viewport = BoxDimensions::default();
    viewport.content.width = cli.width;
    viewport.content.height = cli.height;

    let root = layout_tree(&styles, &viewport).context("failed to build layout tree")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&layout_to_json(&root))?);
    } else {
        println!(
            "=== Layout Tree (viewport: {}x{}) ===\n",
            cli.width, cli.height
        );
        print_layout_box(&root, 0);
    }

    Ok(())
}

/// Read the HTML source from `--html` or the positional file.
fn load_html(cli: &Cli) -> Result<String> {
    if let Some(ref source) = cli.html {
        return Ok(source.clone());
    }
    let Some(ref path) = cli.path else {
        anyhow::bail!("an HTML file path or --html is required");
    };
    fs::read_to_string(path)
        .with_context(|| format!("failed to read HTML from '{}'", path.display()))
}

/// Parse the stylesheet from `--style` or `--css`, or return an empty one.
fn load_stylesheet(cli: &Cli) -> Result<Stylesheet> {
    let source = match (&cli.style, &cli.css) {
        (Some(source), _) => source.clone(),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read CSS from '{}'", path.display()))?,
        (None, None) => return Ok(Stylesheet::default()),
    };
    parse_stylesheet(&source).context("failed to parse CSS")
}

/// Short label for the node a box was generated for.
fn describe(layout_box: &LayoutBox<'_>) -> String {
    let Ok(style) = layout_box.style_node() else {
        return String::new();
    };
    match &style.node.node_type {
        NodeType::Element(data) => format!("<{}>", data.tag_name),
        NodeType::Text(text) => {
            let preview: String = text.chars().take(TEXT_PREVIEW_CHARS).collect();
            let suffix = if text.chars().count() > TEXT_PREVIEW_CHARS {
                "..."
            } else {
                ""
            };
            format!("\"{}{suffix}\"", preview.replace('\n', "\\n"))
        }
    }
}

/// Recursively print a layout box with its dimensions
fn print_layout_box(layout_box: &LayoutBox<'_>, depth: usize) {
    let indent = "  ".repeat(depth);
    let dims = &layout_box.dimensions;

    println!(
        "{indent}[{}] {}",
        layout_box.box_type.cyan(),
        describe(layout_box).bold()
    );
    println!(
        "{indent}  {}: x={:.1} y={:.1} w={:.1} h={:.1}",
        "content".dimmed(),
        dims.content.x,
        dims.content.y,
        dims.content.width,
        dims.content.height
    );
    print_edges(&indent, "margin", dims.margin);
    print_edges(&indent, "border", dims.border);
    print_edges(&indent, "padding", dims.padding);

    for child in &layout_box.children {
        print_layout_box(child, depth + 1);
    }
}

/// Print one edge line, skipped when every side is zero.
fn print_edges(indent: &str, name: &str, edges: EdgeSizes) {
    if edges == EdgeSizes::default() {
        return;
    }
    println!(
        "{indent}  {}: t={:.1} r={:.1} b={:.1} l={:.1}",
        name.dimmed(),
        edges.top,
        edges.right,
        edges.bottom,
        edges.left
    );
}

fn layout_to_json(layout_box: &LayoutBox<'_>) -> JsonValue {
    let mut obj = Map::new();

    let _ = obj.insert("type".to_string(), json!(layout_box.box_type.to_string()));

    if let Ok(style) = layout_box.style_node() {
        match &style.node.node_type {
            NodeType::Element(data) => {
                let _ = obj.insert("tagName".to_string(), json!(data.tag_name));
            }
            NodeType::Text(text) => {
                let _ = obj.insert("content".to_string(), json!(text));
            }
        }
    }

    if let Ok(dimensions) = serde_json::to_value(layout_box.dimensions) {
        let _ = obj.insert("dimensions".to_string(), dimensions);
    }

    if !layout_box.children.is_empty() {
        let children: Vec<JsonValue> = layout_box.children.iter().map(layout_to_json).collect();
        let _ = obj.insert("children".to_string(), JsonValue::Array(children));
    }

    JsonValue::Object(obj)
}
