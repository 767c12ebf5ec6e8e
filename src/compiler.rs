use crate::block::{BlockType, classify_block, segment_blocks};
use crate::error::Result;
use crate::html::HtmlNode;
use crate::inline::parse_inline_spans;
use crate::span::spans_to_html;

const FENCE: &str = "```";

/// Compile a whole document into a `div` holding one subtree per block.
pub fn markdown_to_html_node(markdown: &str) -> Result<HtmlNode> {
    let blocks = segment_blocks(markdown);
    tracing::debug!(blocks = blocks.len(), "Segmented document");

    let children = blocks
        .into_iter()
        .map(|block| {
            let block_type = classify_block(block);
            tracing::trace!(%block_type, "Compiling block");
            compile_block(block, block_type)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(HtmlNode::parent("div", children))
}

/// Compile one classified block into its HTML subtree.
pub fn compile_block(block: &str, block_type: BlockType) -> Result<HtmlNode> {
    match block_type {
        BlockType::Heading(level) => {
            let marker = format!("{} ", "#".repeat(usize::from(level)));
            let text = block.strip_prefix(&marker).unwrap_or(block);
            Ok(HtmlNode::parent(format!("h{level}"), inline_children(text)?))
        }
        BlockType::Code => {
            let text = block.strip_prefix(FENCE).unwrap_or(block);
            let text = text.strip_suffix(FENCE).unwrap_or(text);
            let code = HtmlNode::parent("code", inline_children(text)?);
            Ok(HtmlNode::parent("pre", vec![code]))
        }
        BlockType::Quote => {
            let text = block
                .split('\n')
                .map(strip_quote_marker)
                .collect::<Vec<_>>()
                .join("\n");
            Ok(HtmlNode::parent("blockquote", inline_children(&text)?))
        }
        BlockType::UnorderedList => {
            let items = block
                .split('\n')
                .filter(|line| !line.is_empty())
                .map(|line| {
                    let text = line
                        .strip_prefix("* ")
                        .or_else(|| line.strip_prefix("- "))
                        .unwrap_or(line);
                    list_item(text)
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(HtmlNode::parent("ul", items))
        }
        BlockType::OrderedList => {
            let items = block
                .split('\n')
                .enumerate()
                .map(|(i, line)| {
                    // Exact literal marker only; item text starting with digits is kept.
                    let marker = format!("{}. ", i + 1);
                    list_item(line.strip_prefix(&marker).unwrap_or(line))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(HtmlNode::parent("ol", items))
        }
        BlockType::Paragraph => Ok(HtmlNode::parent("p", inline_children(block)?)),
    }
}

fn inline_children(text: &str) -> Result<Vec<HtmlNode>> {
    Ok(spans_to_html(parse_inline_spans(text)?))
}

fn list_item(text: &str) -> Result<HtmlNode> {
    Ok(HtmlNode::parent("li", inline_children(text)?))
}

fn strip_quote_marker(line: &str) -> &str {
    line.strip_prefix("> ").unwrap_or(line)
}
