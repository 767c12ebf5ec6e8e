use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Structural type of a top-level Markdown block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Heading(u8),
    Code,
    Quote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

impl BlockType {
    /// Stable lowercase name, also accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            BlockType::Heading(_) => "heading",
            BlockType::Code => "code",
            BlockType::Quote => "quote",
            BlockType::UnorderedList => "unordered_list",
            BlockType::OrderedList => "ordered_list",
            BlockType::Paragraph => "paragraph",
        }
    }

    /// Whether `other` is the same kind of block, ignoring heading level.
    pub fn same_kind(self, other: BlockType) -> bool {
        self.name() == other.name()
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockType::Heading(level) => write!(f, "heading({level})"),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for BlockType {
    type Err = Error;

    /// Parses a block type name. `heading` maps to level 1.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "heading" => Ok(BlockType::Heading(1)),
            "code" => Ok(BlockType::Code),
            "quote" => Ok(BlockType::Quote),
            "unordered_list" => Ok(BlockType::UnorderedList),
            "ordered_list" => Ok(BlockType::OrderedList),
            "paragraph" => Ok(BlockType::Paragraph),
            other => Err(Error::UnknownBlockType(other.to_string())),
        }
    }
}

const FENCE: &str = "```";
const MAX_HEADING_LEVEL: usize = 6;

/// Split a document into trimmed, non-empty blocks separated by blank lines.
pub fn segment_blocks(markdown: &str) -> Vec<&str> {
    markdown
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a block. Rules are checked in order and the first match wins.
pub fn classify_block(block: &str) -> BlockType {
    if let Some(level) = heading_level(block) {
        return BlockType::Heading(level);
    }
    if block.len() >= 2 * FENCE.len() && block.starts_with(FENCE) && block.ends_with(FENCE) {
        return BlockType::Code;
    }
    if block.starts_with('>') {
        return if block.split('\n').all(|line| line.starts_with('>')) {
            BlockType::Quote
        } else {
            BlockType::Paragraph
        };
    }
    for marker in ["* ", "- "] {
        if block.starts_with(marker) {
            return if block.split('\n').all(|line| line.starts_with(marker)) {
                BlockType::UnorderedList
            } else {
                BlockType::Paragraph
            };
        }
    }
    if block.starts_with("1. ") {
        let sequential = block
            .split('\n')
            .enumerate()
            .all(|(i, line)| line.starts_with(&format!("{}. ", i + 1)));
        return if sequential {
            BlockType::OrderedList
        } else {
            BlockType::Paragraph
        };
    }
    BlockType::Paragraph
}

/// Level of a `#`-style heading, if the block starts with one.
fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if !(1..=MAX_HEADING_LEVEL).contains(&hashes) {
        return None;
    }
    if block.as_bytes().get(hashes) != Some(&b' ') {
        return None;
    }
    u8::try_from(hashes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn segments_on_blank_lines() {
        let md = "# This is a heading\n\n\
                  This is a paragraph of text. It has some **bold** and *italic* words inside of it.\n\n\
                  * This is the first list item in a list block\n* This is a list item\n* This is another list item";
        assert_eq!(
            segment_blocks(md),
            vec![
                "# This is a heading",
                "This is a paragraph of text. It has some **bold** and *italic* words inside of it.",
                "* This is the first list item in a list block\n* This is a list item\n* This is another list item",
            ]
        );
    }

    #[test]
    fn extra_blank_lines_collapse() {
        assert_eq!(
            segment_blocks("\n\nfirst\n\n\n\n  second  \n\n\n"),
            vec!["first", "second"]
        );
    }

    #[test]
    fn empty_document_has_no_blocks() {
        assert!(segment_blocks("").is_empty());
        assert!(segment_blocks("\n\n   \n\n").is_empty());
    }

    #[test]
    fn single_block_is_trimmed() {
        assert_eq!(segment_blocks("  only block\n"), vec!["only block"]);
    }

    #[test]
    fn headings() {
        assert_eq!(classify_block("# Title"), BlockType::Heading(1));
        assert_eq!(classify_block("### Sub"), BlockType::Heading(3));
        assert_eq!(classify_block("###### Deep"), BlockType::Heading(6));
    }

    #[test]
    fn not_headings() {
        assert_eq!(classify_block("####### Too deep"), BlockType::Paragraph);
        assert_eq!(classify_block("#nospace"), BlockType::Paragraph);
        assert_eq!(classify_block("#"), BlockType::Paragraph);
    }

    #[test]
    fn code_fences() {
        assert_eq!(classify_block("```\nlet x = 1;\n```"), BlockType::Code);
        assert_eq!(classify_block("``````"), BlockType::Code);
        // Opening and closing fences must not overlap.
        assert_eq!(classify_block("````"), BlockType::Paragraph);
    }

    #[test]
    fn quotes() {
        assert_eq!(classify_block("> a\n> b"), BlockType::Quote);
        assert_eq!(classify_block("> a\n>\n> b"), BlockType::Quote);
        assert_eq!(classify_block("> a\nb"), BlockType::Paragraph);
    }

    #[test]
    fn unordered_lists() {
        assert_eq!(classify_block("* a\n* b"), BlockType::UnorderedList);
        assert_eq!(classify_block("- a\n- b"), BlockType::UnorderedList);
        assert_eq!(classify_block("* a\n- b"), BlockType::Paragraph);
        assert_eq!(classify_block("- a\nb"), BlockType::Paragraph);
    }

    #[test]
    fn ordered_lists() {
        assert_eq!(classify_block("1. a\n2. b\n3. c"), BlockType::OrderedList);
        assert_eq!(classify_block("1. a\n3. b"), BlockType::Paragraph);
        assert_eq!(classify_block("2. a\n3. b"), BlockType::Paragraph);
    }

    #[test]
    fn rule_order_matters() {
        // A list marker after a quote prefix is still a quote.
        assert_eq!(classify_block("> * a\n> * b"), BlockType::Quote);
        assert_eq!(classify_block("# > not a quote"), BlockType::Heading(1));
    }

    #[test]
    fn classification_is_pure() {
        let block = "1. a\n2. b";
        assert_eq!(classify_block(block), classify_block(block));
    }

    #[test]
    fn names_round_trip() {
        for ty in [
            BlockType::Heading(1),
            BlockType::Code,
            BlockType::Quote,
            BlockType::UnorderedList,
            BlockType::OrderedList,
            BlockType::Paragraph,
        ] {
            assert_eq!(ty.name().parse::<BlockType>().unwrap(), ty);
        }
        assert_eq!(
            "table".parse::<BlockType>(),
            Err(Error::UnknownBlockType("table".into()))
        );
    }

    #[test]
    fn same_kind_ignores_level() {
        assert!(BlockType::Heading(2).same_kind(BlockType::Heading(1)));
        assert!(!BlockType::Code.same_kind(BlockType::Quote));
        assert_eq!(BlockType::Heading(2).to_string(), "heading(2)");
    }
}
