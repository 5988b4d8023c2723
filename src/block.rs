//! Hierarchical listfile blocks.
//! A [`Block`] is an ordered tree of text lines and nested blocks. A block may be
//! guarded by a CMake `if()` condition and may carry a comment that is written
//! right before its content.

use log::{debug, trace};
use std::io::{self, Write};

/// Number of spaces per nesting level.
pub const INDENT_UNIT: usize = 2;

/// Formats comment text as listfile comment lines.
///
/// Every `\n`-separated line becomes `# <line>`, empty ones included.
/// Empty text yields no lines at all.
pub fn comment_lines(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n').map(|line| format!("# {line}")).collect()
}

fn pad(level: usize) -> String {
    " ".repeat(level * INDENT_UNIT)
}

/// A single child of a [`Block`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    /// Already formatted text, written verbatim after the indentation.
    Line(String),
    /// Nested block, rendered one level deeper than its parent.
    Block(Block),
}

impl From<String> for Item {
    fn from(line: String) -> Self {
        Item::Line(line)
    }
}

impl From<&str> for Item {
    fn from(line: &str) -> Self {
        Item::Line(line.to_string())
    }
}

impl From<Block> for Item {
    fn from(block: Block) -> Self {
        Item::Block(block)
    }
}

/// Argument of [`Block::append`]: one item or a flat run of items.
///
/// Nested sequences have no conversion and must be flattened by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Appended as one child.
    Single(Item),
    /// Each element becomes its own child, in order.
    Sequence(Vec<Item>),
}

impl From<Item> for Fragment {
    fn from(item: Item) -> Self {
        Fragment::Single(item)
    }
}

impl From<String> for Fragment {
    fn from(line: String) -> Self {
        Fragment::Single(Item::from(line))
    }
}

impl From<&str> for Fragment {
    fn from(line: &str) -> Self {
        Fragment::Single(Item::from(line))
    }
}

impl From<Block> for Fragment {
    fn from(block: Block) -> Self {
        Fragment::Single(Item::from(block))
    }
}

impl From<Vec<Item>> for Fragment {
    fn from(items: Vec<Item>) -> Self {
        Fragment::Sequence(items)
    }
}

impl From<Vec<String>> for Fragment {
    fn from(lines: Vec<String>) -> Self {
        Fragment::Sequence(lines.into_iter().map(Item::from).collect())
    }
}

impl From<Vec<&str>> for Fragment {
    fn from(lines: Vec<&str>) -> Self {
        Fragment::Sequence(lines.into_iter().map(Item::from).collect())
    }
}

/// Ordered group of listfile lines and nested blocks.
///
/// With an empty condition the children are written as they are. With a
/// condition they are wrapped in `if(<condition>)` / `endif() # <condition>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    condition: String,
    comment: String,
    items: Vec<Item>,
}

impl Block {
    /// Creates an unconditional block without a comment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a block whose children are guarded by `condition`.
    pub fn conditional<S: Into<String>>(condition: S) -> Self {
        let condition = condition.into();
        trace!("New conditional block: '{}'", condition);
        Self { condition, ..Self::default() }
    }

    /// Sets the comment written before the block content.
    pub fn with_comment<S: Into<String>>(self, comment: S) -> Self {
        Self { comment: comment.into(), ..self }
    }

    pub fn condition(&self) -> &str {
        &self.condition
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_conditional(&self) -> bool {
        !self.condition.is_empty()
    }

    /// Appends a line, a block, or a flat sequence of them.
    ///
    /// Sequences are flattened here, each element becoming its own child.
    pub fn append<F: Into<Fragment>>(&mut self, fragment: F) -> &mut Self {
        match fragment.into() {
            Fragment::Single(item) => {
                trace!("Appending {:?}", item);
                self.items.push(item);
            }
            Fragment::Sequence(items) => {
                trace!("Appending {} items", items.len());
                self.items.extend(items);
            }
        }
        self
    }

    /// Writes the block tree to `sink`.
    ///
    /// Lines are indented by `depth` levels, nested blocks are rendered at
    /// `depth + 1`. Comment and `if()`/`endif()` lines sit one level shallower
    /// than the content (never below zero). Write errors abort the traversal
    /// and are returned as is.
    pub fn render<W: Write + ?Sized>(&self, sink: &mut W, depth: usize) -> io::Result<()> {
        debug!(
            "Rendering block at depth {} ({} items, condition: '{}')",
            depth,
            self.items.len(),
            self.condition
        );
        let wrapper_pad = pad(depth.saturating_sub(1));

        if !self.comment.is_empty() {
            for line in comment_lines(&self.comment) {
                writeln!(sink, "{wrapper_pad}{line}")?;
            }
            writeln!(sink)?;
        }

        if self.is_conditional() {
            writeln!(sink, "{wrapper_pad}if({})", self.condition)?;
        }

        let content_pad = pad(depth);
        for item in &self.items {
            match item {
                Item::Line(line) => writeln!(sink, "{content_pad}{line}")?,
                Item::Block(block) => block.render(sink, depth + 1)?,
            }
        }

        if self.is_conditional() {
            writeln!(sink, "{wrapper_pad}endif() # {}", self.condition)?;
            writeln!(sink)?;
        }
        Ok(())
    }

    /// Renders the block tree into a new string.
    pub fn render_to_string(&self, depth: usize) -> io::Result<String> {
        let mut buffer = Vec::new();
        self.render(&mut buffer, depth)?;
        String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl Extend<Item> for Block {
    fn extend<T: IntoIterator<Item = Item>>(&mut self, iter: T) {
        self.items.extend(iter);
    }
}
