//! Debug rendering of a heap's slot layout
//!
//! Two read-only views written into any [`fmt::Write`] sink:
//!
//! - [`write_array`]: payloads in slot order, each followed by a space
//! - [`write_tree`]: one `payload(priority)` per line, right subtree first,
//!   indented three spaces per tree level, so the output reads as the tree
//!   rotated a quarter turn counter-clockwise
//!
//! An empty heap renders as `(EMPTY)`. A non-empty heading is written on its
//! own line before either view.
//!
//! # Example
//!
//! ```rust
//! use dynamic_containers::binary_max::BinaryMaxHeap;
//! use dynamic_containers::render;
//!
//! let heap: BinaryMaxHeap<char, u32> = [(5, 'A'), (3, 'B'), (8, 'C')].into_iter().collect();
//!
//! let mut out = String::new();
//! render::write_tree(&mut out, "", &heap).unwrap();
//! assert_eq!(out, "   A(5)\nC(8)\n   B(3)\n");
//! ```

use std::fmt::{self, Display, Write};

use crate::binary_max::BinaryMaxHeap;

const EMPTY: &str = "(EMPTY)";

/// Spaces of indentation per tree level
const INDENT: usize = 3;

fn write_heading<W: Write>(sink: &mut W, heading: &str) -> fmt::Result {
    if heading.is_empty() {
        Ok(())
    } else {
        writeln!(sink, "{}", heading)
    }
}

/// Tree depth of slot `index`: `floor(log2(index + 1))`
#[inline]
fn depth(index: usize) -> usize {
    (index + 1).ilog2() as usize
}

/// Writes the payloads in slot order, separated by single spaces
pub fn write_array<W, T, P>(sink: &mut W, heading: &str, heap: &BinaryMaxHeap<T, P>) -> fmt::Result
where
    W: Write,
    T: Display,
    P: Ord,
{
    write_heading(sink, heading)?;
    let slots = heap.slots();
    if slots.is_empty() {
        return writeln!(sink, "{}", EMPTY);
    }
    for (_, item) in slots {
        write!(sink, "{} ", item)?;
    }
    Ok(())
}

/// Writes the heap as a sideways tree, one `payload(priority)` per line
pub fn write_tree<W, T, P>(sink: &mut W, heading: &str, heap: &BinaryMaxHeap<T, P>) -> fmt::Result
where
    W: Write,
    T: Display,
    P: Ord + Display,
{
    write_heading(sink, heading)?;
    let slots = heap.slots();
    if slots.is_empty() {
        return writeln!(sink, "{}", EMPTY);
    }
    write_subtree(sink, slots, 0)
}

fn write_subtree<W, T, P>(sink: &mut W, slots: &[(P, T)], index: usize) -> fmt::Result
where
    W: Write,
    T: Display,
    P: Display,
{
    let right = 2 * index + 2;
    let left = 2 * index + 1;

    if right < slots.len() {
        write_subtree(sink, slots, right)?;
    }
    let (priority, item) = &slots[index];
    writeln!(
        sink,
        "{:indent$}{}({})",
        "",
        item,
        priority,
        indent = depth(index) * INDENT
    )?;
    if left < slots.len() {
        write_subtree(sink, slots, left)?;
    }
    Ok(())
}

impl<T: Display, P: Ord> Display for BinaryMaxHeap<T, P> {
    /// Same output as [`write_array`] without a heading
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_array(f, "", self)
    }
}
