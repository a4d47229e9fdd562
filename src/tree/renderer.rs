use rayon::prelude::*;
use std::path::Path;

use crate::error::Result;
use crate::ignore::IgnoreSet;

use super::provider::{DirectoryEntry, DirectoryLister};

/// Renders a directory as an ASCII tree with box-drawing connectors.
///
/// The ignore set is resolved once by the caller and threaded unchanged
/// through the whole traversal; it is never re-resolved per subdirectory.
/// Any listing failure aborts the whole render - a partial tree is not a
/// meaningful product.
pub struct TreeRenderer<'a, L: DirectoryLister> {
    lister: &'a L,
    ignore: &'a IgnoreSet,
}

impl<'a, L: DirectoryLister> TreeRenderer<'a, L> {
    pub fn new(lister: &'a L, ignore: &'a IgnoreSet) -> Self {
        Self { lister, ignore }
    }

    /// Render the tree rooted at `root`, one entry per line, newline-joined.
    /// An empty or fully-ignored root yields the empty string.
    pub fn render(&self, root: &Path) -> Result<String> {
        let mut lines = Vec::new();
        self.render_dir(root, "", "", &mut lines)?;
        Ok(lines.join("\n"))
    }

    fn render_dir(
        &self,
        dir: &Path,
        rel: &str,
        prefix: &str,
        lines: &mut Vec<String>,
    ) -> Result<()> {
        let entries = self.lister.list(dir)?;
        let count = entries.len();

        for (index, entry) in entries.iter().enumerate() {
            // Sibling position is decided against the full listing, before
            // the ignore test: an ignored last sibling still leaves `├── `
            // on the entry before it.
            let is_last = index == count - 1;

            let rel_path = join_rel(rel, &entry.name);
            if self.ignore.is_ignored(&rel_path) {
                continue;
            }

            let connector = if is_last { "└── " } else { "├── " };
            lines.push(format!("{}{}{}", prefix, connector, entry.name));

            if entry.is_directory {
                let continuation = if is_last { "    " } else { "│   " };
                let child_prefix = format!("{}{}", prefix, continuation);
                self.render_dir(&dir.join(&entry.name), &rel_path, &child_prefix, lines)?;
            }
        }

        Ok(())
    }

    /// Parallel variant: sibling subtrees are listed concurrently and their
    /// line blocks joined in listing order, so the output is byte-identical
    /// to `render` regardless of completion order.
    pub fn render_parallel(&self, root: &Path) -> Result<String> {
        let lines = self.render_dir_parallel(root, "", "")?;
        Ok(lines.join("\n"))
    }

    fn render_dir_parallel(&self, dir: &Path, rel: &str, prefix: &str) -> Result<Vec<String>> {
        let entries = self.lister.list(dir)?;
        let count = entries.len();

        let blocks: Vec<Vec<String>> = entries
            .par_iter()
            .enumerate()
            .map(|(index, entry)| -> Result<Vec<String>> {
                let is_last = index == count - 1;

                let rel_path = join_rel(rel, &entry.name);
                if self.ignore.is_ignored(&rel_path) {
                    return Ok(Vec::new());
                }

                let connector = if is_last { "└── " } else { "├── " };
                let mut block = vec![format!("{}{}{}", prefix, connector, entry.name)];

                if entry.is_directory {
                    let continuation = if is_last { "    " } else { "│   " };
                    let child_prefix = format!("{}{}", prefix, continuation);
                    block.extend(self.render_dir_parallel(
                        &dir.join(&entry.name),
                        &rel_path,
                        &child_prefix,
                    )?);
                }

                Ok(block)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(blocks.into_iter().flatten().collect())
    }
}

/// Relative paths always use `/`, regardless of the host separator.
fn join_rel(rel: &str, name: &str) -> String {
    if rel.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", rel, name)
    }
}
