mod provider;
mod renderer;

pub use provider::{DirectoryEntry, DirectoryLister, FsLister};
pub use renderer::TreeRenderer;
