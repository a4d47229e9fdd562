//! Render command implementation

use crate::cli::RenderArgs;
use crate::config::Config;
use crate::error::{Result, TreeError};
use crate::ignore::{resolve_patterns, IgnoreSet};
use crate::tree::{FsLister, TreeRenderer};

/// Run the render command
pub fn run(args: RenderArgs, config: &Config) -> Result<()> {
    let root = args.path.canonicalize().map_err(|e| TreeError::Io {
        path: args.path.clone(),
        source: e,
    })?;

    let ignore_file = args
        .ignore_file
        .unwrap_or_else(|| config.ignore.ignore_file.clone());
    let fallback = args
        .fallback
        .unwrap_or_else(|| config.ignore.fallback_patterns.clone());

    let patterns = resolve_patterns(&root.join(&ignore_file), &fallback);
    let ignore = IgnoreSet::new(&patterns);

    tracing::info!(
        path = %root.display(),
        patterns = ignore.len(),
        "Rendering tree"
    );

    let lister = FsLister;
    let renderer = TreeRenderer::new(&lister, &ignore);

    let output = if args.parallel || config.render.parallel {
        renderer.render_parallel(&root)?
    } else {
        renderer.render(&root)?
    };

    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
