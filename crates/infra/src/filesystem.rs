// crates/infra/src/filesystem.rs
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use size_guard_ports::FileSizeProbe;
use size_guard_shared_kernel::{ByteCount, InfraResult, InfrastructureError};

/// `FileSizeProbe` backed by `std::fs` metadata.
#[derive(Debug, Clone, Copy)]
pub struct MetadataSizeProbe {
    follow_links: bool,
}

impl MetadataSizeProbe {
    #[must_use]
    pub fn new(follow_links: bool) -> Self {
        Self { follow_links }
    }
}

impl Default for MetadataSizeProbe {
    fn default() -> Self {
        Self::new(true)
    }
}

impl FileSizeProbe for MetadataSizeProbe {
    // With follow_links off a symlink reports its own length, not its target's.
    fn size_of(&self, path: &Path) -> InfraResult<ByteCount> {
        let metadata = if self.follow_links {
            std::fs::metadata(path)
        } else {
            std::fs::symlink_metadata(path)
        };
        metadata
            .map(|m| ByteCount::new(m.len()))
            .map_err(|source| InfrastructureError::SizeQuery { path: path.to_path_buf(), source })
    }
}

/// Controls how directory arguments are turned into file inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpansionPlan {
    pub recursive: bool,
    pub include_hidden: bool,
    pub follow_links: bool,
}

/// Expands directory roots into the regular files beneath them.
///
/// Without `recursive` every root is passed through untouched. Roots that do
/// not exist are kept so the size rule can apply its unresolved-size policy.
/// The same goes for entries the walk fails on (a dangling symlink, say):
/// they are logged and kept as inputs.
///
/// # Errors
/// Returns [`InfrastructureError::Walk`] when a root directory cannot be
/// traversed at all.
pub fn expand_inputs(roots: &[PathBuf], plan: ExpansionPlan) -> InfraResult<Vec<PathBuf>> {
    if !plan.recursive {
        return Ok(roots.to_vec());
    }

    let mut out = Vec::with_capacity(roots.len());
    for root in roots {
        if root.is_dir() {
            out.extend(walk_dir(root, plan)?);
        } else {
            out.push(root.clone());
        }
    }
    Ok(out)
}

fn walk_dir(root: &Path, plan: ExpansionPlan) -> InfraResult<Vec<PathBuf>> {
    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(!plan.include_hidden)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .ignore(false)
        .parents(false)
        .follow_links(plan.follow_links);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => match error_path(&err) {
                Some(path) if path != root => {
                    log::warn!("{}: {err}", path.display());
                    files.push(path.to_path_buf());
                    continue;
                }
                _ => {
                    return Err(InfrastructureError::Walk {
                        root: root.to_path_buf(),
                        details: err.to_string(),
                    });
                }
            },
        };
        if entry.file_type().is_some_and(|ft| ft.is_file()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    log::debug!("{}: expanded into {} files", root.display(), files.len());
    Ok(files)
}

// Walk errors nest; the offending path sits somewhere inside.
fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => error_path(err),
        ignore::Error::Partial(errs) => errs.iter().find_map(error_path),
        _ => None,
    }
}
