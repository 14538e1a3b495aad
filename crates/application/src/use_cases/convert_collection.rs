//! Convert collection use case.

use std::path::{Path, PathBuf};

use courier_domain::{
    Body, CollectionDocument, ConversionConfig, Item, render_request, sanitize_name,
};
use tracing::{debug, warn};

use crate::error::ConversionError;
use crate::ports::FileSystem;
use crate::report::{ConversionSummary, ItemFailure};

/// An item waiting to be visited, with the directory it belongs in.
struct Pending<'a> {
    item: &'a Item,
    dir: PathBuf,
    /// Display path of the parent folder, empty at the root
    parent: String,
}

/// Mirrors a collection tree onto the file system.
///
/// Each request item becomes a `.http` file in the directory of its parent
/// folder; each folder item becomes a directory. Items are visited in
/// depth-first pre-order, so a folder's directory always exists before its
/// children are written.
pub struct ConvertCollection<F: FileSystem> {
    fs: F,
    config: ConversionConfig,
}

impl<F: FileSystem> ConvertCollection<F> {
    /// Creates a new `ConvertCollection` use case.
    #[must_use]
    pub const fn new(fs: F, config: ConversionConfig) -> Self {
        Self { fs, config }
    }

    /// Writes the collection tree below `output_dir`.
    ///
    /// `output_dir` itself must already exist. A request that cannot be
    /// written, or a folder whose directory cannot be created, is recorded
    /// in the summary and skipped together with its descendants; the rest of
    /// the tree is still converted.
    pub async fn execute(
        &self,
        document: &CollectionDocument,
        output_dir: &Path,
    ) -> ConversionSummary {
        let mut summary = ConversionSummary::new(output_dir);
        let mut stack: Vec<Pending<'_>> = document
            .item
            .iter()
            .rev()
            .map(|item| Pending {
                item,
                dir: output_dir.to_path_buf(),
                parent: String::new(),
            })
            .collect();

        while let Some(Pending { item, dir, parent }) = stack.pop() {
            let item_path = if parent.is_empty() {
                item.name.clone()
            } else {
                format!("{parent}/{}", item.name)
            };

            if let Some(request) = &item.request {
                let path = dir.join(self.config.request_file_name(&item.name));
                let contents = render_request(request);
                match self.fs.write_file(&path, contents.as_bytes()).await {
                    Ok(()) => {
                        debug!(
                            path = %path.display(),
                            body_mode = request.body.as_ref().and_then(Body::mode),
                            "Wrote request"
                        );
                        summary.requests_written += 1;
                    }
                    Err(source) => {
                        let error = ConversionError::Write { path, source };
                        warn!(item = %item_path, %error, "Skipping request");
                        summary.failures.push(ItemFailure::new(item_path.clone(), error));
                    }
                }
            }

            if item.is_folder() {
                let folder_dir = dir.join(sanitize_name(&item.name));
                match self.fs.create_dir_all(&folder_dir).await {
                    Ok(()) => {
                        debug!(path = %folder_dir.display(), "Created folder");
                        summary.folders_created += 1;
                        stack.extend(item.children.iter().rev().map(|child| Pending {
                            item: child,
                            dir: folder_dir.clone(),
                            parent: item_path.clone(),
                        }));
                    }
                    Err(source) => {
                        let error = ConversionError::CreateDir {
                            path: folder_dir,
                            source,
                        };
                        warn!(item = %item_path, %error, "Skipping folder");
                        summary.failures.push(ItemFailure::new(item_path, error));
                    }
                }
            }
        }

        summary
    }
}
