//! Copying static files into the build directory.
//!
//! - [`Context::copy_assets`]: top-level entries of `Assets/` → build root
//! - [`Context::copy_content_resources`]: bundle folders → next to their content

use super::{BuildError, Content, Context};
use crate::log;
use std::{fs, path::Path};
use walkdir::WalkDir;

/// Files never copied out of a content bundle.
pub const IGNORED_RESOURCES: &[&str] = &[".DS_Store", "index.md"];

impl<C: Content> Context<C> {
    /// Copy every entry of the assets directory to the root of the build
    /// directory. Directories are copied with their whole subtree.
    ///
    /// The build directory is created when it does not exist yet.
    pub fn copy_assets(&mut self) -> Result<(), BuildError> {
        let assets = self.assets_directory();
        let entries = fs::read_dir(assets).map_err(|err| BuildError::Io(assets.to_path_buf(), err))?;

        let build = self.build_directory();
        fs::create_dir_all(build)
            .map_err(|err| BuildError::BuildDirectoryCreationFailed(build.to_path_buf(), err))?;

        let mut copied = 0usize;
        for entry in entries {
            let entry = entry.map_err(|err| BuildError::Io(assets.to_path_buf(), err))?;
            copy_entry(&entry.path(), &self.build_directory().join(entry.file_name()))?;
            copied += 1;
        }

        log!("assets"; "{copied} entries copied");
        Ok(())
    }

    /// Copy the resource folder of each content bundle into the output
    /// directory of that content, skipping [`IGNORED_RESOURCES`].
    pub fn copy_content_resources(&mut self) -> Result<(), BuildError> {
        for content in self.all_content() {
            let Some(folder) = content.resources_folder() else {
                continue;
            };

            let output = self.output_directory(content.path());
            fs::create_dir_all(&output)
                .map_err(|err| BuildError::BuildDirectoryCreationFailed(output.clone(), err))?;

            let entries = fs::read_dir(folder).map_err(|err| BuildError::Io(folder.to_path_buf(), err))?;
            for entry in entries {
                let entry = entry.map_err(|err| BuildError::Io(folder.to_path_buf(), err))?;
                let name = entry.file_name();
                if name.to_str().is_some_and(|name| IGNORED_RESOURCES.contains(&name)) {
                    continue;
                }
                copy_entry(&entry.path(), &output.join(&name))?;
            }
        }
        Ok(())
    }
}

/// Copy a file, or a directory with everything below it.
fn copy_entry(source: &Path, destination: &Path) -> Result<(), BuildError> {
    if !source.is_dir() {
        fs::copy(source, destination).map_err(|err| BuildError::Io(source.to_path_buf(), err))?;
        return Ok(());
    }

    for entry in WalkDir::new(source) {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(source).to_path_buf();
            BuildError::Io(path, err.into())
        })?;
        let Ok(relative) = entry.path().strip_prefix(source) else {
            continue;
        };
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .map_err(|err| BuildError::BuildDirectoryCreationFailed(target.clone(), err))?;
        } else {
            fs::copy(entry.path(), &target)
                .map_err(|err| BuildError::Io(entry.path().to_path_buf(), err))?;
        }
    }
    Ok(())
}
