use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::error::{FileSystemError, ModuleGenError, TemplateError};
use crate::domain::model::ResolvedConfig;
use crate::domain::replacements::{replacement_table, GTEST_VENDOR_SUBDIR, NAME_PLACEHOLDER};
use crate::progress::ProgressEvent;

/// Name of the directory scanned for vendored GoogleTest versions, relative
/// to the working directory.
pub const GTEST_ASSET_ROOT: &str = "GoogleTestScr";

/// Materializes a module on disk from a template tree and a resolved
/// configuration. Operations run in order: [`Generator::create_target_dir`],
/// [`Generator::render_templates`], [`Generator::import_gtest_sources`].
///
/// There is no rollback: a failure mid-render leaves already-written files
/// in place.
pub struct Generator<'a> {
    config: &'a ResolvedConfig,
    replacements: Vec<(&'static str, String)>,
    template_dir: PathBuf,
    output_path: PathBuf,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a ResolvedConfig, template_dir: &Path) -> Self {
        Self {
            config,
            replacements: replacement_table(config),
            template_dir: template_dir.to_path_buf(),
            output_path: config.target_path(),
        }
    }

    /// Absolute path of the module directory being generated.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Creates the target module directory.
    ///
    /// Fails when the path already exists and overwrite is off. With
    /// overwrite on, an existing directory is reused as-is; nothing is
    /// deleted or inspected.
    pub fn create_target_dir(
        &self,
        sink: &mut dyn FnMut(ProgressEvent),
    ) -> Result<(), ModuleGenError> {
        if self.output_path.exists() && !self.config.overwrite {
            return Err(FileSystemError::TargetExists(self.output_path.clone()).into());
        }
        if !self.output_path.exists() {
            fs::create_dir_all(&self.output_path).map_err(|source| FileSystemError::CreateDir {
                path: self.output_path.clone(),
                source,
            })?;
        }
        sink(ProgressEvent::log(format!(
            "created module directory {}",
            self.output_path.display()
        )));
        Ok(())
    }

    /// Walks the template tree top-down, mirroring directories and rendering
    /// every file into the target.
    ///
    /// File names have every `PROJECT_NAME` segment replaced by the decorated
    /// folder name; file contents have every table token replaced by its
    /// literal value. One progress event is emitted per written file.
    pub fn render_templates(
        &self,
        sink: &mut dyn FnMut(ProgressEvent),
    ) -> Result<(), ModuleGenError> {
        let folder_name = self.config.folder_name();

        for entry in WalkDir::new(&self.template_dir) {
            let entry = entry.map_err(|err| {
                let file = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.template_dir.clone());
                TemplateError {
                    file,
                    source: err
                        .into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("template walk failed")),
                }
            })?;

            let relative = entry
                .path()
                .strip_prefix(&self.template_dir)
                .map_err(|e| ModuleGenError::Internal(e.into()))?;

            if entry.file_type().is_dir() {
                let target_dir = self.output_path.join(relative);
                fs::create_dir_all(&target_dir).map_err(|source| FileSystemError::CreateDir {
                    path: target_dir.clone(),
                    source,
                })?;
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            let target_name = file_name.replace(NAME_PLACEHOLDER, &folder_name);
            let target_file = match relative.parent() {
                Some(parent) => self.output_path.join(parent).join(&target_name),
                None => self.output_path.join(&target_name),
            };

            let content = fs::read_to_string(entry.path()).map_err(|source| TemplateError {
                file: entry.path().to_path_buf(),
                source,
            })?;
            let rendered = self.render_content(&content);

            if let Some(parent) = target_file.parent() {
                fs::create_dir_all(parent).map_err(|source| FileSystemError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            fs::write(&target_file, rendered).map_err(|source| TemplateError {
                file: target_file.clone(),
                source,
            })?;

            sink(ProgressEvent::log(format!(
                "wrote {}",
                target_file.display()
            )));
        }

        Ok(())
    }

    /// Copies a vendored GoogleTest source tree into the generated module.
    ///
    /// Runs only when the configuration asks for a local GoogleTest and a
    /// version selector is set. A missing version directory degrades to a
    /// warning instead of failing the run; any pre-existing copy at the
    /// destination is replaced.
    pub fn import_gtest_sources(
        &self,
        asset_root: &Path,
        sink: &mut dyn FnMut(ProgressEvent),
    ) -> Result<(), ModuleGenError> {
        if !self.config.gtest_is_local {
            return Ok(());
        }
        let Some(version) = self.config.gtest_local_version.as_deref() else {
            return Ok(());
        };

        let source_dir = asset_root.join(version);
        if !source_dir.is_dir() {
            sink(ProgressEvent::warning(format!(
                "local GoogleTest '{version}' not found under {}; skipping import",
                asset_root.display()
            )));
            return Ok(());
        }

        let destination = self.output_path.join(GTEST_VENDOR_SUBDIR);
        if destination.exists() {
            fs::remove_dir_all(&destination).map_err(|source| FileSystemError::Copy {
                path: destination.clone(),
                source,
            })?;
        }
        copy_dir_recursive(&source_dir, &destination)?;

        sink(ProgressEvent::log(format!(
            "imported GoogleTest {version} into {}",
            destination.display()
        )));
        Ok(())
    }

    fn render_content(&self, content: &str) -> String {
        let mut rendered = content.to_string();
        for (token, value) in &self.replacements {
            rendered = rendered.replace(token, value);
        }
        rendered
    }
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> Result<(), FileSystemError> {
    fs::create_dir_all(dst).map_err(|source| FileSystemError::CreateDir {
        path: dst.to_path_buf(),
        source,
    })?;
    let entries = fs::read_dir(src).map_err(|source| FileSystemError::Copy {
        path: src.to_path_buf(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| FileSystemError::Copy {
            path: src.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let dest_path = dst.join(entry.file_name());
        if path.is_dir() {
            copy_dir_recursive(&path, &dest_path)?;
        } else {
            fs::copy(&path, &dest_path).map_err(|source| FileSystemError::Copy {
                path: path.clone(),
                source,
            })?;
        }
    }
    Ok(())
}

/// Locates the shipped template tree: next to the installed binary, falling
/// back to the crate manifest directory during development.
pub fn default_template_dir() -> PathBuf {
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            let candidate = dir.join("templates");
            if candidate.is_dir() {
                return candidate;
            }
        }
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("templates")
}
