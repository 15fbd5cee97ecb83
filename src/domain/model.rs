use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::replacements::DEFAULT_GTEST_URL;
use super::validation::{validate_identifier, validate_identifier_or_empty};

/// Raw key/value configuration as collected from the CLI, a config file, the
/// persisted session, or interactive prompts. Every field is optional and
/// unknown keys are ignored; `project_name` is accepted as a legacy alias for
/// `module_name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    #[serde(alias = "project_name", skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtest_is_local: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtest_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtest_local_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpp_std: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpp_std_req: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_cmds: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lib_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tidy_in_build: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpp_compiler: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmake_generator: Option<String>,
}

impl RawConfig {
    /// Overlays `other` on top of `self`; fields set in `other` win.
    /// Merge order across sources is session < config file < CLI < prompts.
    pub fn merge(mut self, other: RawConfig) -> RawConfig {
        macro_rules! take {
            ($($field:ident),+ $(,)?) => {
                $(if other.$field.is_some() { self.$field = other.$field; })+
            };
        }
        take!(
            module_name,
            namespace,
            prefix,
            suffix,
            output_dir,
            overwrite,
            gtest_is_local,
            gtest_url,
            gtest_local_version,
            author,
            description,
            cpp_std,
            cpp_std_req,
            export_cmds,
            lib_type,
            tidy_in_build,
            cpp_compiler,
            cmake_generator,
        );
        self
    }
}

/// Library linkage kind for the generated CMake target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LibType {
    #[default]
    Static,
    Shared,
}

impl FromStr for LibType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "STATIC" => Ok(LibType::Static),
            "SHARED" => Ok(LibType::Shared),
            _ => Err(format!("unknown library type '{s}' (expected STATIC or SHARED)")),
        }
    }
}

impl fmt::Display for LibType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LibType::Static => write!(f, "STATIC"),
            LibType::Shared => write!(f, "SHARED"),
        }
    }
}

/// Validated, defaulted view of a [`RawConfig`]. Immutable once produced;
/// the raw input is never aliased or mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub module_name: String,
    pub namespace: String,
    pub prefix: String,
    pub suffix: String,
    pub output_dir: PathBuf,
    pub overwrite: bool,
    pub gtest_is_local: bool,
    pub gtest_url: String,
    pub gtest_local_version: Option<String>,
    pub author: String,
    pub description: String,
    pub cpp_std: String,
    pub cpp_std_req: bool,
    pub export_cmds: bool,
    pub lib_type: LibType,
    pub tidy_in_build: bool,
    pub cpp_compiler: String,
    pub cmake_generator: String,
}

impl ResolvedConfig {
    /// Fills defaults and validates a raw configuration.
    ///
    /// Identifier checks run in a fixed order (module name, namespace,
    /// prefix, suffix) and the first offending field is reported.
    ///
    /// # Errors
    /// [`ConfigError`] when the module name is missing or any naming field is
    /// not a valid identifier.
    pub fn resolve(raw: &RawConfig) -> Result<ResolvedConfig, ConfigError> {
        let module_name = raw
            .module_name
            .clone()
            .ok_or(ConfigError::MissingModuleName)?;
        let prefix = raw.prefix.clone().unwrap_or_default();
        let suffix = raw.suffix.clone().unwrap_or_default();

        validate_identifier("module_name", &module_name)?;
        if let Some(namespace) = &raw.namespace {
            validate_identifier_or_empty("namespace", namespace)?;
        }
        validate_identifier_or_empty("prefix", &prefix)?;
        validate_identifier_or_empty("suffix", &suffix)?;

        // Once the naming fields pass, a namespace derived from them is
        // itself a valid identifier.
        let folder_name = format!("{prefix}{module_name}{suffix}");
        let namespace = raw
            .namespace
            .clone()
            .unwrap_or_else(|| format!("{folder_name}Space"));

        let output_dir = match &raw.output_dir {
            Some(dir) => absolute_normalized(Path::new(dir)),
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        };

        let lib_type = match &raw.lib_type {
            Some(s) => s
                .parse::<LibType>()
                .map_err(|reason| ConfigError::InvalidValue {
                    field: "lib_type",
                    value: s.clone(),
                    reason,
                })?,
            None => LibType::default(),
        };

        Ok(ResolvedConfig {
            module_name,
            namespace,
            prefix,
            suffix,
            output_dir,
            overwrite: raw.overwrite.unwrap_or(false),
            gtest_is_local: raw.gtest_is_local.unwrap_or(false),
            gtest_url: raw
                .gtest_url
                .clone()
                .unwrap_or_else(|| DEFAULT_GTEST_URL.to_string()),
            gtest_local_version: raw.gtest_local_version.clone(),
            author: raw.author.clone().unwrap_or_else(|| "Artisan".to_string()),
            description: raw
                .description
                .clone()
                .unwrap_or_else(|| "A module of great potential".to_string()),
            cpp_std: raw.cpp_std.clone().unwrap_or_else(|| "17".to_string()),
            cpp_std_req: raw.cpp_std_req.unwrap_or(true),
            export_cmds: raw.export_cmds.unwrap_or(true),
            lib_type,
            tidy_in_build: raw.tidy_in_build.unwrap_or(false),
            cpp_compiler: raw.cpp_compiler.clone().unwrap_or_default(),
            cmake_generator: raw.cmake_generator.clone().unwrap_or_default(),
        })
    }

    /// Decorated name used as the output directory leaf and as the
    /// substitution value for file names: `prefix + module_name + suffix`.
    pub fn folder_name(&self) -> String {
        format!("{}{}{}", self.prefix, self.module_name, self.suffix)
    }

    /// Absolute path of the module directory this configuration generates.
    pub fn target_path(&self) -> PathBuf {
        self.output_dir.join(self.folder_name())
    }
}

impl From<&ResolvedConfig> for RawConfig {
    fn from(config: &ResolvedConfig) -> Self {
        RawConfig {
            module_name: Some(config.module_name.clone()),
            namespace: Some(config.namespace.clone()),
            prefix: Some(config.prefix.clone()),
            suffix: Some(config.suffix.clone()),
            output_dir: Some(config.output_dir.to_string_lossy().into_owned()),
            overwrite: Some(config.overwrite),
            gtest_is_local: Some(config.gtest_is_local),
            gtest_url: Some(config.gtest_url.clone()),
            gtest_local_version: config.gtest_local_version.clone(),
            author: Some(config.author.clone()),
            description: Some(config.description.clone()),
            cpp_std: Some(config.cpp_std.clone()),
            cpp_std_req: Some(config.cpp_std_req),
            export_cmds: Some(config.export_cmds),
            lib_type: Some(config.lib_type.to_string()),
            tidy_in_build: Some(config.tidy_in_build),
            cpp_compiler: Some(config.cpp_compiler.clone()),
            cmake_generator: Some(config.cmake_generator.clone()),
        }
    }
}

/// Makes a path absolute (against the current directory) and lexically
/// normalizes it, dropping `.` components and resolving `..` without touching
/// the filesystem.
fn absolute_normalized(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };

    let mut components = joined.components().peekable();
    let mut normalized = if let Some(c @ Component::Prefix(..)) = components.peek().cloned() {
        components.next();
        PathBuf::from(c.as_os_str())
    } else {
        PathBuf::new()
    };
    for component in components {
        match component {
            Component::Prefix(..) => unreachable!("prefix handled above"),
            Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            Component::Normal(c) => normalized.push(c),
        }
    }
    normalized
}
