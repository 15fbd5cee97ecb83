use super::model::ResolvedConfig;

/// GoogleTest archive fetched by the generated CMake when no URL is supplied.
pub const DEFAULT_GTEST_URL: &str =
    "https://github.com/google/googletest/archive/refs/tags/v1.14.0.zip";

/// Reserved segment in template file names, replaced by the decorated
/// folder name. Deliberately undelimited so `PROJECT_NAME_test.cpp` works.
pub const NAME_PLACEHOLDER: &str = "PROJECT_NAME";

/// Subdirectory of the generated module that receives a local GoogleTest
/// copy; the local `{{GTEST_DECLARATION}}` form points CMake at it.
pub const GTEST_VENDOR_SUBDIR: &str = "third_party/googletest";

/// Builds the full token table for one generation run.
///
/// Pure function of the resolved configuration; every token that can appear
/// in the template tree is enumerated here. The `{{...}}` delimiters ensure
/// no token is a prefix of another, so substitution order never matters.
pub fn replacement_table(config: &ResolvedConfig) -> Vec<(&'static str, String)> {
    let compiler_path = normalize_compiler_path(&config.cpp_compiler);
    let compiler_arg = if compiler_path.is_empty() {
        String::new()
    } else {
        format!("-DCMAKE_CXX_COMPILER=\"{compiler_path}\"")
    };
    let generator_name = config.cmake_generator.trim().to_string();
    let generator_arg = if generator_name.is_empty() {
        String::new()
    } else {
        format!("-G \"{generator_name}\"")
    };

    vec![
        ("{{PROJECT_NAME}}", config.folder_name()),
        ("{{NAMESPACE}}", config.namespace.clone()),
        ("{{GTEST_DECLARATION}}", gtest_declaration(config)),
        ("{{AUTHOR}}", config.author.clone()),
        ("{{DESCRIPTION}}", config.description.clone()),
        ("{{PREFIX}}", config.prefix.clone()),
        ("{{SUFFIX}}", config.suffix.clone()),
        ("{{CPP_STD}}", config.cpp_std.clone()),
        ("{{CPP_STD_REQ}}", on_off(config.cpp_std_req)),
        ("{{EXPORT_CMDS}}", on_off(config.export_cmds)),
        ("{{LIB_TYPE}}", config.lib_type.to_string()),
        ("{{CLANG_TIDY}}", on_off(config.tidy_in_build)),
        ("{{COMPILER_ARG}}", compiler_arg),
        ("{{COMPILER_PATH}}", compiler_path),
        ("{{GENERATOR_ARG}}", generator_arg),
        ("{{GENERATOR_NAME}}", generator_name),
    ]
}

/// The FetchContent block embedded in the generated CMakeLists: either the
/// local vendored source directory or a URL fetch.
fn gtest_declaration(config: &ResolvedConfig) -> String {
    if config.gtest_is_local {
        format!(
            "FetchContent_Declare(\n    googletest\n    SOURCE_DIR ${{CMAKE_CURRENT_SOURCE_DIR}}/{GTEST_VENDOR_SUBDIR}\n)"
        )
    } else {
        format!(
            "FetchContent_Declare(\n    googletest\n    URL {}\n    DOWNLOAD_EXTRACT_TIMESTAMP TRUE\n)",
            config.gtest_url
        )
    }
}

fn on_off(value: bool) -> String {
    if value { "ON" } else { "OFF" }.to_string()
}

/// CMake rejects backslashes in compiler paths on Windows; normalize to
/// forward slashes and strip surrounding quotes.
fn normalize_compiler_path(raw: &str) -> String {
    raw.trim().trim_matches('"').replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RawConfig;

    fn resolved(raw: RawConfig) -> ResolvedConfig {
        ResolvedConfig::resolve(&RawConfig {
            module_name: Some("Widgets".to_string()),
            ..raw
        })
        .unwrap()
    }

    fn lookup<'a>(table: &'a [(&'static str, String)], key: &str) -> &'a str {
        &table
            .iter()
            .find(|(k, _)| *k == key)
            .unwrap_or_else(|| panic!("token {key} missing"))
            .1
    }

    #[test]
    fn test_table_contains_every_supported_token() {
        let table = replacement_table(&resolved(RawConfig::default()));
        let expected = [
            "{{PROJECT_NAME}}",
            "{{NAMESPACE}}",
            "{{GTEST_DECLARATION}}",
            "{{AUTHOR}}",
            "{{DESCRIPTION}}",
            "{{PREFIX}}",
            "{{SUFFIX}}",
            "{{CPP_STD}}",
            "{{CPP_STD_REQ}}",
            "{{EXPORT_CMDS}}",
            "{{LIB_TYPE}}",
            "{{CLANG_TIDY}}",
            "{{COMPILER_ARG}}",
            "{{COMPILER_PATH}}",
            "{{GENERATOR_ARG}}",
            "{{GENERATOR_NAME}}",
        ];
        for key in expected {
            assert!(table.iter().any(|(k, _)| *k == key), "missing {key}");
        }
        assert_eq!(table.len(), expected.len());
    }

    #[test]
    fn test_project_name_token_uses_decorated_name() {
        let config = resolved(RawConfig {
            prefix: Some("Lib_".to_string()),
            suffix: Some("_Internal".to_string()),
            ..RawConfig::default()
        });
        let table = replacement_table(&config);
        assert_eq!(lookup(&table, "{{PROJECT_NAME}}"), "Lib_Widgets_Internal");
    }

    #[test]
    fn test_no_token_is_a_prefix_of_another() {
        let table = replacement_table(&resolved(RawConfig::default()));
        for (a, _) in &table {
            for (b, _) in &table {
                if a != b {
                    assert!(!a.starts_with(b), "{a} starts with {b}");
                }
            }
        }
    }

    #[test]
    fn test_gtest_declaration_url_form_with_default() {
        let table = replacement_table(&resolved(RawConfig::default()));
        let decl = lookup(&table, "{{GTEST_DECLARATION}}");
        assert!(decl.contains(DEFAULT_GTEST_URL));
        assert!(decl.contains("DOWNLOAD_EXTRACT_TIMESTAMP TRUE"));
    }

    #[test]
    fn test_gtest_declaration_url_form_with_custom_url() {
        let config = resolved(RawConfig {
            gtest_url: Some("https://example.com/gtest.zip".to_string()),
            ..RawConfig::default()
        });
        let table = replacement_table(&config);
        let decl = lookup(&table, "{{GTEST_DECLARATION}}");
        assert!(decl.contains("URL https://example.com/gtest.zip"));
    }

    #[test]
    fn test_gtest_declaration_local_form() {
        let config = resolved(RawConfig {
            gtest_is_local: Some(true),
            ..RawConfig::default()
        });
        let table = replacement_table(&config);
        let decl = lookup(&table, "{{GTEST_DECLARATION}}");
        assert!(decl.contains("SOURCE_DIR ${CMAKE_CURRENT_SOURCE_DIR}/third_party/googletest"));
        assert!(!decl.contains("URL "));
    }

    #[test]
    fn test_on_off_flags() {
        let config = resolved(RawConfig {
            cpp_std_req: Some(false),
            export_cmds: Some(true),
            tidy_in_build: Some(true),
            ..RawConfig::default()
        });
        let table = replacement_table(&config);
        assert_eq!(lookup(&table, "{{CPP_STD_REQ}}"), "OFF");
        assert_eq!(lookup(&table, "{{EXPORT_CMDS}}"), "ON");
        assert_eq!(lookup(&table, "{{CLANG_TIDY}}"), "ON");
    }

    #[test]
    fn test_compiler_arg_empty_when_no_compiler() {
        let table = replacement_table(&resolved(RawConfig::default()));
        assert_eq!(lookup(&table, "{{COMPILER_ARG}}"), "");
        assert_eq!(lookup(&table, "{{COMPILER_PATH}}"), "");
    }

    #[test]
    fn test_compiler_path_normalized_and_wrapped() {
        let config = resolved(RawConfig {
            cpp_compiler: Some(r#" "C:\tools\clang++.exe" "#.to_string()),
            ..RawConfig::default()
        });
        let table = replacement_table(&config);
        assert_eq!(lookup(&table, "{{COMPILER_PATH}}"), "C:/tools/clang++.exe");
        assert_eq!(
            lookup(&table, "{{COMPILER_ARG}}"),
            "-DCMAKE_CXX_COMPILER=\"C:/tools/clang++.exe\""
        );
    }

    #[test]
    fn test_generator_arg_wrapped_only_when_set() {
        let table = replacement_table(&resolved(RawConfig::default()));
        assert_eq!(lookup(&table, "{{GENERATOR_ARG}}"), "");

        let config = resolved(RawConfig {
            cmake_generator: Some("Ninja".to_string()),
            ..RawConfig::default()
        });
        let table = replacement_table(&config);
        assert_eq!(lookup(&table, "{{GENERATOR_ARG}}"), "-G \"Ninja\"");
        assert_eq!(lookup(&table, "{{GENERATOR_NAME}}"), "Ninja");
    }
}
