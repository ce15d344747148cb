//! Rendering resolved dependencies into file contents.

use std::path::Path;

use depgen_core::{CLI_NAME, OutputFormat, PackageEntry, relative_to};
use serde::Serialize;

use crate::{Error, Result, plan::PlannedFile};

/// Body of a conda environment file. Fields are declared in the order they
/// are written.
#[derive(Debug, Serialize)]
struct CondaEnvironment<'a> {
    channels: &'a [String],
    dependencies: &'a [PackageEntry],
    name: &'a str,
}

/// The two comment lines pointing readers back at the configuration.
///
/// `output_dir` is where the rendered file lives; the configuration path is
/// written relative to it.
pub fn header(config_path: &Path, output_dir: &Path) -> Result<String> {
    let relative = relative_to(config_path, output_dir).map_err(|source| Error::Path {
        path: config_path.to_path_buf(),
        source,
    })?;

    Ok(format!(
        "# This file is generated by `{cli}`.\n\
         # To make changes, edit {config} and run `{cli}`.\n",
        cli = CLI_NAME,
        config = relative.display(),
    ))
}

/// Render a conda environment body.
pub fn conda(name: &str, channels: &[String], dependencies: &[PackageEntry]) -> Result<String> {
    let env = CondaEnvironment {
        channels,
        dependencies,
        name,
    };
    serde_yaml::to_string(&env).map_err(|source| Error::Serialize {
        file_name: name.to_string(),
        source,
    })
}

/// Render a requirements body: one package per line.
pub fn requirements(dependencies: &[PackageEntry]) -> String {
    let lines: Vec<String> = dependencies.iter().map(ToString::to_string).collect();
    format!("{}\n", lines.join("\n"))
}

/// Render the complete contents of a planned file.
pub fn render(
    planned: &PlannedFile,
    config_path: &Path,
    channels: &[String],
    dependencies: &[PackageEntry],
) -> Result<String> {
    let mut content = header(config_path, &planned.output_dir)?;
    match planned.format {
        OutputFormat::Conda => content.push_str(&conda(planned.stem(), channels, dependencies)?),
        OutputFormat::Requirements => content.push_str(&requirements(dependencies)),
        OutputFormat::None => {}
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use depgen_core::Combination;

    use super::*;

    fn channels() -> Vec<String> {
        vec!["rapidsai".to_string(), "conda-forge".to_string()]
    }

    #[test]
    fn test_header_relative_to_output_dir() {
        let header = header(
            Path::new("repo/dependencies.yaml"),
            Path::new("repo/conda/environments"),
        )
        .unwrap();

        assert_eq!(
            header,
            "# This file is generated by `rapids-dependency-file-generator`.\n\
             # To make changes, edit ../../dependencies.yaml and run `rapids-dependency-file-generator`.\n"
        );
    }

    #[test]
    fn test_header_in_current_dir() {
        let header = header(Path::new("dependencies.yaml"), Path::new(".")).unwrap();
        assert!(header.contains("edit dependencies.yaml and run"));
    }

    #[test]
    fn test_conda_body() {
        let deps = vec![
            PackageEntry::plain("clang=11.1.0"),
            PackageEntry::plain("spdlog>=1.8.5,<1.9"),
            PackageEntry::grouped("pip", ["git+https://github.com/python-streamz/streamz.git"]),
        ];

        let body = conda("all_cuda-115", &channels(), &deps).unwrap();
        assert_eq!(
            body,
            "channels:\n\
             - rapidsai\n\
             - conda-forge\n\
             dependencies:\n\
             - clang=11.1.0\n\
             - spdlog>=1.8.5,<1.9\n\
             - pip:\n  \
               - git+https://github.com/python-streamz/streamz.git\n\
             name: all_cuda-115\n"
        );
    }

    #[test]
    fn test_conda_body_without_dependencies() {
        let body = conda("empty", &channels(), &[]).unwrap();
        assert!(body.contains("dependencies: []\n"));
    }

    #[test]
    fn test_requirements_body() {
        let deps = vec![PackageEntry::plain("dask"), PackageEntry::plain("numpy")];
        assert_eq!(requirements(&deps), "dask\nnumpy\n");
        assert_eq!(requirements(&[]), "\n");
    }

    #[test]
    fn test_render_requirements_file() {
        let planned = PlannedFile {
            file_key: "test".into(),
            format: OutputFormat::Requirements,
            combination: Combination::new(),
            file_name: "requirements_test.txt".into(),
            output_dir: PathBuf::from("python"),
        };

        let content = render(
            &planned,
            Path::new("dependencies.yaml"),
            &channels(),
            &[PackageEntry::plain("pytest")],
        )
        .unwrap();

        assert!(content.contains("edit ../dependencies.yaml and run"));
        assert!(content.ends_with("`.\npytest\n"));
    }
}
