//! Python file discovery with exclusion patterns
//!
//! Path arguments may be files, directories, or glob patterns.
//! Directories expand recursively unless disabled. Exclusion patterns
//! support literal paths, directory prefixes (`dir/`), the `*` / `?` /
//! `[...]` wildcards, and the recursive `**` wildcard; they match
//! against paths relative to the project root.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;

/// Collect the Python files selected by `paths`, minus exclusions.
///
/// An empty `paths` list means the whole project directory. Results are
/// absolute-ish (as given), deduplicated, and sorted.
pub fn collect_python_files(
    root: &Path,
    paths: &[String],
    exclude: &[String],
    recursive: bool,
) -> Result<Vec<PathBuf>> {
    let patterns = compile_exclusions(exclude);

    let mut selected: BTreeSet<PathBuf> = BTreeSet::new();
    let roots: Vec<String> = if paths.is_empty() {
        vec![root.display().to_string()]
    } else {
        paths.to_vec()
    };

    for arg in &roots {
        for file in expand_path_arg(arg, recursive)? {
            if !is_python_file(&file) {
                continue;
            }
            let relative = file.strip_prefix(root).unwrap_or(&file);
            if patterns.iter().any(|p| p.matches_path(relative)) {
                continue;
            }
            selected.insert(file);
        }
    }

    Ok(selected.into_iter().collect())
}

/// Expand one path argument into candidate files
fn expand_path_arg(arg: &str, recursive: bool) -> Result<Vec<PathBuf>> {
    let path = Path::new(arg);

    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let pattern = if path.is_dir() || arg.ends_with('/') {
        let dir = arg.trim_end_matches('/');
        if recursive {
            format!("{dir}/**/*.py")
        } else {
            format!("{dir}/*.py")
        }
    } else {
        arg.to_string()
    };

    let mut files = Vec::new();
    let entries =
        glob::glob(&pattern).with_context(|| format!("Invalid path pattern '{arg}'"))?;
    for entry in entries {
        match entry {
            Ok(file) => files.push(file),
            Err(err) => eprintln!("Warning: cannot read {}: {}", err.path().display(), err),
        }
    }
    Ok(files)
}

/// True for regular files with a .py suffix (case-insensitive)
fn is_python_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("py"))
}

/// Compile exclusion strings into glob patterns.
///
/// A directory pattern also excludes everything beneath it, and a
/// pattern without a separator matches at any depth.
fn compile_exclusions(exclude: &[String]) -> Vec<Pattern> {
    let mut patterns = Vec::new();
    for raw in exclude {
        let trimmed = raw.trim_end_matches('/');
        if trimmed.is_empty() {
            continue;
        }

        let mut variants = vec![trimmed.to_string(), format!("{trimmed}/**")];
        if !trimmed.contains('/') {
            variants.push(format!("**/{trimmed}"));
            variants.push(format!("**/{trimmed}/**"));
        }

        for variant in variants {
            match Pattern::new(&variant) {
                Ok(pattern) => patterns.push(pattern),
                Err(err) => {
                    eprintln!("Warning: ignoring invalid exclusion pattern '{raw}': {err}");
                    break;
                }
            }
        }
    }
    patterns
}

#[cfg(test)]
#[path = "discover_test.rs"]
mod tests;
