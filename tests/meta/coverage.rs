//! Layout rules of the test suite: `tests/unit` mirrors `src` file by file,
//! feature-gated modules are tested under the same feature, and every test
//! file holds at least one test

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";
    const TESTS_DIR: &str = "tests";

    /// Files that only wire modules together or start a harness
    fn is_wiring(path: &Path) -> bool {
        matches!(
            path.file_name().and_then(|name| name.to_str()),
            Some("lib.rs" | "main.rs" | "mod.rs")
        )
    }

    /// Every `.rs` file below `dir`, relative to `dir`
    fn rust_files(dir: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut files = BTreeSet::new();
        let mut pending = vec![dir.to_path_buf()];

        while let Some(current) = pending.pop() {
            for entry in fs::read_dir(&current)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    let relative = path
                        .strip_prefix(dir)
                        .map_err(io::Error::other)?;
                    files.insert(relative.to_path_buf());
                }
            }
        }

        Ok(files)
    }

    fn scan(dir: &str) -> BTreeSet<PathBuf> {
        let result = rust_files(Path::new(dir));
        assert!(result.is_ok(), "cannot scan {dir}: {result:?}");
        result.unwrap_or_default()
    }

    fn module_files(dir: &str) -> BTreeSet<PathBuf> {
        scan(dir).into_iter().filter(|path| !is_wiring(path)).collect()
    }

    fn listing(paths: &[&PathBuf], prefix: &str) -> String {
        paths
            .iter()
            .map(|path| format!("  - {prefix}/{}", path.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Feature named by the `#[cfg(feature = "...")]` line directly above
    /// `pub mod <name>;` in the parent module file
    fn gating_feature(src_path: &Path) -> Option<String> {
        let name = src_path.file_stem()?.to_str()?;
        let parent = Path::new(SRC_DIR).join(src_path.parent()?).join("mod.rs");
        let content = fs::read_to_string(parent).ok()?;
        let declaration = format!("pub mod {name};");

        let lines: Vec<&str> = content.lines().map(str::trim).collect();
        let position = lines.iter().position(|line| *line == declaration)?;
        lines
            .get(..position)?
            .iter()
            .rev()
            .take_while(|line| line.starts_with("#[") || line.starts_with("///"))
            .find_map(|line| {
                let rest = line.strip_prefix("#[cfg(feature = \"")?;
                rest.split('"').next().map(str::to_string)
            })
    }

    #[test]
    fn test_every_source_file_has_unit_tests() {
        let sources = module_files(SRC_DIR);
        let units = module_files(UNIT_DIR);

        let missing: Vec<&PathBuf> = sources.difference(&units).collect();
        assert!(
            missing.is_empty(),
            "Source files without a unit test file:\n{}",
            listing(&missing, UNIT_DIR)
        );
    }

    #[test]
    fn test_every_unit_test_file_has_a_source() {
        let sources = module_files(SRC_DIR);
        let units = module_files(UNIT_DIR);

        let orphaned: Vec<&PathBuf> = units.difference(&sources).collect();
        assert!(
            orphaned.is_empty(),
            "Unit test files without a source file:\n{}",
            listing(&orphaned, SRC_DIR)
        );
    }

    #[test]
    fn test_feature_gated_modules_gate_their_tests() {
        let mut ungated = Vec::new();

        for path in module_files(SRC_DIR) {
            let Some(feature) = gating_feature(&path) else {
                continue;
            };
            let unit = Path::new(UNIT_DIR).join(&path);
            let content = fs::read_to_string(&unit).unwrap_or_default();
            if !content.contains(&format!("feature = \"{feature}\"")) {
                ungated.push(format!("  - {} needs feature \"{feature}\"", unit.display()));
            }
        }

        assert!(
            ungated.is_empty(),
            "Unit tests of feature-gated modules must be gated the same way:\n{}",
            ungated.join("\n")
        );
    }

    #[test]
    fn test_known_feature_gates_are_detected() {
        assert_eq!(
            gating_feature(Path::new("algorithm/parallel.rs")).as_deref(),
            Some("parallel")
        );
        assert_eq!(gating_feature(Path::new("algorithm/pivot.rs")), None);
    }

    #[test]
    fn test_every_test_file_contains_tests() {
        let mut empty = Vec::new();
        for path in scan(TESTS_DIR).iter().filter(|path| !is_wiring(path)) {
            let full = Path::new(TESTS_DIR).join(path);
            let content = fs::read_to_string(&full).unwrap_or_default();
            if !content.contains("#[test]") {
                empty.push(format!("  - {}", full.display()));
            }
        }

        assert!(
            empty.is_empty(),
            "Test files without any #[test] function:\n{}",
            empty.join("\n")
        );
    }

    #[test]
    fn test_unit_files_wrap_a_test_module() {
        let mut unwrapped = Vec::new();

        for path in module_files(UNIT_DIR) {
            let full = Path::new(UNIT_DIR).join(&path);
            let content = fs::read_to_string(&full).unwrap_or_default();
            let gated = content
                .lines()
                .any(|line| line.starts_with("#[cfg(") && line.contains("test"));
            if !gated || !content.contains("mod tests {") {
                unwrapped.push(format!("  - {}", full.display()));
            }
        }

        assert!(
            unwrapped.is_empty(),
            "Unit test files must wrap their tests in a cfg(test) module:\n{}",
            unwrapped.join("\n")
        );
    }
}
