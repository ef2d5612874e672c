//! Keeps `tests/unit` a file-for-file mirror of the `src` module tree

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";

    /// Crate roots and module listings, which hold no logic of their own
    const EXEMPT_FILES: [&str; 3] = ["lib.rs", "main.rs", "mod.rs"];

    fn is_exempt(module: &Path) -> bool {
        module
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| EXEMPT_FILES.contains(&name))
    }

    /// Every `.rs` file under `root`, relative to it
    fn rust_files(root: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];
        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    let relative = path.strip_prefix(root).map_err(io::Error::other)?;
                    found.insert(relative.to_path_buf());
                }
            }
        }
        Ok(found)
    }

    fn modules(root: &str) -> BTreeSet<PathBuf> {
        match rust_files(Path::new(root)) {
            Ok(files) => files.into_iter().filter(|path| !is_exempt(path)).collect(),
            Err(error) => unreachable!("Failed to scan {root}: {error}"),
        }
    }

    fn listing(paths: &[&PathBuf], describe: impl Fn(&Path) -> String) -> String {
        paths
            .iter()
            .map(|path| format!("  - {}", describe(path.as_path())))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests that no source module goes without unit tests
    // Verified by adding a module under src without a mirror
    #[test]
    fn test_every_module_is_mirrored() {
        let sources = modules(SRC_ROOT);
        let tested = modules(UNIT_ROOT);
        let untested: Vec<_> = sources.difference(&tested).collect();

        assert!(
            untested.is_empty(),
            "bluenoise modules without a tests/unit mirror:\n{}",
            listing(&untested, |module| {
                format!("src/{0} needs tests/unit/{0}", module.display())
            })
        );
    }

    // Tests that unit test files follow a live module
    // Verified by leaving a test file behind after deleting its module
    #[test]
    fn test_no_orphaned_unit_tests() {
        let sources = modules(SRC_ROOT);
        let tested = modules(UNIT_ROOT);
        let orphans: Vec<_> = tested.difference(&sources).collect();

        assert!(
            orphans.is_empty(),
            "Unit tests for bluenoise modules that no longer exist:\n{}",
            listing(&orphans, |test| {
                format!("tests/unit/{} has no src module", test.display())
            })
        );
    }

    // Tests that each mirror file is compiled and holds tests
    // Verified by dropping a `mod` line or emptying a test file
    #[test]
    fn test_unit_files_are_wired_in() {
        let mut problems = Vec::new();
        for test in modules(UNIT_ROOT) {
            let path = Path::new(UNIT_ROOT).join(&test);
            let Some(stem) = test.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };

            let listing_path = path.with_file_name("mod.rs");
            let declared = fs::read_to_string(&listing_path).is_ok_and(|text| {
                text.lines().any(|line| {
                    let line = line.trim();
                    line == format!("mod {stem};") || line == format!("pub mod {stem};")
                })
            });
            if !declared {
                problems.push(format!("{} is not declared in its mod.rs", path.display()));
            }

            let has_tests = fs::read_to_string(&path).is_ok_and(|text| text.contains("#[test]"));
            if !has_tests {
                problems.push(format!("{} has no #[test] functions", path.display()));
            }
        }

        assert!(
            problems.is_empty(),
            "Unit test files that never run:\n  - {}",
            problems.join("\n  - ")
        );
    }

    // Tests that the end-to-end suite holds tests
    // Verified by the top-level integration file
    #[test]
    fn test_integration_suite_has_tests() {
        let text = fs::read_to_string("tests/algorithm.rs").unwrap_or_default();
        assert!(text.contains("#[test]"), "tests/algorithm.rs has no #[test] functions");
    }
}
