use std::collections::HashSet;
use std::error::Error;
use std::fs;
use std::path::PathBuf;

use hotreload::watch::{scan, TypeFilter};

type TestResult = Result<(), Box<dyn Error>>;

fn no_excludes() -> HashSet<PathBuf> {
    HashSet::new()
}

#[test]
fn wildcard_filter_matches_every_file() -> TestResult {
    let tmp = tempfile::tempdir()?;
    fs::write(tmp.path().join("a.txt"), "a")?;
    fs::write(tmp.path().join("b.rs"), "b")?;
    fs::write(tmp.path().join("Makefile"), "all:")?;

    let filter = TypeFilter::from_types(&["*".to_string()]);
    let found = scan(tmp.path(), &filter, &no_excludes());

    assert_eq!(found.len(), 3);
    assert!(found.contains(&tmp.path().join("Makefile")));
    Ok(())
}

#[test]
fn extension_filter_excludes_other_files() -> TestResult {
    let tmp = tempfile::tempdir()?;
    fs::write(tmp.path().join("a.txt"), "a")?;
    fs::write(tmp.path().join("b.rs"), "b")?;
    fs::write(tmp.path().join("noext"), "c")?;

    let filter = TypeFilter::from_types(&["txt".to_string()]);
    let found = scan(tmp.path(), &filter, &no_excludes());

    assert_eq!(found, vec![tmp.path().join("a.txt")]);
    Ok(())
}

#[test]
fn scan_recurses_into_subdirectories() -> TestResult {
    let tmp = tempfile::tempdir()?;
    let sub = tmp.path().join("sub");
    fs::create_dir(&sub)?;
    fs::write(tmp.path().join("top.txt"), "t")?;
    fs::write(sub.join("nested.txt"), "n")?;

    let filter = TypeFilter::from_types(&["*".to_string()]);
    let found = scan(tmp.path(), &filter, &no_excludes());

    assert!(found.contains(&tmp.path().join("top.txt")));
    assert!(found.contains(&sub.join("nested.txt")));
    // Directories themselves are never part of the result.
    assert!(!found.contains(&sub));
    Ok(())
}

#[test]
fn excluded_directory_is_pruned() -> TestResult {
    let tmp = tempfile::tempdir()?;
    let skipped = tmp.path().join("node_modules");
    fs::create_dir(&skipped)?;
    fs::write(skipped.join("dep.js"), "x")?;
    fs::write(tmp.path().join("main.js"), "y")?;

    let filter = TypeFilter::from_types(&["*".to_string()]);
    let excludes: HashSet<PathBuf> = [skipped.clone()].into_iter().collect();
    let found = scan(tmp.path(), &filter, &excludes);

    assert_eq!(found, vec![tmp.path().join("main.js")]);
    Ok(())
}

#[test]
fn excluded_file_is_skipped_exactly() -> TestResult {
    let tmp = tempfile::tempdir()?;
    fs::write(tmp.path().join("keep.txt"), "k")?;
    fs::write(tmp.path().join("skip.txt"), "s")?;

    let filter = TypeFilter::from_types(&["txt".to_string()]);
    let excludes: HashSet<PathBuf> = [tmp.path().join("skip.txt")].into_iter().collect();
    let found = scan(tmp.path(), &filter, &excludes);

    assert_eq!(found, vec![tmp.path().join("keep.txt")]);
    Ok(())
}

#[test]
fn plain_file_root_is_returned_as_is() -> TestResult {
    let tmp = tempfile::tempdir()?;
    let file = tmp.path().join("single.log");
    fs::write(&file, "line")?;

    // A filter that would never match the file: the root short-circuit
    // bypasses filtering entirely.
    let filter = TypeFilter::from_types(&["txt".to_string()]);
    let found = scan(&file, &filter, &no_excludes());

    assert_eq!(found, vec![file]);
    Ok(())
}

#[test]
fn missing_root_is_returned_as_is() -> TestResult {
    let tmp = tempfile::tempdir()?;
    let gone = tmp.path().join("does-not-exist");

    let filter = TypeFilter::from_types(&["*".to_string()]);
    let found = scan(&gone, &filter, &no_excludes());

    assert_eq!(found, vec![gone]);
    Ok(())
}

#[test]
fn scan_order_is_deterministic() -> TestResult {
    let tmp = tempfile::tempdir()?;
    for name in ["c.txt", "a.txt", "b.txt"] {
        fs::write(tmp.path().join(name), name)?;
    }
    let sub = tmp.path().join("zz");
    fs::create_dir(&sub)?;
    fs::write(sub.join("deep.txt"), "d")?;

    let filter = TypeFilter::from_types(&["*".to_string()]);
    let first = scan(tmp.path(), &filter, &no_excludes());
    let second = scan(tmp.path(), &filter, &no_excludes());

    assert_eq!(first, second);
    Ok(())
}

#[cfg(unix)]
#[test]
fn symlink_cycle_terminates() -> TestResult {
    let tmp = tempfile::tempdir()?;
    let dir = tmp.path().join("looped");
    fs::create_dir(&dir)?;
    fs::write(dir.join("inner.txt"), "i")?;
    std::os::unix::fs::symlink(&dir, dir.join("back"))?;

    let filter = TypeFilter::from_types(&["*".to_string()]);
    let found = scan(tmp.path(), &filter, &no_excludes());

    assert!(found.contains(&dir.join("inner.txt")));
    Ok(())
}
