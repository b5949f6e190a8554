/*!
 * Tests for file system utilities
 */

use anyhow::Result;
use vidsearch::file_utils::FileManager;
use crate::common;

/// Test file existence checks
#[test]
fn test_file_exists_withFileAndDir_shouldDistinguish() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let file = common::create_test_file(dir.path(), "a.txt", "content")?;

    assert!(FileManager::file_exists(&file));
    assert!(!FileManager::file_exists(dir.path()));
    assert!(!FileManager::file_exists(dir.path().join("missing.txt")));
    Ok(())
}

/// Test directory existence checks
#[test]
fn test_dir_exists_withFileAndDir_shouldDistinguish() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let file = common::create_test_file(dir.path(), "a.txt", "content")?;

    assert!(FileManager::dir_exists(dir.path()));
    assert!(!FileManager::dir_exists(&file));
    Ok(())
}

/// Test that writing creates missing parent directories
#[test]
fn test_write_to_file_withNestedPath_shouldCreateParents() -> Result<()> {
    let dir = common::create_temp_dir()?;
    let nested = dir.path().join("reports").join("out.md");

    FileManager::write_to_file(&nested, "# Report\n")?;

    assert!(FileManager::file_exists(&nested));
    assert_eq!(std::fs::read_to_string(&nested)?, "# Report\n");
    Ok(())
}
