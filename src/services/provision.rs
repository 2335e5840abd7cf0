//! The five folder-creation operations and the fixed demonstration run.
//!
//! Every operation takes the root directory explicitly, creates zero or
//! more folders directly under it, and returns the folder names it created
//! in creation order. Creation is idempotent: a folder that already exists
//! is not an error. Any other filesystem failure propagates unchanged; a
//! failure partway through leaves earlier folders in place.

use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;
use tracing::info;

use crate::domain::constants::{
    DEMO_LIST_NAMES, DEMO_PERIODIC_DELAY_SECS, DEMO_PREFIX, DEMO_PREFIX_NAMES, DEMO_RANGE_END,
    DEMO_RANGE_START, REGIONS,
};
use crate::domain::models::ProvisionReport;
use crate::services::byline;

pub const PERIODIC_FOLDER_COUNT: usize = 5;
pub const PERIODIC_FOLDER_STEM: &str = "sleepfive_folder";
pub const STANDARD_FOLDER_PREFIX: &str = "standard_folder_";

#[derive(thiserror::Error, Debug)]
pub enum ProvisionError {
    #[error("failed to create folder {}: {}", .path.display(), .source)]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn create_folder(root: &Path, name: &str) -> Result<(), ProvisionError> {
    let path = root.join(name);
    std::fs::create_dir_all(&path).map_err(|source| ProvisionError::Filesystem {
        path: path.clone(),
        source,
    })?;
    info!("created folder: {}", path.display());
    Ok(())
}

/// One folder per integer in `[start, end]`, named by its decimal form.
/// `start > end` yields zero folders; bounds are the caller's business.
pub fn create_folders_for_range(
    root: &Path,
    start: i64,
    end: i64,
) -> Result<Vec<String>, ProvisionError> {
    info!(start, end, "range provisioning");
    let mut created = Vec::new();
    for value in start..=end {
        let name = value.to_string();
        create_folder(root, &name)?;
        created.push(name);
    }
    Ok(created)
}

/// One folder per entry, named verbatim. Duplicates collapse to one folder.
pub fn create_folders_from_list(
    root: &Path,
    names: &[String],
) -> Result<Vec<String>, ProvisionError> {
    info!(?names, "list provisioning");
    let mut created = Vec::new();
    for name in names {
        create_folder(root, name)?;
        created.push(name.clone());
    }
    Ok(created)
}

/// One folder per `prefix + name`, order preserved.
pub fn create_prefixed_folders(
    root: &Path,
    names: &[String],
    prefix: &str,
) -> Result<Vec<String>, ProvisionError> {
    info!(?names, prefix, "prefixed provisioning");
    let prefixed: Vec<String> = names.iter().map(|name| format!("{prefix}{name}")).collect();
    for name in &prefixed {
        create_folder(root, name)?;
    }
    info!(count = prefixed.len(), "prefixed folders created");
    Ok(prefixed)
}

/// Exactly five folders, sleeping `delay` after each of the first four.
/// There is no wait after the fifth, so total elapsed time is about
/// four times the delay. Count and naming are fixed.
pub fn create_folders_periodically(
    root: &Path,
    delay: Duration,
) -> Result<Vec<String>, ProvisionError> {
    info!(delay_secs = delay.as_secs_f64(), "periodic provisioning");
    let mut created = Vec::new();
    for i in 1..=PERIODIC_FOLDER_COUNT {
        let name = format!("{PERIODIC_FOLDER_STEM}_{i}");
        create_folder(root, &name)?;
        created.push(name);
        if i < PERIODIC_FOLDER_COUNT {
            info!(
                delay_secs = delay.as_secs_f64(),
                "waiting before the next folder"
            );
            thread::sleep(delay);
        }
    }
    info!(count = created.len(), folders = ?created, "periodic provisioning complete");
    Ok(created)
}

/// Name transform pipeline: prefix first, then lowercase, then strip spaces.
/// The order is fixed; flags only decide whether a stage applies.
pub fn standardize_name(name: &str, to_lowercase: bool, remove_spaces: bool) -> String {
    let mut folder = format!("{STANDARD_FOLDER_PREFIX}{name}");
    if to_lowercase {
        folder = folder.to_lowercase();
    }
    if remove_spaces {
        folder.retain(|c| c != ' ');
    }
    folder
}

pub fn create_standardized_folders(
    root: &Path,
    names: &[String],
    to_lowercase: bool,
    remove_spaces: bool,
) -> Result<Vec<String>, ProvisionError> {
    info!(?names, to_lowercase, remove_spaces, "standardized provisioning");
    let mut created = Vec::new();
    for name in names {
        let folder = standardize_name(name, to_lowercase, remove_spaces);
        create_folder(root, &folder)?;
        created.push(folder);
    }
    Ok(created)
}

fn to_strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

/// The fixed demonstration sequence: byline log line, then each operation
/// in turn with its hard-coded parameters.
pub fn run_demo(root: &Path) -> anyhow::Result<Vec<ProvisionReport>> {
    info!("starting demonstration run");
    info!("byline: {}", byline::get_byline()?);

    let mut steps = Vec::new();
    steps.push(ProvisionReport::new(
        "range",
        root,
        create_folders_for_range(root, DEMO_RANGE_START, DEMO_RANGE_END)?,
    ));
    steps.push(ProvisionReport::new(
        "list",
        root,
        create_folders_from_list(root, &to_strings(&DEMO_LIST_NAMES))?,
    ));
    steps.push(ProvisionReport::new(
        "prefixed",
        root,
        create_prefixed_folders(root, &to_strings(&DEMO_PREFIX_NAMES), DEMO_PREFIX)?,
    ));
    steps.push(ProvisionReport::new(
        "periodic",
        root,
        create_folders_periodically(root, Duration::from_secs_f64(DEMO_PERIODIC_DELAY_SECS))?,
    ));
    steps.push(ProvisionReport::new(
        "standardized",
        root,
        create_standardized_folders(root, &to_strings(&REGIONS), true, true)?,
    ));

    info!("demonstration run complete");
    Ok(steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;
    use tempfile::TempDir;

    fn root() -> TempDir {
        TempDir::new().expect("temp root")
    }

    #[test]
    fn range_creates_inclusive_bounds_and_nothing_outside() {
        let tmp = root();
        let created =
            create_folders_for_range(tmp.path(), 2020, 2025).expect("range provisioning");
        assert_eq!(created, ["2020", "2021", "2022", "2023", "2024", "2025"]);
        for year in 2020..=2025 {
            assert!(tmp.path().join(year.to_string()).is_dir());
        }
        assert!(!tmp.path().join("2019").exists());
        assert!(!tmp.path().join("2026").exists());
    }

    #[test]
    fn inverted_range_creates_nothing() {
        let tmp = root();
        let created = create_folders_for_range(tmp.path(), 2025, 2020).expect("empty range");
        assert!(created.is_empty());
    }

    #[test]
    fn operations_are_idempotent() {
        let tmp = root();
        let names = vec!["data-csv".to_string(), "data-excel".to_string()];
        create_folders_from_list(tmp.path(), &names).expect("first pass");
        let second = create_folders_from_list(tmp.path(), &names).expect("second pass");
        assert_eq!(second, names);
        assert!(tmp.path().join("data-csv").is_dir());
        assert!(tmp.path().join("data-excel").is_dir());
    }

    #[test]
    fn prefixed_names_preserve_order() {
        let tmp = root();
        let names = vec!["csv".to_string(), "excel".to_string(), "json".to_string()];
        let created =
            create_prefixed_folders(tmp.path(), &names, "output-").expect("prefixed provisioning");
        assert_eq!(created, ["output-csv", "output-excel", "output-json"]);
        for name in &created {
            assert!(tmp.path().join(name).is_dir());
        }
    }

    #[test]
    fn standardize_applies_prefix_then_lowercase_then_strip() {
        assert_eq!(
            standardize_name("North America", true, true),
            "standard_folder_northamerica"
        );
        assert_eq!(
            standardize_name("North America", false, true),
            "standard_folder_NorthAmerica"
        );
        assert_eq!(
            standardize_name("North America", true, false),
            "standard_folder_north america"
        );
        assert_eq!(
            standardize_name("North America", false, false),
            "standard_folder_North America"
        );
    }

    #[test]
    fn standardized_folders_land_on_disk() {
        let tmp = root();
        let names = vec!["North America".to_string(), "Middle East".to_string()];
        let created = create_standardized_folders(tmp.path(), &names, true, true)
            .expect("standardized provisioning");
        assert_eq!(
            created,
            ["standard_folder_northamerica", "standard_folder_middleeast"]
        );
        assert!(tmp.path().join("standard_folder_northamerica").is_dir());
    }

    #[test]
    fn periodic_creates_five_and_waits_only_between_them() {
        let tmp = root();
        let delay = Duration::from_millis(150);
        let started = Instant::now();
        let created =
            create_folders_periodically(tmp.path(), delay).expect("periodic provisioning");
        let elapsed = started.elapsed();

        assert_eq!(
            created,
            [
                "sleepfive_folder_1",
                "sleepfive_folder_2",
                "sleepfive_folder_3",
                "sleepfive_folder_4",
                "sleepfive_folder_5"
            ]
        );
        for name in &created {
            assert!(tmp.path().join(name).is_dir());
        }
        // four waits, never five
        assert!(elapsed >= delay * 4);
        assert!(elapsed < delay * 5);
    }

    #[test]
    fn filesystem_failure_propagates() {
        let tmp = root();
        std::fs::write(tmp.path().join("blocker"), b"not a folder").expect("write file");
        let err = create_folders_from_list(tmp.path(), &["blocker".to_string()])
            .expect_err("file in the way");
        let ProvisionError::Filesystem { path, .. } = err;
        assert!(path.ends_with("blocker"));
    }
}
