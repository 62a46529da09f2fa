use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use log::debug;

use super::saturation::image_saturation;
use crate::data::model::VisualStatSeries;

/// Extensions accepted as image files, matched case-insensitively.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "png"];

/// Scan `root` for year-named subdirectories of images and aggregate the
/// per-image mean saturation into one value per year.
///
/// Folders with zero images are skipped; folders with images must be named
/// by integer year.  Non-directory entries under the root are ignored.
pub fn aggregate_folders(root: &Path) -> Result<VisualStatSeries> {
    let entries = std::fs::read_dir(root)
        .with_context(|| format!("reading image root {}", root.display()))?;

    let mut points = Vec::new();
    for entry in entries {
        let entry = entry.context("reading directory entry")?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let images = image_files(&path)?;
        if images.is_empty() {
            debug!("skipping {}: no images", path.display());
            continue;
        }

        let year: i32 = entry
            .file_name()
            .to_string_lossy()
            .parse()
            .with_context(|| format!("folder {} is not named by year", path.display()))?;

        let mut sum = 0.0;
        for image_path in &images {
            sum += image_saturation(image_path)?;
        }
        let saturation = sum / images.len() as f64;
        debug!(
            "{year}: {} images, mean saturation {saturation:.4}",
            images.len()
        );
        points.push((year, saturation));
    }

    if points.is_empty() {
        bail!("no non-empty year folders under {}", root.display());
    }
    Ok(VisualStatSeries::new(points))
}

/// Image files directly inside `dir`, sorted by path for a stable order.
fn image_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("reading image folder {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.context("reading directory entry")?.path();
        if !path.is_file() {
            continue;
        }
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();
        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::fs;

    fn fresh_root(name: &str) -> PathBuf {
        let root = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(&root).unwrap();
        root
    }

    fn write_image(path: &Path, color: Rgb<u8>) {
        RgbImage::from_pixel(4, 4, color).save(path).unwrap();
    }

    #[test]
    fn empty_folders_are_skipped() {
        let root = fresh_root("chroma_watt_scan_skip");
        fs::create_dir_all(root.join("1900")).unwrap();
        fs::create_dir_all(root.join("1910")).unwrap();
        write_image(&root.join("1910").join("a.png"), Rgb([200, 10, 10]));

        let series = aggregate_folders(&root).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series.points()[0].0, 1910);

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn folders_aggregate_and_sort_by_year() {
        let root = fresh_root("chroma_watt_scan_sort");
        fs::create_dir_all(root.join("1920")).unwrap();
        fs::create_dir_all(root.join("1900")).unwrap();
        // Gray folder vs saturated folder.
        write_image(&root.join("1920").join("a.png"), Rgb([255, 0, 0]));
        write_image(&root.join("1920").join("b.PNG"), Rgb([255, 0, 0]));
        write_image(&root.join("1900").join("a.png"), Rgb([100, 100, 100]));

        let series = aggregate_folders(&root).unwrap();
        let points = series.points();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].0, 1900);
        assert_eq!(points[1].0, 1920);
        assert_eq!(points[0].1, 0.0);
        assert!(points[1].1 > 0.99);

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn non_year_folder_with_images_is_an_error() {
        let root = fresh_root("chroma_watt_scan_badname");
        fs::create_dir_all(root.join("misc")).unwrap();
        write_image(&root.join("misc").join("a.png"), Rgb([10, 20, 30]));

        assert!(aggregate_folders(&root).is_err());

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn stray_files_under_root_are_ignored() {
        let root = fresh_root("chroma_watt_scan_stray");
        fs::write(root.join("notes.txt"), "not a folder").unwrap();
        fs::create_dir_all(root.join("1930")).unwrap();
        write_image(&root.join("1930").join("a.png"), Rgb([0, 0, 255]));

        let series = aggregate_folders(&root).unwrap();
        assert_eq!(series.len(), 1);

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn non_image_files_do_not_count() {
        let root = fresh_root("chroma_watt_scan_noimg");
        fs::create_dir_all(root.join("1940")).unwrap();
        fs::write(root.join("1940").join("readme.md"), "text").unwrap();

        // Only folder has no images, so the whole series is empty.
        assert!(aggregate_folders(&root).is_err());

        let _ = fs::remove_dir_all(&root);
    }
}
