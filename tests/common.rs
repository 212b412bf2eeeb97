#![allow(dead_code)]

use image::{ImageFormat, Rgb, RgbImage};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}

/// Writes a real image with a gradient so encoders have something to chew on.
pub fn create_test_image(path: &Path, width: u32, height: u32) -> PathBuf {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 255 / width.max(1)) as u8, (y * 255 / height.max(1)) as u8, 96])
    });
    let format = ImageFormat::from_path(path).unwrap_or(ImageFormat::Png);
    img.save_with_format(path, format).unwrap();
    path.to_path_buf()
}

pub fn create_corrupt_image(path: &Path) -> PathBuf {
    File::create(path)
        .unwrap()
        .write_all(b"fake image data")
        .unwrap();
    path.to_path_buf()
}

/// Three 80x60 images of different formats plus a text file.
pub fn create_test_image_files(temp_dir: &Path) -> Vec<PathBuf> {
    let mut files = vec![
        create_test_image(&temp_dir.join("one.jpg"), 80, 60),
        create_test_image(&temp_dir.join("two.png"), 80, 60),
        create_test_image(&temp_dir.join("three.bmp"), 80, 60),
    ];

    let txt_file = temp_dir.join("notes.txt");
    File::create(&txt_file)
        .unwrap()
        .write_all(b"not an image")
        .unwrap();
    files.push(txt_file);

    files
}

pub fn create_nested_directory_structure(temp_dir: &Path) -> PathBuf {
    let subdir = temp_dir.join("subdir");
    std::fs::create_dir(&subdir).unwrap();

    create_test_image(&subdir.join("nested.png"), 40, 40);
    File::create(subdir.join("nested.txt"))
        .unwrap()
        .write_all(b"nested text")
        .unwrap();

    subdir
}

/// Every regular file below `dir`, sorted.
pub fn list_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .collect();
    files.sort();
    files
}
