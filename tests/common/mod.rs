#![allow(dead_code)]

use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage};

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

pub const SQUARE: [(f64, f64); 4] = [(0.2, 0.2), (0.4, 0.2), (0.4, 0.4), (0.2, 0.4)];

/// Writes a solid white RGB image; the format follows the extension.
pub fn write_white_image(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    RgbImage::from_pixel(width, height, WHITE)
        .save(path)
        .expect("write source image");
}

/// A Textract WORD block whose polygon is given as (x, y) pairs.
pub fn word_block(id: &str, confidence: f64, polygon: &[(f64, f64)]) -> String {
    let points: Vec<String> = polygon
        .iter()
        .map(|(x, y)| format!(r#"{{"X": {}, "Y": {}}}"#, x, y))
        .collect();
    format!(
        r#"{{"BlockType": "WORD", "Id": "{}", "Text": "{}", "Confidence": {}, "Geometry": {{"Polygon": [{}]}}}}"#,
        id,
        id,
        confidence,
        points.join(", ")
    )
}

pub fn textract_json(blocks: &[String]) -> String {
    format!(r#"{{"Blocks": [{}]}}"#, blocks.join(", "))
}

pub fn write_textract(path: &Path, blocks: &[String]) {
    fs::write(path, textract_json(blocks)).expect("write textract json");
}
