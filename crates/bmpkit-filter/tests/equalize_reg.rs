//! Histogram equalization regression test
//!
//! Checks histogram conservation, the degenerate single-level case and the
//! contrast stretch on decoded 8-bit and 24-bit images.

use bmpkit_core::{Raster, Raster8};
use bmpkit_filter::{compute_cdf, equalization_map, equalize, equalize_color, equalize_gray};
use bmpkit_test::{RegParams, init_logging, load_test_image, scratch_dir, synth, write_file};

fn occupied_range(r: &Raster8) -> (u8, u8) {
    let min = r.data().iter().copied().min().unwrap_or(0);
    let max = r.data().iter().copied().max().unwrap_or(0);
    (min, max)
}

#[test]
fn equalize_reg() {
    init_logging();
    let mut rp = RegParams::new("equalize");
    let dir = scratch_dir().expect("scratch dir");

    // --- Test 1: 100 pixels at level 0 -> identity map, image unchanged ---
    let path = write_file(&dir, "black.bmp", &synth::gray_bmp(10, 10, |_, _| 0)).expect("write");
    let mut black = bmpkit_io::load_gray(&path).expect("load");
    let hist = black.histogram();
    rp.compare_values(100.0, hist[0] as f64, 0.0);
    let map = equalization_map(&compute_cdf(&hist));
    rp.compare_values(
        1.0,
        map.iter().enumerate().all(|(i, &m)| m as usize == i) as u8 as f64,
        0.0,
    );
    let before = black.clone();
    equalize_gray(&mut black).expect("equalize");
    rp.compare_rasters(&Raster::from(before), &Raster::from(black.clone()));

    // Re-equalizing a single-level image stays put.
    let again = black.clone();
    equalize_gray(&mut black).expect("equalize again");
    rp.compare_rasters(&Raster::from(again), &Raster::from(black));

    // --- Test 2: low-contrast 8-bit image is stretched to the full range ---
    let path = write_file(
        &dir,
        "dim.bmp",
        &synth::gray_bmp(16, 8, |x, y| 100 + ((x + y) % 20) as u8),
    )
    .expect("write");
    let mut dim = bmpkit_io::load_gray(&path).expect("load");
    rp.compare_values(128.0, dim.histogram().iter().sum::<u32>() as f64, 0.0);
    equalize_gray(&mut dim).expect("equalize");
    let (lo, hi) = occupied_range(&dim);
    rp.compare_values(0.0, lo as f64, 0.0);
    rp.compare_values(255.0, hi as f64, 0.0);
    rp.compare_values(128.0, dim.histogram().iter().sum::<u32>() as f64, 0.0);

    // --- Test 3: 24-bit luminance is stretched, pixel count conserved ---
    let path = write_file(
        &dir,
        "color.bmp",
        &synth::color_bmp(9, 5, |x, _| {
            let v = 90 + (x * 5) as u8;
            [v, v, v]
        }),
    )
    .expect("write");
    let mut color = bmpkit_io::load_color(&path).expect("load");
    let hist = color.histogram();
    rp.compare_values(45.0, hist.iter().sum::<u32>() as f64, 0.0);
    equalize_color(&mut color).expect("equalize");
    let first = color.get(0, 0).expect("in bounds");
    let last = color.get(8, 0).expect("in bounds");
    rp.compare_values(0.0, first.green as f64, 1.0);
    rp.compare_values(255.0, last.green as f64, 1.0);
    rp.compare_values(45.0, color.histogram().iter().sum::<u32>() as f64, 0.0);

    // --- Test 4: dispatching entry point matches the typed one ---
    let mut a = load_test_image(&path).expect("load_test_image");
    let mut b = bmpkit_io::load_color(&path).expect("load");
    equalize(&mut a).expect("equalize");
    equalize_color(&mut b).expect("equalize");
    rp.compare_rasters(&a, &Raster::from(b));

    // --- Test 5: chromatic pixels keep U and V through the inverse transform ---
    let saturated = [[200, 50, 50], [50, 50, 200], [60, 160, 60], [90, 60, 30]];
    let path = write_file(
        &dir,
        "chroma.bmp",
        &synth::color_bmp(4, 1, |x, _| saturated[x as usize]),
    )
    .expect("write");
    let mut chroma = bmpkit_io::load_color(&path).expect("load");
    equalize_color(&mut chroma).expect("equalize");
    let expected = [[255, 124, 125], [69, 68, 218], [197, 255, 196], [26, 0, 0]];
    for (x, [r, g, b]) in expected.into_iter().enumerate() {
        let p = chroma.get(x as u32, 0).expect("in bounds");
        rp.compare_values(r as f64, p.red as f64, 0.0);
        rp.compare_values(g as f64, p.green as f64, 0.0);
        rp.compare_values(b as f64, p.blue as f64, 0.0);
    }

    assert!(rp.cleanup());
}
