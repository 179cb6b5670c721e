//! Point transform regression test
//!
//! Grayscale, threshold, negative and brightness on decoded images,
//! including the saved-and-reloaded results.

use bmpkit_color::{ColorError, grayscale, threshold, threshold_gray};
use bmpkit_core::Raster;
use bmpkit_core::color::Rgb;
use bmpkit_test::{RegParams, init_logging, scratch_dir, synth, write_file};

#[test]
fn point_reg() {
    init_logging();
    let mut rp = RegParams::new("point");
    let dir = scratch_dir().expect("scratch dir");

    // --- Test 1: 4x4 (10, 20, 30) -> grayscale (20, 20, 20), negative (245, 235, 225) ---
    let path = write_file(&dir, "flat.bmp", &synth::color_bmp(4, 4, |_, _| [10, 20, 30]))
        .expect("write");
    let original = bmpkit_io::read_image(&path).expect("read_image");

    let mut gray = original.clone();
    grayscale(&mut gray).expect("grayscale");
    let ok = gray
        .as_color()
        .is_some_and(|r| r.pixels().iter().all(|&p| p == Rgb::new(20, 20, 20)));
    rp.compare_values(1.0, ok as u8 as f64, 0.0);

    let mut neg = original.clone();
    neg.negative();
    let ok = neg
        .as_color()
        .is_some_and(|r| r.pixels().iter().all(|&p| p == Rgb::new(245, 235, 225)));
    rp.compare_values(1.0, ok as u8 as f64, 0.0);

    // Negative is involutive.
    neg.negative();
    rp.compare_rasters(&original, &neg);

    // --- Test 2: brightness clamps, and zero is a no-op ---
    let mut bright = original.clone();
    bright.brightness(0);
    rp.compare_rasters(&original, &bright);
    bright.brightness(300);
    let ok = bright
        .as_color()
        .is_some_and(|r| r.pixels().iter().all(|&p| p == Rgb::new(255, 255, 255)));
    rp.compare_values(1.0, ok as u8 as f64, 0.0);
    bright.brightness(-1000);
    let ok = bright
        .as_color()
        .is_some_and(|r| r.pixels().iter().all(|&p| p == Rgb::new(0, 0, 0)));
    rp.compare_values(1.0, ok as u8 as f64, 0.0);

    // --- Test 3: threshold is binary and monotonic in T ---
    let path = write_file(
        &dir,
        "ramp.bmp",
        &synth::gray_bmp(16, 16, |x, y| (y * 16 + x) as u8),
    )
    .expect("write");
    let ramp = bmpkit_io::load_gray(&path).expect("load");
    let mut previous: Option<Vec<u8>> = None;
    for t in [-5, 0, 64, 127, 128, 200, 254, 255, 300] {
        let mut r = ramp.clone();
        threshold_gray(&mut r, t);
        let binary = r.data().iter().all(|&v| v == 0 || v == 255);
        rp.compare_values(1.0, binary as u8 as f64, 0.0);
        let expected_white = (0..256).filter(|&v| v > t).count();
        let white = r.data().iter().filter(|&&v| v == 255).count();
        rp.compare_values(expected_white as f64, white as f64, 0.0);
        if let Some(prev) = &previous {
            // Raising T never turns a 0 into 255.
            let monotonic = prev.iter().zip(r.data()).all(|(&a, &b)| b <= a);
            rp.compare_values(1.0, monotonic as u8 as f64, 0.0);
        }
        previous = Some(r.data().to_vec());
    }

    // --- Test 4: thresholded image survives a save/load cycle ---
    let mut r = Raster::from(ramp);
    threshold(&mut r, 99).expect("threshold");
    let out = dir.path().join("binary.bmp");
    bmpkit_io::write_image(&r, &out).expect("write_image");
    let reloaded = bmpkit_io::read_image(&out).expect("reload");
    rp.compare_rasters(&r, &reloaded);

    // --- Test 5: kind mismatches are reported, not ignored ---
    let err = threshold(&mut original.clone(), 10).unwrap_err();
    rp.compare_values(
        1.0,
        matches!(err, ColorError::UnsupportedKind { .. }) as u8 as f64,
        0.0,
    );
    let err = grayscale(&mut r).unwrap_err();
    rp.compare_values(
        1.0,
        matches!(err, ColorError::UnsupportedKind { .. }) as u8 as f64,
        0.0,
    );

    assert!(rp.cleanup());
}
