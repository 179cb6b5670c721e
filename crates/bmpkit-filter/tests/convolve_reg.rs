//! Convolution regression test
//!
//! Runs every preset over decoded 8-bit and 24-bit images and checks border
//! invariance, flat-region behavior and the save/load cycle of the result.

use bmpkit_core::color::Rgb;
use bmpkit_core::{Raster, Raster8, Raster24};
use bmpkit_filter::{Convolve, Kernel, KernelPreset, apply_preset, convolve, gaussian_blur};
use bmpkit_test::{RegParams, init_logging, scratch_dir, synth, write_file};

fn border_equal_gray(a: &Raster8, b: &Raster8, margin: u32) -> bool {
    let (w, h) = (a.width(), a.height());
    (0..h).all(|y| {
        (0..w).all(|x| {
            let inside = x >= margin && y >= margin && x + margin < w && y + margin < h;
            inside || a.get(x, y) == b.get(x, y)
        })
    })
}

fn border_equal_color(a: &Raster24, b: &Raster24, margin: u32) -> bool {
    let (w, h) = (a.width(), a.height());
    (0..h).all(|y| {
        (0..w).all(|x| {
            let inside = x >= margin && y >= margin && x + margin < w && y + margin < h;
            inside || a.get(x, y) == b.get(x, y)
        })
    })
}

#[test]
fn convolve_reg() {
    init_logging();
    let mut rp = RegParams::new("convolve");
    let dir = scratch_dir().expect("scratch dir");

    let gray_path = write_file(
        &dir,
        "gray.bmp",
        &synth::gray_bmp(13, 9, |x, y| ((x * 31) ^ (y * 17)) as u8),
    )
    .expect("write gray");
    let color_path = write_file(
        &dir,
        "color.bmp",
        &synth::color_bmp(11, 7, |x, y| {
            [(x * 23) as u8, (y * 37) as u8, ((x + y) * 19) as u8]
        }),
    )
    .expect("write color");

    let gray = bmpkit_io::load_gray(&gray_path).expect("load gray");
    let color = bmpkit_io::load_color(&color_path).expect("load color");

    // --- Test 1: every preset leaves the 1-pixel border untouched ---
    for preset in KernelPreset::ALL {
        let mut g = gray.clone();
        apply_preset(&mut g, preset).expect("gray preset");
        rp.compare_values(1.0, border_equal_gray(&gray, &g, 1) as u8 as f64, 0.0);

        let mut c = color.clone();
        apply_preset(&mut c, preset).expect("color preset");
        rp.compare_values(1.0, border_equal_color(&color, &c, 1) as u8 as f64, 0.0);
        eprintln!("  {:?}: border preserved", preset);
    }

    // --- Test 2: 5x5 kernel leaves a 2-pixel border untouched ---
    let mut k5 = Kernel::new(5).expect("5x5");
    k5.set(0, 0, 1.0).expect("set");
    let mut g = gray.clone();
    g.convolve(&k5).expect("convolve 5x5");
    rp.compare_values(1.0, border_equal_gray(&gray, &g, 2) as u8 as f64, 0.0);
    // Weight at (0, 0) copies the pixel two up and two left.
    rp.compare_values(
        gray.get(2, 2).expect("in bounds") as f64,
        g.get(4, 4).expect("in bounds") as f64,
        0.0,
    );

    // --- Test 3: identity kernel through the dispatching entry point ---
    let mut r = Raster::from(color.clone());
    convolve(&mut r, &Kernel::identity()).expect("identity");
    rp.compare_rasters(&Raster::from(color.clone()), &r);

    // --- Test 4: Gaussian on a flat image is exact ---
    let mut flat = Raster24::new(6, 6).expect("new");
    for p in flat.pixels_mut() {
        *p = Rgb::new(64, 128, 32);
    }
    let before = Raster::from(flat.clone());
    gaussian_blur(&mut flat).expect("gaussian");
    rp.compare_rasters(&before, &Raster::from(flat));

    // --- Test 5: filtered output survives a save/load cycle ---
    let mut c = color.clone();
    apply_preset(&mut c, KernelPreset::Sharpen).expect("sharpen");
    let out = dir.path().join("sharpened.bmp");
    bmpkit_io::save_color(&c, &out).expect("save");
    let reloaded = bmpkit_io::load_color(&out).expect("reload");
    rp.compare_rasters(&Raster::from(c), &Raster::from(reloaded));

    assert!(rp.cleanup());
}
