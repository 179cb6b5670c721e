//! Raster store regression test
//!
//! Negative, brightness and histograms on constructed rasters of both
//! kinds, through the typed and the dispatching entry points.

use bmpkit_core::color::Rgb;
use bmpkit_core::{ColorDepth, Raster, Raster8, Raster24, row_stride};
use bmpkit_test::RegParams;

fn gray_ramp(w: u32, h: u32) -> Raster8 {
    let mut r = Raster8::new(w, h).unwrap();
    for (i, v) in r.data_mut().iter_mut().enumerate() {
        *v = (i * 37 % 256) as u8;
    }
    r
}

fn color_ramp(w: u32, h: u32) -> Raster24 {
    let mut r = Raster24::new(w, h).unwrap();
    for (i, p) in r.pixels_mut().iter_mut().enumerate() {
        *p = Rgb::new((i * 3) as u8, (i * 5) as u8, (255 - i % 256) as u8);
    }
    r
}

#[test]
fn raster_reg() {
    let mut rp = RegParams::new("raster");

    let rasters = [
        Raster::from(gray_ramp(9, 7)),
        Raster::from(color_ramp(5, 11)),
    ];

    for original in &rasters {
        eprintln!(
            "  {:?} {}x{}",
            original.depth(),
            original.width(),
            original.height()
        );

        // --- Negative is involutive ---
        let mut r = original.clone();
        r.negative();
        rp.compare_values(1.0, (r != *original) as u8 as f64, 0.0);
        r.negative();
        rp.compare_rasters(original, &r);

        // --- Brightness(0) is the identity; large deltas saturate ---
        let mut r = original.clone();
        r.brightness(0);
        rp.compare_rasters(original, &r);
        for delta in [-300, -1, 1, 17, 300, i32::MAX, i32::MIN] {
            let mut r = original.clone();
            r.brightness(delta);
            let hist = r.histogram();
            rp.compare_values(
                (original.width() * original.height()) as f64,
                hist.iter().sum::<u32>() as f64,
                0.0,
            );
        }
        let mut r = original.clone();
        r.brightness(i32::MAX);
        let white = match &r {
            Raster::Gray(g) => g.data().iter().all(|&v| v == 255),
            Raster::Color(c) => c.pixels().iter().all(|&p| p == Rgb::new(255, 255, 255)),
        };
        rp.compare_values(1.0, white as u8 as f64, 0.0);

        // --- Histogram conservation ---
        let total: u32 = original.histogram().iter().sum();
        rp.compare_values(
            (original.width() * original.height()) as f64,
            total as f64,
            0.0,
        );
    }

    // --- Header bookkeeping of fresh rasters ---
    let c = Raster::from(Raster24::new(5, 3).unwrap());
    let h = c.header();
    rp.compare_values(24.0, h.bits_per_pixel as f64, 0.0);
    rp.compare_values((row_stride(5) * 3) as f64, h.data_size as f64, 0.0);
    rp.compare_values((54 + 16 * 3) as f64, h.file_size as f64, 0.0);
    rp.compare_values(1.0, (c.depth() == ColorDepth::Rgb24) as u8 as f64, 0.0);

    let g = Raster::from(Raster8::new(5, 3).unwrap());
    rp.compare_values(1078.0, g.header().data_offset as f64, 0.0);
    rp.compare_values(15.0, g.info().data_size as f64, 0.0);

    assert!(rp.cleanup());
}
