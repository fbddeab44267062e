//! Histogram behavior on small hand-built rasters.

use approx::assert_abs_diff_eq;
use hdrscope_core::{Error, PixelTriplet, RasterView, RgbaRaster};
use hdrscope_ops::{HistogramEngine, Series};
use hdrscope_transfer::srgb;

fn raster_2x2() -> RgbaRaster {
    let pixels = [
        PixelTriplet::gray(0),
        PixelTriplet::gray(255),
        PixelTriplet::gray(128),
        PixelTriplet::gray(64),
    ];
    RgbaRaster::from_fn(2, 2, |x, y| pixels[(y * 2 + x) as usize])
}

#[test]
fn four_gray_levels_give_four_luminance_bins() {
    let raster = raster_2x2();
    let hist = HistogramEngine::default().calculate(&raster.view()).unwrap();

    let bins = hist.non_zero_bins(Series::Luminance);
    assert_eq!(bins.len(), 4);
    assert!(bins.windows(2).all(|w| w[0] < w[1]));

    // Code values sorted by brightness land in the same order of bins
    let expected: Vec<usize> = [0u8, 64, 128, 255]
        .iter()
        .map(|&c| {
            let v = srgb::decode(c as f64 / 255.0);
            ((v * 100.0) as usize).min(99)
        })
        .collect();
    assert_eq!(bins, expected);
    assert_eq!(bins, vec![0, 5, 21, 99]);

    for &b in &bins {
        assert_abs_diff_eq!(hist.luminance()[b], 25.0, epsilon = 1e-12);
    }
    assert_abs_diff_eq!(hist.luminance().iter().sum::<f64>(), 100.0, epsilon = 1e-9);
}

#[test]
fn uniform_color_fills_one_bin_per_series() {
    let raster = RgbaRaster::filled(13, 7, PixelTriplet::new(250, 90, 12));
    let hist = HistogramEngine::default().calculate(&raster.view()).unwrap();
    for s in Series::ALL {
        let bins = hist.non_zero_bins(s);
        assert_eq!(bins.len(), 1, "{} has {:?}", s.name(), bins);
        assert_eq!(hist.series(s)[bins[0]], 100.0);
    }
}

#[test]
fn sums_are_hundred_for_gradient() {
    let raster = RgbaRaster::from_fn(256, 3, |x, y| {
        PixelTriplet::new(x as u8, (255 - x) as u8, (y * 100) as u8)
    });
    let hist = HistogramEngine::default().calculate(&raster.view()).unwrap();
    for s in Series::ALL {
        assert_abs_diff_eq!(hist.series(s).iter().sum::<f64>(), 100.0, epsilon = 1e-9);
    }
}

#[test]
fn zero_pixels_is_an_error() {
    let view = RasterView::new(5, 0, &[]).unwrap();
    assert_eq!(
        HistogramEngine::default().calculate(&view).unwrap_err(),
        Error::EmptyInput
    );
}

#[test]
fn alpha_is_ignored() {
    let opaque = RgbaRaster::filled(2, 2, PixelTriplet::gray(77));
    let mut bytes = opaque.data().to_vec();
    for px in bytes.chunks_exact_mut(4) {
        px[3] = 0;
    }
    let clear = RgbaRaster::from_rgba(2, 2, bytes).unwrap();
    let engine = HistogramEngine::default();
    assert_eq!(
        engine.calculate(&opaque.view()).unwrap(),
        engine.calculate(&clear.view()).unwrap()
    );
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_matches_serial() {
    let raster = RgbaRaster::from_fn(311, 97, |x, y| {
        PixelTriplet::new((x * 7 % 256) as u8, (y * 13 % 256) as u8, ((x ^ y) % 256) as u8)
    });
    let engine = HistogramEngine::default();
    let serial = engine.calculate(&raster.view()).unwrap();
    let parallel = engine.calculate_par(&raster.view()).unwrap();
    assert_eq!(serial, parallel);

    let empty = RasterView::new(0, 0, &[]).unwrap();
    assert_eq!(engine.calculate_par(&empty).unwrap_err(), Error::EmptyInput);
}
