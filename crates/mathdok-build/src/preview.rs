//! Preview rendering resolution

/// Rendering resolution at 100% zoom
pub const BASE_DPI: u32 = 300;

/// Upper bound on the rendering resolution
pub const MAX_DPI: u32 = 900;

/// Resolution to render at for a given zoom level.
///
/// Scales `base` by the zoom percentage and clamps at `cap`
/// (or [`MAX_DPI`] when no cap is given) so extreme zoom levels do
/// not produce unbounded raster sizes.
pub fn effective_dpi(base: u32, zoom_percent: u32, cap: Option<u32>) -> u32 {
    let scaled = (base as f64 * zoom_percent as f64 / 100.0) as u32;
    scaled.min(cap.unwrap_or(MAX_DPI))
}
