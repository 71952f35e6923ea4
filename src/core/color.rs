/// Plotly's sequential Viridis scale
const VIRIDIS: [&str; 10] = [
    "#440154", "#482878", "#3e4989", "#31688e", "#26828e",
    "#1f9e89", "#35b779", "#6ece58", "#b5de2b", "#fde725",
];

/// Discrete color scale used to style chart points by salary
#[derive(Debug, Clone, Copy)]
pub struct ColorScale {
    stops: &'static [&'static str],
}

impl ColorScale {
    pub fn viridis() -> Self {
        Self { stops: &VIRIDIS }
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Pick the stop for `value` within the series range `[min, max]`
    pub fn color_for(&self, value: f64, min: f64, max: f64) -> &'static str {
        self.stops[scale_index(value, min, max, self.stops.len())]
    }
}

impl Default for ColorScale {
    fn default() -> Self {
        Self::viridis()
    }
}

/// Map a continuous value onto a position `0..len` of a discrete scale
///
/// Uses `floor((value - min) / (max - min) * (len - 1))`, clamped into the
/// scale. A flat series (`max == min`) maps to the first stop.
pub fn scale_index(value: f64, min: f64, max: f64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    let span = max - min;
    let ratio = (value - min) / span;
    if span <= 0.0 || !ratio.is_finite() {
        return 0;
    }

    let position = (ratio * (len - 1) as f64).floor();
    if position <= 0.0 {
        0
    } else {
        (position as usize).min(len - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_index_edges() {
        assert_eq!(scale_index(10.0, 10.0, 20.0, 10), 0);
        assert_eq!(scale_index(20.0, 10.0, 20.0, 10), 9);
        assert_eq!(scale_index(15.0, 10.0, 20.0, 10), 4);
    }

    #[test]
    fn test_scale_index_flat_series() {
        assert_eq!(scale_index(5.0, 5.0, 5.0, 10), 0);
    }

    #[test]
    fn test_scale_index_clamps() {
        assert_eq!(scale_index(-100.0, 0.0, 10.0, 10), 0);
        assert_eq!(scale_index(100.0, 0.0, 10.0, 10), 9);
    }

    #[test]
    fn test_viridis_colors() {
        let scale = ColorScale::viridis();
        assert_eq!(scale.len(), 10);
        assert_eq!(scale.color_for(0.0, 0.0, 1.0), "#440154");
        assert_eq!(scale.color_for(1.0, 0.0, 1.0), "#fde725");
    }
}
