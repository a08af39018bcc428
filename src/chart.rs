use eframe::egui::Color32;

/// Line colour of the closing-value series.
pub const LINE_COLOR: Color32 = Color32::from_rgb(75, 192, 192);

// ---------------------------------------------------------------------------
// ChartSpec – what the plot panel draws
// ---------------------------------------------------------------------------

/// A rendering request: x-axis labels, y values, and a series title.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl ChartSpec {
    pub fn from_series(category: &str, series: Vec<(String, f64)>) -> Self {
        let (labels, values) = series.into_iter().unzip();
        ChartSpec {
            title: format!("{category} Index Closing Value"),
            labels,
            values,
        }
    }

    /// Label for a plot x coordinate, if it lands on a data point.
    pub fn label_at(&self, x: f64) -> Option<&str> {
        if x < 0.0 || x.fract() != 0.0 {
            return None;
        }
        self.labels.get(x as usize).map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// ChartSlot – owns the single active chart
// ---------------------------------------------------------------------------

/// Holds at most one chart. Replacing it drops the previous one and bumps the
/// generation, which the plot panel folds into its widget id so zoom and pan
/// memory of the old chart is not reused.
#[derive(Debug, Default)]
pub struct ChartSlot {
    active: Option<ChartSpec>,
    generation: u64,
}

impl ChartSlot {
    pub fn replace(&mut self, spec: ChartSpec) {
        if let Some(previous) = self.active.take() {
            log::debug!("Disposing chart '{}'", previous.title);
        }
        self.generation += 1;
        self.active = Some(spec);
    }

    /// Drop the active chart, if any.
    pub fn clear(&mut self) {
        if let Some(previous) = self.active.take() {
            log::debug!("Disposing chart '{}'", previous.title);
            self.generation += 1;
        }
    }

    pub fn active(&self) -> Option<&ChartSpec> {
        self.active.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Split values into runs of finite points `[x, y]`, x being the position in
/// the series. NaN and infinite values end a run so they render as gaps.
pub fn gap_segments(values: &[f64]) -> Vec<Vec<[f64; 2]>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();
    for (i, &y) in values.iter().enumerate() {
        if y.is_finite() {
            current.push([i as f64, y]);
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(category: &str) -> ChartSpec {
        ChartSpec::from_series(
            category,
            vec![("2021-01-01".to_string(), 10.0), ("2021-01-02".to_string(), 12.0)],
        )
    }

    #[test]
    fn spec_from_series() {
        let s = spec("NIFTY 50");
        assert_eq!(s.title, "NIFTY 50 Index Closing Value");
        assert_eq!(s.labels, ["2021-01-01", "2021-01-02"]);
        assert_eq!(s.values, [10.0, 12.0]);
    }

    #[test]
    fn label_lookup() {
        let s = spec("A");
        assert_eq!(s.label_at(1.0), Some("2021-01-02"));
        assert_eq!(s.label_at(0.5), None);
        assert_eq!(s.label_at(-1.0), None);
        assert_eq!(s.label_at(2.0), None);
    }

    #[test]
    fn replace_keeps_single_chart() {
        let mut slot = ChartSlot::default();
        assert!(slot.active().is_none());

        slot.replace(spec("A"));
        slot.replace(spec("B"));
        assert_eq!(slot.generation(), 2);
        assert_eq!(slot.active().unwrap().title, "B Index Closing Value");
    }

    #[test]
    fn clear_empties_slot() {
        let mut slot = ChartSlot::default();
        slot.clear();
        assert_eq!(slot.generation(), 0);

        slot.replace(spec("A"));
        slot.clear();
        assert!(slot.active().is_none());
        assert_eq!(slot.generation(), 2);
    }

    #[test]
    fn nan_splits_segments() {
        let segments = gap_segments(&[1.0, 2.0, f64::NAN, 4.0, f64::NAN, f64::NAN, 7.0]);
        assert_eq!(
            segments,
            vec![vec![[0.0, 1.0], [1.0, 2.0]], vec![[3.0, 4.0]], vec![[6.0, 7.0]]]
        );
    }

    #[test]
    fn all_nan_has_no_segments() {
        assert!(gap_segments(&[f64::NAN, f64::NAN]).is_empty());
        assert!(gap_segments(&[]).is_empty());
    }
}
