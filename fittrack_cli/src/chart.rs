//! Plain-text chart renderer for the terminal.

use fittrack_core::{ChartKind, ChartRenderer, ChartSeries, Result};
use std::io::Write;

/// Widest bar, in characters
const BAR_WIDTH: usize = 40;

/// Draws every series as horizontal bars; pie slices also get a percentage
pub struct TextChart<W> {
    out: W,
}

impl<W: Write> TextChart<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ChartRenderer for TextChart<W> {
    fn render(&mut self, chart: &ChartSeries) -> Result<()> {
        writeln!(self.out, "\n{}", chart.title)?;
        if !chart.x_label.is_empty() || !chart.y_label.is_empty() {
            writeln!(self.out, "({} vs {})", chart.y_label, chart.x_label)?;
        }

        let label_width = chart
            .points
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);
        let max = chart
            .points
            .iter()
            .map(|(_, value)| value.abs())
            .fold(0.0_f64, f64::max);
        let total: f64 = chart.points.iter().map(|(_, value)| value).sum();

        for (label, value) in &chart.points {
            let len = if max > 0.0 {
                ((value.abs() / max) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            let bar = "#".repeat(len);
            match chart.kind {
                ChartKind::Pie if total > 0.0 => writeln!(
                    self.out,
                    "{:<width$} | {} {} ({:.1}%)",
                    label,
                    bar,
                    value,
                    value / total * 100.0,
                    width = label_width
                )?,
                _ => writeln!(
                    self.out,
                    "{:<width$} | {} {}",
                    label,
                    bar,
                    value,
                    width = label_width
                )?,
            }
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(chart: &ChartSeries) -> String {
        let mut out = Vec::new();
        TextChart::new(&mut out).render(chart).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_bars_scale_to_largest_value() {
        let chart = ChartSeries {
            title: "Weekly Workout Summary".into(),
            x_label: "Date".into(),
            y_label: "Total Duration (min)".into(),
            kind: ChartKind::Bar,
            points: vec![("2024-01-01".into(), 30.0), ("2024-01-02".into(), 15.0)],
        };
        let text = render(&chart);
        assert!(text.contains("Weekly Workout Summary"));
        assert!(text.contains(&format!("2024-01-01 | {} 30", "#".repeat(40))));
        assert!(text.contains(&format!("2024-01-02 | {} 15", "#".repeat(20))));
    }

    #[test]
    fn test_pie_shows_percentages() {
        let chart = ChartSeries {
            title: "Macronutrient Distribution".into(),
            x_label: String::new(),
            y_label: String::new(),
            kind: ChartKind::Pie,
            points: vec![
                ("proteins".into(), 50.0),
                ("fats".into(), 25.0),
                ("carbs".into(), 25.0),
            ],
        };
        let text = render(&chart);
        assert!(text.contains("(50.0%)"));
        assert!(text.contains("(25.0%)"));
    }

    #[test]
    fn test_all_zero_pie_has_empty_bars() {
        let chart = ChartSeries {
            title: "Macronutrient Distribution".into(),
            x_label: String::new(),
            y_label: String::new(),
            kind: ChartKind::Pie,
            points: vec![("proteins".into(), 0.0), ("fats".into(), 0.0)],
        };
        let text = render(&chart);
        assert!(text.contains("proteins |  0"));
        assert!(!text.contains('%'));
    }
}
