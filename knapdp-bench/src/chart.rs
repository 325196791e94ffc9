// Copyright 2022 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module renders labeled data series as a line chart. The output is a
//! plain SVG document built as a string, which keeps this tool free of any
//! native rendering machinery and gives you the freedom to fiddle with the
//! markup if needed.

use std::path::Path;

use derive_builder::Builder;
use ordered_float::OrderedFloat;

/// The stroke colors the series cycle through.
const PALETTE: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd",
    "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
];

/// The number of intervals between ticks on each axis.
const NB_TICKS: usize = 5;

/// How a series is stroked and which marker decorates its points. Using one
/// style per solving strategy keeps the chart readable when two series of the
/// same color overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// A plain stroke with a disc on every point.
    Solid,
    /// A dashed stroke with a cross on every point.
    Dashed,
}

/// One labeled data series of the chart.
#[derive(Debug, Clone)]
pub struct Series {
    /// The name shown in the legend.
    pub label: String,
    /// How the series is stroked.
    pub style: LineStyle,
    /// The `(x, y)` points of the series.
    pub points: Vec<(f64, f64)>,
}

/// This is how you configure the output chart: its title, the axis labels and
/// the dimensions of the document.
#[derive(Debug, Clone, Builder)]
pub struct ChartConfig {
    /// The title shown above the plotting area.
    #[builder(setter(into))]
    pub title: String,
    /// The label of the horizontal axis.
    #[builder(setter(into))]
    pub x_label: String,
    /// The label of the vertical axis.
    #[builder(setter(into))]
    pub y_label: String,
    /// The width of the document, in pixels.
    #[builder(default = "1000")]
    pub width: usize,
    /// The height of the document, in pixels.
    #[builder(default = "600")]
    pub height: usize,
}

/// A line chart: a configuration plus the series to draw. Series are drawn
/// (and listed in the legend) in insertion order.
pub struct LineChart {
    config: ChartConfig,
    series: Vec<Series>,
}

impl LineChart {
    /// Creates an empty chart with the given configuration.
    pub fn new(config: ChartConfig) -> Self {
        LineChart { config, series: vec![] }
    }

    /// Adds one series to the chart.
    pub fn push(&mut self, series: Series) {
        self.series.push(series);
    }

    /// The number of series of the chart.
    pub fn nb_series(&self) -> usize {
        self.series.len()
    }

    /// Renders the chart and writes the resulting document to the given file.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        std::fs::write(path, self.as_svg())
    }

    /// Renders the chart as an SVG document.
    pub fn as_svg(&self) -> String {
        let width = self.config.width;
        let height = self.config.height;
        let frame = Frame::new(&self.config, &self.series);

        let mut out = String::new();
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
             viewBox=\"0 0 {width} {height}\" font-family=\"sans-serif\">\n"
        ));
        out.push_str(&format!(
            "\t<rect width=\"{width}\" height=\"{height}\" fill=\"white\"/>\n"
        ));
        out.push_str(&self.title());
        out.push_str(&self.grid_and_ticks(&frame));
        out.push_str(&self.axes(&frame));
        for (i, series) in self.series.iter().enumerate() {
            out.push_str(&Self::series(series, PALETTE[i % PALETTE.len()], &frame));
        }
        out.push_str(&self.legend(&frame));
        out.push_str("</svg>\n");
        out
    }

    /// Creates the title of the chart, centered above the plotting area.
    fn title(&self) -> String {
        let x = self.config.width / 2;
        let title = &self.config.title;
        format!(
            "\t<text x=\"{x}\" y=\"25\" text-anchor=\"middle\" font-size=\"18\">{title}</text>\n"
        )
    }

    /// Creates the gridlines and the tick labels of both axes.
    fn grid_and_ticks(&self, frame: &Frame) -> String {
        let mut out = String::new();
        for tick in 0..=NB_TICKS {
            let ratio = tick as f64 / NB_TICKS as f64;

            let x_value = frame.x_min + ratio * (frame.x_max - frame.x_min);
            let x = frame.x(x_value);
            out.push_str(&format!(
                "\t<line x1=\"{x:.1}\" y1=\"{}\" x2=\"{x:.1}\" y2=\"{}\" stroke=\"#dddddd\"/>\n",
                frame.top, frame.bottom
            ));
            out.push_str(&format!(
                "\t<text x=\"{x:.1}\" y=\"{}\" text-anchor=\"middle\" font-size=\"12\">{}</text>\n",
                frame.bottom + 20.0, tick_label(x_value)
            ));

            let y_value = frame.y_min + ratio * (frame.y_max - frame.y_min);
            let y = frame.y(y_value);
            out.push_str(&format!(
                "\t<line x1=\"{}\" y1=\"{y:.1}\" x2=\"{}\" y2=\"{y:.1}\" stroke=\"#dddddd\"/>\n",
                frame.left, frame.right
            ));
            out.push_str(&format!(
                "\t<text x=\"{}\" y=\"{:.1}\" text-anchor=\"end\" font-size=\"12\">{}</text>\n",
                frame.left - 8.0, y + 4.0, tick_label(y_value)
            ));
        }
        out
    }

    /// Creates the two axis lines and their labels.
    fn axes(&self, frame: &Frame) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "\t<line x1=\"{0}\" y1=\"{1}\" x2=\"{0}\" y2=\"{2}\" stroke=\"black\"/>\n",
            frame.left, frame.top, frame.bottom
        ));
        out.push_str(&format!(
            "\t<line x1=\"{0}\" y1=\"{2}\" x2=\"{1}\" y2=\"{2}\" stroke=\"black\"/>\n",
            frame.left, frame.right, frame.bottom
        ));

        let x_mid = (frame.left + frame.right) / 2.0;
        out.push_str(&format!(
            "\t<text x=\"{x_mid:.1}\" y=\"{}\" text-anchor=\"middle\" font-size=\"14\">{}</text>\n",
            frame.bottom + 45.0, self.config.x_label
        ));
        let y_mid = (frame.top + frame.bottom) / 2.0;
        out.push_str(&format!(
            "\t<text x=\"20\" y=\"{y_mid:.1}\" text-anchor=\"middle\" font-size=\"14\" \
             transform=\"rotate(-90 20 {y_mid:.1})\">{}</text>\n",
            self.config.y_label
        ));
        out
    }

    /// Creates the polyline and the point markers of one series.
    fn series(series: &Series, color: &str, frame: &Frame) -> String {
        let mut out = String::new();

        let points = series
            .points
            .iter()
            .map(|&(x, y)| format!("{:.1},{:.1}", frame.x(x), frame.y(y)))
            .collect::<Vec<_>>()
            .join(" ");
        let dashes = match series.style {
            LineStyle::Solid => "",
            LineStyle::Dashed => " stroke-dasharray=\"6 4\"",
        };
        out.push_str(&format!(
            "\t<polyline points=\"{points}\" fill=\"none\" stroke=\"{color}\" stroke-width=\"1.5\"{dashes}/>\n"
        ));

        for &(x, y) in series.points.iter() {
            out.push_str(&Self::marker(frame.x(x), frame.y(y), series.style, color));
        }
        out
    }

    /// Creates the marker decorating one point.
    fn marker(x: f64, y: f64, style: LineStyle, color: &str) -> String {
        match style {
            LineStyle::Solid => format!(
                "\t<circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"3\" fill=\"{color}\"/>\n"
            ),
            LineStyle::Dashed => format!(
                "\t<path d=\"M {a:.1} {b:.1} L {c:.1} {d:.1} M {a:.1} {d:.1} L {c:.1} {b:.1}\" \
                 stroke=\"{color}\" stroke-width=\"1.5\"/>\n",
                a = x - 3.0, b = y - 3.0, c = x + 3.0, d = y + 3.0
            ),
        }
    }

    /// Creates the legend, one entry per series, to the right of the plot.
    fn legend(&self, frame: &Frame) -> String {
        let mut out = String::new();
        let x = frame.right + 15.0;
        for (i, series) in self.series.iter().enumerate() {
            let y = frame.top + 10.0 + 18.0 * i as f64;
            let color = PALETTE[i % PALETTE.len()];
            let dashes = match series.style {
                LineStyle::Solid => "",
                LineStyle::Dashed => " stroke-dasharray=\"6 4\"",
            };
            out.push_str(&format!(
                "\t<line x1=\"{x:.1}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" \
                 stroke=\"{color}\" stroke-width=\"1.5\"{dashes}/>\n",
                x + 25.0
            ));
            out.push_str(&format!(
                "\t<text x=\"{:.1}\" y=\"{:.1}\" font-size=\"12\">{}</text>\n",
                x + 32.0, y + 4.0, series.label
            ));
        }
        out
    }
}

/// The geometry of the plotting area: its pixel bounds and the value ranges
/// it spans, with the mapping from values to pixel coordinates.
struct Frame {
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Frame {
    fn new(config: &ChartConfig, series: &[Series]) -> Self {
        let points = || series.iter().flat_map(|s| s.points.iter().copied());

        let x_min = points().map(|p| OrderedFloat(p.0)).min().map_or(0.0, OrderedFloat::into_inner);
        let x_max = points().map(|p| OrderedFloat(p.0)).max().map_or(1.0, OrderedFloat::into_inner);
        // the vertical axis always starts at zero: timings are durations
        let y_min = 0.0;
        let y_max = points().map(|p| OrderedFloat(p.1)).max().map_or(1.0, OrderedFloat::into_inner);
        // leave some headroom above the highest point
        let y_max = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };

        Frame {
            left: 80.0,
            right: config.width as f64 - 190.0,
            top: 50.0,
            bottom: config.height as f64 - 60.0,
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Maps a data abscissa to its pixel coordinate.
    fn x(&self, value: f64) -> f64 {
        let span = self.x_max - self.x_min;
        let span = if span > 0.0 { span } else { 1.0 };
        self.left + (value - self.x_min) / span * (self.right - self.left)
    }

    /// Maps a data ordinate to its pixel coordinate.
    fn y(&self, value: f64) -> f64 {
        let span = self.y_max - self.y_min;
        let span = if span > 0.0 { span } else { 1.0 };
        self.bottom - (value - self.y_min) / span * (self.bottom - self.top)
    }
}

/// Formats the value of one tick. Small magnitudes (the elapsed seconds of a
/// fast solve) are shown in scientific notation, everything else with at most
/// two decimal places.
fn tick_label(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1.0 {
        let text = format!("{value:.2}");
        let text = text.trim_end_matches('0').trim_end_matches('.');
        text.to_string()
    } else {
        format!("{value:.2e}")
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_chart {
    use crate::chart::{ChartConfigBuilder, LineChart, LineStyle, Series};

    fn chart() -> LineChart {
        let config = ChartConfigBuilder::default()
            .title("Some Title")
            .x_label("Capacity (W)")
            .y_label("Execution Time (seconds)")
            .build()
            .unwrap();
        let mut chart = LineChart::new(config);
        chart.push(Series {
            label: "Bottom-Up (n=10)".to_string(),
            style: LineStyle::Solid,
            points: vec![(50.0, 1e-4), (100.0, 2e-4), (200.0, 5e-4)],
        });
        chart.push(Series {
            label: "Top-Down (n=10)".to_string(),
            style: LineStyle::Dashed,
            points: vec![(50.0, 2e-4), (100.0, 3e-4), (200.0, 4e-4)],
        });
        chart
    }

    #[test]
    fn the_document_is_a_standalone_svg() {
        let svg = chart().as_svg();
        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.contains("xmlns=\"http://www.w3.org/2000/svg\""));
    }

    #[test]
    fn the_title_and_axis_labels_are_rendered() {
        let svg = chart().as_svg();
        assert!(svg.contains("Some Title"));
        assert!(svg.contains("Capacity (W)"));
        assert!(svg.contains("Execution Time (seconds)"));
    }

    #[test]
    fn each_series_is_one_polyline_with_its_legend_entry() {
        let svg = chart().as_svg();
        assert_eq!(2, svg.matches("<polyline ").count());
        assert!(svg.contains("Bottom-Up (n=10)"));
        assert!(svg.contains("Top-Down (n=10)"));
        // the dashed strategy appears once as a series and once in the legend
        assert_eq!(2, svg.matches("stroke-dasharray").count());
    }

    #[test]
    fn solid_series_use_discs_and_dashed_series_use_crosses() {
        let svg = chart().as_svg();
        assert_eq!(3, svg.matches("<circle ").count());
        assert_eq!(3, svg.matches("<path ").count());
    }

    #[test]
    fn defaults_give_the_chart_its_dimensions() {
        let svg = chart().as_svg();
        assert!(svg.contains("width=\"1000\""));
        assert!(svg.contains("height=\"600\""));
    }

    #[test]
    fn an_empty_chart_still_renders() {
        let config = ChartConfigBuilder::default()
            .title("Empty")
            .x_label("x")
            .y_label("y")
            .build()
            .unwrap();
        let svg = LineChart::new(config).as_svg();
        assert!(svg.starts_with("<svg "));
        assert!(svg.ends_with("</svg>\n"));
    }
}
