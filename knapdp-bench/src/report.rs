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

//! This module turns the timing arrays of the scenarios into the persisted
//! artifacts of a run: one chart per scenario and one JSON document holding
//! the raw timings of all three.

use std::fs::File;
use std::path::Path;

use serde::Serialize;

use crate::chart::{ChartConfigBuilder, LineChart, LineStyle, Series};
use crate::scenarios::{ComparativeTimings, GrowthTimings};

/// The raw timings of a complete run, as serialized next to the charts.
#[derive(Debug, Serialize)]
pub struct RawTimings<'a> {
    pub general: &'a ComparativeTimings,
    pub low_weight: &'a ComparativeTimings,
    pub representation_growth: &'a GrowthTimings,
}

/// Renders and writes every artifact of a run into the given directory:
/// `plot_random_inputs.svg`, `plot_low_weights.svg`,
/// `plot_pseudopolynomial.svg` and `timings.json`.
pub fn save_all(
    outdir: &Path,
    general: &ComparativeTimings,
    low_weight: &ComparativeTimings,
    growth: &GrowthTimings,
) -> anyhow::Result<()> {
    std::fs::create_dir_all(outdir)?;

    let random = random_inputs_chart(general)?;
    let low = low_weights_chart(low_weight)?;
    let pseudo = pseudopolynomial_chart(growth)?;
    log::debug!(
        "rendering {} + {} + {} series",
        random.nb_series(),
        low.nb_series(),
        pseudo.nb_series()
    );

    random.save_to(outdir.join("plot_random_inputs.svg"))?;
    low.save_to(outdir.join("plot_low_weights.svg"))?;
    pseudo.save_to(outdir.join("plot_pseudopolynomial.svg"))?;

    let raw = RawTimings { general, low_weight, representation_growth: growth };
    serde_json::to_writer_pretty(File::create(outdir.join("timings.json"))?, &raw)?;
    Ok(())
}

/// The chart of the general scenario: elapsed time against capacity, one
/// series per strategy per item count.
pub fn random_inputs_chart(timings: &ComparativeTimings) -> anyhow::Result<LineChart> {
    comparative_chart(timings, "Execution Time of Knapsack Algorithms")
}

/// The chart of the low-weight scenario, same layout as the general one.
pub fn low_weights_chart(timings: &ComparativeTimings) -> anyhow::Result<LineChart> {
    comparative_chart(timings, "Execution Time of Knapsack Algorithms with Low Weights")
}

fn comparative_chart(timings: &ComparativeTimings, title: &str) -> anyhow::Result<LineChart> {
    let config = ChartConfigBuilder::default()
        .title(title)
        .x_label("Capacity (W)")
        .y_label("Execution Time (seconds)")
        .build()?;

    let mut chart = LineChart::new(config);
    for (i, &n) in timings.item_counts.iter().enumerate() {
        chart.push(Series {
            label: format!("Bottom-Up (n={n})"),
            style: LineStyle::Solid,
            points: against_capacities(&timings.capacities, &timings.bottom_up[i]),
        });
        chart.push(Series {
            label: format!("Top-Down (n={n})"),
            style: LineStyle::Dashed,
            points: against_capacities(&timings.capacities, &timings.top_down[i]),
        });
    }
    Ok(chart)
}

/// The chart of the representation growth scenario: elapsed time against the
/// size of the binary representation of the capacity, which is what makes the
/// pseudopolynomial behavior of the tabulation visible as an exponential
/// looking curve.
pub fn pseudopolynomial_chart(timings: &GrowthTimings) -> anyhow::Result<LineChart> {
    let config = ChartConfigBuilder::default()
        .title("Pseudopolynomial-Time Complexity of Knapsack Algorithms")
        .x_label("Log(Size of Representation of W)")
        .y_label("Execution Time (seconds)")
        .build()?;

    let log2_capacities: Vec<f64> = timings
        .capacities
        .iter()
        .map(|&capacity| (capacity as f64).log2())
        .collect();

    let mut chart = LineChart::new(config);
    chart.push(Series {
        label: "Bottom-Up".to_string(),
        style: LineStyle::Solid,
        points: log2_capacities.iter().copied().zip(timings.bottom_up.iter().copied()).collect(),
    });
    chart.push(Series {
        label: "Top-Down".to_string(),
        style: LineStyle::Dashed,
        points: log2_capacities.iter().copied().zip(timings.top_down.iter().copied()).collect(),
    });
    Ok(chart)
}

fn against_capacities(capacities: &[isize], seconds: &[f64]) -> Vec<(f64, f64)> {
    capacities
        .iter()
        .map(|&capacity| capacity as f64)
        .zip(seconds.iter().copied())
        .collect()
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################
