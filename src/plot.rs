// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::cdf::Curve;

use plotters::prelude::*;

use std::error::Error;
use std::path::Path;

macro_rules! hexcolour {
    ($colour:literal) => {
        RGBColor(
            (($colour & 0xFF0000) >> 16) as u8,
            (($colour & 0x00FF00) >> 8) as u8,
            ($colour & 0x0000FF) as u8,
        )
    };
}

const COLOURS: &[RGBColor] = &[
    hexcolour!(0x0000FF),
    hexcolour!(0xAA0000),
    hexcolour!(0x117733),
    hexcolour!(0xDDCC77),
    hexcolour!(0x332288),
    hexcolour!(0x888888),
    hexcolour!(0x999933),
    hexcolour!(0x88CCEE),
    hexcolour!(0x882255),
    hexcolour!(0x44AA99),
    hexcolour!(0xAA4499),
    hexcolour!(0xCC6677),
];

/// Colour used for the `n`th curve on a chart.
pub fn colour(n: usize) -> RGBColor {
    COLOURS[n % COLOURS.len()]
}

/// Line chart of one or more success probability curves.
pub struct PlotConfig {
    pub(crate) x_desc: String,
    pub(crate) y_desc: String,
    pub(crate) legend_title: Option<String>,
    pub(crate) size: (u32, u32),
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl PlotConfig {
    pub fn new() -> Self {
        Self {
            x_desc: String::new(),
            y_desc: "Success probability".to_owned(),
            legend_title: None,
            size: (1280, 720),
        }
    }

    pub fn x_desc(&mut self, x_desc: impl AsRef<str>) -> &mut Self {
        self.x_desc = x_desc.as_ref().to_owned();
        self
    }

    pub fn y_desc(&mut self, y_desc: impl AsRef<str>) -> &mut Self {
        self.y_desc = y_desc.as_ref().to_owned();
        self
    }

    pub fn legend_title(&mut self, title: impl AsRef<str>) -> &mut Self {
        self.legend_title = Some(title.as_ref().to_owned());
        self
    }

    pub fn size(&mut self, size: (u32, u32)) -> &mut Self {
        self.size = size;
        self
    }

    /// Render `curves` to a PNG at `filename`.
    ///
    /// Both axes start at zero. The x axis ends at the last sampled threshold
    /// and the y axis leaves a little headroom above the highest curve.
    pub fn plot(&self, filename: &Path, curves: &[Curve]) -> Result<(), Box<dyn Error>> {
        let root = BitMapBackend::new(filename, self.size).into_drawing_area();
        root.fill(&WHITE)?;

        let (x_max, y_max) = bounds(curves);

        let mut chart = ChartBuilder::on(&root)
            .margin(20)
            .set_label_area_size(LabelAreaPosition::Left, 100)
            .set_label_area_size(LabelAreaPosition::Bottom, 60)
            .build_cartesian_2d(0.0..x_max, 0.0..y_max)?;

        chart
            .configure_mesh()
            .y_desc(&self.y_desc)
            .x_desc(&self.x_desc)
            .x_label_style(("sans-serif", 20))
            .y_label_style(("sans-serif", 20))
            .draw()?;

        // a series without points or marker puts the title at the head of
        // the legend
        if let Some(title) = &self.legend_title {
            chart
                .draw_series(std::iter::empty::<PathElement<(f64, f64)>>())?
                .label(title);
        }

        for (i, curve) in curves.iter().enumerate() {
            let style = colour(i).stroke_width(2);
            chart
                .draw_series(LineSeries::new(curve.points(), style))?
                .label(curve.label())
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(WHITE.mix(0.8).filled())
            .border_style(BLACK.stroke_width(1))
            .draw()?;

        root.present()?;

        Ok(())
    }
}

/// Upper bounds of the chart axes.
fn bounds(curves: &[Curve]) -> (f64, f64) {
    let domain = curves.iter().map(|c| c.cdf().domain()).max().unwrap_or(0);
    let x_max = if domain > 1 { (domain - 1) as f64 } else { 1.0 };

    let highest = curves
        .iter()
        .map(|c| c.cdf().max_probability())
        .fold(0.0, f64::max);
    let y_max = if highest > 0.0 { highest * 1.05 } else { 1.0 };

    (x_max, y_max)
}
