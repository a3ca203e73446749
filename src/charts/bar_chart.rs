// src/charts/bar_chart.rs

use crate::domain::{bucket_for, Listing, PriceBucket};
use serde_json::{json, Value};

pub const CHART_TITLE: &str = "Comparação de Valores Totais por Bairro";
pub const HOVER_TEMPLATE: &str = "<b>Bairro:</b> %{y}<br><b>Valor Total:</b> R$ %{x:,.2f}";

/// One bar per listing. Neighborhoods are not merged.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub neighborhood: String,
    pub total_value: f64,
    pub bucket: usize,
}

/// Fixed look of the chart. Nothing here depends on the data.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub background: &'static str,
    pub font_family: &'static str,
    pub font_size: u32,
    pub font_color: &'static str,
    pub margin: (u32, u32, u32, u32), // l, r, t, b
    pub height: u32,
    pub width: u32,
    pub x_title: &'static str,
    pub y_title: &'static str,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            background: "rgb(14,17,23)",
            font_family: "Arial, sans-serif",
            font_size: 12,
            font_color: "rgb(64, 64, 64)",
            margin: (80, 80, 80, 60),
            height: 1800,
            width: 1000,
            x_title: "Valor Total (R$)",
            y_title: "Bairro",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: &'static str,
    pub bars: Vec<Bar>,
    pub buckets: Vec<PriceBucket>,
    pub layout: ChartLayout,
}

pub fn build_bar_chart(ranked: &[&Listing], buckets: &[PriceBucket]) -> BarChart {
    let bars = ranked
        .iter()
        .map(|listing| Bar {
            neighborhood: listing.neighborhood.clone(),
            total_value: listing.total_value,
            bucket: bucket_for(listing.total_value, buckets),
        })
        .collect();

    BarChart {
        title: CHART_TITLE,
        bars,
        buckets: buckets.to_vec(),
        layout: ChartLayout::default(),
    }
}

impl BarChart {
    /// Stepped scale over `[0, n]`: bucket `i` owns `[i/n, (i+1)/n]`.
    /// Bars are colored by `bucket + 0.5`, which always sits inside
    /// its own step.
    pub fn colorscale(&self) -> Vec<(f64, &'static str)> {
        let n = self.buckets.len() as f64;
        self.buckets
            .iter()
            .enumerate()
            .flat_map(|(i, b)| [(i as f64 / n, b.color), ((i + 1) as f64 / n, b.color)])
            .collect()
    }

    #[cfg(test)]
    pub fn bar_color(&self, bar: &Bar) -> &'static str {
        self.buckets
            .get(bar.bucket)
            .map(|b| b.color)
            .unwrap_or("rgb(128, 128, 128)")
    }

    /// Plotly figure (`data` + `layout`) for `Plotly.newPlot`.
    pub fn to_plotly(&self) -> Value {
        let x: Vec<f64> = self.bars.iter().map(|b| b.total_value).collect();
        let y: Vec<&str> = self.bars.iter().map(|b| b.neighborhood.as_str()).collect();
        let color: Vec<f64> = self.bars.iter().map(|b| b.bucket as f64 + 0.5).collect();

        let colorscale: Vec<Value> = self
            .colorscale()
            .into_iter()
            .map(|(pos, c)| json!([pos, c]))
            .collect();
        let tickvals: Vec<f64> = (0..self.buckets.len()).map(|i| i as f64 + 0.5).collect();
        let ticktext: Vec<String> = self.buckets.iter().map(|b| b.label()).collect();

        let l = &self.layout;
        let (ml, mr, mt, mb) = l.margin;

        json!({
            "data": [{
                "type": "bar",
                "orientation": "h",
                "x": x,
                "y": y,
                "marker": {
                    "color": color,
                    "colorscale": colorscale,
                    "cmin": 0,
                    "cmax": self.buckets.len(),
                    "colorbar": {
                        "title": { "text": l.x_title },
                        "tickvals": tickvals,
                        "ticktext": ticktext,
                    },
                },
                "hovertemplate": HOVER_TEMPLATE,
            }],
            "layout": {
                "title": { "text": self.title },
                "xaxis": { "title": { "text": l.x_title } },
                "yaxis": {
                    "title": { "text": l.y_title },
                    "tickmode": "array",
                    "tickvals": y,
                    "ticktext": y,
                },
                "paper_bgcolor": l.background,
                "plot_bgcolor": l.background,
                "font": { "family": l.font_family, "size": l.font_size, "color": l.font_color },
                "margin": { "l": ml, "r": mr, "t": mt, "b": mb },
                "height": l.height,
                "width": l.width,
            },
        })
    }
}
