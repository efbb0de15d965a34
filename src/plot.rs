use {
  super::*,
  plotters::{
    coord::Shift,
    prelude::{
      BitMapBackend, ChartBuilder, Color, DrawingArea, IntoDrawingArea,
      RGBColor, Rectangle, WHITE,
    },
  },
};

const BINS: usize = 20;

const LIGHT_GREEN: RGBColor = RGBColor(144, 238, 144);

const SIZE: (u32, u32) = (1000, 500);

const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);

struct Panel<'a> {
  color: RGBColor,
  title: &'a str,
  values: &'a [f64],
  x_label: &'a str,
}

impl Panel<'_> {
  #[allow(clippy::cast_precision_loss)]
  fn draw(&self, area: &DrawingArea<BitMapBackend, Shift>) -> Result {
    let histogram = Histogram::new(self.values, BINS);

    let edges = histogram.edges();

    let (low, high) = (edges[0], edges[edges.len() - 1]);

    let top = histogram.max_count().max(1) as f64 * 1.05;

    let mut chart = ChartBuilder::on(area)
      .caption(self.title, ("sans-serif", 20))
      .margin(15)
      .x_label_area_size(40)
      .y_label_area_size(50)
      .build_cartesian_2d(low..high, 0.0..top)
      .map_err(render_error)?;

    chart
      .configure_mesh()
      .x_desc(self.x_label)
      .y_desc("Frequency")
      .draw()
      .map_err(render_error)?;

    chart
      .draw_series(edges.windows(2).zip(histogram.counts()).map(
        |(bounds, &count)| {
          Rectangle::new(
            [(bounds[0], 0.0), (bounds[1], count as f64)],
            self.color.filled(),
          )
        },
      ))
      .map_err(render_error)?;

    Ok(())
  }
}

fn render_error(error: impl Display) -> anyhow::Error {
  anyhow!("could not render plot: {error}")
}

/// Renders the score and descendant histograms side by side into a PNG.
pub(crate) fn render(path: &Path, scores: &[f64], comments: &[f64]) -> Result {
  let root = BitMapBackend::new(path, SIZE).into_drawing_area();

  root.fill(&WHITE).map_err(render_error)?;

  let panels = [
    Panel {
      color: SKY_BLUE,
      title: "Distribution of Story Scores",
      values: scores,
      x_label: "Score",
    },
    Panel {
      color: LIGHT_GREEN,
      title: "Distribution of Number of Comments",
      values: comments,
      x_label: "Number of Comments",
    },
  ];

  for (panel, area) in panels.iter().zip(root.split_evenly((1, 2))) {
    panel.draw(&area)?;
  }

  root.present().map_err(render_error)?;

  info!(path = %path.display(), "saved plots");

  Ok(())
}
