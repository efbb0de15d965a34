/// Equal-width binning of a column, matching how a plotting library buckets
/// values for a histogram panel.
#[derive(Debug, PartialEq)]
pub(crate) struct Histogram {
  counts: Vec<usize>,
  edges: Vec<f64>,
}

impl Histogram {
  pub(crate) fn counts(&self) -> &[usize] {
    &self.counts
  }

  pub(crate) fn edges(&self) -> &[f64] {
    &self.edges
  }

  pub(crate) fn max_count(&self) -> usize {
    self.counts.iter().copied().max().unwrap_or(0)
  }

  #[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
  )]
  pub(crate) fn new(values: &[f64], bins: usize) -> Self {
    let bins = bins.max(1);

    let finite = values
      .iter()
      .copied()
      .filter(|value| value.is_finite())
      .collect::<Vec<_>>();

    let (mut low, mut high) = finite.iter().fold(
      (f64::INFINITY, f64::NEG_INFINITY),
      |(low, high), &value| (low.min(value), high.max(value)),
    );

    if finite.is_empty() {
      (low, high) = (0.0, 1.0);
    } else if high <= low {
      (low, high) = (low - 0.5, high + 0.5);
    }

    let width = (high - low) / bins as f64;

    let edges = (0..=bins)
      .map(|index| {
        if index == bins {
          high
        } else {
          low + width * index as f64
        }
      })
      .collect();

    let mut counts = vec![0; bins];

    for value in finite {
      let index = (((value - low) / width) as usize).min(bins - 1);
      counts[index] += 1;
    }

    Self { counts, edges }
  }
}
