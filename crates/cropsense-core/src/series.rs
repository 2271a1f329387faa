//! Bounded time series for charting recent readings.
//!
//! A [`ChartSeries`] keeps the most recent points of one metric. When a push
//! would exceed the capacity the oldest point is dropped and the remaining
//! points are re-indexed from zero, so the x-axis always runs `0..len`.

use serde::{Deserialize, Serialize};

use cropsense_types::{Metric, Snapshot};

/// Default number of points kept per series.
pub const DEFAULT_CAPACITY: usize = 50;

/// One charted point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Position on the x-axis.
    pub index: usize,
    /// Measured value.
    pub value: f32,
}

/// FIFO series of at most `capacity` points.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    points: Vec<Point>,
    capacity: usize,
}

impl Default for ChartSeries {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ChartSeries {
    /// Create an empty series. A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: Vec::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a value, evicting the oldest point when full.
    pub fn push(&mut self, value: f32) {
        self.points.push(Point {
            index: self.points.len(),
            value,
        });

        if self.points.len() > self.capacity {
            self.points.remove(0);
            for (i, point) in self.points.iter_mut().enumerate() {
                point.index = i;
            }
        }
    }

    /// Points in order, oldest first.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Values in order, oldest first.
    pub fn values(&self) -> impl Iterator<Item = f32> + '_ {
        self.points.iter().map(|p| p.value)
    }

    /// The most recent value.
    pub fn latest(&self) -> Option<f32> {
        self.points.last().map(|p| p.value)
    }

    /// Number of points held.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Maximum number of points held.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Remove all points.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Smallest and largest finite value, if any.
    pub fn bounds(&self) -> Option<(f32, f32)> {
        self.values()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Points as `(x, y)` pairs for plotting.
    pub fn chart_data(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (p.index as f64, f64::from(p.value)))
            .collect()
    }
}

/// One independent [`ChartSeries`] per charted metric.
#[derive(Debug, Clone, Default)]
pub struct MetricHistory {
    humidity: ChartSeries,
    temperature: ChartSeries,
    sunlight: ChartSeries,
}

impl MetricHistory {
    /// Create a history whose series each hold `capacity` points.
    pub fn new(capacity: usize) -> Self {
        Self {
            humidity: ChartSeries::new(capacity),
            temperature: ChartSeries::new(capacity),
            sunlight: ChartSeries::new(capacity),
        }
    }

    /// Append every metric of a snapshot to its series.
    pub fn record(&mut self, snapshot: &Snapshot) {
        for metric in Metric::ALL {
            self.series_mut(metric).push(snapshot.value(metric));
        }
    }

    /// The series for a metric.
    pub fn series(&self, metric: Metric) -> &ChartSeries {
        match metric {
            Metric::Humidity => &self.humidity,
            Metric::Temperature => &self.temperature,
            Metric::Sunlight => &self.sunlight,
        }
    }

    fn series_mut(&mut self, metric: Metric) -> &mut ChartSeries {
        match metric {
            Metric::Humidity => &mut self.humidity,
            Metric::Temperature => &mut self.temperature,
            Metric::Sunlight => &mut self.sunlight,
        }
    }

    /// Remove all points from every series.
    pub fn clear(&mut self) {
        for metric in Metric::ALL {
            self.series_mut(metric).clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cropsense_types::{Reading, Suggestion};

    #[test]
    fn test_push_assigns_sequential_indices() {
        let mut series = ChartSeries::default();
        series.push(1.0);
        series.push(2.0);
        series.push(3.0);

        let indices: Vec<usize> = series.points().iter().map(|p| p.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(series.latest(), Some(3.0));
    }

    #[test]
    fn test_overflow_drops_oldest_and_reindexes() {
        let mut series = ChartSeries::default();
        for i in 0..51 {
            series.push(i as f32);
        }

        assert_eq!(series.len(), 50);
        for (i, point) in series.points().iter().enumerate() {
            assert_eq!(point.index, i);
            assert_eq!(point.value, (i + 1) as f32);
        }
    }

    #[test]
    fn test_length_never_exceeds_capacity() {
        let mut series = ChartSeries::new(5);
        for i in 0..100 {
            series.push(i as f32);
            assert!(series.len() <= 5);
        }
        assert_eq!(series.values().collect::<Vec<_>>(), vec![95.0, 96.0, 97.0, 98.0, 99.0]);
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let mut series = ChartSeries::new(0);
        series.push(1.0);
        series.push(2.0);
        assert_eq!(series.capacity(), 1);
        assert_eq!(series.points(), &[Point { index: 0, value: 2.0 }]);
    }

    #[test]
    fn test_bounds_ignores_nan() {
        let mut series = ChartSeries::default();
        assert_eq!(series.bounds(), None);

        series.push(5.0);
        series.push(f32::NAN);
        series.push(-2.0);
        series.push(9.5);
        assert_eq!(series.bounds(), Some((-2.0, 9.5)));
    }

    #[test]
    fn test_chart_data() {
        let mut series = ChartSeries::default();
        series.push(10.0);
        series.push(20.5);
        assert_eq!(series.chart_data(), vec![(0.0, 10.0), (1.0, 20.5)]);
    }

    #[test]
    fn test_clear() {
        let mut series = ChartSeries::default();
        series.push(1.0);
        series.clear();
        assert!(series.is_empty());
        series.push(4.0);
        assert_eq!(series.points()[0].index, 0);
    }

    #[test]
    fn test_metric_history_records_each_metric() {
        let mut history = MetricHistory::default();
        let snapshot = Snapshot::new(
            Reading::new("Tomato", 25.0, 50.0, 500.0, 1010.0),
            Suggestion::Optimal,
        );
        history.record(&snapshot);

        assert_eq!(history.series(Metric::Humidity).latest(), Some(50.0));
        assert_eq!(history.series(Metric::Temperature).latest(), Some(25.0));
        assert_eq!(history.series(Metric::Sunlight).latest(), Some(500.0));
    }

    #[test]
    fn test_metric_history_series_are_bounded() {
        let mut history = MetricHistory::new(3);
        for i in 0..10 {
            let snapshot = Snapshot::new(
                Reading::new("Tomato", i as f32, 50.0, 500.0, 1010.0),
                Suggestion::Optimal,
            );
            history.record(&snapshot);
        }

        for metric in Metric::ALL {
            assert_eq!(history.series(metric).len(), 3);
        }
        assert_eq!(
            history.series(Metric::Temperature).values().collect::<Vec<_>>(),
            vec![7.0, 8.0, 9.0]
        );

        history.clear();
        assert!(history.series(Metric::Sunlight).is_empty());
    }
}
