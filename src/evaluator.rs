//! Metric dispatch.
//!
//! The [`Evaluator`] resolves requested metric names against the registry,
//! computes the shared artefacts the requested metrics need exactly once and
//! hands them to every metric.

pub mod report;

pub use report::QualityReport;

use crate::drawing::Drawing;
use crate::error::Result;
use crate::graph::Graph;
use crate::layout::Layout;
use crate::metrics::{MetricInput, MetricKind, MetricParams, Needs, RunTime, RUN_TIME};
use crate::primitives::{EdgeCrossings, ShortestPathTable};
use log::{debug, info};
use rayon::prelude::*;

/// Computes quality metrics of drawings.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Evaluator {
    params: MetricParams,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> EvaluatorBuilder {
        EvaluatorBuilder::default()
    }

    pub fn params(&self) -> &MetricParams {
        &self.params
    }

    /// Computes the metrics named in `names`.
    ///
    /// The report holds exactly one entry per distinct requested name. Any
    /// unknown name fails the whole call before a metric is computed.
    /// Supplied `shortest_paths` and `crossings` are used as given; missing
    /// ones are computed once, and only when a requested metric needs them.
    pub fn evaluate<S: AsRef<str>>(
        &self,
        graph: &Graph,
        drawing: &Drawing,
        names: &[S],
        shortest_paths: Option<&ShortestPathTable>,
        crossings: Option<&EdgeCrossings>,
    ) -> Result<QualityReport> {
        let kinds = resolve(names)?;
        self.evaluate_kinds(graph, drawing, &kinds, shortest_paths, crossings)
    }

    /// Computes all nine metrics.
    pub fn evaluate_all(&self, graph: &Graph, drawing: &Drawing) -> Result<QualityReport> {
        self.evaluate_kinds(graph, drawing, &MetricKind::ALL, None, None)
    }

    /// Evaluates independent drawings of one graph in parallel.
    ///
    /// The shortest-path table is built once and shared; crossings are found
    /// per drawing. Reports come back in the order of `drawings`.
    pub fn evaluate_many<S: AsRef<str>>(
        &self,
        graph: &Graph,
        drawings: &[Drawing],
        names: &[S],
    ) -> Result<Vec<QualityReport>> {
        let kinds = resolve(names)?;
        let shortest_paths = needs_of(&kinds)
            .shortest_paths
            .then(|| ShortestPathTable::new(graph));

        info!(
            "Evaluating {} metrics on {} drawings of a graph with {} nodes",
            kinds.len(),
            drawings.len(),
            graph.node_count()
        );

        drawings
            .par_iter()
            .map(|drawing| {
                self.evaluate_kinds(graph, drawing, &kinds, shortest_paths.as_ref(), None)
            })
            .collect()
    }

    /// Runs `layout` under a [`RunTime`] timer and evaluates its drawing.
    ///
    /// Besides the registry metrics, `names` may contain `"run_time"`, which
    /// reports the seconds spent inside [`Layout::draw`]. Names are checked
    /// before the layout runs.
    pub fn draw_and_evaluate<L, S>(
        &self,
        layout: &L,
        graph: &Graph,
        seed: u64,
        names: &[S],
        shortest_paths: Option<&ShortestPathTable>,
    ) -> Result<(Drawing, QualityReport)>
    where
        L: Layout + ?Sized,
        S: AsRef<str>,
    {
        let wants_run_time = names.iter().any(|name| name.as_ref() == RUN_TIME);
        let metric_names: Vec<&str> = names
            .iter()
            .map(|name| name.as_ref())
            .filter(|&name| name != RUN_TIME)
            .collect();
        let kinds = resolve(&metric_names)?;

        let mut timer = RunTime::new();
        timer.start();
        let drawing = layout.draw(graph, seed)?;
        timer.end();

        let mut report = self.evaluate_kinds(graph, &drawing, &kinds, shortest_paths, None)?;
        if wants_run_time {
            let elapsed = timer.quality()?;
            debug!("{RUN_TIME} = {elapsed}");
            report.insert(RUN_TIME, elapsed);
        }
        Ok((drawing, report))
    }

    fn evaluate_kinds(
        &self,
        graph: &Graph,
        drawing: &Drawing,
        kinds: &[MetricKind],
        shortest_paths: Option<&ShortestPathTable>,
        crossings: Option<&EdgeCrossings>,
    ) -> Result<QualityReport> {
        drawing.check(graph)?;

        let needs = needs_of(kinds);

        let computed_table;
        let shortest_paths = match shortest_paths {
            None if needs.shortest_paths => {
                computed_table = ShortestPathTable::new(graph);
                Some(&computed_table)
            }
            supplied => supplied,
        };

        let computed_crossings;
        let crossings = match crossings {
            None if needs.crossings => {
                computed_crossings = EdgeCrossings::find(graph, drawing)?;
                Some(&computed_crossings)
            }
            supplied => supplied,
        };

        let input = MetricInput {
            graph,
            drawing,
            shortest_paths,
            crossings,
            params: &self.params,
        };

        let mut report = QualityReport::new();
        for &kind in kinds {
            let value = (kind.descriptor().compute)(&input)?;
            debug!("{kind} = {value}");
            report.insert(kind.name(), value);
        }
        Ok(report)
    }
}

/// Looks up every name, dropping repeats and keeping first-seen order.
fn resolve<S: AsRef<str>>(names: &[S]) -> Result<Vec<MetricKind>> {
    let mut kinds = Vec::with_capacity(names.len());
    for name in names {
        let kind = MetricKind::from_name(name.as_ref())?;
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }
    Ok(kinds)
}

fn needs_of(kinds: &[MetricKind]) -> Needs {
    kinds.iter().fold(Needs::default(), |acc, kind| {
        let needs = kind.descriptor().needs;
        Needs {
            shortest_paths: acc.shortest_paths || needs.shortest_paths,
            crossings: acc.crossings || needs.crossings,
        }
    })
}

/// [`Evaluator::evaluate`] with default parameters.
pub fn evaluate<S: AsRef<str>>(
    graph: &Graph,
    drawing: &Drawing,
    names: &[S],
    shortest_paths: Option<&ShortestPathTable>,
    crossings: Option<&EdgeCrossings>,
) -> Result<QualityReport> {
    Evaluator::default().evaluate(graph, drawing, names, shortest_paths, crossings)
}

/// Builder for `Evaluator`
#[derive(Clone, Copy, Debug)]
pub struct EvaluatorBuilder {
    stress_k: f64,
    stress_l: f64,
    aspect_ratio_rotations: usize,
}

impl EvaluatorBuilder {
    /// Get a Instance of `EvaluatorBuilder` with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Weight constant of stress. Every pair term is scaled by `stress_k / d²`.
    ///
    /// Panics when `stress_k` is `0`, below, or not finite
    ///
    /// Default: `1.0`
    pub fn stress_k(mut self, stress_k: f64) -> Self {
        if !(stress_k.is_finite() && stress_k > 0.0) {
            panic!("stress_k must be a positive finite number!");
        }
        self.stress_k = stress_k;
        self
    }

    /// Desired drawn length of one unit of graph distance in stress.
    ///
    /// Panics when `stress_l` is `0`, below, or not finite
    ///
    /// Default: `1.0`
    pub fn stress_l(mut self, stress_l: f64) -> Self {
        if !(stress_l.is_finite() && stress_l > 0.0) {
            panic!("stress_l must be a positive finite number!");
        }
        self.stress_l = stress_l;
        self
    }

    /// How many rotations of the drawing aspect ratio looks at.
    ///
    /// Rotation `k` turns the drawing by `2πk / rotations`.
    ///
    /// Panics when `rotations` is `0`
    ///
    /// Default: `7`
    pub fn aspect_ratio_rotations(mut self, rotations: usize) -> Self {
        if rotations == 0 {
            panic!("aspect_ratio_rotations may not be 0!");
        }
        self.aspect_ratio_rotations = rotations;
        self
    }

    /// Constructs a instance of `Evaluator`
    pub fn build(self) -> Evaluator {
        Evaluator {
            params: MetricParams {
                stress_k: self.stress_k,
                stress_l: self.stress_l,
                aspect_ratio_rotations: self.aspect_ratio_rotations,
            },
        }
    }
}

impl Default for EvaluatorBuilder {
    /// Get a Instance of `EvaluatorBuilder` with default values
    fn default() -> Self {
        let params = MetricParams::default();
        Self {
            stress_k: params.stress_k,
            stress_l: params.stress_l,
            aspect_ratio_rotations: params.aspect_ratio_rotations,
        }
    }
}
