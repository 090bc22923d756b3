use crate::dataset::Dataset;
use crate::kmeans::init::{self, InitMethod};
use crate::kmeans::lloyds;
use crate::kmeans::Assignment;
use crate::render::{Frame, Renderer};
use crate::types::Point;
use crate::{CenterCountMismatchSnafu, EngineError, InvalidKSnafu, NoSnapshotYetSnafu};
use rand_xoshiro::Xoshiro256PlusPlus;
use snafu::prelude::*;

/// Where the session is in its lifecycle. Holding the centers inside the
/// phase makes "initialized" a type-level fact instead of an optional field.
#[derive(Debug, Clone)]
enum Phase {
    Uninitialized,
    Running(Vec<Point>),
    Converged(Vec<Point>),
}

/// What a single step observed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Centers moved; the session stays in the stepping phase.
    Progressed,
    /// The recomputed centers matched the previous ones exactly. The
    /// comparison snapshot was still appended before this was reported.
    Converged,
}

/// One interactive clustering run: the dataset, K, the current centers, the
/// per-point assignment, and the append-only snapshot history the front end
/// animates.
///
/// Single-threaded and synchronous; every call runs to completion. Callers
/// sharing a session across threads serialize access themselves (wrap it in
/// a mutex) — the session does no internal locking.
#[derive(Debug)]
pub struct Session {
    dataset: Dataset,
    k: usize,
    phase: Phase,
    assignment: Assignment,
    snaps: Vec<Frame>,
    renderer: Renderer,
    rng: Xoshiro256PlusPlus,
}

impl Session {
    /// A fresh session over `dataset` with the default fixed-seed RNG.
    /// Fails eagerly when `k` is outside `1..=dataset.len()`.
    pub fn new(dataset: Dataset, k: usize) -> Result<Self, EngineError> {
        Self::with_rng(dataset, k, crate::rng::new())
    }

    pub fn with_rng(
        dataset: Dataset,
        k: usize,
        rng: Xoshiro256PlusPlus,
    ) -> Result<Self, EngineError> {
        ensure!(
            k >= 1 && k <= dataset.len(),
            InvalidKSnafu {
                k,
                n: dataset.len()
            }
        );

        let assignment = vec![None; dataset.len()];
        Ok(Self {
            dataset,
            k,
            phase: Phase::Uninitialized,
            assignment,
            snaps: Vec::new(),
            renderer: Renderer::default(),
            rng,
        })
    }

    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Run an initialization strategy and start a fresh run: any previous
    /// assignment and snapshot history are discarded, and snapshot 0 (raw
    /// data plus the chosen centers) is appended.
    pub fn initialize(&mut self, method: InitMethod) -> Result<&[Point], EngineError> {
        let centers = init::initialize(&mut self.rng, &self.dataset.points, self.k, method)?;
        log::info!("initialized k={} via {method:?}", self.k);

        self.start_run(centers, true);
        match &self.phase {
            Phase::Running(centers) => Ok(centers),
            _ => unreachable!("start_run always enters Running"),
        }
    }

    /// Start from caller-provided centers (e.g. picked on the canvas)
    /// instead of a strategy. The centers need not be dataset points. The
    /// initial snapshot is only taken when asked for.
    pub fn initialize_manual(
        &mut self,
        centers: Vec<Point>,
        snapshot_initial: bool,
    ) -> Result<(), EngineError> {
        ensure!(
            centers.len() == self.k,
            CenterCountMismatchSnafu {
                k: self.k,
                got: centers.len()
            }
        );

        log::info!("initialized k={} from manual centers", self.k);
        self.start_run(centers, snapshot_initial);
        Ok(())
    }

    fn start_run(&mut self, centers: Vec<Point>, snapshot_initial: bool) {
        self.unassign();
        self.snaps.clear();
        if snapshot_initial {
            self.snaps
                .push(self.renderer.render(&self.dataset, &self.assignment, &centers));
        }
        self.phase = Phase::Running(centers);
    }

    fn unassign(&mut self) {
        for slot in &mut self.assignment {
            *slot = None;
        }
    }

    /// One Lloyd iteration: clear the assignment, assign every point to its
    /// nearest center, recompute centers, snapshot the result, then compare
    /// against the previous centers. The snapshot is appended even when the
    /// comparison detects convergence.
    pub fn step(&mut self) -> Result<StepOutcome, EngineError> {
        let centers = match &self.phase {
            Phase::Uninitialized => return Err(EngineError::NotInitialized),
            Phase::Running(c) | Phase::Converged(c) => c.clone(),
        };

        self.unassign();
        lloyds::assign_points(&self.dataset.points, &centers, &mut self.assignment);

        let candidate: Vec<Point> =
            lloyds::update_centers(&mut self.rng, &self.dataset.points, &self.assignment, self.k)
                .into_iter()
                .map(lloyds::CenterUpdate::point)
                .collect();

        self.snaps
            .push(self.renderer.render(&self.dataset, &self.assignment, &candidate));

        if lloyds::centers_equal(&centers, &candidate) {
            log::debug!("converged after {} snapshots", self.snaps.len());
            self.phase = Phase::Converged(candidate);
            Ok(StepOutcome::Converged)
        } else {
            self.phase = Phase::Running(candidate);
            Ok(StepOutcome::Progressed)
        }
    }

    /// Step until two consecutive center sets compare equal, then return the
    /// final snapshot.
    ///
    /// Unbounded by design. Termination
    /// relies on the assignment eventually repeating (at which point the
    /// recomputed means are bit-identical); a cluster that keeps coming up
    /// empty keeps being re-randomized, so pathological inputs can in
    /// principle loop for a long time — use [`Session::run_bounded`] when
    /// that matters.
    pub fn run_to_convergence(&mut self) -> Result<&Frame, EngineError> {
        while self.step()? == StepOutcome::Progressed {}
        self.current_snapshot()
    }

    /// Like [`Session::run_to_convergence`] but gives up after `max_steps`
    /// iterations. Returns whether convergence was reached.
    pub fn run_bounded(&mut self, max_steps: usize) -> Result<bool, EngineError> {
        for _ in 0..max_steps {
            if self.step()? == StepOutcome::Converged {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// The most recent snapshot, if any step or initialization recorded one.
    pub fn current_snapshot(&self) -> Result<&Frame, EngineError> {
        self.snaps.last().context(NoSnapshotYetSnafu)
    }

    /// Discard centers, assignment, and snapshot history, returning to the
    /// uninitialized phase. The dataset and K are untouched.
    pub fn reset(&mut self) {
        self.unassign();
        self.snaps.clear();
        self.phase = Phase::Uninitialized;
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn centers(&self) -> Option<&[Point]> {
        match &self.phase {
            Phase::Uninitialized => None,
            Phase::Running(c) | Phase::Converged(c) => Some(c),
        }
    }

    pub fn assignment(&self) -> &[Option<usize>] {
        &self.assignment
    }

    pub fn snapshots(&self) -> &[Frame] {
        &self.snaps
    }

    pub fn is_converged(&self) -> bool {
        matches!(self.phase, Phase::Converged(_))
    }
}
