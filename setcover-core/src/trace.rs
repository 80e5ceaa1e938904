//! Verbose execution traces emitted by the solvers.
//!
//! Solvers describe their progress as [`TraceEvent`] values and hand them to a
//! [`TraceSink`]. The content and ordering of events is part of each solver's
//! contract; rendering them as text is left to the sink. Quiet runs use
//! [`SilentTrace`], which drops everything.

use std::fmt;

use crate::Cost;

/// One step of a solver's verbose trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    /// Iterative deepening begins enumerating a new depth.
    DepthStarted {
        /// Cardinality of the states at this depth.
        depth: usize,
    },
    /// A state generated at the current depth, names sorted alphabetically.
    State {
        /// Member set names.
        names: Vec<String>,
    },
    /// Every branch at `depth` was pruned by the budget.
    DepthExhausted {
        /// Depth at which no state survived.
        depth: usize,
    },
    /// Iterative deepening found a cover.
    DepthSolution {
        /// Depth of the winning state.
        depth: usize,
        /// Member set names, sorted alphabetically.
        names: Vec<String>,
    },
    /// Hill climbing starts a new attempt from a random state.
    AttemptStarted {
        /// Zero-based attempt number.
        attempt: u32,
        /// Member set names of the starting state, in collection order.
        names: Vec<String>,
    },
    /// Hill climbing evaluates the neighbors of the current state.
    Iteration {
        /// Member set names of the current state, in collection order.
        names: Vec<String>,
        /// Error of the current state.
        error: Cost,
    },
    /// A neighbor scored during a hill-climbing iteration.
    Neighbor {
        /// Member set names of the neighbor, in collection order.
        names: Vec<String>,
        /// Error of the neighbor.
        error: Cost,
    },
    /// Hill climbing reached a state with zero error.
    ClimbSolution {
        /// Member set names, in collection order.
        names: Vec<String>,
    },
    /// The search finished without finding a cover within budget.
    NoSolution,
}

struct Braced<'a>(&'a [String]);

impl fmt::Display for Braced<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.0.join(", "))
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DepthStarted { depth } => write!(f, "Searching to depth {depth}"),
            Self::State { names } => write!(f, "State: {}", Braced(names)),
            Self::DepthExhausted { depth } => write!(f, "Search terminated at depth {depth}"),
            Self::DepthSolution { depth, names } => {
                write!(f, "Solution found at depth {depth}: {}", Braced(names))
            }
            Self::AttemptStarted { attempt, names } => {
                write!(f, "Attempt {attempt}: starting state {}", Braced(names))
            }
            Self::Iteration { names, error } => {
                write!(f, "New iteration. State: {} Error: {error}", Braced(names))
            }
            Self::Neighbor { names, error } => {
                write!(f, "Neighbor: {} Error: {error}", Braced(names))
            }
            Self::ClimbSolution { names } => write!(f, "Solution: {}", Braced(names)),
            Self::NoSolution => f.write_str("No solution found"),
        }
    }
}

/// Receives trace events from a solver.
///
/// Solvers check [`TraceSink::is_enabled`] before building an event, so a
/// disabled sink costs nothing beyond the check.
///
/// # Examples
/// ```
/// use setcover_core::{RecordingTrace, TraceEvent, TraceSink};
///
/// let mut trace = RecordingTrace::default();
/// trace.record(TraceEvent::DepthStarted { depth: 1 });
///
/// assert_eq!(trace.lines(), vec!["Searching to depth 1".to_string()]);
/// ```
pub trait TraceSink {
    /// Whether events should be produced at all.
    fn is_enabled(&self) -> bool {
        true
    }

    /// Accept one event.
    fn record(&mut self, event: TraceEvent);
}

/// Sink that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentTrace;

impl TraceSink for SilentTrace {
    fn is_enabled(&self) -> bool {
        false
    }

    fn record(&mut self, _event: TraceEvent) {}
}

/// Sink that keeps every event in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingTrace {
    events: Vec<TraceEvent>,
}

impl RecordingTrace {
    /// Events recorded so far.
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Recorded events rendered as text lines.
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    /// Consume the sink, returning the recorded events.
    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }
}

impl TraceSink for RecordingTrace {
    fn record(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

/// Sink that forwards each rendered event to the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTrace;

impl TraceSink for LogTrace {
    fn is_enabled(&self) -> bool {
        log::log_enabled!(log::Level::Info)
    }

    fn record(&mut self, event: TraceEvent) {
        log::info!("{event}");
    }
}
