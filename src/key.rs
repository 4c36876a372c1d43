//! Result filename decoding.
//!
//! Benchmark runs leave one sample per file, with the measurement identity
//! encoded in the filename. Two naming grammars coexist on disk:
//!
//! - `client_run_phase.txt` — the original form; no workload-size bucket,
//!   always a duration sample
//! - `client_run_phase_size.txt` — size-bucketed duration sample
//! - `client_run_phase_size_mem.txt` — size-bucketed memory sample
//!
//! Tokens are consumed from the right (run, phase, size, kind marker), so a
//! single decoder handles every grammar by dispatching on token count.
//! Anything else is unrecognized and skipped by the caller, never fatal.

/// Whether a sample records elapsed time or memory consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MetricKind {
    Duration,
    Memory,
}

impl MetricKind {
    /// Key used for this kind in the serialized report tree.
    pub fn label(&self) -> &'static str {
        match self {
            MetricKind::Duration => "duration",
            MetricKind::Memory => "memory",
        }
    }
}

/// Structured identity of one result file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementKey {
    /// Client identifier, possibly carrying a `_`-delimited version tag.
    pub client: String,
    /// Which repetition of the run produced this sample.
    pub run: u32,
    /// Named segment of the client's execution (e.g. "first", "second").
    pub phase: String,
    /// Workload-size bucket label (e.g. "100M"); None for the unbucketed grammar.
    pub size: Option<String>,
    pub kind: MetricKind,
}

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("unrecognized result filename '{0}': expected 3 to 5 underscore-separated tokens")]
    Unrecognized(String),
    #[error("unrecognized result filename '{name}': trailing token '{token}' is not 'mem'")]
    KindMarker { name: String, token: String },
    #[error("bad run index in '{name}': '{token}' is not a base-10 integer")]
    RunIndex { name: String, token: String },
}

impl MeasurementKey {
    /// Decode a result filename into a key, or classify it as unrecognized.
    ///
    /// A trailing `.txt` is stripped before tokenizing. The decoder fills the
    /// known trailing slots first and treats the remaining prefix as the
    /// client identifier; token counts other than 3, 4, or 5 are rejected
    /// rather than guessed at.
    pub fn decode(name: &str) -> Result<Self, DecodeError> {
        let stem = name.strip_suffix(".txt").unwrap_or(name);
        let tokens: Vec<&str> = stem.split('_').collect();

        let (client, run, phase, size, kind) = match tokens.as_slice() {
            [client, run, phase] => (client, run, phase, None, MetricKind::Duration),
            [client, run, phase, size] => {
                (client, run, phase, Some(*size), MetricKind::Duration)
            }
            [client, run, phase, size, marker] => {
                if *marker != "mem" {
                    return Err(DecodeError::KindMarker {
                        name: name.to_string(),
                        token: marker.to_string(),
                    });
                }
                (client, run, phase, Some(*size), MetricKind::Memory)
            }
            _ => return Err(DecodeError::Unrecognized(name.to_string())),
        };

        let run: u32 = run.parse().map_err(|_| DecodeError::RunIndex {
            name: name.to_string(),
            token: run.to_string(),
        })?;

        Ok(MeasurementKey {
            client: client.to_string(),
            run,
            phase: phase.to_string(),
            size: size.map(str::to_string),
            kind,
        })
    }
}
