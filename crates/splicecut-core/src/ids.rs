// crates/splicecut-core/src/ids.rs
//
// Identifier sources for segments and bookmarks.
//
// The only contract on an id is uniqueness within the session. Production
// shells use `UuidIds`; tests and reproducible CLI runs use `CounterIds` so
// output is byte-for-byte stable.
//
// A counter that outlives one process (the CLI carries the session between
// runs as JSON) is rebuilt with `CounterIds::resume`, which continues after
// the highest `{prefix}-{n}` already present in the session.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Anything that can hand out session-unique identifiers.
pub trait IdSource {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// `"{prefix}-{n}"` with `n` counting up from 1.
#[derive(Clone, Debug)]
pub struct CounterIds {
    prefix: String,
    next:   u64,
}

impl CounterIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), next: 1 }
    }
}

impl CounterIds {
    /// Counter that continues after the highest `{prefix}-{n}` in `existing`.
    /// Ids with another prefix or a non-numeric suffix are ignored.
    ///
    /// ```
    /// use splicecut_core::ids::{CounterIds, IdSource};
    ///
    /// let mut ids = CounterIds::resume("seg", ["base", "seg-2", "bm-9", "seg-x"]);
    /// assert_eq!(ids.next_id(), "seg-3");
    /// ```
    pub fn resume<'a>(prefix: impl Into<String>, existing: impl IntoIterator<Item = &'a str>) -> Self {
        let prefix = prefix.into();
        let last = existing
            .into_iter()
            .filter_map(|id| id.strip_prefix(prefix.as_str())?.strip_prefix('-')?.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self { prefix, next: last.saturating_add(1) }
    }
}

impl Default for CounterIds {
    fn default() -> Self { Self::new("id") }
}

impl IdSource for CounterIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

impl<T: IdSource + ?Sized> IdSource for Box<T> {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }
}

/// Config-level choice of id source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    #[default]
    Uuid,
    Counter,
}

impl IdStrategy {
    /// Build the id source this strategy names. `prefix` and `existing` only
    /// apply to `Counter`, which skips past ids already in `existing`.
    pub fn resume<'a>(
        self,
        prefix:   &str,
        existing: impl IntoIterator<Item = &'a str>,
    ) -> Box<dyn IdSource + Send> {
        match self {
            IdStrategy::Uuid    => Box::new(UuidIds),
            IdStrategy::Counter => Box::new(CounterIds::resume(prefix, existing)),
        }
    }
}
