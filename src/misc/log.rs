/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made at a handful of points in the library: on focal-set cleaning,
on entry to each combination rule, and wherever a convenience method falls back to an
exponential scan of the power set.

Note, no log implementation is provided. For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [`MassFunction::clean`](crate::mass::MassFunction::clean).
    pub const CLEAN: &str = "clean";

    /// Logs related to combination rule dispatch.
    pub const COMBINATION: &str = "combination";

    /// Logs related to decision-support queries, in particular the power-set fallback of
    /// [`get_max`](crate::mass::MassFunction::get_max) and
    /// [`get_min`](crate::mass::MassFunction::get_min).
    pub const DECISION: &str = "decision";
}
