/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [encoder](crate::encoder)
    pub const ENCODER: &str = "encoder";

    /// Logs related to the [variable allocator](crate::db::atom)
    pub const ATOM_DB: &str = "atom_db";

    /// Logs related to [sinks](crate::sink)
    pub const SINK: &str = "sink";

    /// Logs related to [parsing](crate::builder) a formula
    pub const PARSER: &str = "parser";

    /// Logs related to [graphs](crate::graph) and layout metrics
    pub const GRAPH: &str = "graph";
}
