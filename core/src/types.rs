//! Shared primitive types used across the course engine.

/// Engine-internal time, in milliseconds since the engine was created.
pub type Millis = u64;

/// Wall-clock course time, in whole seconds.
pub type Seconds = u32;

/// The canonical session identifier (assigned by the embedding process).
pub type SessionId = String;
