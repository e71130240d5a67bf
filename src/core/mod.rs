//! Business logic for compiler invocation and release resolution
//!
//! Everything here is either pure (command construction, artifact naming)
//! or touches the outside world through a single well-defined seam (one
//! child process per invocation, one HTTP request per version lookup).

pub mod command;
pub mod compiler;
pub mod detect;
pub mod invoke;
pub mod options;
pub mod release;
