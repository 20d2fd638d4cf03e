//! Deliverables the bundler knows how to produce.

use std::fmt;

/// Which executable is being bundled in a given invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// Web host (`xsp`) with the server's library directory.
    Server,
    /// Desktop client with its bin directory.
    Client,
    /// The C# compiler used by the server for on-demand page compilation.
    ///
    /// Not part of the default sequence; precompiled servers don't need it.
    Compiler,
}

impl TargetKind {
    /// Targets bundled by a default full run, in execution order.
    pub const DEFAULT_SEQUENCE: [TargetKind; 2] = [TargetKind::Server, TargetKind::Client];

    /// Lowercase name used on the command line and in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Server => "server",
            TargetKind::Client => "client",
            TargetKind::Compiler => "compiler",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
