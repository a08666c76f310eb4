//! Agent adapters: one descriptor per supported agent over a shared contract.

mod claude;
mod copilot;
mod cursor;
mod opencode;
pub mod traits;
pub(crate) mod utils;

pub use claude::ClaudeCodeAgent;
pub use copilot::GitHubCopilotAgent;
pub use cursor::CursorAgent;
pub use opencode::OpenCodeAgent;
pub use traits::AgentAdapter;
pub use utils::sanitize_name;

#[cfg(test)]
pub use traits::MockAgentAdapter;
