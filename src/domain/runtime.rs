use super::AppError;
use super::project::MIN_NODE_MAJOR;

/// Parse the major component of `node --version` output (`v18.12.1`).
pub fn parse_node_major(output: &str) -> Option<u32> {
    let version = output.trim();
    let version = version.strip_prefix('v').unwrap_or(version);
    version.split('.').next()?.parse().ok()
}

/// Reject Node.js versions older than [`MIN_NODE_MAJOR`].
pub fn ensure_supported_node(output: &str) -> Result<(), AppError> {
    match parse_node_major(output) {
        Some(major) if major >= MIN_NODE_MAJOR => Ok(()),
        _ => Err(AppError::Environment(format!(
            "You are running Node {}.\nCreate PeopleSoft App requires Node {} or higher.\nPlease update your version of Node.",
            output.trim(),
            MIN_NODE_MAJOR
        ))),
    }
}
