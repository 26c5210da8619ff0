//! Base-branch resolution from git config
//!
//! No config file of our own: the base ref comes from two scoped lookups in
//! git's key-value store (a branch-scoped key, then a tool-global key), with
//! the trunk branch as the hardcoded fallback.

use crate::core::error::PostalResult;
use crate::core::vcs::Git;

/// Trunk branch name; topics must not be published from it
pub const TRUNK_BRANCH: &str = "master";

/// Tool-global config key for the default base
pub const GLOBAL_BASE_KEY: &str = "postal.base";

/// Branch-scoped config key for a topic's base
pub fn branch_base_key(topic: &str) -> String {
  format!("branch.{}.postalbase", topic)
}

/// Resolve the base ref: explicit option, branch config, global config, trunk
pub fn resolve_base(git: &Git, topic: &str, explicit: Option<&str>) -> PostalResult<String> {
  if let Some(base) = explicit {
    return Ok(base.to_string());
  }
  if let Some(base) = git.config_get(&branch_base_key(topic))? {
    return Ok(base);
  }
  if let Some(base) = git.config_get(GLOBAL_BASE_KEY)? {
    return Ok(base);
  }
  Ok(TRUNK_BRANCH.to_string())
}
