use crate::model::ComponentInventory;
use crate::policy::EffectiveConfig;
use crate::report::ConflictSections;
use harmonyguard_types::Finding;

mod duplicate_checker;
mod duplicate_harmony;
mod utils;

#[cfg(test)]
mod tests;

/// Run both checks with their precedence rule.
///
/// A duplicated checker may be running stale checker code, which could mask
/// a real Harmony conflict; its report wins and Harmony analysis is
/// suppressed until the checker install is fixed.
pub fn run_all(
    inventory: &ComponentInventory,
    cfg: &EffectiveConfig,
    out: &mut Vec<Finding>,
) -> ConflictSections {
    let checker = duplicate_checker::run(inventory, cfg, out);
    let harmony = match checker {
        Some(_) => None,
        None => duplicate_harmony::run(inventory, cfg, out),
    };
    ConflictSections { checker, harmony }
}
