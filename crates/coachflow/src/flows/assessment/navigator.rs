//! Computes the next question from a node's declared successor.

use super::catalog::{ConfigurationError, QuestionCatalog, QuestionNode, Successor};
use super::domain::{AnswerValue, ResponseSet};

/// Resolves the successor of `node` after `just_recorded` was stored in
/// `responses`. Conditional branches are evaluated in declared order and
/// the first match wins; when none match the declared fallback applies.
/// Pure: identical inputs always resolve to the same target.
pub fn resolve_next<'a>(
    catalog: &'a QuestionCatalog,
    node: &QuestionNode,
    just_recorded: &AnswerValue,
    responses: &ResponseSet,
) -> Result<&'a QuestionNode, ConfigurationError> {
    let target = match &node.successor {
        Successor::Terminal => {
            return Err(ConfigurationError::TerminalSuccessor(node.key.to_owned()))
        }
        Successor::Fixed(target) => *target,
        Successor::Conditional { branches, fallback } => branches
            .iter()
            .find(|branch| branch.condition.holds(just_recorded, responses))
            .map(|branch| branch.target)
            .unwrap_or(*fallback),
    };

    catalog
        .node(target)
        .ok_or_else(|| ConfigurationError::DanglingSuccessor {
            from: node.key.to_owned(),
            to: target.to_owned(),
        })
}
