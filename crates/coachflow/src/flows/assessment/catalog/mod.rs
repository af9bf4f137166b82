//! Question catalogs for the three assessment variants.
//!
//! `quick` is the base table; `moderate` and `comprehensive` are built by
//! applying a [`CatalogExtension`] (successor rewires plus node inserts,
//! never deletions) to the previous tier. Each load produces an
//! independent immutable table, so sessions never alias shared mutable
//! catalog state.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::conditions::Condition;
use super::domain::{QuestionDescriptor, QuestionKind, QuestionOption, ValidationRule};
use super::progress::Phase;

mod comprehensive;
mod moderate;
mod quick;

const FIRST_QUESTION: &str = "age";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogVariant {
    Quick,
    Moderate,
    Comprehensive,
}

impl CatalogVariant {
    pub const fn ordered() -> [Self; 3] {
        [Self::Quick, Self::Moderate, Self::Comprehensive]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Quick => "quick",
            Self::Moderate => "moderate",
            Self::Comprehensive => "comprehensive",
        }
    }

    /// Parses an externally supplied variant name. Unknown names fail
    /// closed; there is no fallback catalog.
    pub fn parse(value: &str) -> Result<Self, ConfigurationError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "quick" => Ok(Self::Quick),
            "moderate" => Ok(Self::Moderate),
            "comprehensive" => Ok(Self::Comprehensive),
            _ => Err(ConfigurationError::UnknownVariant(value.trim().to_owned())),
        }
    }
}

/// One entry of an ordered conditional successor list.
#[derive(Debug, Clone)]
pub struct Branch {
    pub condition: Condition,
    pub target: &'static str,
}

#[derive(Debug, Clone)]
pub enum Successor {
    Fixed(&'static str),
    /// Branches are evaluated in declared order; the first whose condition
    /// holds wins. `fallback` applies when none match.
    Conditional {
        branches: Vec<Branch>,
        fallback: &'static str,
    },
    Terminal,
}

#[derive(Debug, Clone)]
pub struct QuestionNode {
    pub key: &'static str,
    pub prompt_key: &'static str,
    pub kind: QuestionKind,
    pub phase: Phase,
    pub validation: Option<ValidationRule>,
    pub options: Vec<QuestionOption>,
    pub successor: Successor,
}

impl QuestionNode {
    pub fn is_terminal(&self) -> bool {
        matches!(self.successor, Successor::Terminal)
    }

    pub fn descriptor(&self) -> QuestionDescriptor {
        QuestionDescriptor {
            key: self.key,
            prompt_key: self.prompt_key,
            kind: self.kind,
            allows_multiple: self.kind.allows_multiple(),
            options: self.options.clone(),
            phase: self.phase,
            phase_label: self.phase.label(),
            validation_message: self.validation.as_ref().map(ValidationRule::message),
        }
    }

    /// Resolves a submitted token to its option id, matching by id or by
    /// label (labels matched case-insensitively). Recorded answers always
    /// carry the id form, so downstream predicates never see a label
    /// spelling variant.
    pub(crate) fn canonical_token(&self, token: &str) -> Option<&'static str> {
        self.options.iter().find_map(|option| {
            (option.id == token || option.label.eq_ignore_ascii_case(token)).then_some(option.id)
        })
    }
}

pub(crate) const fn option(id: &'static str, label: &'static str) -> QuestionOption {
    QuestionOption { id, label }
}

/// Catalog data-integrity fault. Every variant of this error is caught at
/// load time; a served catalog never trips them at request time.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("unknown catalog variant '{0}'")]
    UnknownVariant(String),
    #[error("duplicate question key '{0}'")]
    DuplicateKey(String),
    #[error("question '{from}' routes to missing question '{to}'")]
    DanglingSuccessor { from: String, to: String },
    #[error("first question '{0}' missing from catalog")]
    MissingFirstQuestion(&'static str),
    #[error("catalog must declare exactly one terminal question, found {0}")]
    TerminalCount(usize),
    #[error("default path from '{start}' revisits '{repeated}'")]
    CycleDetected { start: String, repeated: String },
    #[error("extension rewires unknown question '{0}'")]
    RewireTarget(String),
    #[error("extension inserts after unknown question '{0}'")]
    InsertAnchor(String),
    #[error("terminal question '{0}' has no successor")]
    TerminalSuccessor(String),
    #[error("question '{0}' not found")]
    UnknownNode(String),
}

/// Node insert positioned after an existing key, so within-phase ordering
/// stays meaningful for progress display.
pub(crate) struct Insert {
    pub(crate) after: &'static str,
    pub(crate) node: QuestionNode,
}

/// Patch set a tier applies to the previous tier's table: successor
/// rewires on reused nodes plus newly inserted nodes. Keys are never
/// removed, which keeps every base question answerable in every deeper
/// variant.
pub(crate) struct CatalogExtension {
    pub(crate) rewires: Vec<(&'static str, Successor)>,
    pub(crate) inserts: Vec<Insert>,
}

impl CatalogExtension {
    pub(crate) fn apply(
        self,
        mut base: Vec<QuestionNode>,
    ) -> Result<Vec<QuestionNode>, ConfigurationError> {
        for (key, successor) in self.rewires {
            let node = base
                .iter_mut()
                .find(|node| node.key == key)
                .ok_or_else(|| ConfigurationError::RewireTarget(key.to_owned()))?;
            node.successor = successor;
        }

        for insert in self.inserts {
            if base.iter().any(|node| node.key == insert.node.key) {
                return Err(ConfigurationError::DuplicateKey(
                    insert.node.key.to_owned(),
                ));
            }
            let position = base
                .iter()
                .position(|node| node.key == insert.after)
                .ok_or_else(|| ConfigurationError::InsertAnchor(insert.after.to_owned()))?;
            base.insert(position + 1, insert.node);
        }

        Ok(base)
    }
}

/// Immutable, validated question table for one variant.
#[derive(Debug)]
pub struct QuestionCatalog {
    variant: CatalogVariant,
    nodes: Vec<QuestionNode>,
    index: HashMap<&'static str, usize>,
    first: &'static str,
}

impl QuestionCatalog {
    /// Builds and validates the table for `variant`. Pure and
    /// deterministic; any data-integrity fault aborts the load.
    pub fn load(variant: CatalogVariant) -> Result<Self, ConfigurationError> {
        let nodes = match variant {
            CatalogVariant::Quick => quick::nodes(),
            CatalogVariant::Moderate => moderate::nodes()?,
            CatalogVariant::Comprehensive => comprehensive::nodes()?,
        };
        Self::from_nodes(variant, nodes, FIRST_QUESTION)
    }

    fn from_nodes(
        variant: CatalogVariant,
        nodes: Vec<QuestionNode>,
        first: &'static str,
    ) -> Result<Self, ConfigurationError> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (position, node) in nodes.iter().enumerate() {
            if index.insert(node.key, position).is_some() {
                return Err(ConfigurationError::DuplicateKey(node.key.to_owned()));
            }
        }

        let catalog = Self {
            variant,
            nodes,
            index,
            first,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn variant(&self) -> CatalogVariant {
        self.variant
    }

    pub fn first_question(&self) -> &QuestionNode {
        // validate() guarantees the first key resolves.
        &self.nodes[self.index[self.first]]
    }

    pub fn node(&self, key: &str) -> Option<&QuestionNode> {
        self.index.get(key).map(|position| &self.nodes[*position])
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.nodes.iter().map(|node| node.key)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Zero-based position of a question within its phase and the phase's
    /// question count, in table order.
    pub fn phase_position(&self, key: &str) -> Option<(usize, usize)> {
        let node = self.node(key)?;
        let mut index = 0;
        let mut count = 0;
        for candidate in &self.nodes {
            if candidate.phase != node.phase {
                continue;
            }
            if candidate.key == node.key {
                index = count;
            }
            count += 1;
        }
        Some((index, count))
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        if !self.index.contains_key(self.first) {
            return Err(ConfigurationError::MissingFirstQuestion(self.first));
        }

        let terminals = self
            .nodes
            .iter()
            .filter(|node| node.is_terminal())
            .count();
        if terminals != 1 {
            return Err(ConfigurationError::TerminalCount(terminals));
        }

        for node in &self.nodes {
            if let Successor::Conditional { branches, fallback } = &node.successor {
                for branch in branches {
                    self.require(node.key, branch.target)?;
                }
                self.require(node.key, fallback)?;
            }
        }

        // Dry-run traversal: from every node, following default successors
        // (the path a fixed all-conditions-false response set takes) must
        // reach the terminal without revisiting a node.
        for start in &self.nodes {
            let mut visited = HashSet::new();
            let mut current = start;
            loop {
                if !visited.insert(current.key) {
                    return Err(ConfigurationError::CycleDetected {
                        start: start.key.to_owned(),
                        repeated: current.key.to_owned(),
                    });
                }
                let next_key = match &current.successor {
                    Successor::Terminal => break,
                    Successor::Fixed(target) => *target,
                    Successor::Conditional { fallback, .. } => *fallback,
                };
                current = self.node(next_key).ok_or_else(|| {
                    ConfigurationError::DanglingSuccessor {
                        from: current.key.to_owned(),
                        to: next_key.to_owned(),
                    }
                })?;
            }
        }

        Ok(())
    }

    fn require(&self, from: &str, to: &str) -> Result<(), ConfigurationError> {
        if self.index.contains_key(to) {
            Ok(())
        } else {
            Err(ConfigurationError::DanglingSuccessor {
                from: from.to_owned(),
                to: to.to_owned(),
            })
        }
    }
}
