//! Setup rule graph: a game's declared setup requirements and the
//! dependency partial order between them.

use serde::Serialize;

use crate::errors::domain::{DomainError, ValidationKind};

pub type RuleId = i64;

/// Whether a rule yields one shared step or one step per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Arity {
    Once,
    EachPlayer,
}

/// One declared setup requirement. Immutable once loaded; rules are
/// created at game-definition time and read-only thereafter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetupRule {
    pub id: RuleId,
    pub description: String,
    pub details: Option<String>,
    pub arity: Arity,
    /// Rules that must be completed before this one becomes assignable,
    /// in declaration order. Empty for a root rule.
    pub depends_on: Vec<RuleId>,
}

/// A game's complete rule graph, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleSet {
    rules: Vec<SetupRule>,
}

impl RuleSet {
    /// Validates and wraps a declaration-ordered rule list.
    ///
    /// Rejects duplicate ids, dependencies on unknown rules, and
    /// dependency cycles. A cyclic graph would otherwise yield a rule
    /// that can never become assignable, so it is refused at load time.
    pub fn new(rules: Vec<SetupRule>) -> Result<Self, DomainError> {
        let set = Self { rules };

        for (i, rule) in set.rules.iter().enumerate() {
            if set.rules[..i].iter().any(|other| other.id == rule.id) {
                return Err(DomainError::validation(
                    ValidationKind::DuplicateRule,
                    format!("duplicate setup rule id {}", rule.id),
                ));
            }
        }

        for rule in &set.rules {
            for dep in &rule.depends_on {
                if set.get(*dep).is_none() {
                    return Err(DomainError::validation(
                        ValidationKind::UnknownDependency,
                        format!("rule {} depends on unknown rule {dep}", rule.id),
                    ));
                }
            }
        }

        set.check_acyclic()?;
        Ok(set)
    }

    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn rules(&self) -> &[SetupRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, id: RuleId) -> Option<&SetupRule> {
        self.rules.iter().find(|rule| rule.id == id)
    }

    /// Ordered ids of the rules that must complete before `id` is
    /// assignable. Empty for a root rule or an unknown id.
    pub fn dependencies(&self, id: RuleId) -> &[RuleId] {
        self.get(id).map(|rule| rule.depends_on.as_slice()).unwrap_or(&[])
    }

    fn check_acyclic(&self) -> Result<(), DomainError> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Unvisited,
            InProgress,
            Finished,
        }

        fn visit(
            set: &RuleSet,
            idx: usize,
            marks: &mut [Mark],
        ) -> Result<(), DomainError> {
            match marks[idx] {
                Mark::Finished => return Ok(()),
                Mark::InProgress => {
                    return Err(DomainError::validation(
                        ValidationKind::RuleCycle,
                        format!(
                            "setup rule {} is part of a dependency cycle",
                            set.rules[idx].id
                        ),
                    ));
                }
                Mark::Unvisited => {}
            }
            marks[idx] = Mark::InProgress;
            for dep in &set.rules[idx].depends_on {
                let dep_idx = set
                    .rules
                    .iter()
                    .position(|rule| rule.id == *dep)
                    .expect("dependency ids validated before cycle check");
                visit(set, dep_idx, marks)?;
            }
            marks[idx] = Mark::Finished;
            Ok(())
        }

        let mut marks = vec![Mark::Unvisited; self.rules.len()];
        for idx in 0..self.rules.len() {
            visit(self, idx, &mut marks)?;
        }
        Ok(())
    }
}
