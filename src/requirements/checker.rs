//! Gap checker for requirement evaluation.
//!
//! The `GapChecker` decides whether each requirement is present, caching
//! results within a run so a prerequisite (like `fc-list` for fonts) is only
//! looked up once.

use crate::environment::Distro;
use crate::requirements::probe::SystemProbe;
use crate::requirements::registry::{Requirement, RequirementKind, RequirementRegistry};
use crate::requirements::status::{CheckResult, RequirementStatus};
use std::collections::HashMap;

/// Checks whether requirements are present on the system.
pub struct GapChecker<'a> {
    registry: &'a RequirementRegistry,
    probe: &'a SystemProbe,
    distro: Distro,
    cache: HashMap<String, RequirementStatus>,
}

impl<'a> GapChecker<'a> {
    /// Create a new gap checker.
    pub fn new(registry: &'a RequirementRegistry, probe: &'a SystemProbe, distro: Distro) -> Self {
        Self {
            registry,
            probe,
            distro,
            cache: HashMap::new(),
        }
    }

    /// Check every requirement in registry order.
    pub fn check_all(&mut self) -> Vec<CheckResult> {
        let registry = self.registry;
        registry
            .iter()
            .map(|req| CheckResult {
                label: req.label(),
                kind: req.kind,
                status: self.check(req),
            })
            .collect()
    }

    /// Check a single requirement, using cache when available.
    pub fn check(&mut self, requirement: &Requirement) -> RequirementStatus {
        let key = cache_key(requirement);
        if let Some(cached) = self.cache.get(&key) {
            return cached.clone();
        }

        let status = self.evaluate(requirement);
        tracing::debug!("{} -> {:?}", requirement.label(), status);
        self.cache.insert(key, status.clone());
        status
    }

    fn evaluate(&mut self, requirement: &Requirement) -> RequirementStatus {
        for dep in &requirement.depends_on {
            if !self.dependency_present(dep) {
                return RequirementStatus::Skipped {
                    blocked_by: dep.clone(),
                };
            }
        }

        let found = match requirement.kind {
            RequirementKind::Command => self.probe.find_command(&requirement.name).map(Some),
            RequirementKind::Font => self
                .probe
                .font_installed(&requirement.name)
                .then_some(None),
        };

        match found {
            Some(path) => RequirementStatus::Satisfied { path },
            None => RequirementStatus::Missing {
                hint: requirement.install_hint(self.distro),
            },
        }
    }

    fn dependency_present(&mut self, name: &str) -> bool {
        let dep = self
            .registry
            .get(name)
            .filter(|r| r.kind == RequirementKind::Command)
            .cloned()
            .unwrap_or_else(|| Requirement::command(name));
        self.check(&dep).is_satisfied()
    }
}

fn cache_key(requirement: &Requirement) -> String {
    match requirement.kind {
        RequirementKind::Command => format!("cmd:{}", requirement.name),
        RequirementKind::Font => format!("font:{}", requirement.name),
    }
}
