use std::{collections::HashMap, sync::Arc};

use parking_lot::{Mutex, RwLock};

use crate::foundation::error::{MockupError, MockupResult};

/// Opaque editing-session token; every override read or write names one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OverrideScope(String);

impl OverrideScope {
    pub fn new(token: impl Into<String>) -> MockupResult<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(MockupError::validation("override scope must not be empty"));
        }
        Ok(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A user's forced choice for one placement: `"Back"`, `"Default"`, or a boolean.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(try_from = "RawChoice")]
pub struct OverrideChoice(pub bool);

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawChoice {
    Flag(bool),
    Label(String),
}

impl TryFrom<RawChoice> for OverrideChoice {
    type Error = MockupError;

    fn try_from(raw: RawChoice) -> MockupResult<Self> {
        match raw {
            RawChoice::Flag(b) => Ok(Self(b)),
            RawChoice::Label(s) => s.parse(),
        }
    }
}

impl std::str::FromStr for OverrideChoice {
    type Err = MockupError;

    fn from_str(s: &str) -> MockupResult<Self> {
        match s.trim() {
            "Back" | "back" | "true" => Ok(Self(true)),
            "Default" | "default" | "false" => Ok(Self(false)),
            other => Err(MockupError::validation(format!(
                "unknown override '{other}', expected 'Back' or 'Default'"
            ))),
        }
    }
}

impl From<bool> for OverrideChoice {
    fn from(b: bool) -> Self {
        Self(b)
    }
}

/// `placement name -> force back`, per product.
type ScopeTable = HashMap<String, HashMap<String, bool>>;

/// Forced back/front choices, isolated per editing scope.
///
/// Scopes are sharded: the outer lock is only held to find or create a scope, so
/// concurrent sessions never contend on each other's tables. Within a scope the
/// last write wins.
#[derive(Debug, Default)]
pub struct OverrideStore {
    scopes: RwLock<HashMap<OverrideScope, Arc<Mutex<ScopeTable>>>>,
}

impl OverrideStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn scope_table(&self, scope: &OverrideScope) -> Option<Arc<Mutex<ScopeTable>>> {
        self.scopes.read().get(scope).cloned()
    }

    fn scope_table_or_insert(&self, scope: &OverrideScope) -> Arc<Mutex<ScopeTable>> {
        if let Some(t) = self.scope_table(scope) {
            return t;
        }
        self.scopes
            .write()
            .entry(scope.clone())
            .or_default()
            .clone()
    }

    /// Replace the product's overrides within `scope`.
    pub fn set_force_back_overrides<I, K, C>(&self, scope: &OverrideScope, product_id: &str, mapping: I)
    where
        I: IntoIterator<Item = (K, C)>,
        K: Into<String>,
        C: Into<OverrideChoice>,
    {
        let entries: HashMap<String, bool> = mapping
            .into_iter()
            .map(|(k, c)| (k.into(), c.into().0))
            .collect();
        tracing::debug!(
            scope = scope.as_str(),
            product_id,
            count = entries.len(),
            "set force-back overrides"
        );
        let table = self.scope_table_or_insert(scope);
        table.lock().insert(product_id.to_string(), entries);
    }

    /// Parse a JSON object of `name -> "Back" | "Default" | bool` and store it.
    pub fn set_force_back_overrides_json(
        &self,
        scope: &OverrideScope,
        product_id: &str,
        json: &str,
    ) -> MockupResult<()> {
        let mapping: HashMap<String, OverrideChoice> = serde_json::from_str(json)?;
        self.set_force_back_overrides(scope, product_id, mapping);
        Ok(())
    }

    /// `None` means no override: use the placement's own `back` flag.
    pub fn get_override_for(
        &self,
        scope: &OverrideScope,
        product_id: &str,
        placement_name: &str,
    ) -> Option<bool> {
        let table = self.scope_table(scope)?;
        let table = table.lock();
        table.get(product_id)?.get(placement_name).copied()
    }

    pub fn clear_force_back_overrides(&self, scope: &OverrideScope, product_id: &str) {
        if let Some(table) = self.scope_table(scope) {
            table.lock().remove(product_id);
        }
    }

    /// Drop every override of an ended editing session.
    pub fn clear_force_back_scope(&self, scope: &OverrideScope) {
        if self.scopes.write().remove(scope).is_some() {
            tracing::debug!(scope = scope.as_str(), "cleared override scope");
        }
    }

    pub fn scope_count(&self) -> usize {
        self.scopes.read().len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overrides/store.rs"]
mod tests;
