use crate::error::Result;
use crate::eval_ctx::EvalCtx;
use crate::types::{Operator, OperatorDefinition};
use crate::value::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Map of operator name/alias -> implementation.
///
/// Built once, then shared read-only by any number of evaluations.
#[derive(Clone, Default)]
pub struct OperatorRegistry {
    operators: HashMap<String, Arc<dyn Operator>>,
}

impl OperatorRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the standard operator set.
    pub fn standard() -> Self {
        Self::from_definitions(crate::operators::all_operators())
    }

    /// Builds a registry from operator definitions, under their names and aliases.
    pub fn from_definitions(definitions: Vec<Arc<OperatorDefinition>>) -> Self {
        let mut registry = Self::new();
        for def in definitions {
            registry.register_definition(def);
        }
        registry
    }

    /// Registers `operator` under `name`, returning the implementation it replaced.
    pub fn register<O>(&mut self, name: impl Into<String>, operator: O) -> Option<Arc<dyn Operator>>
    where
        O: Operator + 'static,
    {
        self.register_arc(name, Arc::new(operator))
    }

    pub fn register_arc(
        &mut self,
        name: impl Into<String>,
        operator: Arc<dyn Operator>,
    ) -> Option<Arc<dyn Operator>> {
        self.operators.insert(name.into(), operator)
    }

    /// Registers an eager closure operator.
    pub fn register_fn<F>(&mut self, name: impl Into<String>, f: F) -> Option<Arc<dyn Operator>>
    where
        F: Fn(&[Value], &mut EvalCtx<'_>) -> Result<Value> + Send + Sync + 'static,
    {
        self.register_arc(name, Arc::new(f))
    }

    pub fn register_definition(&mut self, def: Arc<OperatorDefinition>) {
        for alias in def.aliases {
            self.operators.insert(alias.to_string(), def.clone());
        }
        self.operators.insert(def.name.to_string(), def);
    }

    pub fn remove(&mut self, name: &str) -> Option<Arc<dyn Operator>> {
        self.operators.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Operator>> {
        self.operators.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.operators.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.operators.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.operators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

impl fmt::Debug for OperatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("OperatorRegistry")
            .field("operators", &names)
            .finish()
    }
}
