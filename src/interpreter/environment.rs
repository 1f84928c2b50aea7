use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::interpreter::value::Value;

/// A lexically scoped set of bindings: name to value plus a mutability flag,
/// with an optional link to the enclosing environment.
///
/// Lookup and mutability checks walk the chain outward. Writes always land
/// in the current frame, shadowing any outer binding of the same name. A new
/// frame is created only when a function is applied; blocks and loops share
/// the frame they appear in.
///
/// Environments are shared through `Rc` so that closures keep their defining
/// frame alive. A closure bound to a name in the frame it captures forms a
/// reference cycle; those cells live until the interpreter exits, which is
/// the documented lifetime for all runtime values.
pub struct Environment {
    store: RefCell<HashMap<String, Binding>>,
    outer: Option<Rc<Environment>>,
}

struct Binding {
    value: Value,
    mutable: bool,
}

impl Environment {
    /// Creates a root environment with no outer link.
    pub fn new() -> Rc<Environment> {
        Rc::new(Environment {
            store: RefCell::new(HashMap::new()),
            outer: None,
        })
    }

    /// Creates a frame whose lookups fall through to `outer`.
    pub fn new_enclosed(outer: Rc<Environment>) -> Rc<Environment> {
        Rc::new(Environment {
            store: RefCell::new(HashMap::new()),
            outer: Some(outer),
        })
    }

    /// Looks a name up, walking outward through the chain.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(binding) = self.store.borrow().get(name) {
            return Some(binding.value.clone());
        }
        self.outer.as_ref().and_then(|outer| outer.get(name))
    }

    /// Writes a binding into the current frame unconditionally, overwriting
    /// any previous value and flag. Declaration-versus-assignment policy is
    /// the evaluator's job; the environment does not distinguish them.
    pub fn set(&self, name: &str, value: Value, mutable: bool) {
        self.store
            .borrow_mut()
            .insert(name.to_string(), Binding { value, mutable });
    }

    /// Reports whether the nearest binding of `name` is mutable. Unbound
    /// names default to immutable.
    pub fn is_mutable(&self, name: &str) -> bool {
        if let Some(binding) = self.store.borrow().get(name) {
            return binding.mutable;
        }
        match &self.outer {
            Some(outer) => outer.is_mutable(name),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_walks_outward() {
        let root = Environment::new();
        root.set("x", Value::Integer(1), false);

        let inner = Environment::new_enclosed(root.clone());
        assert_eq!(inner.get("x"), Some(Value::Integer(1)));
        assert_eq!(inner.get("y"), None);
    }

    #[test]
    fn set_shadows_in_the_current_frame() {
        let root = Environment::new();
        root.set("x", Value::Integer(1), false);

        let inner = Environment::new_enclosed(root.clone());
        inner.set("x", Value::Integer(2), true);

        assert_eq!(inner.get("x"), Some(Value::Integer(2)));
        assert_eq!(root.get("x"), Some(Value::Integer(1)));
    }

    #[test]
    fn mutability_walks_outward_and_defaults_to_immutable() {
        let root = Environment::new();
        root.set("a", Value::Integer(1), true);
        root.set("b", Value::Integer(2), false);

        let inner = Environment::new_enclosed(root);
        assert!(inner.is_mutable("a"));
        assert!(!inner.is_mutable("b"));
        assert!(!inner.is_mutable("missing"));
    }

    #[test]
    fn set_overwrites_the_shadowed_flag() {
        let env = Environment::new();
        env.set("x", Value::Integer(1), false);
        env.set("x", Value::Integer(2), true);
        assert!(env.is_mutable("x"));
        assert_eq!(env.get("x"), Some(Value::Integer(2)));
    }
}
