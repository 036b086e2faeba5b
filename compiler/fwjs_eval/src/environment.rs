//! The scope chain.
//!
//! An [`Environment`] is a handle to one [`Scope`]. Handles are cheap to
//! clone and clones share the scope, which is how closures capture their
//! declaring environment by reference. Only function application creates
//! a new scope; blocks do not.

#![expect(
    clippy::disallowed_types,
    reason = "Rc and RefCell are the implementation of LocalScope<T>"
)]

use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use fwjs_ir::Name;
use rustc_hash::FxHashMap;

use crate::Value;

/// Single-threaded shared, mutable cell.
///
/// All scope allocations go through [`LocalScope::new`].
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    /// Whether both handles point at the same cell.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Bindings of one scope plus the link to its parent.
#[derive(Default)]
pub struct Scope {
    bindings: FxHashMap<Name, Value>,
    parent: Option<LocalScope<Scope>>,
}

/// `create_var` found the name already bound in the current scope.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct AlreadyDeclared {
    pub name: Name,
}

/// Handle to a scope in the chain.
#[derive(Clone)]
pub struct Environment {
    scope: LocalScope<Scope>,
}

impl Environment {
    /// A fresh root scope.
    pub fn global() -> Self {
        Environment {
            scope: LocalScope::new(Scope::default()),
        }
    }

    /// A new empty scope whose parent is `outer`.
    pub fn enclosed(outer: &Environment) -> Self {
        tracing::trace!("enter scope");
        Environment {
            scope: LocalScope::new(Scope {
                bindings: FxHashMap::default(),
                parent: Some(outer.scope.clone()),
            }),
        }
    }

    pub fn outer(&self) -> Option<Environment> {
        self.scope
            .borrow()
            .parent
            .as_ref()
            .map(|scope| Environment {
                scope: scope.clone(),
            })
    }

    pub fn is_global(&self) -> bool {
        self.scope.borrow().parent.is_none()
    }

    /// The root of this chain.
    #[cfg(test)]
    pub(crate) fn root(&self) -> Environment {
        let mut current = self.clone();
        while let Some(outer) = current.outer() {
            current = outer;
        }
        current
    }

    /// Whether both handles refer to the same scope.
    #[cfg(test)]
    pub(crate) fn same_scope(&self, other: &Environment) -> bool {
        self.scope.ptr_eq(&other.scope)
    }

    /// First binding of `name` walking outward, or `Null` if there is none.
    pub fn resolve_var(&self, name: Name) -> Value {
        let mut current = self.scope.clone();
        loop {
            let parent = {
                let scope = current.borrow();
                if let Some(value) = scope.bindings.get(&name) {
                    return value.clone();
                }
                match &scope.parent {
                    Some(parent) => parent.clone(),
                    None => return Value::Null,
                }
            };
            current = parent;
        }
    }

    /// Overwrite the nearest binding of `name`.
    ///
    /// If no scope in the chain binds `name`, the binding is created in the
    /// root scope. Never fails.
    pub fn update_var(&self, name: Name, value: Value) {
        let mut current = self.scope.clone();
        loop {
            let parent = {
                let mut scope = current.borrow_mut();
                if let Some(slot) = scope.bindings.get_mut(&name) {
                    *slot = value;
                    return;
                }
                match &scope.parent {
                    Some(parent) => parent.clone(),
                    None => {
                        tracing::trace!(?name, "update fell through to global scope");
                        scope.bindings.insert(name, value);
                        return;
                    }
                }
            };
            current = parent;
        }
    }

    /// Bind `name` in this scope only. Shadowing an outer binding is fine;
    /// binding a name twice in the same scope is not.
    pub fn create_var(&self, name: Name, value: Value) -> Result<(), AlreadyDeclared> {
        let mut scope = self.scope.borrow_mut();
        if scope.bindings.contains_key(&name) {
            return Err(AlreadyDeclared { name });
        }
        tracing::trace!(?name, "declare");
        scope.bindings.insert(name, value);
        Ok(())
    }

    /// Whether this scope itself (not a parent) binds `name`.
    pub fn has_local(&self, name: Name) -> bool {
        self.scope.borrow().bindings.contains_key(&name)
    }

    /// Number of bindings in this scope.
    pub fn local_count(&self) -> usize {
        self.scope.borrow().bindings.len()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("locals", &self.local_count())
            .field("global", &self.is_global())
            .finish()
    }
}

#[cfg(test)]
mod tests;
