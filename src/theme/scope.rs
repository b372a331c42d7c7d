//! Thread-scoped theme bindings.
//!
//! A binding is established with [`provide`] and lasts until the returned
//! [`ThemeBinding`] is dropped. Bindings nest like providers in a view tree:
//! the innermost one is what [`active_theme`] resolves, and dropping it
//! exposes the enclosing one again.

use std::{
    cell::{Cell, RefCell},
    marker::PhantomData,
    sync::Arc,
};

use smallvec::SmallVec;

use super::{ConfigurationError, Theme};

/// A bound theme tagged with the id of the guard that owns it.
struct Bound {
    id: u64,
    theme: Arc<Theme>,
}

thread_local! {
    static BINDINGS: RefCell<SmallVec<[Bound; 2]>> = RefCell::new(SmallVec::new());
    static NEXT_ID: Cell<u64> = const { Cell::new(0) };
}

/// Guard for a theme bound to the current thread.
///
/// Not `Send`: the binding lives in thread-local storage and must be released
/// on the thread that created it.
#[must_use = "the theme is unbound as soon as the binding is dropped"]
pub struct ThemeBinding {
    theme: Arc<Theme>,
    id: u64,
    depth: usize,
    _not_send: PhantomData<*const ()>,
}

impl ThemeBinding {
    pub fn theme(&self) -> &Arc<Theme> {
        &self.theme
    }
}

impl Drop for ThemeBinding {
    fn drop(&mut self) {
        let owned = BINDINGS.with_borrow_mut(|bindings| {
            // The slot may already have been released by an outer guard and
            // reused by a newer binding; only the owner may truncate.
            let owned = bindings
                .get(self.depth)
                .is_some_and(|bound| bound.id == self.id);
            if owned {
                // Also releases any inner binding that was leaked past this one.
                bindings.truncate(self.depth);
            }
            owned
        });

        if owned {
            tracing::debug!(depth = self.depth, "theme unbound");
        }
    }
}

/// Binds `theme` to the current thread until the returned guard is dropped.
pub fn provide(theme: impl Into<Arc<Theme>>) -> ThemeBinding {
    let theme = theme.into();

    let id = NEXT_ID.replace(NEXT_ID.get() + 1);
    let depth = BINDINGS.with_borrow_mut(|bindings| {
        bindings.push(Bound {
            id,
            theme: theme.clone(),
        });
        bindings.len() - 1
    });
    tracing::debug!(theme = %theme.name, depth, "theme bound");

    ThemeBinding {
        theme,
        id,
        depth,
        _not_send: PhantomData,
    }
}

/// Runs `f` with `theme` bound, unbinding it afterwards (also on unwind).
pub fn with_theme<R>(theme: impl Into<Arc<Theme>>, f: impl FnOnce() -> R) -> R {
    let _binding = provide(theme);
    f()
}

/// Resolves the innermost theme bound on this thread.
pub fn active_theme() -> Result<Arc<Theme>, ConfigurationError> {
    match BINDINGS.with_borrow(|bindings| bindings.last().map(|bound| bound.theme.clone())) {
        Some(theme) => Ok(theme),
        None => {
            tracing::warn!("active_theme() called with no theme bound on this thread");
            Err(ConfigurationError::NoThemeBound)
        }
    }
}

pub fn is_bound() -> bool {
    BINDINGS.with_borrow(|bindings| !bindings.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    fn renamed(name: &'static str) -> Arc<Theme> {
        let mut theme = Theme::default_theme().as_ref().clone();
        theme.name = name.into();
        Arc::new(theme)
    }

    #[test]
    fn test_bound_theme_is_returned() {
        let theme = Theme::default_theme();
        let _binding = provide(theme.clone());

        let active = active_theme().unwrap();
        assert!(Arc::ptr_eq(&active, &theme));
        assert_eq!(active.colors.primary.base, "#009B5D");
    }

    #[test]
    fn test_unbound_lookup_fails() {
        assert!(!is_bound());
        assert_eq!(active_theme().unwrap_err(), ConfigurationError::NoThemeBound);
    }

    #[test]
    fn test_binding_does_not_outlive_guard() {
        {
            let _binding = provide(Theme::default_theme());
            assert!(is_bound());
        }

        assert!(!is_bound());
        assert_eq!(active_theme().unwrap_err(), ConfigurationError::NoThemeBound);
    }

    #[test]
    fn test_repeated_lookups_are_equal() {
        let _binding = provide(Theme::default_theme());

        let first = active_theme().unwrap();
        let second = active_theme().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_nested_bindings_restore_outer_theme() {
        let outer = renamed("outer");
        let inner = renamed("inner");

        let _outer_binding = provide(outer.clone());
        {
            let inner_binding = provide(inner.clone());
            assert!(Arc::ptr_eq(&active_theme().unwrap(), &inner));
            assert!(Arc::ptr_eq(inner_binding.theme(), &inner));
        }

        assert!(Arc::ptr_eq(&active_theme().unwrap(), &outer));
    }

    #[test]
    fn test_dropping_outer_binding_releases_inner() {
        let outer_binding = provide(renamed("outer"));
        let inner_binding = provide(renamed("inner"));

        drop(outer_binding);
        assert!(!is_bound());

        drop(inner_binding);
        assert!(!is_bound());
    }

    #[test]
    fn test_stale_guard_does_not_unbind_newer_binding() {
        let a = provide(renamed("a"));
        let b = provide(renamed("b"));
        drop(a);

        let c = renamed("c");
        let d = renamed("d");
        let _c_binding = provide(c.clone());
        let d_binding = provide(d.clone());

        drop(b);

        assert!(Arc::ptr_eq(&active_theme().unwrap(), &d));
        drop(d_binding);
        assert!(Arc::ptr_eq(&active_theme().unwrap(), &c));
    }

    #[test]
    fn test_with_theme_scopes_the_closure() {
        let theme = renamed("scoped");

        let name = with_theme(theme, || active_theme().unwrap().name.clone());

        assert_eq!(name.as_str(), "scoped");
        assert!(!is_bound());
    }

    #[test]
    fn test_binding_is_thread_local() {
        let _binding = provide(Theme::default_theme());

        let other_thread = std::thread::spawn(|| active_theme().is_err())
            .join()
            .unwrap();

        assert!(other_thread);
        assert!(active_theme().is_ok());
    }

    #[test]
    #[traced_test]
    fn test_unbound_lookup_is_logged() {
        let _ = active_theme();
        assert!(logs_contain("no theme bound"));
    }
}
