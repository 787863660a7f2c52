//! Navigation capability consumed by the header.
//!
//! `ui` does not know any platform's `Route` enum. The header only holds a
//! [`NavHandle`] and hands it literal paths; the platform crate decides what a
//! path means, usually through [`RouterNavigator`].

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;
use std::str::FromStr;

use dioxus::logger::tracing;
use dioxus::prelude::{Navigator, Routable};
use thiserror::Error;

pub const HOME_PATH: &str = "/";

/// Reported back by a [`Navigate`] implementation. The header logs it and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("no route matches `{path}`: {reason}")]
    UnknownRoute { path: String, reason: String },

    #[error("navigation to `{path}` was rejected: {reason}")]
    Rejected { path: String, reason: String },
}

/// Something that can move the application to another view.
pub trait Navigate {
    fn navigate(&self, path: &str) -> Result<(), NavigationError>;
}

/// Shared handle to a [`Navigate`] implementation, passed to components as a prop.
///
/// Two handles are equal only when they point at the same navigator, so a
/// component re-renders when the capability is swapped and not otherwise.
#[derive(Clone)]
pub struct NavHandle(Rc<dyn Navigate>);

impl NavHandle {
    pub fn new(navigator: impl Navigate + 'static) -> Self {
        Self(Rc::new(navigator))
    }

    /// Fire-and-forget navigation. Failures are logged, never returned.
    pub fn go(&self, target: &NavTarget) {
        tracing::debug!(path = target.as_str(), "navigating");
        if let Err(err) = self.0.navigate(target.as_str()) {
            tracing::warn!(%err, "navigation failed");
        }
    }
}

impl PartialEq for NavHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for NavHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NavHandle(..)")
    }
}

/// An immutable path a clickable element leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTarget(String);

impl NavTarget {
    pub fn home() -> Self {
        Self(HOME_PATH.to_string())
    }

    pub fn author(id: u32) -> Self {
        Self(format!("/author/{id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NavTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// [`Navigate`] over the Dioxus router for a platform's route enum `R`.
pub struct RouterNavigator<R> {
    navigator: Navigator,
    _route: PhantomData<fn() -> R>,
}

impl<R> RouterNavigator<R> {
    pub fn new(navigator: Navigator) -> Self {
        Self {
            navigator,
            _route: PhantomData,
        }
    }
}

/// Parses `path` into the route enum `R`; this is the first step of [`RouterNavigator::navigate`].
pub fn resolve<R>(path: &str) -> Result<R, NavigationError>
where
    R: Routable,
    <R as FromStr>::Err: fmt::Display,
{
    path.parse::<R>()
        .map_err(|err| NavigationError::UnknownRoute {
            path: path.to_string(),
            reason: err.to_string(),
        })
}

impl<R> Navigate for RouterNavigator<R>
where
    R: Routable,
    <R as FromStr>::Err: fmt::Display,
{
    fn navigate(&self, path: &str) -> Result<(), NavigationError> {
        let route = resolve::<R>(path)?;

        match self.navigator.push(route) {
            None => Ok(()),
            Some(failure) => Err(NavigationError::Rejected {
                path: path.to_string(),
                reason: format!("{failure:?}"),
            }),
        }
    }
}

/// Records every path it is asked to visit.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingNavigator {
    pub visits: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl Navigate for Rc<RecordingNavigator> {
    fn navigate(&self, path: &str) -> Result<(), NavigationError> {
        self.visits.borrow_mut().push(path.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct Refusing {
        calls: Rc<Cell<usize>>,
    }

    impl Navigate for Refusing {
        fn navigate(&self, path: &str) -> Result<(), NavigationError> {
            self.calls.set(self.calls.get() + 1);
            Err(NavigationError::Rejected {
                path: path.to_string(),
                reason: "offline".into(),
            })
        }
    }

    #[test]
    fn targets_render_literal_paths() {
        assert_eq!(NavTarget::home().as_str(), "/");
        assert_eq!(NavTarget::author(5003).as_str(), "/author/5003");
        assert_eq!(NavTarget::author(7).to_string(), "/author/7");
    }

    #[test]
    fn go_calls_navigator_once_per_invocation() {
        let recorder = Rc::new(RecordingNavigator::default());
        let handle = NavHandle::new(recorder.clone());

        handle.go(&NavTarget::home());
        assert_eq!(*recorder.visits.borrow(), vec!["/"]);

        handle.go(&NavTarget::home());
        assert_eq!(recorder.visits.borrow().len(), 2);
    }

    #[test]
    fn go_swallows_navigation_failures() {
        let calls = Rc::new(Cell::new(0));
        let handle = NavHandle::new(Refusing {
            calls: calls.clone(),
        });

        handle.go(&NavTarget::author(5003));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn handles_compare_by_identity() {
        let recorder = Rc::new(RecordingNavigator::default());
        let a = NavHandle::new(recorder.clone());
        let b = a.clone();
        let c = NavHandle::new(recorder);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    mod routes {
        use crate::views::{Author, Home};
        use dioxus::prelude::*;

        #[derive(Debug, Clone, Routable, PartialEq)]
        #[rustfmt::skip]
        pub enum Route {
            #[route("/")]
            Home {},
            #[route("/author/:id")]
            Author { id: u32 },
        }
    }

    use routes::Route;

    #[test]
    fn header_paths_resolve_to_routes() {
        assert_eq!(resolve::<Route>("/"), Ok(Route::Home {}));
        assert_eq!(
            resolve::<Route>(NavTarget::author(5003).as_str()),
            Ok(Route::Author { id: 5003 })
        );
    }

    #[test]
    fn unparseable_path_is_an_unknown_route() {
        let err = resolve::<Route>("/author/abc").unwrap_err();
        assert!(
            matches!(&err, NavigationError::UnknownRoute { path, .. } if path == "/author/abc"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn errors_name_the_path() {
        let err = NavigationError::UnknownRoute {
            path: "/nowhere".into(),
            reason: "no match".into(),
        };
        assert_eq!(err.to_string(), "no route matches `/nowhere`: no match");
    }
}
