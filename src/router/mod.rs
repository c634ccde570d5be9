//! Client-side route resolution with ordered asynchronous guards.
//!
//! ARCHITECTURE
//! ============
//! A `Router` owns an immutable, ordered table of `Route`s. Each navigation
//! picks the first route whose pattern matches the normalized path, then
//! either redirects unconditionally (`RouteKind::Redirect`) or awaits the
//! route's guards one after another before rendering (`RouteKind::Component`).
//!
//! Guards thread an optional context value (usually the signed-in user) to the
//! render function. Every `Continue` overwrites the recorded value, so render
//! sees whatever the last guard produced, including `None`.
//!
//! CONCURRENCY
//! ===========
//! Everything runs on the browser's single thread. Each `navigate` call takes
//! a fresh generation token; a resolution that finishes after a newer one has
//! started is dropped without touching the host.


pub mod host;
pub mod path;

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use futures::FutureExt;
use futures::future::LocalBoxFuture;
use regex::Regex;

pub use host::Host;
pub use path::normalize_path;

/// Path every unmatched navigation falls back to.
pub const DEFAULT_FALLBACK: &str = "/";

/// Decision produced by a single guard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardResult<C> {
    /// Let resolution proceed, recording `value` as the current context.
    Continue(Option<C>),
    /// Abort resolution and send the browser to this path.
    Redirect(String),
}

impl<C> GuardResult<C> {
    pub fn next(value: Option<C>) -> Self {
        Self::Continue(value)
    }

    pub fn redirect(path: impl Into<String>) -> Self {
        Self::Redirect(path.into())
    }
}

/// Boxed future returned by a guard invocation.
///
/// Guards must always settle: I/O failures are mapped to a definite
/// `Continue` or `Redirect` inside the guard.
pub type GuardFuture<C> = LocalBoxFuture<'static, GuardResult<C>>;

/// An asynchronous authorization check run before rendering.
pub type Guard<C> = Rc<dyn Fn() -> GuardFuture<C>>;

/// Builds the view for a component route from the last guard context.
pub type Render<C, V> = Rc<dyn Fn(Option<C>) -> V>;

/// Wrap an async closure as a `Guard`.
pub fn guard<C, F, Fut>(check: F) -> Guard<C>
where
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = GuardResult<C>> + 'static,
{
    Rc::new(move || check().boxed_local())
}

#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("invalid route pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// What a matched route does.
pub enum RouteKind<C, V> {
    Component { render: Render<C, V>, guards: Vec<Guard<C>> },
    Redirect { target: String },
}

/// One entry of the route table.
pub struct Route<C, V> {
    pattern: Regex,
    kind: RouteKind<C, V>,
}

impl<C, V> Route<C, V> {
    /// A route that renders a view once every guard lets it through.
    ///
    /// # Errors
    ///
    /// Returns `RouterError::Pattern` if `pattern` is not a valid regex.
    pub fn component<F>(pattern: &str, render: F, guards: Vec<Guard<C>>) -> Result<Self, RouterError>
    where
        F: Fn(Option<C>) -> V + 'static,
    {
        Ok(Self { pattern: compile(pattern)?, kind: RouteKind::Component { render: Rc::new(render), guards } })
    }

    /// A route that always redirects; no guards are consulted.
    ///
    /// # Errors
    ///
    /// Returns `RouterError::Pattern` if `pattern` is not a valid regex.
    pub fn redirect(pattern: &str, target: impl Into<String>) -> Result<Self, RouterError> {
        Ok(Self { pattern: compile(pattern)?, kind: RouteKind::Redirect { target: target.into() } })
    }

    pub fn matches(&self, path: &str) -> bool {
        self.pattern.is_match(path)
    }
}

fn compile(pattern: &str) -> Result<Regex, RouterError> {
    Regex::new(pattern).map_err(|source| RouterError::Pattern { pattern: pattern.to_owned(), source })
}

/// Terminal result of resolving one path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome<V> {
    Render(V),
    Redirect(String),
}

/// Per-navigation lifecycle. `Rendered` and `Redirected` are terminal until
/// the next navigation begins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResolutionState {
    #[default]
    Idle,
    Resolving,
    Rendered,
    Redirected,
}

/// What `Router::navigate` did with its outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Rendered,
    Redirected(String),
    /// A newer navigation started first; the outcome was discarded.
    Stale,
}

pub struct Router<C, V> {
    routes: Vec<Route<C, V>>,
    fallback: String,
    generation: Cell<u64>,
    state: Cell<ResolutionState>,
}

impl<C, V> Router<C, V> {
    pub fn new(routes: Vec<Route<C, V>>) -> Self {
        Self {
            routes,
            fallback: DEFAULT_FALLBACK.to_owned(),
            generation: Cell::new(0),
            state: Cell::new(ResolutionState::Idle),
        }
    }

    #[must_use]
    pub fn with_fallback(mut self, path: impl Into<String>) -> Self {
        self.fallback = path.into();
        self
    }

    pub fn routes(&self) -> &[Route<C, V>] {
        &self.routes
    }

    pub fn state(&self) -> ResolutionState {
        self.state.get()
    }

    /// First route in table order whose pattern matches `path`.
    pub fn find(&self, path: &str) -> Option<&Route<C, V>> {
        self.routes.iter().find(|route| route.matches(path))
    }

    /// Resolve `path` to a render or a redirect without side effects.
    pub async fn resolve(&self, path: &str) -> Outcome<V> {
        let Some(route) = self.find(path) else {
            log::debug!("router: no route for {path}, falling back to {}", self.fallback);
            return Outcome::Redirect(self.fallback.clone());
        };

        match &route.kind {
            RouteKind::Redirect { target } => Outcome::Redirect(target.clone()),
            RouteKind::Component { render, guards } => {
                let mut context = None;
                for check in guards {
                    match check().await {
                        GuardResult::Continue(value) => context = value,
                        GuardResult::Redirect(target) => return Outcome::Redirect(target),
                    }
                }
                Outcome::Render(render(context))
            }
        }
    }

    /// Resolve `path` and apply the outcome to `host`, unless a newer
    /// navigation has started in the meantime.
    pub async fn navigate<H>(&self, path: &str, host: &H) -> Resolution
    where
        H: Host<V> + ?Sized,
    {
        let token = self.begin();
        log::debug!("router: resolving {path} (generation {token})");

        let outcome = self.resolve(path).await;
        if !self.is_current(token) {
            log::debug!("router: dropping stale resolution of {path} (generation {token})");
            return Resolution::Stale;
        }

        match outcome {
            Outcome::Render(view) => {
                self.state.set(ResolutionState::Rendered);
                host.mount(view);
                Resolution::Rendered
            }
            Outcome::Redirect(target) => {
                log::debug!("router: {path} redirects to {target}");
                self.state.set(ResolutionState::Redirected);
                host.navigate(&target);
                Resolution::Redirected(target)
            }
        }
    }

    /// Navigate to whatever path the host currently reports.
    pub async fn navigate_current<H>(&self, host: &H) -> Resolution
    where
        H: Host<V> + ?Sized,
    {
        let path = normalize_path(&host.current_path());
        self.navigate(&path, host).await
    }

    fn begin(&self) -> u64 {
        let token = self.generation.get().wrapping_add(1);
        self.generation.set(token);
        self.state.set(ResolutionState::Resolving);
        token
    }

    fn is_current(&self, token: u64) -> bool {
        self.generation.get() == token
    }
}
