//! Instance Cache / Construction Coordinator
//!
//! Memoizes one constructed [`FontMetrics`] per font identity and guarantees
//! at most one construction ever runs per identity, even when concurrent
//! requests interleave across the font-readiness suspension points.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use futures::future::{LocalBoxFuture, Shared};
use futures::FutureExt;
use tracing::{debug, trace};

use crate::backup::{self, BackupFaceRegistry};
use crate::environment::FontEnvironment;
use crate::identity::FontIdentity;
use crate::metrics::FontMetrics;
use crate::readiness;
use crate::surface;
use crate::Result;

type SharedConstruction<S> = Shared<LocalBoxFuture<'static, Result<Rc<FontMetrics<S>>>>>;

/// A cache slot: either a construction still in flight or a finished value.
enum Slot<S: 'static> {
    Pending(SharedConstruction<S>),
    Ready(Rc<FontMetrics<S>>),
}

struct CacheState<S: 'static> {
    entries: RefCell<HashMap<String, Slot<S>>>,
    backup_faces: RefCell<BackupFaceRegistry>,
}

/// Owner of all process-lifetime measurement state.
///
/// An application holds one coordinator for its lifetime; entries are never
/// evicted. The practical number of distinct font identities on one page is
/// small, so unbounded memoization is intentional. Tests instantiate
/// isolated coordinators over fake environments.
pub struct FontMetricsCache<E: FontEnvironment> {
    env: Rc<E>,
    state: Rc<CacheState<E::Surface>>,
}

impl<E> FontMetricsCache<E>
where
    E: FontEnvironment + 'static,
{
    pub fn new(env: E) -> Self {
        Self {
            env: Rc::new(env),
            state: Rc::new(CacheState {
                entries: RefCell::new(HashMap::new()),
                backup_faces: RefCell::new(BackupFaceRegistry::new()),
            }),
        }
    }

    /// The environment this coordinator measures against.
    pub fn environment(&self) -> &E {
        &self.env
    }

    /// Number of cached identities, counting in-flight constructions.
    pub fn len(&self) -> usize {
        self.state.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.entries.borrow().is_empty()
    }

    /// Whether an identity has a completed or in-flight entry.
    pub fn contains(&self, identity: &FontIdentity) -> bool {
        self.state
            .entries
            .borrow()
            .contains_key(&identity.cache_key())
    }

    /// Metrics for a font identity, constructing them on first request.
    ///
    /// Concurrent requests for the same identity issued before the first
    /// resolves attach to the same in-flight construction and all receive
    /// the same instance. A failed construction leaves no entry behind, so
    /// a later request re-attempts cleanly.
    pub async fn get_metrics(&self, identity: FontIdentity) -> Result<Rc<FontMetrics<E::Surface>>> {
        let key = identity.cache_key();

        let pending = {
            let entries = self.state.entries.borrow();
            match entries.get(&key) {
                Some(Slot::Ready(metrics)) => {
                    trace!(key = %key, "font metrics cache hit");
                    return Ok(Rc::clone(metrics));
                }
                Some(Slot::Pending(construction)) => Some(construction.clone()),
                None => None,
            }
        };
        if let Some(construction) = pending {
            trace!(key = %key, "attaching to in-flight construction");
            return construction.await;
        }

        debug!(key = %key, family = %identity.family, "font metrics cache miss, constructing");
        let construction = {
            let env = Rc::clone(&self.env);
            let state = Rc::clone(&self.state);
            let key = key.clone();
            async move {
                let result = construct(env.as_ref(), &state, identity).await;
                let mut entries = state.entries.borrow_mut();
                match &result {
                    Ok(metrics) => {
                        entries.insert(key, Slot::Ready(Rc::clone(metrics)));
                    }
                    Err(_) => {
                        entries.remove(&key);
                    }
                }
                result
            }
            .boxed_local()
            .shared()
        };

        // The pending slot must be visible before the construction's first
        // poll so requests arriving during a readiness wait attach to it.
        self.state
            .entries
            .borrow_mut()
            .insert(key, Slot::Pending(construction.clone()));
        construction.await
    }
}

async fn construct<E>(
    env: &E,
    state: &CacheState<E::Surface>,
    identity: FontIdentity,
) -> Result<Rc<FontMetrics<E::Surface>>>
where
    E: FontEnvironment,
{
    backup::ensure_backup_face(
        env,
        &mut state.backup_faces.borrow_mut(),
        identity.weight,
        identity.style,
    );
    readiness::wait_for_fonts(env, &identity.family, identity.weight, identity.style).await?;

    let mut surface = env.create_surface();
    surface::configure(
        &mut surface,
        &identity.family,
        identity.weight,
        identity.style,
        identity.options.font_size,
        identity.options.baseline,
    );
    let metrics = FontMetrics::probe(surface, &identity.options);
    debug!(family = %identity.family, "font metrics constructed");
    Ok(Rc::new(metrics))
}
