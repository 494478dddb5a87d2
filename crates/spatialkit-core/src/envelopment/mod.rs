//! Envelopment: content wrapped around the inside faces of a volume.
//!
//! When the volume has depth, every supplied placement is drawn on its face.
//! When the depth collapses to zero, an [`Adaptation`] picks what is still
//! shown. The adaptation is resolved from the instance override, then the
//! layout environment, then the default of the construction form.

mod adaptation;
mod content;
mod face;
mod placement;

pub use adaptation::Adaptation;
pub use content::{EnvelopmentBuilder, Faces};
pub use face::{FaceGeometry, Rotation, plan_faces};
pub use placement::Placement;

use crate::environment::LayoutEnvironment;
use crate::vector::Size3D;
use std::fmt;

/// State passed to state-aware content builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnvelopmentState {
    pub has_depth: bool,
}

impl EnvelopmentState {
    pub fn for_size(size: Size3D) -> Self {
        Self {
            has_depth: size.has_depth(),
        }
    }
}

/// How an envelopment was constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionForm {
    /// Fixed content, no access to state.
    Simple,
    /// Content built from [`EnvelopmentState`].
    StateAware,
}

impl ConstructionForm {
    pub fn default_adaptation(self) -> Adaptation {
        match self {
            ConstructionForm::Simple => Adaptation::Show(Placement::Back),
            ConstructionForm::StateAware => Adaptation::SimulateFrontView,
        }
    }
}

type FaceBuilder<C> = Box<dyn Fn(EnvelopmentState) -> Faces<C>>;

enum FaceSource<C> {
    Simple(Faces<C>),
    StateAware(FaceBuilder<C>),
}

/// One drawn face with its content.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer<C> {
    pub geometry: FaceGeometry,
    pub content: Vec<C>,
}

/// Content placed on the faces of a volume.
pub struct Envelopment<C> {
    source: FaceSource<C>,
    adaptation: Option<Adaptation>,
}

impl<C> Envelopment<C> {
    /// Envelopment with fixed content. Flat default: show the back.
    pub fn new(faces: Faces<C>) -> Self {
        Self {
            source: FaceSource::Simple(faces),
            adaptation: None,
        }
    }

    /// Envelopment whose content depends on state. Flat default: simulate
    /// the front view.
    pub fn stateful<F>(build: F) -> Self
    where
        F: Fn(EnvelopmentState) -> Faces<C> + 'static,
    {
        Self {
            source: FaceSource::StateAware(Box::new(build)),
            adaptation: None,
        }
    }

    /// Override the adaptation for this instance.
    pub fn with_adaptation(mut self, adaptation: Adaptation) -> Self {
        self.adaptation = Some(adaptation);
        self
    }

    pub fn adaptation_override(&self) -> Option<Adaptation> {
        self.adaptation
    }

    pub fn form(&self) -> ConstructionForm {
        match self.source {
            FaceSource::Simple(_) => ConstructionForm::Simple,
            FaceSource::StateAware(_) => ConstructionForm::StateAware,
        }
    }

    /// Effective depth-zero policy under `env`.
    pub fn resolve_adaptation(&self, env: &LayoutEnvironment) -> Adaptation {
        self.adaptation
            .or(env.adaptation)
            .unwrap_or_else(|| self.form().default_adaptation())
    }
}

impl<C: Clone> Envelopment<C> {
    /// Content for the given state.
    pub fn faces(&self, state: EnvelopmentState) -> Faces<C> {
        match &self.source {
            FaceSource::Simple(faces) => faces.clone(),
            FaceSource::StateAware(build) => build(state),
        }
    }

    /// Lay out the envelopment in a volume of `size`, back to front.
    pub fn layout(&self, size: Size3D, env: &LayoutEnvironment) -> Vec<Layer<C>> {
        let state = EnvelopmentState::for_size(size);
        let adaptation = self.resolve_adaptation(env);
        let mut faces = self.faces(state);
        let plan = plan_faces(size, adaptation, &faces.placements());
        log::debug!(
            "laid out {} of {} faces (depth {}, adaptation {})",
            plan.len(),
            faces.placements().len(),
            size.depth,
            adaptation
        );
        plan.into_iter()
            .map(|geometry| Layer {
                content: faces.take(geometry.placement),
                geometry,
            })
            .collect()
    }
}

impl<C> fmt::Debug for Envelopment<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Envelopment")
            .field("form", &self.form())
            .field("adaptation", &self.adaptation)
            .finish()
    }
}
