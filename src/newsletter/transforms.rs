//! Transform pipeline infrastructure
//!
//! Parsing is a two-phase pipeline, and each phase is a stage implementing
//! [`Runnable`]. Stages are chained with [`Transform::then`], which only compiles
//! when the output type of one stage matches the input of the next:
//!
//! ```rust,ignore
//! let pipeline = Transform::from_fn(Ok)
//!     .then(Segmentation::new(rules.clone()))      // String → SegmentedDocument
//!     .then(ArticleExtraction::new(rules));        // SegmentedDocument → ParsedNewsletter
//! ```
//!
//! Common pipelines are pre-built as static references using `once_cell::sync::Lazy`;
//! see the [`standard`] module.
//!
//! # Module Organization
//!
//! - [`stages`]: Individual stages (segmentation, article extraction)
//! - [`standard`]: Pre-built transform combinations

pub mod stages;
pub mod standard;

use crate::newsletter::error::ParseError;

/// Trait for anything that can transform an input to an output
///
/// This is implemented by individual transformation stages.
/// The `Transform` struct composes multiple `Runnable` implementations.
pub trait Runnable<I, O> {
    /// Execute this transformation on the input
    fn run(&self, input: I) -> Result<O, ParseError>;
}

/// A composable transformation pipeline
///
/// `Transform<I, O>` represents a transformation from type `I` to type `O`.
/// Transforms are `Send + Sync`, so a single static pipeline can serve
/// concurrent parses.
pub struct Transform<I, O> {
    run_fn: Box<dyn Fn(I) -> Result<O, ParseError> + Send + Sync>,
}

impl<I, O> Transform<I, O> {
    /// Create a transform from a function
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(I) -> Result<O, ParseError> + Send + Sync + 'static,
    {
        Transform {
            run_fn: Box::new(f),
        }
    }

    /// Add a stage to this transform, returning a new transform with extended output type
    ///
    /// The compiler ensures that the stage's input type matches this transform's
    /// output type.
    pub fn then<O2, S>(self, stage: S) -> Transform<I, O2>
    where
        S: Runnable<O, O2> + Send + Sync + 'static,
        I: 'static,
        O: 'static,
        O2: 'static,
    {
        let prev_run = self.run_fn;
        Transform {
            run_fn: Box::new(move |input| {
                let intermediate = prev_run(input)?;
                stage.run(intermediate)
            }),
        }
    }

    /// Execute this transform on the given input
    pub fn run(&self, input: I) -> Result<O, ParseError> {
        (self.run_fn)(input)
    }
}

// Transforms can be used as stages of other transforms
impl<I, O> Runnable<I, O> for Transform<I, O>
where
    I: 'static,
    O: 'static,
{
    fn run(&self, input: I) -> Result<O, ParseError> {
        Transform::run(self, input)
    }
}
