//! Marshalling and unmarshalling contexts
//!
//! These carry the numeric rules plus optional JSON processors applied
//! around the wire codec. The codec itself lives outside this crate; the
//! contexts only bundle what it needs.

use std::fmt;
use std::rc::Rc;

use quill_sheets_core::ExpressionNumberKind;

use crate::math::MathContext;

/// A JSON tree transform applied before marshalling or after unmarshalling
pub type JsonProcessor = Rc<dyn Fn(serde_json::Value) -> serde_json::Value>;

/// Context consulted while serializing values
#[derive(Clone)]
pub struct MarshallContext {
    kind: ExpressionNumberKind,
    math: Rc<MathContext>,
    pre_processor: Option<JsonProcessor>,
}

impl MarshallContext {
    /// Create a context without a pre-processor
    pub fn new(kind: ExpressionNumberKind, math: Rc<MathContext>) -> Self {
        MarshallContext {
            kind,
            math,
            pre_processor: None,
        }
    }

    /// Attach a processor run over each value before serialization
    pub fn with_pre_processor(mut self, processor: JsonProcessor) -> Self {
        self.pre_processor = Some(processor);
        self
    }

    /// Number representation values are serialized with
    pub fn kind(&self) -> ExpressionNumberKind {
        self.kind
    }

    /// The embedded math context
    pub fn math(&self) -> &Rc<MathContext> {
        &self.math
    }

    /// Apply the pre-processor, or pass the value through
    pub fn pre_process(&self, value: serde_json::Value) -> serde_json::Value {
        match &self.pre_processor {
            Some(processor) => processor(value),
            None => value,
        }
    }
}

impl fmt::Debug for MarshallContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarshallContext")
            .field("kind", &self.kind)
            .field("math", &self.math)
            .field("pre_processor", &self.pre_processor.is_some())
            .finish()
    }
}

/// Context consulted while deserializing values
#[derive(Clone)]
pub struct UnmarshallContext {
    kind: ExpressionNumberKind,
    math: Rc<MathContext>,
    post_processor: Option<JsonProcessor>,
}

impl UnmarshallContext {
    /// Create a context without a post-processor
    pub fn new(kind: ExpressionNumberKind, math: Rc<MathContext>) -> Self {
        UnmarshallContext {
            kind,
            math,
            post_processor: None,
        }
    }

    /// Attach a processor run over each value after deserialization
    pub fn with_post_processor(mut self, processor: JsonProcessor) -> Self {
        self.post_processor = Some(processor);
        self
    }

    /// Number representation values are deserialized into
    pub fn kind(&self) -> ExpressionNumberKind {
        self.kind
    }

    /// The embedded math context
    pub fn math(&self) -> &Rc<MathContext> {
        &self.math
    }

    /// Apply the post-processor, or pass the value through
    pub fn post_process(&self, value: serde_json::Value) -> serde_json::Value {
        match &self.post_processor {
            Some(processor) => processor(value),
            None => value,
        }
    }
}

impl fmt::Debug for UnmarshallContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnmarshallContext")
            .field("kind", &self.kind)
            .field("math", &self.math)
            .field("post_processor", &self.post_processor.is_some())
            .finish()
    }
}
