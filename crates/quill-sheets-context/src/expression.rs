//! Expression-number context

use std::rc::Rc;

use quill_sheets_core::ExpressionNumberKind;

use crate::decimal::DecimalNumberContext;

/// Number representation plus decimal rules for expression evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionNumberContext {
    kind: ExpressionNumberKind,
    decimal: Rc<DecimalNumberContext>,
}

impl ExpressionNumberContext {
    /// Create a context
    pub fn new(kind: ExpressionNumberKind, decimal: Rc<DecimalNumberContext>) -> Self {
        ExpressionNumberContext { kind, decimal }
    }

    /// Which number representation expressions evaluate with
    pub fn kind(&self) -> ExpressionNumberKind {
        self.kind
    }

    /// The embedded decimal-number context
    pub fn decimal(&self) -> &Rc<DecimalNumberContext> {
        &self.decimal
    }
}
