//! Polymorphic dispatch over decoded records.
//!
//! [`LogVisitor`] has one operation per record variant, each returning
//! `Option<Output>` and defaulting to `None`, so an implementation only
//! overrides the variants it cares about. Visitors compose: [`combine_with`]
//! produces an AND composite that decodes each line exactly once for both
//! consumers, and [`combine_with_effect`] attaches a side channel without
//! affecting the primary result.
//!
//! [`combine_with`]: LogVisitor::combine_with
//! [`combine_with_effect`]: LogVisitor::combine_with_effect

use std::marker::PhantomData;

use crate::records::{
    AuditLog, DiagnosticLog, EventLog, MetricLog, RequestLog, ServiceLog, TraceLog,
};

pub trait LogVisitor {
    type Output;

    fn service_v1(&self, _record: &ServiceLog) -> Option<Self::Output> {
        None
    }

    fn request_v2(&self, _record: &RequestLog) -> Option<Self::Output> {
        None
    }

    fn event_v2(&self, _record: &EventLog) -> Option<Self::Output> {
        None
    }

    fn metric_v1(&self, _record: &MetricLog) -> Option<Self::Output> {
        None
    }

    fn trace_v1(&self, _record: &TraceLog) -> Option<Self::Output> {
        None
    }

    fn audit_v2(&self, _record: &AuditLog) -> Option<Self::Output> {
        None
    }

    fn diagnostic_v1(&self, _record: &DiagnosticLog) -> Option<Self::Output> {
        None
    }

    /// Short-circuiting AND composition.
    ///
    /// For each record, `self`'s operation runs first; if it yields a value,
    /// `other`'s corresponding operation runs and the two results are merged
    /// with `combiner`. If either side is empty the composite is empty, and
    /// `other` is never invoked when `self` is already empty.
    fn combine_with<V, F, R>(self, other: V, combiner: F) -> CombineWith<Self, V, F, R>
    where
        Self: Sized,
        V: LogVisitor,
        F: Fn(Self::Output, V::Output) -> R,
    {
        CombineWith {
            first: self,
            second: other,
            combiner,
            _output: PhantomData,
        }
    }

    /// Composition that preserves `self`'s result.
    ///
    /// `other` is probed after `self` yields a value; when it also yields,
    /// `effect` observes both results. Whether or not `other` matched, the
    /// composite returns exactly what `self` returned.
    fn combine_with_effect<V, F>(
        self,
        other: V,
        effect: F,
    ) -> impl LogVisitor<Output = Self::Output>
    where
        Self: Sized,
        V: LogVisitor,
        F: Fn(&Self::Output, V::Output),
    {
        self.combine_with(Lifted(other), move |primary, probed| {
            if let Some(other_output) = probed {
                effect(&primary, other_output);
            }
            primary
        })
    }
}

/// Visitor whose every operation returns `Some(supplier())`.
///
/// Useful for building reusable constant-producing visitors, e.g. a default
/// tag for any structured record.
pub fn from_supplier<T, F>(supplier: F) -> SupplierVisitor<F>
where
    F: Fn() -> T,
{
    SupplierVisitor { supplier }
}

pub struct SupplierVisitor<F> {
    supplier: F,
}

macro_rules! supply {
    ($($op:ident: $record:ty),* $(,)?) => {
        $(fn $op(&self, _record: &$record) -> Option<T> {
            Some((self.supplier)())
        })*
    };
}

impl<T, F> LogVisitor for SupplierVisitor<F>
where
    F: Fn() -> T,
{
    type Output = T;

    supply! {
        service_v1: ServiceLog,
        request_v2: RequestLog,
        event_v2: EventLog,
        metric_v1: MetricLog,
        trace_v1: TraceLog,
        audit_v2: AuditLog,
        diagnostic_v1: DiagnosticLog,
    }
}

/// AND composite produced by [`LogVisitor::combine_with`].
pub struct CombineWith<A, B, F, R> {
    first: A,
    second: B,
    combiner: F,
    _output: PhantomData<fn() -> R>,
}

macro_rules! combine {
    ($($op:ident: $record:ty),* $(,)?) => {
        $(fn $op(&self, record: &$record) -> Option<R> {
            let first = self.first.$op(record)?;
            let second = self.second.$op(record)?;
            Some((self.combiner)(first, second))
        })*
    };
}

impl<A, B, F, R> LogVisitor for CombineWith<A, B, F, R>
where
    A: LogVisitor,
    B: LogVisitor,
    F: Fn(A::Output, B::Output) -> R,
{
    type Output = R;

    combine! {
        service_v1: ServiceLog,
        request_v2: RequestLog,
        event_v2: EventLog,
        metric_v1: MetricLog,
        trace_v1: TraceLog,
        audit_v2: AuditLog,
        diagnostic_v1: DiagnosticLog,
    }
}

/// Adapter reporting every operation of the inner visitor as present.
///
/// The inner `Option` moves into the output, so a visitor that may return
/// empty can be probed by [`LogVisitor::combine_with_effect`] without
/// short-circuiting the composite.
pub struct Lifted<V>(pub V);

macro_rules! lift {
    ($($op:ident: $record:ty),* $(,)?) => {
        $(fn $op(&self, record: &$record) -> Option<Option<V::Output>> {
            Some(self.0.$op(record))
        })*
    };
}

impl<V> LogVisitor for Lifted<V>
where
    V: LogVisitor,
{
    type Output = Option<V::Output>;

    lift! {
        service_v1: ServiceLog,
        request_v2: RequestLog,
        event_v2: EventLog,
        metric_v1: MetricLog,
        trace_v1: TraceLog,
        audit_v2: AuditLog,
        diagnostic_v1: DiagnosticLog,
    }
}
