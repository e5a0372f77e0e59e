/// A per-type operation used by the visit dispatchers.
///
/// A handler is a set of operations, one per member type of the variant it
/// will be used with, expressed as one `Handler<T>` implementation per
/// member. The visit methods generated by [`variant!`](crate::variant)
/// require an implementation for every member type, so a handler that misses
/// one simply doesn't compile; there is no runtime "no match" fallback.
///
/// Which implementation runs for a given visit is decided by trait
/// resolution on the active member's concrete type; the dispatcher itself
/// does no disambiguation beyond reading the variant's tag.
///
/// The `T` a visit mode hands you depends on the mode:
///
/// - `visit` passes `&Ti`
/// - `visit_mut` passes `&mut Ti`
/// - `visit_cloned` and `into_visit` pass `Ti` by value
///
/// `Output` must be the same type across all of a handler's implementations
/// used in a single visit.
///
/// # Examples
///
/// ```
/// use sovran_variant::{variant, Handler};
///
/// variant! {
///     enum Scalar {
///         Count(u32),
///         Flag(bool),
///     }
/// }
///
/// struct Describe;
///
/// impl<'a> Handler<&'a u32> for Describe {
///     type Output = String;
///     fn handle(&mut self, value: &'a u32) -> String {
///         format!("count {}", value)
///     }
/// }
///
/// impl<'a> Handler<&'a bool> for Describe {
///     type Output = String;
///     fn handle(&mut self, value: &'a bool) -> String {
///         format!("flag {}", value)
///     }
/// }
///
/// let mut scalar = Scalar::new(7u32);
/// assert_eq!(scalar.visit(Describe), "count 7");
///
/// scalar.assign(true);
/// assert_eq!(scalar.visit(Describe), "flag true");
/// ```
///
/// A handler missing an operation for one of the member types is rejected
/// when the visit is compiled:
///
/// ```compile_fail,E0277
/// use sovran_variant::{variant, Handler};
///
/// variant! {
///     enum Scalar {
///         Count(u32),
///         Flag(bool),
///     }
/// }
///
/// struct Partial;
///
/// impl<'a> Handler<&'a u32> for Partial {
///     type Output = String;
///     fn handle(&mut self, value: &'a u32) -> String {
///         format!("count {}", value)
///     }
/// }
///
/// // No Handler<&bool> for Partial: the visit below fails to compile.
/// let scalar = Scalar::new(7u32);
/// let _ = scalar.visit(Partial);
/// ```
pub trait Handler<T> {
    /// The result type produced by this operation.
    type Output;

    /// Performs this handler's operation for a value of type `T`.
    fn handle(&mut self, value: T) -> Self::Output;
}

/// Forwarding implementation so a handler can be lent to a visit with
/// `&mut handler` and inspected afterwards.
///
/// # Examples
///
/// ```
/// use sovran_variant::{variant, Handler};
///
/// variant! {
///     enum Scalar {
///         Count(u32),
///         Flag(bool),
///     }
/// }
///
/// #[derive(Default)]
/// struct Tally {
///     calls: u32,
/// }
///
/// impl<'a> Handler<&'a u32> for Tally {
///     type Output = ();
///     fn handle(&mut self, _value: &'a u32) {
///         self.calls += 1;
///     }
/// }
///
/// impl<'a> Handler<&'a bool> for Tally {
///     type Output = ();
///     fn handle(&mut self, _value: &'a bool) {
///         self.calls += 1;
///     }
/// }
///
/// let scalar = Scalar::new(true);
/// let mut tally = Tally::default();
/// scalar.visit(&mut tally);
/// scalar.visit(&mut tally);
/// assert_eq!(tally.calls, 2);
/// ```
impl<T, H> Handler<T> for &mut H
where
    H: Handler<T>,
{
    type Output = H::Output;

    fn handle(&mut self, value: T) -> Self::Output {
        (**self).handle(value)
    }
}
