/// Defines a closed-set variant type.
///
/// Give `variant!` a fixed, ordered list of member types and it produces an
/// enum that holds exactly one value of exactly one member type at a time,
/// together with the full container API:
///
/// - `new(value)`: construct from a value of any member type
/// - `assign(&mut self, value) -> &mut Self`: replace the stored value,
///   possibly switching the active member; chains
/// - `is_type::<T>() -> bool`: is the active value of type `T`?
/// - `peek::<T>() -> Option<&T>` / `peek_mut::<T>() -> Option<&mut T>`:
///   borrow the active value if it is of type `T`
/// - `discriminant() -> u8`: 0-indexed position of the active member in
///   the definition list
/// - `MEMBER_COUNT` / `member_count()`: number of member types
/// - `visit`, `visit_mut`, `visit_cloned`, `into_visit`: dispatch to a
///   [`Handler`](crate::Handler) set
///
/// A `From<Ti>` implementation is also generated for every member type, so
/// anything accepting `impl Into<YourVariant>` takes member values directly.
///
/// Member types must be `'static`, `Clone`, and distinct. The member list
/// is closed:
/// it is fixed when the type is defined and nothing can be added later.
/// Because the discriminant is reported as a `u8`, a variant can have at
/// most 255 members (far beyond anything a written-out list reaches).
///
/// # Examples
///
/// ```
/// use sovran_variant::variant;
///
/// variant! {
///     /// Either a count or an on/off flag.
///     #[derive(Debug, Clone, PartialEq)]
///     pub enum Setting {
///         Count(u32),
///         Flag(bool),
///     }
/// }
///
/// let mut setting = Setting::new(42u32);
/// assert!(setting.is_type::<u32>());
/// assert!(!setting.is_type::<bool>());
/// assert_eq!(setting.peek::<u32>(), Some(&42));
///
/// // Reassignment may switch the active member.
/// setting.assign(true);
/// assert!(setting.is_type::<bool>());
/// assert_eq!(setting.peek::<u32>(), None);
/// ```
///
/// There is no empty state. A caller that needs one designates a unit-like
/// member explicitly:
///
/// ```
/// use sovran_variant::variant;
///
/// variant! {
///     enum Slot {
///         Vacant(()),
///         Occupied(String),
///     }
/// }
///
/// let mut slot = Slot::new(());
/// assert!(slot.is_type::<()>());
///
/// slot.assign(String::from("taken"));
/// assert_eq!(slot.peek::<String>().map(String::as_str), Some("taken"));
/// ```
///
/// Querying a type that is not in the member list at all is not an error;
/// `is_type` answers `false` and `peek` answers `None`:
///
/// ```
/// use sovran_variant::variant;
///
/// variant! {
///     enum Setting {
///         Count(u32),
///         Flag(bool),
///     }
/// }
///
/// let setting = Setting::new(42u32);
/// assert!(!setting.is_type::<char>());
/// assert_eq!(setting.peek::<char>(), None);
/// ```
///
/// Constructing or assigning from a type outside the member list is rejected
/// when the caller is compiled:
///
/// ```compile_fail,E0277
/// use sovran_variant::variant;
///
/// variant! {
///     enum Setting {
///         Count(u32),
///         Flag(bool),
///     }
/// }
///
/// // char is not a member type.
/// let setting = Setting::new('x');
/// ```
///
/// Listing the same member type twice is rejected when the definition is
/// compiled (the generated `From` implementations collide):
///
/// ```compile_fail,E0119
/// use sovran_variant::variant;
///
/// variant! {
///     enum Numbers {
///         Small(u8),
///         Large(u64),
///         AlsoSmall(u8),
///     }
/// }
/// ```
///
/// References handed out by `peek` are borrows of the container, so they
/// cannot outlive a reassignment:
///
/// ```compile_fail,E0502
/// use sovran_variant::variant;
///
/// variant! {
///     enum Setting {
///         Count(u32),
///         Flag(bool),
///     }
/// }
///
/// let mut setting = Setting::new(42u32);
/// let stale = setting.peek::<u32>().unwrap();
/// setting.assign(true);
/// println!("{}", stale);
/// ```
#[macro_export]
macro_rules! variant {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$arm_meta:meta])*
                $arm:ident($ty:ty)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$arm_meta])*
                $arm($ty),
            )+
        }

        $(
            impl ::std::convert::From<$ty> for $name {
                fn from(value: $ty) -> Self {
                    $name::$arm(value)
                }
            }
        )+

        impl $name {
            /// Number of member types in the definition list.
            pub const MEMBER_COUNT: u8 = 0 $( + $crate::__variant_count!($arm) )+;

            /// Creates a variant holding `value`.
            ///
            /// `value` must be of one of the member types; anything else is a
            /// compile error. A variant always holds a value: there is no
            /// default construction and no empty state.
            pub fn new(value: impl ::std::convert::Into<Self>) -> Self {
                value.into()
            }

            /// Replaces the stored value, updating the active member type to
            /// match `value`.
            ///
            /// The outgoing value is dropped before the call returns, so any
            /// resource it owns is released exactly once. Returns `&mut self`
            /// so assignments can be chained.
            pub fn assign(&mut self, value: impl ::std::convert::Into<Self>) -> &mut Self {
                *self = value.into();
                self
            }

            /// Returns `true` if the active value is of type `T`.
            ///
            /// Total for any `T`: querying a type outside the member list is
            /// allowed and answers `false`.
            pub fn is_type<T: ::std::any::Any>(&self) -> bool {
                match self {
                    $( $name::$arm(value) => (value as &dyn ::std::any::Any).is::<T>(), )+
                }
            }

            /// Returns a reference to the active value if it is of type `T`,
            /// `None` otherwise.
            ///
            /// The reference borrows the container: it cannot outlive the
            /// variant or survive a reassignment.
            pub fn peek<T: ::std::any::Any>(&self) -> ::std::option::Option<&T> {
                match self {
                    $( $name::$arm(value) => (value as &dyn ::std::any::Any).downcast_ref::<T>(), )+
                }
            }

            /// Returns a mutable reference to the active value if it is of
            /// type `T`, `None` otherwise.
            pub fn peek_mut<T: ::std::any::Any>(&mut self) -> ::std::option::Option<&mut T> {
                match self {
                    $( $name::$arm(value) => (value as &mut dyn ::std::any::Any).downcast_mut::<T>(), )+
                }
            }

            /// Returns the 0-indexed position of the active member in the
            /// definition list.
            ///
            /// The index mirrors definition order and is the contract between
            /// the container and the visit dispatchers; application code
            /// normally has no reason to interpret it.
            #[allow(irrefutable_let_patterns)]
            pub fn discriminant(&self) -> u8 {
                $crate::__variant_discriminant!(self, $name, 0u8, $($arm)+)
            }

            /// Returns the number of member types in the definition list.
            pub const fn member_count() -> u8 {
                Self::MEMBER_COUNT
            }

            /// Dispatches to `handler` with a shared reference to the active
            /// value, returning the handler's result.
            ///
            /// `handler` must implement `Handler` for a shared reference to
            /// every member type, all with the same
            /// `Output`; a handler missing a member operation does not
            /// compile. Exactly one operation runs, exactly once.
            pub fn visit<'v, H, R>(&'v self, mut handler: H) -> R
            where
                $( H: $crate::Handler<&'v $ty, Output = R>, )+
            {
                match self {
                    $(
                        $name::$arm(value) =>
                            <H as $crate::Handler<&'v $ty>>::handle(&mut handler, value),
                    )+
                }
            }

            /// Dispatches to `handler` with a mutable reference to the active
            /// value, so the handler can update it in place.
            pub fn visit_mut<'v, H, R>(&'v mut self, mut handler: H) -> R
            where
                $( H: $crate::Handler<&'v mut $ty, Output = R>, )+
            {
                match self {
                    $(
                        $name::$arm(value) =>
                            <H as $crate::Handler<&'v mut $ty>>::handle(&mut handler, value),
                    )+
                }
            }

            /// Dispatches to `handler` with a copy of the active value; the
            /// variant itself is unaffected.
            ///
            /// Only the active member is cloned. The enum itself does not
            /// need to derive `Clone`.
            pub fn visit_cloned<H, R>(&self, mut handler: H) -> R
            where
                $( H: $crate::Handler<$ty, Output = R>, )+
            {
                match self {
                    $(
                        $name::$arm(value) => <H as $crate::Handler<$ty>>::handle(
                            &mut handler,
                            ::std::clone::Clone::clone(value),
                        ),
                    )+
                }
            }

            /// Consumes the variant, dispatching to `handler` with the active
            /// value by value.
            pub fn into_visit<H, R>(self, mut handler: H) -> R
            where
                $( H: $crate::Handler<$ty, Output = R>, )+
            {
                match self {
                    $(
                        $name::$arm(value) =>
                            <H as $crate::Handler<$ty>>::handle(&mut handler, value),
                    )+
                }
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __variant_count {
    ($arm:ident) => {
        1u8
    };
}

// Expands to an if-let chain over the member list, assigning each arm its
// definition-order index. The terminal branch cannot be reached while the
// enum's own tag is the discriminant; if it ever is, that is an internal
// invariant violation and the process aborts rather than guessing.
#[doc(hidden)]
#[macro_export]
macro_rules! __variant_discriminant {
    ($value:expr, $name:ident, $idx:expr,) => {
        ::std::unreachable!("variant tag does not identify a member type")
    };
    ($value:expr, $name:ident, $idx:expr, $arm:ident $($rest:ident)*) => {
        if let $name::$arm(_) = $value {
            $idx
        } else {
            $crate::__variant_discriminant!($value, $name, $idx + 1u8, $($rest)*)
        }
    };
}
