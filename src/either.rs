//! Two-sided value type for operations with two legitimate output shapes.
//!
//! Unlike an [`Outcome`]( crate::Outcome ), an [`Either`] carries no
//! success/failure reading: both sides are equally valid results,
//! differentiated only by the caller's chosen convention. There is no
//! error-capturing constructor here - an either is not outcome-oriented,
//! so catching faults while building one is the caller's business.

/// One of two possible value shapes.
///
/// Exactly one side holds a value, fixed at construction. Extracting a
/// unified value goes through [`either`]( Self::either ), which forces the
/// caller to handle both shapes; the `if_*` operations peek at one side for
/// a side effect and return the receiver for chaining in either order.
///
/// # Example
///
/// ```
/// use outcome::Either ;
///
/// fn classify( raw: &str ) -> Either<i64, String> {
/// 	match raw.parse() {
/// 		Ok( number ) => Either::left( number ),
/// 		Err( _ ) => Either::right( raw.to_string() ),
/// 	}
/// }
///
/// let rendered = classify( "42" ).either( | n | format!( "number {n}" ), | s | s );
/// assert_eq!( rendered, "number 42" );
/// ```
#[must_use = "chain operations return the either instead of mutating the receiver"]
#[derive( Debug, Clone, PartialEq, Eq )]
pub enum Either<L, R> {
    /// Holds the left-shaped value.
    Left( L ),
    /// Holds the right-shaped value.
    Right( R ),
}

impl<L, R> Either<L, R> {

    /// Creates an either holding a left-shaped value.
    #[inline] pub fn left( value: L ) -> Self { Self::Left( value )}

    /// Creates an either holding a right-shaped value.
    #[inline] pub fn right( value: R ) -> Self { Self::Right( value )}

    /// Collapses both shapes into a single value.
    ///
    /// Dispatches to exactly one of the two functions based on the held
    /// side and returns its result. This is the only way to extract a
    /// unified value from an either.
    pub fn either<T>(
        self,
        if_left: impl FnOnce( L ) -> T,
        if_right: impl FnOnce( R ) -> T,
    ) -> T {
        match self {
            Self::Left( value ) => if_left( value ),
            Self::Right( value ) => if_right( value ),
        }
    }

    /// Runs `consumer` on the held value when it is left-shaped.
    ///
    /// Returns the receiver unchanged for chaining.
    pub fn if_left( self, consumer: impl FnOnce( &L )) -> Self {
        if let Self::Left( value ) = &self { consumer( value ); }
        self
    }

    /// Runs `consumer` on the held value when it is right-shaped.
    ///
    /// Returns the receiver unchanged for chaining.
    pub fn if_right( self, consumer: impl FnOnce( &R )) -> Self {
        if let Self::Right( value ) = &self { consumer( value ); }
        self
    }

    /// Returns `true` when the held value is left-shaped.
    #[inline] pub fn is_left( &self ) -> bool { matches!( self, Self::Left( _ ))}

    /// Returns `true` when the held value is right-shaped.
    #[inline] pub fn is_right( &self ) -> bool { matches!( self, Self::Right( _ ))}

    /// Consumes the either, returning the left-shaped value if held.
    pub fn left_value( self ) -> Option<L> {
        match self {
            Self::Left( value ) => Some( value ),
            Self::Right( _ ) => None,
        }
    }

    /// Consumes the either, returning the right-shaped value if held.
    pub fn right_value( self ) -> Option<R> {
        match self {
            Self::Left( _ ) => None,
            Self::Right( value ) => Some( value ),
        }
    }

}
