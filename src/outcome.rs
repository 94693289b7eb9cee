//! Tri-state outcome type and its chain operations.
//!
//! An [`Outcome`] records how an operation ended: [`Success`]( Outcome::Success )
//! with a value, [`Failure`]( Outcome::Failure ) with nothing, or
//! [`Error`]( Outcome::Error ) with a captured cause. Chain operations never
//! mutate the receiver - each one returns the receiver unchanged or a new
//! outcome, so long chains stay free of manual error handling at every step.

use pipe_trait::Pipe ;
use thiserror::Error ;



/// The boxed failure cause held by an [`Error`]( Outcome::Error ) outcome.
///
/// Any error type converts into a `Cause`, as do plain message strings.
/// The cause carries a message through `Display` and optionally a wrapped
/// lower-level error through `source()`.
pub type Cause = Box<dyn std::error::Error + Send + Sync>;

/// Panic payload carrying the cause of an [`Error`]( Outcome::Error ) outcome
/// whose value was extracted through [`Outcome::get`].
///
/// Catch it with [`std::panic::catch_unwind`] and downcast the payload to
/// recover the original cause.
#[derive( Debug, Error )]
#[error( "extracted an error outcome: {0}" )]
pub struct Raised( pub Cause );

/// How an operation ended: a value, a conscious refusal, or a captured error.
///
/// `Failure` and `Error` are deliberately distinct. A `Failure` is an expected
/// "no answer" outcome - no matching record, user declined - and carries
/// nothing. An `Error` is an unexpected condition and always carries its
/// cause. Callers that conflate the two lose the ability to recover from one
/// without handling the other.
///
/// Outcomes are immutable once constructed. The only variant transitions the
/// chain operations expose are `Success` to `Error` and `Failure` to
/// `Success` or `Error`, both driven by a handler that itself fails.
///
/// # Example
///
/// ```
/// use outcome::Outcome ;
///
/// fn lookup( id: u32 ) -> Outcome<&'static str> {
/// 	match id {
/// 		1 => Outcome::success( "alice" ),
/// 		_ => Outcome::failure(),
/// 	}
/// }
///
/// let greeting = lookup( 1 )
/// 	.then(| name | Ok::<_, std::io::Error>( format!( "hello, {name}" )))
/// 	.get();
/// assert_eq!( greeting.as_deref(), Some( "hello, alice" ));
/// ```
#[must_use = "chain operations return a new outcome instead of mutating the receiver"]
#[derive( Debug )]
pub enum Outcome<T> {
    /// Operation completed normally with a value.
    Success( T ),
    /// Operation consciously declined to produce a value.
    Failure,
    /// Operation raised an error; holds the captured cause.
    Error( Cause ),
}

impl<T> Outcome<T> {

    /// Creates a `Success` outcome holding `value`.
    #[inline] pub fn success( value: T ) -> Self { Self::Success( value )}

    /// Creates a valueless `Failure` outcome.
    #[inline] pub fn failure() -> Self { Self::Failure }

    /// Creates an `Error` outcome wrapping `cause`.
    #[inline] pub fn error( cause: impl Into<Cause> ) -> Self { Self::Error( cause.into() )}

    /// Runs `operation` and captures how it ended.
    ///
    /// A normal completion becomes `Success`; an `Err` becomes `Error`
    /// wrapping the returned cause. This is the one bridge between
    /// `Result`-signaling code and outcome-based code - the error never
    /// propagates past this boundary.
    ///
    /// ```
    /// use outcome::Outcome ;
    ///
    /// let parsed = Outcome::capture(|| "17".parse::<i32>());
    /// assert_eq!( parsed.get(), Some( 17 ));
    ///
    /// let parsed = Outcome::capture(|| "seventeen".parse::<i32>());
    /// assert!( parsed.is_error() );
    /// ```
    pub fn capture<E>( operation: impl FnOnce() -> Result<T, E> ) -> Self
    where
        E: Into<Cause>,
    {
        operation().pipe(| result | match result {
            Ok( value ) => Self::Success( value ),
            Err( cause ) => Self::Error( cause.into() ),
        })
    }

    /// Extracts the held value, consuming the outcome.
    ///
    /// Returns `Some` for `Success` and `None` for `Failure`.
    ///
    /// # Panics
    /// An `Error` outcome panics with a [`Raised`] payload wrapping the held
    /// cause. The cause is never silently dropped; callers that want it on
    /// the `Result` channel instead should use [`escalate`]( Self::escalate ).
    pub fn get( self ) -> Option<T> {
        match self {
            Self::Success( value ) => Some( value ),
            Self::Failure => None,
            Self::Error( cause ) => std::panic::panic_any( Raised( cause )),
        }
    }

    /// Runs `operation` on the held value when this is a `Success`.
    ///
    /// The operation is invoked for its side effect and the receiver is
    /// returned unchanged - unless the operation returns `Err`, in which
    /// case the chain downgrades to an `Error` outcome wrapping that cause.
    /// `Failure` and `Error` receivers pass through untouched.
    pub fn on_success<E>( self, operation: impl FnOnce( &T ) -> Result<(), E> ) -> Self
    where
        E: Into<Cause>,
    {
        match self {
            Self::Success( value ) => match operation( &value ) {
                Ok(()) => Self::Success( value ),
                Err( cause ) => Self::Error( cause.into() ),
            },
            other => other,
        }
    }

    /// Runs `operation` to produce a replacement value when this is a `Failure`.
    ///
    /// The replacement is captured with the same rules as
    /// [`capture`]( Self::capture ): a normal completion becomes `Success`,
    /// an `Err` becomes `Error`. `Success` and `Error` receivers pass
    /// through untouched.
    pub fn on_failure<E>( self, operation: impl FnOnce() -> Result<T, E> ) -> Self
    where
        E: Into<Cause>,
    {
        match self {
            Self::Failure => Self::capture( operation ),
            other => other,
        }
    }

    /// Runs `operation` on the held cause when this is an `Error`.
    ///
    /// The receiver is always returned unchanged. The consumer is infallible
    /// by signature: the receiver is already in its terminal error state, so
    /// a fault inside the handler is the handler's own and propagates as a
    /// panic rather than being captured.
    pub fn on_error( self, operation: impl FnOnce( &Cause )) -> Self {
        if let Self::Error( cause ) = &self { operation( cause ); }
        self
    }

    /// Surfaces the held cause through the `Result` channel.
    ///
    /// `Success` and `Failure` receivers come back untouched inside `Ok`,
    /// so a chain can continue past this point with `?`:
    ///
    /// ```
    /// use outcome::{ Cause, Outcome };
    ///
    /// fn chain() -> Result<Option<i32>, Cause> {
    /// 	let value = Outcome::success( 7 )
    /// 		.escalate()?
    /// 		.get();
    /// 	Ok( value )
    /// }
    /// assert_eq!( chain().unwrap(), Some( 7 ));
    /// ```
    ///
    /// # Errors
    /// Returns the held cause, propagated rather than re-wrapped, when this
    /// is an `Error`.
    pub fn escalate( self ) -> Result<Self, Cause> {
        match self {
            Self::Error( cause ) => Err( cause ),
            other => Ok( other ),
        }
    }

    /// Transforms the held value when this is a `Success`.
    ///
    /// The call is captured with the same rules as [`capture`]( Self::capture ).
    /// `Failure` and `Error` receivers propagate their shape into the new
    /// outcome type without invoking `operation`.
    pub fn then<R, E>( self, operation: impl FnOnce( T ) -> Result<R, E> ) -> Outcome<R>
    where
        E: Into<Cause>,
    {
        match self {
            Self::Success( value ) => Outcome::capture(|| operation( value )),
            Self::Failure => Outcome::Failure,
            Self::Error( cause ) => Outcome::Error( cause ),
        }
    }

    /// Returns `true` when this is a `Success`.
    #[inline] pub fn is_success( &self ) -> bool { matches!( self, Self::Success( _ ))}

    /// Returns `true` when this is a `Failure`.
    #[inline] pub fn is_failure( &self ) -> bool { matches!( self, Self::Failure )}

    /// Returns `true` when this is an `Error`.
    #[inline] pub fn is_error( &self ) -> bool { matches!( self, Self::Error( _ ))}

}
