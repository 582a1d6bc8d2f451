//! Zero-size capability tokens gating privileged constructors
//!
//! Some conversions between handle kinds (for example recovering the window
//! a renderer draws into) must only be reachable from the wrapper code that
//! actually owns the native query call. Instead of widening those
//! constructors to `pub` and documenting "do not call this", the privileged
//! entry points take a [`Token`] by value as their final parameter. The only
//! way to mint a token is the crate-private [`Token::new`], so outside code
//! simply cannot name an argument for that parameter: misuse is a compile
//! failure, not a runtime check.
//!
//! A token has no runtime representation. Passing one is free.

use std::marker::PhantomData;

pub(crate) mod sealed {
    /// Marker restricting [`super::TokenOwner`] to in-crate types.
    pub trait Sealed {}
}

/// Types allowed to act as the authority behind a [`Token`]
///
/// Implemented only by this crate's resource kinds; the trait is sealed so
/// downstream code cannot introduce new authorities.
pub trait TokenOwner: sealed::Sealed {}

/// Proof that the caller is (or was handed authority by) the owner type `O`
///
/// ```compile_fail
/// use sdlcore::capability::Token;
/// use sdlcore::handle::kind::Renderer;
///
/// // The constructor is crate-private; this does not compile.
/// let _token: Token<Renderer> = Token::new();
/// ```
pub struct Token<O: TokenOwner> {
    _owner: PhantomData<fn() -> O>,
}

impl<O: TokenOwner> Token<O> {
    /// Mint a token. Only reachable from inside the crate.
    pub(crate) const fn new() -> Self {
        Self { _owner: PhantomData }
    }
}

impl<O: TokenOwner> std::fmt::Debug for Token<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Token")
    }
}
