use std::borrow::Cow;

/// A specialized [`KinematicsError`] enum of this crate.
#[kata_derive::kata_error]
pub enum KinematicsError {
    /// A scenario field is non-finite, negative, or the mass is not strictly positive.
    #[error("Invalid scenario{}: {message}", format_context(.context))]
    InvalidScenario { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The elapsed time is non-finite or negative.
    #[error("Invalid time{}: {message}", format_context(.context))]
    InvalidTime { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal kinematics error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
