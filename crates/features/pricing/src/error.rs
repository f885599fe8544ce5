use std::borrow::Cow;

/// Errors reported by the validated discount entry point.
#[kata_derive::kata_error]
pub enum PricingError {
    /// The price is `NaN` or infinite.
    #[error("Invalid price{}: {message}", format_context(.context))]
    InvalidValue { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The price is below zero.
    #[error("Negative price{}: {message}", format_context(.context))]
    NegativeValue { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal pricing error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
