use kata_derive::kata_error;

#[kata_error]
pub enum DemoError {
    #[error("Internal error: {message}")]
    Internal { message: String, context: Option<String> },
}

fn main() {}
