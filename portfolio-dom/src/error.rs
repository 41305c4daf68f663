use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug)]
pub enum Error {
    /// Content or config failed to load.
    Content(portfolio_content::Error),
    /// A DOM or framework call failed.
    BackendError { msg: String },
}

impl Error {
    pub(crate) fn backend(msg: impl Into<String>) -> Self {
        Error::BackendError { msg: msg.into() }
    }

    pub(crate) fn from_js(err: JsValue) -> Self {
        Error::BackendError {
            msg: js_error_message(&err),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Content(err) => {
                write!(f, "{}", err)?;
            }
            Error::BackendError { msg } => {
                write!(f, "Backend error: {}", msg)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

impl From<portfolio_content::Error> for Error {
    fn from(err: portfolio_content::Error) -> Self {
        Error::Content(err)
    }
}

impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

pub(crate) fn js_error_message(err: &JsValue) -> String {
    if let Some(err) = err.dyn_ref::<js_sys::Error>() {
        err.message().into()
    } else if let Some(s) = err.as_string() {
        s
    } else {
        "(JavaScript Error)".into()
    }
}
