use tk_core::errors::*;

err_impl! {TknError,
    #[error("canceled deleting {0}")]
    DeleteCanceled(String),

    #[error("namespace {0} doesn't exist")]
    NamespaceNotFound(String),
}
