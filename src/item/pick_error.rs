use thiserror::Error;

/*
Bad user input (unparseable or out of range selection) never becomes an error - the menu
retries it locally. Everything here is a fault of the caller or the environment, and
bubbles out of the navigation loop unmodified.
 */
#[derive(Debug, Error)]
pub enum PickError {
    // Somebody wired an item into a menu tree and asked the tree for a different type.
    #[error("result type mismatch: caller expected {expected}, item produced {found}")]
    TypeMismatch { expected: &'static str, found: &'static str },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
