use thiserror::Error;

pub type Result<T> = std::result::Result<T, CutsetError>;

#[derive(Error, Debug)]
pub enum CutsetError {
    /// Cutsets of size zero are meaningless, every search needs k >= 1
    #[error("cutset size must be at least 1, got {0}")]
    InvalidCutsetSize(usize),

    #[error("batch size must be at least 1")]
    InvalidBatchSize,

    /// An explicit traversal start that was never added to the graph
    #[error("unknown start node {0}")]
    UnknownStartNode(String),

    #[error("line {line}: expected `<node>` or `<node> <node>`, got {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("edge probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("failed to read graph: {0}")]
    Io(#[from] std::io::Error),
}
